use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

use sessionfeed_core::{
    normalize, render_info, render_sessions, FeedConfig, SessionFeed, Summary,
};
use sessionfeed_logging::{init_tracing, LogFormat};

const USAGE: &str = "\nUsage: sessionfeed path [mode]\n\nValid modes:\n   - sessions\n   - info";

#[derive(Parser, Debug)]
#[command(
    name = "sessionfeed",
    about = "Summarize or list conference sessions from a JSON feed",
    version
)]
struct Cli {
    /// Session feed JSON file
    #[arg(allow_hyphen_values = true)]
    path: PathBuf,

    /// What to print
    #[arg(value_enum, default_value = "info")]
    mode: Mode,

    /// TOML file overriding the line break and excluded record type
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tracing filter directive
    #[arg(long, default_value = sessionfeed_logging::DEFAULT_LEVEL)]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormatChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Session count, tracks and types
    Info,
    /// Every accepted session, sorted by number
    Sessions,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatChoice {
    Pretty,
    Json,
    Compact,
}

impl From<LogFormatChoice> for LogFormat {
    fn from(choice: LogFormatChoice) -> Self {
        match choice {
            LogFormatChoice::Pretty => LogFormat::Pretty,
            LogFormatChoice::Json => LogFormat::Json,
            LogFormatChoice::Compact => LogFormat::Compact,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        // Missing path, unknown mode or extra arguments: usage, exit 0.
        Err(_) => {
            println!("{}", USAGE);
            return;
        }
    };

    init_tracing(&cli.log_level, cli.log_format.into());

    if let Err(e) = run(&cli) {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => FeedConfig::load(path)?,
        None => FeedConfig::default(),
    };

    let feed = SessionFeed::load(&cli.path)?;
    let sessions = normalize(feed.records(), &config.normalize_options());
    tracing::debug!(
        path = %feed.path().display(),
        mode = ?cli.mode,
        sessions = sessions.len(),
        "Rendering report"
    );

    match cli.mode {
        Mode::Sessions => println!("{}", render_sessions(&sessions, &config.line_break)),
        Mode::Info => println!("{}", render_info(&Summary::from_feed(&sessions, &feed))),
    }

    Ok(())
}
