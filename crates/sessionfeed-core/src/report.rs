use std::collections::BTreeSet;

use crate::feed::SessionFeed;
use crate::types::Session;

/// Counts and category sets for `info` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub session_count: usize,
    pub tracks: BTreeSet<String>,
    pub types: BTreeSet<String>,
}

impl Summary {
    /// Tracks come from accepted sessions, types from the given set.
    pub fn new(sessions: &[Session], types: BTreeSet<String>) -> Self {
        let tracks = sessions.iter().map(|s| s.track.clone()).collect();
        Self {
            session_count: sessions.len(),
            tracks,
            types,
        }
    }

    /// Types are taken from every record in the feed, not just accepted ones.
    pub fn from_feed(sessions: &[Session], feed: &SessionFeed) -> Self {
        Self::new(sessions, feed.types())
    }
}

/// Sessions sorted ascending by number (stable), each rendered as a block,
/// blocks joined by `line_break`.
pub fn render_sessions(sessions: &[Session], line_break: &str) -> String {
    let mut sorted: Vec<&Session> = sessions.iter().collect();
    sorted.sort_by_key(|s| s.number);
    sorted
        .iter()
        .map(|s| s.render(line_break))
        .collect::<Vec<_>>()
        .join(line_break)
}

pub fn render_info(summary: &Summary) -> String {
    let tracks: Vec<&str> = summary.tracks.iter().map(String::as_str).collect();
    let types: Vec<&str> = summary.types.iter().map(String::as_str).collect();
    format!(
        "{} sessions\nTracks: {}\nTypes: {}",
        summary.session_count,
        tracks.join(", "),
        types.join(", ")
    )
}
