//! # sessionfeed-core
//!
//! Reads a conference session feed and turns it into reports.
//!
//! ## Pipeline
//!
//! 1. [`SessionFeed::load`] reads `response.sessions` from a JSON file
//! 2. [`normalize`] validates each record into a [`Session`], dropping the rest
//! 3. [`render_sessions`] or [`render_info`] formats the result
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sessionfeed_core::{normalize, render_info, NormalizeOptions, SessionFeed, Summary};
//! use std::path::Path;
//!
//! let feed = SessionFeed::load(Path::new("sessions.json"))?;
//! let sessions = normalize(feed.records(), &NormalizeOptions::default());
//! println!("{}", render_info(&Summary::from_feed(&sessions, &feed)));
//! ```

pub mod config;
pub mod error;
pub mod feed;
pub mod normalize;
pub mod report;
pub mod types;

pub use config::FeedConfig;
pub use error::FeedError;
pub use feed::SessionFeed;
pub use normalize::{escape, normalize, normalize_record};
pub use report::{render_info, render_sessions, Summary};
pub use types::{NormalizeOptions, Record, Rejection, Session, EXCLUDED_TYPE, LINE_BREAK};
