//! EZTV Scraper Core Library
//!
//! This crate provides the core scraping functionality for the EZTV
//! torrent index.
//!
//! # Features
//! - Search the show directory by title substring
//! - Resolve a show page into episodes keyed by `SxxExx` and quality
//! - Pair each episode listing with its magnet link

pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, EztvClient};
pub use error::{ErrorKind, EztvError, Result};
pub use crate::scraper::EztvScraper;
pub use types::{EpisodeDetail, EpisodeIndex, EpisodeVariant, ShowDetail, ShowSummary};
