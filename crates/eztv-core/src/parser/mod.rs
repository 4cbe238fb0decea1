//! HTML parsers for EZTV pages
//!
//! This module contains parsers for extracting data from EZTV HTML pages:
//! - `ident`: Episode identifier and quality tokens in release labels
//! - `listing`: Episode rows on a show page, correlated into an index
//! - `show`: Show directory and show page header

pub mod ident;
pub mod listing;
pub mod show;

// Re-export main parsing functions
pub use ident::{episode_key, extract_episode_id, extract_quality, quality_or_default};
pub use listing::{correlate, parse_episode_listing, row_anchors, ListingAnchor};
pub use show::{parse_show_detail, parse_show_list};
