//! Data types for EZTV Scraper
//!
//! This module contains all the core data structures used throughout the library.
//! All types implement Serialize and Deserialize for JSON output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Quality label used when a label carries no resolution token
pub const DEFAULT_QUALITY: &str = "hdtv";

/// Show entry from the EZTV show directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSummary {
    /// Anchor text as it appears in the directory
    pub title: String,
    /// Relative URL of the show page (empty if the anchor had no href)
    pub url: String,
}

/// A resolved show page with its episode listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowDetail {
    /// Show title, empty if the page did not expose one
    pub title: String,
    /// Path the show was requested with
    pub url: String,
    /// Cover image URL, empty if the page did not expose one
    pub cover: String,
    /// Episodes keyed by identifier (SxxExx) then quality (1080p, 720p, hdtv)
    pub episodes: EpisodeIndex,
}

/// One downloadable rendition of one episode
///
/// Every field may be empty: a variant is created as soon as either its
/// listing link or its magnet link is seen, and completed when the other
/// half turns up later in the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeVariant {
    /// Release label from the listing link
    pub title: String,
    /// Relative URL of the episode page
    pub url: String,
    /// Magnet URI
    pub magnet: String,
}

impl EpisodeVariant {
    /// Whether both the listing title and page URL are known
    pub fn has_listing(&self) -> bool {
        !self.title.is_empty() && !self.url.is_empty()
    }
}

/// Full metadata for a single episode.
///
/// No page is scraped for this yet; see `EztvScraper::get_episode_details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeDetail {
    /// Release title
    pub title: String,
    /// Relative URL of the episode page
    pub url: String,
    /// Episode synopsis
    pub description: String,
    /// Cover image URL
    pub cover: String,
    /// Magnet URI
    pub magnet: String,
    /// Seed/leech ratio
    pub ratio: f32,
}

/// Two-level index of episode variants: identifier -> quality -> variant.
///
/// The pair (identifier, quality) addresses at most one variant. Both keys
/// come from free text and may be empty strings; an empty identifier is an
/// ordinary key, not a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeIndex {
    episodes: BTreeMap<String, BTreeMap<String, EpisodeVariant>>,
}

impl EpisodeIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the variant stored at (identifier, quality)
    pub fn get(&self, episode_id: &str, quality: &str) -> Option<&EpisodeVariant> {
        self.episodes.get(episode_id)?.get(quality)
    }

    /// Mutable lookup of the variant stored at (identifier, quality)
    pub fn get_mut(&mut self, episode_id: &str, quality: &str) -> Option<&mut EpisodeVariant> {
        self.episodes.get_mut(episode_id)?.get_mut(quality)
    }

    /// All qualities recorded for one episode identifier
    pub fn qualities(&self, episode_id: &str) -> Option<&BTreeMap<String, EpisodeVariant>> {
        self.episodes.get(episode_id)
    }

    /// Episode identifiers present in the index, in sorted order
    pub fn episode_ids(&self) -> impl Iterator<Item = &str> {
        self.episodes.keys().map(String::as_str)
    }

    /// Iterate over every `(identifier, quality, variant)` triple
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &EpisodeVariant)> {
        self.episodes.iter().flat_map(|(episode_id, qualities)| {
            qualities
                .iter()
                .map(move |(quality, variant)| (episode_id.as_str(), quality.as_str(), variant))
        })
    }

    /// Number of variants across all episodes
    pub fn len(&self) -> usize {
        self.episodes.values().map(BTreeMap::len).sum()
    }

    /// Whether the index holds no variants
    pub fn is_empty(&self) -> bool {
        self.episodes.values().all(BTreeMap::is_empty)
    }

    /// Record the listing half of a variant.
    ///
    /// Overwrites title and url at (identifier, quality), keeping any magnet
    /// that an earlier magnet anchor already stored there.
    pub fn record_link(&mut self, episode_id: &str, quality: &str, title: String, url: String) {
        let variant = self
            .episodes
            .entry(episode_id.to_string())
            .or_default()
            .entry(quality.to_string())
            .or_default();
        variant.title = title;
        variant.url = url;
    }

    /// Record the magnet half of a variant.
    ///
    /// Merges into the existing variant only when it already has both a
    /// title and a url. In every other case the slot is replaced by a fresh
    /// variant holding nothing but the magnet, dropping any partial state.
    pub fn record_magnet(&mut self, episode_id: &str, quality: &str, magnet: String) {
        if let Some(variant) = self
            .get_mut(episode_id, quality)
            .filter(|variant| variant.has_listing())
        {
            variant.magnet = magnet;
            return;
        }

        self.episodes.entry(episode_id.to_string()).or_default().insert(
            quality.to_string(),
            EpisodeVariant {
                magnet,
                ..EpisodeVariant::default()
            },
        );
    }
}
