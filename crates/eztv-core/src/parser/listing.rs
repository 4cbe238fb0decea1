//! Episode listing correlation for EZTV show pages.
//!
//! A show page lists each release as a table row holding a link to the
//! episode page and, somewhere nearby, a bare magnet anchor. Nothing in the
//! markup pairs the two. The only join key is the release label: the link's
//! visible text and the magnet anchor's `title` attribute carry the same
//! `SxxExx` and resolution tokens, so both are reduced to an
//! (identifier, quality) key and merged into one [`EpisodeVariant`] slot.
//!
//! [`EpisodeVariant`]: crate::types::EpisodeVariant

use scraper::{ElementRef, Html, Selector};

use crate::error::{EztvError, Result};
use crate::types::EpisodeIndex;

use super::ident::episode_key;

/// Rows holding one release each
pub const EPISODE_ROW_SELECTOR: &str = "tr.forum_header_border";

/// Class marking a magnet anchor
const MAGNET_CLASS: &str = "magnet";

/// An anchor from an episode row, classified by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingAnchor {
    /// Anchor with visible text linking to the episode page
    EpisodeLink { label: String, href: String },
    /// Text-less anchor carrying a magnet URI; labelled by its `title`
    Magnet { label: String, href: String },
}

impl ListingAnchor {
    /// Classify an anchor element.
    ///
    /// Returns `None` for anchors that play neither role, and for anchors of
    /// either role missing an attribute they need.
    pub fn classify(anchor: &ElementRef) -> Option<Self> {
        let text = anchor.text().collect::<String>();
        let element = anchor.value();

        if !text.is_empty() {
            let href = element.attr("href")?;
            return Some(ListingAnchor::EpisodeLink {
                label: text,
                href: href.to_string(),
            });
        }

        if element.classes().any(|class| class == MAGNET_CLASS) {
            let label = element.attr("title")?;
            let href = element.attr("href")?;
            return Some(ListingAnchor::Magnet {
                label: label.to_string(),
                href: href.to_string(),
            });
        }

        None
    }
}

/// Fold classified anchors, in document order, into an episode index.
///
/// Link anchors fill title and url at their key, keeping any magnet already
/// there. Magnet anchors merge into a slot only once it has both title and
/// url; otherwise they replace the slot with a magnet-only variant.
pub fn correlate<I>(anchors: I) -> EpisodeIndex
where
    I: IntoIterator<Item = ListingAnchor>,
{
    let mut index = EpisodeIndex::new();

    for anchor in anchors {
        match anchor {
            ListingAnchor::EpisodeLink { label, href } => {
                let (episode_id, quality) = episode_key(&label);
                tracing::trace!(episode_id, quality, "episode link");
                let (episode_id, quality) = (episode_id.to_string(), quality.to_string());
                index.record_link(&episode_id, &quality, label, href);
            }
            ListingAnchor::Magnet { label, href } => {
                let (episode_id, quality) = episode_key(&label);
                tracing::trace!(episode_id, quality, "magnet link");
                index.record_magnet(episode_id, quality, href);
            }
        }
    }

    index
}

/// Classified anchors of the given rows, in document order.
///
/// Anchors are collected from below each row's child elements; a child
/// that is itself an anchor is not counted.
pub fn row_anchors<'a, I>(rows: I) -> Vec<ListingAnchor>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    rows.into_iter()
        .flat_map(|row| row.children().filter_map(ElementRef::wrap))
        .flat_map(|child| child.descendants().skip(1).filter_map(ElementRef::wrap))
        .filter(|element| element.value().name() == "a")
        .filter_map(|anchor| ListingAnchor::classify(&anchor))
        .collect()
}

/// Build the episode index from a parsed show page.
pub fn parse_episode_listing(document: &Html) -> Result<EpisodeIndex> {
    let row_selector = Selector::parse(EPISODE_ROW_SELECTOR)
        .map_err(|e| EztvError::Selector(format!("{:?}", e)))?;

    let anchors = row_anchors(document.select(&row_selector));
    let index = correlate(anchors);
    tracing::debug!(variants = index.len(), "correlated episode listing");

    Ok(index)
}
