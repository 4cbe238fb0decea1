//! Main EZTV Scraper API
//!
//! This module provides the high-level API for scraping EZTV.
//! It combines the HTTP client with parsers to provide a simple interface
//! for searching shows and resolving a show's episode listing.

use crate::client::EztvClient;
use crate::error::{EztvError, Result};
use crate::parser::{parse_show_detail, parse_show_list};
use crate::types::{EpisodeDetail, ShowDetail, ShowSummary};

/// Path of the show directory page
const SHOW_LIST_PATH: &str = "/showlist/";

/// Main scraper API for EZTV
///
/// Every query performs one document fetch followed by one in-memory scan.
/// Queries share no mutable state and may run concurrently.
///
/// # Example
/// ```no_run
/// use eztv_core::EztvScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = EztvScraper::new()?;
///
///     let shows = scraper.search_show("Lost").await?;
///     println!("Found {} shows", shows.len());
///
///     Ok(())
/// }
/// ```
pub struct EztvScraper {
    client: EztvClient,
}

impl EztvScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    ///
    /// # Example
    /// ```
    /// use eztv_core::EztvScraper;
    ///
    /// let scraper = EztvScraper::new().expect("Failed to create scraper");
    /// ```
    pub fn new() -> Result<Self> {
        let client = EztvClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with a custom client.
    ///
    /// This is useful for testing or when you need custom client configuration.
    ///
    /// # Arguments
    /// * `client` - Pre-configured EztvClient instance
    pub fn with_client(client: EztvClient) -> Self {
        Self { client }
    }

    /// Find shows whose directory title contains `keyword`.
    ///
    /// The match is a literal, case-sensitive substring test.
    ///
    /// # Returns
    /// * `Ok(Vec<ShowSummary>)` with every matching show
    /// * `Err(EztvError::InvalidArgument)` if keyword is empty (nothing is fetched)
    /// * `Err(EztvError::Fetch)` if the directory cannot be retrieved
    /// * `Err(EztvError::EmptyResponse)` if no show matches
    /// * `Err(EztvError::ShowNotFound)` if matching produced no summaries
    ///
    /// # Example
    /// ```no_run
    /// use eztv_core::EztvScraper;
    ///
    /// # async fn example() -> Result<(), eztv_core::EztvError> {
    /// let scraper = EztvScraper::new()?;
    /// for show in scraper.search_show("Breaking").await? {
    ///     println!("{} -> {}", show.title, show.url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_show(&self, keyword: &str) -> Result<Vec<ShowSummary>> {
        if keyword.is_empty() {
            return Err(EztvError::InvalidArgument(
                "search keyword cannot be empty".to_string(),
            ));
        }

        let html = self.client.fetch(SHOW_LIST_PATH).await?;
        parse_show_list(&html, keyword)
    }

    /// Resolve a show page into its title, cover and episode index.
    ///
    /// # Arguments
    /// * `path` - Show path relative to the site root (e.g. "/shows/449/lost/")
    ///
    /// # Returns
    /// * `Ok(ShowDetail)`; title and cover are empty if the page lacks them
    /// * `Err(EztvError::MissingArgument)` if path is empty (nothing is fetched)
    /// * `Err(EztvError::Fetch)` if the page cannot be retrieved
    ///
    /// # Example
    /// ```no_run
    /// use eztv_core::EztvScraper;
    ///
    /// # async fn example() -> Result<(), eztv_core::EztvError> {
    /// let scraper = EztvScraper::new()?;
    /// let show = scraper.get_show_details("/shows/449/lost/").await?;
    /// if let Some(hd) = show.episodes.get("S01E01", "720p") {
    ///     println!("{}", hd.magnet);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_show_details(&self, path: &str) -> Result<ShowDetail> {
        if path.is_empty() {
            return Err(EztvError::MissingArgument("show path".to_string()));
        }

        let html = self.client.fetch(path).await?;
        parse_show_detail(&html, path)
    }

    /// Episode detail lookup.
    ///
    /// Not supported yet: always returns `EztvError::Unimplemented`, so callers
    /// can tell "unsupported" apart from "not found". Nothing is fetched.
    pub async fn get_episode_details(&self, path: &str) -> Result<EpisodeDetail> {
        tracing::debug!(path, "episode details requested");
        Err(EztvError::Unimplemented("episode details"))
    }
}
