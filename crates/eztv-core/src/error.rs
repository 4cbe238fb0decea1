//! Error types for EZTV Scraper
//!
//! This module defines all error types used throughout the library.
//! EztvError implements Serialize so errors can cross a JSON boundary.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for EZTV Scraper operations
#[derive(Error, Debug)]
pub enum EztvError {
    /// Caller supplied an unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Caller omitted a required argument
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// HTTP request failed or returned an error status
    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The page was fetched but held nothing matching the query
    #[error("Empty response from server")]
    EmptyResponse,

    /// No show matched the query
    #[error("Show not found: {0}")]
    ShowNotFound(String),

    /// No episode matched the query
    #[error("Episode not found: {0}")]
    EpisodeNotFound(String),

    /// Operation exists but has no implementation yet
    #[error("Not implemented: {0}")]
    Unimplemented(&'static str),

    /// A built-in CSS selector failed to parse
    #[error("Invalid selector: {0}")]
    Selector(String),
}

/// Category of an [`EztvError`], independent of its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    InvalidArgument,
    MissingArgument,
    Fetch,
    EmptyResponse,
    ShowNotFound,
    EpisodeNotFound,
    Unimplemented,
    Selector,
}

impl EztvError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            EztvError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            EztvError::MissingArgument(_) => ErrorKind::MissingArgument,
            EztvError::Fetch(_) => ErrorKind::Fetch,
            EztvError::EmptyResponse => ErrorKind::EmptyResponse,
            EztvError::ShowNotFound(_) => ErrorKind::ShowNotFound,
            EztvError::EpisodeNotFound(_) => ErrorKind::EpisodeNotFound,
            EztvError::Unimplemented(_) => ErrorKind::Unimplemented,
            EztvError::Selector(_) => ErrorKind::Selector,
        }
    }
}

/// Serialize EztvError as its display string
impl Serialize for EztvError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for EZTV Scraper operations
pub type Result<T> = std::result::Result<T, EztvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eztv_error_display_invalid_argument() {
        let error = EztvError::InvalidArgument("keyword is empty".to_string());
        assert_eq!(error.to_string(), "Invalid argument: keyword is empty");
    }

    #[test]
    fn test_eztv_error_display_missing_argument() {
        let error = EztvError::MissingArgument("path".to_string());
        assert_eq!(error.to_string(), "Missing argument: path");
    }

    #[test]
    fn test_eztv_error_display_empty_response() {
        assert_eq!(
            EztvError::EmptyResponse.to_string(),
            "Empty response from server"
        );
    }

    #[test]
    fn test_eztv_error_display_not_found() {
        let error = EztvError::ShowNotFound("Lost".to_string());
        assert_eq!(error.to_string(), "Show not found: Lost");

        let error = EztvError::EpisodeNotFound("/ep/1/".to_string());
        assert_eq!(error.to_string(), "Episode not found: /ep/1/");
    }

    #[test]
    fn test_eztv_error_display_unimplemented() {
        let error = EztvError::Unimplemented("episode details");
        assert_eq!(error.to_string(), "Not implemented: episode details");
    }

    #[test]
    fn test_eztv_error_kind() {
        assert_eq!(
            EztvError::MissingArgument(String::new()).kind(),
            ErrorKind::MissingArgument
        );
        assert_eq!(EztvError::EmptyResponse.kind(), ErrorKind::EmptyResponse);
        assert_eq!(
            EztvError::Unimplemented("x").kind(),
            ErrorKind::Unimplemented
        );
        assert_ne!(
            EztvError::ShowNotFound(String::new()).kind(),
            EztvError::EpisodeNotFound(String::new()).kind()
        );
    }

    #[test]
    fn test_eztv_error_serialize() {
        let error = EztvError::InvalidArgument("keyword is empty".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Invalid argument: keyword is empty\"");
    }

    #[test]
    fn test_eztv_error_serialize_empty_response() {
        let json = serde_json::to_string(&EztvError::EmptyResponse).unwrap();
        assert_eq!(json, "\"Empty response from server\"");
    }
}
