//! Error types for XIVAPI operations

use thiserror::Error;

/// Error types for XIVAPI operations
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Validation errors, raised before any request is issued
    /// Unsupported response language code
    #[error("\"{code}\" is not a valid language code for XIVAPI")]
    InvalidLanguage {
        /// The rejected language code
        code: String,
    },

    /// Invalid search index selection
    #[error("invalid search index: {reason}")]
    InvalidIndex {
        /// Why the index selection was rejected
        reason: String,
    },

    /// Invalid column selection
    #[error("invalid column selection: {reason}")]
    InvalidColumns {
        /// Why the column selection was rejected
        reason: String,
    },

    /// Unsupported string-matching algorithm
    #[error("\"{algo}\" is not a supported string matching algorithm")]
    InvalidAlgorithm {
        /// The rejected algorithm name
        algo: String,
    },

    /// Invalid filter comparison operator
    #[error("\"{comparison}\" is not a valid filter comparison")]
    InvalidFilter {
        /// The rejected comparison operator
        comparison: String,
    },

    /// Market world list outside the accepted 1..=15 range
    #[error("world list must contain between 1 and 15 worlds, got {count}")]
    InvalidWorlds {
        /// Number of worlds that were supplied
        count: usize,
    },

    /// Empty datacenter name for a market query
    #[error("datacenter name must not be empty")]
    InvalidDatacenter,

    // Remote outcomes, mapped from response status codes
    /// HTTP 400
    #[error("bad request, check your query parameters")]
    BadRequest,

    /// HTTP 401
    #[error("request was refused, possibly due to an invalid API key")]
    Forbidden,

    /// HTTP 404
    #[error("resource not found")]
    NotFound,

    /// HTTP 500
    #[error("an internal server error occurred on XIVAPI")]
    ServerError,

    /// HTTP 503
    #[error("service unavailable, the Lodestone may be under maintenance")]
    ServiceUnavailable,

    /// Any status code outside the mapped set
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus {
        /// The unmapped status code
        status: u16,
        /// The request URL that produced it
        url: String,
    },
}

// Helper methods for common error construction
impl Error {
    /// Create an invalid language error
    pub fn invalid_language(code: impl Into<String>) -> Self {
        Self::InvalidLanguage { code: code.into() }
    }

    /// Create an invalid index error
    pub fn invalid_index(reason: impl Into<String>) -> Self {
        Self::InvalidIndex {
            reason: reason.into(),
        }
    }

    /// Create an invalid columns error
    pub fn invalid_columns(reason: impl Into<String>) -> Self {
        Self::InvalidColumns {
            reason: reason.into(),
        }
    }

    /// Create an invalid algorithm error
    pub fn invalid_algorithm(algo: impl Into<String>) -> Self {
        Self::InvalidAlgorithm { algo: algo.into() }
    }

    /// Create an invalid filter error
    pub fn invalid_filter(comparison: impl Into<String>) -> Self {
        Self::InvalidFilter {
            comparison: comparison.into(),
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(status: u16, url: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            url: url.into(),
        }
    }
}

/// Result type for XIVAPI operations
pub type Result<T> = std::result::Result<T, Error>;
