//! Error types for the web service client.

use mbxml::{Kind, MbxmlError};
use thiserror::Error;

/// Main error type for the client library.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid MusicBrainz identifier.
    #[error("Invalid MBID: '{0}'. Expected a UUID (e.g., 89ad4ac3-39f7-470e-963a-56509c546377)")]
    InvalidMbid(String),

    /// Include not supported by the looked-up entity.
    #[error("Invalid include '{include}' for {entity} lookups")]
    InvalidInclude { entity: Kind, include: String },

    /// A `user-*` include was requested without an access token.
    #[error("Include '{0}' requires an access token (set MBXML_ACCESS_TOKEN)")]
    LoginRequired(String),

    /// Name that is not one of the lookup entities.
    #[error("Unknown entity '{0}'")]
    UnknownEntity(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transient failures persisted through every retry.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// The response body did not match the schema.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] MbxmlError),

    /// The response parsed but did not contain the requested entity.
    #[error("Response contains no <{0}> element")]
    MissingEntity(Kind),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
