//! mbxml-client - MusicBrainz web service lookups.
//!
//! Sends rate-limited `/ws/2` lookup requests and streams each response body
//! through the [`mbxml`] parser.
//!
//! # Example
//!
//! ```
//! use mbxml::Kind;
//! use mbxml_client::{lookup, ClientConfig};
//!
//! let config = ClientConfig::default();
//! let url = lookup::lookup_url(
//!     &config,
//!     Kind::Artist,
//!     "89ad4ac3-39f7-470e-963a-56509c546377",
//!     &["aliases"],
//! );
//! assert!(url.ends_with("/ws/2/artist/89ad4ac3-39f7-470e-963a-56509c546377?inc=aliases"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Client settings from defaults and environment
//! - [`http`]: HTTP client with rate limiting and retries
//! - [`lookup`]: MBID and include validation, entity lookups
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod lookup;

// Re-export commonly used items
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use lookup::{load_file, MusicBrainzClient};
