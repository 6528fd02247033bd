//! mbxml - Streaming materializer for MusicBrainz web service XML.
//!
//! This crate turns `/ws/2` XML documents into a typed value graph in one
//! forward pass. Every element is resolved against a static schema of record
//! kinds: repeated children become ordered lists, singleton children are
//! collapsed, and leaf text is coerced into integers, booleans, enumerations,
//! decimals and timestamps.
//!
//! # Example
//!
//! ```
//! let metadata = mbxml::xml::from_str(
//!     r#"<metadata xmlns="http://musicbrainz.org/ns/mmd-2.0#">
//!          <artist id="1" type="Person"><name>Foo</name></artist>
//!        </metadata>"#,
//! )
//! .unwrap();
//!
//! assert_eq!(metadata["artist"]["type"], "Person");
//! assert_eq!(metadata["artist"]["name"], "Foo");
//! ```
//!
//! # Architecture
//!
//! - [`registry`]: Record kinds, their shapes and the MusicBrainz schema
//! - [`parser`]: Stack-based stream parser fed with open/text/close events
//! - [`xml`]: quick-xml driver feeding bytes into the parser
//! - [`value`]: Finished value type
//! - [`coerce`]: Scalar coercion of leaf text
//! - [`error`]: Error types and Result alias

pub mod coerce;
pub mod error;
pub mod parser;
pub mod registry;
pub mod value;
pub mod xml;

// Re-export commonly used items
pub use error::{MbxmlError, Result};
pub use parser::{Attributes, Parser, ParserState, SingletonPolicy};
pub use registry::{Kind, Registry};
pub use value::Value;
