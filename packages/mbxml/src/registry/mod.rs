//! Record type registry for schema-driven parsing.
//!
//! Every record kind has exactly one [`Shape`] naming the child tags legal
//! under it and the kind or scalar coercer expected under each. The parser
//! consults the shape of the enclosing frame to resolve every open tag.

mod config;
mod core;
mod entity;
mod kind;
mod shape;

pub use config::create_musicbrainz_registry;
pub use self::core::Registry;
pub use kind::Kind;
pub use shape::{ChildSpec, Construction, Expect, Shape};
