//! Stack-based streaming parser.
//!
//! The parser keeps one frame per open element. Each open tag is resolved
//! against the shape of the enclosing frame, each close turns the frame into
//! a finished [`Value`](crate::Value) and hands it to its parent.

mod construct;
mod engine;
mod frame;

pub use engine::{normalize_tag, Parser, ParserState, SingletonPolicy, NAMESPACE_PREFIX};
pub use frame::Attributes;
