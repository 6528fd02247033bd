//! Error types for the parser.
//!
//! Every deviation from the declared schema surfaces as a typed variant of
//! `MbxmlError`; nothing is recovered or defaulted inside the crate.

use thiserror::Error;

use crate::registry::Kind;

/// Main error type for the mbxml library.
#[derive(Debug, Error)]
pub enum MbxmlError {
    /// A kind was looked up that has no registered shape.
    #[error("No shape registered for kind '{0}'")]
    UnknownKind(Kind),

    /// The enclosing kind does not declare this child tag.
    #[error("Unexpected element <{tag}> in <{parent}>")]
    UnexpectedTag { tag: String, parent: String },

    /// Leaf text outside the closed set of an enumeration.
    #[error("Invalid {enumeration} value: '{value}'")]
    InvalidEnumerationValue {
        enumeration: &'static str,
        value: String,
    },

    /// Leaf text that cannot be coerced into the expected scalar.
    #[error("Invalid {expected} value: '{value}'")]
    InvalidScalar {
        expected: &'static str,
        value: String,
    },

    /// Timestamp text that does not match `%Y-%m-%dT%H:%M:%S`.
    #[error("Invalid date-time value: '{0}'")]
    InvalidDate(String),

    /// `finish` was called while elements were still open.
    #[error("Document ended with {open} unclosed element(s)")]
    IncompleteDocument { open: usize },

    /// More closes than opens.
    #[error("Unbalanced close of <{tag}>: no element is open")]
    StackUnderflow { tag: String },

    /// A close event named a different tag than the open element.
    #[error("Mismatched close: expected </{expected}>, found </{found}>")]
    MismatchedClose { expected: String, found: String },

    /// A singleton child occurred more than once.
    #[error("Element <{tag}> may occur only once in <{parent}>")]
    MultipleSingletonOccurrence { tag: String, parent: String },

    /// The document closed without a `metadata` element.
    #[error("Document contains no <metadata> element")]
    EmptyDocument,

    /// An event arrived after `finish`.
    #[error("Parser already finished")]
    ParserClosed,

    /// The XML tokenizer rejected the input.
    #[error("XML parsing failed: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute in the input.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Element or attribute name that is not valid UTF-8.
    #[error("Invalid UTF-8 in XML name: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// IO error while reading the byte stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for mbxml operations.
pub type Result<T> = std::result::Result<T, MbxmlError>;
