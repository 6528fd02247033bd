//! Parse stack frames.

use indexmap::IndexMap;

use super::SingletonPolicy;
use crate::coerce::Coercer;
use crate::error::{MbxmlError, Result};
use crate::registry::Kind;
use crate::value::Value;

/// Attributes of an element, in document order.
pub type Attributes = IndexMap<String, String>;

/// Tag name used for the document frame in error messages.
pub(crate) const DOCUMENT_TAG: &str = "#document";

/// What a frame will construct when it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameKind {
    Record(Kind),
    Scalar(Coercer),
}

/// Working state of one open element.
#[derive(Debug)]
pub(crate) struct Frame {
    pub tag: String,
    pub kind: FrameKind,
    pub attributes: Attributes,
    /// Finished children keyed by tag, in order of first occurrence.
    pub children: IndexMap<String, Vec<Value>>,
    /// Present only for frames whose construction reads text.
    pub text: Option<String>,
}

impl Frame {
    /// The bottom frame holding the document root.
    pub fn document() -> Self {
        Self::record(DOCUMENT_TAG, Kind::Document, Attributes::new(), false)
    }

    pub fn record(tag: &str, kind: Kind, attributes: Attributes, keeps_text: bool) -> Self {
        Self {
            tag: tag.to_string(),
            kind: FrameKind::Record(kind),
            attributes,
            children: IndexMap::new(),
            text: keeps_text.then(String::new),
        }
    }

    /// Scalar leaves carry no attributes into their value.
    pub fn scalar(tag: &str, coercer: Coercer) -> Self {
        Self {
            tag: tag.to_string(),
            kind: FrameKind::Scalar(coercer),
            attributes: Attributes::new(),
            children: IndexMap::new(),
            text: Some(String::new()),
        }
    }

    /// Append text; tokenizers may split one text node into several calls.
    pub fn push_text(&mut self, data: &str) {
        if let Some(text) = self.text.as_mut() {
            text.push_str(data);
        }
    }

    /// Accumulate a finished child under `tag`.
    pub fn append(
        &mut self,
        tag: String,
        value: Value,
        repeatable: bool,
        policy: SingletonPolicy,
    ) -> Result<()> {
        match self.children.get_mut(&tag) {
            None => {
                self.children.insert(tag, vec![value]);
            }
            Some(values) if repeatable => values.push(value),
            Some(values) => match policy {
                SingletonPolicy::Reject => {
                    return Err(MbxmlError::MultipleSingletonOccurrence {
                        tag,
                        parent: self.tag.clone(),
                    })
                }
                SingletonPolicy::LastWins => {
                    tracing::debug!(tag = %tag, parent = %self.tag, "Replacing singleton child");
                    *values = vec![value];
                }
            },
        }
        Ok(())
    }
}
