//! Push-driven stream parser.

use super::construct::build;
use super::frame::{Attributes, Frame, FrameKind};
use crate::error::{MbxmlError, Result};
use crate::registry::{Expect, Registry};
use crate::value::Value;

/// Clark-notation prefix of the MusicBrainz metadata namespace.
pub const NAMESPACE_PREFIX: &str = "{http://musicbrainz.org/ns/mmd-2.0#}";

/// Strip the MusicBrainz namespace from a tag.
///
/// Tags in any other namespace are returned unchanged.
///
/// # Examples
/// ```
/// use mbxml::parser::normalize_tag;
///
/// assert_eq!(normalize_tag("{http://musicbrainz.org/ns/mmd-2.0#}artist"), "artist");
/// assert_eq!(normalize_tag("artist"), "artist");
/// assert_eq!(normalize_tag("{urn:other}artist"), "{urn:other}artist");
/// ```
#[must_use]
pub fn normalize_tag(tag: &str) -> &str {
    tag.strip_prefix(NAMESPACE_PREFIX).unwrap_or(tag)
}

/// Lifecycle of a parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// No element has been opened yet.
    AwaitingRoot,
    /// At least one element has been opened.
    InDocument,
    /// `finish` was called; every further event fails.
    Closed,
}

/// What to do when a singleton child occurs a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingletonPolicy {
    /// Fail with `MultipleSingletonOccurrence`.
    #[default]
    Reject,
    /// Keep the last occurrence.
    LastWins,
}

/// Schema-driven streaming parser.
///
/// Receives open/text/close events in document order and materializes the
/// document into a [`Value`] without lookahead. The bottom of the stack is
/// always the document frame until [`Parser::finish`] consumes it.
#[derive(Debug)]
pub struct Parser<'r> {
    registry: &'r Registry,
    stack: Vec<Frame>,
    state: ParserState,
    policy: SingletonPolicy,
}

impl Parser<'static> {
    /// Create a parser over the global MusicBrainz registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(Registry::global())
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Parser<'r> {
    /// Create a parser over a custom registry.
    #[must_use]
    pub fn with_registry(registry: &'r Registry) -> Self {
        Self {
            registry,
            stack: vec![Frame::document()],
            state: ParserState::AwaitingRoot,
            policy: SingletonPolicy::default(),
        }
    }

    /// Set the singleton policy.
    #[must_use]
    pub fn with_singleton_policy(mut self, policy: SingletonPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Number of open elements, not counting the document frame.
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Handle a start tag.
    ///
    /// # Errors
    /// `UnexpectedTag` if the enclosing shape does not declare `tag`.
    pub fn open(&mut self, tag: &str, attributes: Attributes) -> Result<()> {
        self.ensure_open()?;
        let tag = normalize_tag(tag);
        let top = self.stack.last().ok_or(MbxmlError::ParserClosed)?;

        let expect = match top.kind {
            FrameKind::Record(kind) => self
                .registry
                .shape_for(kind)?
                .child_spec(tag)
                .map(|spec| spec.expect),
            FrameKind::Scalar(_) => None,
        };
        let frame = match expect {
            Some(Expect::Scalar(coercer)) => Frame::scalar(tag, coercer),
            Some(Expect::Record(kind)) => {
                let keeps_text = self.registry.shape_for(kind)?.consumes_text();
                Frame::record(tag, kind, attributes, keeps_text)
            }
            None => {
                return Err(MbxmlError::UnexpectedTag {
                    tag: tag.to_string(),
                    parent: top.tag.clone(),
                })
            }
        };

        tracing::trace!(tag, depth = self.stack.len(), "open");
        self.stack.push(frame);
        self.state = ParserState::InDocument;
        Ok(())
    }

    /// Handle character data; consecutive calls concatenate.
    pub fn text(&mut self, data: &str) -> Result<()> {
        self.ensure_open()?;
        if let Some(top) = self.stack.last_mut() {
            top.push_text(data);
        }
        Ok(())
    }

    /// Handle an end tag, handing the finished value to the parent frame.
    ///
    /// # Errors
    /// `StackUnderflow` when no element is open, `MismatchedClose` when `tag`
    /// is not the innermost open element, plus any construction error.
    pub fn close(&mut self, tag: &str) -> Result<()> {
        self.ensure_open()?;
        let tag = normalize_tag(tag);
        if self.stack.len() <= 1 {
            return Err(MbxmlError::StackUnderflow {
                tag: tag.to_string(),
            });
        }
        if let Some(open) = self.stack.last().filter(|open| open.tag != tag) {
            return Err(MbxmlError::MismatchedClose {
                expected: open.tag.clone(),
                found: tag.to_string(),
            });
        }
        let frame = self.stack.pop().ok_or_else(|| MbxmlError::StackUnderflow {
            tag: tag.to_string(),
        })?;

        let name = frame.tag.clone();
        let value = build(self.registry, frame)?;
        tracing::trace!(tag = %name, depth = self.stack.len(), "close");

        let parent = self.stack.last_mut().ok_or(MbxmlError::StackUnderflow {
            tag: name.clone(),
        })?;
        let repeatable = match parent.kind {
            FrameKind::Record(kind) => self
                .registry
                .shape_for(kind)?
                .child_spec(&name)
                .is_some_and(|spec| spec.repeatable),
            FrameKind::Scalar(_) => false,
        };
        parent.append(name, value, repeatable, self.policy)
    }

    /// End the stream and return the materialized `metadata` record.
    ///
    /// # Errors
    /// `IncompleteDocument` if elements are still open, `EmptyDocument` if
    /// the stream held no `metadata` element.
    pub fn finish(&mut self) -> Result<Value> {
        self.ensure_open()?;
        if self.stack.len() != 1 {
            return Err(MbxmlError::IncompleteDocument { open: self.depth() });
        }
        let root = self.stack.pop().ok_or(MbxmlError::ParserClosed)?;
        self.state = ParserState::Closed;
        tracing::debug!("Document finished");
        build(self.registry, root)
    }

    fn ensure_open(&self) -> Result<()> {
        match self.state {
            ParserState::Closed => Err(MbxmlError::ParserClosed),
            _ => Ok(()),
        }
    }
}
