//! Declarative shape of one record kind.

use std::collections::HashMap;

use super::kind::Kind;
use crate::coerce::Coercer;

/// How a closed frame of a kind is turned into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construction {
    /// Attributes merged with children; singleton children collapsed.
    Record,
    /// Attributes plus the element text under `data`.
    Text,
    /// Attributes and children plus the element text as an exact decimal
    /// under `data`.
    Decimal,
    /// Attributes plus the ordered element children under `data`.
    List,
    /// Yields the single `metadata` child.
    Document,
}

/// What is expected under a child tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// A leaf coerced from text.
    Scalar(Coercer),
    /// A nested record of the given kind.
    Record(Kind),
}

/// Declaration of one legal child tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildSpec {
    /// Expected type under the tag.
    pub expect: Expect,

    /// Keep every occurrence as an ordered list instead of collapsing to a
    /// single value.
    pub repeatable: bool,
}

/// Legal child tags and construction rule for one kind.
#[derive(Debug, Clone)]
pub struct Shape {
    construction: Construction,
    children: HashMap<&'static str, ChildSpec>,
    element_tag: Option<&'static str>,
    date_fields: Vec<&'static str>,
}

impl Shape {
    fn new(construction: Construction) -> Self {
        Self {
            construction,
            children: HashMap::new(),
            element_tag: None,
            date_fields: Vec::new(),
        }
    }

    /// A record merging attributes and children.
    #[must_use]
    pub fn record() -> Self {
        Self::new(Construction::Record)
    }

    /// A record carrying attributes and text.
    #[must_use]
    pub fn text() -> Self {
        Self::new(Construction::Text)
    }

    /// A record carrying attributes, children and a decimal text value.
    #[must_use]
    pub fn decimal() -> Self {
        Self::new(Construction::Decimal)
    }

    /// The document root, expecting a single `metadata` element.
    #[must_use]
    pub fn document() -> Self {
        Self::new(Construction::Document).child("metadata", Kind::Metadata)
    }

    /// A list wrapper whose elements appear under `tag`.
    ///
    /// # Examples
    /// ```
    /// use mbxml::registry::{Construction, Expect, Kind, Shape};
    ///
    /// let shape = Shape::list_of("alias", Expect::Record(Kind::Alias));
    /// assert_eq!(shape.construction(), Construction::List);
    /// assert_eq!(shape.element_tag(), Some("alias"));
    /// assert!(shape.child_spec("alias").unwrap().repeatable);
    /// ```
    #[must_use]
    pub fn list_of(tag: &'static str, expect: Expect) -> Self {
        let mut shape = Self::new(Construction::List);
        shape.element_tag = Some(tag);
        shape.with(tag, expect, true)
    }

    /// Declare a child tag.
    #[must_use]
    pub fn with(mut self, tag: &'static str, expect: Expect, repeatable: bool) -> Self {
        self.children.insert(tag, ChildSpec { expect, repeatable });
        self
    }

    /// Declare a singleton scalar child.
    #[must_use]
    pub fn scalar(self, tag: &'static str, coercer: Coercer) -> Self {
        self.with(tag, Expect::Scalar(coercer), false)
    }

    /// Declare a singleton text child.
    #[must_use]
    pub fn str(self, tag: &'static str) -> Self {
        self.scalar(tag, Coercer::Str)
    }

    /// Declare a singleton integer child.
    #[must_use]
    pub fn int(self, tag: &'static str) -> Self {
        self.scalar(tag, Coercer::Int)
    }

    /// Declare a singleton boolean child.
    #[must_use]
    pub fn boolean(self, tag: &'static str) -> Self {
        self.scalar(tag, Coercer::Bool)
    }

    /// Declare a singleton record child.
    #[must_use]
    pub fn child(self, tag: &'static str, kind: Kind) -> Self {
        self.with(tag, Expect::Record(kind), false)
    }

    /// Declare a repeatable record child.
    #[must_use]
    pub fn repeated(self, tag: &'static str, kind: Kind) -> Self {
        self.with(tag, Expect::Record(kind), true)
    }

    /// Mark a field (attribute or child) as a timestamp.
    #[must_use]
    pub fn date_field(mut self, name: &'static str) -> Self {
        self.date_fields.push(name);
        self
    }

    /// Get the construction rule.
    #[must_use]
    pub fn construction(&self) -> Construction {
        self.construction
    }

    /// Get the declaration for a child tag.
    #[must_use]
    pub fn child_spec(&self, tag: &str) -> Option<&ChildSpec> {
        self.children.get(tag)
    }

    /// Element tag of a list wrapper.
    #[must_use]
    pub fn element_tag(&self) -> Option<&'static str> {
        self.element_tag
    }

    /// Fields parsed as timestamps on construction.
    #[must_use]
    pub fn date_fields(&self) -> &[&'static str] {
        &self.date_fields
    }

    /// Whether frames of this shape keep their text content.
    #[must_use]
    pub fn consumes_text(&self) -> bool {
        matches!(self.construction, Construction::Text | Construction::Decimal)
    }

    /// Iterate over the declared child tags.
    pub fn children(&self) -> impl Iterator<Item = (&'static str, &ChildSpec)> {
        self.children.iter().map(|(tag, spec)| (*tag, spec))
    }
}
