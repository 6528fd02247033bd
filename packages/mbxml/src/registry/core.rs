//! Registry mapping record kinds to their shapes.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::config::create_musicbrainz_registry;
use super::kind::Kind;
use super::shape::Shape;
use crate::error::{MbxmlError, Result};

static MUSICBRAINZ: LazyLock<Registry> = LazyLock::new(create_musicbrainz_registry);

/// Registry mapping every kind to its shape.
///
/// Built once and read-only afterwards; a shared reference can be used by any
/// number of parsers on any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    shapes: HashMap<Kind, Shape>,
}

impl Registry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
        }
    }

    /// Build a fresh registry holding the full MusicBrainz schema.
    #[must_use]
    pub fn musicbrainz() -> Self {
        create_musicbrainz_registry()
    }

    /// The process-wide MusicBrainz schema.
    #[must_use]
    pub fn global() -> &'static Registry {
        &MUSICBRAINZ
    }

    /// Register the shape of a kind, replacing any earlier registration.
    pub fn register_shape(&mut self, kind: Kind, shape: Shape) {
        self.shapes.insert(kind, shape);
    }

    /// Get the shape of a kind.
    ///
    /// # Errors
    /// Returns `UnknownKind` if the kind was never registered.
    pub fn shape_for(&self, kind: Kind) -> Result<&Shape> {
        self.shapes.get(&kind).ok_or(MbxmlError::UnknownKind(kind))
    }

    /// Check if a kind is registered.
    #[must_use]
    pub fn has_shape(&self, kind: Kind) -> bool {
        self.shapes.contains_key(&kind)
    }

    /// Return all registered kinds.
    pub fn kinds(&self) -> impl Iterator<Item = Kind> + '_ {
        self.shapes.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Expect;

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = Registry::new();
        registry.register_shape(Kind::LifeSpan, Shape::record().str("begin"));

        assert!(registry.has_shape(Kind::LifeSpan));
        assert!(registry.shape_for(Kind::LifeSpan).is_ok());
    }

    #[test]
    fn test_registry_unknown_kind() {
        let registry = Registry::new();
        assert!(matches!(
            registry.shape_for(Kind::Artist),
            Err(MbxmlError::UnknownKind(Kind::Artist))
        ));
    }

    #[test]
    fn test_global_registry_is_complete() {
        let registry = Registry::global();
        for kind in Kind::ALL {
            assert!(registry.has_shape(kind), "missing shape for {kind}");
        }
    }

    #[test]
    fn test_global_registry_is_closed() {
        // Every kind referenced from a shape is itself registered.
        let registry = Registry::global();
        for kind in registry.kinds() {
            let shape = registry.shape_for(kind).unwrap();
            for (tag, spec) in shape.children() {
                if let Expect::Record(child) = spec.expect {
                    assert!(
                        registry.has_shape(child),
                        "{kind}/{tag} refers to unregistered {child}"
                    );
                }
            }
        }
    }
}
