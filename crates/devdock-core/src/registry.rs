//! Panel registry
//!
//! Panels are declared explicitly: each registration pairs an identifier
//! with a factory for its render unit and the panel's metadata. The
//! registry keeps declaration order, which is also the order panels
//! without an explicit sort weight appear in.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::loader::derive_key;
use crate::metadata::{MetadataOverride, MetadataSource, PanelMetadata};

/// Factory function type for creating a panel's render unit
pub type PanelFactory<R> = Box<dyn Fn() -> Result<R> + Send + Sync>;

/// Registration entry for a panel
pub struct PanelRegistration<R> {
    /// Identifier naming the panel, e.g. `FileViewer`
    pub identifier: String,
    /// Metadata as declared by the panel
    pub metadata: MetadataSource,
    /// Adjustments applied on top of the declared metadata
    pub overrides: Option<MetadataOverride>,
    /// Factory function to create the render unit
    pub factory: PanelFactory<R>,
}

impl<R> PanelRegistration<R> {
    /// Menu key of this panel
    pub fn key(&self) -> String {
        derive_key(&self.identifier)
    }
}

impl<R> std::fmt::Debug for PanelRegistration<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelRegistration")
            .field("identifier", &self.identifier)
            .field("metadata", &self.metadata)
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of panel registrations
pub struct PanelRegistry<R> {
    registrations: Vec<PanelRegistration<R>>,
    keys: HashSet<String>,
}

impl<R> PanelRegistry<R> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
            keys: HashSet::new(),
        }
    }

    /// Register a new panel
    ///
    /// Keys are the lowercased identifier, so `Home` and `home` collide.
    pub fn register(&mut self, registration: PanelRegistration<R>) -> Result<()> {
        let key = registration.key();
        if !self.keys.insert(key.clone()) {
            return Err(Error::DuplicatePanel { key });
        }

        debug!(panel = %registration.identifier, key = %key, "Registered panel");
        self.registrations.push(registration);
        Ok(())
    }

    /// Apply per-key metadata overrides, returning keys that matched no panel
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, MetadataOverride>) -> Vec<String> {
        let mut unknown = Vec::new();

        for (key, value) in overrides {
            let key = key.to_lowercase();
            match self.registrations.iter_mut().find(|r| r.key() == key) {
                Some(registration) if !value.is_empty() => {
                    registration.overrides = Some(value.clone());
                }
                Some(_) => {}
                None => {
                    warn!(key = %key, "Metadata override for unknown panel");
                    unknown.push(key);
                }
            }
        }

        unknown
    }

    /// Registrations in declaration order
    pub fn registrations(&self) -> &[PanelRegistration<R>] {
        &self.registrations
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl<R> Default for PanelRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for panel registration
pub struct PanelRegistrationBuilder<R> {
    identifier: Option<String>,
    metadata: MetadataSource,
    factory: Option<PanelFactory<R>>,
}

impl<R> PanelRegistrationBuilder<R> {
    pub fn new() -> Self {
        Self {
            identifier: None,
            metadata: MetadataSource::Absent,
            factory: None,
        }
    }

    pub fn id(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn metadata(mut self, metadata: PanelMetadata) -> Self {
        self.metadata = MetadataSource::Present(metadata);
        self
    }

    /// Attach a metadata unit in TOML form; parse failures are kept, not raised
    pub fn metadata_toml(mut self, source: &str) -> Self {
        self.metadata = MetadataSource::from_toml(source);
        self
    }

    pub fn factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Result<R> + Send + Sync + 'static,
    {
        self.factory = Some(Box::new(factory));
        self
    }

    pub fn build(self) -> Result<PanelRegistration<R>> {
        let identifier = self
            .identifier
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::missing_field("identifier"))?;
        let factory = self.factory.ok_or_else(|| Error::missing_field("factory"))?;

        Ok(PanelRegistration {
            identifier,
            metadata: self.metadata,
            overrides: None,
            factory,
        })
    }
}

impl<R> Default for PanelRegistrationBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(id: &str) -> PanelRegistration<u32> {
        PanelRegistrationBuilder::new()
            .id(id)
            .factory(|| Ok(7))
            .build()
            .unwrap()
    }

    #[test]
    fn test_registry_registration() {
        let mut registry = PanelRegistry::new();
        registry.register(registration("Home")).unwrap();
        registry.register(registration("DevTools")).unwrap();

        assert_eq!(registry.len(), 2);
        let keys: Vec<String> = registry.registrations().iter().map(|r| r.key()).collect();
        assert_eq!(keys, vec!["home", "devtools"]);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut registry = PanelRegistry::new();
        registry.register(registration("Home")).unwrap();

        let err = registry.register(registration("HOME")).unwrap_err();
        assert!(matches!(err, Error::DuplicatePanel { ref key } if key == "home"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_builder_requires_identifier_and_factory() {
        let missing_id = PanelRegistrationBuilder::<u32>::new().factory(|| Ok(1)).build();
        assert!(matches!(missing_id, Err(Error::MissingField { .. })));

        let missing_factory = PanelRegistrationBuilder::<u32>::new().id("Home").build();
        assert!(matches!(missing_factory, Err(Error::MissingField { .. })));
    }

    #[test]
    fn test_builder_keeps_invalid_metadata() {
        let reg = PanelRegistrationBuilder::<u32>::new()
            .id("Broken")
            .metadata_toml("not toml at all [")
            .factory(|| Ok(1))
            .build()
            .unwrap();

        assert!(matches!(reg.metadata, MetadataSource::Invalid(_)));
    }

    #[test]
    fn test_apply_overrides() {
        let mut registry = PanelRegistry::new();
        registry.register(registration("FileViewer")).unwrap();

        let mut overrides = BTreeMap::new();
        overrides.insert(
            "FileViewer".to_string(),
            MetadataOverride {
                hidden: Some(true),
                ..Default::default()
            },
        );
        overrides.insert("missing".to_string(), MetadataOverride::default());

        let unknown = registry.apply_overrides(&overrides);
        assert_eq!(unknown, vec!["missing".to_string()]);
        assert_eq!(
            registry.registrations()[0].overrides.as_ref().and_then(|o| o.hidden),
            Some(true)
        );
    }
}
