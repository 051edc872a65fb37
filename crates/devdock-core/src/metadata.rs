//! Per-panel metadata records
//!
//! A panel may ship a `meta.toml` next to its module describing where it
//! sits in the menu, what it is called and whether it is shown at all.
//! Metadata is optional: a panel without it sorts after every panel that
//! has one and gets a label derived from its identifier.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Metadata record attached to one panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelMetadata {
    /// Sort weight, lower values are listed first
    pub order: i32,
    /// Overrides the label derived from the panel identifier
    #[serde(default)]
    pub title: Option<String>,
    /// Glyph shown in front of the label
    #[serde(default)]
    pub icon: Option<String>,
    /// Hidden panels are never loaded nor listed
    #[serde(default)]
    pub hidden: bool,
}

impl PanelMetadata {
    /// Create metadata with the given sort weight and no other attributes
    pub fn new(order: i32) -> Self {
        Self {
            order,
            title: None,
            icon: None,
            hidden: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Parse a metadata record from TOML
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::invalid_metadata(e.message().to_string()))
    }
}

/// Metadata as declared at registration time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MetadataSource {
    /// The panel ships no metadata
    #[default]
    Absent,
    /// Metadata parsed successfully
    Present(PanelMetadata),
    /// Metadata exists but could not be parsed
    Invalid(String),
}

impl MetadataSource {
    /// Parse a metadata unit, keeping the failure instead of raising it
    pub fn from_toml(source: &str) -> Self {
        match PanelMetadata::from_toml(source) {
            Ok(meta) => MetadataSource::Present(meta),
            Err(e) => MetadataSource::Invalid(e.to_string()),
        }
    }

    /// Metadata usable for display; invalid metadata counts as absent
    pub fn resolve(&self, identifier: &str) -> Option<&PanelMetadata> {
        match self {
            MetadataSource::Present(meta) => Some(meta),
            MetadataSource::Absent => None,
            MetadataSource::Invalid(reason) => {
                warn!(panel = %identifier, reason = %reason, "Ignoring invalid panel metadata");
                None
            }
        }
    }
}

impl From<PanelMetadata> for MetadataSource {
    fn from(meta: PanelMetadata) -> Self {
        MetadataSource::Present(meta)
    }
}

impl From<Option<PanelMetadata>> for MetadataSource {
    fn from(meta: Option<PanelMetadata>) -> Self {
        meta.map_or(MetadataSource::Absent, MetadataSource::Present)
    }
}

/// User supplied adjustments for one panel, read from the config file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataOverride {
    pub order: Option<i32>,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub hidden: Option<bool>,
}

impl MetadataOverride {
    /// Whether this override changes anything
    pub fn is_empty(&self) -> bool {
        self.order.is_none() && self.title.is_none() && self.icon.is_none() && self.hidden.is_none()
    }
}

/// Display attributes after defaults and overrides are applied
///
/// `order == None` stands for "no explicit order" and sorts last.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EffectiveMetadata {
    pub order: Option<i32>,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub hidden: bool,
}

impl EffectiveMetadata {
    /// Resolve declared metadata and an optional override into display attributes
    pub fn resolve(
        identifier: &str,
        source: &MetadataSource,
        overrides: Option<&MetadataOverride>,
    ) -> Self {
        let mut effective = match source.resolve(identifier) {
            Some(meta) => Self {
                order: Some(meta.order),
                title: meta.title.clone(),
                icon: meta.icon.clone(),
                hidden: meta.hidden,
            },
            None => Self::default(),
        };

        if let Some(o) = overrides {
            if o.order.is_some() {
                effective.order = o.order;
            }
            if o.title.is_some() {
                effective.title = o.title.clone();
            }
            if o.icon.is_some() {
                effective.icon = o.icon.clone();
            }
            if let Some(hidden) = o.hidden {
                effective.hidden = hidden;
            }
        }

        effective
    }
}
