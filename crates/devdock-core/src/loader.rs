//! Menu loader
//!
//! Turns a [`PanelRegistry`] into the ordered list of menu entries shown in
//! the sidebar. Every registration is resolved independently: hidden panels
//! are dropped before their factory runs, panels whose factory fails are
//! reported and skipped, and the remaining entries are sorted by their
//! declared order with unordered panels last.

use std::cmp::Ordering;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, error, info};

use crate::error::Error;
use crate::metadata::EffectiveMetadata;
use crate::registry::{PanelRegistration, PanelRegistry};

/// Resolved, user-facing representation of a panel
pub struct MenuEntry<R> {
    /// Lowercased identifier, unique within a menu
    pub key: String,
    /// Label shown in the navigation list
    pub label: String,
    /// Optional glyph shown before the label
    pub icon: Option<String>,
    /// Sort weight; `None` sorts after every explicit order
    pub order: Option<i32>,
    /// The panel's render unit
    pub render: R,
}

impl<R> std::fmt::Debug for MenuEntry<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuEntry")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

/// A panel that could not be loaded
#[derive(Debug)]
pub struct PanelFailure {
    pub identifier: String,
    pub error: Error,
}

/// Outcome of a menu load
pub struct LoadReport<R> {
    /// Entries in display order
    pub entries: Vec<MenuEntry<R>>,
    /// Panels skipped because their render unit failed to resolve
    pub failures: Vec<PanelFailure>,
}

impl<R> LoadReport<R> {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }
}

impl<R> Default for LoadReport<R> {
    fn default() -> Self {
        Self::empty()
    }
}

enum Resolution<R> {
    Hidden,
    Loaded(MenuEntry<R>),
    Failed(PanelFailure),
}

/// Menu key for an identifier
pub fn derive_key(identifier: &str) -> String {
    identifier.to_lowercase()
}

/// Menu label for an identifier
///
/// A non-empty title wins. Otherwise a space is inserted before every
/// ASCII uppercase letter and the result is trimmed, so `DevTools`
/// becomes `Dev Tools`.
pub fn derive_label(identifier: &str, title: Option<&str>) -> String {
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        return title.to_string();
    }

    let mut label = String::with_capacity(identifier.len() + 4);
    for ch in identifier.chars() {
        if ch.is_ascii_uppercase() {
            label.push(' ');
        }
        label.push(ch);
    }
    label.trim().to_string()
}

/// Ordering on sort weights where a missing weight is +infinity
pub fn compare_order(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn resolve<R>(registration: &PanelRegistration<R>) -> Resolution<R> {
    let identifier = &registration.identifier;
    let meta = EffectiveMetadata::resolve(
        identifier,
        &registration.metadata,
        registration.overrides.as_ref(),
    );

    if meta.hidden {
        debug!(panel = %identifier, "Skipping hidden panel");
        return Resolution::Hidden;
    }

    match (registration.factory)() {
        Ok(render) => Resolution::Loaded(MenuEntry {
            key: registration.key(),
            label: derive_label(identifier, meta.title.as_deref()),
            icon: meta.icon,
            order: meta.order,
            render,
        }),
        Err(e) => {
            error!(panel = %identifier, error = %e, "Panel failed to load");
            Resolution::Failed(PanelFailure {
                identifier: identifier.clone(),
                error: e,
            })
        }
    }
}

/// Load every registered panel and compose the menu
///
/// Factories run in parallel; the call returns once all of them have
/// either produced a render unit or failed.
pub fn load_menu<R: Send>(registry: &PanelRegistry<R>) -> LoadReport<R> {
    let start = Instant::now();

    let resolutions: Vec<Resolution<R>> = registry
        .registrations()
        .par_iter()
        .map(resolve)
        .collect();

    let mut report = LoadReport::empty();
    let mut hidden = 0usize;
    for resolution in resolutions {
        match resolution {
            Resolution::Hidden => hidden += 1,
            Resolution::Loaded(entry) => report.entries.push(entry),
            Resolution::Failed(failure) => report.failures.push(failure),
        }
    }

    // Stable: equal weights keep declaration order.
    report.entries.sort_by(|a, b| compare_order(a.order, b.order));

    info!(
        loaded = report.entries.len(),
        hidden,
        failed = report.failures.len(),
        duration_ms = %start.elapsed().as_millis(),
        "Menu loaded"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::PanelMetadata;
    use crate::registry::PanelRegistrationBuilder;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
    use std::sync::Arc;

    fn add(registry: &mut PanelRegistry<&'static str>, id: &'static str, meta: Option<PanelMetadata>) {
        let mut builder = PanelRegistrationBuilder::new().id(id).factory(move || Ok(id));
        if let Some(meta) = meta {
            builder = builder.metadata(meta);
        }
        registry.register(builder.build().unwrap()).unwrap();
    }

    #[test]
    fn test_derive_label_from_identifier() {
        assert_eq!(derive_label("DevTools", None), "Dev Tools");
        assert_eq!(derive_label("FileViewer", None), "File Viewer");
        assert_eq!(derive_label("home", None), "home");
    }

    #[test]
    fn test_derive_label_prefers_title() {
        assert_eq!(derive_label("Home", Some("Welcome")), "Welcome");
        assert_eq!(derive_label("Home", Some("")), "Home");
    }

    #[test]
    fn test_derive_key() {
        assert_eq!(derive_key("FileViewer"), "fileviewer");
    }

    #[test]
    fn test_sort_by_order_then_declaration() {
        let mut registry = PanelRegistry::new();
        add(&mut registry, "Zeta", None);
        add(&mut registry, "FileViewer", Some(PanelMetadata::new(2)));
        add(&mut registry, "Alpha", None);
        add(&mut registry, "Home", Some(PanelMetadata::new(0)));
        add(&mut registry, "DevTools", Some(PanelMetadata::new(1)));

        let report = load_menu(&registry);
        assert_eq!(
            report.keys(),
            vec!["home", "devtools", "fileviewer", "zeta", "alpha"]
        );
    }

    #[test]
    fn test_hidden_panel_is_not_constructed() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut registry = PanelRegistry::new();
        registry
            .register(
                PanelRegistrationBuilder::new()
                    .id("Secret")
                    .metadata(PanelMetadata::new(0).with_hidden(true))
                    .factory(move || {
                        counter.fetch_add(1, AtomicOrdering::SeqCst);
                        Ok("secret")
                    })
                    .build()
                    .unwrap(),
            )
            .unwrap();

        let report = load_menu(&registry);
        assert!(report.entries.is_empty());
        assert!(report.failures.is_empty());
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 0);
    }

    #[test]
    fn test_failed_panel_is_skipped() {
        let mut registry = PanelRegistry::new();
        add(&mut registry, "Home", Some(PanelMetadata::new(0)));
        registry
            .register(
                PanelRegistrationBuilder::new()
                    .id("Broken")
                    .factory(|| Err(Error::panel_load("Broken", "no render unit")))
                    .build()
                    .unwrap(),
            )
            .unwrap();
        add(&mut registry, "DevTools", None);

        let report = load_menu(&registry);
        assert_eq!(report.keys(), vec!["home", "devtools"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].identifier, "Broken");
    }

    #[test]
    fn test_invalid_metadata_falls_back_to_defaults() {
        let mut registry = PanelRegistry::new();
        add(&mut registry, "Home", Some(PanelMetadata::new(5)));
        registry
            .register(
                PanelRegistrationBuilder::new()
                    .id("DevTools")
                    .metadata_toml("title = 'Missing order'")
                    .factory(|| Ok("tools"))
                    .build()
                    .unwrap(),
            )
            .unwrap();

        let report = load_menu(&registry);
        assert_eq!(report.keys(), vec!["home", "devtools"]);
        assert_eq!(report.entries[1].label, "Dev Tools");
        assert_eq!(report.entries[1].order, None);
    }

    #[test]
    fn test_empty_registry() {
        let registry: PanelRegistry<u8> = PanelRegistry::new();
        let report = load_menu(&registry);
        assert!(report.entries.is_empty());
        assert!(report.failures.is_empty());
    }
}
