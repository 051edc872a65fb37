//! Shell state
//!
//! The shell owns the single source of truth for which panel is visible.
//! It starts in [`Shell::Loading`], moves to [`Shell::Ready`] once the menu
//! is loaded and stays there; selecting another entry unmounts the old
//! panel and mounts the new one.

use tracing::{debug, warn};

use crate::loader::MenuEntry;

/// Mount notifications for render units
///
/// Panels holding transient resources release them in `on_unmount`.
pub trait PanelLifecycle {
    fn on_mount(&mut self) {}

    fn on_unmount(&mut self) {}
}

/// Host state machine: `Loading -> Ready(entries, selected)`
pub enum Shell<R> {
    /// Menu not loaded yet; selection changes are ignored
    Loading,
    /// Menu loaded; `selected` is `None` only when `entries` is empty
    Ready {
        entries: Vec<MenuEntry<R>>,
        selected: Option<usize>,
    },
}

impl<R: PanelLifecycle> Shell<R> {
    pub fn new() -> Self {
        Shell::Loading
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Shell::Loading)
    }

    /// Install the loaded menu and mount the first entry
    ///
    /// Returns `false` if the menu was already installed; the shell loads
    /// exactly once.
    pub fn finish_loading(&mut self, mut entries: Vec<MenuEntry<R>>) -> bool {
        if !self.is_loading() {
            warn!("Menu already loaded, ignoring second result");
            return false;
        }

        let selected = if entries.is_empty() { None } else { Some(0) };
        if let Some(entry) = entries.first_mut() {
            debug!(panel = %entry.key, "Mounting initial panel");
            entry.render.on_mount();
        }

        *self = Shell::Ready { entries, selected };
        true
    }

    /// Loaded entries, empty while loading
    pub fn entries(&self) -> &[MenuEntry<R>] {
        match self {
            Shell::Loading => &[],
            Shell::Ready { entries, .. } => entries,
        }
    }

    /// Key of the mounted panel
    pub fn selected_key(&self) -> Option<&str> {
        match self {
            Shell::Ready { entries, selected: Some(index) } => {
                entries.get(*index).map(|e| e.key.as_str())
            }
            _ => None,
        }
    }

    /// The mounted entry
    pub fn active_mut(&mut self) -> Option<&mut MenuEntry<R>> {
        match self {
            Shell::Ready { entries, selected: Some(index) } => entries.get_mut(*index),
            _ => None,
        }
    }

    /// Select the entry with `key`
    ///
    /// Unknown keys, re-selecting the current key and selecting while
    /// loading are no-ops and return `false`.
    pub fn select(&mut self, key: &str) -> bool {
        let index = match self {
            Shell::Loading => return false,
            Shell::Ready { entries, .. } => entries.iter().position(|e| e.key == key),
        };

        match index {
            Some(index) => self.select_index(index),
            None => {
                debug!(key = %key, "Ignoring selection of unknown panel");
                false
            }
        }
    }

    /// Select the entry at `index` in display order
    pub fn select_index(&mut self, index: usize) -> bool {
        let Shell::Ready { entries, selected } = self else {
            return false;
        };

        if index >= entries.len() || *selected == Some(index) {
            return false;
        }

        if let Some(previous) = (*selected).and_then(|i| entries.get_mut(i)) {
            debug!(panel = %previous.key, "Unmounting panel");
            previous.render.on_unmount();
        }

        let next = &mut entries[index];
        debug!(panel = %next.key, "Mounting panel");
        next.render.on_mount();
        *selected = Some(index);
        true
    }
}

impl<R: PanelLifecycle> Default for Shell<R> {
    fn default() -> Self {
        Self::new()
    }
}
