//! Theme store: the one piece of state on the page.
//!
//! The store owns the current [`Theme`] and a [`ThemeBackend`] that knows how
//! to persist the preference and mark the document root. Storage problems
//! never surface to the caller: the store logs them and keeps working. Only
//! storage that is missing at load time puts the store in memory-only mode;
//! a rejected write is retried on the next toggle.

use crate::theme::Theme;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Well-known key under which the preference is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Failure talking to durable key-value storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage in this context (pre-rendering, disabled by the user agent).
    #[error("persistent storage is unavailable")]
    Unavailable,
    /// Storage exists but refused the operation (quota, privacy mode).
    #[error("storage rejected {op} for key '{key}': {reason}")]
    Rejected {
        /// `read` or `write`.
        op: &'static str,
        /// Key involved.
        key: String,
        /// Host-provided reason.
        reason: String,
    },
}

/// Host environment seen by the theme store.
pub trait ThemeBackend {
    /// Read a persisted value.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persist a value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Add or remove the document-level dark marker.
    fn mark_root(&mut self, theme: Theme);
}

/// Holds the current theme and writes every change through to the backend.
pub struct ThemeStore {
    current: Theme,
    persistent: bool,
    backend: Box<dyn ThemeBackend>,
}

impl ThemeStore {
    /// Initialize from the persisted preference, defaulting to dark.
    ///
    /// Applies the root marker for the adopted value.
    pub fn load(mut backend: Box<dyn ThemeBackend>) -> Self {
        let (current, persistent) = match backend.read(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse::<Theme>() {
                Ok(theme) => (theme, true),
                Err(e) => {
                    tracing::warn!("ignoring persisted theme: {e}");
                    (Theme::default(), true)
                }
            },
            Ok(None) => (Theme::default(), true),
            Err(e) => {
                tracing::debug!("theme store running in memory: {e}");
                (Theme::default(), false)
            }
        };
        backend.mark_root(current);
        tracing::debug!(theme = %current, persistent, "theme store initialized");
        Self {
            current,
            persistent,
            backend,
        }
    }

    /// Start from a known theme without reading storage.
    ///
    /// Used for pre-rendering, where the caller picks the variant and the
    /// backend is usually [`PrerenderBackend`]. Toggles stay in memory.
    pub fn with_theme(theme: Theme, backend: Box<dyn ThemeBackend>) -> Self {
        Self {
            current: theme,
            persistent: false,
            backend,
        }
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Whether changes are written to durable storage.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Invert the theme, persist it, mark the root, and return the new value.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.current = next;
        if self.persistent {
            if let Err(e) = self.backend.write(THEME_STORAGE_KEY, next.as_str()) {
                tracing::warn!(theme = %next, "theme preference not saved: {e}");
            }
        }
        self.backend.mark_root(next);
        tracing::debug!(theme = %next, "theme toggled");
        next
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current)
            .field("persistent", &self.persistent)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    entries: HashMap<String, String>,
    root: Option<Theme>,
}

/// Session-only backend. Clones share the same state, so a test can keep a
/// handle after moving one into a store and "reload" by loading a new store.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryBackend {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let backend = Self::default();
        backend
            .state
            .borrow_mut()
            .entries
            .insert(key.to_string(), value.to_string());
        backend
    }

    /// Current value stored under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.state.borrow().entries.get(key).cloned()
    }

    /// Last theme applied to the root marker, if any.
    pub fn root_theme(&self) -> Option<Theme> {
        self.state.borrow().root
    }
}

impl ThemeBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.state
            .borrow_mut()
            .entries
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn mark_root(&mut self, theme: Theme) {
        self.state.borrow_mut().root = Some(theme);
    }
}

/// Backend for non-interactive rendering: no storage, no live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrerenderBackend;

impl ThemeBackend for PrerenderBackend {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn mark_root(&mut self, _theme: Theme) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Storage that reads fine but refuses writes.
    struct ReadOnlyBackend;

    impl ThemeBackend for ReadOnlyBackend {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(Some("light".into()))
        }

        fn write(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Rejected {
                op: "write",
                key: key.to_string(),
                reason: "quota exceeded".into(),
            })
        }

        fn mark_root(&mut self, _theme: Theme) {}
    }

    /// Refuses the first `failures_left` writes, then behaves normally.
    struct FlakyBackend {
        inner: MemoryBackend,
        failures_left: usize,
    }

    impl ThemeBackend for FlakyBackend {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.read(key)
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.failures_left > 0 {
                self.failures_left -= 1;
                return Err(StorageError::Rejected {
                    op: "write",
                    key: key.to_string(),
                    reason: "storage busy".into(),
                });
            }
            self.inner.write(key, value)
        }

        fn mark_root(&mut self, theme: Theme) {
            self.inner.mark_root(theme);
        }
    }

    #[test]
    fn defaults_to_dark_without_preference() {
        let backend = MemoryBackend::new();
        let store = ThemeStore::load(Box::new(backend.clone()));
        assert_eq!(store.theme(), Theme::Dark);
        assert!(store.is_persistent());
        assert_eq!(backend.root_theme(), Some(Theme::Dark));
        assert_eq!(backend.get(THEME_STORAGE_KEY), None);
    }

    #[test]
    fn adopts_persisted_light() {
        let backend = MemoryBackend::with_entry(THEME_STORAGE_KEY, "light");
        let store = ThemeStore::load(Box::new(backend.clone()));
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(backend.root_theme(), Some(Theme::Light));
    }

    #[test]
    fn falls_back_on_garbage_preference() {
        let backend = MemoryBackend::with_entry(THEME_STORAGE_KEY, "sepia");
        let store = ThemeStore::load(Box::new(backend));
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn toggle_writes_through() {
        let backend = MemoryBackend::new();
        let mut store = ThemeStore::load(Box::new(backend.clone()));
        for _ in 0..3 {
            let next = store.toggle();
            assert_eq!(next, store.theme());
            assert_eq!(backend.get(THEME_STORAGE_KEY).as_deref(), Some(next.as_str()));
            assert_eq!(backend.root_theme(), Some(next));
        }
    }

    #[test]
    fn double_toggle_returns_to_start() {
        for start in ["dark", "light"] {
            let backend = MemoryBackend::with_entry(THEME_STORAGE_KEY, start);
            let mut store = ThemeStore::load(Box::new(backend.clone()));
            let initial = store.theme();
            store.toggle();
            store.toggle();
            assert_eq!(store.theme(), initial);
            assert_eq!(backend.get(THEME_STORAGE_KEY).as_deref(), Some(start));
        }
    }

    #[test]
    fn preference_survives_reload() {
        let backend = MemoryBackend::new();

        let mut first_visit = ThemeStore::load(Box::new(backend.clone()));
        assert_eq!(first_visit.theme(), Theme::Dark);
        assert_eq!(first_visit.toggle(), Theme::Light);
        assert_eq!(backend.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
        drop(first_visit);

        let second_visit = ThemeStore::load(Box::new(backend.clone()));
        assert_eq!(second_visit.theme(), Theme::Light);
    }

    #[test]
    fn unavailable_storage_runs_in_memory() {
        let mut store = ThemeStore::load(Box::new(PrerenderBackend));
        assert_eq!(store.theme(), Theme::Dark);
        assert!(!store.is_persistent());
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
    }

    #[test]
    fn rejected_write_keeps_toggling() {
        let mut store = ThemeStore::load(Box::new(ReadOnlyBackend));
        assert_eq!(store.theme(), Theme::Light);
        assert!(store.is_persistent());
        assert_eq!(store.toggle(), Theme::Dark);
        assert!(store.is_persistent());
        assert_eq!(store.toggle(), Theme::Light);
    }

    #[test]
    fn write_recovers_after_one_rejection() {
        let storage = MemoryBackend::with_entry(THEME_STORAGE_KEY, "light");
        let backend = FlakyBackend {
            inner: storage.clone(),
            failures_left: 1,
        };
        let mut store = ThemeStore::load(Box::new(backend));

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
        assert_eq!(storage.root_theme(), Some(Theme::Dark));

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        drop(store);

        let reloaded = ThemeStore::load(Box::new(storage.clone()));
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn with_theme_skips_storage() {
        let backend = MemoryBackend::with_entry(THEME_STORAGE_KEY, "dark");
        let store = ThemeStore::with_theme(Theme::Light, Box::new(backend.clone()));
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(backend.root_theme(), None);
    }

    #[test]
    fn storage_errors_describe_themselves() {
        let err = StorageError::Rejected {
            op: "write",
            key: "theme".into(),
            reason: "quota exceeded".into(),
        };
        assert_eq!(
            err.to_string(),
            "storage rejected write for key 'theme': quota exceeded"
        );
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "persistent storage is unavailable"
        );
    }
}
