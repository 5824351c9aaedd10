//! Browser backend: `window.localStorage` plus the `<html>` class list.

use maintainme_site::{StorageError, Theme, ThemeBackend};
use maintainme_site::theme::ROOT_MARKER_CLASS;
use wasm_bindgen::JsValue;

/// Theme backend for an interactive page.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserBackend;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

fn rejected(op: &'static str, key: &str, err: JsValue) -> StorageError {
    StorageError::Rejected {
        op,
        key: key.to_string(),
        reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

impl ThemeBackend for BrowserBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| rejected("read", key, e))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| rejected("write", key, e))
    }

    fn mark_root(&mut self, theme: Theme) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1(ROOT_MARKER_CLASS)
        } else {
            classes.remove_1(ROOT_MARKER_CLASS)
        };
        if let Err(e) = result {
            tracing::warn!("could not update root marker: {e:?}");
        }
    }
}
