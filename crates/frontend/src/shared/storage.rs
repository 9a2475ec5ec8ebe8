//! Browser localStorage access.
//!
//! A single global key-value store shared by every tab of the application.
//! Writes from *other* tabs surface through the document `storage` event;
//! same-tab writes do not fire it and propagate through normal signal
//! updates instead.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the raw string stored under `key`.
pub fn get_raw(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Serialize `value` as JSON and store it under `key`.
///
/// Storage being unavailable or full degrades to a logged no-op; the
/// in-memory state stays authoritative for this tab.
pub fn set_json<T: serde::Serialize>(key: &str, value: &T) {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize value for key '{}': {}", key, e);
            return;
        }
    };
    if let Some(storage) = local_storage() {
        if storage.set_item(key, &json).is_err() {
            log::warn!("Failed to persist key '{}' to localStorage", key);
        }
    }
}

/// Remove the value stored under `key`.
pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Subscribe to cross-document changes of one storage key.
///
/// `callback` receives the new raw value (`None` when the key was removed).
/// The `storage` event only fires in *other* documents than the one that
/// wrote, so this never echoes this tab's own writes.
pub fn on_external_change<F>(key: &'static str, mut callback: F)
where
    F: FnMut(Option<String>) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: web_sys::StorageEvent| {
        if event.key().as_deref() == Some(key) {
            callback(event.new_value());
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = window() {
        if window
            .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("Failed to subscribe to storage events for '{}'", key);
        }
    }
    // Listener lives for the lifetime of the page
    closure.forget();
}
