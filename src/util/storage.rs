//! Thin `localStorage` wrappers.
//!
//! Storage failures (denied access, quota) are swallowed; persistence is
//! best-effort and the in-memory value stays authoritative.

/// Read a value from `localStorage`, `None` when absent or unavailable.
pub fn read(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok().flatten()?;
    storage.get_item(key).ok().flatten()
}

/// Write a value to `localStorage`, ignoring failures.
pub fn write(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}
