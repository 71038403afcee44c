//! Backend base-URL configuration, persisted in `localStorage`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::storage;

/// First-run backend address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// `localStorage` key the configured base URL persists under.
const STORAGE_KEY: &str = "apiUrl";

/// Backend configuration, provided to every panel via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigState {
    /// Root address all collection requests are built from. Never
    /// validated; a broken value just makes requests fail.
    pub base_url: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

/// Resolve the effective base URL from a persisted value, if any.
///
/// An empty persisted string counts as unset and falls back to the default.
pub fn resolve(stored: Option<String>) -> String {
    match stored {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_BASE_URL.to_owned(),
    }
}

/// Load the persisted configuration, falling back to the default.
pub fn load() -> ConfigState {
    ConfigState {
        base_url: resolve(storage::read(STORAGE_KEY)),
    }
}

/// Persist a newly configured base URL.
pub fn save(base_url: &str) {
    storage::write(STORAGE_KEY, base_url);
}
