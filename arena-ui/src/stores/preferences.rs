//! Persistent preference storage
//!
//! Backends report failures through [`PreferenceError`]; callers use the
//! best-effort `get`/`set` wrappers, which treat any failure as "absent" or
//! "not written".

use crate::error::PreferenceError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, warn};

/// Key under which the color theme is persisted
pub const THEME_KEY: &str = "theme";

/// Synchronous string key-value storage that outlives a page load.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError>;

    /// Read a value, treating an unavailable or failing backend as absent.
    fn get(&self, key: &str) -> Option<String> {
        match self.read(key) {
            Ok(value) => value,
            Err(e) => {
                debug!("Preference read of '{}' skipped: {}", key, e);
                None
            }
        }
    }

    /// Write a value, dropping the write if the backend fails.
    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.write(key, value) {
            warn!("Preference write of '{}' dropped: {}", key, e);
        }
    }
}

/// Browser `localStorage`.
///
/// Outside a browser (native builds, server-side rendering) every call
/// reports [`PreferenceError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePreferences;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, PreferenceError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(PreferenceError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStoragePreferences {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| PreferenceError::Rejected {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| PreferenceError::Rejected {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for LocalStoragePreferences {
    fn read(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
        Err(PreferenceError::Unavailable)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(PreferenceError::Unavailable)
    }
}

/// A backend that is never available (server-side rendering, headless runs)
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPreferences;

impl PreferenceStore for NoPreferences {
    fn read(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
        Err(PreferenceError::Unavailable)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(PreferenceError::Unavailable)
    }
}

/// In-memory preferences.
///
/// Clones share the same map, so a second store built from a clone sees what
/// the first one persisted. Every accepted write is also appended to a log.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<Vec<(String, String)>>>,
    reject_writes: Rc<Cell<bool>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a single pre-populated entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let prefs = Self::new();
        prefs
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        prefs
    }

    /// When set, every write fails with [`PreferenceError::Rejected`] (quota exceeded, private mode).
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Accepted writes, oldest first
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.value(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if self.reject_writes.get() {
            return Err(PreferenceError::Rejected {
                key: key.to_string(),
                reason: "writes disabled".to_string(),
            });
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}
