//! Durable preference storage and its fallback policy.
//!
//! Storage is a convenience. A failed read means "use dark", a failed write
//! means "the current page is still themed, it just won't survive a reload".

use crate::error::StorageError;
use crate::preference::ThemePreference;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Key-value access to the single persisted preference entry.
pub trait PreferenceStore {
    /// Raw stored text, `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage cannot be reached or read.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored text.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage is unavailable, disabled by
    /// policy, or out of quota.
    fn write(&mut self, value: &str) -> Result<(), StorageError>;
}

/// Read the persisted preference, falling back to dark on absence, failure,
/// or an unrecognized value.
pub fn load_preference<S: PreferenceStore + ?Sized>(store: &S) -> ThemePreference {
    match store.read() {
        Ok(Some(raw)) => match raw.parse::<ThemePreference>() {
            Ok(pref) => pref,
            Err(err) => {
                log::debug!("{err}; using {}", ThemePreference::default());
                ThemePreference::default()
            }
        },
        Ok(None) => ThemePreference::default(),
        Err(err) => {
            log::warn!("{err}; using {}", ThemePreference::default());
            ThemePreference::default()
        }
    }
}

/// Persist `pref`. Returns whether the write landed.
pub fn persist_preference<S: PreferenceStore + ?Sized>(store: &mut S, pref: ThemePreference) -> bool {
    match store.write(pref.as_str()) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("{err}; {pref} applied for this page only");
            false
        }
    }
}
