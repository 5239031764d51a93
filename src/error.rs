//! Error types at the storage boundary.
//!
//! None of these ever reach the user: each call site recovers with a fixed
//! fallback (see `storage`).

/// Failure to reach or use durable preference storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("failed to read stored preference: {0}")]
    Read(String),
    #[error("failed to write preference: {0}")]
    Write(String),
}

/// A stored or tagged value that is neither `dark` nor `light`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preference {0:?}")]
pub struct UnknownPreference(pub String);
