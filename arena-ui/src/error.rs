use thiserror::Error;

/// Failures at the preference storage boundary.
///
/// These never leave the store: `PreferenceStore::get`/`set` log and swallow them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("preference storage is not available in this environment")]
    Unavailable,
    #[error("preference storage rejected '{key}': {reason}")]
    Rejected { key: String, reason: String },
}
