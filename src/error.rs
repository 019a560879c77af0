//! Error types for preference storage and parsing.
//!
//! Neither kind ever reaches the user. Store failures are logged by the
//! applier; parse failures make `set_preference` a no-op.

/// Failure talking to the persistent key-value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed for {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("storage remove failed for {key}: {reason}")]
    Remove { key: String, reason: String },
}

/// A raw control or stored value outside the domain of its preference key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("not an integer: {0}")]
    NotAnInteger(String),
    #[error("intensity out of range 0-100: {0}")]
    IntensityOutOfRange(i64),
    #[error("speed must be positive: {0}")]
    SpeedNotPositive(i64),
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("unknown preference key: {0}")]
    UnknownKey(String),
}
