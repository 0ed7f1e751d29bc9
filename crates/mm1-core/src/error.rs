//! Simulator error type.
//!
//! Sub-crates define their own error enums and wrap `QueueError` as one
//! variant via `From`.

use thiserror::Error;

/// The top-level error type for `mm1-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum QueueError {
    /// A mean, horizon or window that must be a finite positive number was not.
    #[error("invalid parameter `{name}`: {value} (must be finite and > 0)")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl QueueError {
    /// Return `Ok(value)` if `value` is finite and strictly positive,
    /// otherwise `InvalidParameter` naming the offending parameter.
    pub fn check_positive(name: &'static str, value: f64) -> QueueResult<f64> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(QueueError::InvalidParameter { name, value })
        }
    }
}

/// Shorthand result type for all `mm1-*` crates.
pub type QueueResult<T> = Result<T, QueueError>;
