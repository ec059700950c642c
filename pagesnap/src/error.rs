/// Errors reported by snap configuration and lifecycle operations.
///
/// A missing navigation target is not an error: it settles as a no-op.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum SnapError {
    #[error("snap duration must be greater than 0ms, got {0}ms")]
    InvalidDuration(f64),

    #[error("scroll listener is already registered")]
    AlreadyRegistered,

    #[error("scroll listener is not registered")]
    NotRegistered,
}

/// Validates a snap duration in milliseconds. `NaN` is rejected.
pub fn validate_duration(duration_ms: f64) -> Result<f64, SnapError> {
    if duration_ms > 0.0 {
        Ok(duration_ms)
    } else {
        Err(SnapError::InvalidDuration(duration_ms))
    }
}
