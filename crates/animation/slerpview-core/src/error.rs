//! Error types for configuration handling.
//!
//! Numerical degeneracies inside the interpolation math are never errors:
//! they are clamped or fall back locally. Only committed configuration is
//! validated.

/// Rejected configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Duration is negative, NaN or infinite.
    #[error("duration must be finite and non-negative, got {duration}")]
    InvalidDuration { duration: f32 },

    /// A position, angle or quaternion component is NaN or infinite.
    #[error("non-finite value in {field}")]
    NonFinite { field: &'static str },

    /// Quaternion with (near) zero length cannot be normalized.
    #[error("quaternion {field} has zero length")]
    DegenerateQuaternion { field: &'static str },

    /// JSON could not be decoded into a config.
    #[error("failed to parse config: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
