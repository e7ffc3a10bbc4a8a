//! Error types shared across the workspace.

use thiserror::Error;

/// Stock-assessment primitive error type.
///
/// Configuration errors (`Config`) are raised once at model-build time and
/// are fatal; everything else is per-evaluation and is either propagated or
/// absorbed by the caller according to its own policy.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter or input shape.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Numeric computation failed.
    #[error("Computation error: {0}")]
    Computation(String),

    /// Requested variant exists but has no implementation yet.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Fatal model-configuration error (deprecated or inconsistent options).
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::Config("Spawn-Recr option 5 was removed".into());
        assert!(e.to_string().contains("Configuration error"));
    }
}
