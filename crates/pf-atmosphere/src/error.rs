//! Atmosphere lookup errors.

use pf_core::PfError;
use thiserror::Error;

/// Result type for atmosphere lookups.
pub type AtmosphereResult<T> = Result<T, AtmosphereError>;

/// Errors that can occur while evaluating an atmosphere model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AtmosphereError {
    /// Input outside the validity range of the model.
    #[error("Invalid input: {what} = {value} outside model range [{min}, {max}]")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Invalid argument (non-finite, non-physical).
    #[error("Invalid input: {what}")]
    InvalidArg { what: &'static str },
}

impl From<AtmosphereError> for PfError {
    fn from(err: AtmosphereError) -> Self {
        match err {
            AtmosphereError::OutOfRange {
                what,
                value,
                min,
                max,
            } => PfError::OutOfRange {
                what,
                value,
                min,
                max,
            },
            AtmosphereError::InvalidArg { what } => PfError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_labelled_invalid_input() {
        let err = AtmosphereError::OutOfRange {
            what: "altitude",
            value: 25_000.0,
            min: 0.0,
            max: 20_000.0,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid input"));
        assert!(msg.contains("altitude"));
        assert!(msg.contains("25000"));
    }

    #[test]
    fn error_to_pf_error() {
        let err = AtmosphereError::InvalidArg { what: "altitude" };
        let pf: PfError = err.into();
        assert!(matches!(pf, PfError::InvalidArg { what: "altitude" }));
    }
}
