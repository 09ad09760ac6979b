//! Error types for stack sizing.

use pf_core::PfError;
use thiserror::Error;

/// Errors raised while building a stack design point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StackError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    #[error("Non-finite value for {what}")]
    NonFinite { what: &'static str },
}

pub type StackResult<T> = Result<T, StackError>;

impl From<PfError> for StackError {
    fn from(e: PfError) -> Self {
        match e {
            PfError::NonFinite { what, .. } => StackError::NonFinite { what },
            PfError::InvalidArg { what } | PfError::OutOfRange { what, .. } => {
                StackError::InvalidInput { what }
            }
        }
    }
}

impl From<StackError> for PfError {
    fn from(e: StackError) -> Self {
        match e {
            StackError::InvalidInput { what } => PfError::InvalidArg { what },
            StackError::NonFinite { what } => PfError::NonFinite {
                what,
                value: f64::NAN,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StackError::InvalidInput {
            what: "cell voltage must be positive",
        };
        assert!(err.to_string().starts_with("Invalid input"));
        assert!(err.to_string().contains("cell voltage"));
    }

    #[test]
    fn error_conversion() {
        let pf: PfError = StackError::InvalidInput { what: "test" }.into();
        assert!(matches!(pf, PfError::InvalidArg { what: "test" }));

        let back: StackError = PfError::NonFinite {
            what: "power",
            value: f64::NAN,
        }
        .into();
        assert_eq!(back, StackError::NonFinite { what: "power" });
    }
}
