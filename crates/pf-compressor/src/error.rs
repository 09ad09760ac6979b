//! Error types for compressor calculations.

use pf_atmosphere::AtmosphereError;
use pf_core::PfError;
use pf_stack::StackError;
use thiserror::Error;

/// Errors that can occur during compressor calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompressorError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    #[error(transparent)]
    Atmosphere(#[from] AtmosphereError),

    #[error(transparent)]
    Stack(#[from] StackError),
}

pub type CompressorResult<T> = Result<T, CompressorError>;

impl From<PfError> for CompressorError {
    fn from(e: PfError) -> Self {
        match e {
            PfError::NonFinite { what, .. }
            | PfError::InvalidArg { what }
            | PfError::OutOfRange { what, .. } => CompressorError::InvalidInput { what },
        }
    }
}

impl From<CompressorError> for PfError {
    fn from(e: CompressorError) -> Self {
        match e {
            CompressorError::InvalidInput { what } => PfError::InvalidArg { what },
            CompressorError::Atmosphere(e) => e.into(),
            CompressorError::Stack(e) => e.into(),
        }
    }
}
