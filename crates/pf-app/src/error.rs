//! Error types for the pf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the model crates
/// and provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case error: {0}")]
    Case(String),

    #[error("Failed to read case file: {path}")]
    CaseFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Case validation failed: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pf-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<pf_project::ProjectError> for AppError {
    fn from(err: pf_project::ProjectError) -> Self {
        match err {
            pf_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Case(other.to_string()),
        }
    }
}

impl From<pf_project::ValidationError> for AppError {
    fn from(err: pf_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<pf_stack::StackError> for AppError {
    fn from(err: pf_stack::StackError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<pf_atmosphere::AtmosphereError> for AppError {
    fn from(err: pf_atmosphere::AtmosphereError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<pf_compressor::CompressorError> for AppError {
    fn from(err: pf_compressor::CompressorError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<pf_sweep::SweepError> for AppError {
    fn from(err: pf_sweep::SweepError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
