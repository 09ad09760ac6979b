//! Shared application service layer for pacflow.
//!
//! This crate provides a unified interface for both CLI and GUI frontends,
//! centralizing case loading, model construction, evaluation and export.

pub mod case_compile;
pub mod case_service;
pub mod error;
pub mod evaluate;
pub mod export;

// Re-export key types for convenience
pub use case_compile::{CaseInputs, compile_case};
pub use case_service::{load_case, save_case, validate_case};
pub use error::{AppError, AppResult};
pub use evaluate::{
    AtmosphereReport, DesignPointReport, evaluate_atmosphere, evaluate_design_point, evaluate_sweep,
};
pub use export::{sweep_csv, write_sweep_csv};
