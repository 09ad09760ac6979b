//! Case loading, saving and validation.

use std::path::Path;

use pf_project::{CaseDef, ProjectError};

use crate::error::{AppError, AppResult};

/// Load and validate a case (YAML, or JSON by extension).
pub fn load_case(path: &Path) -> AppResult<CaseDef> {
    let case = pf_project::load_case(path).map_err(|e| match e {
        ProjectError::Io(source) => AppError::CaseFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })?;
    tracing::debug!(path = %path.display(), name = %case.name, "loaded case");
    Ok(case)
}

/// Save a case as YAML.
pub fn save_case(path: &Path, case: &CaseDef) -> AppResult<()> {
    pf_project::save_yaml(path, case).map_err(|e| match e {
        ProjectError::Io(source) => AppError::FileWrite {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })?;
    tracing::debug!(path = %path.display(), "saved case");
    Ok(())
}

/// Validate a case against the model constraints.
pub fn validate_case(case: &CaseDef) -> AppResult<()> {
    pf_project::validate_case(case)?;
    Ok(())
}
