//! pf-project: case file format, validation and interactive parameter bounds.

pub mod bounds;
pub mod schema;
pub mod validate;

use std::fs;
use std::path::Path;

pub use bounds::{ParameterBounds, SliderBounds};
pub use schema::*;
pub use validate::{ValidationError, validate_case};

/// Newest case file version understood by this build.
pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Case file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFormat {
    Yaml,
    Json,
}

impl CaseFormat {
    /// `.json` selects JSON, anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CaseFormat::Json,
            _ => CaseFormat::Yaml,
        }
    }

    fn parse(self, text: &str) -> ProjectResult<CaseDef> {
        Ok(match self {
            CaseFormat::Yaml => serde_yaml::from_str(text)?,
            CaseFormat::Json => serde_json::from_str(text)?,
        })
    }

    fn render(self, case: &CaseDef) -> ProjectResult<String> {
        Ok(match self {
            CaseFormat::Yaml => serde_yaml::to_string(case)?,
            CaseFormat::Json => serde_json::to_string_pretty(case)?,
        })
    }
}

/// Read, parse and validate a case file.
pub fn load(path: &Path, format: CaseFormat) -> ProjectResult<CaseDef> {
    let case = format.parse(&fs::read_to_string(path)?)?;
    validate_case(&case)?;
    Ok(case)
}

/// Validate, then write. Nothing is written for an invalid case.
pub fn save(path: &Path, case: &CaseDef, format: CaseFormat) -> ProjectResult<()> {
    validate_case(case)?;
    fs::write(path, format.render(case)?)?;
    Ok(())
}

pub fn load_yaml(path: &Path) -> ProjectResult<CaseDef> {
    load(path, CaseFormat::Yaml)
}

pub fn save_yaml(path: &Path, case: &CaseDef) -> ProjectResult<()> {
    save(path, case, CaseFormat::Yaml)
}

pub fn load_json(path: &Path) -> ProjectResult<CaseDef> {
    load(path, CaseFormat::Json)
}

pub fn save_json(path: &Path, case: &CaseDef) -> ProjectResult<()> {
    save(path, case, CaseFormat::Json)
}

/// Load with the format picked from the file extension.
pub fn load_case(path: &Path) -> ProjectResult<CaseDef> {
    load(path, CaseFormat::from_path(path))
}
