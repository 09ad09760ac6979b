use thiserror::Error;

pub type PfResult<T> = Result<T, PfError>;

/// Input checks shared by the model crates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PfError {
    #[error("Invalid input: {what} is not finite ({value})")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid input: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invalid input: {what} = {value} outside [{min}, {max}]")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
