//! Scalar input checks.
//!
//! Model constructors run every user value through these before storing it,
//! so evaluation code can assume finite, in-domain numbers.

use crate::{PfError, PfResult};

pub fn ensure_finite(v: f64, what: &'static str) -> PfResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PfError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: f64, what: &'static str) -> PfResult<f64> {
    if ensure_finite(v, what)? > 0.0 {
        Ok(v)
    } else {
        Err(PfError::InvalidArg { what })
    }
}

/// Finite and in the half-open interval (0, max].
pub fn ensure_positive_at_most(v: f64, max: f64, what: &'static str) -> PfResult<f64> {
    let v = ensure_positive(v, what)?;
    if v <= max {
        Ok(v)
    } else {
        Err(PfError::OutOfRange {
            what,
            value: v,
            min: 0.0,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(f64::NAN, "mach").unwrap_err();
        assert!(matches!(err, PfError::NonFinite { what: "mach", .. }));
        assert!(err.to_string().starts_with("Invalid input"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert_eq!(ensure_positive(0.7, "voltage"), Ok(0.7));
        assert_eq!(
            ensure_positive(0.0, "voltage"),
            Err(PfError::InvalidArg { what: "voltage" })
        );
        assert!(ensure_positive(-1.0, "voltage").is_err());
        assert!(matches!(
            ensure_positive(f64::INFINITY, "voltage"),
            Err(PfError::NonFinite { .. })
        ));
    }

    #[test]
    fn upper_bound_is_inclusive() {
        assert_eq!(ensure_positive_at_most(1.0, 1.0, "efficiency"), Ok(1.0));
        assert!(matches!(
            ensure_positive_at_most(1.01, 1.0, "efficiency"),
            Err(PfError::OutOfRange { max, .. }) if max == 1.0
        ));
        assert!(matches!(
            ensure_positive_at_most(0.0, 1.0, "efficiency"),
            Err(PfError::InvalidArg { .. })
        ));
    }
}
