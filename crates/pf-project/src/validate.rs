//! Case validation logic.
//!
//! Mirrors the physical checks of the model crates so a bad file is
//! rejected with the offending field name before anything is evaluated.

use crate::schema::{CaseDef, CompressorDef, FlightDef, StackDef, SweepDef};
use pf_atmosphere::isa::{MAX_ALTITUDE_M, MIN_ALTITUDE_M};
use pf_core::constants::LHV_CELL_VOLTAGE;
use pf_sweep::AltitudeRange;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn finite(field: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

pub fn validate_case(case: &CaseDef) -> Result<(), ValidationError> {
    if case.version == 0 || case.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    validate_stack(&case.stack)?;
    validate_flight(&case.flight)?;
    validate_compressor(&case.compressor)?;
    validate_sweep(&case.sweep)?;
    Ok(())
}

fn validate_stack(stack: &StackDef) -> Result<(), ValidationError> {
    if finite("stack.power_w", stack.power_w)? <= 0.0 {
        return Err(invalid("stack.power_w", stack.power_w, "must be positive"));
    }
    let uc = finite("stack.cell_voltage_v", stack.cell_voltage_v)?;
    if uc <= 0.0 || uc > LHV_CELL_VOLTAGE {
        return Err(invalid(
            "stack.cell_voltage_v",
            uc,
            "must be in (0, 1.254] V",
        ));
    }
    if finite("stack.air_excess_ratio", stack.air_excess_ratio)? <= 1.0 {
        return Err(invalid(
            "stack.air_excess_ratio",
            stack.air_excess_ratio,
            "must be greater than 1",
        ));
    }
    Ok(())
}

fn validate_flight(flight: &FlightDef) -> Result<(), ValidationError> {
    validate_altitude("flight.altitude_m", flight.altitude_m)?;
    if finite("flight.mach", flight.mach)? < 0.0 {
        return Err(invalid("flight.mach", flight.mach, "must be non-negative"));
    }
    finite("flight.isa_deviation_k", flight.isa_deviation_k)?;
    Ok(())
}

fn validate_compressor(compressor: &CompressorDef) -> Result<(), ValidationError> {
    if finite("compressor.outlet_pressure_pa", compressor.outlet_pressure_pa)? <= 0.0 {
        return Err(invalid(
            "compressor.outlet_pressure_pa",
            compressor.outlet_pressure_pa,
            "must be positive",
        ));
    }
    let eta = finite(
        "compressor.isentropic_efficiency",
        compressor.isentropic_efficiency,
    )?;
    if eta <= 0.0 || eta > 1.0 {
        return Err(invalid(
            "compressor.isentropic_efficiency",
            eta,
            "must be in (0, 1]",
        ));
    }
    Ok(())
}

fn validate_sweep(sweep: &SweepDef) -> Result<(), ValidationError> {
    validate_altitude("sweep.start_m", sweep.start_m)?;
    validate_altitude("sweep.end_m", sweep.end_m)?;
    if sweep.num_points < 2 || sweep.num_points > AltitudeRange::MAX_POINTS {
        return Err(invalid(
            "sweep.num_points",
            sweep.num_points as f64,
            "sweep must have between 2 and 100000 points",
        ));
    }
    if sweep.start_m == sweep.end_m {
        return Err(invalid(
            "sweep.end_m",
            sweep.end_m,
            "start and end altitudes must be different",
        ));
    }
    Ok(())
}

fn validate_altitude(field: &str, h: f64) -> Result<(), ValidationError> {
    let h = finite(field, h)?;
    if !(MIN_ALTITUDE_M..=MAX_ALTITUDE_M).contains(&h) {
        return Err(invalid(field, h, "outside standard atmosphere range 0-20000 m"));
    }
    Ok(())
}
