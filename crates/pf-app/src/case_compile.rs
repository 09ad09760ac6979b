//! Build validated model inputs from a case definition.

use pf_compressor::{CompressorSpec, FlightCondition};
use pf_core::units::{dk, m, pa, volts, w};
use pf_project::CaseDef;
use pf_stack::StackDesign;
use pf_sweep::{AltitudeRange, AltitudeSweep};

use crate::error::AppResult;

/// Model objects for one case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseInputs {
    pub stack: StackDesign,
    pub flight: FlightCondition,
    pub compressor: CompressorSpec,
    pub range: AltitudeRange,
}

impl CaseInputs {
    /// Altitude sweep at the case's Mach number and ISA deviation.
    pub fn sweep(&self) -> AltitudeSweep {
        AltitudeSweep::isa(self.stack, self.compressor, self.flight, self.range)
    }
}

/// Compile a case into model inputs.
///
/// Range checks live in the model constructors, so this also rejects
/// cases that were never passed through `validate_case`.
pub fn compile_case(case: &CaseDef) -> AppResult<CaseInputs> {
    let stack = StackDesign::new(
        w(case.stack.power_w),
        volts(case.stack.cell_voltage_v),
        case.stack.air_excess_ratio,
    )?;
    let flight = FlightCondition::new(
        m(case.flight.altitude_m),
        case.flight.mach,
        dk(case.flight.isa_deviation_k),
    )?;
    let compressor = CompressorSpec::new(
        pa(case.compressor.outlet_pressure_pa),
        case.compressor.isentropic_efficiency,
    )?;
    let range = AltitudeRange::new(case.sweep.start_m, case.sweep.end_m, case.sweep.num_points)?;

    tracing::debug!(case = %case.name, %range, "compiled case");

    Ok(CaseInputs {
        stack,
        flight,
        compressor,
        range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn default_case_compiles() {
        let inputs = compile_case(&CaseDef::default()).unwrap();
        assert_eq!(inputs.stack.cell_voltage_v(), 0.7);
        assert_eq!(inputs.flight.mach(), 0.8);
        assert_eq!(inputs.range.num_points(), 1000);
    }

    #[test]
    fn zero_voltage_is_invalid_input() {
        let mut case = CaseDef::default();
        case.stack.cell_voltage_v = 0.0;
        let err = compile_case(&case).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(err.to_string().contains("cell voltage"));
    }
}
