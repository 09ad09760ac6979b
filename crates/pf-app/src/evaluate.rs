//! Design point, atmosphere and sweep evaluation.

use pf_atmosphere::{AtmosphereModel, AtmosphereState, IsaAtmosphere};
use pf_compressor::{OperatingPoint, operating_point};
use pf_core::units::convert::{meters_to_feet, mps_to_knots};
use pf_core::units::{dk, m};
use pf_stack::ReactantFlows;
use pf_sweep::SweepSeries;
use serde::Serialize;

use crate::case_compile::CaseInputs;
use crate::error::AppResult;

/// Stack flows plus compressor state at the case's flight condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignPointReport {
    pub flows: ReactantFlows,
    pub operating_point: OperatingPoint,
}

/// Flat SI summary of a [`DesignPointReport`] for text/YAML output.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DesignPointSummary {
    pub total_current_a: f64,
    pub h2_mol_s: f64,
    pub h2_g_s: f64,
    pub o2_mol_s: f64,
    pub o2_g_s: f64,
    pub air_mol_s: f64,
    pub air_g_s: f64,
    pub water_g_s: f64,
    pub efficiency_lhv: f64,
    pub waste_heat_w: f64,
    pub altitude_m: f64,
    pub mach: f64,
    pub inlet_total_pressure_pa: f64,
    pub inlet_total_temperature_k: f64,
    pub pressure_ratio: f64,
    pub outlet_total_temperature_k: f64,
    pub outlet_total_temperature_real_k: f64,
    pub power_ratio: f64,
    pub compressor_power_w: f64,
}

impl DesignPointReport {
    pub fn summary(&self) -> DesignPointSummary {
        let f = &self.flows;
        let op = &self.operating_point;
        DesignPointSummary {
            total_current_a: f.total_current_a(),
            h2_mol_s: f.hydrogen.molar_mol_s,
            h2_g_s: f.hydrogen.mass_g_s(),
            o2_mol_s: f.oxygen.molar_mol_s,
            o2_g_s: f.oxygen.mass_g_s(),
            air_mol_s: f.air.molar_mol_s,
            air_g_s: f.air.mass_g_s(),
            water_g_s: f.water.mass_g_s(),
            efficiency_lhv: f.efficiency_lhv,
            waste_heat_w: f.waste_heat_w(),
            altitude_m: op.flight.altitude_m(),
            mach: op.flight.mach(),
            inlet_total_pressure_pa: op.inlet_total_pressure_pa(),
            inlet_total_temperature_k: op.inlet_total_temperature_k(),
            pressure_ratio: op.pressure_ratio,
            outlet_total_temperature_k: op.outlet_total_temperature_k(),
            outlet_total_temperature_real_k: op.outlet_total_temperature_real_k(),
            power_ratio: op.power_ratio,
            compressor_power_w: op.shaft_power.value,
        }
    }
}

/// Evaluate stack flows and the compressor at the case flight condition.
pub fn evaluate_design_point(inputs: &CaseInputs) -> AppResult<DesignPointReport> {
    let flows = inputs.stack.reactant_flows();
    let op = operating_point(
        &IsaAtmosphere::new(),
        &inputs.flight,
        &inputs.compressor,
        &inputs.stack,
    )?;
    tracing::debug!(
        altitude_m = inputs.flight.altitude_m(),
        pressure_ratio = op.pressure_ratio,
        power_ratio = op.power_ratio,
        "evaluated design point"
    );
    if !op.requires_compression() {
        tracing::warn!(
            pressure_ratio = op.pressure_ratio,
            "ram pressure exceeds target outlet pressure; no compression needed"
        );
    }
    Ok(DesignPointReport {
        flows,
        operating_point: op,
    })
}

/// Evaluate the case's altitude sweep.
pub fn evaluate_sweep(inputs: &CaseInputs) -> AppResult<SweepSeries> {
    let series = inputs.sweep().collect_series()?;
    tracing::debug!(points = series.len(), "evaluated altitude sweep");
    Ok(series)
}

/// ISA state with aviation units alongside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereReport {
    pub state: AtmosphereState,
    pub altitude_ft: f64,
    pub speed_of_sound_kt: f64,
}

/// ISA lookup, optionally on an off-standard day.
pub fn evaluate_atmosphere(altitude_m: f64, isa_deviation_k: f64) -> AppResult<AtmosphereReport> {
    let isa = IsaAtmosphere::new();
    let state = isa.state_with_deviation(m(altitude_m), dk(isa_deviation_k))?;
    Ok(AtmosphereReport {
        altitude_ft: meters_to_feet(state.altitude_m()),
        speed_of_sound_kt: mps_to_knots(state.speed_of_sound_m_s()),
        state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case_compile::compile_case;
    use pf_project::CaseDef;

    #[test]
    fn design_point_summary_reference_values() {
        let inputs = compile_case(&CaseDef::default()).unwrap();
        let report = evaluate_design_point(&inputs).unwrap();
        let s = report.summary();
        assert!((s.total_current_a - 214_285.7).abs() < 0.1);
        assert!((s.air_g_s - 229.747).abs() < 1e-2);
        assert!((s.pressure_ratio - 4.35).abs() < 0.01);
        assert!(s.power_ratio > 0.0);
        assert!((s.compressor_power_w - s.power_ratio * 150e3).abs() < 1e-6);
    }

    #[test]
    fn atmosphere_report_units() {
        let r = evaluate_atmosphere(18_288.0, 0.0).unwrap();
        assert!((r.altitude_ft - 60_000.0).abs() < 1e-6);
        assert!((r.state.temperature_k() - 216.65).abs() < 1e-9);
        assert!(r.speed_of_sound_kt > 570.0 && r.speed_of_sound_kt < 575.0);
    }

    #[test]
    fn atmosphere_out_of_range() {
        assert!(evaluate_atmosphere(-100.0, 0.0).is_err());
    }
}
