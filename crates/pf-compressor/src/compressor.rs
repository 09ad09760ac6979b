//! Compressor operating point.
//!
//! ## Model
//!
//! Ram compression at the intake, then the compressor up to `pt2`:
//!
//! ```text
//! pt1  = p(h) * (1 + (γ-1)/2 M²)^(γ/(γ-1))
//! π_c  = pt2 / pt1
//! Tt1  = T(h) + disa + (a(h) M)² / (2 cp)
//! Tt2  = Tt1 * π_c^((γ-1)/γ)                        (isentropic)
//! Pc/P = (λ_air/η_is) * M_air / (0.21 * 4 F Uc) * cp * Tt1 * (π_c^((γ-1)/γ) - 1)
//! ```
//!
//! `a(h)` is the standard-day speed of sound; the deviation only shifts the
//! static temperature.
//!
//! When `π_c <= 1` the ram pressure already meets the target. The formulas
//! are still evaluated and return a non-positive power ratio.

use crate::error::{CompressorError, CompressorResult};
use crate::flight::FlightCondition;
use pf_atmosphere::{AtmosphereModel, AtmosphereState};
use pf_core::constants::{CP_AIR, GAMMA_AIR, ISENTROPIC_EXPONENT_AIR};
use pf_core::numeric::{ensure_positive, ensure_positive_at_most};
use pf_core::units::{MassRate, Power, Pressure, Temperature, k, kgps, pa, w};
use pf_stack::StackDesign;
use uom::si::{pressure::pascal, thermodynamic_temperature::kelvin};

/// Target delivery pressure and isentropic efficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressorSpec {
    outlet_pressure: Pressure,
    isentropic_efficiency: f64,
}

impl CompressorSpec {
    /// # Errors
    /// Non-positive outlet pressure or an efficiency outside (0,1].
    pub fn new(outlet_pressure: Pressure, isentropic_efficiency: f64) -> CompressorResult<Self> {
        ensure_positive(outlet_pressure.value, "outlet total pressure must be positive")?;
        ensure_positive_at_most(
            isentropic_efficiency,
            1.0,
            "isentropic efficiency must be in (0,1]",
        )?;
        Ok(Self {
            outlet_pressure,
            isentropic_efficiency,
        })
    }

    pub fn outlet_pressure(&self) -> Pressure {
        self.outlet_pressure
    }

    pub fn outlet_pressure_pa(&self) -> f64 {
        self.outlet_pressure.get::<pascal>()
    }

    pub fn isentropic_efficiency(&self) -> f64 {
        self.isentropic_efficiency
    }
}

/// Compressor state at one flight condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub flight: FlightCondition,
    /// Standard-day ambient state at the flight altitude.
    pub ambient: AtmosphereState,
    pub inlet_total_pressure: Pressure,
    pub inlet_total_temperature: Temperature,
    pub pressure_ratio: f64,
    /// Isentropic outlet total temperature.
    pub outlet_total_temperature: Temperature,
    /// Outlet total temperature including compressor losses.
    pub outlet_total_temperature_real: Temperature,
    /// Compressor shaft power over stack electrical power.
    pub power_ratio: f64,
    pub shaft_power: Power,
    pub air_mass_flow: MassRate,
}

impl OperatingPoint {
    pub fn requires_compression(&self) -> bool {
        self.pressure_ratio > 1.0
    }

    pub fn inlet_total_pressure_pa(&self) -> f64 {
        self.inlet_total_pressure.get::<pascal>()
    }

    pub fn inlet_total_temperature_k(&self) -> f64 {
        self.inlet_total_temperature.get::<kelvin>()
    }

    pub fn outlet_total_temperature_k(&self) -> f64 {
        self.outlet_total_temperature.get::<kelvin>()
    }

    pub fn outlet_total_temperature_real_k(&self) -> f64 {
        self.outlet_total_temperature_real.get::<kelvin>()
    }
}

/// Evaluate the compressor for a stack design point at a flight condition.
pub fn operating_point(
    atmosphere: &dyn AtmosphereModel,
    flight: &FlightCondition,
    compressor: &CompressorSpec,
    stack: &StackDesign,
) -> CompressorResult<OperatingPoint> {
    let ambient = atmosphere.state(flight.altitude())?;
    let mach = flight.mach();

    let ram = 1.0 + 0.5 * (GAMMA_AIR - 1.0) * mach * mach;
    let pt1 = ambient.pressure_pa() * ram.powf(GAMMA_AIR / (GAMMA_AIR - 1.0));
    let pressure_ratio = compressor.outlet_pressure_pa() / pt1;

    let flight_speed = ambient.speed_of_sound_m_s() * mach;
    let tt1 = ambient.temperature_k()
        + flight.isa_deviation_k()
        + flight_speed * flight_speed / (2.0 * CP_AIR);
    if tt1 <= 0.0 {
        return Err(CompressorError::InvalidInput {
            what: "inlet total temperature must be positive",
        });
    }

    let temperature_ratio = pressure_ratio.powf(ISENTROPIC_EXPONENT_AIR);
    let tt2 = tt1 * temperature_ratio;
    let eta = compressor.isentropic_efficiency();
    let tt2_real = tt1 * (1.0 + (temperature_ratio - 1.0) / eta);

    let specific_work = CP_AIR * tt1 * (temperature_ratio - 1.0);
    let power_ratio = stack.air_mass_flow_per_watt() / eta * specific_work;
    let air_mass_flow = stack.air_mass_flow_per_watt() * stack.power_w();

    Ok(OperatingPoint {
        flight: *flight,
        ambient,
        inlet_total_pressure: pa(pt1),
        inlet_total_temperature: k(tt1),
        pressure_ratio,
        outlet_total_temperature: k(tt2),
        outlet_total_temperature_real: k(tt2_real),
        power_ratio,
        shaft_power: w(power_ratio * stack.power_w()),
        air_mass_flow: kgps(air_mass_flow),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_atmosphere::{AtmosphereError, IsaAtmosphere};
    use pf_core::units::{dk, m, volts};

    fn stack() -> StackDesign {
        StackDesign::new(w(150e3), volts(0.7), 3.0).unwrap()
    }

    fn eval(altitude_m: f64, mach: f64) -> OperatingPoint {
        let flight = FlightCondition::new(m(altitude_m), mach, dk(0.0)).unwrap();
        let spec = CompressorSpec::new(pa(1.5e5), 0.7).unwrap();
        operating_point(&IsaAtmosphere::new(), &flight, &spec, &stack()).unwrap()
    }

    #[test]
    fn rejects_invalid_compressor_inputs() {
        assert!(CompressorSpec::new(pa(0.0), 0.7).is_err());
        assert!(CompressorSpec::new(pa(1.5e5), 0.0).is_err());
        assert!(CompressorSpec::new(pa(1.5e5), 1.01).is_err());
        assert!(CompressorSpec::new(pa(1.5e5), 1.0).is_ok());
    }

    #[test]
    fn pressure_ratio_near_top_of_troposphere() {
        let op = eval(10_000.0, 0.8);
        assert!((op.pressure_ratio - 3.72).abs() < 0.01);
        let op = eval(11_000.0, 0.8);
        assert!((op.pressure_ratio - 4.35).abs() < 0.01);
    }

    #[test]
    fn static_intake_has_no_ram_rise() {
        let op = eval(5_000.0, 0.0);
        assert!((op.inlet_total_pressure_pa() - op.ambient.pressure_pa()).abs() < 1e-9);
        assert!((op.inlet_total_temperature_k() - op.ambient.temperature_k()).abs() < 1e-9);
    }

    #[test]
    fn power_ratio_matches_closed_form() {
        let op = eval(8_000.0, 0.8);
        let k_exp = 0.4 / 1.4;
        let expected = (3.0 / 0.7) * (28.965e-3 / (0.21 * 4.0 * 96_485.0 * 0.7))
            * 1004.0
            * op.inlet_total_temperature_k()
            * (op.pressure_ratio.powf(k_exp) - 1.0);
        assert!((op.power_ratio - expected).abs() < 1e-12);
        assert!((op.shaft_power.value - expected * 150e3).abs() < 1e-6);
        assert!((op.power_ratio - 0.1973).abs() < 1e-3);
    }

    #[test]
    fn isentropic_outlet_temperature() {
        let op = eval(10_000.0, 0.8);
        let expected = op.inlet_total_temperature_k() * op.pressure_ratio.powf(0.4 / 1.4);
        assert!((op.outlet_total_temperature_k() - expected).abs() < 1e-9);
        assert!((op.outlet_total_temperature_k() - 366.47).abs() < 0.01);
        // (Tt2 - Tt1) / eta
        let real_rise = (expected - op.inlet_total_temperature_k()) / 0.7;
        assert!(
            (op.outlet_total_temperature_real_k() - op.inlet_total_temperature_k() - real_rise)
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn real_outlet_hotter_than_isentropic() {
        let op = eval(10_000.0, 0.8);
        assert!(op.outlet_total_temperature_real_k() > op.outlet_total_temperature_k());
        assert!(op.outlet_total_temperature_k() > op.inlet_total_temperature_k());
    }

    #[test]
    fn sea_level_cruise_needs_no_compression() {
        let op = eval(0.0, 0.8);
        assert!(!op.requires_compression());
        assert!(op.power_ratio < 0.0);
    }

    #[test]
    fn altitude_outside_model_is_invalid_input() {
        let flight = FlightCondition::new(m(25_000.0), 0.8, dk(0.0)).unwrap();
        let spec = CompressorSpec::new(pa(1.5e5), 0.7).unwrap();
        let err = operating_point(&IsaAtmosphere::new(), &flight, &spec, &stack()).unwrap_err();
        assert!(matches!(
            err,
            CompressorError::Atmosphere(AtmosphereError::OutOfRange { .. })
        ));
        assert!(err.to_string().starts_with("Invalid input"));
    }

    #[test]
    fn deviation_raises_inlet_temperature() {
        let spec = CompressorSpec::new(pa(1.5e5), 0.7).unwrap();
        let std = FlightCondition::new(m(6_000.0), 0.6, dk(0.0)).unwrap();
        let hot = FlightCondition::new(m(6_000.0), 0.6, dk(20.0)).unwrap();
        let isa = IsaAtmosphere::new();
        let a = operating_point(&isa, &std, &spec, &stack()).unwrap();
        let b = operating_point(&isa, &hot, &spec, &stack()).unwrap();
        let rise = b.inlet_total_temperature_k() - a.inlet_total_temperature_k();
        assert!((rise - 20.0).abs() < 1e-9);
        assert_eq!(a.pressure_ratio, b.pressure_ratio);
        assert!(b.power_ratio > a.power_ratio);
    }
}
