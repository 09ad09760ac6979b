//! International Standard Atmosphere, two-layer form.
//!
//! ```text
//! h <= 11 km:  T = T0 - 6.5 K/km * h
//!              p = p0 * (1 - 0.0065 h / T0)^5.2561
//! h >  11 km:  T = 216.65 K
//!              p = p11 * exp(-g / (r * 216.65) * (h - 11000))
//! ```
//!
//! `p11` is the troposphere law evaluated at 11 km (about 22631 Pa), so the
//! pressure profile stays continuous and strictly decreasing. The rounded
//! tabulated value 22632 Pa would put a small upward step at the tropopause.

use crate::error::{AtmosphereError, AtmosphereResult};
use crate::model::AtmosphereModel;
use pf_core::constants::{G0_MPS2, GAMMA_AIR};
use pf_core::units::{Length, Pressure, Temperature, k, pa};

/// Sea level pressure [Pa]
pub const P0_PA: f64 = 101_325.0;
/// Sea level density [kg/m^3]
pub const RHO0_KG_M3: f64 = 1.225;
/// Sea level temperature [K]
pub const T0_K: f64 = 288.15;
/// Specific gas constant of air [J/(kg K)]
pub const R_AIR: f64 = 287.04;
/// Troposphere lapse rate [K/m]
pub const LAPSE_RATE_K_PER_M: f64 = 0.0065;
/// Troposphere pressure exponent g / (r * lapse)
pub const TROPOSPHERE_EXPONENT: f64 = 5.2561;
/// Tropopause altitude [m]
pub const TROPOPAUSE_M: f64 = 11_000.0;
/// Tropopause temperature [K]
pub const TROPOPAUSE_T_K: f64 = 216.65;
/// Tabulated tropopause pressure [Pa], kept for reference checks.
pub const TROPOPAUSE_P_TABLE_PA: f64 = 22_632.0;

/// Lowest altitude served [m]
pub const MIN_ALTITUDE_M: f64 = 0.0;
/// Top of the isothermal layer [m]
pub const MAX_ALTITUDE_M: f64 = 20_000.0;

/// ICAO standard atmosphere up to 20 km.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsaAtmosphere;

impl IsaAtmosphere {
    pub fn new() -> Self {
        Self
    }

    /// Tropopause pressure from the troposphere law.
    pub fn tropopause_pressure_pa(&self) -> f64 {
        troposphere_pressure_pa(TROPOPAUSE_M)
    }

    fn checked_altitude(&self, altitude: Length) -> AtmosphereResult<f64> {
        let h = altitude.value;
        if !h.is_finite() {
            return Err(AtmosphereError::InvalidArg {
                what: "altitude must be finite",
            });
        }
        if !(MIN_ALTITUDE_M..=MAX_ALTITUDE_M).contains(&h) {
            return Err(AtmosphereError::OutOfRange {
                what: "altitude [m]",
                value: h,
                min: MIN_ALTITUDE_M,
                max: MAX_ALTITUDE_M,
            });
        }
        Ok(h)
    }
}

impl AtmosphereModel for IsaAtmosphere {
    fn name(&self) -> &str {
        "ISA"
    }

    fn gas_constant(&self) -> f64 {
        R_AIR
    }

    fn gamma(&self) -> f64 {
        GAMMA_AIR
    }

    fn temperature(&self, altitude: Length) -> AtmosphereResult<Temperature> {
        let h = self.checked_altitude(altitude)?;
        let t = if h <= TROPOPAUSE_M {
            T0_K - LAPSE_RATE_K_PER_M * h
        } else {
            TROPOPAUSE_T_K
        };
        Ok(k(t))
    }

    fn pressure(&self, altitude: Length) -> AtmosphereResult<Pressure> {
        let h = self.checked_altitude(altitude)?;
        let p = if h <= TROPOPAUSE_M {
            troposphere_pressure_pa(h)
        } else {
            self.tropopause_pressure_pa()
                * (-G0_MPS2 / (R_AIR * TROPOPAUSE_T_K) * (h - TROPOPAUSE_M)).exp()
        };
        Ok(pa(p))
    }
}

fn troposphere_pressure_pa(h: f64) -> f64 {
    P0_PA * (1.0 - LAPSE_RATE_K_PER_M * h / T0_K).powf(TROPOSPHERE_EXPONENT)
}
