//! Physical constants shared across the fuel cell and compressor models.
//!
//! Molar masses are stored in kg/mol so products with molar flows land in kg/s.

/// Faraday constant [C/mol]
pub const FARADAY: f64 = 96_485.0;

/// Electrons transferred per H2 molecule oxidised.
pub const ELECTRONS_PER_H2: f64 = 2.0;

/// Electrons transferred per O2 molecule reduced.
pub const ELECTRONS_PER_O2: f64 = 4.0;

/// Mole fraction of O2 in dry air.
pub const O2_MOLE_FRACTION_AIR: f64 = 0.21;

pub const MOLAR_MASS_H2: f64 = 2.016e-3;
pub const MOLAR_MASS_O2: f64 = 31.999e-3;
pub const MOLAR_MASS_N2: f64 = 28.013e-3;
pub const MOLAR_MASS_H2O: f64 = 18.015e-3;
pub const MOLAR_MASS_AIR: f64 = 28.965e-3;

/// Thermoneutral cell voltage based on the H2 lower heating value [V]
pub const LHV_CELL_VOLTAGE: f64 = 1.254;

/// Ratio of specific heats for air.
pub const GAMMA_AIR: f64 = 1.4;

/// Isobaric specific heat of air [J/(kg K)]
pub const CP_AIR: f64 = 1004.0;

/// Isentropic exponent (γ-1)/γ for air.
pub const ISENTROPIC_EXPONENT_AIR: f64 = (GAMMA_AIR - 1.0) / GAMMA_AIR;

/// Standard gravity [m/s^2]
pub const G0_MPS2: f64 = 9.806_65;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isentropic_exponent_matches_gamma() {
        assert!((ISENTROPIC_EXPONENT_AIR - 0.4 / 1.4).abs() < 1e-15);
    }
}
