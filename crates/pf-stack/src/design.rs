//! Stack design point.

use crate::error::{StackError, StackResult};
use crate::flux::{ReactantFlows, reactant_flows};
use pf_core::constants::{
    ELECTRONS_PER_O2, FARADAY, LHV_CELL_VOLTAGE, MOLAR_MASS_AIR, O2_MOLE_FRACTION_AIR,
};
use pf_core::numeric::ensure_positive;
use pf_core::units::{Power, Voltage};
use uom::si::{electric_potential::volt, power::watt};

/// Electrical design point of the stack and its cathode air supply.
///
/// Invariants (checked by [`StackDesign::new`]):
/// - power > 0
/// - 0 < cell voltage <= LHV thermoneutral voltage (1.254 V)
/// - air excess ratio > 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackDesign {
    power: Power,
    cell_voltage: Voltage,
    air_excess_ratio: f64,
}

impl StackDesign {
    /// Create a validated design point.
    ///
    /// # Errors
    /// `StackError::InvalidInput` for zero or negative voltage or power, a
    /// cell voltage above the thermoneutral voltage, or an air excess ratio
    /// not above one.
    pub fn new(power: Power, cell_voltage: Voltage, air_excess_ratio: f64) -> StackResult<Self> {
        ensure_positive(power.value, "design power must be positive")?;
        ensure_positive(cell_voltage.value, "cell voltage must be positive")?;
        if cell_voltage.value > LHV_CELL_VOLTAGE {
            return Err(StackError::InvalidInput {
                what: "cell voltage above thermoneutral voltage",
            });
        }
        if !air_excess_ratio.is_finite() {
            return Err(StackError::NonFinite {
                what: "air excess ratio",
            });
        }
        if air_excess_ratio <= 1.0 {
            return Err(StackError::InvalidInput {
                what: "air excess ratio must be greater than 1",
            });
        }

        Ok(Self {
            power,
            cell_voltage,
            air_excess_ratio,
        })
    }

    pub fn power(&self) -> Power {
        self.power
    }

    pub fn power_w(&self) -> f64 {
        self.power.get::<watt>()
    }

    pub fn cell_voltage(&self) -> Voltage {
        self.cell_voltage
    }

    pub fn cell_voltage_v(&self) -> f64 {
        self.cell_voltage.get::<volt>()
    }

    pub fn air_excess_ratio(&self) -> f64 {
        self.air_excess_ratio
    }

    /// Copy with another air excess ratio (slider updates).
    pub fn with_air_excess_ratio(&self, air_excess_ratio: f64) -> StackResult<Self> {
        Self::new(self.power, self.cell_voltage, air_excess_ratio)
    }

    /// Air mass flow per watt of stack power [kg/s/W].
    ///
    /// ```text
    /// mdot_air / P = λ_air * M_air / (0.21 * 4 * F * Uc)
    /// ```
    pub fn air_mass_flow_per_watt(&self) -> f64 {
        self.air_excess_ratio * MOLAR_MASS_AIR
            / (O2_MOLE_FRACTION_AIR * ELECTRONS_PER_O2 * FARADAY * self.cell_voltage_v())
    }

    pub fn reactant_flows(&self) -> ReactantFlows {
        reactant_flows(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::{volts, w};

    #[test]
    fn zero_voltage_is_invalid_input() {
        let err = StackDesign::new(w(150e3), volts(0.0), 3.0).unwrap_err();
        assert_eq!(
            err,
            StackError::InvalidInput {
                what: "cell voltage must be positive"
            }
        );
    }

    #[test]
    fn rejects_non_physical_inputs() {
        assert!(StackDesign::new(w(-1.0), volts(0.7), 3.0).is_err());
        assert!(StackDesign::new(w(150e3), volts(-0.7), 3.0).is_err());
        assert!(StackDesign::new(w(150e3), volts(1.3), 3.0).is_err());
        assert!(StackDesign::new(w(150e3), volts(0.7), 1.0).is_err());
        assert!(matches!(
            StackDesign::new(w(150e3), volts(0.7), f64::NAN),
            Err(StackError::NonFinite { .. })
        ));
        assert!(matches!(
            StackDesign::new(w(f64::INFINITY), volts(0.7), 3.0),
            Err(StackError::NonFinite { .. })
        ));
    }

    #[test]
    fn air_mass_flow_per_watt_matches_flows() {
        let design = StackDesign::new(w(150e3), volts(0.7), 3.0).unwrap();
        let flows = design.reactant_flows();
        let per_watt = flows.air.mass_kg_s() / design.power_w();
        assert!((design.air_mass_flow_per_watt() - per_watt).abs() / per_watt < 1e-12);
    }

    #[test]
    fn with_air_excess_ratio_keeps_electrical_point() {
        let design = StackDesign::new(w(150e3), volts(0.7), 3.0).unwrap();
        let lean = design.with_air_excess_ratio(2.0).unwrap();
        assert_eq!(lean.power(), design.power());
        assert_eq!(lean.cell_voltage(), design.cell_voltage());
        assert_eq!(lean.air_excess_ratio(), 2.0);
        assert!(design.with_air_excess_ratio(0.5).is_err());
    }
}
