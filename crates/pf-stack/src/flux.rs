//! Faraday-law reactant and product flows.
//!
//! ```text
//! I_tot = P / Uc
//! J_H2  = I_tot / (2 F)
//! J_O2  = J_H2 / 2
//! J_air = λ_air * J_O2 / 0.21
//! J_H2O = J_H2
//! ```
//!
//! Mass flows follow from the molar masses in [`Species`].

use crate::design::StackDesign;
use crate::species::Species;
use pf_core::constants::{ELECTRONS_PER_H2, FARADAY, LHV_CELL_VOLTAGE, O2_MOLE_FRACTION_AIR};
use pf_core::units::{Current, MassRate, Power, amps, kgps, w};
use uom::si::{electric_current::ampere, mass_rate::kilogram_per_second, power::watt};

/// Molar and mass flow of one species.
///
/// Flows built with [`SpeciesFlow::from_molar`] carry the species' own molar
/// mass. Mixtures built with [`SpeciesFlow::mixture`] (the O2-depleted
/// cathode exhaust) keep the tag of their carrier gas but not its molar mass;
/// use [`SpeciesFlow::mean_molar_mass_kg_mol`] for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesFlow {
    pub species: Species,
    /// Molar flow [mol/s]
    pub molar_mol_s: f64,
    pub mass: MassRate,
}

impl SpeciesFlow {
    pub fn from_molar(species: Species, molar_mol_s: f64) -> Self {
        Self {
            species,
            molar_mol_s,
            mass: kgps(molar_mol_s * species.molar_mass_kg_mol()),
        }
    }

    /// Flow with an independently known mass rate, for gas mixtures whose
    /// composition differs from the tagged species.
    pub fn mixture(species: Species, molar_mol_s: f64, mass: MassRate) -> Self {
        Self {
            species,
            molar_mol_s,
            mass,
        }
    }

    /// Mass over molar flow [kg/mol]
    pub fn mean_molar_mass_kg_mol(&self) -> f64 {
        self.mass_kg_s() / self.molar_mol_s
    }

    pub fn mass_kg_s(&self) -> f64 {
        self.mass.get::<kilogram_per_second>()
    }

    pub fn mass_g_s(&self) -> f64 {
        self.mass_kg_s() * 1e3
    }
}

/// Steady-state flows through the stack at one design point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactantFlows {
    pub total_current: Current,
    pub hydrogen: SpeciesFlow,
    pub oxygen: SpeciesFlow,
    pub air: SpeciesFlow,
    pub water: SpeciesFlow,
    /// Cathode exhaust (air minus consumed O2, water excluded).
    pub depleted_air: SpeciesFlow,
    /// Cell efficiency on H2 lower heating value.
    pub efficiency_lhv: f64,
    pub waste_heat: Power,
}

impl ReactantFlows {
    pub fn total_current_a(&self) -> f64 {
        self.total_current.get::<ampere>()
    }

    pub fn waste_heat_w(&self) -> f64 {
        self.waste_heat.get::<watt>()
    }
}

/// Evaluate the stack flows for a validated design point.
pub fn reactant_flows(design: &StackDesign) -> ReactantFlows {
    let p = design.power_w();
    let uc = design.cell_voltage_v();

    let i_tot = p / uc;
    let j_h2 = i_tot / (ELECTRONS_PER_H2 * FARADAY);
    let j_o2 = j_h2 / 2.0;
    let j_air = design.air_excess_ratio() * j_o2 / O2_MOLE_FRACTION_AIR;

    let air = SpeciesFlow::from_molar(Species::Air, j_air);
    let oxygen = SpeciesFlow::from_molar(Species::O2, j_o2);
    // air with the consumed O2 removed: lighter than air
    let depleted_air = SpeciesFlow::mixture(Species::Air, j_air - j_o2, air.mass - oxygen.mass);

    ReactantFlows {
        total_current: amps(i_tot),
        hydrogen: SpeciesFlow::from_molar(Species::H2, j_h2),
        oxygen,
        air,
        water: SpeciesFlow::from_molar(Species::H2O, j_h2),
        depleted_air,
        efficiency_lhv: uc / LHV_CELL_VOLTAGE,
        waste_heat: w(p * (LHV_CELL_VOLTAGE / uc - 1.0)),
    }
}
