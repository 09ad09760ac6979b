//! Species taking part in the stack reactions.

use pf_core::constants::{
    MOLAR_MASS_AIR, MOLAR_MASS_H2, MOLAR_MASS_H2O, MOLAR_MASS_N2, MOLAR_MASS_O2,
};
use pf_core::units::{MolarMass, kg_per_mol};

/// Reactants, products and carrier gas of a H2/air fuel cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Hydrogen (H₂)
    H2,
    /// Oxygen (O₂)
    O2,
    /// Nitrogen (N₂)
    N2,
    /// Water (H₂O)
    H2O,
    /// Air (pseudo-pure, 21 % O₂ by mole)
    Air,
}

impl Species {
    pub const ALL: [Species; 5] = [
        Species::H2,
        Species::O2,
        Species::N2,
        Species::H2O,
        Species::Air,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::H2 => "H2",
            Species::O2 => "O2",
            Species::N2 => "N2",
            Species::H2O => "H2O",
            Species::Air => "Air",
        }
    }

    /// Molar mass [kg/mol]
    pub fn molar_mass_kg_mol(&self) -> f64 {
        match self {
            Species::H2 => MOLAR_MASS_H2,
            Species::O2 => MOLAR_MASS_O2,
            Species::N2 => MOLAR_MASS_N2,
            Species::H2O => MOLAR_MASS_H2O,
            Species::Air => MOLAR_MASS_AIR,
        }
    }

    pub fn molar_mass(&self) -> MolarMass {
        kg_per_mol(self.molar_mass_kg_mol())
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = Species::ALL.iter().map(|s| s.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), Species::ALL.len());
    }

    #[test]
    fn molar_masses_in_kg_per_mol() {
        assert!((Species::H2.molar_mass_kg_mol() - 0.002_016).abs() < 1e-12);
        assert!((Species::Air.molar_mass().value - 0.028_965).abs() < 1e-12);
    }
}
