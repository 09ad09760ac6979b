//! pf-stack: electrochemical flux calculator for a hydrogen PEM fuel cell stack.
//!
//! Given the electrical design point (power, cell voltage) and the cathode
//! air excess ratio, Faraday's law gives the hydrogen and oxygen consumption,
//! the air the compressor has to deliver and the water produced.
//!
//! # Example
//!
//! ```
//! use pf_stack::StackDesign;
//! use pf_core::units::{volts, w};
//!
//! let design = StackDesign::new(w(150e3), volts(0.7), 3.0).unwrap();
//! let flows = design.reactant_flows();
//! assert!((flows.hydrogen.molar_mol_s - 1.110).abs() < 1e-3);
//! ```

pub mod design;
pub mod error;
pub mod flux;
pub mod species;

pub use design::StackDesign;
pub use error::{StackError, StackResult};
pub use flux::{ReactantFlows, SpeciesFlow, reactant_flows};
pub use species::Species;
