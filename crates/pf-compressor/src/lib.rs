//! pf-compressor: cathode air compressor sizing at altitude.
//!
//! The compressor takes ram-compressed ambient air (inlet total state) up to
//! the stack inlet pressure. Work uses an isentropic efficiency model with
//! constant cp and gamma for air.
//!
//! # Example
//!
//! ```
//! use pf_atmosphere::IsaAtmosphere;
//! use pf_compressor::{CompressorSpec, FlightCondition, operating_point};
//! use pf_core::units::{dk, m, pa, volts, w};
//! use pf_stack::StackDesign;
//!
//! let stack = StackDesign::new(w(150e3), volts(0.7), 3.0).unwrap();
//! let flight = FlightCondition::new(m(10_000.0), 0.8, dk(0.0)).unwrap();
//! let compressor = CompressorSpec::new(pa(1.5e5), 0.7).unwrap();
//!
//! let op = operating_point(&IsaAtmosphere::new(), &flight, &compressor, &stack).unwrap();
//! assert!(op.requires_compression());
//! ```

pub mod compressor;
pub mod error;
pub mod flight;

pub use compressor::{CompressorSpec, OperatingPoint, operating_point};
pub use error::{CompressorError, CompressorResult};
pub use flight::FlightCondition;
