//! pf-atmosphere: standard atmosphere lookups for pacflow.
//!
//! Provides:
//! - `AtmosphereModel` trait (temperature, pressure, density, speed of sound)
//! - `IsaAtmosphere`, the two-layer ICAO standard atmosphere
//!   (troposphere + isothermal lower stratosphere)
//! - `AtmosphereState` snapshot with SI accessors
//!
//! Unit converters (knots, feet) live in `pf_core::units::convert` and are
//! re-exported here for callers that only depend on this crate.
//!
//! # Example
//!
//! ```
//! use pf_atmosphere::{AtmosphereModel, IsaAtmosphere};
//! use pf_core::units::m;
//!
//! let isa = IsaAtmosphere::new();
//! let state = isa.state(m(11_000.0)).unwrap();
//! assert!((state.temperature_k() - 216.65).abs() < 1e-9);
//! ```

pub mod error;
pub mod isa;
pub mod model;

pub use error::{AtmosphereError, AtmosphereResult};
pub use isa::IsaAtmosphere;
pub use model::{AtmosphereModel, AtmosphereState};
pub use pf_core::units::convert::{feet_to_meters, knots_to_mps, meters_to_feet, mps_to_knots};
