//! pf-sweep: altitude sweeps of the compressor operating point.
//!
//! Sweeps are lazy: [`AltitudeSweep::iter`] evaluates one altitude per
//! `next()` and can be restarted any number of times. Front ends collect the
//! result into [`SweepSeries`] for plotting or CSV export.

pub mod range;
pub mod sweep;

pub use range::{AltitudeIter, AltitudeRange, SweepError};
pub use sweep::{AltitudeSweep, SweepIter, SweepPoint, SweepSeries};
