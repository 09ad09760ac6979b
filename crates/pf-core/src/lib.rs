//! pf-core: shared foundation of the pacflow crates.
//!
//! - `units`: uom SI aliases, short constructors, knots/feet converters
//! - `numeric`: input checks used by the model constructors
//! - `constants`: electrochemistry and air properties
//! - `error`: `PfError`

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

pub use error::{PfError, PfResult};
pub use numeric::*;
pub use units::*;
