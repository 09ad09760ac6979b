//! Flight condition seen by the compressor intake.

use crate::error::{CompressorError, CompressorResult};
use pf_core::numeric::ensure_finite;
use pf_core::units::{Length, TempInterval};
use uom::si::{length::meter, temperature_interval::kelvin};

/// Altitude, flight Mach number and ISA temperature deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightCondition {
    altitude: Length,
    mach: f64,
    isa_deviation: TempInterval,
}

impl FlightCondition {
    /// # Errors
    /// Non-finite values or a negative Mach number. The altitude range is
    /// checked by the atmosphere model at evaluation time.
    pub fn new(altitude: Length, mach: f64, isa_deviation: TempInterval) -> CompressorResult<Self> {
        ensure_finite(altitude.value, "altitude must be finite")?;
        ensure_finite(mach, "Mach number must be finite")?;
        ensure_finite(isa_deviation.value, "ISA deviation must be finite")?;
        if mach < 0.0 {
            return Err(CompressorError::InvalidInput {
                what: "Mach number must be non-negative",
            });
        }
        Ok(Self {
            altitude,
            mach,
            isa_deviation,
        })
    }

    pub fn altitude(&self) -> Length {
        self.altitude
    }

    pub fn altitude_m(&self) -> f64 {
        self.altitude.get::<meter>()
    }

    pub fn mach(&self) -> f64 {
        self.mach
    }

    pub fn isa_deviation(&self) -> TempInterval {
        self.isa_deviation
    }

    pub fn isa_deviation_k(&self) -> f64 {
        self.isa_deviation.get::<kelvin>()
    }

    /// Same Mach and deviation at another altitude.
    pub fn at_altitude(&self, altitude: Length) -> CompressorResult<Self> {
        Self::new(altitude, self.mach, self.isa_deviation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::{dk, m};

    #[test]
    fn rejects_negative_mach() {
        assert!(FlightCondition::new(m(0.0), -0.1, dk(0.0)).is_err());
        assert!(FlightCondition::new(m(0.0), 0.0, dk(0.0)).is_ok());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(FlightCondition::new(m(f64::NAN), 0.5, dk(0.0)).is_err());
        assert!(FlightCondition::new(m(0.0), 0.5, dk(f64::INFINITY)).is_err());
    }

    #[test]
    fn at_altitude_keeps_mach_and_deviation() {
        let base = FlightCondition::new(m(0.0), 0.8, dk(10.0)).unwrap();
        let high = base.at_altitude(m(9_000.0)).unwrap();
        assert_eq!(high.mach(), 0.8);
        assert_eq!(high.isa_deviation_k(), 10.0);
        assert_eq!(high.altitude_m(), 9_000.0);
    }
}
