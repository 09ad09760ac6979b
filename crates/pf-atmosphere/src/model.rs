//! Atmosphere model trait and state snapshot.

use crate::error::{AtmosphereError, AtmosphereResult};
use pf_core::units::{Density, Length, Pressure, TempInterval, Temperature, Velocity};
use pf_core::units::{k, kg_m3, mps};
use uom::si::{
    length::meter, mass_density::kilogram_per_cubic_meter, pressure::pascal,
    thermodynamic_temperature::kelvin, velocity::meter_per_second,
};

/// Ambient conditions at one altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereState {
    pub altitude: Length,
    pub temperature: Temperature,
    pub pressure: Pressure,
    pub density: Density,
    pub speed_of_sound: Velocity,
}

impl AtmosphereState {
    pub fn altitude_m(&self) -> f64 {
        self.altitude.get::<meter>()
    }

    pub fn temperature_k(&self) -> f64 {
        self.temperature.get::<kelvin>()
    }

    pub fn pressure_pa(&self) -> f64 {
        self.pressure.get::<pascal>()
    }

    pub fn density_kg_m3(&self) -> f64 {
        self.density.get::<kilogram_per_cubic_meter>()
    }

    pub fn speed_of_sound_m_s(&self) -> f64 {
        self.speed_of_sound.get::<meter_per_second>()
    }
}

/// Altitude-indexed ambient property lookup.
///
/// Implementors provide temperature and pressure; density and speed of sound
/// follow from the ideal gas law with the model's gas constant and gamma.
pub trait AtmosphereModel {
    /// Model name for logs and reports.
    fn name(&self) -> &str;

    /// Specific gas constant [J/(kg K)]
    fn gas_constant(&self) -> f64;

    /// Ratio of specific heats.
    fn gamma(&self) -> f64;

    /// Static temperature at altitude.
    fn temperature(&self, altitude: Length) -> AtmosphereResult<Temperature>;

    /// Static pressure at altitude.
    fn pressure(&self, altitude: Length) -> AtmosphereResult<Pressure>;

    /// Density at altitude.
    fn density(&self, altitude: Length) -> AtmosphereResult<Density> {
        let t = self.temperature(altitude)?.value;
        let p = self.pressure(altitude)?.value;
        Ok(kg_m3(p / (self.gas_constant() * t)))
    }

    /// Speed of sound at altitude.
    fn speed_of_sound(&self, altitude: Length) -> AtmosphereResult<Velocity> {
        let t = self.temperature(altitude)?.value;
        Ok(mps((self.gamma() * self.gas_constant() * t).sqrt()))
    }

    /// All properties at once.
    fn state(&self, altitude: Length) -> AtmosphereResult<AtmosphereState> {
        Ok(AtmosphereState {
            altitude,
            temperature: self.temperature(altitude)?,
            pressure: self.pressure(altitude)?,
            density: self.density(altitude)?,
            speed_of_sound: self.speed_of_sound(altitude)?,
        })
    }

    /// Off-standard day: temperature shifted by `deviation`, pressure kept.
    fn state_with_deviation(
        &self,
        altitude: Length,
        deviation: TempInterval,
    ) -> AtmosphereResult<AtmosphereState> {
        if !deviation.value.is_finite() {
            return Err(AtmosphereError::InvalidArg {
                what: "temperature deviation must be finite",
            });
        }
        let t = self.temperature(altitude)?.value + deviation.value;
        if t <= 0.0 {
            return Err(AtmosphereError::InvalidArg {
                what: "temperature deviation drives temperature below absolute zero",
            });
        }
        let p = self.pressure(altitude)?.value;
        let r = self.gas_constant();

        Ok(AtmosphereState {
            altitude,
            temperature: k(t),
            pressure: self.pressure(altitude)?,
            density: kg_m3(p / (r * t)),
            speed_of_sound: mps((self.gamma() * r * t).sqrt()),
        })
    }
}
