//! SI quantity aliases over `uom` and plain-number constructors.

use uom::si::f64::{
    ElectricCurrent as UomElectricCurrent, ElectricPotential as UomElectricPotential,
    Length as UomLength, MassDensity as UomMassDensity, MassRate as UomMassRate,
    MolarMass as UomMolarMass, Power as UomPower, Pressure as UomPressure,
    TemperatureInterval as UomTemperatureInterval,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
};

pub type Current = UomElectricCurrent;
pub type Voltage = UomElectricPotential;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type MassRate = UomMassRate;
pub type MolarMass = UomMolarMass;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type TempInterval = UomTemperatureInterval;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn dk(v: f64) -> TempInterval {
    use uom::si::temperature_interval::kelvin;
    TempInterval::new::<kelvin>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn kg_per_mol(v: f64) -> MolarMass {
    use uom::si::molar_mass::kilogram_per_mole;
    MolarMass::new::<kilogram_per_mole>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kg_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn volts(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn amps(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

/// Aviation unit converters (speeds in knots, altitudes in feet).
pub mod convert {
    use super::{Length, Velocity};
    use uom::si::length::{foot, meter};
    use uom::si::velocity::{knot, meter_per_second};

    /// m/s -> kt
    pub fn mps_to_knots(speed_mps: f64) -> f64 {
        Velocity::new::<meter_per_second>(speed_mps).get::<knot>()
    }

    /// kt -> m/s
    pub fn knots_to_mps(speed_kt: f64) -> f64 {
        Velocity::new::<knot>(speed_kt).get::<meter_per_second>()
    }

    /// m -> ft
    pub fn meters_to_feet(height_m: f64) -> f64 {
        Length::new::<meter>(height_m).get::<foot>()
    }

    /// ft -> m
    pub fn feet_to_meters(height_ft: f64) -> f64 {
        Length::new::<foot>(height_ft).get::<meter>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _dt = dk(-10.0);
        let _mdot = kgps(1.2);
        let _mm = kg_per_mol(0.028_965);
        let _l = m(2.0);
        let _v = mps(240.0);
        let _rho = kg_m3(1.225);
        let _p = w(150e3);
        let _u = volts(0.7);
        let _i = amps(2.0e5);
    }

    #[test]
    fn knots_and_feet_conversions() {
        // 1 kt = 1852 m / 3600 s
        assert!((convert::mps_to_knots(1852.0 / 3600.0) - 1.0).abs() < 1e-9);
        assert!((convert::knots_to_mps(1.0) - 1852.0 / 3600.0).abs() < 1e-9);
        assert!((convert::meters_to_feet(0.3048) - 1.0).abs() < 1e-9);
        assert!((convert::feet_to_meters(60_000.0) - 18_288.0).abs() < 1e-6);
    }
}
