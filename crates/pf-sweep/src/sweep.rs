//! Compressor operating point swept over altitude.

use crate::range::{AltitudeIter, AltitudeRange};
use pf_atmosphere::{AtmosphereModel, IsaAtmosphere};
use pf_compressor::{CompressorResult, CompressorSpec, FlightCondition, operating_point};
use pf_core::units::m;
use pf_stack::StackDesign;

/// One sample of the sweep, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub altitude_m: f64,
    /// Compressor power over stack power, Pc/P.
    pub power_ratio: f64,
    /// Compressor pressure ratio π_c.
    pub pressure_ratio: f64,
    /// Isentropic outlet total temperature Tt2 [K]
    pub outlet_total_temperature_k: f64,
}

/// Column-wise sweep results sharing the altitude axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepSeries {
    pub altitude_m: Vec<f64>,
    pub power_ratio: Vec<f64>,
    pub pressure_ratio: Vec<f64>,
    pub outlet_total_temperature_k: Vec<f64>,
}

impl SweepSeries {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            altitude_m: Vec::with_capacity(n),
            power_ratio: Vec::with_capacity(n),
            pressure_ratio: Vec::with_capacity(n),
            outlet_total_temperature_k: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, point: SweepPoint) {
        self.altitude_m.push(point.altitude_m);
        self.power_ratio.push(point.power_ratio);
        self.pressure_ratio.push(point.pressure_ratio);
        self.outlet_total_temperature_k
            .push(point.outlet_total_temperature_k);
    }

    pub fn len(&self) -> usize {
        self.altitude_m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.altitude_m.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = SweepPoint> + '_ {
        (0..self.len()).map(|i| SweepPoint {
            altitude_m: self.altitude_m[i],
            power_ratio: self.power_ratio[i],
            pressure_ratio: self.pressure_ratio[i],
            outlet_total_temperature_k: self.outlet_total_temperature_k[i],
        })
    }
}

/// Sweep definition: fixed stack, compressor and flight Mach/deviation,
/// altitude varied over `range`.
#[derive(Debug, Clone)]
pub struct AltitudeSweep<A = IsaAtmosphere> {
    atmosphere: A,
    stack: StackDesign,
    compressor: CompressorSpec,
    flight: FlightCondition,
    range: AltitudeRange,
}

impl AltitudeSweep<IsaAtmosphere> {
    /// Sweep against the standard atmosphere. The altitude stored in
    /// `flight` is ignored; only its Mach number and deviation are used.
    pub fn isa(
        stack: StackDesign,
        compressor: CompressorSpec,
        flight: FlightCondition,
        range: AltitudeRange,
    ) -> Self {
        Self::new(IsaAtmosphere::new(), stack, compressor, flight, range)
    }
}

impl<A: AtmosphereModel> AltitudeSweep<A> {
    pub fn new(
        atmosphere: A,
        stack: StackDesign,
        compressor: CompressorSpec,
        flight: FlightCondition,
        range: AltitudeRange,
    ) -> Self {
        Self {
            atmosphere,
            stack,
            compressor,
            flight,
            range,
        }
    }

    pub fn range(&self) -> &AltitudeRange {
        &self.range
    }

    /// Fresh lazy iterator; each call restarts from the first altitude.
    pub fn iter(&self) -> SweepIter<'_, A> {
        SweepIter {
            sweep: self,
            altitudes: self.range.iter(),
        }
    }

    /// Evaluate every sample, stopping at the first invalid one.
    pub fn collect_series(&self) -> CompressorResult<SweepSeries> {
        let mut series = SweepSeries::with_capacity(self.range.num_points());
        for point in self.iter() {
            series.push(point?);
        }
        Ok(series)
    }

    fn evaluate(&self, altitude_m: f64) -> CompressorResult<SweepPoint> {
        let flight = self.flight.at_altitude(m(altitude_m))?;
        let op = operating_point(&self.atmosphere, &flight, &self.compressor, &self.stack)?;
        Ok(SweepPoint {
            altitude_m,
            power_ratio: op.power_ratio,
            pressure_ratio: op.pressure_ratio,
            outlet_total_temperature_k: op.outlet_total_temperature_k(),
        })
    }
}

impl<'a, A: AtmosphereModel> IntoIterator for &'a AltitudeSweep<A> {
    type Item = CompressorResult<SweepPoint>;
    type IntoIter = SweepIter<'a, A>;

    fn into_iter(self) -> SweepIter<'a, A> {
        self.iter()
    }
}

/// Lazy evaluation of an [`AltitudeSweep`].
pub struct SweepIter<'a, A> {
    sweep: &'a AltitudeSweep<A>,
    altitudes: AltitudeIter,
}

impl<A: AtmosphereModel> Iterator for SweepIter<'_, A> {
    type Item = CompressorResult<SweepPoint>;

    fn next(&mut self) -> Option<Self::Item> {
        self.altitudes.next().map(|h| self.sweep.evaluate(h))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.altitudes.size_hint()
    }
}

impl<A: AtmosphereModel> ExactSizeIterator for SweepIter<'_, A> {}
