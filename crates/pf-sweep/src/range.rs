//! Uniformly spaced altitude samples.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Invalid input: {what}")]
    InvalidRange { what: &'static str },
}

/// Altitude range [m] sampled at `num_points` linearly spaced points,
/// both endpoints included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeRange {
    start_m: f64,
    end_m: f64,
    num_points: usize,
}

impl AltitudeRange {
    pub const DEFAULT_START_M: f64 = 0.0;
    pub const DEFAULT_END_M: f64 = 12_000.0;
    pub const DEFAULT_POINTS: usize = 1000;
    /// Largest sample count accepted.
    pub const MAX_POINTS: usize = 100_000;

    pub fn new(start_m: f64, end_m: f64, num_points: usize) -> Result<Self, SweepError> {
        if !start_m.is_finite() || !end_m.is_finite() {
            return Err(SweepError::InvalidRange {
                what: "sweep bounds must be finite",
            });
        }
        if num_points < 2 {
            return Err(SweepError::InvalidRange {
                what: "sweep must have at least 2 points",
            });
        }
        if num_points > Self::MAX_POINTS {
            return Err(SweepError::InvalidRange {
                what: "sweep must have at most 100000 points",
            });
        }
        if (start_m - end_m).abs() < 1e-12 {
            return Err(SweepError::InvalidRange {
                what: "start and end altitudes must be different",
            });
        }
        Ok(Self {
            start_m,
            end_m,
            num_points,
        })
    }

    pub fn start_m(&self) -> f64 {
        self.start_m
    }

    pub fn end_m(&self) -> f64 {
        self.end_m
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Altitude of sample `i`; the last sample is exactly `end_m`.
    pub fn point(&self, i: usize) -> f64 {
        if i + 1 >= self.num_points {
            return self.end_m;
        }
        let delta = (self.end_m - self.start_m) / (self.num_points - 1) as f64;
        self.start_m + i as f64 * delta
    }

    pub fn iter(&self) -> AltitudeIter {
        AltitudeIter {
            range: *self,
            next: 0,
        }
    }
}

impl Default for AltitudeRange {
    fn default() -> Self {
        Self {
            start_m: Self::DEFAULT_START_M,
            end_m: Self::DEFAULT_END_M,
            num_points: Self::DEFAULT_POINTS,
        }
    }
}

impl fmt::Display for AltitudeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "altitude {} m to {} m ({} points)",
            self.start_m, self.end_m, self.num_points
        )
    }
}

impl IntoIterator for AltitudeRange {
    type Item = f64;
    type IntoIter = AltitudeIter;

    fn into_iter(self) -> AltitudeIter {
        self.iter()
    }
}

/// Lazy iterator over the samples of an [`AltitudeRange`].
#[derive(Debug, Clone)]
pub struct AltitudeIter {
    range: AltitudeRange,
    next: usize,
}

impl Iterator for AltitudeIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.range.num_points {
            return None;
        }
        let h = self.range.point(self.next);
        self.next += 1;
        Some(h)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.range.num_points - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for AltitudeIter {}
