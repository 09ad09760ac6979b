//! Ranges and steps of the interactive parameter sliders.

/// Slider range for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterBounds {
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ParameterBounds {
    /// Clamp `value` into the slider range.
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Snap to the nearest step counted from `min`, then clamp.
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((value - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// The five flight-condition sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    pub mach: ParameterBounds,
    pub outlet_pressure_pa: ParameterBounds,
    pub isentropic_efficiency: ParameterBounds,
    pub air_excess_ratio: ParameterBounds,
    pub isa_deviation_k: ParameterBounds,
}

impl SliderBounds {
    pub const STANDARD: SliderBounds = SliderBounds {
        mach: ParameterBounds {
            label: "Mach",
            unit: "-",
            min: 0.0,
            max: 0.9,
            step: 0.01,
            default: 0.8,
        },
        outlet_pressure_pa: ParameterBounds {
            label: "Outlet total pressure pt2",
            unit: "Pa",
            min: 1.0e5,
            max: 3.0e5,
            step: 1.0e3,
            default: 1.5e5,
        },
        isentropic_efficiency: ParameterBounds {
            label: "Isentropic efficiency",
            unit: "-",
            min: 0.5,
            max: 0.95,
            step: 0.01,
            default: 0.7,
        },
        air_excess_ratio: ParameterBounds {
            label: "Air excess ratio",
            unit: "-",
            min: 1.1,
            max: 4.0,
            step: 0.1,
            default: 3.0,
        },
        isa_deviation_k: ParameterBounds {
            label: "ISA deviation",
            unit: "K",
            min: -30.0,
            max: 30.0,
            step: 1.0,
            default: 0.0,
        },
    };

    pub fn all(&self) -> [&ParameterBounds; 5] {
        [
            &self.mach,
            &self.outlet_pressure_pa,
            &self.isentropic_efficiency,
            &self.air_excess_ratio,
            &self.isa_deviation_k,
        ]
    }
}

impl Default for SliderBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_lie_inside_ranges() {
        for b in SliderBounds::STANDARD.all() {
            assert!(b.min < b.max, "{}", b.label);
            assert!(b.contains(b.default), "{}", b.label);
            assert!(b.step > 0.0 && b.step < b.max - b.min, "{}", b.label);
        }
    }

    #[test]
    fn clamp_and_snap() {
        let mach = SliderBounds::STANDARD.mach;
        assert_eq!(mach.clamp(1.5), 0.9);
        assert_eq!(mach.clamp(-1.0), 0.0);
        assert!((mach.snap(0.784) - 0.78).abs() < 1e-12);
        let dev = SliderBounds::STANDARD.isa_deviation_k;
        assert_eq!(dev.snap(12.4), 12.0);
    }

    #[test]
    fn defaults_match_reference_case() {
        let case = crate::CaseDef::default();
        let b = SliderBounds::default();
        assert_eq!(b.mach.default, case.flight.mach);
        assert_eq!(b.outlet_pressure_pa.default, case.compressor.outlet_pressure_pa);
        assert_eq!(
            b.isentropic_efficiency.default,
            case.compressor.isentropic_efficiency
        );
        assert_eq!(b.air_excess_ratio.default, case.stack.air_excess_ratio);
        assert_eq!(b.isa_deviation_k.default, case.flight.isa_deviation_k);
    }
}
