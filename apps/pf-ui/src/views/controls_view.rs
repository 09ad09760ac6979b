use pf_project::{CaseDef, ParameterBounds, SliderBounds};

/// Current positions of the five flight-condition sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderValues {
    pub mach: f64,
    pub outlet_pressure_pa: f64,
    pub isentropic_efficiency: f64,
    pub air_excess_ratio: f64,
    pub isa_deviation_k: f64,
}

impl SliderValues {
    /// Slider positions for a case, clamped into the slider ranges.
    pub fn from_case(case: &CaseDef, bounds: &SliderBounds) -> Self {
        Self {
            mach: bounds.mach.clamp(case.flight.mach),
            outlet_pressure_pa: bounds
                .outlet_pressure_pa
                .clamp(case.compressor.outlet_pressure_pa),
            isentropic_efficiency: bounds
                .isentropic_efficiency
                .clamp(case.compressor.isentropic_efficiency),
            air_excess_ratio: bounds.air_excess_ratio.clamp(case.stack.air_excess_ratio),
            isa_deviation_k: bounds.isa_deviation_k.clamp(case.flight.isa_deviation_k),
        }
    }

    /// Labels of the case values that `from_case` had to clamp.
    pub fn clamped_fields(case: &CaseDef, bounds: &SliderBounds) -> Vec<&'static str> {
        [
            (&bounds.mach, case.flight.mach),
            (&bounds.outlet_pressure_pa, case.compressor.outlet_pressure_pa),
            (
                &bounds.isentropic_efficiency,
                case.compressor.isentropic_efficiency,
            ),
            (&bounds.air_excess_ratio, case.stack.air_excess_ratio),
            (&bounds.isa_deviation_k, case.flight.isa_deviation_k),
        ]
        .into_iter()
        .filter(|(b, v)| !b.contains(*v))
        .map(|(b, _)| b.label)
        .collect()
    }

    /// Copy of `base` with the slider values applied.
    pub fn apply_to(&self, base: &CaseDef) -> CaseDef {
        let mut case = base.clone();
        case.flight.mach = self.mach;
        case.flight.isa_deviation_k = self.isa_deviation_k;
        case.compressor.outlet_pressure_pa = self.outlet_pressure_pa;
        case.compressor.isentropic_efficiency = self.isentropic_efficiency;
        case.stack.air_excess_ratio = self.air_excess_ratio;
        case
    }
}

pub struct ControlsView {
    bounds: SliderBounds,
}

impl Default for ControlsView {
    fn default() -> Self {
        Self {
            bounds: SliderBounds::STANDARD,
        }
    }
}

impl ControlsView {
    pub fn bounds(&self) -> &SliderBounds {
        &self.bounds
    }

    /// Draw the sliders; returns true when any value changed this frame.
    pub fn show(&self, ui: &mut egui::Ui, values: &mut SliderValues) -> bool {
        ui.heading("Flight condition");
        ui.separator();

        let mut changed = false;
        changed |= slider(ui, &self.bounds.mach, &mut values.mach);
        // pt2 is edited in bar, stored in Pa
        let mut pt2_bar = values.outlet_pressure_pa * 1e-5;
        let pt2 = &self.bounds.outlet_pressure_pa;
        let response = ui.add(
            egui::Slider::new(&mut pt2_bar, pt2.min * 1e-5..=pt2.max * 1e-5)
                .step_by(pt2.step * 1e-5)
                .text(format!("{} (bar)", pt2.label)),
        );
        if response.changed() {
            values.outlet_pressure_pa = pt2.snap(pt2_bar * 1e5);
            changed = true;
        }
        changed |= slider(
            ui,
            &self.bounds.isentropic_efficiency,
            &mut values.isentropic_efficiency,
        );
        changed |= slider(ui, &self.bounds.air_excess_ratio, &mut values.air_excess_ratio);
        changed |= slider(ui, &self.bounds.isa_deviation_k, &mut values.isa_deviation_k);

        ui.add_space(8.0);
        if ui.button("Reset to defaults").clicked() {
            *values = SliderValues {
                mach: self.bounds.mach.default,
                outlet_pressure_pa: self.bounds.outlet_pressure_pa.default,
                isentropic_efficiency: self.bounds.isentropic_efficiency.default,
                air_excess_ratio: self.bounds.air_excess_ratio.default,
                isa_deviation_k: self.bounds.isa_deviation_k.default,
            };
            changed = true;
        }
        changed
    }
}

fn slider(ui: &mut egui::Ui, bounds: &ParameterBounds, value: &mut f64) -> bool {
    let text = if bounds.unit == "-" {
        bounds.label.to_string()
    } else {
        format!("{} ({})", bounds.label, bounds.unit)
    };
    ui.add(
        egui::Slider::new(value, bounds.min..=bounds.max)
            .step_by(bounds.step)
            .text(text),
    )
    .changed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_values_round_trip_through_case() {
        let bounds = SliderBounds::STANDARD;
        let case = CaseDef::default();
        let values = SliderValues::from_case(&case, &bounds);
        assert_eq!(values.apply_to(&case), case);
    }

    #[test]
    fn out_of_range_case_values_are_clamped() {
        let bounds = SliderBounds::STANDARD;
        let mut case = CaseDef::default();
        case.flight.mach = 2.0;
        case.flight.isa_deviation_k = -80.0;
        let values = SliderValues::from_case(&case, &bounds);
        assert_eq!(values.mach, bounds.mach.max);
        assert_eq!(values.isa_deviation_k, bounds.isa_deviation_k.min);
        assert_eq!(
            SliderValues::clamped_fields(&case, &bounds),
            vec![bounds.mach.label, bounds.isa_deviation_k.label]
        );
    }

    #[test]
    fn in_range_case_reports_nothing_clamped() {
        let bounds = SliderBounds::STANDARD;
        assert!(SliderValues::clamped_fields(&CaseDef::default(), &bounds).is_empty());
    }
}
