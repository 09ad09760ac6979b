use egui_plot::{Line, Plot, PlotPoints};
use pf_sweep::SweepSeries;

/// Link group of the sweep plots; x (altitude) only.
const ALTITUDE_AXIS_GROUP: &str = "sweep_altitude_axis";

/// Three stacked plots sharing the altitude axis.
#[derive(Default)]
pub struct SweepPlotView;

impl SweepPlotView {
    pub fn show(&self, ui: &mut egui::Ui, series: Option<&SweepSeries>) {
        let Some(series) = series.filter(|s| !s.is_empty()) else {
            ui.label("No sweep data");
            return;
        };

        let (x_min, x_max) = altitude_bounds(series);
        let height = ((ui.available_height() - 24.0) / 3.0).max(120.0);

        let curves: [(&str, &str, &[f64]); 3] = [
            ("power_ratio_plot", "Pc / P", &series.power_ratio),
            ("pressure_ratio_plot", "π_c", &series.pressure_ratio),
            (
                "outlet_temperature_plot",
                "Tt2 (K)",
                &series.outlet_total_temperature_k,
            ),
        ];

        for (id, y_label, values) in curves {
            let points: Vec<[f64; 2]> = series
                .altitude_m
                .iter()
                .zip(values)
                .map(|(&h, &v)| [h, v])
                .collect();
            let plot_points: PlotPoints = points.into();

            Plot::new(id)
                .height(height)
                .link_axis(ALTITUDE_AXIS_GROUP, true, false)
                .link_cursor(ALTITUDE_AXIS_GROUP, true, false)
                .include_x(x_min)
                .include_x(x_max)
                .x_axis_label("Altitude (m)")
                .y_axis_label(y_label)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(plot_points).name(y_label));
                });
        }
    }
}

fn altitude_bounds(series: &SweepSeries) -> (f64, f64) {
    let first = series.altitude_m.first().copied().unwrap_or(0.0);
    let last = series.altitude_m.last().copied().unwrap_or(0.0);
    (first.min(last), first.max(last))
}
