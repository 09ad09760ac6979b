use std::path::PathBuf;

use pf_app::{AppResult, DesignPointReport, compile_case, evaluate_design_point, evaluate_sweep};
use pf_project::{CaseDef, SliderBounds};
use pf_sweep::SweepSeries;

use crate::views::{ControlsView, FlowsView, SliderValues, SweepPlotView};

pub struct PacflowApp {
    /// Case the sliders are applied on top of.
    base_case: CaseDef,
    case_path: Option<PathBuf>,
    values: SliderValues,
    controls_view: ControlsView,
    flows_view: FlowsView,
    sweep_plot_view: SweepPlotView,
    series: Option<SweepSeries>,
    report: Option<DesignPointReport>,
    error_message: Option<String>,
    /// Case values moved into the slider ranges on load.
    clamp_notice: Option<String>,
}

impl PacflowApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, case_path: Option<PathBuf>) -> Self {
        let (base_case, error_message) = match case_path.as_deref() {
            Some(path) => match pf_app::load_case(path) {
                Ok(case) => {
                    tracing::info!(path = %path.display(), "loaded case");
                    (case, None)
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), "failed to load case: {e}");
                    (CaseDef::default(), Some(format!("Failed to load case: {e}")))
                }
            },
            None => (CaseDef::default(), None),
        };

        let controls_view = ControlsView::default();
        let values = SliderValues::from_case(&base_case, controls_view.bounds());
        let clamp_notice = clamp_notice(&base_case, controls_view.bounds());
        if let Some(notice) = &clamp_notice {
            tracing::warn!("{notice}");
        }

        let mut app = Self {
            base_case,
            case_path,
            values,
            controls_view,
            flows_view: FlowsView,
            sweep_plot_view: SweepPlotView,
            series: None,
            report: None,
            error_message,
            clamp_notice,
        };
        app.recompute();
        app
    }

    /// Re-evaluate the design point and the sweep from the current sliders.
    /// Previous results are replaced, or cleared on error.
    fn recompute(&mut self) {
        let case = self.values.apply_to(&self.base_case);
        match evaluate_case(&case) {
            Ok((report, series)) => {
                self.report = Some(report);
                self.series = Some(series);
                self.error_message = None;
            }
            Err(e) => {
                tracing::warn!("evaluation failed: {e}");
                self.report = None;
                self.series = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn case_label(&self) -> String {
        match &self.case_path {
            Some(path) => format!("{} ({})", self.base_case.name, path.display()),
            None => self.base_case.name.clone(),
        }
    }
}

fn clamp_notice(case: &CaseDef, bounds: &SliderBounds) -> Option<String> {
    let fields = SliderValues::clamped_fields(case, bounds);
    if fields.is_empty() {
        None
    } else {
        Some(format!(
            "Case values outside the slider ranges were clamped: {}",
            fields.join(", ")
        ))
    }
}

fn evaluate_case(case: &CaseDef) -> AppResult<(DesignPointReport, SweepSeries)> {
    let inputs = compile_case(case)?;
    let report = evaluate_design_point(&inputs)?;
    let series = evaluate_sweep(&inputs)?;
    Ok((report, series))
}

impl eframe::App for PacflowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Case:");
                ui.label(self.case_label());
                ui.separator();
                ui.label(format!(
                    "P = {:.0} kW   Uc = {:.3} V",
                    self.base_case.stack.power_w * 1e-3,
                    self.base_case.stack.cell_voltage_v
                ));
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| match &self.error_message {
            Some(msg) => {
                ui.colored_label(egui::Color32::RED, msg);
            }
            None => {
                ui.horizontal(|ui| {
                    let points = self.series.as_ref().map_or(0, SweepSeries::len);
                    ui.label(format!("{points} sweep points"));
                    if let Some(notice) = &self.clamp_notice {
                        ui.separator();
                        ui.colored_label(egui::Color32::YELLOW, notice);
                    }
                });
            }
        });

        egui::SidePanel::left("controls_panel")
            .default_width(360.0)
            .show(ctx, |ui| {
                if self.controls_view.show(ui, &mut self.values) {
                    self.recompute();
                }
                ui.add_space(12.0);
                self.flows_view.show(ui, self.report.as_ref());
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.sweep_plot_view.show(ui, self.series.as_ref());
        });
    }
}
