use pf_app::DesignPointReport;

#[derive(Default)]
pub struct FlowsView;

impl FlowsView {
    pub fn show(&self, ui: &mut egui::Ui, report: Option<&DesignPointReport>) {
        ui.heading("Design point");
        ui.separator();

        let Some(report) = report else {
            ui.label("No valid design point");
            return;
        };

        let flows = &report.flows;
        let op = &report.operating_point;

        ui.label(format!(
            "Total current: {:.4e} A   LHV efficiency: {:.1}%   Waste heat: {:.1} kW",
            flows.total_current_a(),
            flows.efficiency_lhv * 100.0,
            flows.waste_heat_w() * 1e-3
        ));
        ui.add_space(4.0);

        use egui_extras::{Column, TableBuilder};

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(90.0).at_least(60.0)) // Species
            .column(Column::initial(110.0).at_least(90.0)) // Molar flow
            .column(Column::initial(110.0).at_least(90.0)) // Mass flow
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Species");
                });
                header.col(|ui| {
                    ui.strong("J [mol/s]");
                });
                header.col(|ui| {
                    ui.strong("ṁ [g/s]");
                });
            })
            .body(|mut body| {
                let rows = [
                    ("H2 in", &flows.hydrogen),
                    ("O2 used", &flows.oxygen),
                    ("Air in", &flows.air),
                    ("H2O out", &flows.water),
                    ("Air out", &flows.depleted_air),
                ];
                for (label, flow) in rows {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(label);
                        });
                        row.col(|ui| {
                            ui.monospace(format!("{:.4}", flow.molar_mol_s));
                        });
                        row.col(|ui| {
                            ui.monospace(format!("{:.3}", flow.mass_g_s()));
                        });
                    });
                }
            });

        ui.add_space(8.0);
        ui.label(format!(
            "At {:.0} m: π_c = {:.3}, Tt1 = {:.1} K, Tt2 = {:.1} K, Pc/P = {:.4} ({:.1} kW)",
            op.flight.altitude_m(),
            op.pressure_ratio,
            op.inlet_total_temperature_k(),
            op.outlet_total_temperature_k(),
            op.power_ratio,
            op.shaft_power.value * 1e-3
        ));
        if !op.requires_compression() {
            ui.colored_label(
                egui::Color32::YELLOW,
                "Ram pressure exceeds the target outlet pressure",
            );
        }
    }
}
