//! CSV export of sweep results.

use std::path::Path;

use pf_sweep::SweepSeries;

use crate::error::{AppError, AppResult};

pub const SWEEP_CSV_HEADER: &str =
    "altitude_m,power_ratio,pressure_ratio,outlet_total_temperature_k";

/// Render a sweep as CSV (header + one row per altitude).
pub fn sweep_csv(series: &SweepSeries) -> String {
    let mut csv = String::with_capacity(64 * (series.len() + 1));
    csv.push_str(SWEEP_CSV_HEADER);
    csv.push('\n');
    for p in series.points() {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            p.altitude_m, p.power_ratio, p.pressure_ratio, p.outlet_total_temperature_k
        ));
    }
    csv
}

pub fn write_sweep_csv(path: &Path, series: &SweepSeries) -> AppResult<()> {
    std::fs::write(path, sweep_csv(series)).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), rows = series.len(), "wrote sweep CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_sweep::SweepPoint;

    #[test]
    fn csv_has_header_and_rows() {
        let mut series = SweepSeries::default();
        series.push(SweepPoint {
            altitude_m: 0.0,
            power_ratio: -0.005,
            pressure_ratio: 0.97,
            outlet_total_temperature_k: 322.4,
        });
        series.push(SweepPoint {
            altitude_m: 12_000.0,
            power_ratio: 0.318,
            pressure_ratio: 5.09,
            outlet_total_temperature_k: 389.1,
        });
        let csv = sweep_csv(&series);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], SWEEP_CSV_HEADER);
        assert_eq!(lines[2], "12000,0.318,5.09,389.1");
    }
}
