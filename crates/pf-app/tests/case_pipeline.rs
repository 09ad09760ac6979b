//! Case file -> model -> report pipeline.

use pf_app::{
    compile_case, evaluate_design_point, evaluate_sweep, load_case, sweep_csv, validate_case,
};
use std::path::PathBuf;

fn case_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("cases");
    path.push(name);
    path
}

#[test]
fn reference_case_end_to_end() {
    let path = case_path("reference.yaml");
    if !path.exists() {
        eprintln!("Skipping test: reference case not found at {:?}", path);
        return;
    }

    let case = load_case(&path).expect("Failed to load case");
    validate_case(&case).expect("Validation should succeed");

    let inputs = compile_case(&case).expect("Case should compile");
    let report = evaluate_design_point(&inputs).expect("Design point should evaluate");
    let summary = report.summary();
    assert!((summary.h2_g_s - 2.239).abs() < 1e-3);
    assert!((summary.o2_g_s - 17.767).abs() < 1e-3);

    let series = evaluate_sweep(&inputs).expect("Sweep should evaluate");
    assert_eq!(series.len(), 1000);
    let csv = sweep_csv(&series);
    assert_eq!(csv.lines().count(), 1001);
}

#[test]
fn hot_day_case_needs_more_power_than_standard_day() {
    let path = case_path("commuter_hot_day.yaml");
    if !path.exists() {
        eprintln!("Skipping test: case not found at {:?}", path);
        return;
    }

    let hot = load_case(&path).expect("Failed to load case");
    let mut standard = hot.clone();
    standard.flight.isa_deviation_k = 0.0;

    let hot_report = evaluate_design_point(&compile_case(&hot).unwrap()).unwrap();
    let std_report = evaluate_design_point(&compile_case(&standard).unwrap()).unwrap();
    assert!(hot_report.operating_point.power_ratio > std_report.operating_point.power_ratio);
}

#[test]
fn missing_case_file_reports_path() {
    let err = load_case(&case_path("does_not_exist.yaml")).unwrap_err();
    assert!(err.to_string().contains("does_not_exist.yaml"));
}

#[test]
fn repeated_evaluation_is_identical() {
    let inputs = compile_case(&pf_project::CaseDef::default()).unwrap();
    let a = evaluate_sweep(&inputs).unwrap();
    let b = evaluate_sweep(&inputs).unwrap();
    assert_eq!(a, b);
}
