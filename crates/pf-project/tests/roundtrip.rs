use pf_project::*;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_path(prefix: &str, ext: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    path.push(format!("{}_{}.{}", prefix, nanos, ext));
    path
}

fn make_case() -> CaseDef {
    CaseDef {
        version: LATEST_VERSION,
        name: "Commuter 80 kW".to_string(),
        stack: StackDef {
            power_w: 80e3,
            cell_voltage_v: 0.65,
            air_excess_ratio: 2.0,
        },
        flight: FlightDef {
            altitude_m: 7_500.0,
            mach: 0.5,
            isa_deviation_k: 10.0,
        },
        compressor: CompressorDef {
            outlet_pressure_pa: 2.0e5,
            isentropic_efficiency: 0.75,
        },
        sweep: SweepDef {
            start_m: 0.0,
            end_m: 9_000.0,
            num_points: 200,
        },
    }
}

#[test]
fn yaml_roundtrip() {
    let path = unique_temp_path("pf_case", "yaml");
    let case = make_case();
    save_yaml(&path, &case).expect("save yaml");
    let loaded = load_yaml(&path).expect("load yaml");
    assert_eq!(case, loaded);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn json_roundtrip_via_extension() {
    let path = unique_temp_path("pf_case", "json");
    let case = make_case();
    save_json(&path, &case).expect("save json");
    let loaded = load_case(&path).expect("load json by extension");
    assert_eq!(case, loaded);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn optional_sections_default() {
    let yaml = r#"
version: 1
name: minimal
stack:
  power_w: 150000.0
  cell_voltage_v: 0.7
  air_excess_ratio: 3.0
flight:
  altitude_m: 11000.0
  mach: 0.8
compressor:
  outlet_pressure_pa: 150000.0
  isentropic_efficiency: 0.7
"#;
    let case: CaseDef = serde_yaml::from_str(yaml).expect("parse minimal case");
    assert_eq!(case.flight.isa_deviation_k, 0.0);
    assert_eq!(case.sweep, SweepDef::default());
    validate_case(&case).expect("minimal case validates");
}

#[test]
fn invalid_file_is_rejected_on_load() {
    let path = unique_temp_path("pf_case_bad", "yaml");
    let mut case = make_case();
    case.stack.cell_voltage_v = 0.0;
    std::fs::write(&path, serde_yaml::to_string(&case).unwrap()).unwrap();
    let err = load_yaml(&path).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_refuses_invalid_case() {
    let path = unique_temp_path("pf_case_refused", "yaml");
    let mut case = make_case();
    case.compressor.isentropic_efficiency = 0.0;
    assert!(save_yaml(&path, &case).is_err());
    assert!(!path.exists());
}
