use clap::{Args, Parser, Subcommand};
use pf_app::{
    AppError, AppResult, case_service, compile_case, evaluate_atmosphere, evaluate_design_point,
    evaluate_sweep, sweep_csv, write_sweep_csv,
};
use pf_core::units::convert::feet_to_meters;
use pf_project::CaseDef;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "pacflow CLI - Fuel cell air supply sizing at altitude", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reactant and product flows of the stack
    Flows {
        #[command(flatten)]
        case: CaseArgs,
        /// Print as YAML
        #[arg(long)]
        yaml: bool,
    },
    /// Standard atmosphere at one altitude
    Atmosphere {
        /// Altitude (meters, or feet with --feet)
        altitude: f64,
        /// Interpret altitude in feet
        #[arg(long)]
        feet: bool,
        /// ISA temperature deviation in K
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        isa_deviation: f64,
    },
    /// Compressor operating point at the case flight condition
    Point {
        #[command(flatten)]
        case: CaseArgs,
        /// Print as YAML
        #[arg(long)]
        yaml: bool,
    },
    /// Altitude sweep of Pc/P, pressure ratio and outlet temperature as CSV
    Sweep {
        #[command(flatten)]
        case: CaseArgs,
        /// First altitude in m
        #[arg(long)]
        start: Option<f64>,
        /// Last altitude in m
        #[arg(long)]
        end: Option<f64>,
        /// Number of samples
        #[arg(long)]
        points: Option<usize>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate case file syntax and values
    Validate {
        /// Path to the case YAML/JSON file
        case_path: PathBuf,
    },
    /// Write the reference case to a YAML file
    Init {
        /// Path of the case file to create
        case_path: PathBuf,
    },
}

/// Case file plus per-parameter overrides.
#[derive(Args, Debug)]
struct CaseArgs {
    /// Case YAML/JSON file (defaults to the reference case)
    #[arg(long)]
    case: Option<PathBuf>,
    /// Stack electrical power in W
    #[arg(long)]
    power: Option<f64>,
    /// Cell voltage in V
    #[arg(long)]
    cell_voltage: Option<f64>,
    /// Air excess ratio
    #[arg(long)]
    air_excess_ratio: Option<f64>,
    /// Flight altitude in m
    #[arg(long)]
    altitude: Option<f64>,
    /// Flight Mach number
    #[arg(long)]
    mach: Option<f64>,
    /// ISA temperature deviation in K
    #[arg(long, allow_hyphen_values = true)]
    isa_deviation: Option<f64>,
    /// Compressor outlet total pressure in Pa
    #[arg(long)]
    outlet_pressure: Option<f64>,
    /// Compressor isentropic efficiency
    #[arg(long)]
    efficiency: Option<f64>,
}

impl CaseArgs {
    fn resolve(&self) -> AppResult<CaseDef> {
        let mut case = match &self.case {
            Some(path) => case_service::load_case(path)?,
            None => CaseDef::default(),
        };

        if let Some(v) = self.power {
            case.stack.power_w = v;
        }
        if let Some(v) = self.cell_voltage {
            case.stack.cell_voltage_v = v;
        }
        if let Some(v) = self.air_excess_ratio {
            case.stack.air_excess_ratio = v;
        }
        if let Some(v) = self.altitude {
            case.flight.altitude_m = v;
        }
        if let Some(v) = self.mach {
            case.flight.mach = v;
        }
        if let Some(v) = self.isa_deviation {
            case.flight.isa_deviation_k = v;
        }
        if let Some(v) = self.outlet_pressure {
            case.compressor.outlet_pressure_pa = v;
        }
        if let Some(v) = self.efficiency {
            case.compressor.isentropic_efficiency = v;
        }

        case_service::validate_case(&case)?;
        Ok(case)
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Flows { case, yaml } => cmd_flows(&case, yaml),
        Commands::Atmosphere {
            altitude,
            feet,
            isa_deviation,
        } => {
            let altitude_m = if feet {
                feet_to_meters(altitude)
            } else {
                altitude
            };
            cmd_atmosphere(altitude_m, isa_deviation)
        }
        Commands::Point { case, yaml } => cmd_point(&case, yaml),
        Commands::Sweep {
            case,
            start,
            end,
            points,
            output,
        } => cmd_sweep(&case, start, end, points, output.as_deref()),
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Init { case_path } => cmd_init(&case_path),
    }
}

fn print_yaml<T: serde::Serialize>(value: &T) -> AppResult<()> {
    let text = serde_yaml::to_string(value)
        .map_err(|e| AppError::Case(format!("Failed to serialize output: {}", e)))?;
    print!("{}", text);
    Ok(())
}

fn cmd_flows(args: &CaseArgs, yaml: bool) -> AppResult<()> {
    let case = args.resolve()?;
    let inputs = compile_case(&case)?;
    let flows = inputs.stack.reactant_flows();

    if yaml {
        let report = evaluate_design_point(&inputs)?;
        return print_yaml(&report.summary());
    }

    println!("Stack: {}", case.name);
    println!(
        "  P = {:.1} kW, Uc = {:.3} V, lambda_air = {:.2}",
        inputs.stack.power_w() * 1e-3,
        inputs.stack.cell_voltage_v(),
        inputs.stack.air_excess_ratio()
    );
    println!("  Total current:  {:.4e} A", flows.total_current_a());
    for flow in [&flows.hydrogen, &flows.oxygen, &flows.air, &flows.water] {
        println!(
            "  {:<4} {:>9.4} mol/s  {:>10.3} g/s",
            flow.species.key(),
            flow.molar_mol_s,
            flow.mass_g_s()
        );
    }
    println!(
        "  Cathode exhaust: {:.3} g/s (water excluded)",
        flows.depleted_air.mass_g_s()
    );
    println!(
        "  LHV efficiency: {:.1}%, waste heat: {:.1} kW",
        flows.efficiency_lhv * 100.0,
        flows.waste_heat_w() * 1e-3
    );
    Ok(())
}

fn cmd_atmosphere(altitude_m: f64, isa_deviation_k: f64) -> AppResult<()> {
    let report = evaluate_atmosphere(altitude_m, isa_deviation_k)?;
    let s = &report.state;
    println!(
        "ISA{:+} at {:.1} m ({:.0} ft):",
        isa_deviation_k,
        s.altitude_m(),
        report.altitude_ft
    );
    println!(
        "  Temperature:    {:.2} K ({:.2} °C)",
        s.temperature_k(),
        s.temperature_k() - 273.15
    );
    println!(
        "  Pressure:       {:.1} Pa ({:.2} hPa)",
        s.pressure_pa(),
        s.pressure_pa() * 1e-2
    );
    println!("  Density:        {:.4} kg/m³", s.density_kg_m3());
    println!(
        "  Speed of sound: {:.2} m/s ({:.1} kt)",
        s.speed_of_sound_m_s(),
        report.speed_of_sound_kt
    );
    Ok(())
}

fn cmd_point(args: &CaseArgs, yaml: bool) -> AppResult<()> {
    let case = args.resolve()?;
    let inputs = compile_case(&case)?;
    let report = evaluate_design_point(&inputs)?;

    if yaml {
        return print_yaml(&report.summary());
    }

    let op = &report.operating_point;
    println!(
        "Compressor at {:.0} m, Mach {:.2}, ISA{:+}:",
        op.flight.altitude_m(),
        op.flight.mach(),
        op.flight.isa_deviation_k()
    );
    println!("  Inlet total pressure pt1:    {:.1} Pa", op.inlet_total_pressure_pa());
    println!("  Inlet total temperature Tt1: {:.2} K", op.inlet_total_temperature_k());
    println!("  Pressure ratio:              {:.3}", op.pressure_ratio);
    println!("  Outlet Tt2 (isentropic):     {:.2} K", op.outlet_total_temperature_k());
    println!(
        "  Outlet Tt2 (real):           {:.2} K",
        op.outlet_total_temperature_real_k()
    );
    println!("  Pc/P:                        {:.4}", op.power_ratio);
    println!(
        "  Compressor power:            {:.2} kW",
        op.shaft_power.value * 1e-3
    );
    if !op.requires_compression() {
        println!("  (ram pressure already exceeds the target outlet pressure)");
    }
    Ok(())
}

fn cmd_sweep(
    args: &CaseArgs,
    start: Option<f64>,
    end: Option<f64>,
    points: Option<usize>,
    output: Option<&Path>,
) -> AppResult<()> {
    let mut case = args.resolve()?;
    if let Some(v) = start {
        case.sweep.start_m = v;
    }
    if let Some(v) = end {
        case.sweep.end_m = v;
    }
    if let Some(v) = points {
        case.sweep.num_points = v;
    }
    case_service::validate_case(&case)?;

    let inputs = compile_case(&case)?;
    tracing::info!(range = %inputs.range, "running altitude sweep");
    let series = evaluate_sweep(&inputs)?;

    // Write to file or stdout
    if let Some(path) = output {
        write_sweep_csv(path, &series)?;
        println!(
            "✓ Exported {} sweep points to {}",
            series.len(),
            path.display()
        );
    } else {
        print!("{}", sweep_csv(&series));
    }
    Ok(())
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = case_service::load_case(case_path)?;
    case_service::validate_case(&case)?;
    compile_case(&case)?;
    println!("✓ Case '{}' is valid", case.name);
    Ok(())
}

fn cmd_init(case_path: &Path) -> AppResult<()> {
    case_service::save_case(case_path, &CaseDef::default())?;
    println!("✓ Wrote reference case to {}", case_path.display());
    Ok(())
}
