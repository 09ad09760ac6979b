//! Case file schema.
//!
//! All values are plain SI numbers so the files stay readable:
//!
//! ```yaml
//! version: 1
//! name: Regional aircraft 150 kW
//! stack:
//!   power_w: 150000.0
//!   cell_voltage_v: 0.7
//!   air_excess_ratio: 3.0
//! flight:
//!   altitude_m: 11000.0
//!   mach: 0.8
//!   isa_deviation_k: 0.0
//! compressor:
//!   outlet_pressure_pa: 150000.0
//!   isentropic_efficiency: 0.7
//! sweep:
//!   start_m: 0.0
//!   end_m: 12000.0
//!   num_points: 1000
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub version: u32,
    pub name: String,
    pub stack: StackDef,
    pub flight: FlightDef,
    pub compressor: CompressorDef,
    #[serde(default)]
    pub sweep: SweepDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StackDef {
    pub power_w: f64,
    pub cell_voltage_v: f64,
    pub air_excess_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightDef {
    pub altitude_m: f64,
    pub mach: f64,
    #[serde(default)]
    pub isa_deviation_k: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompressorDef {
    pub outlet_pressure_pa: f64,
    pub isentropic_efficiency: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    pub start_m: f64,
    pub end_m: f64,
    pub num_points: usize,
}

impl Default for CaseDef {
    fn default() -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: "Reference 150 kW stack".to_string(),
            stack: StackDef::default(),
            flight: FlightDef::default(),
            compressor: CompressorDef::default(),
            sweep: SweepDef::default(),
        }
    }
}

impl Default for StackDef {
    fn default() -> Self {
        Self {
            power_w: 150e3,
            cell_voltage_v: 0.7,
            air_excess_ratio: 3.0,
        }
    }
}

impl Default for FlightDef {
    fn default() -> Self {
        Self {
            altitude_m: 11_000.0,
            mach: 0.8,
            isa_deviation_k: 0.0,
        }
    }
}

impl Default for CompressorDef {
    fn default() -> Self {
        Self {
            outlet_pressure_pa: 1.5e5,
            isentropic_efficiency: 0.7,
        }
    }
}

impl Default for SweepDef {
    fn default() -> Self {
        Self {
            start_m: 0.0,
            end_m: 12_000.0,
            num_points: 1000,
        }
    }
}
