//! Sample model directories written to a temporary location.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct Fixtures {
    _dir: TempDir,
    pub root: PathBuf,
}

impl Fixtures {
    pub fn path(&self, model: &str) -> PathBuf {
        self.root.join(model)
    }
}

fn write_model(root: &Path, name: &str, files: &[(&str, &str)]) {
    let model = root.join(name);
    fs::create_dir_all(&model).unwrap();
    for (file, content) in files {
        let path = model.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Clean, invalid, warning-only and sparse sample models.
pub fn sample_models() -> Fixtures {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();

    write_model(
        &root,
        "clean_model",
        &[
            (
                "input.dat",
                "# Pipe flow input deck\nSOLVER = NAVIER_STOKES\ntemperature = 300.0\npressure = 1000.0\ndensity = 333.0\nvelocity = 25.0\nmax_iterations = 1000\n",
            ),
            (
                "boundary_conditions.txt",
                "INLET\n  type = velocity_inlet\n  velocity = 25.0\nOUTLET\n  type = pressure_outlet\n",
            ),
            (
                "material_properties.csv",
                "property,value,units\nviscosity,1.81e-5,Pa.s\n",
            ),
            ("mesh/mesh_info.txt", "elements = 50000\nnodes = 52500\n"),
        ],
    );

    write_model(
        &root,
        "invalid_thermal_model",
        &[
            (
                "input.dat",
                "# Thermal Analysis - Heat Transfer\nSIMULATION_TYPE = THERMAL\ntemperature = 50.0        # too low for Kelvin\npressure = 1000000000\ndensity = -2.5\nheat_flux = power_dissipation / component_area\nambient_temperature = 25.0\n",
            ),
            (
                "material_properties.csv",
                "property,value,units\ndensity,-2.5,kg/m3\n",
            ),
            ("mesh_info.txt", ""),
        ],
    );

    write_model(
        &root,
        "warning_structural_model",
        &[
            (
                "input.dat",
                "SIMULATION_TYPE = STRUCTURAL\ntemperature = 300\nwall_temperature = 400\ndensity = 7850\n",
            ),
            (
                "boundary_conditions.txt",
                "LEFT_END\n  type = fixed_support\n  displacement_x = 0\n",
            ),
            ("material_properties.csv", "property,value\npoisson_ratio,0.3\n"),
        ],
    );

    write_model(
        &root,
        "sparse_model",
        &[("input.dat", "temperature = 5\npressure = 1e999\n")],
    );

    Fixtures { _dir: dir, root }
}
