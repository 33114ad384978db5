//! Built-in configuration used when no override is supplied.

pub const FILE_TYPES: [&str; 5] = [".dat", ".inp", ".txt", ".csv", ".json"];

/// `(name, min, max)`, inclusive on both ends.
pub const PARAMETER_RANGES: [(&str, f64, f64); 4] = [
    ("temperature", 200.0, 800.0),
    ("pressure", 0.0, 500_000.0),
    ("velocity", 0.0, 100.0),
    ("density", 0.1, 10_000.0),
];

pub const REQUIRED_FILES: [&str; 3] = [
    "input.dat",
    "boundary_conditions.txt",
    "material_properties.csv",
];

pub const VALIDATION_RULES: [&str; 5] = [
    "file_existence",
    "file_format",
    "parameter_ranges",
    "cross_file_consistency",
    "physics_validation",
];
