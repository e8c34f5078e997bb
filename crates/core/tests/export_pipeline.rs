//! End-to-end tests: raw input → validation → calculation → rendered output
//!
//! The CSV export is the one artifact other tools consume, so its bytes are
//! pinned here exactly.

use beccs_core::report::{
    render_bar_chart, render_table, save_csv, to_csv_string, DEFAULT_CHART_WIDTH,
};
use beccs_core::{
    evaluate, load_input, BeccsError, BiomassPreset, CalculationInput, Fraction, QuantityField,
    Tonnes, ValidationError,
};
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

const HEADER: &str =
    "CO2 Captured (tons),Carbon Credits (credits),Energy Output (MWh),Energy Efficiency (MWh/ton)";

/// Unique scratch path under the system temp directory
fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("beccs-core-{}-{name}", std::process::id()))
}

#[test]
fn test_reference_scenario_csv_bytes() {
    let input = CalculationInput::new("hardwood", 50.0, 0.85, 18.0, 0.10, 1.76);
    let result = evaluate(&input).unwrap();

    assert_eq!(
        to_csv_string(&result),
        format!("{HEADER}\n74.8,74.8,67.5,1.35\n")
    );
}

#[test]
fn test_whole_numbers_keep_decimal_point() {
    // 100 t × 1.0 tCO2/t, fully captured; 36 MJ/kg dry → 300 MWh, 3 MWh/t
    let input = CalculationInput::new("test", 100.0, 1.0, 36.0, 0.0, 1.0);
    let result = evaluate(&input).unwrap();
    assert_eq!(
        to_csv_string(&result),
        format!("{HEADER}\n100.0,100.0,300.0,3.0\n")
    );
}

#[test]
fn test_zero_capture_exports_zero_point_zero() {
    let input = CalculationInput::new("hardwood", 50.0, 0.0, 18.0, 0.10, 1.76);
    let result = evaluate(&input).unwrap();
    let csv = to_csv_string(&result);
    let row = csv.lines().nth(1).unwrap();
    assert!(row.starts_with("0.0,0.0,"), "{row}");
}

#[test]
fn test_save_csv_writes_file() {
    let result = evaluate(&CalculationInput::default()).unwrap();
    let path = scratch_path("results.csv");

    save_csv(&result, &path).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(written, to_csv_string(&result));
}

#[test]
fn test_load_input_from_json_file() {
    let path = scratch_path("input.json");
    fs::write(
        &path,
        r#"{
            "biomass_type": "hardwood",
            "biomass_quantity_tons": 50.0,
            "capture_efficiency": 0.85,
            "calorific_value": 18.0,
            "moisture_content": 0.10,
            "emission_factor": 1.76
        }"#,
    )
    .unwrap();

    let input = load_input(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let result = evaluate(&input).unwrap();
    assert_eq!(result.carbon_credits, 74.8);
}

#[test]
fn test_load_missing_file_is_load_error() {
    let err = load_input(scratch_path("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, BeccsError::Load(_)));
}

#[test]
fn test_validation_error_leaves_system_usable() {
    let bad = CalculationInput::new("hardwood", 50.0, 0.85, 0.0, 0.10, 1.76);
    let err = evaluate(&bad).unwrap_err();
    assert!(matches!(
        err,
        BeccsError::Validation(ValidationError::NonPositiveQuantity {
            field: QuantityField::CalorificValue,
            ..
        })
    ));
    assert_eq!(err.to_string(), "Calorific value must be positive.");

    let good = CalculationInput::default();
    assert!(evaluate(&good).is_ok());
}

#[test]
fn test_preset_input_renders() {
    let preset = BiomassPreset::by_name("corn-stover").unwrap();
    let input = CalculationInput::from_preset(&preset, Tonnes::new(120.0), Fraction::new(0.9));
    let result = evaluate(&input).unwrap();

    let table = render_table(&result);
    let chart = render_bar_chart(&result, DEFAULT_CHART_WIDTH);
    assert!(table.contains("Carbon Credits (credits)"));
    assert!(chart.contains("Energy Output (MWh)"));
    assert!(chart.contains('#'));
}

/// Calls share no state, so a parallel batch must match a sequential one
#[test]
fn test_parallel_calls_match_sequential() {
    let inputs: Vec<CalculationInput> = (1..=500)
        .map(|i| {
            let i = f64::from(i);
            CalculationInput::new("batch", i, (i % 100.0) / 100.0, 18.0, 0.1, 1.76)
        })
        .collect();

    let sequential: Vec<_> = inputs.iter().map(|i| evaluate(i).unwrap()).collect();
    let parallel: Vec<_> = inputs.par_iter().map(|i| evaluate(i).unwrap()).collect();

    assert_eq!(sequential, parallel);
}
