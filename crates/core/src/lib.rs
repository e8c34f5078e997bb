//! BECCS Carbon Credit Calculator Core Library
//!
//! Estimates electricity output and carbon credits for a Bioenergy with
//! Carbon Capture and Storage project from six feedstock and plant
//! parameters.
//!
//! The library is split into independently testable units connected by
//! plain data records:
//! - [`validation`] rejects inputs the calculator must never see
//! - [`calculator`] is the pure formula chain
//! - [`report`] renders results as a table, a bar chart and the CSV export
//!
//! ```
//! use beccs_core::{evaluate, CalculationInput};
//!
//! let input = CalculationInput::new("hardwood", 50.0, 0.85, 18.0, 0.10, 1.76);
//! let result = evaluate(&input).unwrap();
//! assert_eq!(result.carbon_credits, 74.8);
//! assert_eq!(result.energy_output_mwh, 67.5);
//! ```

// Core types and utilities
pub mod core_types;

pub mod calculator;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod validation;

// Re-export core types
pub use core_types::{BiomassPreset, Fraction, MegajoulesPerKg, Tonnes, TonnesCo2PerTonne};

pub use calculator::{compute, round_to_cents, CalculationInput, CalculationResult};
pub use error::{BeccsError, BeccsResult};
pub use pipeline::{evaluate, load_input, parse_input};
pub use report::ReportError;
pub use validation::{validate, QuantityField, ValidationError};
