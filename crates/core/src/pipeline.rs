//! Validate, compute and check in one call
//!
//! Front ends call [`evaluate`] instead of wiring the validator and the
//! calculator themselves. A failure here never leaves state behind, so the
//! caller can report it and accept the next input.

use crate::calculator::{compute, CalculationInput, CalculationResult};
use crate::error::{BeccsError, BeccsResult};
use crate::validation::validate;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Validate `input`, run the calculator and reject non-finite results
///
/// # Errors
/// - [`BeccsError::Validation`] if a precondition fails
/// - [`BeccsError::Computation`] if any metric comes out NaN or infinite
pub fn evaluate(input: &CalculationInput) -> BeccsResult<CalculationResult> {
    validate(input)?;

    let result = compute(input);
    if !result.is_finite() {
        warn!(?input, ?result, "calculation produced non-finite metrics");
        return Err(BeccsError::Computation(format!(
            "non-finite result for biomass type '{}'",
            input.biomass_type
        )));
    }

    debug!(biomass_type = %input.biomass_type, ?result, "calculation complete");
    Ok(result)
}

/// Parse a calculation input from JSON text
///
/// Fractions are read as-is (0.85, not 85).
///
/// # Errors
/// Returns [`BeccsError::Parse`] for malformed JSON or missing fields.
pub fn parse_input(json: &str) -> BeccsResult<CalculationInput> {
    Ok(serde_json::from_str(json)?)
}

/// Read a calculation input from a JSON file
///
/// # Errors
/// Returns [`BeccsError::Load`] if the file cannot be read, or
/// [`BeccsError::Parse`] if its contents are not a valid input.
pub fn load_input<P: AsRef<Path>>(path: P) -> BeccsResult<CalculationInput> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), "loaded input file");
    parse_input(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_evaluate_valid_input() {
        let result = evaluate(&CalculationInput::default()).unwrap();
        assert_eq!(result.carbon_credits, 74.8);
    }

    #[test]
    fn test_evaluate_surfaces_validation_error() {
        let input = CalculationInput::new(" ", 50.0, 0.85, 18.0, 0.1, 1.76);
        let err = evaluate(&input).unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(
            err,
            BeccsError::Validation(ValidationError::EmptyBiomassType)
        ));
        assert_eq!(err.to_string(), "Biomass type cannot be empty.");
    }

    #[test]
    fn test_evaluate_reports_non_finite_as_computation_failure() {
        let input = CalculationInput::new("hardwood", 50.0, f64::NAN, 18.0, 0.1, 1.76);
        let err = evaluate(&input).unwrap_err();
        assert!(matches!(err, BeccsError::Computation(_)));
        assert!(err.to_string().starts_with("An error occurred:"));

        // The next attempt is unaffected
        assert!(evaluate(&CalculationInput::default()).is_ok());
    }

    #[test]
    fn test_parse_input_rejects_missing_fields() {
        let err = parse_input(r#"{"biomass_type": "hardwood"}"#).unwrap_err();
        assert!(matches!(err, BeccsError::Parse(_)));
    }
}
