//! Input checks run before the calculator
//!
//! Checks are ordered and the first failure wins, so a blank label is
//! reported before a zero quantity. Capture efficiency and moisture content
//! are not checked; the calculator applies them as given.

use crate::calculator::CalculationInput;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Numeric input that must be strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityField {
    BiomassQuantity,
    CalorificValue,
    EmissionFactor,
}

impl QuantityField {
    /// Human-readable name used in error messages
    pub fn label(self) -> &'static str {
        match self {
            QuantityField::BiomassQuantity => "Biomass quantity",
            QuantityField::CalorificValue => "Calorific value",
            QuantityField::EmissionFactor => "Emission factor",
        }
    }
}

impl fmt::Display for QuantityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why an input was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Biomass type cannot be empty.")]
    EmptyBiomassType,
    #[error("{field} must be positive.")]
    NonPositiveQuantity { field: QuantityField, value: f64 },
}

/// Check the caller-side preconditions of [`crate::calculator::compute`]
///
/// NaN quantities fail the positivity checks.
///
/// # Errors
/// Returns the first failed check, in order: blank biomass type, then
/// non-positive biomass quantity, calorific value and emission factor.
pub fn validate(input: &CalculationInput) -> Result<(), ValidationError> {
    if input.biomass_type.trim().is_empty() {
        debug!("rejected input: blank biomass type");
        return Err(ValidationError::EmptyBiomassType);
    }

    let quantities = [
        (QuantityField::BiomassQuantity, *input.biomass_quantity_tons),
        (QuantityField::CalorificValue, *input.calorific_value),
        (QuantityField::EmissionFactor, *input.emission_factor),
    ];

    for (field, value) in quantities {
        if value.is_nan() || value <= 0.0 {
            debug!(%field, value, "rejected input: non-positive quantity");
            return Err(ValidationError::NonPositiveQuantity { field, value });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CalculationInput {
        CalculationInput::new("hardwood", 50.0, 0.85, 18.0, 0.10, 1.76)
    }

    #[test]
    fn test_valid_input_passes() {
        assert_eq!(validate(&valid()), Ok(()));
    }

    #[test]
    fn test_blank_biomass_type() {
        let mut input = valid();
        input.biomass_type = "   \t".to_string();
        let err = validate(&input).unwrap_err();
        assert_eq!(err, ValidationError::EmptyBiomassType);
        assert_eq!(err.to_string(), "Biomass type cannot be empty.");
    }

    #[test]
    fn test_each_quantity_must_be_positive() {
        let cases = [
            (
                CalculationInput::new("x", 0.0, 0.85, 18.0, 0.1, 1.76),
                QuantityField::BiomassQuantity,
                "Biomass quantity must be positive.",
            ),
            (
                CalculationInput::new("x", 50.0, 0.85, -1.0, 0.1, 1.76),
                QuantityField::CalorificValue,
                "Calorific value must be positive.",
            ),
            (
                CalculationInput::new("x", 50.0, 0.85, 18.0, 0.1, 0.0),
                QuantityField::EmissionFactor,
                "Emission factor must be positive.",
            ),
        ];

        for (input, expected_field, message) in cases {
            let err = validate(&input).unwrap_err();
            match &err {
                ValidationError::NonPositiveQuantity { field, .. } => {
                    assert_eq!(*field, expected_field);
                }
                other => panic!("unexpected error {other:?}"),
            }
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let input = CalculationInput::new("", 0.0, 0.85, 0.0, 0.1, 0.0);
        assert_eq!(validate(&input), Err(ValidationError::EmptyBiomassType));

        let input = CalculationInput::new("hardwood", 0.0, 0.85, 0.0, 0.1, 0.0);
        assert!(matches!(
            validate(&input),
            Err(ValidationError::NonPositiveQuantity {
                field: QuantityField::BiomassQuantity,
                ..
            })
        ));
    }

    #[test]
    fn test_nan_quantity_is_rejected() {
        let input = CalculationInput::new("hardwood", f64::NAN, 0.85, 18.0, 0.1, 1.76);
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_fractions_are_not_checked() {
        let input = CalculationInput::new("hardwood", 50.0, 1.7, 18.0, -0.3, 1.76);
        assert_eq!(validate(&input), Ok(()));
    }
}
