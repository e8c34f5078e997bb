//! Typical biomass feedstock properties
//!
//! Presets prefill the calorific value, moisture content and emission factor
//! for common BECCS feedstocks. They are input helpers only: the calculator
//! reads whatever values end up in the [`CalculationInput`](crate::CalculationInput).
//!
//! # Sources
//! - Phyllis2 database (TNO), as-received fuel properties
//! - IPCC 2006 Guidelines, Vol. 2 Ch. 2 (biomass combustion CO2 factors)

use crate::core_types::units::{Fraction, MegajoulesPerKg, TonnesCo2PerTonne};
use serde::Serialize;
use std::fmt;

/// Named bundle of typical feedstock properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BiomassPreset {
    /// Canonical label, as carried into `biomass_type`
    pub name: &'static str,
    /// Higher heating value on a dry basis
    pub calorific_value: MegajoulesPerKg,
    /// Typical as-delivered moisture (fraction of total mass)
    pub moisture_content: Fraction,
    /// CO2 released per tonne burned
    pub emission_factor: TonnesCo2PerTonne,
}

impl BiomassPreset {
    /// Kiln- or air-dried hardwood chips
    pub const HARDWOOD: BiomassPreset = BiomassPreset {
        name: "hardwood",
        calorific_value: MegajoulesPerKg::new(18.0),
        moisture_content: Fraction::new(0.10),
        emission_factor: TonnesCo2PerTonne::new(1.76),
    };

    /// Softwood chips (pine, spruce), higher resin content
    pub const SOFTWOOD: BiomassPreset = BiomassPreset {
        name: "softwood",
        calorific_value: MegajoulesPerKg::new(19.2),
        moisture_content: Fraction::new(0.15),
        emission_factor: TonnesCo2PerTonne::new(1.83),
    };

    /// Baled corn stover
    pub const CORN_STOVER: BiomassPreset = BiomassPreset {
        name: "corn_stover",
        calorific_value: MegajoulesPerKg::new(17.5),
        moisture_content: Fraction::new(0.15),
        emission_factor: TonnesCo2PerTonne::new(1.58),
    };

    /// Baled wheat straw
    pub const WHEAT_STRAW: BiomassPreset = BiomassPreset {
        name: "wheat_straw",
        calorific_value: MegajoulesPerKg::new(17.3),
        moisture_content: Fraction::new(0.12),
        emission_factor: TonnesCo2PerTonne::new(1.55),
    };

    /// Miscanthus energy grass
    pub const MISCANTHUS: BiomassPreset = BiomassPreset {
        name: "miscanthus",
        calorific_value: MegajoulesPerKg::new(18.5),
        moisture_content: Fraction::new(0.15),
        emission_factor: TonnesCo2PerTonne::new(1.65),
    };

    /// Dewatered microalgae paste
    pub const ALGAE: BiomassPreset = BiomassPreset {
        name: "algae",
        calorific_value: MegajoulesPerKg::new(20.0),
        moisture_content: Fraction::new(0.20),
        emission_factor: TonnesCo2PerTonne::new(1.83),
    };

    /// Every preset, in display order
    pub const ALL: [BiomassPreset; 6] = [
        Self::HARDWOOD,
        Self::SOFTWOOD,
        Self::CORN_STOVER,
        Self::WHEAT_STRAW,
        Self::MISCANTHUS,
        Self::ALGAE,
    ];

    /// Look up a preset by name
    ///
    /// Case-insensitive; `-`, `_` and spaces are interchangeable, so
    /// `"Corn Stover"`, `"corn-stover"` and `"corn_stover"` all match.
    pub fn by_name(name: &str) -> Option<BiomassPreset> {
        let key = normalize(name);
        Self::ALL.into_iter().find(|p| p.name == key)
    }
}

impl fmt::Display for BiomassPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {} @ {:.0}% moisture, {}",
            self.name,
            self.calorific_value,
            self.moisture_content.as_percent(),
            self.emission_factor
        )
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_separator_and_case_insensitive() {
        assert_eq!(
            BiomassPreset::by_name("Corn Stover"),
            Some(BiomassPreset::CORN_STOVER)
        );
        assert_eq!(
            BiomassPreset::by_name("corn-stover"),
            Some(BiomassPreset::CORN_STOVER)
        );
        assert_eq!(
            BiomassPreset::by_name("  HARDWOOD "),
            Some(BiomassPreset::HARDWOOD)
        );
        assert_eq!(BiomassPreset::by_name("peat"), None);
    }

    #[test]
    fn test_presets_are_physically_plausible() {
        for preset in BiomassPreset::ALL {
            assert!(*preset.calorific_value > 10.0, "{}", preset.name);
            assert!(*preset.calorific_value < 25.0, "{}", preset.name);
            assert!(preset.moisture_content.is_nominal(), "{}", preset.name);
            assert!(*preset.emission_factor > 1.0, "{}", preset.name);
        }
    }

    #[test]
    fn test_hardwood_matches_form_defaults() {
        let p = BiomassPreset::HARDWOOD;
        assert_eq!(*p.calorific_value, 18.0);
        assert_eq!(*p.moisture_content, 0.10);
        assert_eq!(*p.emission_factor, 1.76);
    }
}
