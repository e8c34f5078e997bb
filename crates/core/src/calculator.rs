//! BECCS carbon credit and energy output calculator
//!
//! Turns six feedstock and plant parameters into four headline metrics:
//!
//! 1. Effective calorific value: `cv × (1 - moisture)`
//! 2. Electrical output: `t × cv_eff × 1000 × 0.3 / 3600` MWh
//! 3. Total emission: `t × emission_factor` tCO2
//! 4. Captured CO2: `emitted × capture_efficiency`
//! 5. Carbon credits: one credit per tonne captured
//! 6. Energy efficiency: `MWh / t` (0 when there is no feedstock)
//!
//! Every output is rounded to two decimal places. [`compute`] performs no
//! validation; run [`crate::validation::validate`] first or use
//! [`crate::evaluate`].

use crate::core_types::biomass::BiomassPreset;
use crate::core_types::units::{
    Fraction, MegajoulesPerKg, MegawattHours, Tonnes, TonnesCo2, TonnesCo2PerTonne,
};
use serde::{Deserialize, Serialize};

/// Share of combustion heat delivered as electricity (fixed plant assumption)
pub const CONVERSION_EFFICIENCY: f64 = 0.3;

/// Decimal places kept in every reported metric
pub const REPORTED_DECIMALS: usize = 2;

/// The six parameters describing one BECCS run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Feedstock label; carried through, never used numerically
    pub biomass_type: String,
    pub biomass_quantity_tons: Tonnes,
    /// Fraction of emitted CO2 that is captured
    pub capture_efficiency: Fraction,
    /// Energy content before moisture derating
    pub calorific_value: MegajoulesPerKg,
    /// Fraction of feedstock mass that is water
    pub moisture_content: Fraction,
    pub emission_factor: TonnesCo2PerTonne,
}

impl CalculationInput {
    /// Build an input from raw numbers
    ///
    /// # Arguments
    /// * `biomass_type` - Feedstock label
    /// * `biomass_quantity_tons` - Feedstock mass (t)
    /// * `capture_efficiency` - Captured share of emitted CO2 (fraction 0-1)
    /// * `calorific_value` - Energy content (MJ/kg)
    /// * `moisture_content` - Water share of mass (fraction 0-1)
    /// * `emission_factor` - CO2 per tonne burned (tCO2/t)
    pub fn new(
        biomass_type: impl Into<String>,
        biomass_quantity_tons: f64,
        capture_efficiency: f64,
        calorific_value: f64,
        moisture_content: f64,
        emission_factor: f64,
    ) -> Self {
        CalculationInput {
            biomass_type: biomass_type.into(),
            biomass_quantity_tons: Tonnes::new(biomass_quantity_tons),
            capture_efficiency: Fraction::new(capture_efficiency),
            calorific_value: MegajoulesPerKg::new(calorific_value),
            moisture_content: Fraction::new(moisture_content),
            emission_factor: TonnesCo2PerTonne::new(emission_factor),
        }
    }

    /// Build an input whose feedstock properties come from a preset
    pub fn from_preset(
        preset: &BiomassPreset,
        biomass_quantity_tons: Tonnes,
        capture_efficiency: Fraction,
    ) -> Self {
        CalculationInput {
            biomass_type: preset.name.to_string(),
            biomass_quantity_tons,
            capture_efficiency,
            calorific_value: preset.calorific_value,
            moisture_content: preset.moisture_content,
            emission_factor: preset.emission_factor,
        }
    }
}

impl Default for CalculationInput {
    /// 50 t of hardwood at 85% capture
    fn default() -> Self {
        CalculationInput::from_preset(
            &BiomassPreset::HARDWOOD,
            Tonnes::new(50.0),
            Fraction::new(0.85),
        )
    }
}

/// Rounded headline metrics for one run
///
/// Serialized field names are the column headers of the CSV export and must
/// not change.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationResult {
    #[serde(rename = "CO2 Captured (tons)")]
    pub co2_captured_tons: f64,
    #[serde(rename = "Carbon Credits (credits)")]
    pub carbon_credits: f64,
    #[serde(rename = "Energy Output (MWh)")]
    pub energy_output_mwh: f64,
    #[serde(rename = "Energy Efficiency (MWh/ton)")]
    pub energy_efficiency_mwh_per_ton: f64,
}

impl CalculationResult {
    /// Column headers, in export order
    pub const FIELD_NAMES: [&'static str; 4] = [
        "CO2 Captured (tons)",
        "Carbon Credits (credits)",
        "Energy Output (MWh)",
        "Energy Efficiency (MWh/ton)",
    ];

    /// Values in the same order as [`Self::FIELD_NAMES`]
    pub fn values(&self) -> [f64; 4] {
        [
            self.co2_captured_tons,
            self.carbon_credits,
            self.energy_output_mwh,
            self.energy_efficiency_mwh_per_ton,
        ]
    }

    /// `(header, value)` pairs in export order
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::FIELD_NAMES.into_iter().zip(self.values())
    }

    /// True when every metric is a finite number
    pub fn is_finite(&self) -> bool {
        self.values().iter().all(|v| v.is_finite())
    }
}

/// Unrounded intermediate quantities of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBalance {
    pub effective_calorific_value: MegajoulesPerKg,
    pub energy_output: MegawattHours,
    pub total_co2_emitted: TonnesCo2,
    pub co2_captured: TonnesCo2,
}

impl EnergyBalance {
    /// Apply the formula chain without rounding
    pub fn of(input: &CalculationInput) -> Self {
        let effective_calorific_value = input.calorific_value.derated(input.moisture_content);

        let heat_release = input.biomass_quantity_tons * effective_calorific_value;
        let energy_output = (heat_release * CONVERSION_EFFICIENCY).to_megawatt_hours();

        let total_co2_emitted = input.biomass_quantity_tons * input.emission_factor;
        let co2_captured = total_co2_emitted * input.capture_efficiency;

        EnergyBalance {
            effective_calorific_value,
            energy_output,
            total_co2_emitted,
            co2_captured,
        }
    }

    /// Electricity per tonne of feedstock, 0 when the quantity is not positive
    pub fn energy_efficiency(&self, biomass_quantity: Tonnes) -> f64 {
        if *biomass_quantity > 0.0 {
            self.energy_output / biomass_quantity
        } else {
            0.0
        }
    }
}

/// Compute the rounded result for one run
///
/// Pure and total: no validation, no clamping of out-of-range fractions,
/// no logging. Callers validate beforehand.
pub fn compute(input: &CalculationInput) -> CalculationResult {
    let balance = EnergyBalance::of(input);
    let energy_efficiency = balance.energy_efficiency(input.biomass_quantity_tons);

    // One credit per tonne captured
    let carbon_credits = *balance.co2_captured;

    CalculationResult {
        co2_captured_tons: round_to_cents(*balance.co2_captured),
        carbon_credits: round_to_cents(carbon_credits),
        energy_output_mwh: round_to_cents(*balance.energy_output),
        energy_efficiency_mwh_per_ton: round_to_cents(energy_efficiency),
    }
}

/// Round to two decimal places
///
/// Rounds the exact binary value, so 2.675 (stored as 2.67499..) becomes
/// 2.67 rather than 2.68. Non-finite values pass through.
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", REPORTED_DECIMALS, value)
        .parse()
        .unwrap_or(value)
}
