//! Semantic unit types for type-safe physical quantity handling
//!
//! This module provides newtype wrappers for the quantities that flow through
//! a BECCS energy and capture estimate, so a tonne of biomass can't be mixed
//! up with a tonne of captured CO2 or a calorific value with an energy total.
//!
//! # Design Philosophy
//! - All types use f64; results are rounded to cents and exported verbatim
//! - Implements Deref, Ord and, where a unit is shown to users, Display
//! - Cross-type operations encode the unit algebra (t × MJ/kg = MJ)
//! - Serde support for serialization (newtypes serialize as bare numbers)
//! - Total ordering via Ord trait (NaN handled as greater than all values)
//! - Constructors never clamp: out-of-range fractions are carried as given
//!
//! # Usage
//! ```
//! use beccs_core::core_types::units::{MegajoulesPerKg, Tonnes};
//!
//! let energy = Tonnes::new(50.0) * MegajoulesPerKg::new(16.2);
//! assert!((energy.to_megawatt_hours().value() - 225.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, Div, Mul};

/// Kilograms in one metric tonne
pub const KG_PER_TONNE: f64 = 1000.0;

/// Megajoules in one megawatt-hour
pub const MJ_PER_MWH: f64 = 3600.0;

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// MASS TYPES
// ============================================================================

/// Mass of biomass feedstock in metric tonnes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Tonnes(f64);

impl Eq for Tonnes {}

impl PartialOrd for Tonnes {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tonnes {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Tonnes {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Tonnes {
    /// Create a new mass value
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Tonnes(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Tonnes {
    fn from(v: f64) -> Self {
        Tonnes(v)
    }
}

impl From<Tonnes> for f64 {
    fn from(t: Tonnes) -> f64 {
        t.0
    }
}

impl fmt::Display for Tonnes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} t", self.0)
    }
}

/// Mass of carbon dioxide in metric tonnes (tCO2)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct TonnesCo2(f64);

impl Eq for TonnesCo2 {}

impl PartialOrd for TonnesCo2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TonnesCo2 {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for TonnesCo2 {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl TonnesCo2 {
    /// Create a new CO2 mass
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        TonnesCo2(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for TonnesCo2 {
    fn from(v: f64) -> Self {
        TonnesCo2(v)
    }
}

impl From<TonnesCo2> for f64 {
    fn from(t: TonnesCo2) -> f64 {
        t.0
    }
}

// Captured share of an emission: tCO2 × fraction = tCO2
impl Mul<Fraction> for TonnesCo2 {
    type Output = TonnesCo2;
    fn mul(self, rhs: Fraction) -> TonnesCo2 {
        TonnesCo2(self.0 * rhs.0)
    }
}

// ============================================================================
// RATIO TYPES
// ============================================================================

/// Dimensionless fraction, nominally in [0, 1]
///
/// Used for moisture content and capture efficiency. Values outside [0, 1]
/// are accepted unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Fraction(f64);

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Fraction {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Fraction {
    /// Zero fraction
    pub const ZERO: Fraction = Fraction(0.0);

    /// Full/complete (1.0)
    pub const ONE: Fraction = Fraction(1.0);

    /// Create a new fraction. No range check is applied.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Fraction(value)
    }

    /// Create a fraction from a percentage (0-100)
    #[inline]
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        Fraction(percent / 100.0)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to percentage (0-100)
    #[inline]
    #[must_use]
    pub fn as_percent(self) -> f64 {
        self.0 * 100.0
    }

    /// The remaining share, `1 - self`
    ///
    /// Returned as a raw factor because an out-of-range fraction yields a
    /// complement outside [0, 1] too.
    #[inline]
    #[must_use]
    pub fn complement(self) -> f64 {
        1.0 - self.0
    }

    /// Whether the value lies in the nominal [0, 1] range
    #[inline]
    #[must_use]
    pub fn is_nominal(self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }
}

impl From<f64> for Fraction {
    fn from(v: f64) -> Self {
        Fraction(v)
    }
}

impl From<Fraction> for f64 {
    fn from(f: Fraction) -> f64 {
        f.0
    }
}

// ============================================================================
// ENERGY TYPES
// ============================================================================

/// Calorific value (specific energy) in MJ/kg
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MegajoulesPerKg(f64);

impl Eq for MegajoulesPerKg {}

impl PartialOrd for MegajoulesPerKg {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MegajoulesPerKg {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for MegajoulesPerKg {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MegajoulesPerKg {
    /// Create a new calorific value
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MegajoulesPerKg(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Derate for the mass share that is water: `value × (1 - moisture)`
    #[inline]
    #[must_use]
    pub fn derated(self, moisture: Fraction) -> MegajoulesPerKg {
        MegajoulesPerKg(self.0 * moisture.complement())
    }
}

impl From<f64> for MegajoulesPerKg {
    fn from(v: f64) -> Self {
        MegajoulesPerKg(v)
    }
}

impl From<MegajoulesPerKg> for f64 {
    fn from(v: MegajoulesPerKg) -> f64 {
        v.0
    }
}

// Cross-type operation: t × MJ/kg = MJ (1000 kg per tonne)
impl Mul<MegajoulesPerKg> for Tonnes {
    type Output = Megajoules;
    fn mul(self, rhs: MegajoulesPerKg) -> Megajoules {
        Megajoules(self.0 * rhs.0 * KG_PER_TONNE)
    }
}

impl fmt::Display for MegajoulesPerKg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} MJ/kg", self.0)
    }
}

/// Energy in megajoules
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Megajoules(f64);

impl Deref for Megajoules {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Megajoules {
    /// Create a new energy value
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Megajoules(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to megawatt-hours (3600 MJ per MWh)
    #[inline]
    #[must_use]
    pub fn to_megawatt_hours(self) -> MegawattHours {
        MegawattHours(self.0 / MJ_PER_MWH)
    }
}

// Conversion efficiency applied to a heat release
impl Mul<f64> for Megajoules {
    type Output = Megajoules;
    fn mul(self, rhs: f64) -> Megajoules {
        Megajoules(self.0 * rhs)
    }
}

/// Electrical energy in megawatt-hours
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MegawattHours(f64);

impl Eq for MegawattHours {}

impl PartialOrd for MegawattHours {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MegawattHours {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for MegawattHours {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MegawattHours {
    /// Create a new energy value
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MegawattHours(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for MegawattHours {
    fn from(v: f64) -> Self {
        MegawattHours(v)
    }
}

impl From<MegawattHours> for f64 {
    fn from(e: MegawattHours) -> f64 {
        e.0
    }
}

// Energy yield per tonne of feedstock: MWh / t = MWh/t
impl Div<Tonnes> for MegawattHours {
    type Output = f64;
    fn div(self, rhs: Tonnes) -> f64 {
        self.0 / rhs.0
    }
}

impl fmt::Display for MegawattHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} MWh", self.0)
    }
}

// ============================================================================
// EMISSION FACTOR TYPE
// ============================================================================

/// CO2 released per tonne of biomass burned (tCO2/t)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct TonnesCo2PerTonne(f64);

impl Eq for TonnesCo2PerTonne {}

impl PartialOrd for TonnesCo2PerTonne {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TonnesCo2PerTonne {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for TonnesCo2PerTonne {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl TonnesCo2PerTonne {
    /// Create a new emission factor
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        TonnesCo2PerTonne(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for TonnesCo2PerTonne {
    fn from(v: f64) -> Self {
        TonnesCo2PerTonne(v)
    }
}

impl From<TonnesCo2PerTonne> for f64 {
    fn from(v: TonnesCo2PerTonne) -> f64 {
        v.0
    }
}

// Cross-type operation: t × tCO2/t = tCO2
impl Mul<TonnesCo2PerTonne> for Tonnes {
    type Output = TonnesCo2;
    fn mul(self, rhs: TonnesCo2PerTonne) -> TonnesCo2 {
        TonnesCo2(self.0 * rhs.0)
    }
}

impl fmt::Display for TonnesCo2PerTonne {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} tCO2/t", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_from_percent() {
        let f = Fraction::from_percent(85.0);
        assert!((f.value() - 0.85).abs() < 1e-12);
        assert!((f.as_percent() - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_fraction_is_not_clamped() {
        let f = Fraction::new(1.5);
        assert_eq!(f.value(), 1.5);
        assert!(!f.is_nominal());
        assert!((f.complement() + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_derated_calorific_value() {
        let cv = MegajoulesPerKg::new(18.0).derated(Fraction::new(0.1));
        assert!((cv.value() - 16.2).abs() < 1e-9);

        let dry = MegajoulesPerKg::new(18.0).derated(Fraction::ZERO);
        assert_eq!(dry.value(), 18.0);
    }

    #[test]
    fn test_tonnes_times_calorific_value_is_megajoules() {
        let mj = Tonnes::new(2.0) * MegajoulesPerKg::new(10.0);
        assert_eq!(mj.value(), 20_000.0);
        assert_eq!(mj.to_megawatt_hours().value(), 20_000.0 / 3600.0);
    }

    #[test]
    fn test_emission_algebra() {
        let emitted = Tonnes::new(50.0) * TonnesCo2PerTonne::new(1.76);
        assert!((emitted.value() - 88.0).abs() < 1e-9);
        let captured = emitted * Fraction::ONE;
        assert_eq!(captured, emitted);
    }

    #[test]
    fn test_total_ordering_handles_nan() {
        let a = Tonnes::new(1.0);
        let nan = Tonnes::new(f64::NAN);
        assert_eq!(a.cmp(&nan), Ordering::Less);
        assert_eq!(a.max(Tonnes::new(3.0)), Tonnes::new(3.0));
    }

    #[test]
    fn test_display_units() {
        assert_eq!(Tonnes::new(50.0).to_string(), "50.00 t");
        assert_eq!(MegawattHours::new(67.5).to_string(), "67.50 MWh");
        assert_eq!(TonnesCo2PerTonne::new(1.76).to_string(), "1.76 tCO2/t");
    }

    #[test]
    fn test_newtypes_serialize_as_bare_numbers() {
        let json = serde_json::to_string(&Tonnes::new(12.5)).unwrap();
        assert_eq!(json, "12.5");
        let back: Fraction = serde_json::from_str("0.85").unwrap();
        assert_eq!(back.value(), 0.85);
    }
}
