//! Core types and utilities

pub mod biomass;
pub mod units;

pub use biomass::BiomassPreset;
pub use units::*;
