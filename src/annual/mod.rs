//! Annual Nutrient Totals (MLSN/SLAN bands)
//!
//! Decides how much of each nutrient to apply over the year, independent of
//! growth potential:
//!
//! 1. Nitrogen: pick a point inside the (MLSN, SLAN) band for the turf type,
//!    usage and management intensity, according to the fertilizer stance.
//! 2. P, K, Ca, Mg: derive a band from N via fixed ratios, then lean inside
//!    it according to the soil test.
//!
//! ## Architecture
//! - `n_ranges.rs` - Reference nitrogen bands per (grass type, usage, intensity)
//! - `soil.rs` - Soil test values and reference ranges
//! - `resolver.rs` - Band selection and soil-test adjustments

pub mod n_ranges;
pub mod soil;
pub mod resolver;

pub use n_ranges::{nitrogen_band, NitrogenRange};
pub use soil::{SoilStatus, SoilTest};
pub use resolver::{resolve_annual_totals, AnnualTotals, NutrientBand};
