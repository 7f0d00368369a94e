//! Utility modules shared across the planning pipeline
//!
//! - Normalization: ratio normalization with uniform fallback
//! - Units: kg/ha <-> g/m² conversion

pub mod normalization;
pub mod units;

// Re-export commonly used functions
pub use normalization::{normalize_with_fallback, Normalized, UNIFORM_SHARE};
pub use units::{g_per_m2_to_kg_per_ha, kg_per_ha_to_g_per_m2};
