//! Monthly Distribution
//!
//! Turns an annual nutrient total into twelve monthly amounts by combining
//! growth potential with a management-driven seasonal strategy.
//!
//! ## Architecture
//! - `seasonal.rs` - Seasonal strategy tables + management intensity scaling
//! - `gp_control.rs` - GP zones used as a limiter on monthly weights
//! - `growth_regulator.rs` - PGR suppression of nitrogen
//! - `engine.rs` - Ordered pipeline producing `MonthlyAllocation`

pub mod seasonal;
pub mod gp_control;
pub mod growth_regulator;
pub mod engine;

pub use seasonal::{apply_management_intensity, base_seasonal_factors, seasonal_weights, SeasonalProfile};
pub use gp_control::{gp_control_factor, GpZone};
pub use growth_regulator::pgr_suppression_factor;
pub use engine::{
    compute_monthly_allocation, trace_monthly_allocation, DistributionTrace, MonthlyAllocation,
};
