//! Climate-driven growth model
//!
//! Derives a synthetic temperature year from latitude and maps it onto a
//! per-family growth potential (GP) in [0, 1].
//!
//! ## Architecture
//! - `temperature.rs` - `Latitude` + sinusoidal daily/monthly temperature model
//! - `growth_potential.rs` - Piecewise-linear GP curves and monthly averaging

pub mod temperature;
pub mod growth_potential;

pub use temperature::{Latitude, daily_temperature, monthly_mean_temperatures};
pub use growth_potential::{
    GrowthPotentialProfile, growth_potential, monthly_growth_potential, normalize_gp_ratios,
};
