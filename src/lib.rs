//! Turf Fertilizer Planner
//!
//! Annual fertilizer design for turf: how much N, P, K, Ca and Mg to apply
//! over a year, and how to spread it over twelve months.
//!
//! - `climate/`: Latitude-driven temperature year and growth potential (GP)
//! - `annual/`: MLSN/SLAN nitrogen bands, derived nutrients, soil-test adjustment
//! - `distribution/`: Seasonal strategy, GP control, PGR suppression, monthly engine
//! - `plan`: End-to-end plan for one site
//! - `labels`: Mapping of form option labels onto typed options
//!
//! Amounts are kg/ha internally; `utils::units` converts to g/m².

pub mod error;
pub mod types;
pub mod utils;
pub mod climate;
pub mod annual;
pub mod distribution;
pub mod labels;
pub mod plan;

// Re-export commonly used types
pub use error::{PlanError, PlanResult};
pub use types::{
    DistributionStrategy, FertilizerStance, GrassFamily, GrassType, GrowthRegulatorLevel,
    ManagementIntensity, Nutrient, SpringStrength, UsageContext,
};
pub use climate::{GrowthPotentialProfile, Latitude};
pub use annual::{resolve_annual_totals, AnnualTotals, NutrientBand, SoilTest};
pub use distribution::{
    compute_monthly_allocation, trace_monthly_allocation, DistributionTrace, MonthlyAllocation,
    SeasonalProfile,
};
pub use plan::{compute_plan, FertilizerPlan, NutrientPlan, PlanRequest};
