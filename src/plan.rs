//! Annual fertilizer plan
//!
//! Wires the pipeline together for one site:
//!
//! ```text
//! latitude -> monthly temperature -> monthly GP -> GP ratios ─┐
//! grass/usage/intensity/stance/soil -> annual bands ──────────┼─> engine (per nutrient)
//! family/usage/strategy/intensity -> seasonal weights ────────┘
//! ```
//!
//! Each nutrient gets its own allocation; only nitrogen sees PGR
//! suppression.

use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::annual::{resolve_annual_totals, NutrientBand, SoilTest};
use crate::climate::{monthly_mean_temperatures, GrowthPotentialProfile, Latitude};
use crate::distribution::{compute_monthly_allocation, seasonal_weights, MonthlyAllocation, SeasonalProfile};
use crate::error::{PlanError, PlanResult};
use crate::types::{
    DistributionStrategy, FertilizerStance, GrassType, GrowthRegulatorLevel, ManagementIntensity,
    Nutrient, UsageContext,
};
use crate::utils::kg_per_ha_to_g_per_m2;

/// Everything needed to compute a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanRequest {
    pub grass_type: GrassType,
    pub usage: UsageContext,
    pub latitude: Latitude,
    pub intensity: ManagementIntensity,
    pub stance: FertilizerStance,
    pub strategy: DistributionStrategy,
    pub growth_regulator: GrowthRegulatorLevel,
    pub seasonal_profile: SeasonalProfile,
    pub soil_test: SoilTest,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            grass_type: GrassType::CoolGolfGreen,
            usage: UsageContext::GolfCourse,
            latitude: Latitude::reference(),
            intensity: ManagementIntensity::default(),
            stance: FertilizerStance::default(),
            strategy: DistributionStrategy::default(),
            growth_regulator: GrowthRegulatorLevel::default(),
            seasonal_profile: SeasonalProfile::default(),
            soil_test: SoilTest::default(),
        }
    }
}

impl PlanRequest {
    /// Load a request from a JSON file; missing fields take their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan request: {}", path.display()))?;
        let request: PlanRequest = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse plan request: {}", path.display()))?;
        Ok(request)
    }
}

/// Annual band and monthly allocation for one nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientPlan {
    pub band: NutrientBand,
    /// Monthly amounts in kg/ha
    pub allocation: MonthlyAllocation,
    pub pgr_applied: bool,
}

impl NutrientPlan {
    pub fn nutrient(&self) -> Nutrient {
        self.band.nutrient
    }

    pub fn monthly_g_per_m2(&self) -> [f64; 12] {
        self.allocation.amounts.map(kg_per_ha_to_g_per_m2)
    }

    pub fn annual_g_per_m2(&self) -> f64 {
        kg_per_ha_to_g_per_m2(self.band.annual)
    }
}

/// Full plan for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerPlan {
    pub request: PlanRequest,
    /// Mean temperature per month (°C)
    pub monthly_temperatures: [f64; 12],
    pub growth_potential: GrowthPotentialProfile,
    pub gp_ratios: [f64; 12],
    /// Seasonal weights after management intensity (flat for GP-only/flat)
    pub seasonal_weights: [f64; 12],
    pub nutrients: FxHashMap<Nutrient, NutrientPlan>,
}

impl FertilizerPlan {
    pub fn get(&self, nutrient: Nutrient) -> Option<&NutrientPlan> {
        self.nutrients.get(&nutrient)
    }

    /// Nutrient plans in report order (N, P, K, Ca, Mg)
    pub fn ordered(&self) -> impl Iterator<Item = &NutrientPlan> + '_ {
        Nutrient::ALL.iter().filter_map(move |n| self.nutrients.get(n))
    }
}

/// Compute the annual plan for a request
pub fn compute_plan(request: &PlanRequest) -> PlanResult<FertilizerPlan> {
    let family = request.grass_type.family();
    let latitude = request.latitude;

    let monthly_temperatures = monthly_mean_temperatures(latitude);
    let growth_potential = GrowthPotentialProfile::compute(family, latitude);
    let gp_ratios = growth_potential.ratios();

    let totals = resolve_annual_totals(
        request.grass_type,
        request.usage,
        request.intensity,
        request.stance,
        &request.soil_test,
    )?;

    let seasonal = seasonal_weights(
        family,
        request.usage,
        request.strategy,
        request.intensity,
        request.seasonal_profile,
    )?;

    let mut nutrients = FxHashMap::default();
    for nutrient in Nutrient::ALL {
        let band = totals.get(nutrient).cloned().ok_or_else(|| PlanError::MissingTableRow {
            table: "annual totals",
            key: nutrient.symbol().to_string(),
        })?;
        let pgr_applied = nutrient.is_growth_regulated();

        let allocation = compute_monthly_allocation(
            band.annual,
            &gp_ratios,
            &seasonal,
            request.strategy,
            &growth_potential.main,
            request.growth_regulator,
            pgr_applied,
        )?;

        nutrients.insert(
            nutrient,
            NutrientPlan {
                band,
                allocation,
                pgr_applied,
            },
        );
    }

    if let Some(n) = nutrients.get(&Nutrient::N) {
        tracing::info!(
            "Plan for {} at {}: N {:.1} g/m²/yr ({}, PGR {}, spring share {:.0}%, peak {})",
            request.grass_type.display_name(),
            latitude,
            kg_per_ha_to_g_per_m2(n.band.annual),
            request.strategy.display_name(),
            request.growth_regulator.display_name(),
            n.allocation.spring_share() * 100.0,
            n.allocation.peak_month_name(),
        );
    }

    Ok(FertilizerPlan {
        request: request.clone(),
        monthly_temperatures,
        growth_potential,
        gp_ratios,
        seasonal_weights: seasonal,
        nutrients,
    })
}
