//! Monthly Distribution Engine
//!
//! Spreads an annual nutrient total over twelve months. Stages run in a
//! fixed order; the output of each feeds the next:
//!
//! 1. GP ratios (flat strategy: uniform 1/12)
//! 2. Seasonal weighting: `ratio × max(0, 1 + (w - 1) × strength)` for
//!    spring-weighted strategies, `ratio × 1` otherwise
//! 3. GP control clamp on the raw monthly GP (see `gp_control.rs`)
//! 4. PGR suppression, nitrogen only (see `growth_regulator.rs`)
//! 5. Clip negatives, normalize to 1 (uniform 1/12 if nothing is left)
//! 6. Multiply by the annual total
//!
//! The clamp in step 3 runs before PGR suppression; swapping them changes
//! results.

use serde::{Deserialize, Serialize};

use super::gp_control::gp_control_factor;
use super::growth_regulator::pgr_suppression_factor;
use crate::error::{check_monthly, check_scalar, PlanError, PlanResult};
use crate::types::{DistributionStrategy, GrowthRegulatorLevel, MONTH_NAMES, SPRING_MONTHS};
use crate::utils::{normalize_with_fallback, UNIFORM_SHARE};

/// Twelve monthly amounts for one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAllocation {
    /// Amount per month, January first (same unit as the annual total)
    pub amounts: [f64; 12],
    /// Share of the annual total per month (sums to 1)
    pub ratios: [f64; 12],
    /// True when every weight vanished and a uniform split was used
    pub used_uniform_fallback: bool,
}

impl MonthlyAllocation {
    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }

    /// Share of the year falling in the given months (0-based)
    pub fn share_of(&self, months: &[usize]) -> f64 {
        months.iter().filter_map(|&m| self.ratios.get(m)).sum()
    }

    /// Share of the year in March-May
    pub fn spring_share(&self) -> f64 {
        self.share_of(&SPRING_MONTHS)
    }

    /// Month (0-based) with the largest share; the earliest wins a tie
    pub fn peak_month(&self) -> usize {
        let mut peak = 0;
        for (m, &r) in self.ratios.iter().enumerate() {
            if r > self.ratios[peak] {
                peak = m;
            }
        }
        peak
    }

    pub fn peak_month_name(&self) -> &'static str {
        MONTH_NAMES[self.peak_month()]
    }
}

/// Weights after every stage, for inspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionTrace {
    /// Stage 1: GP ratios in use
    pub gp_ratios: [f64; 12],
    /// Stage 2: seasonal multipliers after strength scaling
    pub seasonal: [f64; 12],
    /// Stage 2: ratio × seasonal
    pub weighted: [f64; 12],
    /// Stage 3
    pub gp_controlled: [f64; 12],
    /// Stage 4 (equal to `gp_controlled` when PGR does not apply)
    pub pgr_adjusted: [f64; 12],
    /// Stages 5 and 6
    pub allocation: MonthlyAllocation,
}

/// Allocate `annual_total` over twelve months
///
/// # Arguments
/// * `annual_total` - finite, >= 0
/// * `gp_ratios` - 12 values in [0, 1], normally from `normalize_gp_ratios`
/// * `seasonal_weights` - 12 finite values >= 0, management intensity applied
/// * `strategy` - distribution strategy
/// * `gp_values` - 12 raw monthly GP values in [0, 1]
/// * `pgr_level` - growth regulator programme
/// * `applies_pgr` - true only for nitrogen
///
/// # Errors
/// Invalid-input `PlanError` for wrong lengths, non-finite or out-of-range
/// values, and when the weighted months overflow to a non-finite sum. A
/// zero weight sum is not an error.
pub fn compute_monthly_allocation(
    annual_total: f64,
    gp_ratios: &[f64],
    seasonal_weights: &[f64],
    strategy: DistributionStrategy,
    gp_values: &[f64],
    pgr_level: GrowthRegulatorLevel,
    applies_pgr: bool,
) -> PlanResult<MonthlyAllocation> {
    trace_monthly_allocation(
        annual_total,
        gp_ratios,
        seasonal_weights,
        strategy,
        gp_values,
        pgr_level,
        applies_pgr,
    )
    .map(|trace| trace.allocation)
}

/// Same as `compute_monthly_allocation`, keeping every intermediate stage
pub fn trace_monthly_allocation(
    annual_total: f64,
    gp_ratios: &[f64],
    seasonal_weights: &[f64],
    strategy: DistributionStrategy,
    gp_values: &[f64],
    pgr_level: GrowthRegulatorLevel,
    applies_pgr: bool,
) -> PlanResult<DistributionTrace> {
    let annual_total = check_scalar("annual_total", annual_total, 0.0, f64::MAX)?;
    let gp_ratios = check_monthly("gp_ratios", gp_ratios, 0.0, 1.0)?;
    let seasonal_weights = check_monthly("seasonal_weights", seasonal_weights, 0.0, f64::MAX)?;
    let gp_values = check_monthly("gp_values", gp_values, 0.0, 1.0)?;

    // Stage 1
    let gp_ratios = match strategy {
        DistributionStrategy::Flat => [UNIFORM_SHARE; 12],
        _ => gp_ratios,
    };

    // Stage 2
    let seasonal = match strategy {
        DistributionStrategy::SpringWeighted(strength) => {
            let scale = strength.deviation_scale();
            seasonal_weights.map(|w| (1.0 + (w - 1.0) * scale).max(0.0))
        }
        DistributionStrategy::GrowthPotentialOnly | DistributionStrategy::Flat => [1.0; 12],
    };
    let weighted: [f64; 12] = std::array::from_fn(|m| gp_ratios[m] * seasonal[m]);

    // Stage 3
    let gp_controlled: [f64; 12] =
        std::array::from_fn(|m| weighted[m] * gp_control_factor(gp_values[m]));

    // Stage 4
    let pgr_adjusted: [f64; 12] = if applies_pgr {
        std::array::from_fn(|m| gp_controlled[m] * pgr_suppression_factor(gp_values[m], pgr_level))
    } else {
        gp_controlled
    };

    if !pgr_adjusted.iter().sum::<f64>().is_finite() {
        return Err(PlanError::NonFinite {
            field: "monthly_weights",
            index: None,
        });
    }

    // Stages 5-6
    let normalized = normalize_with_fallback(&pgr_adjusted);
    if normalized.uniform_fallback {
        tracing::debug!(
            "All monthly weights vanished ({}); falling back to a uniform split",
            strategy.display_name()
        );
    }

    let allocation = MonthlyAllocation {
        amounts: normalized.ratios.map(|r| r * annual_total),
        ratios: normalized.ratios,
        used_uniform_fallback: normalized.uniform_fallback,
    };

    Ok(DistributionTrace {
        gp_ratios,
        seasonal,
        weighted,
        gp_controlled,
        pgr_adjusted,
        allocation,
    })
}
