//! Seasonal Strategy Tables
//!
//! Base 12-month weighting curves per (grass family, usage). These encode the
//! management strategy (build reserves in spring, hold back in summer), not
//! the turf's physiology; growth potential is layered on top by the engine.
//!
//! Two profiles are embedded:
//! - `Intensified` (default): strong spring front-loading, aiming to place
//!   most of the year's nitrogen before the summer stress period
//! - `Standard`: a milder curve with more weight left for autumn
//!
//! Management intensity scales the spring months (March-May) only.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::types::{
    DistributionStrategy, GrassFamily, ManagementIntensity, UsageContext, SPRING_MONTHS,
};

/// Which seasonal table to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalProfile {
    #[default]
    Intensified,
    Standard,
}

impl SeasonalProfile {
    pub fn display_name(&self) -> &'static str {
        match self {
            SeasonalProfile::Intensified => "Intensified spring",
            SeasonalProfile::Standard => "Standard",
        }
    }
}

struct SeasonalRow {
    family: GrassFamily,
    usage: UsageContext,
    factors: [f64; 12],
}

// ============================================================================
// EMBEDDED SEASONAL FACTORS (January first)
// ============================================================================

static INTENSIFIED: &[SeasonalRow] = &[
    SeasonalRow {
        family: GrassFamily::CoolSeason,
        usage: UsageContext::GolfCourse,
        factors: [0.15, 0.20, 1.6, 1.9, 1.7, 1.1, 0.30, 0.25, 0.60, 0.70, 0.25, 0.15],
    },
    SeasonalRow {
        family: GrassFamily::CoolSeason,
        usage: UsageContext::CompetitionField,
        factors: [0.15, 0.20, 1.5, 1.8, 1.6, 1.0, 0.35, 0.30, 0.65, 0.75, 0.30, 0.20],
    },
    SeasonalRow {
        family: GrassFamily::WarmSeason,
        usage: UsageContext::GolfCourse,
        factors: [0.20, 0.30, 1.4, 1.7, 1.5, 0.9, 0.25, 0.20, 0.55, 0.65, 0.30, 0.25],
    },
    SeasonalRow {
        family: GrassFamily::WarmSeason,
        usage: UsageContext::CompetitionField,
        factors: [0.20, 0.30, 1.3, 1.6, 1.4, 1.0, 0.30, 0.25, 0.60, 0.70, 0.35, 0.30],
    },
    SeasonalRow {
        family: GrassFamily::JapaneseLawn,
        usage: UsageContext::GolfCourse,
        factors: [0.10, 0.15, 1.0, 1.5, 1.6, 1.4, 0.40, 0.35, 0.50, 0.60, 0.20, 0.15],
    },
    SeasonalRow {
        family: GrassFamily::Overseeded,
        usage: UsageContext::GolfCourse,
        factors: [0.15, 0.25, 1.5, 1.8, 1.6, 1.0, 0.30, 0.25, 0.65, 0.75, 0.30, 0.20],
    },
    SeasonalRow {
        family: GrassFamily::Overseeded,
        usage: UsageContext::CompetitionField,
        factors: [0.15, 0.25, 1.4, 1.7, 1.5, 1.1, 0.35, 0.30, 0.70, 0.80, 0.35, 0.25],
    },
];

static STANDARD: &[SeasonalRow] = &[
    SeasonalRow {
        family: GrassFamily::CoolSeason,
        usage: UsageContext::GolfCourse,
        factors: [0.2, 0.2, 1.3, 1.5, 1.4, 1.0, 0.4, 0.4, 0.8, 0.9, 0.3, 0.3],
    },
    SeasonalRow {
        family: GrassFamily::CoolSeason,
        usage: UsageContext::CompetitionField,
        factors: [0.2, 0.2, 1.2, 1.4, 1.3, 1.0, 0.5, 0.5, 0.9, 1.0, 0.4, 0.3],
    },
    SeasonalRow {
        family: GrassFamily::WarmSeason,
        usage: UsageContext::GolfCourse,
        factors: [0.3, 0.4, 1.1, 1.3, 1.2, 0.8, 0.3, 0.3, 0.7, 0.9, 0.5, 0.4],
    },
    SeasonalRow {
        family: GrassFamily::WarmSeason,
        usage: UsageContext::CompetitionField,
        factors: [0.3, 0.4, 1.0, 1.2, 1.1, 0.9, 0.4, 0.4, 0.8, 1.0, 0.6, 0.5],
    },
    SeasonalRow {
        family: GrassFamily::JapaneseLawn,
        usage: UsageContext::GolfCourse,
        factors: [0.1, 0.2, 0.8, 1.2, 1.4, 1.3, 0.5, 0.4, 0.6, 0.7, 0.3, 0.2],
    },
    SeasonalRow {
        family: GrassFamily::Overseeded,
        usage: UsageContext::GolfCourse,
        factors: [0.2, 0.3, 1.2, 1.4, 1.3, 0.9, 0.4, 0.4, 0.8, 0.9, 0.4, 0.3],
    },
    SeasonalRow {
        family: GrassFamily::Overseeded,
        usage: UsageContext::CompetitionField,
        factors: [0.2, 0.3, 1.1, 1.3, 1.2, 1.0, 0.5, 0.5, 0.9, 1.0, 0.5, 0.4],
    },
];

/// Base seasonal factors for a family and usage, before management intensity
pub fn base_seasonal_factors(
    family: GrassFamily,
    usage: UsageContext,
    profile: SeasonalProfile,
) -> PlanResult<[f64; 12]> {
    let table = match profile {
        SeasonalProfile::Intensified => INTENSIFIED,
        SeasonalProfile::Standard => STANDARD,
    };

    table
        .iter()
        .find(|row| row.family == family && row.usage == usage)
        .map(|row| row.factors)
        .ok_or_else(|| PlanError::MissingTableRow {
            table: "seasonal factor",
            key: format!(
                "{} / {} ({} profile)",
                family.display_name(),
                usage.display_name(),
                profile.display_name()
            ),
        })
}

/// Scale the spring peak (March-May) by management intensity
pub fn apply_management_intensity(
    factors: &[f64; 12],
    intensity: ManagementIntensity,
) -> [f64; 12] {
    let multiplier = intensity.spring_peak_multiplier();
    let mut adjusted = *factors;
    for m in SPRING_MONTHS {
        adjusted[m] *= multiplier;
    }
    adjusted
}

/// Seasonal weights ready for the distribution engine
///
/// Spring-weighted strategies read the table and apply management
/// intensity. Growth-potential-only and flat strategies carry no seasonal
/// shaping and never touch the table.
pub fn seasonal_weights(
    family: GrassFamily,
    usage: UsageContext,
    strategy: DistributionStrategy,
    intensity: ManagementIntensity,
    profile: SeasonalProfile,
) -> PlanResult<[f64; 12]> {
    match strategy {
        DistributionStrategy::SpringWeighted(_) => {
            let base = base_seasonal_factors(family, usage, profile)?;
            Ok(apply_management_intensity(&base, intensity))
        }
        DistributionStrategy::GrowthPotentialOnly | DistributionStrategy::Flat => Ok([1.0; 12]),
    }
}
