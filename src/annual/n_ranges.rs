//! Annual Nitrogen Reference Bands
//!
//! MLSN (minimum sustainable) and SLAN (sufficiency) nitrogen per year,
//! kg/ha, keyed by turf type x usage x management intensity.
//!
//! Only agronomically meaningful combinations are listed (a golf green is
//! never a competition field). Asking for any other combination is a lookup
//! failure, never a silent default.

use crate::error::{PlanError, PlanResult};
use crate::types::{GrassType, ManagementIntensity, UsageContext};

/// One row of the nitrogen reference table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NitrogenRange {
    pub grass_type: GrassType,
    pub usage: UsageContext,
    pub intensity: ManagementIntensity,
    /// Minimum sustainable level (kg/ha/yr)
    pub mlsn: f64,
    /// Sufficiency level (kg/ha/yr)
    pub slan: f64,
}

macro_rules! n_row {
    ($grass:ident, $usage:ident, $intensity:ident, $mlsn:expr, $slan:expr) => {
        NitrogenRange {
            grass_type: GrassType::$grass,
            usage: UsageContext::$usage,
            intensity: ManagementIntensity::$intensity,
            mlsn: $mlsn,
            slan: $slan,
        }
    };
}

// ============================================================================
// EMBEDDED NITROGEN BANDS (kg/ha/yr)
// ============================================================================

static NITROGEN_RANGES: &[NitrogenRange] = &[
    // Cool-season
    n_row!(CoolCompetitionField, CompetitionField, Low, 150.0, 250.0),
    n_row!(CoolCompetitionField, CompetitionField, Medium, 180.0, 300.0),
    n_row!(CoolCompetitionField, CompetitionField, High, 220.0, 350.0),
    n_row!(CoolGolfGreen, GolfCourse, Low, 180.0, 280.0),
    n_row!(CoolGolfGreen, GolfCourse, Medium, 200.0, 320.0),
    n_row!(CoolGolfGreen, GolfCourse, High, 240.0, 380.0),
    // Warm-season
    n_row!(WarmCompetitionField, CompetitionField, Low, 120.0, 220.0),
    n_row!(WarmCompetitionField, CompetitionField, Medium, 160.0, 280.0),
    n_row!(WarmCompetitionField, CompetitionField, High, 200.0, 320.0),
    n_row!(WarmGolfGreen, GolfCourse, Low, 140.0, 240.0),
    n_row!(WarmGolfGreen, GolfCourse, Medium, 180.0, 300.0),
    n_row!(WarmGolfGreen, GolfCourse, High, 220.0, 340.0),
    n_row!(WarmFairway, GolfCourse, Low, 100.0, 180.0),
    n_row!(WarmFairway, GolfCourse, Medium, 130.0, 220.0),
    n_row!(WarmFairway, GolfCourse, High, 160.0, 260.0),
    // Japanese lawn
    n_row!(JapaneseFairway, GolfCourse, Low, 80.0, 150.0),
    n_row!(JapaneseFairway, GolfCourse, Medium, 110.0, 180.0),
    n_row!(JapaneseFairway, GolfCourse, High, 140.0, 220.0),
    n_row!(JapaneseZoysiaGreen, GolfCourse, Low, 100.0, 180.0),
    n_row!(JapaneseZoysiaGreen, GolfCourse, Medium, 130.0, 210.0),
    n_row!(JapaneseZoysiaGreen, GolfCourse, High, 160.0, 240.0),
    // Winter overseeded
    n_row!(WinterOverseeded, CompetitionField, Low, 135.0, 230.0),
    n_row!(WinterOverseeded, CompetitionField, Medium, 180.0, 300.0),
    n_row!(WinterOverseeded, CompetitionField, High, 225.0, 360.0),
    n_row!(WinterOverseeded, GolfCourse, Low, 160.0, 260.0),
    n_row!(WinterOverseeded, GolfCourse, Medium, 200.0, 320.0),
    n_row!(WinterOverseeded, GolfCourse, High, 250.0, 400.0),
];

/// Look up the nitrogen band for a combination
pub fn nitrogen_band(
    grass_type: GrassType,
    usage: UsageContext,
    intensity: ManagementIntensity,
) -> PlanResult<&'static NitrogenRange> {
    NITROGEN_RANGES
        .iter()
        .find(|row| row.grass_type == grass_type && row.usage == usage && row.intensity == intensity)
        .ok_or_else(|| PlanError::MissingTableRow {
            table: "annual nitrogen range",
            key: format!(
                "{} / {} / {} intensity",
                grass_type.display_name(),
                usage.display_name(),
                intensity.display_name()
            ),
        })
}

/// All table rows
pub fn all_nitrogen_ranges() -> &'static [NitrogenRange] {
    NITROGEN_RANGES
}
