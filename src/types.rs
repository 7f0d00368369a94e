//! Domain enums for fertilizer planning
//!
//! All option sets are closed, typed variants. Free-form UI labels are mapped
//! onto these in `labels.rs`; nothing below branches on strings.

use serde::{Deserialize, Serialize};

/// Days in each calendar month (non-leap year)
pub const DAYS_PER_MONTH: [usize; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in the modelled year
pub const DAYS_PER_YEAR: usize = 365;

/// Short month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Spring months (March-May) as 0-based indices
pub const SPRING_MONTHS: [usize; 3] = [2, 3, 4];

// ============================================================================
// Grass
// ============================================================================

/// Grass family: selects the growth-potential response and seasonal table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrassFamily {
    /// Bentgrass, bluegrass, ryegrass, fescue
    CoolSeason,
    /// Bermudagrass, paspalum
    WarmSeason,
    /// Zoysia / korai lawns
    JapaneseLawn,
    /// Warm-season base overseeded with cool-season grass for winter
    Overseeded,
}

impl GrassFamily {
    pub fn display_name(&self) -> &'static str {
        match self {
            GrassFamily::CoolSeason => "Cool-season",
            GrassFamily::WarmSeason => "Warm-season",
            GrassFamily::JapaneseLawn => "Japanese lawn",
            GrassFamily::Overseeded => "Overseeded (transitional)",
        }
    }

    pub fn all() -> &'static [GrassFamily] {
        &[
            GrassFamily::CoolSeason,
            GrassFamily::WarmSeason,
            GrassFamily::JapaneseLawn,
            GrassFamily::Overseeded,
        ]
    }
}

/// Concrete turf type as offered by the planning tool
///
/// Each type belongs to exactly one `GrassFamily`; the annual nitrogen
/// table is keyed on the type, the seasonal table on the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrassType {
    CoolCompetitionField,
    CoolGolfGreen,
    WarmCompetitionField,
    WarmGolfGreen,
    WarmFairway,
    JapaneseFairway,
    JapaneseZoysiaGreen,
    /// Winter overseeded: cool- or warm-season dominant depending on season
    WinterOverseeded,
}

impl GrassType {
    pub fn family(&self) -> GrassFamily {
        match self {
            GrassType::CoolCompetitionField | GrassType::CoolGolfGreen => GrassFamily::CoolSeason,
            GrassType::WarmCompetitionField
            | GrassType::WarmGolfGreen
            | GrassType::WarmFairway => GrassFamily::WarmSeason,
            GrassType::JapaneseFairway | GrassType::JapaneseZoysiaGreen => {
                GrassFamily::JapaneseLawn
            }
            GrassType::WinterOverseeded => GrassFamily::Overseeded,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GrassType::CoolCompetitionField => "Cool-season (competition field)",
            GrassType::CoolGolfGreen => "Cool-season (golf green)",
            GrassType::WarmCompetitionField => "Warm-season (competition field)",
            GrassType::WarmGolfGreen => "Warm-season (golf green)",
            GrassType::WarmFairway => "Warm-season (fairway)",
            GrassType::JapaneseFairway => "Japanese lawn (fairway)",
            GrassType::JapaneseZoysiaGreen => "Japanese lawn (zoysia green)",
            GrassType::WinterOverseeded => "Winter overseeded",
        }
    }

    pub fn all() -> &'static [GrassType] {
        &[
            GrassType::CoolCompetitionField,
            GrassType::CoolGolfGreen,
            GrassType::WarmCompetitionField,
            GrassType::WarmGolfGreen,
            GrassType::WarmFairway,
            GrassType::JapaneseFairway,
            GrassType::JapaneseZoysiaGreen,
            GrassType::WinterOverseeded,
        ]
    }
}

/// Usage context of the turf surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageContext {
    CompetitionField,
    /// Greens and fairways
    GolfCourse,
}

impl UsageContext {
    pub fn display_name(&self) -> &'static str {
        match self {
            UsageContext::CompetitionField => "Competition field",
            UsageContext::GolfCourse => "Golf course",
        }
    }
}

// ============================================================================
// Management choices
// ============================================================================

/// How hard the turf is pushed; ordered low < medium < high
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ManagementIntensity {
    Low,
    #[default]
    Medium,
    High,
}

impl ManagementIntensity {
    /// Multiplier applied to the spring (March-May) seasonal weights only
    ///
    /// High intensity front-loads the spring build-up; low intensity
    /// flattens the peak toward an even programme.
    pub fn spring_peak_multiplier(&self) -> f64 {
        match self {
            ManagementIntensity::Low => 0.6,
            ManagementIntensity::Medium => 0.85,
            ManagementIntensity::High => 1.1,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ManagementIntensity::Low => "Low",
            ManagementIntensity::Medium => "Medium",
            ManagementIntensity::High => "High",
        }
    }
}

/// Where to sit inside the MLSN..SLAN band for annual nitrogen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FertilizerStance {
    Lower,
    #[default]
    Center,
    Upper,
}

impl FertilizerStance {
    /// Fractional position inside the band (0 = floor, 1 = ceiling)
    pub fn position(&self) -> f64 {
        match self {
            FertilizerStance::Lower => 0.25,
            FertilizerStance::Center => 0.5,
            FertilizerStance::Upper => 0.75,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FertilizerStance::Lower => "toward lower bound",
            FertilizerStance::Center => "center",
            FertilizerStance::Upper => "toward upper bound",
        }
    }
}

/// Strength of spring front-loading for the spring-weighted strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringStrength {
    Percent30,
    #[default]
    Percent50,
    Percent70,
}

impl SpringStrength {
    /// Scale applied to each seasonal weight's deviation from 1.0
    ///
    /// 50% is the reference strength (1.0).
    pub fn deviation_scale(&self) -> f64 {
        match self {
            SpringStrength::Percent30 => 0.6,
            SpringStrength::Percent50 => 1.0,
            SpringStrength::Percent70 => 1.4,
        }
    }

    pub fn percent(&self) -> u8 {
        match self {
            SpringStrength::Percent30 => 30,
            SpringStrength::Percent50 => 50,
            SpringStrength::Percent70 => 70,
        }
    }
}

/// Monthly distribution strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionStrategy {
    /// Growth potential shaped by the seasonal table, spring front-loaded
    SpringWeighted(SpringStrength),
    /// Growth potential only, no seasonal shaping
    GrowthPotentialOnly,
    /// Even split before the growth-potential control clamp
    Flat,
}

impl Default for DistributionStrategy {
    fn default() -> Self {
        DistributionStrategy::SpringWeighted(SpringStrength::default())
    }
}

impl DistributionStrategy {
    pub fn display_name(&self) -> String {
        match self {
            DistributionStrategy::SpringWeighted(s) => format!("Spring-weighted {}%", s.percent()),
            DistributionStrategy::GrowthPotentialOnly => "Growth potential only".to_string(),
            DistributionStrategy::Flat => "Flat".to_string(),
        }
    }
}

/// Plant growth regulator programme; ordered none < light < moderate < strong
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GrowthRegulatorLevel {
    #[default]
    None,
    Light,
    Moderate,
    Strong,
}

impl GrowthRegulatorLevel {
    /// Base nitrogen suppression multiplier
    pub fn base_factor(&self) -> f64 {
        match self {
            GrowthRegulatorLevel::None => 1.0,
            GrowthRegulatorLevel::Light => 0.9,
            GrowthRegulatorLevel::Moderate => 0.75,
            GrowthRegulatorLevel::Strong => 0.6,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GrowthRegulatorLevel::None => "None",
            GrowthRegulatorLevel::Light => "Light",
            GrowthRegulatorLevel::Moderate => "Moderate",
            GrowthRegulatorLevel::Strong => "Strong",
        }
    }
}

// ============================================================================
// Nutrients
// ============================================================================

/// Planned nutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nutrient {
    N,
    P,
    K,
    Ca,
    Mg,
}

impl Nutrient {
    /// All nutrients in report order
    pub const ALL: [Nutrient; 5] = [Nutrient::N, Nutrient::P, Nutrient::K, Nutrient::Ca, Nutrient::Mg];

    pub fn symbol(&self) -> &'static str {
        match self {
            Nutrient::N => "N",
            Nutrient::P => "P",
            Nutrient::K => "K",
            Nutrient::Ca => "Ca",
            Nutrient::Mg => "Mg",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Nutrient::N => "Nitrogen",
            Nutrient::P => "Phosphate",
            Nutrient::K => "Potassium",
            Nutrient::Ca => "Calcium",
            Nutrient::Mg => "Magnesium",
        }
    }

    /// Only nitrogen uptake is curbed by growth regulators
    pub fn is_growth_regulated(&self) -> bool {
        matches!(self, Nutrient::N)
    }
}
