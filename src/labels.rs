//! Option label mapping
//!
//! The planning form offers its options as Japanese labels. This module is
//! the only place that reads them; everything past it works on typed enums.
//!
//! Every parser also accepts the snake_case variant name used in JSON
//! requests (e.g. `cool_golf_green`, `growth_potential_only`).

use serde::de::DeserializeOwned;

use crate::error::{PlanError, PlanResult};
use crate::types::{
    DistributionStrategy, FertilizerStance, GrassType, GrowthRegulatorLevel, ManagementIntensity,
    SpringStrength, UsageContext,
};

/// Trim and fold ASCII parentheses into the full-width form used by the form
fn normalize(label: &str) -> String {
    label.trim().replace('(', "（").replace(')', "）")
}

/// Parse a snake_case variant name through the type's serde representation
fn parse_variant_name<T: DeserializeOwned>(label: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(label.to_string())).ok()
}

fn unknown(kind: &'static str, label: &str) -> PlanError {
    PlanError::UnknownLabel {
        kind,
        label: label.to_string(),
    }
}

pub fn parse_grass_type(label: &str) -> PlanResult<GrassType> {
    let normalized = normalize(label);
    let grass = match normalized.as_str() {
        "寒地型（競技場）" => GrassType::CoolCompetitionField,
        "寒地型（ゴルフグリーン）" => GrassType::CoolGolfGreen,
        "暖地型（競技場）" => GrassType::WarmCompetitionField,
        "暖地型（暖地芝グリーン）" => GrassType::WarmGolfGreen,
        "暖地型（フェアウェイ）" => GrassType::WarmFairway,
        "日本芝（フェアウェイ）" => GrassType::JapaneseFairway,
        "日本芝（ゾイシアグリーン）" => GrassType::JapaneseZoysiaGreen,
        "WOS（季節で寒地型／暖地型が優勢）" | "WOS" => GrassType::WinterOverseeded,
        other => return parse_variant_name(other).ok_or_else(|| unknown("grass type", label)),
    };
    Ok(grass)
}

pub fn parse_usage(label: &str) -> PlanResult<UsageContext> {
    match label.trim() {
        "競技場" => Ok(UsageContext::CompetitionField),
        "ゴルフ場" => Ok(UsageContext::GolfCourse),
        other => parse_variant_name(other).ok_or_else(|| unknown("usage", label)),
    }
}

pub fn parse_management(label: &str) -> PlanResult<ManagementIntensity> {
    match label.trim() {
        "低" => Ok(ManagementIntensity::Low),
        "中" => Ok(ManagementIntensity::Medium),
        "高" => Ok(ManagementIntensity::High),
        other => parse_variant_name(other).ok_or_else(|| unknown("management intensity", label)),
    }
}

pub fn parse_stance(label: &str) -> PlanResult<FertilizerStance> {
    match label.trim() {
        "下限寄り" => Ok(FertilizerStance::Lower),
        "中央" => Ok(FertilizerStance::Center),
        "上限寄り" => Ok(FertilizerStance::Upper),
        other => parse_variant_name(other).ok_or_else(|| unknown("fertilizer stance", label)),
    }
}

/// Distribution strategy labels
///
/// Bare "春重点" (spring-weighted without a strength) is an older form
/// label and maps to the 50% strength.
pub fn parse_strategy(label: &str) -> PlanResult<DistributionStrategy> {
    let strategy = match label.trim() {
        "春重点70" | "spring_weighted_70" => {
            DistributionStrategy::SpringWeighted(SpringStrength::Percent70)
        }
        "春重点50" | "spring_weighted_50" => {
            DistributionStrategy::SpringWeighted(SpringStrength::Percent50)
        }
        "春重点30" | "spring_weighted_30" => {
            DistributionStrategy::SpringWeighted(SpringStrength::Percent30)
        }
        "春重点" | "spring_weighted" => {
            tracing::warn!("Strategy label '{}' has no strength; using 50%", label.trim());
            DistributionStrategy::SpringWeighted(SpringStrength::Percent50)
        }
        "GP準拠" => DistributionStrategy::GrowthPotentialOnly,
        "平準" => DistributionStrategy::Flat,
        other => return parse_variant_name(other).ok_or_else(|| unknown("distribution strategy", label)),
    };
    Ok(strategy)
}

pub fn parse_growth_regulator(label: &str) -> PlanResult<GrowthRegulatorLevel> {
    match label.trim() {
        "なし" => Ok(GrowthRegulatorLevel::None),
        "弱" => Ok(GrowthRegulatorLevel::Light),
        "中" => Ok(GrowthRegulatorLevel::Moderate),
        "強" => Ok(GrowthRegulatorLevel::Strong),
        other => parse_variant_name(other).ok_or_else(|| unknown("growth regulator", label)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grass_type_labels() {
        assert_eq!(parse_grass_type("寒地型（ゴルフグリーン）").unwrap(), GrassType::CoolGolfGreen);
        assert_eq!(parse_grass_type("暖地型（暖地芝グリーン）").unwrap(), GrassType::WarmGolfGreen);
        assert_eq!(
            parse_grass_type("WOS（季節で寒地型／暖地型が優勢）").unwrap(),
            GrassType::WinterOverseeded
        );
        // ASCII parentheses and surrounding whitespace
        assert_eq!(parse_grass_type(" 日本芝(フェアウェイ) ").unwrap(), GrassType::JapaneseFairway);
        assert_eq!(parse_grass_type("warm_fairway").unwrap(), GrassType::WarmFairway);
    }

    #[test]
    fn test_unknown_labels() {
        let err = parse_grass_type("苔").unwrap_err();
        assert!(err.is_lookup_failure());
        assert_eq!(
            err,
            PlanError::UnknownLabel {
                kind: "grass type",
                label: "苔".to_string()
            }
        );
        assert!(parse_usage("park").is_err());
        assert!(parse_strategy("autumn").is_err());
    }

    #[test]
    fn test_same_label_different_kinds() {
        // "中" is medium intensity and moderate PGR
        assert_eq!(parse_management("中").unwrap(), ManagementIntensity::Medium);
        assert_eq!(parse_growth_regulator("中").unwrap(), GrowthRegulatorLevel::Moderate);
    }

    #[test]
    fn test_strategy_labels() {
        assert_eq!(
            parse_strategy("春重点70").unwrap(),
            DistributionStrategy::SpringWeighted(SpringStrength::Percent70)
        );
        assert_eq!(parse_strategy("春重点").unwrap(), DistributionStrategy::default());
        assert_eq!(parse_strategy("GP準拠").unwrap(), DistributionStrategy::GrowthPotentialOnly);
        assert_eq!(parse_strategy("平準").unwrap(), DistributionStrategy::Flat);
        assert_eq!(parse_strategy("flat").unwrap(), DistributionStrategy::Flat);
    }

    #[test]
    fn test_english_names() {
        assert_eq!(parse_usage("golf_course").unwrap(), UsageContext::GolfCourse);
        assert_eq!(parse_management("high").unwrap(), ManagementIntensity::High);
        assert_eq!(parse_stance("upper").unwrap(), FertilizerStance::Upper);
        assert_eq!(parse_growth_regulator("strong").unwrap(), GrowthRegulatorLevel::Strong);
    }
}
