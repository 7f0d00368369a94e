//! Plant growth regulator (PGR) suppression
//!
//! A PGR programme slows shoot growth, so nitrogen demand drops in months
//! where the turf would otherwise be growing. The effect scales with GP:
//!
//! - GP < 0.4: dormant enough that the PGR changes nothing (×1.0)
//! - 0.4 <= GP < 0.7: base suppression for the level
//! - GP >= 0.7: base suppression × 0.85
//!
//! Applies to nitrogen only, and only when a programme is in place.

use crate::types::GrowthRegulatorLevel;

/// GP at which suppression starts (inclusive)
pub const SUPPRESSION_START: f64 = 0.4;
/// GP at which the strong-growth penalty starts (inclusive)
pub const STRONG_GROWTH: f64 = 0.7;
/// Extra multiplier in strong-growth months
pub const STRONG_GROWTH_PENALTY: f64 = 0.85;

/// Suppression multiplier for one month
pub fn pgr_suppression_factor(gp: f64, level: GrowthRegulatorLevel) -> f64 {
    if level == GrowthRegulatorLevel::None || gp < SUPPRESSION_START {
        1.0
    } else if gp < STRONG_GROWTH {
        level.base_factor()
    } else {
        level.base_factor() * STRONG_GROWTH_PENALTY
    }
}
