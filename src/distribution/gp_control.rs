//! Growth-Potential Control
//!
//! GP acts as a limiter on monthly weights, not as a quantity: months where
//! the turf cannot use nutrient are damped, and months of peak growth are
//! held back to avoid surge growth.
//!
//! | Zone    | GP range          | Factor |
//! |---------|-------------------|--------|
//! | Low     | GP < 0.30         | 0.4    |
//! | Optimal | 0.30 <= GP < 0.75 | 1.0    |
//! | Excess  | GP >= 0.75        | 0.7    |

use serde::{Deserialize, Serialize};

/// Lower edge of the optimal zone (inclusive)
pub const OPTIMAL_THRESHOLD: f64 = 0.30;
/// Lower edge of the excess zone (inclusive)
pub const EXCESS_THRESHOLD: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpZone {
    Low,
    Optimal,
    Excess,
}

impl GpZone {
    pub fn classify(gp: f64) -> Self {
        if gp < OPTIMAL_THRESHOLD {
            GpZone::Low
        } else if gp < EXCESS_THRESHOLD {
            GpZone::Optimal
        } else {
            GpZone::Excess
        }
    }

    pub fn control_factor(&self) -> f64 {
        match self {
            GpZone::Low => 0.4,
            GpZone::Optimal => 1.0,
            GpZone::Excess => 0.7,
        }
    }
}

/// Control factor for a raw GP value
pub fn gp_control_factor(gp: f64) -> f64 {
    GpZone::classify(gp).control_factor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(GpZone::classify(0.0), GpZone::Low);
        assert_eq!(GpZone::classify(0.2999), GpZone::Low);
        assert_eq!(GpZone::classify(0.30), GpZone::Optimal);
        assert_eq!(GpZone::classify(0.7499), GpZone::Optimal);
        assert_eq!(GpZone::classify(0.75), GpZone::Excess);
        assert_eq!(GpZone::classify(1.0), GpZone::Excess);
    }

    #[test]
    fn test_factors() {
        assert_eq!(gp_control_factor(0.1), 0.4);
        assert_eq!(gp_control_factor(0.5), 1.0);
        assert_eq!(gp_control_factor(0.9), 0.7);
    }
}
