//! Growth Potential (GP)
//!
//! Maps temperature to a [0, 1] growth-capacity score per grass family using
//! asymmetric piecewise-linear response curves:
//!
//! | Family       | GP = 0 below | GP = 1 at | GP = 0 from |
//! |--------------|--------------|-----------|-------------|
//! | Cool-season  | 0°C          | 20°C      | 35°C        |
//! | Warm-season  | 10°C         | 30°C      | 45°C        |
//!
//! Japanese lawns (zoysia/korai) follow the warm-season curve. Overseeded
//! turf blends both curves with a cool-season weight of 1 below 12°C, falling
//! linearly to 0 at 22°C.
//!
//! GP is a ceiling signal for how much nutrient the turf can use, not a
//! fertilizer quantity.

use serde::{Deserialize, Serialize};

use super::temperature::{monthly_average, temperature_on_day, Latitude};
use crate::types::GrassFamily;
use crate::utils::normalize_with_fallback;

/// Piecewise-linear response: rises over [zero_below, optimum], falls to
/// zero at `zero_above`
#[derive(Debug, Clone, Copy, PartialEq)]
struct ResponseCurve {
    zero_below: f64,
    optimum: f64,
    zero_above: f64,
}

impl ResponseCurve {
    fn evaluate(&self, temp: f64) -> f64 {
        let gp = if temp <= self.zero_below || temp >= self.zero_above {
            0.0
        } else if temp <= self.optimum {
            (temp - self.zero_below) / (self.optimum - self.zero_below)
        } else {
            (self.zero_above - temp) / (self.zero_above - self.optimum)
        };
        gp.clamp(0.0, 1.0)
    }
}

const COOL_SEASON: ResponseCurve = ResponseCurve {
    zero_below: 0.0,
    optimum: 20.0,
    zero_above: 35.0,
};

const WARM_SEASON: ResponseCurve = ResponseCurve {
    zero_below: 10.0,
    optimum: 30.0,
    zero_above: 45.0,
};

/// Overseeded crossover band: cool-season fully dominant at or below
const CROSSOVER_COOL_FULL: f64 = 12.0;
/// Overseeded crossover band: warm-season fully dominant at or above
const CROSSOVER_WARM_FULL: f64 = 22.0;

/// Cool-season GP at `temp` (°C)
pub fn cool_season_gp(temp: f64) -> f64 {
    COOL_SEASON.evaluate(temp)
}

/// Warm-season GP at `temp` (°C)
pub fn warm_season_gp(temp: f64) -> f64 {
    WARM_SEASON.evaluate(temp)
}

/// Cool-season share of the overseeded blend at `temp` (°C)
pub fn overseeded_cool_weight(temp: f64) -> f64 {
    if temp <= CROSSOVER_COOL_FULL {
        1.0
    } else if temp >= CROSSOVER_WARM_FULL {
        0.0
    } else {
        (CROSSOVER_WARM_FULL - temp) / (CROSSOVER_WARM_FULL - CROSSOVER_COOL_FULL)
    }
}

/// GP for a grass family at `temp` (°C)
pub fn growth_potential(family: GrassFamily, temp: f64) -> f64 {
    match family {
        GrassFamily::CoolSeason => cool_season_gp(temp),
        GrassFamily::WarmSeason | GrassFamily::JapaneseLawn => warm_season_gp(temp),
        GrassFamily::Overseeded => {
            let w = overseeded_cool_weight(temp);
            (w * cool_season_gp(temp) + (1.0 - w) * warm_season_gp(temp)).clamp(0.0, 1.0)
        }
    }
}

/// Monthly GP for a family at a latitude: daily GP averaged per calendar month
pub fn monthly_growth_potential(family: GrassFamily, latitude: Latitude) -> [f64; 12] {
    monthly_average(|day| growth_potential(family, temperature_on_day(latitude, day)))
}

/// Normalize monthly GP into ratios summing to 1
///
/// All-zero (or otherwise non-positive) input falls back to a uniform 1/12
/// split.
pub fn normalize_gp_ratios(gp_values: &[f64; 12]) -> [f64; 12] {
    let normalized = normalize_with_fallback(gp_values);
    if normalized.uniform_fallback {
        tracing::debug!("GP sum is zero; using uniform GP ratios");
    }
    normalized.ratios
}

/// Monthly GP for one site, with the component series for overseeded turf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthPotentialProfile {
    pub family: GrassFamily,
    /// GP used for planning
    pub main: [f64; 12],
    /// Cool-season component (cool-season and overseeded turf)
    pub cool: Option<[f64; 12]>,
    /// Warm-season component (warm-season and overseeded turf)
    pub warm: Option<[f64; 12]>,
}

impl GrowthPotentialProfile {
    pub fn compute(family: GrassFamily, latitude: Latitude) -> Self {
        let main = monthly_growth_potential(family, latitude);
        let (cool, warm) = match family {
            GrassFamily::CoolSeason => (Some(main), None),
            GrassFamily::WarmSeason => (None, Some(main)),
            GrassFamily::JapaneseLawn => (None, None),
            GrassFamily::Overseeded => (
                Some(monthly_growth_potential(GrassFamily::CoolSeason, latitude)),
                Some(monthly_growth_potential(GrassFamily::WarmSeason, latitude)),
            ),
        };

        Self { family, main, cool, warm }
    }

    /// Ratios of `main` summing to 1
    pub fn ratios(&self) -> [f64; 12] {
        normalize_gp_ratios(&self.main)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cool_season_boundaries() {
        assert_eq!(cool_season_gp(-5.0), 0.0);
        assert_eq!(cool_season_gp(0.0), 0.0);
        assert_relative_eq!(cool_season_gp(10.0), 0.5);
        assert_eq!(cool_season_gp(20.0), 1.0);
        assert_relative_eq!(cool_season_gp(27.5), 0.5);
        assert_eq!(cool_season_gp(35.0), 0.0);
        assert_eq!(cool_season_gp(40.0), 0.0);
    }

    #[test]
    fn test_warm_season_boundaries() {
        assert_eq!(warm_season_gp(10.0), 0.0);
        assert_relative_eq!(warm_season_gp(20.0), 0.5);
        assert_eq!(warm_season_gp(30.0), 1.0);
        assert_relative_eq!(warm_season_gp(37.5), 0.5);
        assert_eq!(warm_season_gp(45.0), 0.0);
    }

    #[test]
    fn test_japanese_lawn_uses_warm_curve() {
        for t in [5.0, 15.0, 25.0, 33.0] {
            assert_eq!(
                growth_potential(GrassFamily::JapaneseLawn, t),
                growth_potential(GrassFamily::WarmSeason, t)
            );
        }
    }

    #[test]
    fn test_overseeded_blend() {
        // Cold: pure cool-season
        assert_eq!(growth_potential(GrassFamily::Overseeded, 8.0), cool_season_gp(8.0));
        assert_eq!(growth_potential(GrassFamily::Overseeded, 12.0), cool_season_gp(12.0));

        // Hot: pure warm-season
        assert_eq!(growth_potential(GrassFamily::Overseeded, 22.0), warm_season_gp(22.0));
        assert_eq!(growth_potential(GrassFamily::Overseeded, 28.0), warm_season_gp(28.0));

        // Midpoint of the crossover band: equal mix
        // cool(17) = 0.85, warm(17) = 0.35
        assert_relative_eq!(overseeded_cool_weight(17.0), 0.5);
        assert_relative_eq!(growth_potential(GrassFamily::Overseeded, 17.0), 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_monthly_gp_in_unit_range() {
        for &family in GrassFamily::all() {
            for lat in [20.0, 35.7, 50.0] {
                let gp = monthly_growth_potential(family, Latitude::new(lat).unwrap());
                assert!(gp.iter().all(|&v| (0.0..=1.0).contains(&v)));
            }
        }
    }

    #[test]
    fn test_cool_season_tokyo_profile() {
        let gp = monthly_growth_potential(GrassFamily::CoolSeason, Latitude::reference());

        // Spring and autumn peaks with a summer dip
        assert!(gp[4] > gp[6]);
        assert!(gp[9] > gp[7]);
        assert!(gp[0] < 0.30);
        assert!(gp[4] >= 0.75);
    }

    #[test]
    fn test_warm_season_dormant_in_winter() {
        let gp = monthly_growth_potential(GrassFamily::WarmSeason, Latitude::reference());
        assert_eq!(gp[0], 0.0);
        assert_eq!(gp[11], 0.0);
        assert!(gp[6] > 0.7);
    }

    #[test]
    fn test_normalize_gp_ratios() {
        let mut gp = [0.0; 12];
        gp[0] = 1.0;
        gp[1] = 3.0;
        let ratios = normalize_gp_ratios(&gp);
        assert_relative_eq!(ratios[0], 0.25);
        assert_relative_eq!(ratios[1], 0.75);
        assert_relative_eq!(ratios.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_gp_ratios_zero_sum() {
        let ratios = normalize_gp_ratios(&[0.0; 12]);
        for r in ratios {
            assert_relative_eq!(r, 1.0 / 12.0);
        }
    }

    #[test]
    fn test_profile_components() {
        let tokyo = Latitude::reference();

        let overseeded = GrowthPotentialProfile::compute(GrassFamily::Overseeded, tokyo);
        assert!(overseeded.cool.is_some());
        assert!(overseeded.warm.is_some());

        let cool = GrowthPotentialProfile::compute(GrassFamily::CoolSeason, tokyo);
        assert_eq!(cool.cool, Some(cool.main));
        assert!(cool.warm.is_none());

        let japanese = GrowthPotentialProfile::compute(GrassFamily::JapaneseLawn, tokyo);
        assert!(japanese.cool.is_none() && japanese.warm.is_none());
    }
}
