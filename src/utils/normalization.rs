//! Normalization Utilities
//!
//! Turns 12 non-negative monthly weights into ratios summing to 1.
//!
//! Algorithm:
//! 1. Clip every weight to >= 0 (NaN is treated as 0)
//! 2. Sum
//! 3. Divide each weight by the sum
//! 4. If the sum is 0, return a uniform 1/12 split and flag the fallback

use serde::{Deserialize, Serialize};

/// Share of one month in a uniform split
pub const UNIFORM_SHARE: f64 = 1.0 / 12.0;

/// Normalized monthly ratios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalized {
    pub ratios: [f64; 12],
    /// True when the weights summed to zero and a uniform split was used
    pub uniform_fallback: bool,
}

/// Normalize monthly weights, falling back to uniform on a zero sum
pub fn normalize_with_fallback(weights: &[f64; 12]) -> Normalized {
    let clipped = weights.map(|w| if w > 0.0 { w } else { 0.0 });
    let total: f64 = clipped.iter().sum();

    if total > 0.0 && total.is_finite() {
        Normalized {
            ratios: clipped.map(|w| w / total),
            uniform_fallback: false,
        }
    } else {
        Normalized {
            ratios: [UNIFORM_SHARE; 12],
            uniform_fallback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_sums_to_one() {
        let weights = [1.0, 2.0, 3.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let result = normalize_with_fallback(&weights);
        assert!(!result.uniform_fallback);
        assert_relative_eq!(result.ratios[3], 0.4);
        assert_relative_eq!(result.ratios.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_weights_clipped() {
        let mut weights = [1.0; 12];
        weights[0] = -5.0;
        let result = normalize_with_fallback(&weights);
        assert_eq!(result.ratios[0], 0.0);
        assert_relative_eq!(result.ratios[1], 1.0 / 11.0);
    }

    #[test]
    fn test_zero_sum_falls_back_to_uniform() {
        let result = normalize_with_fallback(&[0.0; 12]);
        assert!(result.uniform_fallback);
        assert!(result.ratios.iter().all(|&r| r == UNIFORM_SHARE));
    }

    #[test]
    fn test_nan_weight_treated_as_zero() {
        let mut weights = [0.0; 12];
        weights[5] = f64::NAN;
        weights[6] = 2.0;
        let result = normalize_with_fallback(&weights);
        assert_eq!(result.ratios[5], 0.0);
        assert_eq!(result.ratios[6], 1.0);
    }
}
