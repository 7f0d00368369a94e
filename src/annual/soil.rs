//! Soil test values and reference ranges
//!
//! Values are exchangeable/available nutrient in mg per 100 g of soil.

use serde::{Deserialize, Serialize};

use crate::error::{check_scalar, PlanResult};
use crate::types::Nutrient;

/// Soil test results (mg/100g)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoilTest {
    pub p: f64,
    pub k: f64,
    pub ca: f64,
    pub mg: f64,
}

impl Default for SoilTest {
    /// Mid-range values used when no test is available
    fn default() -> Self {
        Self {
            p: 20.0,
            k: 20.0,
            ca: 300.0,
            mg: 30.0,
        }
    }
}

impl SoilTest {
    /// Test value for a nutrient; nitrogen is not soil-tested
    pub fn value(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::N => None,
            Nutrient::P => Some(self.p),
            Nutrient::K => Some(self.k),
            Nutrient::Ca => Some(self.ca),
            Nutrient::Mg => Some(self.mg),
        }
    }

    /// Reject negative or non-finite readings
    pub fn validate(&self) -> PlanResult<()> {
        check_scalar("soil_test.p", self.p, 0.0, f64::MAX)?;
        check_scalar("soil_test.k", self.k, 0.0, f64::MAX)?;
        check_scalar("soil_test.ca", self.ca, 0.0, f64::MAX)?;
        check_scalar("soil_test.mg", self.mg, 0.0, f64::MAX)?;
        Ok(())
    }
}

/// Reference (adequate) range for a soil-tested nutrient (mg/100g)
pub fn reference_range(nutrient: Nutrient) -> Option<(f64, f64)> {
    match nutrient {
        Nutrient::N => None,
        Nutrient::P => Some((10.0, 30.0)),
        Nutrient::K => Some((15.0, 25.0)),
        Nutrient::Ca => Some((200.0, 400.0)),
        Nutrient::Mg => Some((20.0, 40.0)),
    }
}

/// Soil test reading against its reference range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilStatus {
    /// Below the reference minimum; carries the relative deficit in (0, 1]
    Deficient { deficit: f64 },
    Adequate,
    Surplus,
}

impl SoilStatus {
    /// Classify `value` against `(min, max)`
    ///
    /// deficit = (min - value) / min
    pub fn classify(value: f64, (min, max): (f64, f64)) -> Self {
        if value < min {
            SoilStatus::Deficient {
                deficit: (min - value) / min,
            }
        } else if value > max {
            SoilStatus::Surplus
        } else {
            SoilStatus::Adequate
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            SoilStatus::Deficient { .. } => "below the reference minimum",
            SoilStatus::Adequate => "within the reference range",
            SoilStatus::Surplus => "above the reference maximum",
        }
    }
}
