//! Synthetic Temperature Model
//!
//! Mean daily temperature as a sinusoid whose mean and swing are affine in
//! latitude:
//!
//! ```text
//! T(d) = T_mean(lat) + A(lat) * sin(2π (d - φ) / 365)
//! ```
//!
//! Calibrated on the Tokyo reference station (35.7°N): 15.0°C annual mean,
//! 10.4°C half-swing, warmest day 212. Each degree further north is 0.6°C
//! cooler on average with a 0.2°C wider swing.
//!
//! No weather data is involved; outputs are exact functions of (lat, day).

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::error::{check_scalar, PlanError, PlanResult};
use crate::types::{DAYS_PER_MONTH, DAYS_PER_YEAR};

/// Reference latitude of the calibration station
pub const REFERENCE_LATITUDE: f64 = 35.7;

/// Annual mean temperature at the reference latitude (°C)
pub const REFERENCE_MEAN_TEMP: f64 = 15.0;

/// Seasonal half-swing at the reference latitude (°C)
pub const REFERENCE_AMPLITUDE: f64 = 10.4;

/// Change in annual mean per degree of latitude (°C/deg)
pub const MEAN_LAPSE_PER_DEGREE: f64 = -0.6;

/// Change in half-swing per degree of latitude (°C/deg)
pub const AMPLITUDE_GAIN_PER_DEGREE: f64 = 0.2;

/// Phase offset (days); sin peaks at φ + 365/4 = day 212
pub const PHASE_DAY: f64 = 120.75;

/// Supported latitude band (degrees north)
pub const MIN_LATITUDE: f64 = 20.0;
pub const MAX_LATITUDE: f64 = 50.0;

/// Site latitude, validated against the supported band
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Latitude(f64);

impl Latitude {
    /// Create a latitude, rejecting values outside [20, 50] degrees
    pub fn new(degrees: f64) -> PlanResult<Self> {
        check_scalar("latitude", degrees, MIN_LATITUDE, MAX_LATITUDE).map(Self)
    }

    /// Tokyo, the calibration station
    pub fn reference() -> Self {
        Self(REFERENCE_LATITUDE)
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Annual mean temperature at this latitude (°C)
    pub fn mean_temperature(self) -> f64 {
        REFERENCE_MEAN_TEMP + MEAN_LAPSE_PER_DEGREE * (self.0 - REFERENCE_LATITUDE)
    }

    /// Seasonal half-swing at this latitude (°C)
    pub fn amplitude(self) -> f64 {
        REFERENCE_AMPLITUDE + AMPLITUDE_GAIN_PER_DEGREE * (self.0 - REFERENCE_LATITUDE)
    }
}

impl TryFrom<f64> for Latitude {
    type Error = PlanError;

    fn try_from(value: f64) -> PlanResult<Self> {
        Latitude::new(value)
    }
}

impl From<Latitude> for f64 {
    fn from(lat: Latitude) -> f64 {
        lat.0
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°N", self.0)
    }
}

/// Estimated mean temperature (°C) on `day` (1..=365)
pub fn daily_temperature(latitude: Latitude, day: usize) -> PlanResult<f64> {
    if !(1..=DAYS_PER_YEAR).contains(&day) {
        return Err(PlanError::out_of_range(
            "day_of_year",
            day as f64,
            1.0,
            DAYS_PER_YEAR as f64,
        ));
    }
    Ok(temperature_on_day(latitude, day))
}

/// Unchecked evaluation for days already known to be in range
pub(crate) fn temperature_on_day(latitude: Latitude, day: usize) -> f64 {
    let angle = 2.0 * PI * (day as f64 - PHASE_DAY) / DAYS_PER_YEAR as f64;
    latitude.mean_temperature() + latitude.amplitude() * angle.sin()
}

/// Average a per-day quantity into the 12 calendar months
pub(crate) fn monthly_average<F>(mut per_day: F) -> [f64; 12]
where
    F: FnMut(usize) -> f64,
{
    let mut monthly = [0.0; 12];
    let mut day = 1;
    for (month, &days) in DAYS_PER_MONTH.iter().enumerate() {
        let total: f64 = (day..day + days).map(&mut per_day).sum();
        monthly[month] = total / days as f64;
        day += days;
    }
    monthly
}

/// Mean temperature of each calendar month (°C), January first
pub fn monthly_mean_temperatures(latitude: Latitude) -> [f64; 12] {
    monthly_average(|day| temperature_on_day(latitude, day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_latitude_band() {
        assert!(Latitude::new(20.0).is_ok());
        assert!(Latitude::new(50.0).is_ok());

        let err = Latitude::new(55.0).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(Latitude::new(f64::NAN).is_err());
        assert!(Latitude::new(-35.0).is_err());
    }

    #[test]
    fn test_reference_latitude_coefficients() {
        let tokyo = Latitude::reference();
        assert_relative_eq!(tokyo.mean_temperature(), 15.0, epsilon = 1e-12);
        assert_relative_eq!(tokyo.amplitude(), 10.4, epsilon = 1e-12);

        // 10 degrees north: 6°C cooler, 2°C wider swing
        let north = Latitude::new(45.7).unwrap();
        assert_relative_eq!(north.mean_temperature(), 9.0, epsilon = 1e-9);
        assert_relative_eq!(north.amplitude(), 12.4, epsilon = 1e-9);
    }

    #[test]
    fn test_known_days() {
        let tokyo = Latitude::reference();

        // Peak: sin(π/2) at day 212 (φ + 91.25 = 212)
        assert_relative_eq!(daily_temperature(tokyo, 212).unwrap(), 25.4, epsilon = 1e-9);

        // Day 121 is 0.25 days past the zero crossing
        let expected = 15.0 + 10.4 * (2.0 * PI * 0.25 / 365.0).sin();
        assert_relative_eq!(daily_temperature(tokyo, 121).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_warmest_day_is_212() {
        let tokyo = Latitude::reference();
        let warmest = (1..=365)
            .max_by(|&a, &b| {
                temperature_on_day(tokyo, a)
                    .partial_cmp(&temperature_on_day(tokyo, b))
                    .unwrap()
            })
            .unwrap();
        assert_eq!(warmest, 212);
    }

    #[test]
    fn test_day_out_of_range() {
        let tokyo = Latitude::reference();
        assert!(daily_temperature(tokyo, 0).is_err());
        assert!(daily_temperature(tokyo, 366).is_err());
        assert!(daily_temperature(tokyo, 365).is_ok());
    }

    #[test]
    fn test_monthly_means_shape() {
        let temps = monthly_mean_temperatures(Latitude::reference());

        // July/August warmest, January/February coldest
        let max_month = (0..12).max_by(|&a, &b| temps[a].partial_cmp(&temps[b]).unwrap()).unwrap();
        let min_month = (0..12).min_by(|&a, &b| temps[a].partial_cmp(&temps[b]).unwrap()).unwrap();
        assert!(max_month == 6 || max_month == 7);
        assert!(min_month == 0 || min_month == 1);

        // Annual mean is recovered from the daily curve
        let annual: f64 = (1..=365).map(|d| temperature_on_day(Latitude::reference(), d)).sum::<f64>() / 365.0;
        assert_relative_eq!(annual, 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_higher_latitude_is_colder() {
        let south = monthly_mean_temperatures(Latitude::new(26.0).unwrap());
        let north = monthly_mean_temperatures(Latitude::new(43.0).unwrap());
        for month in 0..12 {
            assert!(north[month] < south[month]);
        }
    }

    #[test]
    fn test_latitude_serde_validates() {
        let lat: Latitude = serde_json::from_str("35.7").unwrap();
        assert_relative_eq!(lat.degrees(), 35.7);
        assert!(serde_json::from_str::<Latitude>("80.0").is_err());
    }
}
