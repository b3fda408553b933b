//! Whole-reading validation
//!
//! Applies the per-field validators to every numeric field of an
//! [`EnvironmentalReading`] in a fixed order, so the first reported error is
//! deterministic:
//!
//! 1. temperature
//! 2. pressure
//! 3. relative humidity
//! 4. wind speed, distance to coast, PM2.5 (all non-negative)
//!
//! Presets:
//!
//! - `default()`: every field within its physical domain. Temperature must
//!   lie in the Earth-surface band -90..=60 °C; pressure only needs to be
//!   positive, so high-altitude and unusual stations pass.
//! - `strict()`: additionally caps pressure at 1100 hPa to catch unit
//!   mix-ups.
//! - `permissive()`: temperature only needs to clear the Magnus pole
//!   (-243.5 °C). For bench and laboratory conditions.
//!
//! The pressure/vapor-pressure consistency check needs the derived vapor
//! pressure and therefore lives in
//! [`compute_air_density`](crate::psychrometrics::compute_air_density).

use crate::{
    errors::DomainResult,
    reading::EnvironmentalReading,
    traits::{CrossValidator, Validator},
};

use super::{utils, HumidityValidator, PressureValidator, TemperatureValidator};

/// Validator for a complete environmental reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingValidator {
    temperature: TemperatureValidator,
    pressure: PressureValidator,
    humidity: HumidityValidator,
}

impl Default for ReadingValidator {
    fn default() -> Self {
        Self {
            temperature: TemperatureValidator::strict(),
            pressure: PressureValidator::default(),
            humidity: HumidityValidator,
        }
    }
}

impl ReadingValidator {
    /// Default limits plus a 1100 hPa pressure ceiling
    pub fn strict() -> Self {
        Self {
            pressure: PressureValidator::strict(),
            ..Self::default()
        }
    }

    /// Temperature limited only by the Magnus pole
    pub fn permissive() -> Self {
        Self {
            temperature: TemperatureValidator::default(),
            ..Self::default()
        }
    }

    /// Replace the temperature limits
    pub fn new_with_temperature_limits(min_c: f64, max_c: f64) -> DomainResult<Self> {
        Ok(Self {
            temperature: TemperatureValidator::new_with_limits(min_c, max_c)?,
            ..Self::default()
        })
    }

    /// Replace the temperature validator
    pub fn with_temperature(mut self, temperature: TemperatureValidator) -> Self {
        self.temperature = temperature;
        self
    }

    /// Replace the pressure validator
    pub fn with_pressure(mut self, pressure: PressureValidator) -> Self {
        self.pressure = pressure;
        self
    }

    /// Temperature validator in use
    pub fn temperature(&self) -> &TemperatureValidator {
        &self.temperature
    }

    /// Pressure validator in use
    pub fn pressure(&self) -> &PressureValidator {
        &self.pressure
    }
}

impl CrossValidator for ReadingValidator {
    type Input = EnvironmentalReading;

    fn cross_validate(&self, reading: Self::Input) -> DomainResult<()> {
        self.temperature.validate(reading.temperature_c)?;
        self.pressure.validate(reading.pressure_hpa)?;
        self.humidity.validate(reading.relative_humidity_pct)?;
        utils::check_at_least("wind_speed_mph", reading.wind_speed_mph, 0.0)?;
        utils::check_at_least("distance_to_coast_km", reading.distance_to_coast_km, 0.0)?;
        utils::check_at_least("pm2_5_ugm3", reading.pm2_5_ugm3, 0.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::DomainError, reading::WindDirection};

    fn reading() -> EnvironmentalReading {
        EnvironmentalReading {
            temperature_c: 25.0,
            pressure_hpa: 1013.25,
            relative_humidity_pct: 50.0,
            wind_speed_mph: 10.0,
            wind_direction: WindDirection::Offshore,
            distance_to_coast_km: 50.0,
            pm2_5_ugm3: 20.0,
        }
    }

    #[test]
    fn accepts_valid_reading() {
        assert!(ReadingValidator::default().cross_validate(reading()).is_ok());
        assert!(ReadingValidator::strict().cross_validate(reading()).is_ok());
    }

    #[test]
    fn rejects_each_field() {
        let validator = ReadingValidator::default();
        let cases: [(fn(&mut EnvironmentalReading), &str); 6] = [
            (|r| r.temperature_c = f64::NAN, "temperature_c"),
            (|r| r.pressure_hpa = 0.0, "pressure_hpa"),
            (|r| r.relative_humidity_pct = 150.0, "relative_humidity_pct"),
            (|r| r.wind_speed_mph = -1.0, "wind_speed_mph"),
            (|r| r.distance_to_coast_km = f64::INFINITY, "distance_to_coast_km"),
            (|r| r.pm2_5_ugm3 = -0.5, "pm2_5_ugm3"),
        ];

        for (corrupt, field) in cases {
            let mut r = reading();
            corrupt(&mut r);
            let err = validator.cross_validate(r).unwrap_err();
            assert_eq!(err.field(), Some(field));
        }
    }

    #[test]
    fn first_error_is_deterministic() {
        let mut r = reading();
        r.relative_humidity_pct = 150.0;
        r.pressure_hpa = -1.0;
        assert!(matches!(
            ReadingValidator::default().cross_validate(r),
            Err(DomainError::BelowMinimum { field: "pressure_hpa", .. })
        ));
    }

    #[test]
    fn zero_boundaries_accepted() {
        let mut r = reading();
        r.wind_speed_mph = 0.0;
        r.distance_to_coast_km = 0.0;
        r.pm2_5_ugm3 = 0.0;
        r.relative_humidity_pct = 0.0;
        assert!(ReadingValidator::default().cross_validate(r).is_ok());
    }

    #[test]
    fn default_enforces_surface_temperature_band() {
        let validator = ReadingValidator::default();
        for t in [-200.0, -120.0, -90.01, 60.01, 75.0, 90.0] {
            let mut r = reading();
            r.temperature_c = t;
            assert!(
                matches!(
                    validator.cross_validate(r),
                    Err(DomainError::OutOfRange { field: "temperature_c", .. })
                ),
                "accepted {} °C",
                t
            );
        }
        for t in [-90.0, 60.0] {
            let mut r = reading();
            r.temperature_c = t;
            assert!(validator.cross_validate(r).is_ok());
        }
    }

    #[test]
    fn permissive_allows_lab_temperatures() {
        let mut r = reading();
        r.temperature_c = 75.0;
        assert!(ReadingValidator::permissive().cross_validate(r).is_ok());
        r.temperature_c = -243.5;
        assert!(ReadingValidator::permissive().cross_validate(r).is_err());
    }

    #[test]
    fn strict_caps_pressure() {
        let mut r = reading();
        r.pressure_hpa = 1200.0;
        assert!(ReadingValidator::default().cross_validate(r).is_ok());
        assert!(ReadingValidator::strict().cross_validate(r).is_err());
    }

    #[test]
    fn custom_temperature_limits() {
        let validator = ReadingValidator::new_with_temperature_limits(-20.0, 45.0).unwrap();
        let mut r = reading();
        r.temperature_c = 50.0;
        assert!(validator.cross_validate(r).is_err());
        assert!(ReadingValidator::new_with_temperature_limits(45.0, -20.0).is_err());
    }
}
