//! Derivation Engine
//!
//! Turns one [`EnvironmentalReading`] and a rated power into a complete
//! [`DerivedMetrics`] report. The pipeline is fixed and strictly sequential:
//!
//! ```text
//! reading ──► validate ──► vapor pressure ──► air density ──► density ratio
//!                                                                  │
//!   corrected = rated × σ × derating  ◄── pollution ◄── corrosion ◄┘
//!   loss      = rated − corrected
//! ```
//!
//! Any [`DomainError`](crate::DomainError) aborts the whole derivation; no
//! partial report is ever returned.
//!
//! ## Determinism
//!
//! The engine holds no mutable state and performs no I/O. Identical inputs
//! produce bit-identical reports, and a single engine can be shared across
//! threads (`DerivationEngine` is `Copy + Send + Sync`).
//!
//! ## Usage
//!
//! ```rust
//! use propulsion_core::{DerivationEngine, EngineConfig, EnvironmentalReading, WindDirection};
//! use propulsion_core::risk::PollutionBands;
//!
//! let reading = EnvironmentalReading {
//!     temperature_c: 35.0,
//!     pressure_hpa: 1000.0,
//!     relative_humidity_pct: 90.0,
//!     wind_speed_mph: 20.0,
//!     wind_direction: WindDirection::Onshore,
//!     distance_to_coast_km: 5.0,
//!     pm2_5_ugm3: 160.0,
//! };
//!
//! // Default thresholds
//! let metrics = propulsion_core::run(&reading, 300.0)?;
//! assert!(metrics.corrected_power < 300.0);
//!
//! // Tighter particulate bands for a dusty airstrip
//! let config = EngineConfig::default()
//!     .with_pollution(PollutionBands::default().with_edges(25.0, 75.0));
//! let engine = DerivationEngine::new(config)?;
//! let dusty = engine.run(&reading, 300.0)?;
//! assert_eq!(dusty.power_derating_factor, 0.95);
//! # Ok::<(), propulsion_core::DomainError>(())
//! ```

use crate::{
    constants::physics::STANDARD_AIR_DENSITY_KG_PER_M3,
    errors::DomainResult,
    psychrometrics::{
        compute_air_density, compute_vapor_pressure, density_ratio, saturation_vapor_pressure,
    },
    reading::EnvironmentalReading,
    risk::{CorrosionRisk, CorrosionThresholds, PollutionBands, PollutionLevel},
    traits::CrossValidator,
    validators::{utils, ReadingValidator},
};

/// Tunable parameters of the derivation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EngineConfig {
    /// Density at which the engine's rated power applies (kg/m³)
    pub standard_density_kgm3: f64,
    /// Saline corrosion scoring
    pub corrosion: CorrosionThresholds,
    /// Particulate bands and derating factors
    pub pollution: PollutionBands,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            standard_density_kgm3: STANDARD_AIR_DENSITY_KG_PER_M3,
            corrosion: CorrosionThresholds::default(),
            pollution: PollutionBands::default(),
        }
    }
}

impl EngineConfig {
    /// Override the reference density
    pub fn with_standard_density(mut self, density_kgm3: f64) -> Self {
        self.standard_density_kgm3 = density_kgm3;
        self
    }

    /// Override the corrosion scoring
    pub fn with_corrosion(mut self, corrosion: CorrosionThresholds) -> Self {
        self.corrosion = corrosion;
        self
    }

    /// Override the particulate bands
    pub fn with_pollution(mut self, pollution: PollutionBands) -> Self {
        self.pollution = pollution;
        self
    }

    /// Check every part of the configuration
    pub fn validate(&self) -> DomainResult<()> {
        utils::check_above("standard_density_kgm3", self.standard_density_kgm3, 0.0)?;
        self.corrosion.validate()?;
        self.pollution.validate()
    }
}

/// Everything derived from one reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedMetrics {
    /// Saturation vapor pressure at the ambient temperature (hPa)
    pub saturation_vapor_pressure_hpa: f64,
    /// Actual water-vapor partial pressure (hPa)
    pub vapor_pressure_hpa: f64,
    /// Moist-air density (kg/m³)
    pub air_density_kgm3: f64,
    /// Air density over the standard density (σ)
    pub density_ratio: f64,
    /// Saline corrosion level
    pub corrosion_risk: CorrosionRisk,
    /// Additive score behind `corrosion_risk`
    pub corrosion_score: u8,
    /// Particulate band
    pub pollution_level: PollutionLevel,
    /// Power factor from particulate fouling, in (0, 1]
    pub power_derating_factor: f64,
    /// Power at standard conditions (caller's unit)
    pub rated_power: f64,
    /// `rated_power × density_ratio × power_derating_factor`
    pub corrected_power: f64,
    /// `rated_power − corrected_power`
    pub power_loss: f64,
}

impl DerivedMetrics {
    /// Air density as a percentage of standard density
    pub fn density_percent_of_standard(&self) -> f64 {
        self.density_ratio * 100.0
    }

    /// Power loss as a percentage of rated power
    pub fn power_loss_percent(&self) -> f64 {
        self.power_loss / self.rated_power * 100.0
    }
}

/// Configured, stateless derivation engine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivationEngine {
    config: EngineConfig,
    validator: ReadingValidator,
}

impl DerivationEngine {
    /// Create an engine, rejecting unusable configurations
    pub fn new(config: EngineConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            validator: ReadingValidator::default(),
        })
    }

    /// Replace the reading validator (e.g. [`ReadingValidator::strict`])
    pub fn with_validator(mut self, validator: ReadingValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Active reading validator
    pub fn validator(&self) -> &ReadingValidator {
        &self.validator
    }

    /// Derive the full report for one reading
    ///
    /// `rated_power` is the engine's output at standard density, in any unit;
    /// corrected power and loss come back in the same unit. It must be
    /// finite and strictly positive.
    pub fn run(&self, reading: &EnvironmentalReading, rated_power: f64) -> DomainResult<DerivedMetrics> {
        let result = self.derive(reading, rated_power);
        if let Err(err) = &result {
            log_warn!("reading rejected: {}", err);
        }
        result
    }

    fn derive(&self, reading: &EnvironmentalReading, rated_power: f64) -> DomainResult<DerivedMetrics> {
        utils::check_above("rated_power", rated_power, 0.0)?;
        self.validator.cross_validate(*reading)?;

        let saturation = saturation_vapor_pressure(reading.temperature_c)?;
        let vapor = compute_vapor_pressure(reading.temperature_c, reading.relative_humidity_pct)?;
        let density = compute_air_density(reading.temperature_c, reading.pressure_hpa, vapor)?;
        let sigma = density_ratio(density, self.config.standard_density_kgm3)?;

        let corrosion = self.config.corrosion.assess(
            reading.distance_to_coast_km,
            reading.wind_direction,
            reading.wind_speed_mph,
        )?;
        let pollution = self.config.pollution.classify(reading.pm2_5_ugm3)?;

        let corrected_power = rated_power * sigma * pollution.derating_factor;
        let power_loss = rated_power - corrected_power;

        log_debug!(
            "rho={:.4} kg/m3 sigma={:.4} corrosion={:?}({}) pollution={:?} power {} -> {}",
            density,
            sigma,
            corrosion.risk,
            corrosion.score,
            pollution.level,
            rated_power,
            corrected_power
        );

        Ok(DerivedMetrics {
            saturation_vapor_pressure_hpa: saturation,
            vapor_pressure_hpa: vapor,
            air_density_kgm3: density,
            density_ratio: sigma,
            corrosion_risk: corrosion.risk,
            corrosion_score: corrosion.score,
            pollution_level: pollution.level,
            power_derating_factor: pollution.derating_factor,
            rated_power,
            corrected_power,
            power_loss,
        })
    }
}

/// Derive a report with the default configuration
pub fn run(reading: &EnvironmentalReading, rated_power: f64) -> DomainResult<DerivedMetrics> {
    DerivationEngine::default().run(reading, rated_power)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::DomainError, reading::WindDirection};

    fn standard_day() -> EnvironmentalReading {
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

    fn hot_humid_coast() -> EnvironmentalReading {
        EnvironmentalReading {
            temperature_c: 35.0,
            pressure_hpa: 1000.0,
            relative_humidity_pct: 90.0,
            wind_speed_mph: 20.0,
            wind_direction: WindDirection::Onshore,
            distance_to_coast_km: 5.0,
            pm2_5_ugm3: 160.0,
        }
    }

    #[test]
    fn standard_day_report() {
        let m = run(&standard_day(), 300.0).unwrap();

        // 25°C / 50% RH: σ ≈ 0.961
        assert!((m.density_ratio - 1.0).abs() < 0.05, "sigma = {}", m.density_ratio);
        assert!((m.air_density_kgm3 - 1.1769).abs() < 0.001, "rho = {}", m.air_density_kgm3);
        assert_eq!(m.corrosion_risk, CorrosionRisk::Low);
        assert_eq!(m.corrosion_score, 0);
        assert_eq!(m.pollution_level, PollutionLevel::Clean);
        assert_eq!(m.power_derating_factor, 1.0);
        assert!((m.corrected_power - 300.0).abs() < 15.0, "corrected = {}", m.corrected_power);
    }

    #[test]
    fn hot_humid_coast_report() {
        let m = run(&hot_humid_coast(), 300.0).unwrap();

        assert_eq!(m.corrosion_risk, CorrosionRisk::High);
        assert_eq!(m.corrosion_score, 5);
        assert_eq!(m.pollution_level, PollutionLevel::Critical);
        assert_eq!(m.power_derating_factor, 0.95);
        // σ ≈ 0.905, so 300 × 0.905 × 0.95 ≈ 258
        assert!((m.corrected_power - 258.0).abs() < 1.0, "corrected = {}", m.corrected_power);
        assert!(m.power_loss > 40.0);
    }

    #[test]
    fn loss_is_exact_difference() {
        let m = run(&hot_humid_coast(), 300.0).unwrap();
        assert_eq!(m.power_loss, m.rated_power - m.corrected_power);
        assert_eq!(
            m.corrected_power,
            m.rated_power * m.density_ratio * m.power_derating_factor
        );
    }

    #[test]
    fn rated_power_must_be_positive() {
        for bad in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let err = run(&standard_day(), bad).unwrap_err();
            assert_eq!(err.field(), Some("rated_power"));
        }
    }

    #[test]
    fn invalid_humidity_aborts() {
        let mut r = standard_day();
        r.relative_humidity_pct = 150.0;
        assert!(matches!(
            run(&r, 300.0),
            Err(DomainError::OutOfRange { field: "relative_humidity_pct", .. })
        ));
    }

    #[test]
    fn vapor_exceeding_pressure_aborts() {
        // Saturated 40°C air holds ~73.8 hPa of vapor
        let mut r = standard_day();
        r.temperature_c = 40.0;
        r.relative_humidity_pct = 100.0;
        r.pressure_hpa = 50.0;
        assert!(matches!(
            run(&r, 300.0),
            Err(DomainError::InconsistentPressure { .. })
        ));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let engine = DerivationEngine::default();
        let a = engine.run(&hot_humid_coast(), 180.0).unwrap();
        let b = engine.run(&hot_humid_coast(), 180.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn config_is_validated() {
        let bad = EngineConfig::default().with_standard_density(0.0);
        assert!(DerivationEngine::new(bad).is_err());

        let bad_bands = EngineConfig::default()
            .with_pollution(PollutionBands::default().with_factors(1.0, 1.2, 0.9));
        assert!(DerivationEngine::new(bad_bands).is_err());
    }

    #[test]
    fn custom_reference_density() {
        let engine = DerivationEngine::new(
            EngineConfig::default().with_standard_density(1.1769),
        )
        .unwrap();
        let m = engine.run(&standard_day(), 300.0).unwrap();
        assert!((m.density_ratio - 1.0).abs() < 0.001);
    }

    #[test]
    fn temperature_outside_surface_band_rejected() {
        for t in [-200.0, -120.0, 75.0, 90.0] {
            let mut r = standard_day();
            r.temperature_c = t;
            assert!(
                matches!(
                    run(&r, 300.0),
                    Err(DomainError::OutOfRange { field: "temperature_c", .. })
                ),
                "accepted {} °C",
                t
            );
        }
    }

    #[test]
    fn permissive_validator_accepts_lab_heat() {
        let mut r = standard_day();
        r.temperature_c = 80.0;
        let engine = DerivationEngine::default().with_validator(ReadingValidator::permissive());
        let m = engine.run(&r, 300.0).unwrap();
        assert!(m.corrected_power < 300.0);
    }

    #[test]
    fn percentages() {
        let m = run(&standard_day(), 300.0).unwrap();
        assert!((m.density_percent_of_standard() - 96.08).abs() < 0.1);
        assert!((m.power_loss_percent() - (100.0 - m.density_percent_of_standard())).abs() < 1e-9);
    }
}
