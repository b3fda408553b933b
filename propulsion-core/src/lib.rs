//! Ambient-condition derivation engine
//!
//! Turns a single environmental reading (temperature, pressure, humidity,
//! wind, coastal proximity, particulates) into the metrics that decide how an
//! internal-combustion engine will behave on the day:
//!
//! - moist-air density and its ratio to ISA standard density
//! - corrected power for a given rated power
//! - saline corrosion risk
//! - particulate fouling level and its power derating
//!
//! Key constraints:
//! - Pure and deterministic: no I/O, no clocks, no shared state
//! - `no_std` capable (math via `libm`, no heap allocation)
//! - Out-of-domain input is rejected, never clamped
//!
//! ```rust
//! use propulsion_core::{run, CorrosionRisk, EnvironmentalReading, PollutionLevel, WindDirection};
//!
//! let reading = EnvironmentalReading {
//!     temperature_c: 25.0,
//!     pressure_hpa: 1013.25,
//!     relative_humidity_pct: 50.0,
//!     wind_speed_mph: 10.0,
//!     wind_direction: WindDirection::Offshore,
//!     distance_to_coast_km: 50.0,
//!     pm2_5_ugm3: 20.0,
//! };
//!
//! let metrics = run(&reading, 300.0)?;
//! assert_eq!(metrics.corrosion_risk, CorrosionRisk::Low);
//! assert_eq!(metrics.pollution_level, PollutionLevel::Clean);
//! assert!((metrics.corrected_power - 288.2).abs() < 0.5);
//! # Ok::<(), propulsion_core::DomainError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod constants;
pub mod engine;
pub mod errors;
pub mod psychrometrics;
pub mod reading;
pub mod risk;
pub mod traits;
pub mod validators;

// Public API
pub use engine::{run, DerivationEngine, DerivedMetrics, EngineConfig};
pub use errors::{DomainError, DomainResult};
pub use psychrometrics::{
    compute_air_density, compute_vapor_pressure, density_ratio, saturation_vapor_pressure,
};
pub use reading::{mps_to_mph, EnvironmentalReading, WindDirection};
pub use risk::{
    classify_corrosion_risk, classify_pollution_impact, CorrosionAssessment, CorrosionRisk,
    CorrosionThresholds, PollutionBands, PollutionImpact, PollutionLevel,
};
pub use traits::{CrossValidator, Validatable, Validator, ValidatorConstraints};
pub use validators::ReadingValidator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
