//! Domain Validators for Environmental Inputs
//!
//! ## Overview
//!
//! Every formula in the derivation engine has a domain outside which it
//! silently produces garbage: a negative vapor pressure, a density computed
//! from a temperature below absolute zero, a derating factor for a negative
//! particulate concentration. These validators enforce those domains up
//! front, so the engine either returns a complete, meaningful report or an
//! error naming the offending field.
//!
//! ## Validation Layers
//!
//! ### 1. Finiteness
//! NaN and infinities are rejected before any comparison.
//!
//! ### 2. Physical Domain
//! What [`ReadingValidator::default`] accepts:
//! ```text
//! temperature_c          in [-90, 60]   (Earth-surface air)
//! pressure_hpa           > 0            (ideal-gas law)
//! relative_humidity_pct  in [0, 100]
//! wind, distance, pm2.5  >= 0
//! ```
//!
//! ### 3. Presets
//! [`ReadingValidator::strict`] also caps pressure at 1100 hPa.
//! [`ReadingValidator::permissive`] widens temperature to the formula limit
//! (above the Magnus pole at -243.5°C), which is also what the standalone
//! psychrometric functions enforce.
//!
//! ### 4. Cross-Field Consistency
//! Vapor pressure must not exceed total pressure. This needs the derived
//! vapor pressure and is checked in
//! [`compute_air_density`](crate::psychrometrics::compute_air_density).
//!
//! ## Usage Example
//!
//! ```rust
//! use propulsion_core::validators::{HumidityValidator, ReadingValidator};
//! use propulsion_core::{CrossValidator, EnvironmentalReading, Validator, WindDirection};
//!
//! assert!(HumidityValidator.validate(60.0).is_ok());
//! assert!(HumidityValidator.validate(150.0).is_err());
//!
//! let reading = EnvironmentalReading {
//!     temperature_c: 18.0,
//!     pressure_hpa: 1008.0,
//!     relative_humidity_pct: 72.0,
//!     wind_speed_mph: 12.0,
//!     wind_direction: WindDirection::Onshore,
//!     distance_to_coast_km: 3.0,
//!     pm2_5_ugm3: 9.0,
//! };
//! ReadingValidator::strict().cross_validate(reading)?;
//! # Ok::<(), propulsion_core::DomainError>(())
//! ```

mod temperature;
mod humidity;
mod pressure;
mod reading;
pub(crate) mod utils;

pub use temperature::{TemperatureValidator, MAGNUS_POLE_C};
pub use humidity::HumidityValidator;
pub use pressure::PressureValidator;
pub use reading::ReadingValidator;
