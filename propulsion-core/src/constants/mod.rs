//! Constants for Propulsion Core
//!
//! Centralized, documented constants used by the derivation engine. All
//! numeric values are defined here with their source and rationale.
//!
//! ## Organization
//!
//! - **Physics**: Magnus coefficients, gas constants, reference density,
//!   unit conversions and Earth-surface plausibility limits
//! - **Thresholds**: Default corrosion-score and PM2.5 band constants
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Reference standards or literature where applicable
//! 3. Use descriptive names that include units

/// Physical constants and unit conversions.
pub mod physics;

/// Heuristic classification thresholds.
pub mod thresholds;

// Re-export commonly used constants for convenience
pub use physics::{
    ABSOLUTE_ZERO_CELSIUS, CELSIUS_TO_KELVIN, MAGNUS_B_C,
    R_DRY_AIR, R_WATER_VAPOR, STANDARD_AIR_DENSITY_KG_PER_M3,
    SEA_LEVEL_PRESSURE_HPA,
};

pub use thresholds::{
    COASTAL_DISTANCE_KM, HIGH_WIND_MPH,
    PM25_MODERATE_ABOVE_UGM3, PM25_CRITICAL_ABOVE_UGM3,
    CLEAN_DERATING, MODERATE_DERATING, CRITICAL_DERATING,
};
