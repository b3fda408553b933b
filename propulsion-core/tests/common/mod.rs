//! Shared fixtures for integration tests
//!
//! Two reference days with hand-checked outputs, plus a couple of helpers
//! for tolerance assertions.

#![allow(dead_code)]

use propulsion_core::{EnvironmentalReading, WindDirection};

/// Rated power used by the reference scenarios (hp)
pub const RATED_POWER: f64 = 300.0;

/// Warm, moderately humid inland day with clean air
///
/// Expected: ρ ≈ 1.1769 kg/m³, σ ≈ 0.9608, corrected ≈ 288.2 hp,
/// corrosion Low (score 0), pollution Clean.
pub fn standard_day() -> EnvironmentalReading {
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

/// Hot, saturated coastal day with an onshore gale and heavy smoke
///
/// Expected: es ≈ 56.31 hPa, e ≈ 50.68 hPa, ρ ≈ 1.1089 kg/m³,
/// σ ≈ 0.9052, corrected ≈ 258.0 hp, corrosion High (score 5),
/// pollution Critical (0.95).
pub fn hot_humid_coast() -> EnvironmentalReading {
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

/// Assert `actual` is within `tolerance` of `expected`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: expected {} ± {}, got {}",
        what,
        expected,
        tolerance,
        actual
    );
}
