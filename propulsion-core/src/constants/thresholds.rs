//! Heuristic Classification Thresholds
//!
//! Default constants for the corrosion-risk score and the PM2.5 derating
//! bands. These are design constants of the heuristic, not values derived
//! from a physical model. They can be overridden per deployment through
//! [`CorrosionThresholds`](crate::risk::CorrosionThresholds) and
//! [`PollutionBands`](crate::risk::PollutionBands).

// ===== SALINE CORROSION SCORE =====

/// Distance to coastline below which sea-salt aerosol exposure counts (km).
///
/// Salt aerosol deposition falls off sharply within the first few kilometres
/// inland. Strictly less than this distance scores [`COASTAL_SCORE`].
pub const COASTAL_DISTANCE_KM: f64 = 10.0;

/// Points added when the site is within [`COASTAL_DISTANCE_KM`] of the coast.
pub const COASTAL_SCORE: u8 = 2;

/// Points added when the wind blows from sea to land.
pub const ONSHORE_SCORE: u8 = 2;

/// Wind speed above which spray is lifted and carried inland (mph).
///
/// Strictly greater than this speed scores [`HIGH_WIND_SCORE`].
pub const HIGH_WIND_MPH: f64 = 15.0;

/// Points added for wind above [`HIGH_WIND_MPH`].
pub const HIGH_WIND_SCORE: u8 = 1;

/// Minimum score classified as High corrosion risk.
pub const HIGH_RISK_SCORE: u8 = 4;

/// Minimum score classified as Moderate corrosion risk.
pub const MODERATE_RISK_SCORE: u8 = 2;

// ===== PARTICULATE FOULING BANDS =====

/// PM2.5 concentration above which intake fouling is Moderate (µg/m³).
///
/// Exactly 50 µg/m³ stays Clean.
///
/// Source: roughly the US EPA AQI "Unhealthy for Sensitive Groups" band edge
pub const PM25_MODERATE_ABOVE_UGM3: f64 = 50.0;

/// PM2.5 concentration above which intake fouling is Critical (µg/m³).
///
/// Exactly 150 µg/m³ stays Moderate.
///
/// Source: roughly the US EPA AQI "Unhealthy" band edge
pub const PM25_CRITICAL_ABOVE_UGM3: f64 = 150.0;

/// Power derating factor for clean air.
pub const CLEAN_DERATING: f64 = 1.0;

/// Power derating factor for moderate particulate loading (2% loss).
pub const MODERATE_DERATING: f64 = 0.98;

/// Power derating factor for critical particulate loading (5% loss).
pub const CRITICAL_DERATING: f64 = 0.95;
