//! Physical Constants for Air-Density Derivation
//!
//! Fundamental constants and unit conversions used by the psychrometric and
//! ideal-gas formulas. Values follow the meteorological conventions under
//! which the Magnus coefficients were fitted.

// ===== TEMPERATURE =====

/// Absolute zero in Celsius (°C).
///
/// Lower bound for the Kelvin conversion in the ideal-gas law.
/// No physical system can reach temperatures below this value.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Offset between Celsius and Kelvin scales (K).
///
/// T(K) = T(°C) + 273.15
///
/// Source: SI Brochure, 9th edition
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

// ===== MAGNUS / TETENS SATURATION VAPOR PRESSURE =====

/// Saturation vapor pressure at 0°C (hPa).
///
/// Leading coefficient of the Magnus approximation
/// `es = 6.112 × exp(17.67 × T / (T + 243.5))`.
///
/// Source: Bolton (1980), Monthly Weather Review 108
pub const MAGNUS_BASE_HPA: f64 = 6.112;

/// Magnus exponent numerator coefficient (dimensionless).
///
/// Source: Bolton (1980)
pub const MAGNUS_A: f64 = 17.67;

/// Magnus exponent denominator offset (°C).
///
/// The formula has a pole at `T = -243.5°C`; temperatures at or below it
/// are outside the approximation's domain.
///
/// Source: Bolton (1980)
pub const MAGNUS_B_C: f64 = 243.5;

// ===== GAS CONSTANTS =====

/// Specific gas constant for dry air (J/(kg·K)).
///
/// R_d = R / M_d with M_d = 28.9644 g/mol.
///
/// Source: U.S. Standard Atmosphere (1976)
pub const R_DRY_AIR: f64 = 287.05;

/// Specific gas constant for water vapor (J/(kg·K)).
///
/// R_v = R / M_w with M_w = 18.01528 g/mol.
///
/// Source: CRC Handbook of Chemistry and Physics
pub const R_WATER_VAPOR: f64 = 461.495;

// ===== REFERENCE ATMOSPHERE =====

/// Standard sea-level air density (kg/m³).
///
/// Density of dry air at 15°C and 1013.25 hPa. Engine power ratings are
/// quoted against this density, so the density ratio σ = ρ / 1.225.
///
/// Source: International Standard Atmosphere (ISA), ISO 2533:1975
pub const STANDARD_AIR_DENSITY_KG_PER_M3: f64 = 1.225;

/// Standard atmospheric pressure at sea level (hPa).
///
/// Source: International Standard Atmosphere (ISA)
pub const SEA_LEVEL_PRESSURE_HPA: f64 = 1013.25;

// ===== UNIT CONVERSIONS =====

/// Pascals per hectopascal.
pub const PA_PER_HPA: f64 = 100.0;

/// Miles per hour per metre per second (mph / (m/s)).
///
/// Weather providers report wind in m/s; the corrosion heuristic is
/// expressed in mph. 1 m/s = 2.23694 mph, rounded to 2.237.
pub const MPH_PER_MPS: f64 = 2.237;

// ===== EARTH-SURFACE PLAUSIBILITY =====

/// Coldest plausible surface air temperature (°C).
///
/// Lowest natural temperature recorded on Earth is -89.2°C (Vostok Station).
///
/// Source: World Meteorological Organization
pub const SURFACE_TEMP_MIN_C: f64 = -90.0;

/// Hottest plausible surface air temperature (°C).
///
/// Highest reliable record is 54.4°C (Death Valley); 60°C leaves headroom
/// for local heat sources.
///
/// Source: World Meteorological Organization
pub const SURFACE_TEMP_MAX_C: f64 = 60.0;

/// Highest plausible station pressure (hPa).
///
/// Siberian winter highs peak near 1084 hPa; anything above 1100 hPa
/// indicates a unit mix-up (kPa vs hPa, inHg).
///
/// Source: WMO records (Agata, Siberia: 1083.8 hPa)
pub const SURFACE_PRESSURE_MAX_HPA: f64 = 1100.0;
