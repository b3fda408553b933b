//! Moist-Air Density from Temperature, Pressure and Humidity
//!
//! ## Physics Background
//!
//! ### Saturation Vapor Pressure
//!
//! The maximum water-vapor partial pressure air can hold before condensation
//! grows roughly exponentially with temperature. The Magnus approximation
//! (Bolton 1980 coefficients) is accurate to 0.1% between -30°C and 35°C:
//!
//! ```text
//! es(T) = 6.112 × exp(17.67 × T / (T + 243.5))     [hPa, T in °C]
//! ```
//!
//! The actual vapor pressure follows from relative humidity:
//!
//! ```text
//! e = es(T) × RH / 100
//! ```
//!
//! ### Moist-Air Density
//!
//! Moist air is treated as a mixture of two ideal gases. Dalton's law splits
//! station pressure into a dry-air part and a water-vapor part, and each
//! contributes its own ideal-gas density:
//!
//! ```text
//! P_dry = P − e
//! ρ     = P_dry / (R_d × T_k) + e / (R_v × T_k)
//!
//! R_d = 287.05  J/(kg·K)   dry air
//! R_v = 461.495 J/(kg·K)   water vapor
//! T_k = T + 273.15
//! ```
//!
//! Because R_v > R_d, water vapor is lighter than the dry air it displaces:
//! humid air is *less* dense than dry air at the same temperature and
//! pressure, which is why engines lose power on muggy days.
//!
//! ### Density Ratio
//!
//! Naturally-aspirated engine power scales approximately with intake air
//! density. Ratings are quoted at ISA sea level (1.225 kg/m³), so
//!
//! ```text
//! σ = ρ / 1.225
//! ```
//!
//! ## Why libm::exp?
//!
//! `libm` provides the same software implementation on every target, with or
//! without `std` or a hardware FPU. Two hosts fed the same reading produce
//! bit-identical densities.

use crate::{
    constants::physics::{
        ABSOLUTE_ZERO_CELSIUS, CELSIUS_TO_KELVIN, MAGNUS_A, MAGNUS_B_C, MAGNUS_BASE_HPA,
        PA_PER_HPA, R_DRY_AIR, R_WATER_VAPOR,
    },
    errors::{DomainError, DomainResult},
    traits::Validator,
    validators::{utils, HumidityValidator, PressureValidator, TemperatureValidator},
};

/// Saturation vapor pressure over water (hPa) via the Magnus approximation
///
/// Fails if `temperature_c` is not finite or is at/below the formula's pole
/// at -243.5°C.
pub fn saturation_vapor_pressure(temperature_c: f64) -> DomainResult<f64> {
    TemperatureValidator::default().validate(temperature_c)?;

    let exponent = (MAGNUS_A * temperature_c) / (temperature_c + MAGNUS_B_C);
    Ok(MAGNUS_BASE_HPA * libm::exp(exponent))
}

/// Actual water-vapor partial pressure (hPa) from temperature and relative humidity
///
/// Fails if humidity is outside [0, 100] or temperature is outside the
/// Magnus domain.
pub fn compute_vapor_pressure(temperature_c: f64, relative_humidity_pct: f64) -> DomainResult<f64> {
    HumidityValidator.validate(relative_humidity_pct)?;
    let es = saturation_vapor_pressure(temperature_c)?;
    Ok(es * (relative_humidity_pct / 100.0))
}

/// Density of moist air (kg/m³) from temperature, station pressure and vapor pressure
///
/// Fails if temperature is at or below absolute zero, pressure is not
/// positive, vapor pressure is negative, or vapor pressure exceeds total
/// pressure (which would make the dry-air partial pressure negative).
pub fn compute_air_density(
    temperature_c: f64,
    pressure_hpa: f64,
    vapor_pressure_hpa: f64,
) -> DomainResult<f64> {
    utils::check_above("temperature_c", temperature_c, ABSOLUTE_ZERO_CELSIUS)?;
    PressureValidator::default().validate(pressure_hpa)?;
    utils::check_at_least("vapor_pressure_hpa", vapor_pressure_hpa, 0.0)?;

    let temp_k = temperature_c + CELSIUS_TO_KELVIN;
    let pressure_pa = pressure_hpa * PA_PER_HPA;
    let vapor_pressure_pa = vapor_pressure_hpa * PA_PER_HPA;

    let dry_pressure_pa = pressure_pa - vapor_pressure_pa;
    if dry_pressure_pa < 0.0 {
        return Err(DomainError::InconsistentPressure {
            vapor_pressure_hpa,
            pressure_hpa,
        });
    }

    Ok(dry_pressure_pa / (R_DRY_AIR * temp_k) + vapor_pressure_pa / (R_WATER_VAPOR * temp_k))
}

/// Ratio of actual air density to a reference density (dimensionless)
pub fn density_ratio(air_density_kgm3: f64, reference_density_kgm3: f64) -> DomainResult<f64> {
    utils::check_at_least("air_density_kgm3", air_density_kgm3, 0.0)?;
    utils::check_above("standard_density_kgm3", reference_density_kgm3, 0.0)?;
    Ok(air_density_kgm3 / reference_density_kgm3)
}
