//! Environmental reading - the engine's only input
//!
//! An [`EnvironmentalReading`] is a fully-resolved snapshot of ambient
//! conditions at the engine's location. The acquisition side (weather and
//! air-quality providers, geocoding, manual entry) is responsible for filling
//! every field; the engine never substitutes defaults for missing values.
//!
//! ## Units
//!
//! | Field                   | Unit  | Domain           |
//! |-------------------------|-------|------------------|
//! | `temperature_c`         | °C    | > -243.5         |
//! | `pressure_hpa`          | hPa   | > 0              |
//! | `relative_humidity_pct` | %     | [0, 100]         |
//! | `wind_speed_mph`        | mph   | >= 0             |
//! | `distance_to_coast_km`  | km    | >= 0             |
//! | `pm2_5_ugm3`            | µg/m³ | >= 0             |
//!
//! ## Helpers for acquisition code
//!
//! Providers usually report wind as m/s plus a bearing in degrees. The
//! [`mps_to_mph`] conversion and [`WindDirection::from_bearing_deg`] cover
//! the common case. The bearing rule is a simplification for an east-facing
//! coastline and is never applied inside the engine: the engine takes the
//! categorical [`WindDirection`] as given.

use crate::{
    constants::physics::MPH_PER_MPS,
    errors::DomainResult,
    validators::utils,
};

/// Whether wind carries sea air inland
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindDirection {
    /// Blowing from sea to land
    Onshore,
    /// Blowing from land to sea, or along the coast
    Offshore,
}

/// Lowest bearing treated as onshore (degrees, inclusive)
pub const ONSHORE_BEARING_MIN_DEG: f64 = 45.0;

/// Highest bearing treated as onshore (degrees, inclusive)
pub const ONSHORE_BEARING_MAX_DEG: f64 = 135.0;

impl WindDirection {
    /// Classify a meteorological wind bearing for an east-facing coast
    ///
    /// Bearings between 45° and 135° inclusive (roughly easterly, blowing in
    /// from the sea) are onshore; everything else is offshore. Bearings are
    /// normalized into [0, 360) first.
    pub fn from_bearing_deg(bearing_deg: f64) -> DomainResult<Self> {
        utils::check_finite("wind_bearing_deg", bearing_deg)?;

        let mut bearing = bearing_deg % 360.0;
        if bearing < 0.0 {
            bearing += 360.0;
        }

        if (ONSHORE_BEARING_MIN_DEG..=ONSHORE_BEARING_MAX_DEG).contains(&bearing) {
            Ok(Self::Onshore)
        } else {
            Ok(Self::Offshore)
        }
    }

    /// Short label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Onshore => "Onshore",
            Self::Offshore => "Offshore",
        }
    }
}

/// Convert a wind speed from metres per second to miles per hour
pub fn mps_to_mph(speed_mps: f64) -> f64 {
    speed_mps * MPH_PER_MPS
}

/// Ambient conditions at the engine's location
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentalReading {
    /// Ambient dry-bulb temperature (°C)
    pub temperature_c: f64,

    /// Station-level atmospheric pressure (hPa)
    pub pressure_hpa: f64,

    /// Relative humidity (%)
    pub relative_humidity_pct: f64,

    /// Sustained wind speed (mph)
    pub wind_speed_mph: f64,

    /// Onshore/offshore classification of the wind
    pub wind_direction: WindDirection,

    /// Distance to the nearest ocean coastline (km)
    pub distance_to_coast_km: f64,

    /// Fine particulate concentration (µg/m³)
    pub pm2_5_ugm3: f64,
}
