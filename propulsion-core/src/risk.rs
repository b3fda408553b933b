//! Long-Term Reliability Risk Classification
//!
//! Two heuristic classifiers flag conditions that degrade an engine and its
//! propeller over time rather than reducing instantaneous power:
//!
//! ## Saline Corrosion
//!
//! Sea-salt aerosol is generated by breaking waves and carried inland by
//! onshore wind. Exposure is scored additively, then mapped to a level:
//!
//! ```text
//! +2  distance_to_coast_km < 10
//! +2  wind is Onshore
//! +1  wind_speed_mph > 15
//!
//! score >= 4  -> High
//! score >= 2  -> Moderate
//! otherwise   -> Low
//! ```
//!
//! The score is order-independent: each condition contributes once,
//! regardless of the others.
//!
//! ## Particulate Fouling
//!
//! Fine particulates (PM2.5) pass coarse intake filters, foul the throttle
//! body and abrade cylinder walls. The concentration maps to a band with a
//! power derating factor:
//!
//! ```text
//! pm2.5 <= 50          -> Clean     1.00
//! 50 < pm2.5 <= 150    -> Moderate  0.98
//! pm2.5 > 150          -> Critical  0.95
//! ```
//!
//! Band edges belong to the cleaner band. The factor never increases as the
//! concentration rises.
//!
//! All thresholds are design constants of the heuristic (see
//! [`constants::thresholds`](crate::constants::thresholds)) and can be
//! overridden through [`CorrosionThresholds`] and [`PollutionBands`].

use crate::{
    constants::thresholds::{
        CLEAN_DERATING, COASTAL_DISTANCE_KM, COASTAL_SCORE, CRITICAL_DERATING, HIGH_RISK_SCORE,
        HIGH_WIND_MPH, HIGH_WIND_SCORE, MODERATE_DERATING, MODERATE_RISK_SCORE, ONSHORE_SCORE,
        PM25_CRITICAL_ABOVE_UGM3, PM25_MODERATE_ABOVE_UGM3,
    },
    errors::{DomainError, DomainResult},
    reading::WindDirection,
    validators::utils,
};

/// Saline corrosion risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrosionRisk {
    /// Score below the moderate cutoff
    Low,
    /// Score at or above the moderate cutoff
    Moderate,
    /// Score at or above the high cutoff
    High,
}

impl CorrosionRisk {
    /// Operator-facing status text
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH (Active Corrosion Risk)",
        }
    }
}

/// Particulate pollution level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PollutionLevel {
    /// At or below the moderate band edge
    Clean,
    /// Above the moderate edge, at or below the critical edge
    Moderate,
    /// Above the critical band edge
    Critical,
}

impl PollutionLevel {
    /// Operator-facing status text
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clean => "CLEAN",
            Self::Moderate => "MODERATE",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Corrosion level together with the score that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrosionAssessment {
    /// Level the score maps to
    pub risk: CorrosionRisk,
    /// Additive exposure score
    pub score: u8,
}

/// Pollution level together with its power derating factor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollutionImpact {
    /// Band the concentration falls in
    pub level: PollutionLevel,
    /// Multiplicative power factor in (0, 1]
    pub derating_factor: f64,
}

/// Scoring rules for saline corrosion
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CorrosionThresholds {
    /// Sites strictly closer than this score `coastal_score` (km)
    pub coastal_distance_km: f64,
    /// Points for a coastal site
    pub coastal_score: u8,
    /// Points for onshore wind
    pub onshore_score: u8,
    /// Wind strictly faster than this scores `high_wind_score` (mph)
    pub high_wind_mph: f64,
    /// Points for high wind
    pub high_wind_score: u8,
    /// Minimum score for High
    pub high_risk_score: u8,
    /// Minimum score for Moderate
    pub moderate_risk_score: u8,
}

impl Default for CorrosionThresholds {
    fn default() -> Self {
        Self {
            coastal_distance_km: COASTAL_DISTANCE_KM,
            coastal_score: COASTAL_SCORE,
            onshore_score: ONSHORE_SCORE,
            high_wind_mph: HIGH_WIND_MPH,
            high_wind_score: HIGH_WIND_SCORE,
            high_risk_score: HIGH_RISK_SCORE,
            moderate_risk_score: MODERATE_RISK_SCORE,
        }
    }
}

impl CorrosionThresholds {
    /// Override the coastal distance cutoff
    pub fn with_coastal_distance_km(mut self, km: f64) -> Self {
        self.coastal_distance_km = km;
        self
    }

    /// Override the high-wind cutoff
    pub fn with_high_wind_mph(mut self, mph: f64) -> Self {
        self.high_wind_mph = mph;
        self
    }

    /// Override the level cutoffs
    pub fn with_risk_scores(mut self, moderate: u8, high: u8) -> Self {
        self.moderate_risk_score = moderate;
        self.high_risk_score = high;
        self
    }

    /// Check the thresholds are usable
    pub fn validate(&self) -> DomainResult<()> {
        utils::check_at_least("coastal_distance_km", self.coastal_distance_km, 0.0)?;
        utils::check_at_least("high_wind_mph", self.high_wind_mph, 0.0)?;
        if self.high_risk_score < self.moderate_risk_score {
            return Err(DomainError::InvalidConfig {
                reason: "high risk score below moderate risk score",
            });
        }
        Ok(())
    }

    /// Additive exposure score
    pub fn score(
        &self,
        distance_to_coast_km: f64,
        wind_direction: WindDirection,
        wind_speed_mph: f64,
    ) -> DomainResult<u8> {
        utils::check_at_least("distance_to_coast_km", distance_to_coast_km, 0.0)?;
        utils::check_at_least("wind_speed_mph", wind_speed_mph, 0.0)?;

        let mut score: u8 = 0;
        if distance_to_coast_km < self.coastal_distance_km {
            score = score.saturating_add(self.coastal_score);
        }
        if wind_direction == WindDirection::Onshore {
            score = score.saturating_add(self.onshore_score);
        }
        if wind_speed_mph > self.high_wind_mph {
            score = score.saturating_add(self.high_wind_score);
        }
        Ok(score)
    }

    /// Map a score to a level
    pub fn level(&self, score: u8) -> CorrosionRisk {
        if score >= self.high_risk_score {
            CorrosionRisk::High
        } else if score >= self.moderate_risk_score {
            CorrosionRisk::Moderate
        } else {
            CorrosionRisk::Low
        }
    }

    /// Score and classify
    pub fn assess(
        &self,
        distance_to_coast_km: f64,
        wind_direction: WindDirection,
        wind_speed_mph: f64,
    ) -> DomainResult<CorrosionAssessment> {
        let score = self.score(distance_to_coast_km, wind_direction, wind_speed_mph)?;
        Ok(CorrosionAssessment {
            risk: self.level(score),
            score,
        })
    }
}

/// PM2.5 bands and their derating factors
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PollutionBands {
    /// Concentrations strictly above this are at least Moderate (µg/m³)
    pub moderate_above_ugm3: f64,
    /// Concentrations strictly above this are Critical (µg/m³)
    pub critical_above_ugm3: f64,
    /// Derating factor for Clean
    pub clean_factor: f64,
    /// Derating factor for Moderate
    pub moderate_factor: f64,
    /// Derating factor for Critical
    pub critical_factor: f64,
}

impl Default for PollutionBands {
    fn default() -> Self {
        Self {
            moderate_above_ugm3: PM25_MODERATE_ABOVE_UGM3,
            critical_above_ugm3: PM25_CRITICAL_ABOVE_UGM3,
            clean_factor: CLEAN_DERATING,
            moderate_factor: MODERATE_DERATING,
            critical_factor: CRITICAL_DERATING,
        }
    }
}

impl PollutionBands {
    /// Override the band edges
    pub fn with_edges(mut self, moderate_above_ugm3: f64, critical_above_ugm3: f64) -> Self {
        self.moderate_above_ugm3 = moderate_above_ugm3;
        self.critical_above_ugm3 = critical_above_ugm3;
        self
    }

    /// Override the derating factors
    pub fn with_factors(mut self, clean: f64, moderate: f64, critical: f64) -> Self {
        self.clean_factor = clean;
        self.moderate_factor = moderate;
        self.critical_factor = critical;
        self
    }

    /// Check the bands are ordered and every factor lies in (0, 1]
    pub fn validate(&self) -> DomainResult<()> {
        utils::check_at_least("moderate_above_ugm3", self.moderate_above_ugm3, 0.0)?;
        utils::check_at_least("critical_above_ugm3", self.critical_above_ugm3, 0.0)?;
        if self.critical_above_ugm3 < self.moderate_above_ugm3 {
            return Err(DomainError::InvalidConfig {
                reason: "critical band edge below moderate band edge",
            });
        }

        for (field, factor) in [
            ("clean_factor", self.clean_factor),
            ("moderate_factor", self.moderate_factor),
            ("critical_factor", self.critical_factor),
        ] {
            utils::check_above(field, factor, 0.0)?;
            if factor > 1.0 {
                return Err(DomainError::OutOfRange {
                    field,
                    value: factor,
                    min: 0.0,
                    max: 1.0,
                });
            }
        }

        if self.moderate_factor > self.clean_factor || self.critical_factor > self.moderate_factor {
            return Err(DomainError::InvalidConfig {
                reason: "derating factors must not increase with pollution",
            });
        }
        Ok(())
    }

    /// Band and derating factor for a PM2.5 concentration
    pub fn classify(&self, pm2_5_ugm3: f64) -> DomainResult<PollutionImpact> {
        utils::check_at_least("pm2_5_ugm3", pm2_5_ugm3, 0.0)?;

        let impact = if pm2_5_ugm3 > self.critical_above_ugm3 {
            PollutionImpact {
                level: PollutionLevel::Critical,
                derating_factor: self.critical_factor,
            }
        } else if pm2_5_ugm3 > self.moderate_above_ugm3 {
            PollutionImpact {
                level: PollutionLevel::Moderate,
                derating_factor: self.moderate_factor,
            }
        } else {
            PollutionImpact {
                level: PollutionLevel::Clean,
                derating_factor: self.clean_factor,
            }
        };
        Ok(impact)
    }
}

/// Classify saline corrosion risk with the default thresholds
pub fn classify_corrosion_risk(
    distance_to_coast_km: f64,
    wind_direction: WindDirection,
    wind_speed_mph: f64,
) -> DomainResult<CorrosionRisk> {
    CorrosionThresholds::default()
        .assess(distance_to_coast_km, wind_direction, wind_speed_mph)
        .map(|a| a.risk)
}

/// Classify particulate pollution with the default bands
pub fn classify_pollution_impact(pm2_5_ugm3: f64) -> DomainResult<PollutionImpact> {
    PollutionBands::default().classify(pm2_5_ugm3)
}
