//! Named, Versioned Threshold Profiles
//!
//! ## Overview
//!
//! The derivation engine's classification cutoffs (coastal distance, wind
//! speed, PM2.5 band edges, derating factors) are heuristics. Fleets
//! operating in different theatres tune them: a desert airstrip wants
//! tighter particulate bands, a river fleet a shorter coastal distance.
//!
//! A [`ThresholdProfile`] gives one such tuning a name and a version and
//! stores it as JSON, so the numbers travel with the deployment rather than
//! with the binary. The [`ProfileRegistry`] keeps every loaded version and
//! answers "what is the latest `desert` profile?".
//!
//! ## Profile Format
//!
//! ```json
//! {
//!   "name": "desert",
//!   "version": "v2",
//!   "description": "Dusty forward operating base",
//!   "config": {
//!     "pollution": { "moderate_above_ugm3": 25.0, "critical_above_ugm3": 75.0 }
//!   }
//! }
//! ```
//!
//! Every omitted field falls back to the engine default, so a profile only
//! lists what it changes. A profile is validated when it is parsed; an
//! unusable configuration never reaches the registry.
//!
//! ## Version Ordering
//!
//! Versions follow the `vN` convention and compare numerically (`v10` is
//! newer than `v9`). Versions that do not fit the pattern compare as plain
//! strings after all numeric ones.
//!
//! ## Usage Example
//!
//! ```rust
//! use propulsion_profiles::ProfileRegistry;
//!
//! let registry = ProfileRegistry::new();
//! registry.load_defaults()?;
//! registry.load_json(r#"{
//!     "name": "standard",
//!     "version": "v2",
//!     "config": { "pollution": { "moderate_above_ugm3": 35.0 } }
//! }"#)?;
//!
//! let latest = registry.get_latest("standard")?;
//! assert_eq!(latest.version, "v2");
//!
//! let engine = latest.engine()?;
//! assert_eq!(engine.config().pollution.moderate_above_ugm3, 35.0);
//! # Ok::<(), propulsion_profiles::ProfileError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

use propulsion_core::DomainError;

pub mod profile;
pub mod registry;

pub use profile::ThresholdProfile;
pub use registry::{global, ProfileRegistry};

/// Profile-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum ProfileError {
    /// Malformed JSON or missing required fields
    #[error("Failed to parse profile: {0}")]
    Parse(String),

    /// No profile under the requested name or version
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// Profile file could not be read
    #[error("I/O error: {0}")]
    Io(String),

    /// Profile parsed but its configuration is unusable
    #[error("Invalid profile configuration: {0}")]
    Invalid(DomainError),

    /// The same name and version is already registered
    #[error("Profile already registered: {0}")]
    AlreadyRegistered(String),
}

impl From<DomainError> for ProfileError {
    fn from(err: DomainError) -> Self {
        ProfileError::Invalid(err)
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        ProfileError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for ProfileError {
    fn from(err: std::io::Error) -> Self {
        ProfileError::Io(err.to_string())
    }
}
