//! Threshold profile definition and JSON (de)serialization

use propulsion_core::{DerivationEngine, EngineConfig};
use serde::{Deserialize, Serialize};

use crate::ProfileError;

/// Name of the built-in profile
pub const STANDARD_PROFILE_NAME: &str = "standard";

/// Version of the built-in profile
pub const STANDARD_PROFILE_VERSION: &str = "v1";

/// A named, versioned engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdProfile {
    /// Profile family (e.g., "desert")
    pub name: String,

    /// Version within the family (e.g., "v2")
    pub version: String,

    /// Free-form note for operators
    #[serde(default)]
    pub description: String,

    /// Thresholds; omitted fields take engine defaults
    #[serde(default)]
    pub config: EngineConfig,
}

impl ThresholdProfile {
    /// Create a profile without a description
    pub fn new(name: impl Into<String>, version: impl Into<String>, config: EngineConfig) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: String::new(),
            config,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The built-in profile: engine defaults
    pub fn standard() -> Self {
        Self::new(
            STANDARD_PROFILE_NAME,
            STANDARD_PROFILE_VERSION,
            EngineConfig::default(),
        )
        .with_description("Default corrosion scoring and PM2.5 bands")
    }

    /// Registry key, `{name}_{version}` (e.g., "standard_v1")
    pub fn qualified_name(&self) -> String {
        format!("{}_{}", self.name, self.version)
    }

    /// Check the identifiers are present and the configuration is usable
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::Parse("profile name is empty".to_string()));
        }
        if self.version.trim().is_empty() {
            return Err(ProfileError::Parse(format!(
                "profile {} has an empty version",
                self.name
            )));
        }
        self.config.validate()?;
        Ok(())
    }

    /// Parse and validate a profile from JSON
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build an engine configured by this profile
    pub fn engine(&self) -> Result<DerivationEngine, ProfileError> {
        Ok(DerivationEngine::new(self.config)?)
    }
}
