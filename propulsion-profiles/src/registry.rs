//! Profile Registry for Version Management
//!
//! Keeps every registered profile version, tracks which is the latest per
//! family, and is safe to share between threads.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{ProfileError, ThresholdProfile};

/// Thread-safe profile registry with version management
pub struct ProfileRegistry {
    /// Profiles indexed by qualified name
    profiles: RwLock<HashMap<String, ThresholdProfile>>,

    /// Version mappings (name -> [versions]), in registration order
    versions: RwLock<HashMap<String, Vec<String>>>,

    /// Latest version for each profile name
    latest: RwLock<HashMap<String, String>>,
}

// Every write is a single insert, so a poisoned map is still consistent.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Order `vN` versions numerically, anything else lexically after them
fn compare_versions(a: &str, b: &str) -> Ordering {
    let numeric = |v: &str| v.strip_prefix('v').and_then(|n| n.parse::<u64>().ok());
    match (numeric(a), numeric(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

impl ProfileRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
            versions: RwLock::new(HashMap::new()),
            latest: RwLock::new(HashMap::new()),
        }
    }

    /// Register a profile after validating it
    pub fn register(&self, profile: ThresholdProfile) -> Result<(), ProfileError> {
        profile.validate()?;

        let qualified_name = profile.qualified_name();
        let name = profile.name.clone();
        let version = profile.version.clone();

        {
            let mut profiles = write(&self.profiles);
            if profiles.contains_key(&qualified_name) {
                log::warn!("profile {} already registered", qualified_name);
                return Err(ProfileError::AlreadyRegistered(qualified_name));
            }
            profiles.insert(qualified_name.clone(), profile);
        }

        write(&self.versions)
            .entry(name.clone())
            .or_default()
            .push(version.clone());

        {
            let mut latest = write(&self.latest);
            let newer = latest
                .get(&name)
                .map_or(true, |current| compare_versions(&version, current) == Ordering::Greater);
            if newer {
                latest.insert(name, version);
            }
        }

        log::debug!("registered profile {}", qualified_name);
        Ok(())
    }

    /// Get a profile by qualified name (e.g., "standard_v1")
    pub fn get(&self, qualified_name: &str) -> Result<ThresholdProfile, ProfileError> {
        read(&self.profiles)
            .get(qualified_name)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound(qualified_name.to_string()))
    }

    /// Get the newest version of a profile family
    pub fn get_latest(&self, name: &str) -> Result<ThresholdProfile, ProfileError> {
        let version = read(&self.latest)
            .get(name)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound(format!("No versions of {}", name)))?;

        self.get(&format!("{}_{}", name, version))
    }

    /// All registered versions of a profile family, oldest first
    pub fn versions(&self, name: &str) -> Vec<String> {
        let mut versions = read(&self.versions).get(name).cloned().unwrap_or_default();
        versions.sort_by(|a, b| compare_versions(a, b));
        versions
    }

    /// Registered profile family names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = read(&self.versions).keys().cloned().collect();
        names.sort();
        names
    }

    /// Register the built-in profiles
    pub fn load_defaults(&self) -> Result<(), ProfileError> {
        self.register(ThresholdProfile::standard())
    }

    /// Parse, validate and register a JSON profile; returns its qualified name
    pub fn load_json(&self, json: &str) -> Result<String, ProfileError> {
        let profile = ThresholdProfile::from_json(json)?;
        let qualified_name = profile.qualified_name();
        self.register(profile)?;
        Ok(qualified_name)
    }

    /// Read and register a JSON profile file; returns its qualified name
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<String, ProfileError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|err| ProfileError::Io(format!("{}: {}", path.display(), err)))?;
        self.load_json(&json)
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide registry with the built-in profiles loaded
pub fn global() -> &'static ProfileRegistry {
    static GLOBAL: OnceLock<ProfileRegistry> = OnceLock::new();
    GLOBAL.get_or_init(|| {
        let registry = ProfileRegistry::new();
        if let Err(err) = registry.load_defaults() {
            log::warn!("failed to load built-in profiles: {}", err);
        }
        registry
    })
}
