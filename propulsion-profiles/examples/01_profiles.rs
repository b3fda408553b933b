//! Threshold Profiles Example
//!
//! Loads a tuned profile from a JSON file next to the built-in one and
//! compares their reports for the same reading.
//!
//! ## What You'll Learn
//!
//! - Writing a partial profile (omitted fields take engine defaults)
//! - Registering profiles and resolving the latest version
//! - Building an engine from a profile
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run -p propulsion-profiles --example 01_profiles
//! ```

use propulsion_core::{EnvironmentalReading, WindDirection};
use propulsion_profiles::{ProfileError, ProfileRegistry};

const DESERT_V1: &str = r#"{
    "name": "desert",
    "version": "v1",
    "description": "Forward airstrip, frequent dust",
    "config": {
        "pollution": { "moderate_above_ugm3": 25.0, "critical_above_ugm3": 75.0 }
    }
}"#;

const DESERT_V2: &str = r#"{
    "name": "desert",
    "version": "v2",
    "description": "Forward airstrip, harsher fouling factors",
    "config": {
        "pollution": {
            "moderate_above_ugm3": 25.0,
            "critical_above_ugm3": 75.0,
            "moderate_factor": 0.97,
            "critical_factor": 0.92
        }
    }
}"#;

fn main() -> Result<(), ProfileError> {
    println!("Propulsion Factors Profiles Example");
    println!("===================================\n");

    let registry = ProfileRegistry::new();
    registry.load_defaults()?;
    registry.load_json(DESERT_V1)?;

    let path = std::env::temp_dir().join("propulsion_desert_v2.json");
    std::fs::write(&path, DESERT_V2)?;
    let key = registry.load_file(&path)?;
    println!("Loaded {} from {}", key, path.display());
    println!("Desert versions: {:?}\n", registry.versions("desert"));

    let reading = EnvironmentalReading {
        temperature_c: 41.0,
        pressure_hpa: 930.0,
        relative_humidity_pct: 12.0,
        wind_speed_mph: 18.0,
        wind_direction: WindDirection::Offshore,
        distance_to_coast_km: 400.0,
        pm2_5_ugm3: 90.0,
    };

    for name in registry.names() {
        let profile = registry.get_latest(&name)?;
        let metrics = profile.engine()?.run(&reading, 180.0)?;
        println!(
            "{} ({}): {} x{:.2} -> {:.1} hp",
            profile.qualified_name(),
            profile.description,
            metrics.pollution_level.label(),
            metrics.power_derating_factor,
            metrics.corrected_power
        );
    }

    std::fs::remove_file(&path)?;
    Ok(())
}
