//! Error Handling Example
//!
//! Shows how the engine rejects out-of-domain readings and configurations,
//! and how to pick a validator preset for non-standard conditions.
//!
//! ## What You'll Learn
//!
//! - Matching on `DomainError` variants and the offending field
//! - The `default`, `strict` and `permissive` reading validators
//! - Configuration checks on custom thresholds
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_error_handling
//! ```

use propulsion_core::{
    run, DerivationEngine, DomainError, EngineConfig, EnvironmentalReading, PollutionBands,
    ReadingValidator, WindDirection,
};

fn base() -> EnvironmentalReading {
    EnvironmentalReading {
        temperature_c: 20.0,
        pressure_hpa: 1013.25,
        relative_humidity_pct: 60.0,
        wind_speed_mph: 5.0,
        wind_direction: WindDirection::Offshore,
        distance_to_coast_km: 40.0,
        pm2_5_ugm3: 12.0,
    }
}

fn describe(label: &str, result: Result<f64, DomainError>) {
    match result {
        Ok(power) => println!("  {:<34} ok, corrected {:.1} hp", label, power),
        Err(err @ DomainError::InconsistentPressure { .. }) => {
            println!("  {:<34} inconsistent: {}", label, err)
        }
        Err(err) => match err.field() {
            Some(field) => println!("  {:<34} rejected [{}]: {}", label, field, err),
            None => println!("  {:<34} rejected: {}", label, err),
        },
    }
}

fn main() {
    println!("Propulsion Factors Error Handling Example");
    println!("=========================================\n");

    println!("1. Out-of-domain readings (default validator):");
    let cases: [(&str, fn(&mut EnvironmentalReading)); 5] = [
        ("humidity 105%", |r| r.relative_humidity_pct = 105.0),
        ("pressure 0 hPa", |r| r.pressure_hpa = 0.0),
        ("temperature 75°C", |r| r.temperature_c = 75.0),
        ("PM2.5 missing (NaN)", |r| r.pm2_5_ugm3 = f64::NAN),
        ("saturated air at 20 hPa", |r| {
            r.relative_humidity_pct = 100.0;
            r.pressure_hpa = 20.0;
        }),
    ];
    for (label, corrupt) in cases {
        let mut reading = base();
        corrupt(&mut reading);
        describe(label, run(&reading, 300.0).map(|m| m.corrected_power));
    }
    describe("rated power 0", run(&base(), 0.0).map(|m| m.corrected_power));
    println!();

    println!("2. Validator presets:");
    let mut hot = base();
    hot.temperature_c = 75.0;
    let mut high = base();
    high.pressure_hpa = 1200.0;
    let permissive = DerivationEngine::default().with_validator(ReadingValidator::permissive());
    let strict = DerivationEngine::default().with_validator(ReadingValidator::strict());
    describe("75°C, permissive", permissive.run(&hot, 300.0).map(|m| m.corrected_power));
    describe("1200 hPa, default", run(&high, 300.0).map(|m| m.corrected_power));
    describe("1200 hPa, strict", strict.run(&high, 300.0).map(|m| m.corrected_power));
    println!();

    println!("3. Configuration checks:");
    let unordered = EngineConfig::default()
        .with_pollution(PollutionBands::default().with_edges(150.0, 50.0));
    match DerivationEngine::new(unordered) {
        Ok(_) => println!("  unordered bands accepted"),
        Err(err) => println!("  unordered bands rejected: {}", err),
    }
}
