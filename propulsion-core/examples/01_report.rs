//! Ambient Report Example
//!
//! Derives the full report for two reference days: a warm inland day and a
//! hot, humid, smoky coastal day.
//!
//! ## What You'll Learn
//!
//! - Building an `EnvironmentalReading`, including wind from m/s and a bearing
//! - Running the default engine
//! - Reading density, corrected power and the two risk classifications
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_report
//! ```

use propulsion_core::{
    mps_to_mph, run, DerivedMetrics, DomainResult, EnvironmentalReading, WindDirection,
};

const RATED_POWER_HP: f64 = 300.0;

fn print_report(title: &str, reading: &EnvironmentalReading, m: &DerivedMetrics) {
    println!("{}", title);
    println!(
        "  Conditions: {:.1}°C, {:.2} hPa, {:.0}% RH, wind {:.1} mph {}, {:.0} km to coast, PM2.5 {:.0} µg/m³",
        reading.temperature_c,
        reading.pressure_hpa,
        reading.relative_humidity_pct,
        reading.wind_speed_mph,
        reading.wind_direction.label(),
        reading.distance_to_coast_km,
        reading.pm2_5_ugm3,
    );
    println!(
        "  Air density: {:.4} kg/m³ ({:.1}% of standard)",
        m.air_density_kgm3,
        m.density_percent_of_standard()
    );
    println!(
        "  Power: {:.1} hp rated -> {:.1} hp corrected ({:.1} hp, {:.1}% loss)",
        m.rated_power,
        m.corrected_power,
        m.power_loss,
        m.power_loss_percent()
    );
    println!(
        "  Corrosion: {} (score {})",
        m.corrosion_risk.label(),
        m.corrosion_score
    );
    println!(
        "  Pollution: {} (derating {:.2})\n",
        m.pollution_level.label(),
        m.power_derating_factor
    );
}

fn main() -> DomainResult<()> {
    println!("Propulsion Factors Report Example");
    println!("=================================\n");

    let inland = EnvironmentalReading {
        temperature_c: 25.0,
        pressure_hpa: 1013.25,
        relative_humidity_pct: 50.0,
        wind_speed_mph: 10.0,
        wind_direction: WindDirection::Offshore,
        distance_to_coast_km: 50.0,
        pm2_5_ugm3: 20.0,
    };
    let metrics = run(&inland, RATED_POWER_HP)?;
    print_report("Warm inland day", &inland, &metrics);

    // Weather providers report wind as m/s plus a bearing
    let wind_mps = 8.94;
    let bearing_deg = 95.0;
    let coastal = EnvironmentalReading {
        temperature_c: 35.0,
        pressure_hpa: 1000.0,
        relative_humidity_pct: 90.0,
        wind_speed_mph: mps_to_mph(wind_mps),
        wind_direction: WindDirection::from_bearing_deg(bearing_deg)?,
        distance_to_coast_km: 5.0,
        pm2_5_ugm3: 160.0,
    };
    let metrics = run(&coastal, RATED_POWER_HP)?;
    print_report("Hot, humid, smoky coast", &coastal, &metrics);

    Ok(())
}
