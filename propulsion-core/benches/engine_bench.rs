use criterion::{criterion_group, criterion_main, Criterion};
use propulsion_core::{
    compute_air_density, compute_vapor_pressure, DerivationEngine, EnvironmentalReading,
    WindDirection,
};
use std::hint::black_box;

fn reading(temperature_c: f64, relative_humidity_pct: f64) -> EnvironmentalReading {
    EnvironmentalReading {
        temperature_c,
        pressure_hpa: 1000.0,
        relative_humidity_pct,
        wind_speed_mph: 20.0,
        wind_direction: WindDirection::Onshore,
        distance_to_coast_km: 5.0,
        pm2_5_ugm3: 160.0,
    }
}

fn bench_air_density(c: &mut Criterion) {
    c.bench_function("air_density_35c_90rh", |b| {
        b.iter(|| {
            let e = compute_vapor_pressure(black_box(35.0), black_box(90.0))
                .expect("vapor pressure should succeed");
            black_box(compute_air_density(35.0, 1000.0, e).expect("density should succeed"));
        })
    });
}

fn bench_engine_run(c: &mut Criterion) {
    let engine = DerivationEngine::default();
    let mut group = c.benchmark_group("engine_run");

    for &(t, rh) in &[(-20.0, 10.0), (25.0, 50.0), (45.0, 95.0)] {
        let input = reading(t, rh);
        let label = format!("{}c_{}rh", t, rh);
        group.bench_function(&label, |b| {
            b.iter(|| {
                let m = engine
                    .run(black_box(&input), black_box(300.0))
                    .expect("derivation should succeed");
                black_box(m.corrected_power);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_air_density, bench_engine_run);
criterion_main!(benches);
