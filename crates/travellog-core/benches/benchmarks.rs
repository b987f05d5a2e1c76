use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use travellog_core::prelude::*;

fn synthetic_flights(n: usize) -> Vec<CompletedFlight> {
    let cities = ["Bratislava", "Vienna", "London", "Košice", "Tokyo", "Zürich"];
    (0..n)
        .map(|i| {
            let dep = Airport {
                name: format!("{} Airport", cities[i % cities.len()]),
                city: cities[i % cities.len()].into(),
                ..Default::default()
            };
            let arr = Airport {
                name: format!("{} International", cities[(i + 1) % cities.len()]),
                city: cities[(i + 1) % cities.len()].into(),
                ..Default::default()
            };
            let date = format!("{:02}.{:02}.{}", i % 28 + 1, i % 12 + 1, 2000 + i % 25);
            let mut f = CompletedFlight::new(
                dep,
                arr,
                date,
                FlightDuration::from_text(&(i % 14).to_string(), &(i % 60).to_string()),
            );
            f.id = Some(i.to_string());
            f
        })
        .collect()
}

fn bench_flight_screen(c: &mut Criterion) {
    let mut group = c.benchmark_group("flight_screen");
    let criteria = FlightCriteria {
        search: "London".into(),
        date_from: "01.01.2010".into(),
        duration_to: "600".into(),
        ..Default::default()
    };

    for n in [100usize, 1_000, 10_000] {
        let flights = synthetic_flights(n);
        group.bench_with_input(BenchmarkId::new("filter", n), &flights, |b, input| {
            b.iter(|| filter_flights(black_box(input), &criteria));
        });
        for mode in [FlightSort::DateNewestFirst, FlightSort::DurationLongestFirst] {
            group.bench_with_input(
                BenchmarkId::new(format!("sort_{}", mode.key()), n),
                &flights,
                |b, input| b.iter(|| sort_flights(black_box(input), mode)),
            );
        }
    }
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let names = ["Banská Bystrica", "Žilina", "Plain ascii", "Łódź", "Zürich"];
    c.bench_function("normalize", |b| {
        b.iter(|| {
            for n in names {
                black_box(normalize(black_box(n)));
            }
        })
    });
}

fn bench_borders(c: &mut Criterion) {
    let ring: Vec<Vec<f64>> = (0..2_000)
        .map(|i| {
            let t = i as f64 / 2_000.0 * std::f64::consts::TAU;
            vec![17.0 + t.cos(), 48.5 + t.sin()]
        })
        .collect();
    let mut idx = BorderIndex::new();
    idx.insert(
        "SK",
        BorderGeometry {
            coordinates: vec![vec![ring.clone()], vec![ring]],
        },
    );
    let builder = BorderGeometryBuilder::new(&idx);
    c.bench_function("border_build", |b| b.iter(|| builder.build(black_box("SK"))));
}

criterion_group!(benches, bench_flight_screen, bench_normalize, bench_borders);
criterion_main!(benches);
