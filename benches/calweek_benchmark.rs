use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};

use buildtracker_rust::api::{Half, WeekRange};
use buildtracker_rust::models::calweek::week_of_year;
use buildtracker_rust::services::grid::build_grid;
use buildtracker_rust::services::reconcile::JoinedRow;

fn bench_week_of_year(c: &mut Criterion) {
    let mut group = c.benchmark_group("calweek");

    group.bench_function("week_of_year", |b| {
        b.iter(|| {
            for ordinal in 1u32..=365 {
                let date = NaiveDate::from_yo_opt(2023, ordinal).unwrap();
                black_box(week_of_year(black_box(date)));
            }
        });
    });

    group.finish();
}

fn bench_build_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    let rows: Vec<JoinedRow> = (0..200)
        .map(|i| JoinedRow {
            row_key: format!("F{}", i),
            item_sid: format!("QX{}", i),
            flavour: "S/4H Private".to_string(),
            weeks: WeekRange::new(1 + (i % 20) as u32, 6 + (i % 20) as u32),
        })
        .collect();

    group.bench_function("build_grid_200_rows", |b| {
        b.iter(|| black_box(build_grid(black_box(&rows), Half::First)));
    });

    group.finish();
}

criterion_group!(benches, bench_week_of_year, bench_build_grid);
criterion_main!(benches);
