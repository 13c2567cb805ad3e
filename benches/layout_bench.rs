use agegrid::category::CategoryTable;
use agegrid::compare::{CategoryPriority, SortOrder};
use agegrid::layout::{layout_grid, max_rank_metric};
use agegrid::record::Record;
use agegrid::view::{build_view, ViewKind};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const PARTIES: [&str; 8] = ["Lab", "Con", "SNP", "LD", "DUP", "SF", "PC", "Green"];

// Roughly the shape of the 2017 table: 650 seats over ages 26..54.
fn synthetic_records(n: usize) -> Vec<Record> {
    let mut rng = fastrand::Rng::with_seed(2017);
    (0..n)
        .map(|i| {
            Record::new(
                &format!("Seat {}", i),
                rng.u32(26..=54),
                PARTIES[rng.usize(..PARTIES.len())],
                rng.u32(0..35_000) as f64,
            )
            .with_secondary(0.5 + rng.f64() * 0.3)
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let records = synthetic_records(650);
    let order = SortOrder::CategoryThenMetric(CategoryPriority::labour_first());
    let max = max_rank_metric(&records);

    c.bench_function("layout_grid_650", |b| {
        b.iter(|| layout_grid(black_box(&records), &order, max).unwrap())
    });

    let table = CategoryTable::uk_parties();
    let config = ViewKind::Turnout.config();
    c.bench_function("build_view_turnout_650", |b| {
        b.iter(|| build_view(black_box(&records), &config, &table).unwrap())
    });
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
