/// Partitioner Benchmarks
///
/// Measures `divide_parts` on synthetic inventories of increasing size.
/// Each iteration recomputes every aggregate, so cost grows with
/// parts × groupings.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kitdivide::{divide_parts, CategoryIndex, CategoryInfo, Part};
use std::time::Duration;

const SUPER_CATEGORIES: [&str; 6] = ["Bricks", "Plates", "Technic", "Tiles", "Minifigs", "Other"];

fn categories() -> CategoryIndex {
    CategoryIndex::new((0..68u32).map(|id| CategoryInfo {
        id,
        name: format!("Category {}", id),
        super_category: SUPER_CATEGORIES[id as usize % SUPER_CATEGORIES.len()].to_string(),
        standard: id % 4 != 0,
    }))
    .expect("benchmark categories are unique")
}

/// Deterministic pseudo-random inventory
fn inventory(size: usize, index: &CategoryIndex) -> Vec<Part> {
    (0..size)
        .map(|i| {
            let category = (i * 31 % 68) as u32;
            let info = index.get(category).expect("category in range");
            let quantity = (i * 7 % 24) as u32 + 1;
            let unit_weight = 0.1 + (i * 13 % 97) as f64 / 10.0;
            Part::new(
                format!("{}", 3000 + i),
                format!("Part {}", i),
                quantity,
                unit_weight,
                category,
                info.super_category.clone(),
                info.standard,
            )
        })
        .collect()
}

fn bench_divide_parts(c: &mut Criterion) {
    let index = categories();
    let mut group = c.benchmark_group("divide_parts");
    group.measurement_time(Duration::from_secs(5));

    for size in [100usize, 300, 1000].iter() {
        let parts = inventory(*size, &index);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| divide_parts(black_box(&parts), &index, black_box(8)))
        });
    }

    group.finish();
}

fn bench_division_counts(c: &mut Criterion) {
    let index = categories();
    let parts = inventory(500, &index);
    let mut group = c.benchmark_group("division_counts");
    group.measurement_time(Duration::from_secs(5));

    for divisions in [2u32, 8, 32].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(divisions),
            divisions,
            |b, &divisions| b.iter(|| divide_parts(&parts, &index, black_box(divisions))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_divide_parts, bench_division_counts);
criterion_main!(benches);
