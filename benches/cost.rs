use coldcost::{CalculationInput, Calculator, Region, format_duration};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_breakdown(c: &mut Criterion) {
    let calculator = Calculator::default();
    let mut group = c.benchmark_group("Calculator::breakdown");

    let full = CalculationInput::new()
        .region(Region::Asia)
        .stored_data(7200.0)
        .stored_duration(45.0)
        .retrieve_data(60_001.0)
        .retrieval_window(8.0)
        .deleted_data(100.0)
        .deleted_duration(20.0);
    group.bench_function("full_input", |b| {
        b.iter(|| calculator.breakdown(black_box(&full)));
    });

    let storage_only = CalculationInput::new().stored_data(300.0).stored_duration(30.0);
    group.bench_function("storage_only", |b| {
        b.iter(|| calculator.breakdown(black_box(&storage_only)));
    });

    let empty = CalculationInput::new();
    group.bench_function("empty", |b| {
        b.iter(|| calculator.breakdown(black_box(&empty)));
    });

    group.finish();
}

fn bench_transfer_cost(c: &mut Criterion) {
    let calculator = Calculator::default();
    let mut group = c.benchmark_group("Calculator::transfer_cost");

    let small = CalculationInput::new().retrieve_data(5.0);
    group.bench_function("single_tier", |b| {
        b.iter(|| calculator.transfer_cost(black_box(&small)));
    });

    let huge = CalculationInput::new().retrieve_data(600_000.0);
    group.bench_function("all_tiers", |b| {
        b.iter(|| calculator.transfer_cost(black_box(&huge)));
    });

    group.finish();
}

fn bench_format_duration(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_duration");

    group.bench_function("full_breakdown", |b| {
        b.iter(|| format_duration(black_box(90_061.0)));
    });

    group.bench_function("seconds_only", |b| {
        b.iter(|| format_duration(black_box(45.0)));
    });

    group.bench_function("non_finite", |b| {
        b.iter(|| format_duration(black_box(f64::NAN)));
    });

    group.finish();
}

criterion_group!(benches, bench_breakdown, bench_transfer_cost, bench_format_duration);
criterion_main!(benches);
