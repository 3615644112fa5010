use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rngci_emissions::{baseline_methane, calculate};
use rngci_pathway::{PathwayInputs, validate};

const SAMPLE: &str = include_str!("../../../fixtures/sample_pathway.json");

fn sample() -> PathwayInputs {
    serde_json::from_str(SAMPLE).expect("sample fixture must parse")
}

fn bench_single_calculation(c: &mut Criterion) {
    let inputs = sample();

    c.bench_function("calculate/sample_pathway", |b| {
        b.iter(|| calculate(black_box(&inputs)))
    });

    c.bench_function("validate_then_calculate/sample_pathway", |b| {
        b.iter(|| {
            let inputs = black_box(&inputs);
            validate(inputs).map(|_| calculate(inputs))
        })
    });

    c.bench_function("baseline_methane", |b| {
        b.iter(|| baseline_methane(black_box(&inputs.livestock_data)))
    });
}

/// Batch evaluation: independent invocations mapped over a set of facilities.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_calculate");

    for size in [10usize, 100, 1_000] {
        let batch: Vec<PathwayInputs> = (0..size)
            .map(|i| {
                let mut inputs = sample();
                inputs.livestock_data.number_of_animals = 500.0 + i as f64;
                inputs
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .iter()
                    .map(|inputs| calculate(black_box(inputs)).total_carbon_intensity)
                    .sum::<f64>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_calculation, bench_batch);
criterion_main!(benches);
