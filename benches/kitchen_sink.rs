#[macro_use]
extern crate criterion;

use chrono::{Duration, NaiveDate};
use criterion::Criterion;
use rand::prelude::*;
use tandem::{Analysis, Assignment, DateInterval, Roster};

fn kitchen_sink(assignments: &[Assignment]) {
    let roster: Roster = assignments.iter().cloned().collect();
    let analysis = Analysis::run(roster);
    criterion::black_box(analysis.longest());
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("kitchen sink", |b| {
        let mut rng = thread_rng();
        let origin = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        let assignments: Vec<Assignment> = (0..1000)
            .map(|_| {
                let employee = rng.gen_range(0..200).to_string();
                let project = rng.gen_range(0..40).to_string();
                let start = origin + Duration::days(rng.gen_range(0..5000));
                let end = start + Duration::days(rng.gen_range(1..400));
                Assignment::new(employee, project, DateInterval::new(start, end))
            })
            .collect();
        b.iter(|| kitchen_sink(&assignments))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
