use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradebook_core::decode::{RecordDecoder, WhitespaceDecoder};
use gradebook_core::roster::Roster;

fn bench_apply_submission(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_submission");

    group.bench_function("improving", |b| {
        let roster = Roster::new(4);
        roster.register("bench");
        let mut total = 0i32;
        b.iter(|| {
            total += 1;
            roster.apply_submission(black_box("bench"), black_box(&[total, 0, 0, 0]))
        })
    });

    group.bench_function("non_improving", |b| {
        let roster = Roster::new(4);
        roster.register("bench");
        roster.apply_submission("bench", &[100, 100, 100, 100]);
        b.iter(|| roster.apply_submission(black_box("bench"), black_box(&[1, 1, 1, 1])))
    });

    group.bench_function("rejected_unknown", |b| {
        let roster = Roster::new(4);
        b.iter(|| roster.apply_submission(black_box("ghost"), black_box(&[1, 1, 1, 1])))
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    group.bench_function("short_line", |b| {
        b.iter(|| WhitespaceDecoder.decode(black_box("alice 10 0 7 3")))
    });

    group.bench_function("long_line", |b| {
        let line = format!("bob {}", vec!["42"; 64].join(" "));
        b.iter(|| WhitespaceDecoder.decode(black_box(&line)))
    });

    group.finish();
}

criterion_group!(benches, bench_apply_submission, bench_decode);
criterion_main!(benches);
