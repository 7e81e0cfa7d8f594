//! Construction benchmarks
//!
//! Run with: cargo bench
//!
//! Build time should grow linearly with input length for every input shape,
//! including the highly repetitive ones that stress cursor hops.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ukkonen::tree::{Recorder, TreeStats, Text, build_text, build_with_sink, verify};

/// Deterministic pseudo-random text over `alphabet`, sentinel appended
fn random_text(len: usize, alphabet: &[char]) -> String {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut text = String::with_capacity(len + 1);
    for _ in 0..len {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        text.push(alphabet[(state % alphabet.len() as u64) as usize]);
    }
    text.push('$');
    text
}

fn bench_build_by_shape(c: &mut Criterion) {
    let dna = ['A', 'C', 'G', 'T'];
    let lengths = [1_000, 10_000, 100_000];

    let mut group = c.benchmark_group("build");
    for len in lengths {
        let shapes = [
            ("dna", random_text(len, &dna)),
            ("unary", format!("{}$", "a".repeat(len))),
            ("periodic", format!("{}$", "abcab".repeat(len / 5))),
        ];

        for (shape, input) in shapes {
            let text = Text::try_from(input.as_str()).expect("valid benchmark text");
            group.throughput(Throughput::Elements(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(shape, len), &text, |b, text| {
                b.iter(|| build_text(black_box(text.clone()), &mut ukkonen::tree::NoopSink))
            });
        }
    }
    group.finish();
}

fn bench_traced_build(c: &mut Criterion) {
    // Snapshots copy the whole tree each step, so keep inputs small
    let input = random_text(200, &['a', 'b', 'c']);

    c.bench_function("build_recorded_200", |b| {
        b.iter(|| {
            let mut recorder = Recorder::default();
            build_with_sink(black_box(&input), &mut recorder).unwrap();
            recorder.snapshots.len()
        })
    });
}

fn bench_inspection(c: &mut Criterion) {
    let input = random_text(10_000, &['a', 'b', 'c', 'd']);
    let tree = ukkonen::tree::build(&input).unwrap();

    let mut group = c.benchmark_group("inspect");
    group.bench_function("stats_10k", |b| b.iter(|| TreeStats::collect(black_box(&tree))));
    group.bench_function("verify_10k", |b| b.iter(|| verify(black_box(&tree))));
    group.finish();
}

criterion_group!(benches, bench_build_by_shape, bench_traced_build, bench_inspection);
criterion_main!(benches);
