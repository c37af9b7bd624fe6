//! Render throughput benchmarks.
//!
//! Compares the streaming, buffered and code point entry points, plus
//! `core::fmt` writing to a stack buffer as a baseline.

use std::fmt::Write as _;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use microfmt_bench::{TEMPLATES, sample_args};
use microfmt_core::{BufferSink, Discard, args, format_float_to_buffer, render, render_codepoints, render_to_buffer};

fn bench_render_to_buffer(c: &mut Criterion) {
    let values = sample_args();
    let mut group = c.benchmark_group("render_to_buffer");
    for &(label, template) in TEMPLATES {
        group.bench_with_input(BenchmarkId::from_parameter(label), template, |b, t| {
            let mut buf = [0u8; 128];
            b.iter(|| criterion::black_box(render_to_buffer(&mut buf, t, &values)));
        });
    }
    group.finish();
}

fn bench_render_discard(c: &mut Criterion) {
    let values = sample_args();
    let mut group = c.benchmark_group("render_discard");
    for &(label, template) in TEMPLATES {
        group.bench_with_input(BenchmarkId::from_parameter(label), template, |b, t| {
            b.iter(|| criterion::black_box(render(Discard, t, &values)));
        });
    }
    group.finish();
}

fn bench_render_codepoints(c: &mut Criterion) {
    let values = args!["Русский текст", "日本語テキスト"];
    c.bench_function("render_codepoints_unicode", |b| {
        b.iter(|| {
            criterion::black_box(render_codepoints(Discard, "-{:>16}-{:^10}-", &values));
        });
    });
}

fn bench_float(c: &mut Criterion) {
    c.bench_function("format_float_6", |b| {
        let mut buf = [0u8; 64];
        b.iter(|| criterion::black_box(format_float_to_buffer(&mut buf, -1234.567_89, 6)));
    });
}

fn bench_core_fmt_baseline(c: &mut Criterion) {
    c.bench_function("core_fmt_mixed", |b| {
        let mut buf = [0u8; 128];
        b.iter(|| {
            let mut sink = BufferSink::new(&mut buf);
            let _ = write!(
                sink,
                "{}:{:>6}|{:#b}|{:.3}|{}|{}",
                -48_213, 912, 0x5a5a, 23.456_78, "node-7", 'x'
            );
            criterion::black_box(sink.written())
        });
    });
}

criterion_group!(
    benches,
    bench_render_to_buffer,
    bench_render_discard,
    bench_render_codepoints,
    bench_float,
    bench_core_fmt_baseline
);
criterion_main!(benches);
