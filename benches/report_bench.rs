//! Benchmarks for collecting, parsing and ranking entries

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use largest_dirs::collector::{CollectOptions, NativeCollector, SizeCollector};
use largest_dirs::report::{format_table, parse_output, rank, PathMode, TableOptions};
use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;

/// Build du-style output with `lines` entries of varying size
fn create_du_output(lines: usize) -> String {
    let mut output = String::with_capacity(lines * 32);
    for i in 0..lines {
        let size = (i as u64).wrapping_mul(2654435761) % (1 << 34);
        output.push_str(&format!("{}\t/data/dir{}/file{}.bin\n", size, i % 97, i));
    }
    output
}

/// Create a benchmark directory with the given number of files and directories
fn create_benchmark_dir(file_count: usize, dir_count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let files_per_dir = file_count / dir_count;

    for d in 0..dir_count {
        let subdir = dir.path().join(format!("dir{}", d));
        fs::create_dir(&subdir).unwrap();

        for f in 0..files_per_dir {
            let mut file = File::create(subdir.join(format!("file{}.txt", f))).unwrap();
            file.write_all(&vec![b'x'; 1024]).unwrap();
        }
    }

    dir
}

fn benchmark_parse_and_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_and_rank");

    for size in [1_000, 10_000, 100_000].iter() {
        let text = create_du_output(*size);

        group.bench_with_input(BenchmarkId::new("parse", size), size, |b, _| {
            b.iter(|| parse_output(black_box(&text), PathMode::Remainder))
        });

        group.bench_with_input(BenchmarkId::new("parse_rank", size), size, |b, _| {
            b.iter(|| {
                let mut entries = parse_output(black_box(&text), PathMode::Remainder).unwrap();
                rank(&mut entries);
                entries
            })
        });
    }

    group.finish();
}

fn benchmark_table(c: &mut Criterion) {
    let mut entries = parse_output(&create_du_output(10_000), PathMode::Remainder).unwrap();
    rank(&mut entries);
    let options = TableOptions::new().with_limit(50);

    c.bench_function("format_table_top50", |b| {
        b.iter(|| format_table(black_box(&entries), &options))
    });
}

fn benchmark_native_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("native_walk");
    let dir = create_benchmark_dir(1000, 10);

    let sequential = NativeCollector::new(CollectOptions::new().with_threads(1));
    let parallel = NativeCollector::new(CollectOptions::new());

    group.bench_function("sequential", |b| {
        b.iter(|| sequential.collect(black_box(dir.path())))
    });

    group.bench_function("parallel", |b| {
        b.iter(|| parallel.collect(black_box(dir.path())))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_and_rank,
    benchmark_table,
    benchmark_native_walk
);
criterion_main!(benches);
