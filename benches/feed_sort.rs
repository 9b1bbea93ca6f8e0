//! Benchmarks for building the merged feed.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use family_memories::model::{build_feed, FileRecord, SortMode, Vignette};
use std::hint::black_box;

fn sample(n: usize) -> (Vec<Vignette>, Vec<FileRecord>) {
    let vignettes = (0..n)
        .map(|i| Vignette {
            id: i as i64,
            title: format!("Story {}", n - i),
            content: Some("Once upon a time".into()),
            created_at: Some(format!("20{:02}-{:02}-15T08:00:00", i % 25, i % 12 + 1)),
        })
        .collect();
    let files = (0..n)
        .map(|i| FileRecord {
            id: i as i64,
            title: (i % 3 != 0).then(|| format!("Photo {i}")),
            filename: format!("IMG_{i:04}.jpg"),
            description: None,
            file_type: Some("image/jpeg".into()),
            created_at: (i % 7 != 0).then(|| format!("2019-{:02}-01", i % 12 + 1)),
        })
        .collect();
    (vignettes, files)
}

fn bench_build_feed(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_feed");
    for size in [100, 1_000, 10_000] {
        let (vignettes, files) = sample(size);
        for mode in SortMode::ALL {
            group.bench_with_input(BenchmarkId::new(mode.as_str(), size), &size, |b, _| {
                b.iter(|| build_feed(black_box(&vignettes), black_box(&files), mode));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_build_feed);
criterion_main!(benches);
