//! Performance benchmarks for streak computation and event projection.
//!
//! Run with: cargo bench
//!
//! These benchmarks establish baseline performance metrics for:
//! - Streak computation over histories of various lengths
//! - Projecting entries into calendar display events

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use moodtrack::entry::{DateKey, EntryMap};
use moodtrack::events::to_display_events;
use moodtrack::stats::compute_streaks;

/// A history of `days` consecutive days with every seventh day skipped.
fn build_history(days: usize) -> (EntryMap, DateKey) {
    let mut entries = EntryMap::new();
    let mut day = DateKey::from_ymd(2000, 1, 1).expect("valid start date");
    for i in 0..days {
        if i % 7 != 6 {
            entries.insert(day, (i % 11) as i64);
        }
        day = day.next_day().expect("date in range");
    }
    (entries, day)
}

fn bench_streaks(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_streaks");

    for days in [30, 365, 3650] {
        let (entries, today) = build_history(days);

        group.throughput(Throughput::Elements(entries.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &entries, |b, entries| {
            b.iter(|| black_box(compute_streaks(black_box(entries), today)));
        });
    }

    group.finish();
}

fn bench_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_display_events");

    for days in [30, 365, 3650] {
        let (entries, _) = build_history(days);

        group.throughput(Throughput::Elements(entries.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &entries, |b, entries| {
            b.iter(|| black_box(to_display_events(black_box(entries))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_streaks, bench_events);
criterion_main!(benches);
