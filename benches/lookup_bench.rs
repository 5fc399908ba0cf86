use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use langscope::{CldrNames, DisplayNames, Resolver, find_language_names, get_language_details};

fn bench_get_language_details(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_language_details");

    // One query per strategy, plus the miss path that walks all three.
    let queries = [
        ("hi", "part 1 code"),
        ("hin", "part 2b/2t/3 code"),
        ("cmn", "individual language (macro merge)"),
        ("afa", "family code"),
        ("zh-Hans", "locale with script"),
        ("ar_MA", "locale with region"),
        ("Japanese", "English name"),
        ("français", "native name"),
        ("fake-lang", "miss"),
    ];

    // Warm the lazily built indices outside the measurement.
    let _ = get_language_details("en", true);

    for (query, desc) in queries {
        group.bench_with_input(BenchmarkId::new("default", desc), query, |b, q| {
            b.iter(|| black_box(get_language_details(black_box(q), true)));
        });
    }

    let resolver = Resolver::default();
    for (query, desc) in queries {
        group.bench_with_input(BenchmarkId::new("owned_resolver", desc), query, |b, q| {
            b.iter(|| black_box(resolver.details_failsafe(black_box(q))));
        });
    }

    group.finish();
}

fn bench_display_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("display_names");

    for locale in ["fr", "zh-Hans-CN", "hin", "qq"] {
        group.bench_with_input(BenchmarkId::new("cldr_native", locale), locale, |b, l| {
            b.iter(|| black_box(CldrNames.display_name(black_box(l), None)));
        });
        group.bench_with_input(BenchmarkId::new("cldr_english", locale), locale, |b, l| {
            b.iter(|| black_box(CldrNames.display_name(black_box(l), Some("en"))));
        });
        group.bench_with_input(BenchmarkId::new("find_language_names", locale), locale, |b, l| {
            b.iter(|| black_box(find_language_names(black_box(l))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_get_language_details, bench_display_names);
criterion_main!(benches);
