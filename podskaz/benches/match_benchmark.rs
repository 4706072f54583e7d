use criterion::{criterion_group, criterion_main, Criterion};
use podskaz::distance::distance;
use podskaz::highlight::highlight;
use podskaz::matcher::matches;
use podskaz::stem::stem;

fn bench_matching(c: &mut Criterion) {
    let pairs = vec![
        ("substring", "Кнауф Гипс универсальный", "кнауф"),
        ("stemmed_prefix", "шурупы оцинкованные", "шуруп"),
        ("surface_typo", "Гипсокартон влагостойкий", "гипсокортон"),
        ("no_match", "керамогранит напольный", "водонагреватель"),
    ];

    let mut group = c.benchmark_group("matches");
    for (name, text, query) in pairs {
        group.bench_function(name, |b| b.iter(|| matches(text, query)));
    }
    group.finish();
}

fn bench_primitives(c: &mut Criterion) {
    c.bench_function("stem_adjective", |b| b.iter(|| stem("строительного")));
    c.bench_function("distance_medium_words", |b| {
        b.iter(|| distance("гидроизоляция", "гидраизоляция"))
    });
}

fn bench_highlight(c: &mut Criterion) {
    let text = "Цемент М500 портландцемент, мешок 50кг (быстротвердеющий)";
    c.bench_function("highlight_product_name", |b| b.iter(|| highlight(text, "цемент")));
}

criterion_group!(benches, bench_matching, bench_primitives, bench_highlight);
criterion_main!(benches);
