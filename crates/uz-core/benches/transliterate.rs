use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uz_core::{transliterate, Direction};

const CYRILLIC_ARTICLE: &str = "<h2>Янгиликлар</h2><p>Бугун <a href=\"/news/1\">Самарқанд</a> \
шаҳрида ёшлар форуми бўлиб ўтди. Форумда 1200 нафар ўғил-қизлар иштирок этди.</p>\
<p>Тошкент вилоятида янги мактаб қурилди, у <strong>чиройли</strong> ва ҳашаматли.</p>";

fn latin_article() -> String {
    transliterate(CYRILLIC_ARTICLE, Direction::CyrillicToLatin)
}

fn bench_transliterate(c: &mut Criterion) {
    let latin = latin_article();
    let plain = CYRILLIC_ARTICLE.replace(['<', '>'], " ");

    let mut group = c.benchmark_group("transliterate");
    group.bench_function(BenchmarkId::new("cyrillic_to_latin", "markup"), |b| {
        b.iter(|| transliterate(black_box(CYRILLIC_ARTICLE), Direction::CyrillicToLatin))
    });
    group.bench_function(BenchmarkId::new("cyrillic_to_latin", "plain"), |b| {
        b.iter(|| transliterate(black_box(&plain), Direction::CyrillicToLatin))
    });
    group.bench_function(BenchmarkId::new("latin_to_cyrillic", "markup"), |b| {
        b.iter(|| transliterate(black_box(&latin), Direction::LatinToCyrillic))
    });
    group.finish();
}

criterion_group!(benches, bench_transliterate);
criterion_main!(benches);
