use criterion::{Criterion, black_box, criterion_group, criterion_main};
use milan_rs::{
    BirthProfile, ChartConfig, Engine, Gender, MatchConfig, Nakshatra, Rashi, SortKey,
    find_best_matches, match_profiles, report_summary,
};

fn facade_bench(c: &mut Criterion) {
    let engine = Engine::default();
    let boy = BirthProfile::from_parts("Boy", 1990, 1, 1, 6, 0, 5.5, 28.6139, 77.2090);
    let girl = BirthProfile::from_parts("Girl", 1992, 4, 12, 5, 30, 5.5, 28.6139, 77.2090);
    let (Ok(boy), Ok(girl)) = (boy, girl) else {
        return;
    };
    let chart_config = ChartConfig::default();
    let match_config = MatchConfig::full(boy.jd_ut() + 12_000.0);

    let mut group = c.benchmark_group("facade");
    group.bench_function("match_profiles", |b| {
        b.iter(|| {
            match_profiles(
                &engine,
                black_box(&boy),
                black_box(&girl),
                &chart_config,
                &match_config,
            )
        })
    });
    if let Ok(report) = match_profiles(&engine, &boy, &girl, &chart_config, &match_config) {
        group.bench_function("report_summary", |b| {
            b.iter(|| report_summary(black_box(&report)))
        });
    }
    group.bench_function("find_best_matches", |b| {
        b.iter(|| {
            find_best_matches(
                black_box(Nakshatra::Ashlesha),
                Rashi::Karka,
                4,
                Gender::Female,
                SortKey::Raw,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, facade_bench);
criterion_main!(benches);
