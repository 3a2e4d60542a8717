use criterion::{Criterion, black_box, criterion_group, criterion_main};
use milan_vedic_base::{
    AyanamshaModel, KujaInputs, MatchParty, Nakshatra, NakshatraPlacement, Rashi,
    analyze_kuja_dosha, ayanamsha_deg, current_dasha, guna_milan, navamsa_rashi,
};

fn placement_bench(c: &mut Criterion) {
    let lon = 303.114;
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("placement");
    group.bench_function("ayanamsha_linear", |b| {
        b.iter(|| ayanamsha_deg(AyanamshaModel::Linear, black_box(jd)))
    });
    group.bench_function("nakshatra_placement", |b| {
        b.iter(|| NakshatraPlacement::from_longitude(black_box(lon)))
    });
    group.bench_function("navamsa_rashi", |b| {
        b.iter(|| navamsa_rashi(black_box(lon)))
    });
    group.finish();
}

fn matching_bench(c: &mut Criterion) {
    let boy = MatchParty::new(Nakshatra::Krittika, Rashi::Mesha).with_navamsa(Rashi::Dhanu);
    let girl = MatchParty::new(Nakshatra::Hasta, Rashi::Kanya).with_navamsa(Rashi::Makara);

    let mut group = c.benchmark_group("matching");
    group.bench_function("guna_milan", |b| {
        b.iter(|| guna_milan(black_box(&boy), black_box(&girl)))
    });
    group.bench_function("kuja_dosha", |b| {
        let inputs = KujaInputs {
            mars: 185.0,
            ascendant: Some(5.0),
            moon: 95.0,
            venus: 250.0,
        };
        b.iter(|| analyze_kuja_dosha(black_box(&inputs)))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth = 2_447_892.520_833;
    let query = 2_461_000.5;

    let mut group = c.benchmark_group("dasha");
    group.bench_function("current_dasha", |b| {
        b.iter(|| current_dasha(black_box(birth), black_box(303.114), black_box(query)))
    });
    group.finish();
}

criterion_group!(benches, placement_bench, matching_bench, dasha_bench);
criterion_main!(benches);
