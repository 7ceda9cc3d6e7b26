use astrolabe_chart::{
    ChartAngles, HouseSystem, ascendant_deg, compute_house_cusps, ecliptic_to_zodiac,
    house_of_longitude, midheaven_deg,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn angles_bench(c: &mut Criterion) {
    let lst = 7.246;
    let lat = 28.0786;
    let eps = 23.4413;

    let mut group = c.benchmark_group("angles");
    group.bench_function("ascendant", |b| {
        b.iter(|| ascendant_deg(black_box(lst), black_box(lat), black_box(eps)))
    });
    group.bench_function("midheaven", |b| {
        b.iter(|| midheaven_deg(black_box(lst), black_box(eps)))
    });
    group.finish();
}

fn houses_bench(c: &mut Criterion) {
    let angles = ChartAngles::from_sidereal(7.246, 28.0786, 23.4413);

    let mut group = c.benchmark_group("houses");
    for &system in HouseSystem::all() {
        group.bench_function(system.name(), |b| {
            b.iter(|| compute_house_cusps(system, black_box(&angles)))
        });
    }
    let cusps = compute_house_cusps(HouseSystem::Placidus, &angles);
    group.bench_function("house_of_longitude", |b| {
        b.iter(|| house_of_longitude(&cusps, black_box(211.75)))
    });
    group.finish();
}

fn zodiac_bench(c: &mut Criterion) {
    c.bench_function("ecliptic_to_zodiac", |b| {
        b.iter(|| ecliptic_to_zodiac(black_box(123.456)))
    });
}

criterion_group!(benches, angles_bench, houses_bench, zodiac_bench);
criterion_main!(benches);
