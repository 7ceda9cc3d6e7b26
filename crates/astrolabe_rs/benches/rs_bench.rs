use astrolabe_rs::{
    BodyObservation, ChartConfig, ChartRequest, EquatorialCoord, Instant, compute_body_positions,
    compute_house_chart,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn house_chart_bench(c: &mut Criterion) {
    let config = ChartConfig::default();
    let request = ChartRequest {
        date: "1984-08-18".into(),
        time: "08:03:00".into(),
        latitude: 28.078_611,
        longitude: -80.602_778,
        house_system: None,
    };

    c.bench_function("compute_house_chart", |b| {
        b.iter(|| compute_house_chart(black_box(&request), &config))
    });
}

fn body_positions_bench(c: &mut Criterion) {
    let config = ChartConfig::default();
    let instant = Instant::parse("2024-03-20", "12:00").unwrap();
    let observations: Vec<BodyObservation> = (0..10)
        .map(|i| BodyObservation {
            body: format!("body-{i}"),
            equatorial: EquatorialCoord::new(36.0 * i as f64, 10.0 - 2.0 * i as f64),
            instant,
        })
        .collect();

    c.bench_function("compute_body_positions_10", |b| {
        b.iter(|| compute_body_positions(black_box(&observations), &config))
    });
}

criterion_group!(benches, house_chart_bench, body_positions_bench);
criterion_main!(benches);
