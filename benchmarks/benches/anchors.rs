use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maplibre_anchors::{coords::GeometryCoordinates, AnchorSettings, LabelBox};

/// A winding road crossing the whole tile.
fn road() -> GeometryCoordinates {
    let points: Vec<(i16, i16)> = (0..512)
        .map(|i| {
            let x = i * 16;
            let y = 4096.0 + 1500.0 * (f64::from(i) / 40.0).sin();
            (x as i16, y as i16)
        })
        .collect();
    GeometryCoordinates::from_points(&points)
}

fn bench_get_anchors(c: &mut Criterion) {
    let line = road();
    let label = LabelBox::new(-60.0, 60.0, -12.0, 12.0);

    c.bench_function("get_anchors", |b| {
        let settings = AnchorSettings::default().with_spacing(250.0);
        b.iter(|| settings.get_anchors(black_box(&line), black_box(&label)))
    });

    c.bench_function("get_anchors_overscaled", |b| {
        let settings = AnchorSettings::default().with_spacing(250.0).overscaled(4.0);
        b.iter(|| settings.get_anchors(black_box(&line), black_box(&label)))
    });
}

fn bench_get_center_anchor(c: &mut Criterion) {
    let line = road();
    let label = LabelBox::new(-60.0, 60.0, 0.0, 0.0);
    let settings = AnchorSettings::default();

    c.bench_function("get_center_anchor", |b| {
        b.iter(|| settings.get_center_anchor(black_box(&line), black_box(&label)))
    });
}

criterion_group!(benches, bench_get_anchors, bench_get_center_anchor);
criterion_main!(benches);
