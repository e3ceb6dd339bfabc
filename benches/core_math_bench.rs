use criterion::{Criterion, criterion_group, criterion_main};
use linechart_rs::ChartView;
use linechart_rs::core::{
    AffineTransform, Chart, IndexRange, Line, Rgb, ValueRange, Viewport, active_level,
    build_polylines, label_max_level, labels, project_polylines,
};
use std::hint::black_box;

fn ramp_chart(len: usize) -> Chart {
    let x: Vec<i64> = (0..len as i64).map(|i| i * 86_400_000).collect();
    let y: Vec<i64> = (0..len as i64).map(|i| i * 13 % 2_500).collect();
    Chart::new(x, vec![Line::new("main", Rgb::new(0x3d, 0xc2, 0x3f), y)]).expect("valid chart")
}

fn bench_label_level_hierarchy_100k(c: &mut Criterion) {
    c.bench_function("label_level_hierarchy_100k", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for index in 0..100_000usize {
                acc = acc.wrapping_add(label_max_level(black_box(index)));
            }
            acc
        })
    });
}

fn bench_active_level_search(c: &mut Criterion) {
    c.bench_function("active_level_search", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for x_size in 4..4_096usize {
                acc = acc.wrapping_add(active_level(black_box(x_size), black_box(6)));
            }
            acc
        })
    });
}

fn bench_polyline_projection_10k(c: &mut Criterion) {
    let chart = ramp_chart(10_000);
    let polylines = build_polylines(&chart);
    let transform = AffineTransform::for_view(
        IndexRange::new(0, 10_000),
        ValueRange::new(0, 2_500),
        Viewport::new(1_920, 1_080),
    )
    .expect("valid transform inputs");

    c.bench_function("polyline_projection_10k", |b| {
        b.iter(|| project_polylines(black_box(&polylines), black_box(transform)))
    });
}

fn bench_snapshot_json_2k(c: &mut Criterion) {
    let mut view = ChartView::new();
    view.set_chart(ramp_chart(2_000), labels::default_time_label)
        .expect("set chart");
    view.set_viewport(Viewport::new(1_600, 900));

    c.bench_function("snapshot_json_2k", |b| {
        b.iter(|| view.snapshot_json_pretty().expect("snapshot json"))
    });
}

criterion_group!(
    benches,
    bench_label_level_hierarchy_100k,
    bench_active_level_search,
    bench_polyline_projection_10k,
    bench_snapshot_json_2k
);
criterion_main!(benches);
