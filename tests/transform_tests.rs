use linechart_rs::core::{AffineTransform, IndexRange, PlotPoint, ValueRange, Viewport};

#[test]
fn full_range_maps_edges_to_surface_edges() {
    let x_range = IndexRange::new(0, 50);
    let y_range = ValueRange::new(0, 120);
    let viewport = Viewport::new(300, 100);

    let transform = AffineTransform::for_view(x_range, y_range, viewport).expect("transform");

    let left = transform.map(PlotPoint::new(0.0, 0.0));
    assert!((left.x - 0.0).abs() <= 1e-9);

    let right = transform.map(PlotPoint::new(49.0, 0.0));
    assert!((right.x - 300.0).abs() <= 1e-9);
}

#[test]
fn vertical_flip_puts_value_origin_at_bottom() {
    let x_range = IndexRange::new(0, 50);
    let y_range = ValueRange::new(0, 120);
    let viewport = Viewport::new(300, 100);

    let transform = AffineTransform::for_view(x_range, y_range, viewport).expect("transform");

    // The value origin lands on the bottom edge, the top of the span on the
    // top edge (one scale unit below y_range.to under the index-style scale).
    assert!((transform.map_y(0.0) - 100.0).abs() <= 1e-9);
    assert!((transform.map_y(119.0) - 0.0).abs() <= 1e-9);

    // Larger values are higher on screen, i.e. smaller pixel y.
    assert!(transform.map_y(60.0) < transform.map_y(30.0));
}

#[test]
fn panned_range_aligns_window_start_with_left_edge() {
    let x_range = IndexRange::new(10, 30);
    let y_range = ValueRange::new(0, 100);
    let viewport = Viewport::new(400, 200);

    let transform = AffineTransform::for_view(x_range, y_range, viewport).expect("transform");

    let window_start = transform.map(PlotPoint::new(10.0, 0.0));
    assert!((window_start.x - 0.0).abs() <= 1e-9);

    let window_end = transform.map(PlotPoint::new(29.0, 0.0));
    assert!((window_end.x - 400.0).abs() <= 1e-9);

    // Points before the window project to negative pixel x.
    let off_screen = transform.map(PlotPoint::new(0.0, 0.0));
    assert!(off_screen.x < 0.0);
}

#[test]
fn unmeasured_surface_produces_no_transform() {
    let x_range = IndexRange::new(0, 50);
    let y_range = ValueRange::new(0, 120);

    assert!(AffineTransform::for_view(x_range, y_range, Viewport::new(0, 100)).is_none());
    assert!(AffineTransform::for_view(x_range, y_range, Viewport::new(300, 0)).is_none());
}

#[test]
fn degenerate_ranges_produce_no_transform() {
    let viewport = Viewport::new(300, 100);

    assert!(
        AffineTransform::for_view(IndexRange::new(5, 6), ValueRange::new(0, 120), viewport)
            .is_none()
    );
    assert!(
        AffineTransform::for_view(IndexRange::new(0, 50), ValueRange::new(0, 1), viewport)
            .is_none()
    );
}

#[test]
fn identical_inputs_build_identical_transforms() {
    let x_range = IndexRange::new(3, 40);
    let y_range = ValueRange::new(0, 77);
    let viewport = Viewport::new(512, 384);

    let first = AffineTransform::for_view(x_range, y_range, viewport).expect("transform");
    let second = AffineTransform::for_view(x_range, y_range, viewport).expect("transform");
    assert_eq!(first, second);

    let point = PlotPoint::new(17.0, 33.0);
    assert_eq!(first.map(point), second.map(point));
}

#[test]
fn composition_order_is_scale_flip_translate() {
    // Building the same transform by hand must match `for_view`.
    let x_range = IndexRange::new(4, 14);
    let y_range = ValueRange::new(0, 11);
    let viewport = Viewport::new(90, 50);

    let scale_x = 90.0 / 9.0;
    let scale_y = 50.0 / 10.0;
    let manual = AffineTransform::from_scale(scale_x, scale_y)
        .then_scale(1.0, -1.0)
        .then_translate(-4.0 * scale_x, 50.0);

    let built = AffineTransform::for_view(x_range, y_range, viewport).expect("transform");
    assert_eq!(manual, built);
}
