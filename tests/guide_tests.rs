use linechart_rs::core::{GUIDE_COUNT, GuideSet, ValueRange};

#[test]
fn guide_set_always_has_six_values() {
    for to in [5, 6, 100, 143] {
        let guides = GuideSet::for_range(ValueRange::new(0, to));
        assert_eq!(guides.len(), GUIDE_COUNT);
    }
}

#[test]
fn guides_span_range_inclusive_of_both_ends() {
    let guides = GuideSet::for_range(ValueRange::new(0, 100));
    let values = guides.values();

    assert_eq!(values.first(), Some(&0));
    assert_eq!(values.last(), Some(&100));
}

#[test]
fn guides_are_monotonically_non_decreasing() {
    for to in [6, 9, 37, 1_000_003] {
        let guides = GuideSet::for_range(ValueRange::new(0, to));
        assert!(
            guides.values().windows(2).all(|pair| pair[0] <= pair[1]),
            "guides must not decrease for range 0..{to}"
        );
    }
}

#[test]
fn guides_quantize_to_whole_values() {
    // 0..9 does not divide evenly by 5 intervals; integer quantization
    // floors the interior guides.
    let guides = GuideSet::for_range(ValueRange::new(0, 9));
    assert_eq!(guides.values(), &[0, 1, 3, 5, 7, 9]);
}

#[test]
fn guides_honor_non_zero_range_start() {
    let guides = GuideSet::for_range(ValueRange::new(10, 20));
    assert_eq!(guides.values(), &[10, 12, 14, 16, 18, 20]);
}
