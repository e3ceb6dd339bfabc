use linechart_rs::core::{active_level, label_max_level, labels};

#[test]
fn first_label_is_always_eligible() {
    assert_eq!(label_max_level(0), u64::MAX);
}

#[test]
fn max_level_is_largest_dividing_power_of_two() {
    assert_eq!(label_max_level(1), 1);
    assert_eq!(label_max_level(2), 2);
    assert_eq!(label_max_level(6), 2);
    assert_eq!(label_max_level(8), 8);
    assert_eq!(label_max_level(12), 4);
    assert_eq!(label_max_level(1024), 1024);
    assert_eq!(label_max_level(1023), 1);
}

#[test]
fn narrow_windows_show_every_label() {
    // Anything below 2 * min_label_count fits without thinning.
    assert_eq!(active_level(2, 3), 1);
    assert_eq!(active_level(5, 3), 1);

    let boundary = 2 * 3 - 1;
    assert_eq!(active_level(boundary, 3), 1);
}

#[test]
fn wide_windows_use_largest_fitting_power_of_two() {
    // (10 - 2) / (3 - 1) = 4, already a power of two.
    assert_eq!(active_level(10, 3), 4);

    // (11 - 2) / (3 - 1) = 4.5, still level 4.
    assert_eq!(active_level(11, 3), 4);

    // (6 - 2) / (3 - 1) = 2.
    assert_eq!(active_level(6, 3), 2);

    // (1000 - 2) / (2 - 1) = 998 -> 512.
    assert_eq!(active_level(1000, 2), 512);
}

#[test]
fn min_label_count_floors_and_clamps() {
    assert_eq!(labels::min_label_count(320, 50.0), 6);
    assert_eq!(labels::min_label_count(349, 50.0), 6);
    assert_eq!(labels::min_label_count(99, 50.0), 2);
    assert_eq!(labels::min_label_count(1, 50.0), 2);
}

#[test]
fn default_time_label_formats_month_and_day() {
    // 2019-04-05T00:00:00Z in milliseconds.
    assert_eq!(labels::default_time_label(1_554_422_400_000), "Apr 5");
}
