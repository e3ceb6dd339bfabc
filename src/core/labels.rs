use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::core::Chart;

/// Precomputed x-axis label: display text plus the coarsest visibility
/// level at which it is still shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XLabel {
    pub title: String,
    pub max_level: u64,
}

impl XLabel {
    /// Levels are powers of two; a label survives every level up to and
    /// including its own, so coarser label sets nest inside finer ones.
    #[must_use]
    pub fn is_visible_at(&self, level: u64) -> bool {
        self.max_level >= level
    }
}

/// Maximum visibility level of the label at `index`.
///
/// The first label is always eligible. For every other index this is the
/// largest power of two that evenly divides it, i.e. `1 << trailing zero
/// bits`: 8 for index 8, 4 for index 12, 1 for any odd index.
#[must_use]
pub fn label_max_level(index: usize) -> u64 {
    if index == 0 {
        return u64::MAX;
    }
    1 << index.trailing_zeros()
}

/// Builds one label per x sample using the caller-supplied formatter.
#[must_use]
pub fn build_labels<F>(chart: &Chart, formatter: F) -> Vec<XLabel>
where
    F: Fn(i64) -> String,
{
    chart
        .x()
        .iter()
        .enumerate()
        .map(|(index, &timestamp)| XLabel {
            title: formatter(timestamp),
            max_level: label_max_level(index),
        })
        .collect()
}

/// Selects the label level for a visible window of `x_size` samples.
///
/// Without thinning, between `min_label_count` and `2 * min_label_count - 1`
/// labels fit. Wider windows show only every `2^k`-th label, where the
/// returned level is the largest power of two not exceeding the size of the
/// widest interval that still keeps `min_label_count` labels on screen.
///
/// `min_label_count` must be at least 2.
#[must_use]
pub fn active_level(x_size: usize, min_label_count: usize) -> u64 {
    debug_assert!(min_label_count >= 2);

    if x_size < 2 * min_label_count {
        return 1;
    }

    let interval_size = ((x_size - 2) / (min_label_count - 1)) as u64;
    1 << interval_size.ilog2()
}

/// Minimum number of labels that should fit the given width.
///
/// E.g. width 320 and max label width 50 give 6. Never less than 2, so the
/// window always keeps both edge labels.
#[must_use]
pub fn min_label_count(width_px: u32, max_label_width_px: f64) -> usize {
    let fitting = (f64::from(width_px) / max_label_width_px) as usize;
    fitting.max(2)
}

/// Default label formatter: millisecond timestamp to `"Apr 5"` style text.
#[must_use]
pub fn default_time_label(timestamp_millis: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_millis) {
        Some(datetime) => datetime.format("%b %-d").to_string(),
        None => timestamp_millis.to_string(),
    }
}
