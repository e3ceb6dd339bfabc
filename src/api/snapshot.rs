use serde::{Deserialize, Serialize};

use crate::core::{AffineTransform, IndexRange, PlotPoint, Rgb, ValueRange, Viewport};

/// One chart line projected into pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenPolyline {
    pub name: String,
    pub color: Rgb,
    pub points: Vec<PlotPoint>,
}

/// One horizontal guide: its data-space value and its pixel row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub value: i64,
    pub screen_y: f64,
}

/// One x label that survived decimation at the current level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLabel {
    pub index: usize,
    pub title: String,
    pub screen_x: f64,
}

/// Immutable projection of one visible window onto one measured surface.
///
/// Recomputed and returned fresh on every range or surface change; holders
/// of an old snapshot keep a consistent (if stale) view, and a recompute
/// that cannot run leaves the previous snapshot in place. Serializable so
/// regression tests and tooling can diff exact geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub viewport: Viewport,
    pub x_range: IndexRange,
    pub y_range: ValueRange,
    pub transform: AffineTransform,
    /// Active label visibility level for this window, a power of two.
    pub label_level: u64,
    pub polylines: Vec<ScreenPolyline>,
    pub guides: Vec<GuideLine>,
    pub labels: Vec<PlacedLabel>,
}
