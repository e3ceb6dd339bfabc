use serde::{Deserialize, Serialize};

use crate::core::{AffineTransform, Chart, PlotPoint, Rgb};

/// Data-space polyline of one chart line: point i = (i, y\[i\]).
///
/// The x coordinate is the sample index, not the timestamp; timestamps only
/// matter for label text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub name: String,
    pub color: Rgb,
    pub points: Vec<PlotPoint>,
}

/// Builds one data-space polyline per chart line.
///
/// Pure function of the chart; projection into screen space happens
/// separately so both can be exercised and cached independently.
#[must_use]
pub fn build_polylines(chart: &Chart) -> Vec<Polyline> {
    chart
        .lines()
        .iter()
        .map(|line| Polyline {
            name: line.name.clone(),
            color: line.color,
            points: line
                .y()
                .iter()
                .enumerate()
                .map(|(index, &value)| PlotPoint::new(index as f64, value as f64))
                .collect(),
        })
        .collect()
}

/// Projects every polyline point-by-point through the given transform.
///
/// Always a full recompute: scale changes non-locally with the visible
/// range, so no partial state survives a range or surface change.
#[must_use]
pub fn project_polylines(polylines: &[Polyline], transform: AffineTransform) -> Vec<Vec<PlotPoint>> {
    #[cfg(feature = "parallel-projection")]
    {
        use rayon::prelude::*;
        polylines
            .par_iter()
            .map(|polyline| project_points(&polyline.points, transform))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        polylines
            .iter()
            .map(|polyline| project_points(&polyline.points, transform))
            .collect()
    }
}

fn project_points(points: &[PlotPoint], transform: AffineTransform) -> Vec<PlotPoint> {
    points.iter().map(|&point| transform.map(point)).collect()
}
