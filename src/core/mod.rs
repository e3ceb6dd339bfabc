pub mod chart;
pub mod geometry;
pub mod guides;
pub mod labels;
pub mod range;
pub mod transform;
pub mod types;

pub use chart::{Chart, Line, Rgb};
pub use geometry::{Polyline, build_polylines, project_polylines};
pub use guides::{GUIDE_COUNT, GuideSet};
pub use labels::{XLabel, active_level, build_labels, label_max_level, min_label_count};
pub use range::{IndexRange, ValueRange};
pub use transform::AffineTransform;
pub use types::{PlotPoint, Viewport};
