mod snapshot;
mod style;
mod view;

pub use snapshot::{GuideLine, PlacedLabel, ScreenPolyline, ViewSnapshot};
pub use style::ChartStyle;
pub use view::ChartView;
