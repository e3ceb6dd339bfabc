use tracing::{debug, trace};

use crate::api::{ChartStyle, GuideLine, PlacedLabel, ScreenPolyline, ViewSnapshot};
use crate::core::{
    AffineTransform, Chart, GUIDE_COUNT, GuideSet, IndexRange, PlotPoint, Polyline, ValueRange,
    Viewport, XLabel, active_level, build_labels, build_polylines, min_label_count,
    project_polylines,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, PolylinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

/// Chart plus everything derived from it exactly once.
struct ChartModel {
    chart: Chart,
    labels: Vec<XLabel>,
    polylines: Vec<Polyline>,
    x_range: IndexRange,
    y_range: ValueRange,
    guides: GuideSet,
}

/// Single-threaded chart view state machine.
///
/// Owns the visible window and the measured surface size, and recomputes an
/// immutable [`ViewSnapshot`] whenever either changes. The snapshot drives
/// [`RenderFrame`] building; while the surface is unmeasured or a window is
/// degenerate, recomputes silently defer and the previous snapshot stays
/// valid.
pub struct ChartView {
    style: ChartStyle,
    viewport: Viewport,
    min_label_count: usize,
    model: Option<ChartModel>,
    snapshot: Option<ViewSnapshot>,
}

impl Default for ChartView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            style: ChartStyle::default(),
            viewport: Viewport::new(0, 0),
            min_label_count: 0,
            model: None,
            snapshot: None,
        }
    }

    pub fn with_style(style: ChartStyle) -> ChartResult<Self> {
        Ok(Self {
            style: style.validate()?,
            ..Self::new()
        })
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    /// Installs a chart and shows its entire range.
    ///
    /// Labels and data-space polylines are built once here; every later
    /// range or surface change only re-projects them.
    pub fn set_chart<F>(&mut self, chart: Chart, label_formatter: F) -> ChartResult<()>
    where
        F: Fn(i64) -> String,
    {
        let sample_count = chart.len();
        debug!(
            samples = sample_count,
            lines = chart.lines().len(),
            "chart installed"
        );

        let labels = build_labels(&chart, label_formatter);
        let polylines = build_polylines(&chart);

        self.snapshot = None;
        self.model = Some(ChartModel {
            chart,
            labels,
            polylines,
            x_range: IndexRange::new(0, 0),
            y_range: ValueRange::new(0, 0),
            guides: GuideSet::for_range(ValueRange::new(0, 0)),
        });

        self.show_range(0, sample_count)
    }

    /// Sets the visible x-index window `[from, to)`.
    ///
    /// The y range is derived from the maximum across all lines over the
    /// full series, so the vertical scale stays stable while panning. Guide
    /// values are recomputed unconditionally; the screen-space snapshot is
    /// recomputed once the surface has been measured.
    pub fn show_range(&mut self, from: usize, to: usize) -> ChartResult<()> {
        let model = self.model.as_mut().ok_or_else(|| {
            ChartError::InvalidData("a chart must be set before showing a range".to_owned())
        })?;

        let len = model.chart.len();
        if from >= to || to > len {
            return Err(ChartError::InvalidRange { from, to, len });
        }

        model.x_range = IndexRange::new(from, to);

        let mut y_range = ValueRange::new(0, model.chart.max_value());
        // Not enough distinct values to separate the guides; widen the span.
        if y_range.size() < GUIDE_COUNT as i64 {
            y_range.to = y_range.from + GUIDE_COUNT as i64;
        }
        model.y_range = y_range;
        model.guides = GuideSet::for_range(y_range);

        trace!(from, to, y_max = y_range.to, "visible range changed");
        self.recompute();
        Ok(())
    }

    /// Supplies the current surface pixel size.
    ///
    /// A zero-sized viewport means "not yet measured": the call is a no-op
    /// and prior state stays untouched.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if !viewport.is_valid() {
            trace!(
                width = viewport.width,
                height = viewport.height,
                "ignoring unmeasured viewport"
            );
            return;
        }

        self.viewport = viewport;
        self.min_label_count =
            min_label_count(viewport.width, self.style.x_label_max_width_px);
        self.recompute();
    }

    /// Rebuilds the snapshot from current ranges and surface size.
    ///
    /// Defers (keeping the previous snapshot) until a chart is set, the
    /// surface is measured, and both ranges span more than one unit.
    fn recompute(&mut self) {
        let Some(model) = self.model.as_ref() else {
            return;
        };
        if self.min_label_count < 2 {
            return;
        }
        let Some(transform) =
            AffineTransform::for_view(model.x_range, model.y_range, self.viewport)
        else {
            return;
        };

        let label_level = active_level(model.x_range.size(), self.min_label_count);

        let projected = project_polylines(&model.polylines, transform);
        let polylines = model
            .polylines
            .iter()
            .zip(projected)
            .map(|(polyline, points)| ScreenPolyline {
                name: polyline.name.clone(),
                color: polyline.color,
                points,
            })
            .collect();

        let guides = model
            .guides
            .values()
            .iter()
            .map(|&value| GuideLine {
                value,
                screen_y: transform.map_y(value as f64),
            })
            .collect();

        let labels = (model.x_range.from..model.x_range.to)
            .filter(|&index| model.labels[index].is_visible_at(label_level))
            .map(|index| PlacedLabel {
                index,
                title: model.labels[index].title.clone(),
                screen_x: transform.map(PlotPoint::new(index as f64, 0.0)).x,
            })
            .collect();

        trace!(label_level, "snapshot recomputed");
        self.snapshot = Some(ViewSnapshot {
            viewport: self.viewport,
            x_range: model.x_range,
            y_range: model.y_range,
            transform,
            label_level,
            polylines,
            guides,
            labels,
        });
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&ViewSnapshot> {
        self.snapshot.as_ref()
    }

    /// Serializes the latest snapshot for regression dumps and tooling.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot.as_ref().ok_or_else(|| {
            ChartError::InvalidData("no snapshot has been computed yet".to_owned())
        })?;
        serde_json::to_string_pretty(snapshot)
            .map_err(|err| ChartError::InvalidData(format!("snapshot serialization: {err}")))
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn min_label_count(&self) -> usize {
        self.min_label_count
    }

    #[must_use]
    pub fn x_range(&self) -> Option<IndexRange> {
        self.model.as_ref().map(|model| model.x_range)
    }

    #[must_use]
    pub fn y_range(&self) -> Option<ValueRange> {
        self.model.as_ref().map(|model| model.y_range)
    }

    #[must_use]
    pub fn guides(&self) -> Option<&GuideSet> {
        self.model.as_ref().map(|model| &model.guides)
    }

    /// Builds the draw scene for the latest snapshot: guides below, data
    /// polylines above, surviving x labels along the bottom edge.
    #[must_use]
    pub fn build_frame(&self) -> Option<RenderFrame> {
        let snapshot = self.snapshot.as_ref()?;
        let mut frame = RenderFrame::new(snapshot.viewport);

        let width = f64::from(snapshot.viewport.width);
        for guide in &snapshot.guides {
            frame = frame.with_guide_line(LinePrimitive::new(
                0.0,
                guide.screen_y,
                width,
                guide.screen_y,
                self.style.guide_stroke_width,
                self.style.guide_color,
            ));
        }

        for polyline in &snapshot.polylines {
            frame = frame.with_polyline(PolylinePrimitive::new(
                polyline.points.clone(),
                self.style.line_stroke_width,
                Color::from_rgb8(polyline.color),
            ));
        }

        let label_y = f64::from(snapshot.viewport.height)
            - self.style.label_font_size_px
            - self.style.label_margin_px;
        for label in &snapshot.labels {
            frame = frame.with_text(TextPrimitive::new(
                label.title.clone(),
                label.screen_x,
                label_y,
                self.style.label_font_size_px,
                self.style.label_color,
                TextHAlign::Center,
            ));
        }

        Some(frame)
    }

    /// Draws the latest snapshot; a no-op before the first one exists.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        match self.build_frame() {
            Some(frame) => renderer.render(&frame),
            None => Ok(()),
        }
    }
}
