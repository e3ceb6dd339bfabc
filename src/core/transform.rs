use serde::{Deserialize, Serialize};

use crate::core::{IndexRange, PlotPoint, ValueRange, Viewport};

/// Composed axis-aligned affine transform from data space to screen space.
///
/// The chart pipeline never rotates, so the matrix reduces to per-axis
/// scale plus translation. Composition order still matters and is kept
/// explicit: the flip must be applied after the scale and the translation
/// after the flip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    scale_x: f64,
    scale_y: f64,
    translate_x: f64,
    translate_y: f64,
}

impl AffineTransform {
    #[must_use]
    pub fn from_scale(scale_x: f64, scale_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }

    /// Applies an additional scale after the current transform.
    #[must_use]
    pub fn then_scale(self, factor_x: f64, factor_y: f64) -> Self {
        Self {
            scale_x: self.scale_x * factor_x,
            scale_y: self.scale_y * factor_y,
            translate_x: self.translate_x * factor_x,
            translate_y: self.translate_y * factor_y,
        }
    }

    /// Applies an additional translation after the current transform.
    #[must_use]
    pub fn then_translate(self, delta_x: f64, delta_y: f64) -> Self {
        Self {
            translate_x: self.translate_x + delta_x,
            translate_y: self.translate_y + delta_y,
            ..self
        }
    }

    /// Builds the data→screen transform for one visible window.
    ///
    /// Scale maps one index step to `W / (xSize - 1)` pixels and one value
    /// step to `H / (ySize - 1)` pixels, the flip turns value-up into
    /// pixel-down, and the translation aligns `x_range.from` with screen
    /// x = 0 and the value origin with the bottom edge.
    ///
    /// Returns `None` while the surface is unmeasured or a range is too
    /// small to span the surface; callers keep their previous output.
    #[must_use]
    pub fn for_view(
        x_range: IndexRange,
        y_range: ValueRange,
        viewport: Viewport,
    ) -> Option<Self> {
        if !viewport.is_valid() || x_range.size() <= 1 || y_range.size() <= 1 {
            return None;
        }

        let scale_x = f64::from(viewport.width) / (x_range.size() - 1) as f64;
        let scale_y = f64::from(viewport.height) / (y_range.size() - 1) as f64;
        let left = -(x_range.from as f64) * scale_x;

        Some(
            Self::from_scale(scale_x, scale_y)
                .then_scale(1.0, -1.0)
                .then_translate(left, f64::from(viewport.height)),
        )
    }

    #[must_use]
    pub fn map(self, point: PlotPoint) -> PlotPoint {
        PlotPoint::new(
            point.x * self.scale_x + self.translate_x,
            point.y * self.scale_y + self.translate_y,
        )
    }

    /// Maps a data-space y value; guide lines only need the y component.
    #[must_use]
    pub fn map_y(self, y: f64) -> f64 {
        y * self.scale_y + self.translate_y
    }
}
