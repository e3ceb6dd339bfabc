use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual tuning for the rendered chart.
///
/// Defaults follow the reference light theme: thin light-gray guides under
/// 2px data lines, muted gray x labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub line_stroke_width: f64,
    pub guide_stroke_width: f64,
    pub guide_color: Color,
    pub label_color: Color,
    pub label_font_size_px: f64,
    pub label_margin_px: f64,
    /// Widest label the x axis must accommodate; drives how many labels a
    /// given surface width can fit without overlap.
    pub x_label_max_width_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_stroke_width: 2.0,
            guide_stroke_width: 1.0,
            guide_color: Color::rgb(241.0 / 255.0, 241.0 / 255.0, 241.0 / 255.0),
            label_color: Color::rgb(150.0 / 255.0, 162.0 / 255.0, 170.0 / 255.0),
            label_font_size_px: 12.0,
            label_margin_px: 4.0,
            x_label_max_width_px: 50.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.line_stroke_width.is_finite() || self.line_stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.guide_stroke_width.is_finite() || self.guide_stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "guide stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_margin_px.is_finite() || self.label_margin_px < 0.0 {
            return Err(ChartError::InvalidData(
                "label margin must be finite and >= 0".to_owned(),
            ));
        }
        if !self.x_label_max_width_px.is_finite() || self.x_label_max_width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "x label max width must be finite and > 0".to_owned(),
            ));
        }
        self.guide_color.validate()?;
        self.label_color.validate()?;
        Ok(self)
    }
}
