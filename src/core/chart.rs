use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// 8-bit RGB display color of one chart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses a `#RRGGBB` color string as used by chart description files.
    pub fn from_hex_str(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').ok_or_else(|| {
            ChartError::InvalidData(format!("color `{hex}` must start with `#`"))
        })?;

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidData(format!(
                "color `{hex}` must be of the form #RRGGBB"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| {
                ChartError::InvalidData(format!("color `{hex}` has a non-hex channel"))
            })
        };

        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }
}

/// One value series of a chart, index-aligned with the chart's x axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub name: String,
    pub color: Rgb,
    y: Vec<i64>,
}

impl Line {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Rgb, y: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            color,
            y,
        }
    }

    #[must_use]
    pub fn y(&self) -> &[i64] {
        &self.y
    }

    #[must_use]
    pub fn max_value(&self) -> i64 {
        self.y.iter().copied().max().unwrap_or(0)
    }
}

/// Immutable chart description: ordered timestamps plus one or more value
/// series of the same length.
///
/// Validation happens once at construction; the rest of the engine assumes
/// a structurally valid chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    x: Vec<i64>,
    lines: Vec<Line>,
}

impl Chart {
    pub fn new(x: Vec<i64>, lines: Vec<Line>) -> ChartResult<Self> {
        if x.is_empty() {
            return Err(ChartError::InvalidData(
                "chart must contain at least one x value".to_owned(),
            ));
        }

        if !x.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(ChartError::InvalidData(
                "chart x values must be strictly increasing".to_owned(),
            ));
        }

        if lines.is_empty() {
            return Err(ChartError::InvalidData(
                "chart must contain at least one line".to_owned(),
            ));
        }

        for line in &lines {
            if line.y.len() != x.len() {
                return Err(ChartError::InvalidData(format!(
                    "line `{}` has {} values but chart has {} x values",
                    line.name,
                    line.y.len(),
                    x.len()
                )));
            }
        }

        Ok(Self { x, lines })
    }

    /// Number of samples along the x axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[must_use]
    pub fn x(&self) -> &[i64] {
        &self.x
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Maximum value across all lines over the full series.
    #[must_use]
    pub fn max_value(&self) -> i64 {
        self.lines
            .iter()
            .map(Line::max_value)
            .max()
            .unwrap_or(0)
    }
}
