use serde::{Deserialize, Serialize};

/// Half-open window `[from, to)` of sample indices along the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub from: usize,
    pub to: usize,
}

impl IndexRange {
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub const fn size(self) -> usize {
        self.to - self.from
    }
}

/// Visible span of raw sample values along the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub from: i64,
    pub to: i64,
}

impl ValueRange {
    #[must_use]
    pub const fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub const fn size(self) -> i64 {
        self.to - self.from
    }
}
