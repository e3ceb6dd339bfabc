use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ValueRange;

/// Number of horizontal y-axis guide lines.
pub const GUIDE_COUNT: usize = 6;

/// Quantized y-axis guide values for the current value range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideSet {
    values: SmallVec<[i64; GUIDE_COUNT]>,
}

impl GuideSet {
    /// Computes `GUIDE_COUNT` evenly spaced guide values spanning the range
    /// inclusive of both ends.
    ///
    /// Integer division keeps guides on whole sample values; the first
    /// guide equals `range.from` and the last equals `range.to`.
    #[must_use]
    pub fn for_range(range: ValueRange) -> Self {
        let values = (0..GUIDE_COUNT as i64)
            .map(|step| range.from + range.size() * step / (GUIDE_COUNT as i64 - 1))
            .collect();
        Self { values }
    }

    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
