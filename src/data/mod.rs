//! Chart description loading and parsing.
//!
//! Everything structural is validated here so the core only ever sees
//! well-formed charts. Loading may run on any thread; the resulting
//! `Chart` values are plain immutable data and can be handed to the
//! rendering thread by the caller.

mod chart_json;

pub use chart_json::ChartJson;

use std::path::Path;

use tracing::debug;

use crate::core::Chart;
use crate::error::{ChartError, ChartResult};

/// Parses a chart description document holding one or more charts.
pub fn parse_charts(json: &str) -> ChartResult<Vec<Chart>> {
    let raw: Vec<ChartJson> = serde_json::from_str(json)
        .map_err(|err| ChartError::InvalidData(format!("chart description: {err}")))?;

    let charts = raw
        .iter()
        .map(ChartJson::convert)
        .collect::<ChartResult<Vec<_>>>()?;

    debug!(charts = charts.len(), "parsed chart description");
    Ok(charts)
}

/// Reads and parses a chart description file.
pub fn load_charts(path: &Path) -> ChartResult<Vec<Chart>> {
    let json = std::fs::read_to_string(path).map_err(|err| {
        ChartError::InvalidData(format!("failed to read `{}`: {err}", path.display()))
    })?;
    parse_charts(&json)
}
