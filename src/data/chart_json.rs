use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::core::{Chart, Line, Rgb};
use crate::error::{ChartError, ChartResult};

/// Column-oriented chart description document.
///
/// `columns` holds one array per column, each starting with its string id
/// followed by numeric values. `types` assigns each id either `"x"` or
/// `"line"`; `names` and `colors` describe the line columns. The maps are
/// order-preserving so lines keep their document order.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartJson {
    columns: Vec<Vec<Value>>,
    types: IndexMap<String, String>,
    names: IndexMap<String, String>,
    colors: IndexMap<String, String>,
}

impl ChartJson {
    /// Converts the raw document into a validated `Chart`.
    pub fn convert(&self) -> ChartResult<Chart> {
        let x_id = self
            .types
            .iter()
            .find(|(_, kind)| kind.as_str() == "x")
            .map(|(id, _)| id.as_str())
            .ok_or_else(|| {
                ChartError::InvalidData("chart description has no `x` column".to_owned())
            })?;

        let line_ids: Vec<&str> = self
            .types
            .iter()
            .filter(|(_, kind)| kind.as_str() == "line")
            .map(|(id, _)| id.as_str())
            .collect();
        if line_ids.is_empty() {
            return Err(ChartError::InvalidData(
                "chart description has no `line` columns".to_owned(),
            ));
        }

        let x = self.column_values(x_id)?;

        let mut lines = Vec::with_capacity(line_ids.len());
        for id in line_ids {
            let name = self.names.get(id).ok_or_else(|| {
                ChartError::InvalidData(format!("column `{id}` has no display name"))
            })?;
            let color = self.colors.get(id).ok_or_else(|| {
                ChartError::InvalidData(format!("column `{id}` has no color"))
            })?;

            lines.push(Line::new(
                name.clone(),
                Rgb::from_hex_str(color)?,
                self.column_values(id)?,
            ));
        }

        Chart::new(x, lines)
    }

    fn column_values(&self, id: &str) -> ChartResult<Vec<i64>> {
        let column = self
            .columns
            .iter()
            .find(|column| {
                column
                    .first()
                    .and_then(Value::as_str)
                    .is_some_and(|first| first == id)
            })
            .ok_or_else(|| {
                ChartError::InvalidData(format!("column `{id}` is missing from `columns`"))
            })?;

        column[1..]
            .iter()
            .map(|value| {
                value
                    .as_i64()
                    .or_else(|| value.as_f64().map(|float| float as i64))
                    .ok_or_else(|| {
                        ChartError::InvalidData(format!(
                            "column `{id}` contains a non-numeric value"
                        ))
                    })
            })
            .collect()
    }
}
