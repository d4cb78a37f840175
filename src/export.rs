//! Dataset export
//!
//! Dumps a dataset as CSV (one row per record) or as a JSON array of flat
//! objects. Absent or non-finite values become empty cells / `null`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::chart::Dataset;
use crate::error::{RenderError, RenderResult};

/// Column holding a pie slice color, written when any record carries one
const FILL_COLUMN: &str = "fill";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Export `series_keys` columns of a dataset in the given format
pub fn export_dataset<S: AsRef<str>>(
    dataset: &Dataset,
    series_keys: &[S],
    format: ExportFormat,
) -> RenderResult<String> {
    tracing::debug!(
        records = dataset.len(),
        columns = series_keys.len(),
        format = %format,
        "exporting dataset"
    );

    match format {
        ExportFormat::Csv => to_csv(dataset, series_keys),
        ExportFormat::Json => to_json(dataset, series_keys),
    }
}

fn has_fill(dataset: &Dataset) -> bool {
    dataset.records.iter().any(|r| r.fill.is_some())
}

fn to_csv<S: AsRef<str>>(dataset: &Dataset, series_keys: &[S]) -> RenderResult<String> {
    let with_fill = has_fill(dataset);
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    let mut header = vec![dataset.category_key.as_str()];
    header.extend(series_keys.iter().map(|k| k.as_ref()));
    if with_fill {
        header.push(FILL_COLUMN);
    }
    writer.write_record(&header)?;

    for record in &dataset.records {
        let mut row = vec![record.category.clone()];
        row.extend(
            series_keys
                .iter()
                .map(|k| record.get(k.as_ref()).map(|v| v.to_string()).unwrap_or_default()),
        );
        if with_fill {
            row.push(record.fill.map(|c| c.to_hex()).unwrap_or_default());
        }
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RenderError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| RenderError::Csv(e.to_string()))
}

fn to_json<S: AsRef<str>>(dataset: &Dataset, series_keys: &[S]) -> RenderResult<String> {
    let with_fill = has_fill(dataset);
    let rows: Vec<Value> = dataset
        .records
        .iter()
        .map(|record| {
            let mut row = Map::new();
            row.insert(
                dataset.category_key.clone(),
                Value::String(record.category.clone()),
            );
            for key in series_keys {
                let value = record.get(key.as_ref()).map(Value::from).unwrap_or(Value::Null);
                row.insert(key.as_ref().to_string(), value);
            }
            if with_fill {
                let fill = record.fill.map(|c| Value::String(c.to_hex())).unwrap_or(Value::Null);
                row.insert(FILL_COLUMN.to_string(), fill);
            }
            Value::Object(row)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}
