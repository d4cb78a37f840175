//! Core data types for the chart rendering surface
//!
//! - `ChartKind`: which geometry to draw
//! - `Record`: one category tick with its named series values
//! - `Dataset`: an ordered, immutable sequence of records
//! - `Slice`: a named share of a whole, for pie charts

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::scene::Color;

/// Geometry selected for a render call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    /// Grouped, side-by-side bars per category
    Bar,
    /// One polyline or monotone curve per series
    Line,
    /// Series stacked bottom to top as filled bands
    AreaStacked,
    /// Circle partitioned into proportional sectors
    Pie,
}

impl ChartKind {
    /// Whether this kind draws x/y axes and a grid
    pub fn is_cartesian(self) -> bool {
        !matches!(self, ChartKind::Pie)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Line => write!(f, "line"),
            ChartKind::AreaStacked => write!(f, "area-stacked"),
            ChartKind::Pie => write!(f, "pie"),
        }
    }
}

/// One row of chart input: a category tick plus named numeric values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Category label shown on the x axis (e.g. "Jan", "Q1")
    pub category: String,
    /// Series values keyed by field name
    #[serde(default)]
    pub values: BTreeMap<String, f64>,
    /// Slice color when the record is drawn as a pie sector
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
}

impl Record {
    /// Create a record with no values
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            values: BTreeMap::new(),
            fill: None,
        }
    }

    /// Builder method: set a series value
    pub fn value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Builder method: set the slice fill
    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Value of a series, `None` when missing or not finite
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied().filter(|v| v.is_finite())
    }
}

/// A named, ordered sequence of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Name of the category field (e.g. "month")
    pub category_key: String,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(category_key: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            category_key: category_key.into(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every series key that appears in any record, sorted
    pub fn series_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .records
            .iter()
            .flat_map(|r| r.values.keys().cloned())
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

/// Field name under which a slice stores its value
pub const SLICE_VALUE_KEY: &str = "value";

/// One category's share of a whole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub name: String,
    pub value: f64,
    pub fill: Color,
}

impl Slice {
    pub fn new(name: impl Into<String>, value: f64, fill: Color) -> Self {
        Self {
            name: name.into(),
            value,
            fill,
        }
    }
}

impl From<Slice> for Record {
    fn from(slice: Slice) -> Self {
        Record::new(slice.name)
            .value(SLICE_VALUE_KEY, slice.value)
            .fill(slice.fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_get_ignores_non_finite() {
        let r = Record::new("Jan")
            .value("revenue", 4000.0)
            .value("bad", f64::NAN)
            .value("worse", f64::INFINITY);
        assert_eq!(r.get("revenue"), Some(4000.0));
        assert_eq!(r.get("bad"), None);
        assert_eq!(r.get("worse"), None);
        assert_eq!(r.get("missing"), None);
    }

    #[test]
    fn test_dataset_series_keys() {
        let ds = Dataset::new(
            "month",
            vec![
                Record::new("Jan").value("revenue", 1.0),
                Record::new("Feb").value("expenses", 2.0).value("revenue", 3.0),
            ],
        );
        assert_eq!(ds.series_keys(), vec!["expenses", "revenue"]);
    }

    #[test]
    fn test_slice_into_record() {
        let record: Record = Slice::new("Desktop", 400.0, Color::rgb(0x88, 0x84, 0xd8)).into();
        assert_eq!(record.category, "Desktop");
        assert_eq!(record.get(SLICE_VALUE_KEY), Some(400.0));
        assert_eq!(record.fill, Some(Color::rgb(0x88, 0x84, 0xd8)));
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&ChartKind::AreaStacked).unwrap();
        assert_eq!(json, "\"area-stacked\"");
        assert_eq!(ChartKind::AreaStacked.to_string(), "area-stacked");
        assert!(!ChartKind::Pie.is_cartesian());
    }
}
