//! Static sample datasets and the shared series style mapping

use crate::chart::{ChartConfig, Dataset, Record, Slice, SLICE_VALUE_KEY};
use crate::error::{RenderError, RenderResult};
use crate::scene::Color;

/// Names accepted by [`by_name`], in dashboard order
pub const DATASET_NAMES: [&str; 4] = ["sales", "user-growth", "devices", "performance"];

/// Monthly revenue and expenses
pub fn sales_data() -> Dataset {
    let rows = [
        ("Jan", 4000.0, 2400.0),
        ("Feb", 3000.0, 1398.0),
        ("Mar", 2000.0, 9800.0),
        ("Apr", 2780.0, 3908.0),
        ("May", 1890.0, 4800.0),
        ("Jun", 2390.0, 3800.0),
    ];
    Dataset::new(
        "month",
        rows.iter()
            .map(|&(month, revenue, expenses)| {
                Record::new(month)
                    .value("revenue", revenue)
                    .value("expenses", expenses)
            })
            .collect(),
    )
}

/// Monthly active users
pub fn user_growth_data() -> Dataset {
    let rows = [
        ("Jan", 1000.0),
        ("Feb", 1200.0),
        ("Mar", 1100.0),
        ("Apr", 1400.0),
        ("May", 1600.0),
        ("Jun", 1800.0),
    ];
    Dataset::new(
        "month",
        rows.iter()
            .map(|&(month, users)| Record::new(month).value("users", users))
            .collect(),
    )
}

/// Users by device type, as pie slices
pub fn device_usage() -> Vec<Slice> {
    vec![
        Slice::new("Desktop", 400.0, Color::rgb(0x88, 0x84, 0xd8)),
        Slice::new("Mobile", 300.0, Color::rgb(0x82, 0xca, 0x9d)),
        Slice::new("Tablet", 100.0, Color::rgb(0xff, 0xc6, 0x58)),
        Slice::new("Other", 50.0, Color::rgb(0xff, 0x73, 0x00)),
    ]
}

/// Device usage slices as a dataset keyed by slice name
pub fn device_usage_data() -> Dataset {
    Dataset::new("name", device_usage().into_iter().map(Record::from).collect())
}

/// Quarterly department performance
pub fn performance_data() -> Dataset {
    let rows = [
        ("Q1", 4000.0, 2400.0, 1600.0),
        ("Q2", 3000.0, 1398.0, 1800.0),
        ("Q3", 2000.0, 9800.0, 2200.0),
        ("Q4", 2780.0, 3908.0, 2500.0),
    ];
    Dataset::new(
        "quarter",
        rows.iter()
            .map(|&(quarter, sales, marketing, support)| {
                Record::new(quarter)
                    .value("sales", sales)
                    .value("marketing", marketing)
                    .value("support", support)
            })
            .collect(),
    )
}

/// Style entries for every series drawn on the dashboard
pub fn chart_config() -> ChartConfig {
    ChartConfig::new()
        .series("revenue", "Revenue", Color::rgb(0x25, 0x63, 0xeb))
        .series("expenses", "Expenses", Color::rgb(0xdc, 0x26, 0x26))
        .series("users", "Users", Color::rgb(0x05, 0x96, 0x69))
        .series("sales", "Sales", Color::rgb(0x8b, 0x5c, 0xf6))
        .series("marketing", "Marketing", Color::rgb(0xf5, 0x9e, 0x0b))
        .series("support", "Support", Color::rgb(0x06, 0xb6, 0xd4))
}

/// Look up a dataset by name
pub fn by_name(name: &str) -> RenderResult<Dataset> {
    match name {
        "sales" => Ok(sales_data()),
        "user-growth" => Ok(user_growth_data()),
        "devices" => Ok(device_usage_data()),
        "performance" => Ok(performance_data()),
        other => Err(RenderError::UnknownDataset(other.to_string())),
    }
}

/// Series keys drawn from a dataset, in drawing order
pub fn series_keys(name: &str) -> &'static [&'static str] {
    match name {
        "sales" => &["revenue", "expenses"],
        "user-growth" => &["users"],
        "devices" => &[SLICE_VALUE_KEY],
        "performance" => &["sales", "marketing", "support"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(sales_data().len(), 6);
        assert_eq!(user_growth_data().len(), 6);
        assert_eq!(device_usage().len(), 4);
        assert_eq!(performance_data().len(), 4);
    }

    #[test]
    fn test_every_series_has_style() {
        let style = chart_config();
        assert_eq!(style.len(), 6);
        for name in ["sales", "user-growth", "performance"] {
            for key in series_keys(name) {
                assert!(style.contains(key), "missing style for {}", key);
            }
        }
    }

    #[test]
    fn test_series_keys_match_dataset_fields() {
        for name in DATASET_NAMES {
            let dataset = by_name(name).unwrap();
            let mut expected: Vec<String> =
                series_keys(name).iter().map(|k| k.to_string()).collect();
            expected.sort();
            assert_eq!(dataset.series_keys(), expected);
        }
    }

    #[test]
    fn test_unknown_dataset() {
        let err = by_name("weather").unwrap_err();
        assert!(matches!(err, RenderError::UnknownDataset(ref n) if n == "weather"));
    }

    #[test]
    fn test_device_slices_keep_fill() {
        let data = device_usage_data();
        assert_eq!(data.records[0].category, "Desktop");
        assert_eq!(data.records[0].fill, Some(Color::rgb(0x88, 0x84, 0xd8)));
        assert_eq!(data.records[3].get(SLICE_VALUE_KEY), Some(50.0));
    }
}
