//! Stacked area geometry
//!
//! Series are stacked bottom to top in the caller's order. Each band spans
//! from the running total of the series below it to that total plus its own
//! value. Absent values contribute zero.

use crate::scene::{Group, Paint, Path, Point};

use super::cartesian::{Frame, Series};
use super::curve;
use super::options::ChartOptions;
use super::types::Record;

/// Data-space boundaries of one stacked series
#[derive(Debug, Clone, PartialEq)]
pub struct StackBand {
    pub key: String,
    /// Bottom boundary per category (top of the previous band)
    pub lower: Vec<f64>,
    /// Top boundary per category
    pub upper: Vec<f64>,
}

/// Stack `keys` over `records` in order
pub fn stack<S: AsRef<str>>(records: &[Record], keys: &[S]) -> Vec<StackBand> {
    let mut running = vec![0.0; records.len()];

    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            let lower = running.clone();
            for (total, record) in running.iter_mut().zip(records) {
                *total += record.get(key).unwrap_or(0.0);
            }
            StackBand {
                key: key.to_string(),
                lower,
                upper: running.clone(),
            }
        })
        .collect()
}

/// Every boundary value, for fitting the value scale
pub fn boundary_values(bands: &[StackBand]) -> impl Iterator<Item = f64> + '_ {
    bands
        .iter()
        .flat_map(|b| b.lower.iter().chain(b.upper.iter()).copied())
}

/// Pixel points of a boundary
fn to_points(values: &[f64], frame: &Frame) -> Vec<Point> {
    values
        .iter()
        .zip(&frame.xs)
        .map(|(&v, &x)| Point::new(x, frame.y.map(v)))
        .collect()
}

pub fn draw(bands: &[StackBand], series: &[Series], frame: &Frame, options: &ChartOptions) -> Group {
    let mut all = Group::new().with_class("areas");

    for (band, s) in bands.iter().zip(series) {
        let color = s.style.color;
        let upper = to_points(&band.upper, frame);
        let mut lower = to_points(&band.lower, frame);
        lower.reverse();

        let mut group = Group::new().with_class("area-series");

        if let (Some(_), Some(&lower_start)) = (upper.first(), lower.first()) {
            // Fill: along the top left to right, back along the bottom
            let fill = Path::new(Paint::fill(color).with_fill_opacity(options.area.fill_opacity))
                .extend(curve::open_path(&upper, options.curve))
                .line_to(lower_start)
                .extend(curve::through(&lower, options.curve))
                .close()
                .with_class("area-band");
            group.push(fill);

            group.push(
                Path::new(Paint::stroke(color, options.area.stroke_width))
                    .extend(curve::open_path(&upper, options.curve))
                    .with_class("area-line"),
            );
        }

        all.push(group);
    }

    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn performance() -> Vec<Record> {
        vec![
            Record::new("Q1").value("sales", 4000.0).value("marketing", 2400.0).value("support", 1600.0),
            Record::new("Q2").value("sales", 3000.0).value("marketing", 1398.0).value("support", 1800.0),
            Record::new("Q3").value("sales", 2000.0).value("marketing", 9800.0).value("support", 2200.0),
            Record::new("Q4").value("sales", 2780.0).value("marketing", 3908.0).value("support", 2500.0),
        ]
    }

    #[test]
    fn test_top_boundary_is_tick_sum() {
        let records = performance();
        let bands = stack(&records, &["sales", "marketing", "support"]);
        let top = &bands.last().unwrap().upper;
        for (record, total) in records.iter().zip(top) {
            let sum: f64 = record.values.values().sum();
            assert_eq!(*total, sum);
        }
    }

    #[test]
    fn test_bands_follow_caller_order() {
        let records = performance();
        let bands = stack(&records, &["support", "sales"]);
        assert_eq!(bands[0].key, "support");
        assert_eq!(bands[0].lower, vec![0.0; 4]);
        assert_eq!(bands[0].upper[0], 1600.0);
        assert_eq!(bands[1].lower, bands[0].upper);
        assert_eq!(bands[1].upper[0], 5600.0);

        // Same total, different intermediate boundary
        let reversed = stack(&records, &["sales", "support"]);
        assert_eq!(reversed[1].upper, bands[1].upper);
        assert_ne!(reversed[0].upper, bands[0].upper);
    }

    #[test]
    fn test_absent_values_contribute_zero() {
        let records = vec![
            Record::new("Q1").value("a", 1.0),
            Record::new("Q2").value("a", 2.0).value("b", 5.0),
        ];
        let bands = stack(&records, &["a", "b"]);
        assert_eq!(bands[1].upper, vec![1.0, 7.0]);
    }
}
