//! Grouped bar geometry

use crate::scene::{Corners, Group, Paint, Rect};

use super::cartesian::{Frame, Series};
use super::options::ChartOptions;
use super::types::Record;

/// Position of one bar in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub category: usize,
    pub series: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out one bar per (record, series) pair with a present value
///
/// Bars of a category sit side by side in series order inside the band,
/// with `category_gap` of the band left empty on each side.
pub fn layout(
    records: &[Record],
    series: &[Series],
    frame: &Frame,
    options: &ChartOptions,
) -> Vec<BarLayout> {
    let Some(bands) = frame.bands else {
        return Vec::new();
    };
    if series.is_empty() {
        return Vec::new();
    }

    let band = bands.bandwidth();
    let gap = options.bar.category_gap.clamp(0.0, 0.5);
    let group_width = band * (1.0 - 2.0 * gap);
    let n = series.len() as f64;
    let bar_width = ((group_width - options.bar.bar_gap * (n - 1.0)) / n).max(0.0);
    let baseline = frame.y.map(0.0);

    let mut bars = Vec::new();
    for (i, record) in records.iter().enumerate() {
        let group_start = bands.band_start(i) + band * gap;
        for (j, s) in series.iter().enumerate() {
            let Some(value) = record.get(&s.key) else {
                continue;
            };
            let top = frame.y.map(value);
            bars.push(BarLayout {
                category: i,
                series: j,
                value,
                x: group_start + j as f64 * (bar_width + options.bar.bar_gap),
                y: top.min(baseline),
                width: bar_width,
                height: (baseline - top).abs(),
            });
        }
    }
    bars
}

/// Draw bars, one group per series
pub fn draw(records: &[Record], series: &[Series], frame: &Frame, options: &ChartOptions) -> Group {
    let mut groups: Vec<Group> = series
        .iter()
        .map(|_| Group::new().with_class("bar-series"))
        .collect();

    for bar in layout(records, series, frame, options) {
        // Round the end away from the baseline
        let corners = if bar.value < 0.0 {
            Corners::Bottom
        } else {
            Corners::Top
        };
        let radius = options
            .bar
            .radius
            .min(bar.width / 2.0)
            .min(bar.height);
        let color = series[bar.series].style.color;

        groups[bar.series].push(
            Rect::new(bar.x, bar.y, bar.width, bar.height, Paint::fill(color))
                .rounded(radius, corners)
                .with_class("bar"),
        );
    }

    let mut all = Group::new().with_class("bars");
    for group in groups {
        all.push(group);
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::style::SeriesStyle;
    use crate::chart::types::ChartKind;
    use crate::scene::Color;

    fn series() -> Vec<Series> {
        vec![
            Series {
                key: "revenue".to_string(),
                style: SeriesStyle::new("Revenue", Color::rgb(0x25, 0x63, 0xeb)),
            },
            Series {
                key: "expenses".to_string(),
                style: SeriesStyle::new("Expenses", Color::rgb(0xdc, 0x26, 0x26)),
            },
        ]
    }

    fn records() -> Vec<Record> {
        vec![
            Record::new("Jan").value("revenue", 4000.0).value("expenses", 2400.0),
            Record::new("Feb").value("revenue", 3000.0).value("expenses", 1398.0),
        ]
    }

    fn frame(records: &[Record], options: &ChartOptions) -> Frame {
        let values = records.iter().flat_map(|r| r.values.values().copied());
        Frame::new(ChartKind::Bar, records.len(), values, options)
    }

    #[test]
    fn test_heights_proportional_to_values() {
        let options = ChartOptions::default();
        let records = records();
        let frame = frame(&records, &options);
        let bars = layout(&records, &series(), &frame, &options);

        assert_eq!(bars.len(), 4);
        let px_per_unit = bars[0].height / 4000.0;
        for bar in &bars {
            assert!((bar.height - bar.value * px_per_unit).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bars_side_by_side_in_series_order() {
        let options = ChartOptions::default();
        let records = records();
        let frame = frame(&records, &options);
        let bars = layout(&records, &series(), &frame, &options);

        assert_eq!((bars[0].category, bars[0].series), (0, 0));
        assert_eq!((bars[1].category, bars[1].series), (0, 1));
        assert!(bars[0].x + bars[0].width <= bars[1].x);
        // Second category starts in the second band
        assert!(bars[2].x >= frame.spans[1].0);
    }

    #[test]
    fn test_missing_value_draws_no_bar() {
        let options = ChartOptions::default();
        let records = vec![Record::new("Jan").value("revenue", 10.0)];
        let frame = frame(&records, &options);
        let bars = layout(&records, &series(), &frame, &options);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].series, 0);
    }

    #[test]
    fn test_negative_value_below_baseline() {
        let options = ChartOptions::default();
        let records = vec![Record::new("Jan").value("revenue", -500.0).value("expenses", 1000.0)];
        let frame = frame(&records, &options);
        let bars = layout(&records, &series(), &frame, &options);
        let baseline = frame.y.map(0.0);

        assert!((bars[0].y - baseline).abs() < 1e-9);
        assert!(bars[0].height > 0.0);
        assert!(bars[1].y < baseline);

        let group = draw(&records, &series(), &frame, &options);
        let first = group.children[0].as_group().unwrap().children[0].as_rect().unwrap();
        assert_eq!(first.corners, Corners::Bottom);
    }
}
