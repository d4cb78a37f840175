//! Pie geometry
//!
//! Sectors start at 3 o'clock and proceed counter-clockwise, each spanning
//! `value / total` of the circle. Labels sit outside the rim as
//! `"{name} {percent}%"` with no connector lines.
//!
//! Negative slice values cannot be a share of a whole. They are treated as
//! zero (no sector, 0% share) and reported with a warning.

use std::f64::consts::PI;

use crate::scene::{Baseline, Color, Group, Paint, Path, Point, Text, TextAnchor, Tooltip, TooltipEntry};

use super::cartesian::{PlotArea, LABEL_SIZE};
use super::format::format_value;
use super::options::ChartOptions;
use super::style::ChartConfig;
use super::types::{ChartKind, Record};

/// Distance between the rim and a slice label
const LABEL_OFFSET: f64 = 20.0;

/// Angular extent and share of one slice
#[derive(Debug, Clone, PartialEq)]
pub struct SliceLayout {
    pub name: String,
    /// Value after negative clamping
    pub value: f64,
    pub color: Color,
    /// Share of the total in [0, 1]
    pub fraction: f64,
    /// `fraction × 100` rounded to the nearest integer
    pub percent: u32,
    /// Degrees, counter-clockwise from 3 o'clock
    pub start_angle: f64,
    pub end_angle: f64,
}

impl SliceLayout {
    pub fn label(&self) -> String {
        format!("{} {}%", self.name, self.percent)
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Resolve colors and angles for each record's `value_key`
///
/// Color precedence: the record's own fill, then the style entry named after
/// the slice, then the default palette by position.
pub fn layout(records: &[Record], value_key: &str, style: &ChartConfig) -> Vec<SliceLayout> {
    let values: Vec<f64> = records
        .iter()
        .map(|r| match r.get(value_key) {
            Some(v) if v < 0.0 => {
                tracing::warn!(slice = %r.category, value = v, "negative pie value treated as zero");
                0.0
            }
            Some(v) => v,
            None => 0.0,
        })
        .collect();
    let total: f64 = values.iter().sum();

    let mut angle = 0.0;
    records
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (record, value))| {
            let fraction = if total > 0.0 { value / total } else { 0.0 };
            let start_angle = angle;
            angle += fraction * 360.0;
            SliceLayout {
                name: record.category.clone(),
                value,
                color: record
                    .fill
                    .unwrap_or_else(|| style.resolve(&record.category, i).color),
                fraction,
                percent: (fraction * 100.0).round() as u32,
                start_angle,
                end_angle: angle,
            }
        })
        .collect()
}

/// Point on a circle at `angle` degrees (counter-clockwise, screen y down)
fn polar(center: Point, radius: f64, angle: f64) -> Point {
    let rad = angle * PI / 180.0;
    Point::new(center.x + radius * rad.cos(), center.y - radius * rad.sin())
}

/// Outline of one sector (or annular sector when `inner > 0`)
fn sector_path(center: Point, inner: f64, outer: f64, start: f64, end: f64, paint: Paint) -> Path {
    let sweep = end - start;

    // A full turn cannot be a single arc: split it in two halves
    if sweep >= 360.0 - 1e-9 {
        let mut path = Path::new(paint)
            .move_to(polar(center, outer, 0.0))
            .arc_to(outer, false, false, polar(center, outer, 180.0))
            .arc_to(outer, false, false, polar(center, outer, 360.0))
            .close();
        if inner > 0.0 {
            path = path
                .move_to(polar(center, inner, 0.0))
                .arc_to(inner, false, true, polar(center, inner, 180.0))
                .arc_to(inner, false, true, polar(center, inner, 360.0))
                .close();
        }
        return path;
    }

    let large_arc = sweep > 180.0;
    let path = Path::new(paint)
        .move_to(if inner > 0.0 {
            polar(center, inner, start)
        } else {
            center
        })
        .line_to(polar(center, outer, start))
        .arc_to(outer, large_arc, false, polar(center, outer, end));

    if inner > 0.0 {
        path.line_to(polar(center, inner, end))
            .arc_to(inner, large_arc, true, polar(center, inner, start))
            .close()
    } else {
        path.close()
    }
}

pub fn draw(slices: &[SliceLayout], options: &ChartOptions) -> Group {
    let mut all = Group::new().with_class("pie");
    let center = PlotArea::for_options(ChartKind::Pie, options).center();
    let outer = options.pie.outer_radius;
    let inner = options.pie.inner_radius.clamp(0.0, outer);

    for slice in slices.iter().filter(|s| s.value > 0.0) {
        let tooltip = Tooltip {
            title: slice.name.clone(),
            entries: vec![TooltipEntry {
                label: slice.name.clone(),
                color: slice.color,
                value: slice.value,
                formatted: format_value(slice.value),
            }],
        };

        let mut group = Group::new().with_class("pie-slice").with_tooltip(tooltip);
        group.push(
            sector_path(
                center,
                inner,
                outer,
                slice.start_angle,
                slice.end_angle,
                Paint::fill(slice.color).with_stroke(Color::WHITE, 1.0),
            )
            .with_class("pie-sector"),
        );

        if options.pie.labels {
            let position = polar(center, outer + LABEL_OFFSET, slice.mid_angle());
            let anchor = if (position.x - center.x).abs() < 1e-6 {
                TextAnchor::Middle
            } else if position.x > center.x {
                TextAnchor::Start
            } else {
                TextAnchor::End
            };
            group.push(
                Text::new(position, slice.label(), LABEL_SIZE, slice.color)
                    .with_class("pie-label")
                    .anchor(anchor)
                    .baseline(Baseline::Middle),
            );
        }

        all.push(group);
    }

    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::types::{Slice, SLICE_VALUE_KEY};

    fn devices() -> Vec<Record> {
        vec![
            Slice::new("Desktop", 400.0, Color::rgb(0x88, 0x84, 0xd8)).into(),
            Slice::new("Mobile", 300.0, Color::rgb(0x82, 0xca, 0x9d)).into(),
            Slice::new("Tablet", 100.0, Color::rgb(0xff, 0xc6, 0x58)).into(),
            Slice::new("Other", 50.0, Color::rgb(0xff, 0x73, 0x00)).into(),
        ]
    }

    #[test]
    fn test_device_percentages() {
        let slices = layout(&devices(), SLICE_VALUE_KEY, &ChartConfig::new());
        let percents: Vec<u32> = slices.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![47, 35, 12, 6]);
        assert_eq!(slices[0].label(), "Desktop 47%");
    }

    #[test]
    fn test_angles_cover_full_circle() {
        let slices = layout(&devices(), SLICE_VALUE_KEY, &ChartConfig::new());
        assert_eq!(slices[0].start_angle, 0.0);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        assert!((slices.last().unwrap().end_angle - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_rounded_percentages_near_hundred() {
        let cases: Vec<Vec<f64>> = vec![
            vec![1.0, 1.0, 1.0],
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
            vec![0.5, 0.5, 99.0],
            vec![33.3, 33.3, 33.4],
        ];
        for values in cases {
            let records: Vec<Record> = values
                .iter()
                .enumerate()
                .map(|(i, v)| Record::new(format!("s{}", i)).value("v", *v))
                .collect();
            let slices = layout(&records, "v", &ChartConfig::new());
            let sum: i64 = slices.iter().map(|s| s.percent as i64).sum();
            assert!((sum - 100).abs() <= slices.len() as i64, "sum {} for {:?}", sum, values);
        }
    }

    #[test]
    fn test_negative_value_treated_as_zero() {
        let records = vec![
            Record::new("a").value("v", 30.0),
            Record::new("b").value("v", -10.0),
            Record::new("c").value("v", 10.0),
        ];
        let slices = layout(&records, "v", &ChartConfig::new());
        assert_eq!(slices[1].value, 0.0);
        assert_eq!(slices[1].percent, 0);
        assert_eq!(slices[0].percent, 75);

        let group = draw(&slices, &ChartOptions::default());
        assert_eq!(group.children.len(), 2);
    }

    #[test]
    fn test_color_fallbacks() {
        let style = ChartConfig::new().series("Mobile", "Mobile", Color::BLACK);
        let records = vec![
            Record::new("Desktop").value("v", 1.0).fill(Color::WHITE),
            Record::new("Mobile").value("v", 1.0),
            Record::new("Other").value("v", 1.0),
        ];
        let slices = layout(&records, "v", &style);
        assert_eq!(slices[0].color, Color::WHITE);
        assert_eq!(slices[1].color, Color::BLACK);
        assert_eq!(slices[2].color, crate::chart::style::DEFAULT_PALETTE[2]);
    }

    #[test]
    fn test_single_slice_full_circle() {
        let records = vec![Record::new("all").value("v", 5.0)];
        let slices = layout(&records, "v", &ChartConfig::new());
        let group = draw(&slices, &ChartOptions::default());
        let sector = group.children[0].as_group().unwrap().children[0].as_path().unwrap();
        let arcs = sector
            .commands
            .iter()
            .filter(|c| matches!(c, crate::scene::PathCommand::ArcTo { .. }))
            .count();
        assert_eq!(arcs, 2);
    }

    #[test]
    fn test_zero_total_draws_nothing() {
        let records = vec![Record::new("a").value("v", 0.0), Record::new("b")];
        let slices = layout(&records, "v", &ChartConfig::new());
        assert!(slices.iter().all(|s| s.fraction == 0.0));
        assert!(draw(&slices, &ChartOptions::default()).is_empty());
    }
}
