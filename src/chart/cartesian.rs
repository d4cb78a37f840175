//! Shared frame for bar, line and area charts
//!
//! Computes the plot area and scales, and draws the grid, both axes and
//! the per-category hover regions that carry tooltips.

use crate::scene::{
    Baseline, Circle, Color, Group, Line, Paint, Point, Rect, Text, TextAnchor, Tooltip,
    TooltipEntry,
};

use super::format::{format_tick, format_value};
use super::options::ChartOptions;
use super::scale::{BandScale, LinearScale};
use super::style::SeriesStyle;
use super::types::{ChartKind, Record};

pub(crate) const AXIS_COLOR: Color = Color::rgb(0x66, 0x66, 0x66);
pub(crate) const GRID_COLOR: Color = Color::rgb(0xcc, 0xcc, 0xcc);
pub(crate) const LABEL_SIZE: f64 = 12.0;

const Y_AXIS_WIDTH: f64 = 60.0;
const X_AXIS_HEIGHT: f64 = 30.0;
pub(crate) const LEGEND_HEIGHT: f64 = 28.0;
const TICK_SIZE: f64 = 6.0;

/// A series key with its resolved style
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub key: String,
    pub style: SeriesStyle,
}

/// Pixel bounds of the region data is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    /// Plot bounds for `kind` once margins, axes and legend are reserved
    pub fn for_options(kind: ChartKind, options: &ChartOptions) -> Self {
        let m = options.margin;
        let cartesian = kind.is_cartesian();

        let left = m.left + if cartesian && options.show_y_axis { Y_AXIS_WIDTH } else { 0.0 };
        let right = (options.width - m.right).max(left);
        let top = m.top;
        let mut bottom = options.height - m.bottom;
        if cartesian && options.show_x_axis {
            bottom -= X_AXIS_HEIGHT;
        }
        if options.legend {
            bottom -= LEGEND_HEIGHT;
        }

        Self {
            left,
            top,
            right,
            bottom: bottom.max(top),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }
}

/// Plot area plus category and value scales
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub plot: PlotArea,
    /// x position of each category (band center for bars, point otherwise)
    pub xs: Vec<f64>,
    /// Horizontal extent of each category's hover region
    pub spans: Vec<(f64, f64)>,
    /// Set for bar charts
    pub bands: Option<BandScale>,
    pub y: LinearScale,
}

impl Frame {
    /// Build the frame for `count` categories whose drawn values are `values`
    pub fn new(
        kind: ChartKind,
        count: usize,
        values: impl IntoIterator<Item = f64>,
        options: &ChartOptions,
    ) -> Self {
        let plot = PlotArea::for_options(kind, options);
        let y = LinearScale::nice(values, options.y_tick_count, (plot.bottom, plot.top));

        if kind == ChartKind::Bar {
            let bands = BandScale::new(count, plot.left, plot.right);
            let xs = (0..count).map(|i| bands.center(i)).collect();
            let spans = (0..count)
                .map(|i| {
                    let start = bands.band_start(i);
                    (start, start + bands.bandwidth())
                })
                .collect();
            return Self {
                plot,
                xs,
                spans,
                bands: Some(bands),
                y,
            };
        }

        // Point scale: first and last categories sit on the plot edges
        let (xs, spacing): (Vec<f64>, f64) = if count <= 1 {
            (vec![plot.center().x; count], plot.width())
        } else {
            let spacing = plot.width() / (count - 1) as f64;
            (
                (0..count).map(|i| plot.left + i as f64 * spacing).collect(),
                spacing,
            )
        };
        let spans = xs
            .iter()
            .map(|&x| {
                (
                    (x - spacing / 2.0).max(plot.left),
                    (x + spacing / 2.0).min(plot.right),
                )
            })
            .collect();

        Self {
            plot,
            xs,
            spans,
            bands: None,
            y,
        }
    }

    /// Grid lines: one horizontal per y tick, one vertical per category
    pub fn grid(&self, options: &ChartOptions) -> Group {
        let mut group = Group::new().with_class("grid");
        if !options.grid.visible {
            return group;
        }

        let paint = Paint::stroke(GRID_COLOR, 1.0)
            .with_opacity(options.grid.opacity)
            .with_dash(options.grid.dash.clone());

        for tick in self.y.ticks() {
            let y = self.y.map(tick);
            group.push(
                Line::new(
                    Point::new(self.plot.left, y),
                    Point::new(self.plot.right, y),
                    paint.clone(),
                )
                .with_class("grid-line"),
            );
        }

        for &x in &self.xs {
            group.push(
                Line::new(
                    Point::new(x, self.plot.top),
                    Point::new(x, self.plot.bottom),
                    paint.clone(),
                )
                .with_class("grid-line"),
            );
        }

        group
    }

    /// Category axis along the bottom of the plot
    pub fn x_axis(&self, records: &[Record]) -> Group {
        let mut group = Group::new().with_class("x-axis");
        let axis_paint = Paint::stroke(AXIS_COLOR, 1.0);
        let y = self.plot.bottom;

        group.push(Line::new(
            Point::new(self.plot.left, y),
            Point::new(self.plot.right, y),
            axis_paint.clone(),
        ));

        for (record, &x) in records.iter().zip(&self.xs) {
            group.push(Line::new(
                Point::new(x, y),
                Point::new(x, y + TICK_SIZE),
                axis_paint.clone(),
            ));
            group.push(
                Text::new(
                    Point::new(x, y + TICK_SIZE + 2.0),
                    record.category.clone(),
                    LABEL_SIZE,
                    AXIS_COLOR,
                )
                .with_class("x-tick-label")
                .anchor(TextAnchor::Middle)
                .baseline(Baseline::Hanging),
            );
        }

        group
    }

    /// Value axis along the left of the plot
    pub fn y_axis(&self) -> Group {
        let mut group = Group::new().with_class("y-axis");
        let axis_paint = Paint::stroke(AXIS_COLOR, 1.0);
        let x = self.plot.left;

        group.push(Line::new(
            Point::new(x, self.plot.top),
            Point::new(x, self.plot.bottom),
            axis_paint.clone(),
        ));

        for tick in self.y.ticks() {
            let y = self.y.map(tick);
            group.push(Line::new(
                Point::new(x - TICK_SIZE, y),
                Point::new(x, y),
                axis_paint.clone(),
            ));
            group.push(
                Text::new(
                    Point::new(x - TICK_SIZE - 2.0, y),
                    format_tick(tick, self.y.step),
                    LABEL_SIZE,
                    AXIS_COLOR,
                )
                .with_class("y-tick-label")
                .anchor(TextAnchor::End)
                .baseline(Baseline::Middle),
            );
        }

        group
    }

    /// One hover region per category, carrying that category's tooltip
    ///
    /// `markers` yields, per category, the points to highlight on hover
    /// (line and area charts); bar charts pass none and get a cursor band.
    pub fn tooltip_regions(
        &self,
        records: &[Record],
        series: &[Series],
        markers: &dyn Fn(usize) -> Vec<(Point, Color)>,
        active_radius: f64,
    ) -> Group {
        let mut group = Group::new().with_class("tooltips");

        for (i, record) in records.iter().enumerate() {
            let (x0, x1) = self.spans[i];
            let mut region = Group::new()
                .with_class("tooltip-region")
                .with_tooltip(category_tooltip(record, series));

            region.push(
                Rect::new(
                    x0,
                    self.plot.top,
                    x1 - x0,
                    self.plot.height(),
                    Paint::fill(GRID_COLOR).with_fill_opacity(0.0),
                )
                .with_class("tooltip-cursor"),
            );

            for (point, color) in markers(i) {
                region.push(
                    Circle::new(
                        point,
                        active_radius,
                        Paint::fill(Color::WHITE).with_stroke(color, 2.0),
                    )
                    .with_class("active-dot"),
                );
            }

            group.push(region);
        }

        group
    }
}

/// Tooltip listing a record's present values in series order
pub fn category_tooltip(record: &Record, series: &[Series]) -> Tooltip {
    let entries = series
        .iter()
        .filter_map(|s| {
            record.get(&s.key).map(|value| TooltipEntry {
                label: s.style.label.clone(),
                color: s.style.color,
                value,
                formatted: format_value(value),
            })
        })
        .collect();

    Tooltip {
        title: record.category.clone(),
        entries,
    }
}
