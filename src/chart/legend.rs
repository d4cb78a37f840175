//! Legend overlay
//!
//! A single centered row of color swatches and labels under the plot.

use crate::scene::{Baseline, Color, Corners, Group, Paint, Point, Rect, Text};

use super::cartesian::{LABEL_SIZE, LEGEND_HEIGHT};
use super::options::ChartOptions;

const SWATCH_SIZE: f64 = 10.0;
const SWATCH_GAP: f64 = 6.0;
const ITEM_GAP: f64 = 16.0;
/// Rough average glyph width at LABEL_SIZE, used to center the row
const CHAR_WIDTH: f64 = 7.0;
const LEGEND_TEXT: Color = Color::rgb(0x37, 0x41, 0x51);

/// One legend row item
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

fn item_width(entry: &LegendEntry) -> f64 {
    SWATCH_SIZE + SWATCH_GAP + entry.label.chars().count() as f64 * CHAR_WIDTH
}

/// Build the legend group, centered horizontally in the scene
pub fn legend(entries: &[LegendEntry], options: &ChartOptions) -> Group {
    let mut group = Group::new().with_class("legend");
    if entries.is_empty() {
        return group;
    }

    let total: f64 = entries.iter().map(item_width).sum::<f64>()
        + ITEM_GAP * (entries.len() - 1) as f64;
    let mut x = ((options.width - total) / 2.0).max(0.0);
    let y = options.height - options.margin.bottom - LEGEND_HEIGHT / 2.0;

    for entry in entries {
        let item = Group::new()
            .with_class("legend-item")
            .child(
                Rect::new(
                    x,
                    y - SWATCH_SIZE / 2.0,
                    SWATCH_SIZE,
                    SWATCH_SIZE,
                    Paint::fill(entry.color),
                )
                .rounded(2.0, Corners::All)
                .with_class("legend-swatch"),
            )
            .child(
                Text::new(
                    Point::new(x + SWATCH_SIZE + SWATCH_GAP, y),
                    entry.label.clone(),
                    LABEL_SIZE,
                    LEGEND_TEXT,
                )
                .with_class("legend-label")
                .baseline(Baseline::Middle),
            );
        group.push(item);
        x += item_width(entry) + ITEM_GAP;
    }

    group
}
