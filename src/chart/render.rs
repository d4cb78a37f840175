//! The render entry point
//!
//! `render` is a pure function of its arguments: no I/O, no hidden state,
//! identical inputs produce an identical [`Scene`].

use crate::scene::{Color, Node, Point, Scene};

use super::area;
use super::bar;
use super::cartesian::{Frame, Series};
use super::legend::{legend, LegendEntry};
use super::line;
use super::options::ChartOptions;
use super::pie;
use super::style::ChartConfig;
use super::types::{ChartKind, Record};

/// Render `records` as a chart of the given kind
///
/// - `series_keys` selects the numeric fields to draw, in order. For
///   area-stacked it is the stacking order, bottom to top. For pie only the
///   first key is used, as the slice value.
/// - Keys missing from `style` render with the key as label and a palette
///   color chosen by position.
/// - Empty `records` produce an empty scene of the requested size.
pub fn render<S: AsRef<str>>(
    kind: ChartKind,
    records: &[Record],
    series_keys: &[S],
    style: &ChartConfig,
    options: &ChartOptions,
) -> Scene {
    tracing::debug!(
        kind = %kind,
        records = records.len(),
        series = series_keys.len(),
        "rendering chart"
    );

    let mut scene = Scene::new(options.width, options.height);
    scene.root.class = Some(format!("chart-{}", kind));

    if records.is_empty() {
        return scene;
    }

    let series: Vec<Series> = series_keys
        .iter()
        .enumerate()
        .map(|(i, key)| Series {
            key: key.as_ref().to_string(),
            style: style.resolve(key.as_ref(), i),
        })
        .collect();

    match kind {
        ChartKind::Pie => render_pie(&mut scene, records, &series, style, options),
        _ => render_cartesian(&mut scene, kind, records, &series, options),
    }

    scene
}

fn render_cartesian(
    scene: &mut Scene,
    kind: ChartKind,
    records: &[Record],
    series: &[Series],
    options: &ChartOptions,
) {
    let stacked = match kind {
        ChartKind::AreaStacked => Some(area::stack(
            records,
            &series.iter().map(|s| s.key.as_str()).collect::<Vec<_>>(),
        )),
        _ => None,
    };

    let frame = match &stacked {
        Some(bands) => Frame::new(kind, records.len(), area::boundary_values(bands), options),
        None => {
            let values = records
                .iter()
                .flat_map(|r| series.iter().filter_map(move |s| r.get(&s.key)));
            Frame::new(kind, records.len(), values, options)
        }
    };

    scene.push(frame.grid(options));
    if options.show_x_axis {
        scene.push(frame.x_axis(records));
    }
    if options.show_y_axis {
        scene.push(frame.y_axis());
    }

    match (kind, &stacked) {
        (ChartKind::AreaStacked, Some(bands)) => scene.push(area::draw(bands, series, &frame, options)),
        (ChartKind::Line, _) => scene.push(line::draw(records, series, &frame, options)),
        _ => scene.push(bar::draw(records, series, &frame, options)),
    }

    if options.tooltip {
        // Hover markers sit where the geometry is: the value for lines, the
        // band top for stacked areas, none for bars.
        let markers = |i: usize| -> Vec<(Point, Color)> {
            match kind {
                ChartKind::Line => series
                    .iter()
                    .filter_map(|s| {
                        records[i]
                            .get(&s.key)
                            .map(|v| (Point::new(frame.xs[i], frame.y.map(v)), s.style.color))
                    })
                    .collect(),
                ChartKind::AreaStacked => stacked
                    .iter()
                    .flatten()
                    .zip(series)
                    .map(|(band, s)| {
                        (
                            Point::new(frame.xs[i], frame.y.map(band.upper[i])),
                            s.style.color,
                        )
                    })
                    .collect(),
                _ => Vec::new(),
            }
        };
        scene.push(frame.tooltip_regions(records, series, &markers, options.line.active_dot_radius));
    }

    if options.legend {
        let entries: Vec<LegendEntry> = series
            .iter()
            .map(|s| LegendEntry {
                label: s.style.label.clone(),
                color: s.style.color,
            })
            .collect();
        scene.push(legend(&entries, options));
    }
}

fn render_pie(
    scene: &mut Scene,
    records: &[Record],
    series: &[Series],
    style: &ChartConfig,
    options: &ChartOptions,
) {
    let Some(value_series) = series.first() else {
        return;
    };
    let slices = pie::layout(records, &value_series.key, style);

    let mut drawn = pie::draw(&slices, options);
    if !options.tooltip {
        for child in drawn.children.iter_mut() {
            if let Node::Group(group) = child {
                group.tooltip = None;
            }
        }
    }
    scene.push(drawn);

    if options.legend {
        let entries: Vec<LegendEntry> = slices
            .iter()
            .map(|s| LegendEntry {
                label: s.name.clone(),
                color: s.color,
            })
            .collect();
        scene.push(legend(&entries, options));
    }
}
