//! Chart panels: a titled box around one chart

use crate::chart::{render, ChartConfig, ChartKind, ChartOptions, Dataset, PieOptions};
use crate::scene::{Corners, FontWeight, Group, Paint, Point, Rect, Scene, Text};

use super::datasets;
use super::{BORDER, PANEL_BACKGROUND, TEXT_MUTED, TEXT_PRIMARY};

/// Inner padding of a panel box
pub const PANEL_PADDING: f64 = 24.0;
/// Space taken by the title and description above the chart
pub const PANEL_HEADER: f64 = 72.0;

/// Descriptor of one dashboard chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: ChartKind,
    /// Name understood by [`datasets::by_name`]
    pub dataset: &'static str,
    pub series: &'static [&'static str],
    /// Chart options; `width` is set at layout time
    pub options: ChartOptions,
}

impl ChartPanel {
    /// Records drawn by this panel
    pub fn data(&self) -> Dataset {
        // Panel dataset names are the fixed set known to `datasets`
        datasets::by_name(self.dataset)
            .unwrap_or_else(|_| Dataset::new(self.dataset, Vec::new()))
    }

    /// Render just the chart at the given width
    pub fn render_chart(&self, width: f64, style: &ChartConfig) -> Scene {
        let options = ChartOptions {
            width,
            ..self.options.clone()
        };
        render(self.kind, &self.data().records, self.series, style, &options)
    }

    /// Total box height for this panel
    pub fn box_height(&self) -> f64 {
        PANEL_HEADER + self.options.height + PANEL_PADDING
    }

    /// Render the titled box with its chart, at the origin
    pub fn render_box(&self, width: f64, style: &ChartConfig) -> Group {
        let chart_width = (width - 2.0 * PANEL_PADDING).max(0.0);
        let chart = self.render_chart(chart_width, style);

        Group::new()
            .with_class("panel")
            .child(
                Rect::new(
                    0.0,
                    0.0,
                    width,
                    self.box_height(),
                    Paint::fill(PANEL_BACKGROUND).with_stroke(BORDER, 1.0),
                )
                .rounded(8.0, Corners::All)
                .with_class("panel-frame"),
            )
            .child(
                Text::new(Point::new(PANEL_PADDING, 36.0), self.title, 18.0, TEXT_PRIMARY)
                    .weight(FontWeight::Bold)
                    .with_class("panel-title"),
            )
            .child(
                Text::new(
                    Point::new(PANEL_PADDING, 58.0),
                    self.description,
                    14.0,
                    TEXT_MUTED,
                )
                .with_class("panel-description"),
            )
            .child(chart.into_group_at(PANEL_PADDING, PANEL_HEADER))
    }
}

/// The four dashboard panels in page order
pub fn panels() -> Vec<ChartPanel> {
    vec![
        ChartPanel {
            id: "revenue",
            title: "Revenue vs Expenses",
            description: "Monthly comparison of revenue and expenses",
            kind: ChartKind::Bar,
            dataset: "sales",
            series: datasets::series_keys("sales"),
            options: ChartOptions {
                height: 300.0,
                legend: true,
                ..ChartOptions::default()
            },
        },
        ChartPanel {
            id: "users",
            title: "User Growth",
            description: "Monthly active user growth",
            kind: ChartKind::Line,
            dataset: "user-growth",
            series: datasets::series_keys("user-growth"),
            options: ChartOptions {
                height: 250.0,
                ..ChartOptions::default()
            },
        },
        ChartPanel {
            id: "devices",
            title: "Device Usage",
            description: "Distribution of users by device type",
            kind: ChartKind::Pie,
            dataset: "devices",
            series: datasets::series_keys("devices"),
            options: ChartOptions {
                height: 250.0,
                pie: PieOptions {
                    outer_radius: 80.0,
                    labels: true,
                    ..PieOptions::default()
                },
                ..ChartOptions::default()
            },
        },
        ChartPanel {
            id: "performance",
            title: "Quarterly Performance",
            description: "Department performance across quarters",
            kind: ChartKind::AreaStacked,
            dataset: "performance",
            series: datasets::series_keys("performance"),
            options: ChartOptions {
                height: 350.0,
                legend: true,
                ..ChartOptions::default()
            },
        },
    ]
}

/// Look up a panel by id
pub fn panel(id: &str) -> Option<ChartPanel> {
    panels().into_iter().find(|p| p.id == id)
}
