//! Charts Dashboard
//!
//! Four chart panels and four statistic cards laid out on one page:
//!
//! - **datasets**: the static sample records and the series style mapping
//! - **panel**: panel descriptors and the titled chart box
//! - **stat_card**: literal summary cards and their renderer
//!
//! Layout follows the page grid: header, bar panel full width, line and pie
//! side by side, stacked area full width, then the cards in one row. Below
//! [`TWO_COLUMN_MIN_WIDTH`] the paired panels stack, and below
//! [`CARD_ROW_MIN_WIDTH`] the cards stack too.

pub mod datasets;
pub mod panel;
pub mod stat_card;

use serde::{Deserialize, Serialize};

use crate::chart::ChartConfig;
use crate::scene::{Color, FontWeight, Group, Point, Scene, Text, TextAnchor};

pub use datasets::{chart_config, device_usage, performance_data, sales_data, user_growth_data};
pub use panel::{panel, panels, ChartPanel};
pub use stat_card::{render_stat_card, stat_cards, StatCard, STAT_CARD_HEIGHT};

pub(crate) const TEXT_PRIMARY: Color = Color::rgb(0x11, 0x18, 0x27);
pub(crate) const TEXT_MUTED: Color = Color::rgb(0x6b, 0x72, 0x80);
pub(crate) const BORDER: Color = Color::rgb(0xe5, 0xe7, 0xeb);
pub(crate) const PANEL_BACKGROUND: Color = Color::WHITE;

/// Default page background
pub const PAGE_BACKGROUND: Color = Color::rgb(0xf9, 0xfa, 0xfb);

pub const DASHBOARD_TITLE: &str = "📊 Charts Dashboard";
pub const DASHBOARD_SUBTITLE: &str = "Comprehensive charts built with Shadcn/UI and Recharts";

/// Narrowest page that places the line and pie panels side by side
pub const TWO_COLUMN_MIN_WIDTH: f64 = 1024.0;
/// Narrowest page that places the stat cards in one row
pub const CARD_ROW_MIN_WIDTH: f64 = 768.0;

const PAGE_PADDING: f64 = 32.0;
const MAX_CONTENT_WIDTH: f64 = 1280.0;
const HEADER_HEIGHT: f64 = 128.0;
const SECTION_GAP: f64 = 32.0;
const CARD_GAP: f64 = 24.0;

/// Page-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Page width in pixels
    pub width: f64,
    pub background: Color,
    /// Series styles shared by every panel
    pub style: ChartConfig,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            background: PAGE_BACKGROUND,
            style: chart_config(),
        }
    }
}

impl DashboardSettings {
    /// Builder method: set page width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Builder method: layer style overrides over the current mapping
    pub fn with_style_overrides(mut self, overrides: &ChartConfig) -> Self {
        self.style.merge(overrides);
        self
    }
}

/// Build the full dashboard page
pub fn build_dashboard(settings: &DashboardSettings) -> Scene {
    let content_width = (settings.width - 2.0 * PAGE_PADDING)
        .min(MAX_CONTENT_WIDTH)
        .max(0.0);
    let left = (settings.width - content_width) / 2.0;
    let two_columns = settings.width >= TWO_COLUMN_MIN_WIDTH;
    let card_row = settings.width >= CARD_ROW_MIN_WIDTH;

    tracing::debug!(
        width = settings.width,
        two_columns,
        card_row,
        "building dashboard"
    );

    let mut page = Group::new().with_class("dashboard");
    let mut y = PAGE_PADDING;

    page.push(header(settings.width / 2.0, y));
    y += HEADER_HEIGHT;

    let all = panels();
    let by_id = |id: &'static str| all.iter().find(|p| p.id == id);

    if let Some(bar) = by_id("revenue") {
        page.push(bar.render_box(content_width, &settings.style).at(left, y));
        y += bar.box_height() + SECTION_GAP;
    }

    let pair: Vec<&ChartPanel> = ["users", "devices"].into_iter().filter_map(by_id).collect();
    if two_columns {
        let column = (content_width - SECTION_GAP) / 2.0;
        let row_height = pair.iter().map(|p| p.box_height()).fold(0.0, f64::max);
        for (i, p) in pair.iter().enumerate() {
            let x = left + i as f64 * (column + SECTION_GAP);
            page.push(p.render_box(column, &settings.style).at(x, y));
        }
        y += row_height + SECTION_GAP;
    } else {
        for p in &pair {
            page.push(p.render_box(content_width, &settings.style).at(left, y));
            y += p.box_height() + SECTION_GAP;
        }
    }

    if let Some(area) = by_id("performance") {
        page.push(area.render_box(content_width, &settings.style).at(left, y));
        y += area.box_height() + SECTION_GAP;
    }

    let cards = stat_cards();
    let mut row = Group::new().with_class("stat-cards").at(left, y);
    if card_row {
        let count = cards.len() as f64;
        let card_width = (content_width - CARD_GAP * (count - 1.0)) / count;
        for (i, card) in cards.iter().enumerate() {
            let x = i as f64 * (card_width + CARD_GAP);
            row.push(render_stat_card(card, card_width).at(x, 0.0));
        }
        y += STAT_CARD_HEIGHT;
    } else {
        let mut offset = 0.0;
        for card in &cards {
            row.push(render_stat_card(card, content_width).at(0.0, offset));
            offset += STAT_CARD_HEIGHT + CARD_GAP;
        }
        y += offset - CARD_GAP;
    }
    page.push(row);

    let mut scene = Scene::new(settings.width, y + PAGE_PADDING).with_background(settings.background);
    scene.push(page);
    scene
}

/// Render a single panel's chart by id, at the page's content width
pub fn render_panel(id: &str, settings: &DashboardSettings) -> Option<Scene> {
    let panel = panel(id)?;
    let width = (settings.width - 2.0 * PAGE_PADDING).max(0.0);
    Some(
        panel
            .render_chart(width, &settings.style)
            .with_background(PANEL_BACKGROUND),
    )
}

fn header(center_x: f64, top: f64) -> Group {
    Group::new()
        .with_class("header")
        .child(
            Text::new(Point::new(center_x, top + 40.0), DASHBOARD_TITLE, 36.0, TEXT_PRIMARY)
                .anchor(TextAnchor::Middle)
                .weight(FontWeight::Bold)
                .with_class("dashboard-title"),
        )
        .child(
            Text::new(
                Point::new(center_x, top + 80.0),
                DASHBOARD_SUBTITLE,
                18.0,
                Color::rgb(0x4b, 0x55, 0x63),
            )
            .anchor(TextAnchor::Middle)
            .with_class("dashboard-subtitle"),
        )
}
