//! Summary statistic cards
//!
//! Cards echo literal strings; nothing is computed from the datasets.

use crate::scene::{Color, Corners, FontWeight, Group, Paint, Point, Rect, Text, TextAnchor};

use super::{BORDER, PANEL_BACKGROUND, TEXT_MUTED, TEXT_PRIMARY};

/// Card height in pixels
pub const STAT_CARD_HEIGHT: f64 = 124.0;

const PADDING: f64 = 24.0;

/// One statistic card
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub icon: &'static str,
    /// Color of the headline value
    pub accent: Color,
}

/// The four dashboard cards, left to right
pub fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total Revenue",
            value: "$45,231",
            delta: "+20.1% from last month",
            icon: "💰",
            accent: Color::rgb(0x16, 0xa3, 0x4a),
        },
        StatCard {
            title: "Active Users",
            value: "1,800",
            delta: "+12.5% from last month",
            icon: "👥",
            accent: Color::rgb(0x25, 0x63, 0xeb),
        },
        StatCard {
            title: "Conversion Rate",
            value: "3.24%",
            delta: "+0.5% from last month",
            icon: "📈",
            accent: Color::rgb(0x93, 0x33, 0xea),
        },
        StatCard {
            title: "Total Orders",
            value: "573",
            delta: "+8.2% from last month",
            icon: "🛒",
            accent: Color::rgb(0xea, 0x58, 0x0c),
        },
    ]
}

/// Render one card at the origin, `width` pixels wide
pub fn render_stat_card(card: &StatCard, width: f64) -> Group {
    Group::new()
        .with_class("stat-card")
        .child(
            Rect::new(
                0.0,
                0.0,
                width,
                STAT_CARD_HEIGHT,
                Paint::fill(PANEL_BACKGROUND).with_stroke(BORDER, 1.0),
            )
            .rounded(8.0, Corners::All)
            .with_class("panel-frame"),
        )
        .child(
            Text::new(Point::new(PADDING, 36.0), card.title, 14.0, TEXT_PRIMARY)
                .weight(FontWeight::Medium)
                .with_class("stat-title"),
        )
        .child(
            Text::new(Point::new(width - PADDING, 40.0), card.icon, 24.0, TEXT_PRIMARY)
                .anchor(TextAnchor::End)
                .with_class("stat-icon"),
        )
        .child(
            Text::new(Point::new(PADDING, 78.0), card.value, 24.0, card.accent)
                .weight(FontWeight::Bold)
                .with_class("stat-value"),
        )
        .child(
            Text::new(Point::new(PADDING, 102.0), card.delta, 12.0, TEXT_MUTED)
                .with_class("stat-delta"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Node;

    fn texts(group: &Group, class: &str) -> Vec<String> {
        let mut found = Vec::new();
        group.walk(&mut |node| {
            if node.class() == Some(class) {
                if let Some(text) = node.as_text() {
                    found.push(text.content.clone());
                }
            }
        });
        found
    }

    #[test]
    fn test_four_literal_cards() {
        let cards = stat_cards();
        let values: Vec<&str> = cards.iter().map(|c| c.value).collect();
        assert_eq!(values, vec!["$45,231", "1,800", "3.24%", "573"]);
        assert_eq!(cards[0].icon, "💰");
        assert_eq!(cards[3].delta, "+8.2% from last month");
    }

    #[test]
    fn test_render_stat_card() {
        let card = &stat_cards()[1];
        let group = render_stat_card(card, 250.0);

        assert_eq!(texts(&group, "stat-title"), vec!["Active Users"]);
        assert_eq!(texts(&group, "stat-value"), vec!["1,800"]);
        assert_eq!(texts(&group, "stat-delta"), vec!["+12.5% from last month"]);

        let frame = group
            .children
            .iter()
            .find_map(Node::as_rect)
            .unwrap();
        assert_eq!(frame.width, 250.0);
        assert_eq!(frame.height, STAT_CARD_HEIGHT);
    }

    #[test]
    fn test_value_uses_accent() {
        let card = &stat_cards()[0];
        let group = render_stat_card(card, 200.0);
        let value = group
            .children
            .iter()
            .filter_map(Node::as_text)
            .find(|t| t.class.as_deref() == Some("stat-value"))
            .unwrap();
        assert_eq!(value.fill, card.accent);
    }
}
