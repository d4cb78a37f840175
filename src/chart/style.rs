//! Series style mapping
//!
//! Maps a series key to the label and color shared by geometry, legend and
//! tooltip. Keys without an entry resolve to a deterministic default.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scene::Color;

/// Fallback colors, picked by the series' position in the render call
pub const DEFAULT_PALETTE: [Color; 6] = [
    Color::rgb(0xff, 0x98, 0x00), // Orange
    Color::rgb(0x4c, 0xaf, 0x50), // Green
    Color::rgb(0x21, 0x96, 0xf3), // Blue
    Color::rgb(0x9c, 0x27, 0xb0), // Purple
    Color::rgb(0xf4, 0x43, 0x36), // Red
    Color::rgb(0x00, 0xbc, 0xd4), // Cyan
];

/// Display label and color of one series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub label: String,
    pub color: Color,
}

impl SeriesStyle {
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    /// Default style for an unmapped key at `index` in the series list
    pub fn fallback(key: &str, index: usize) -> Self {
        Self {
            label: key.to_string(),
            color: DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()],
        }
    }
}

/// Static series key -> style mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartConfig {
    entries: BTreeMap<String, SeriesStyle>,
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: add an entry. A repeated key replaces the earlier one.
    pub fn series(mut self, key: impl Into<String>, label: impl Into<String>, color: Color) -> Self {
        self.insert(key, SeriesStyle::new(label, color));
        self
    }

    /// Insert or replace an entry (last write wins)
    pub fn insert(&mut self, key: impl Into<String>, style: SeriesStyle) {
        self.entries.insert(key.into(), style);
    }

    /// Overlay every entry of `other` onto this mapping
    pub fn merge(&mut self, other: &ChartConfig) {
        for (key, style) in &other.entries {
            self.entries.insert(key.clone(), style.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&SeriesStyle> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SeriesStyle)> {
        self.entries.iter()
    }

    /// Style for `key`, falling back to a default for unmapped keys
    ///
    /// `index` is the key's position in the render call's series list and
    /// only affects the fallback color.
    pub fn resolve(&self, key: &str, index: usize) -> SeriesStyle {
        match self.entries.get(key) {
            Some(style) => style.clone(),
            None => {
                tracing::debug!(series = %key, "no style entry, using fallback");
                SeriesStyle::fallback(key, index)
            }
        }
    }
}

impl<K: Into<String>> FromIterator<(K, SeriesStyle)> for ChartConfig {
    fn from_iter<I: IntoIterator<Item = (K, SeriesStyle)>>(iter: I) -> Self {
        let mut config = ChartConfig::new();
        for (key, style) in iter {
            config.insert(key, style);
        }
        config
    }
}
