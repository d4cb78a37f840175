//! Render options
//!
//! Everything that shapes a chart but is not data: plot size, margins,
//! grid, axes, overlays and per-kind tweaks.

use serde::{Deserialize, Serialize};

/// Spacing between the scene edge and the plot area, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Margin::new(20.0, 30.0, 5.0, 20.0)
    }
}

/// Background grid lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub visible: bool,
    pub opacity: f64,
    /// Dash pattern; empty draws solid lines
    pub dash: Vec<f64>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            visible: true,
            opacity: 0.3,
            dash: vec![3.0, 3.0],
        }
    }
}

/// Interpolation between consecutive points of lines and area boundaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    Linear,
    #[default]
    Monotone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    pub stroke_width: f64,
    pub dot_radius: f64,
    /// Radius of the marker drawn on hover
    pub active_dot_radius: f64,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            stroke_width: 3.0,
            dot_radius: 6.0,
            active_dot_radius: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarOptions {
    /// Corner radius applied to the bar end away from the baseline
    pub radius: f64,
    /// Fraction of each category band left empty around the bar group
    pub category_gap: f64,
    /// Pixels between bars of the same group
    pub bar_gap: f64,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            radius: 4.0,
            category_gap: 0.1,
            bar_gap: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaOptions {
    pub fill_opacity: f64,
    pub stroke_width: f64,
}

impl Default for AreaOptions {
    fn default() -> Self {
        Self {
            fill_opacity: 0.7,
            stroke_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieOptions {
    pub outer_radius: f64,
    /// Non-zero draws a donut
    pub inner_radius: f64,
    pub labels: bool,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            outer_radius: 80.0,
            inner_radius: 0.0,
            labels: true,
        }
    }
}

/// Options recognized by [`crate::chart::render`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Total scene width in pixels
    pub width: f64,
    /// Fixed pixel height of the chart region
    pub height: f64,
    pub margin: Margin,
    pub grid: GridOptions,
    pub show_x_axis: bool,
    pub show_y_axis: bool,
    pub legend: bool,
    pub tooltip: bool,
    pub y_tick_count: usize,
    pub curve: Curve,
    pub line: LineOptions,
    pub bar: BarOptions,
    pub area: AreaOptions,
    pub pie: PieOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            margin: Margin::default(),
            grid: GridOptions::default(),
            show_x_axis: true,
            show_y_axis: true,
            legend: false,
            tooltip: true,
            y_tick_count: 5,
            curve: Curve::Monotone,
            line: LineOptions::default(),
            bar: BarOptions::default(),
            area: AreaOptions::default(),
            pie: PieOptions::default(),
        }
    }
}

impl ChartOptions {
    /// Builder method: set scene size
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder method: set margins
    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Builder method: toggle the legend
    pub fn legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    /// Builder method: toggle the grid
    pub fn grid(mut self, visible: bool) -> Self {
        self.grid.visible = visible;
        self
    }

    /// Builder method: toggle both axes
    pub fn axes(mut self, visible: bool) -> Self {
        self.show_x_axis = visible;
        self.show_y_axis = visible;
        self
    }

    /// Builder method: set line/area interpolation
    pub fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }
}
