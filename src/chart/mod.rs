//! Chart Rendering Surface
//!
//! Maps ordered records and a series style mapping to a [`Scene`]:
//!
//! - **types**: `ChartKind`, `Record`, `Dataset`, `Slice`
//! - **style**: `SeriesStyle` and the `ChartConfig` key -> style mapping
//! - **options**: size, margins, grid, axes, overlays
//! - **scale** / **format**: value and category scales, number formatting
//! - **cartesian**: plot frame, grid, axes and tooltip regions
//! - **bar** / **line** / **area** / **pie**: geometry per kind
//! - **legend**: legend row
//! - **render**: the `render` entry point
//!
//! # Example
//!
//! ```rust
//! use chartboard::chart::{render, ChartConfig, ChartKind, ChartOptions, Record};
//! use chartboard::scene::Color;
//!
//! let records = vec![
//!     Record::new("Jan").value("revenue", 4000.0).value("expenses", 2400.0),
//!     Record::new("Feb").value("revenue", 3000.0).value("expenses", 1398.0),
//! ];
//! let style = ChartConfig::new()
//!     .series("revenue", "Revenue", Color::rgb(0x25, 0x63, 0xeb))
//!     .series("expenses", "Expenses", Color::rgb(0xdc, 0x26, 0x26));
//!
//! let scene = render(
//!     ChartKind::Bar,
//!     &records,
//!     &["revenue", "expenses"],
//!     &style,
//!     &ChartOptions::default().legend(true),
//! );
//! assert_eq!(scene.find_by_class("bar").len(), 4);
//! ```
//!
//! [`Scene`]: crate::scene::Scene

pub mod area;
pub mod bar;
pub mod cartesian;
pub mod curve;
pub mod format;
pub mod legend;
pub mod line;
pub mod options;
pub mod pie;
pub mod render;
pub mod scale;
pub mod style;
pub mod types;

// Re-export commonly used types
pub use area::{stack, StackBand};
pub use cartesian::{Frame, PlotArea, Series};
pub use format::{format_tick, format_value};
pub use legend::LegendEntry;
pub use options::{
    AreaOptions, BarOptions, ChartOptions, Curve, GridOptions, LineOptions, Margin, PieOptions,
};
pub use pie::SliceLayout;
pub use render::render;
pub use scale::{BandScale, LinearScale};
pub use style::{ChartConfig, SeriesStyle, DEFAULT_PALETTE};
pub use types::{ChartKind, Dataset, Record, Slice, SLICE_VALUE_KEY};
