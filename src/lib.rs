//! # chartboard
//!
//! A charts dashboard rendered as a pure function: static sample records and
//! a series style mapping go in, a platform-neutral scene graph comes out.
//!
//! ## Features
//!
//! - **Four chart kinds**: grouped bars, monotone lines, stacked areas, pies
//! - **Shared styling**: one key -> label/color mapping drives geometry,
//!   legends and tooltips, with deterministic fallbacks
//! - **Overlays**: legends and per-category hover tooltips
//! - **Surfaces**: SVG, a self-contained HTML page, or the raw scene as JSON
//!
//! ## Modules
//!
//! - [`chart`]: The render contract and per-kind geometry
//! - [`scene`]: Scene graph nodes and paint
//! - [`surface`]: Scene encoders
//! - [`dashboard`]: Sample datasets, stat cards and page layout
//! - [`export`]: Dataset export as CSV or JSON
//! - [`config`]: File and environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use chartboard::dashboard::{build_dashboard, DashboardSettings};
//! use chartboard::surface::{OutputFormat, SceneEncoder};
//!
//! let scene = build_dashboard(&DashboardSettings::default());
//! let svg = OutputFormat::Svg.encoder().encode(&scene).unwrap();
//!
//! assert!(svg.contains("Revenue vs Expenses"));
//! ```

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod scene;
pub mod surface;

// Re-export top-level types for convenience
pub use chart::{render, ChartConfig, ChartKind, ChartOptions, Dataset, Record, SeriesStyle, Slice};

pub use dashboard::{build_dashboard, render_panel, DashboardSettings};

pub use error::{RenderError, RenderResult};

pub use export::{export_dataset, ExportFormat};

pub use scene::{Color, Node, Scene};

pub use surface::{OutputFormat, SceneEncoder};
