//! Platform-neutral scene graph
//!
//! Charts and the dashboard page are built as plain [`Scene`] values. Nothing
//! here knows about SVG or HTML; see [`crate::surface`] for encoders.
//!
//! ```text
//! Scene
//!   └── Group (class, translate, tooltip)
//!         ├── Rect / Line / Path / Circle / Text
//!         └── Group ...
//! ```

pub mod node;
pub mod paint;

pub use node::{
    Baseline, Circle, Corners, FontWeight, Group, Line, Node, Path, PathCommand, Point, Rect,
    Scene, Text, TextAnchor, Tooltip, TooltipEntry,
};
pub use paint::{Color, Paint};
