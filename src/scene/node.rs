//! Scene graph nodes
//!
//! A scene is a tree of groups and drawing primitives in pixel coordinates,
//! origin top-left, y growing downward. Nodes carry an optional semantic
//! class ("bar", "legend-item", ...) so encoders and tests can find them.

use serde::{Deserialize, Serialize};

use super::paint::{Color, Paint};

/// A 2D point in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A complete drawable surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    pub root: Group,
}

impl Scene {
    /// Create an empty scene
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            root: Group::new(),
        }
    }

    /// Builder method: set background color
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Add a node to the root group
    pub fn push(&mut self, node: impl Into<Node>) {
        self.root.push(node);
    }

    /// Visit every node depth-first
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        self.root.walk(visit);
    }

    /// All nodes with the given class, in document order
    pub fn find_by_class(&self, class: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if node.class() == Some(class) {
                found.push(node);
            }
        });
        found
    }

    /// All tooltips attached anywhere in the scene, in document order
    pub fn tooltips(&self) -> Vec<&Tooltip> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if let Node::Group(group) = node {
                if let Some(tooltip) = &group.tooltip {
                    found.push(tooltip);
                }
            }
        });
        found
    }

    /// Detach the root as a group positioned at (x, y), for composing scenes
    pub fn into_group_at(self, x: f64, y: f64) -> Group {
        let mut group = self.root;
        group.translate = Some(Point::new(x, y));
        group
    }
}

/// Any scene node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Group(Group),
    Rect(Rect),
    Line(Line),
    Path(Path),
    Circle(Circle),
    Text(Text),
}

impl Node {
    /// Semantic class of this node, if any
    pub fn class(&self) -> Option<&str> {
        match self {
            Node::Group(n) => n.class.as_deref(),
            Node::Rect(n) => n.class.as_deref(),
            Node::Line(n) => n.class.as_deref(),
            Node::Path(n) => n.class.as_deref(),
            Node::Circle(n) => n.class.as_deref(),
            Node::Text(n) => n.class.as_deref(),
        }
    }

    /// Visit this node and its descendants depth-first
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        visit(self);
        if let Node::Group(group) = self {
            group.walk(visit);
        }
    }

    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Node::Rect(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Node::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(g) => Some(g),
            _ => None,
        }
    }
}

/// A container of nodes with optional translation and hover tooltip
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set class
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Builder method: translate children by (x, y)
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.translate = Some(Point::new(x, y));
        self
    }

    /// Builder method: attach a hover tooltip
    pub fn with_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Builder method: add a child
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Visit every descendant depth-first (not the group itself)
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// Which corners of a rect are rounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corners {
    #[default]
    All,
    Top,
    Bottom,
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub corners: Corners,
    #[serde(default)]
    pub paint: Paint,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64, paint: Paint) -> Self {
        Self {
            class: None,
            x,
            y,
            width,
            height,
            radius: 0.0,
            corners: Corners::All,
            paint,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Builder method: round the given corners
    pub fn rounded(mut self, radius: f64, corners: Corners) -> Self {
        self.radius = radius;
        self.corners = corners;
        self
    }
}

/// Straight line segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub from: Point,
    pub to: Point,
    pub paint: Paint,
}

impl Line {
    pub fn new(from: Point, to: Point, paint: Paint) -> Self {
        Self {
            class: None,
            from,
            to,
            paint,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// One path drawing command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: Point },
    LineTo { to: Point },
    CubicTo { c1: Point, c2: Point, to: Point },
    /// Circular arc of radius `radius` ending at `to`
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

/// Arbitrary outline built from path commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub commands: Vec<PathCommand>,
    pub paint: Paint,
}

impl Path {
    pub fn new(paint: Paint) -> Self {
        Self {
            class: None,
            commands: Vec::new(),
            paint,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn move_to(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::MoveTo { to });
        self
    }

    pub fn line_to(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::LineTo { to });
        self
    }

    pub fn cubic_to(mut self, c1: Point, c2: Point, to: Point) -> Self {
        self.commands.push(PathCommand::CubicTo { c1, c2, to });
        self
    }

    pub fn arc_to(mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) -> Self {
        self.commands.push(PathCommand::ArcTo {
            radius,
            large_arc,
            sweep,
            to,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Append already-built commands
    pub fn extend(mut self, commands: impl IntoIterator<Item = PathCommand>) -> Self {
        self.commands.extend(commands);
        self
    }

    /// End points of every command, in order
    pub fn points(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|cmd| match *cmd {
                PathCommand::MoveTo { to }
                | PathCommand::LineTo { to }
                | PathCommand::CubicTo { to, .. }
                | PathCommand::ArcTo { to, .. } => Some(to),
                PathCommand::Close => None,
            })
            .collect()
    }
}

/// Circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub center: Point,
    pub radius: f64,
    pub paint: Paint,
}

impl Circle {
    pub fn new(center: Point, radius: f64, paint: Paint) -> Self {
        Self {
            class: None,
            center,
            radius,
            paint,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Bold,
}

/// Vertical alignment of text relative to its position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    #[default]
    Alphabetic,
    Middle,
    Hanging,
}

/// A single run of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub position: Point,
    pub content: String,
    pub size: f64,
    #[serde(default)]
    pub anchor: TextAnchor,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub baseline: Baseline,
    pub fill: Color,
}

impl Text {
    pub fn new(position: Point, content: impl Into<String>, size: f64, fill: Color) -> Self {
        Self {
            class: None,
            position,
            content: content.into(),
            size,
            anchor: TextAnchor::Start,
            weight: FontWeight::Normal,
            baseline: Baseline::Alphabetic,
            fill,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }
}

/// Content shown when hovering a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub title: String,
    pub entries: Vec<TooltipEntry>,
}

/// One styled `label: value` line of a tooltip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub label: String,
    pub color: Color,
    pub value: f64,
    /// Display form of `value`
    pub formatted: String,
}

impl Tooltip {
    /// Plain-text rendering, one line per entry
    pub fn to_plain_text(&self) -> String {
        let mut out = self.title.clone();
        for entry in &self.entries {
            out.push('\n');
            out.push_str(&entry.label);
            out.push_str(": ");
            out.push_str(&entry.formatted);
        }
        out
    }
}

macro_rules! impl_into_node {
    ($($ty:ident),*) => {
        $(impl From<$ty> for Node {
            fn from(value: $ty) -> Self {
                Node::$ty(value)
            }
        })*
    };
}

impl_into_node!(Group, Rect, Line, Path, Circle, Text);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new(100.0, 50.0);
        let bars = Group::new()
            .with_class("bars")
            .child(Rect::new(0.0, 0.0, 10.0, 10.0, Paint::default()).with_class("bar"))
            .child(Rect::new(20.0, 0.0, 10.0, 20.0, Paint::default()).with_class("bar"));
        scene.push(bars);
        scene.push(
            Group::new()
                .with_class("tooltip-region")
                .with_tooltip(Tooltip {
                    title: "Jan".to_string(),
                    entries: vec![],
                }),
        );
        scene
    }

    #[test]
    fn test_find_by_class_descends_into_groups() {
        let scene = sample_scene();
        assert_eq!(scene.find_by_class("bar").len(), 2);
        assert_eq!(scene.find_by_class("bars").len(), 1);
        assert!(scene.find_by_class("dot").is_empty());
    }

    #[test]
    fn test_tooltips_collected() {
        let scene = sample_scene();
        let tips = scene.tooltips();
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].title, "Jan");
    }

    #[test]
    fn test_path_points_skip_close() {
        let path = Path::new(Paint::default())
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(1.0, 1.0))
            .close();
        assert_eq!(path.points(), vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    }

    #[test]
    fn test_tooltip_plain_text() {
        let tip = Tooltip {
            title: "Feb".to_string(),
            entries: vec![TooltipEntry {
                label: "Revenue".to_string(),
                color: Color::BLACK,
                value: 3000.0,
                formatted: "3,000".to_string(),
            }],
        };
        assert_eq!(tip.to_plain_text(), "Feb\nRevenue: 3,000");
    }
}
