//! SVG encoder
//!
//! Tooltips become `<title>` children of their group, which browsers show
//! on hover. A small embedded stylesheet reveals hover markers.

use std::fmt::Write as _;

use crate::error::RenderResult;
use crate::scene::{
    Baseline, Circle, Corners, FontWeight, Group, Line, Node, Paint, Path, PathCommand, Rect,
    Scene, Text, TextAnchor,
};

use super::SceneEncoder;

const FONT_FAMILY: &str = "Inter, system-ui, -apple-system, sans-serif";

/// Hover behavior for tooltip regions, pie slices and panels
pub const HOVER_STYLE: &str = "\
.tooltip-region .active-dot { opacity: 0; }
.tooltip-region:hover .active-dot { opacity: 1; }
.tooltip-region:hover .tooltip-cursor { fill-opacity: 0.3; }
.pie-slice:hover .pie-sector { opacity: 0.85; }
.panel:hover .panel-frame, .stat-card:hover .panel-frame { stroke: #9ca3af; }
";

/// Encodes scenes as standalone SVG documents
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgEncoder;

impl SceneEncoder for SvgEncoder {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn extension(&self) -> &'static str {
        "svg"
    }

    fn content_type(&self) -> &'static str {
        "image/svg+xml"
    }

    fn encode(&self, scene: &Scene) -> RenderResult<String> {
        Ok(to_svg(scene))
    }
}

/// Render a scene as SVG markup
pub fn to_svg(scene: &Scene) -> String {
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"{font}\">",
        w = num(scene.width),
        h = num(scene.height),
        font = FONT_FAMILY,
    );
    let _ = writeln!(svg, "<style>\n{}</style>", HOVER_STYLE);

    if let Some(bg) = scene.background {
        let _ = writeln!(
            svg,
            "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            num(scene.width),
            num(scene.height),
            bg
        );
    }

    write_group(&mut svg, &scene.root, 0);
    svg.push_str("</svg>\n");
    svg
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::Group(g) => write_group(out, g, depth),
        Node::Rect(r) => write_rect(out, r, depth),
        Node::Line(l) => write_line(out, l, depth),
        Node::Path(p) => write_path(out, p, depth),
        Node::Circle(c) => write_circle(out, c, depth),
        Node::Text(t) => write_text(out, t, depth),
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_group(out: &mut String, group: &Group, depth: usize) {
    indent(out, depth);
    out.push_str("<g");
    class_attr(out, group.class.as_deref());
    if let Some(t) = group.translate {
        let _ = write!(out, " transform=\"translate({},{})\"", num(t.x), num(t.y));
    }
    out.push_str(">\n");

    if let Some(tooltip) = &group.tooltip {
        indent(out, depth + 1);
        let _ = writeln!(out, "<title>{}</title>", escape(&tooltip.to_plain_text()));
    }

    for child in &group.children {
        write_node(out, child, depth + 1);
    }

    indent(out, depth);
    out.push_str("</g>\n");
}

fn write_rect(out: &mut String, rect: &Rect, depth: usize) {
    indent(out, depth);
    let r = rect.radius.max(0.0);

    if r > 0.0 && rect.corners != Corners::All {
        let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
        let d = match rect.corners {
            Corners::Top => format!(
                "M{},{} L{},{} A{r},{r} 0 0 1 {},{} L{},{} A{r},{r} 0 0 1 {},{} L{},{} Z",
                num(x), num(y + h),
                num(x), num(y + r),
                num(x + r), num(y),
                num(x + w - r), num(y),
                num(x + w), num(y + r),
                num(x + w), num(y + h),
                r = num(r),
            ),
            _ => format!(
                "M{},{} L{},{} L{},{} A{r},{r} 0 0 1 {},{} L{},{} A{r},{r} 0 0 1 {},{} Z",
                num(x), num(y),
                num(x + w), num(y),
                num(x + w), num(y + h - r),
                num(x + w - r), num(y + h),
                num(x + r), num(y + h),
                num(x), num(y + h - r),
                r = num(r),
            ),
        };
        out.push_str("<path");
        class_attr(out, rect.class.as_deref());
        let _ = write!(out, " d=\"{}\"", d);
    } else {
        out.push_str("<rect");
        class_attr(out, rect.class.as_deref());
        let _ = write!(
            out,
            " x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height)
        );
        if r > 0.0 {
            let _ = write!(out, " rx=\"{}\"", num(r));
        }
    }

    paint_attrs(out, &rect.paint);
    out.push_str("/>\n");
}

fn write_line(out: &mut String, line: &Line, depth: usize) {
    indent(out, depth);
    out.push_str("<line");
    class_attr(out, line.class.as_deref());
    let _ = write!(
        out,
        " x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
        num(line.from.x),
        num(line.from.y),
        num(line.to.x),
        num(line.to.y)
    );
    paint_attrs(out, &line.paint);
    out.push_str("/>\n");
}

/// SVG path data for a command list
pub fn path_data(commands: &[PathCommand]) -> String {
    let parts: Vec<String> = commands
        .iter()
        .map(|cmd| match *cmd {
            PathCommand::MoveTo { to } => format!("M{},{}", num(to.x), num(to.y)),
            PathCommand::LineTo { to } => format!("L{},{}", num(to.x), num(to.y)),
            PathCommand::CubicTo { c1, c2, to } => format!(
                "C{},{} {},{} {},{}",
                num(c1.x),
                num(c1.y),
                num(c2.x),
                num(c2.y),
                num(to.x),
                num(to.y)
            ),
            PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                to,
            } => format!(
                "A{r},{r} 0 {} {} {},{}",
                large_arc as u8,
                sweep as u8,
                num(to.x),
                num(to.y),
                r = num(radius)
            ),
            PathCommand::Close => "Z".to_string(),
        })
        .collect();
    parts.join(" ")
}

fn write_path(out: &mut String, path: &Path, depth: usize) {
    indent(out, depth);
    out.push_str("<path");
    class_attr(out, path.class.as_deref());
    let _ = write!(out, " d=\"{}\"", path_data(&path.commands));
    paint_attrs(out, &path.paint);
    out.push_str("/>\n");
}

fn write_circle(out: &mut String, circle: &Circle, depth: usize) {
    indent(out, depth);
    out.push_str("<circle");
    class_attr(out, circle.class.as_deref());
    let _ = write!(
        out,
        " cx=\"{}\" cy=\"{}\" r=\"{}\"",
        num(circle.center.x),
        num(circle.center.y),
        num(circle.radius)
    );
    paint_attrs(out, &circle.paint);
    out.push_str("/>\n");
}

fn write_text(out: &mut String, text: &Text, depth: usize) {
    indent(out, depth);
    out.push_str("<text");
    class_attr(out, text.class.as_deref());
    let _ = write!(
        out,
        " x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\"",
        num(text.position.x),
        num(text.position.y),
        num(text.size),
        text.fill
    );
    match text.anchor {
        TextAnchor::Start => {}
        TextAnchor::Middle => out.push_str(" text-anchor=\"middle\""),
        TextAnchor::End => out.push_str(" text-anchor=\"end\""),
    }
    match text.weight {
        FontWeight::Normal => {}
        FontWeight::Medium => out.push_str(" font-weight=\"500\""),
        FontWeight::Bold => out.push_str(" font-weight=\"700\""),
    }
    match text.baseline {
        Baseline::Alphabetic => {}
        Baseline::Middle => out.push_str(" dominant-baseline=\"middle\""),
        Baseline::Hanging => out.push_str(" dominant-baseline=\"hanging\""),
    }
    let _ = writeln!(out, ">{}</text>", escape(&text.content));
}

fn class_attr(out: &mut String, class: Option<&str>) {
    if let Some(class) = class {
        let _ = write!(out, " class=\"{}\"", escape(class));
    }
}

fn paint_attrs(out: &mut String, paint: &Paint) {
    match paint.fill {
        Some(fill) => {
            let _ = write!(out, " fill=\"{}\"", fill);
        }
        None => out.push_str(" fill=\"none\""),
    }
    if let Some(stroke) = paint.stroke {
        let _ = write!(out, " stroke=\"{}\"", stroke);
    }
    if let Some(width) = paint.stroke_width {
        let _ = write!(out, " stroke-width=\"{}\"", num(width));
    }
    if let Some(opacity) = paint.opacity {
        let _ = write!(out, " opacity=\"{}\"", num(opacity));
    }
    if let Some(opacity) = paint.fill_opacity {
        let _ = write!(out, " fill-opacity=\"{}\"", num(opacity));
    }
    if !paint.dash.is_empty() {
        let dash: Vec<String> = paint.dash.iter().map(|d| num(*d)).collect();
        let _ = write!(out, " stroke-dasharray=\"{}\"", dash.join(" "));
    }
}

/// Coordinates with at most two decimals, trailing zeros trimmed
fn num(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Escape text for XML content and attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
