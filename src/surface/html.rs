//! HTML host page encoder
//!
//! Wraps the SVG in a minimal self-contained page so the dashboard can be
//! opened directly in a browser or embedded in another layout.

use std::fmt::Write as _;

use crate::error::RenderResult;
use crate::scene::Scene;

use super::svg::{escape, to_svg};
use super::SceneEncoder;

const PAGE_STYLE: &str = "\
html, body { margin: 0; padding: 0; background: #f9fafb; }
main.chartboard { display: flex; justify-content: center; padding: 16px 0; }
main.chartboard svg { max-width: 100%; height: auto; }
";

/// Encodes scenes as a complete HTML document
#[derive(Debug, Clone)]
pub struct HtmlEncoder {
    pub title: String,
}

impl HtmlEncoder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for HtmlEncoder {
    fn default() -> Self {
        Self::new("Charts Dashboard")
    }
}

impl SceneEncoder for HtmlEncoder {
    fn name(&self) -> &'static str {
        "html"
    }

    fn extension(&self) -> &'static str {
        "html"
    }

    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn encode(&self, scene: &Scene) -> RenderResult<String> {
        let mut html = String::new();
        let _ = writeln!(html, "<!DOCTYPE html>");
        let _ = writeln!(html, "<html lang=\"en\">");
        let _ = writeln!(html, "<head>");
        let _ = writeln!(html, "<meta charset=\"utf-8\">");
        let _ = writeln!(
            html,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
        );
        let _ = writeln!(html, "<title>{}</title>", escape(&self.title));
        let _ = writeln!(html, "<style>\n{}</style>", PAGE_STYLE);
        let _ = writeln!(html, "</head>");
        let _ = writeln!(html, "<body>");
        let _ = writeln!(html, "<main class=\"chartboard\">");
        html.push_str(&to_svg(scene));
        let _ = writeln!(html, "</main>");
        let _ = writeln!(html, "</body>");
        let _ = writeln!(html, "</html>");
        Ok(html)
    }
}
