//! Scene encoders
//!
//! A [`SceneEncoder`] turns a [`Scene`] into text for one output surface:
//!
//! - **svg**: standalone SVG, tooltips as `<title>` elements
//! - **html**: SVG wrapped in a self-contained page
//! - **json**: the raw scene graph, for other drawing backends

pub mod html;
pub mod json;
pub mod svg;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};
use crate::scene::Scene;

pub use html::HtmlEncoder;
pub use json::JsonEncoder;
pub use svg::{to_svg, SvgEncoder};

/// Encodes a scene for a specific output surface
pub trait SceneEncoder {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// File extension, without the dot
    fn extension(&self) -> &'static str;

    /// MIME type of the encoded output
    fn content_type(&self) -> &'static str;

    /// Encode the scene
    fn encode(&self, scene: &Scene) -> RenderResult<String>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Html,
    Json,
}

impl OutputFormat {
    /// Encoder for this format
    pub fn encoder(self) -> Box<dyn SceneEncoder> {
        match self {
            OutputFormat::Svg => Box::new(SvgEncoder),
            OutputFormat::Html => Box::new(HtmlEncoder::default()),
            OutputFormat::Json => Box::new(JsonEncoder),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "html" | "htm" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("svg".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("png".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_encoder_matches_format() {
        for format in [OutputFormat::Svg, OutputFormat::Html, OutputFormat::Json] {
            let encoder = format.encoder();
            assert_eq!(encoder.extension(), format.extension());
            assert_eq!(encoder.name(), format.to_string());
        }
    }
}
