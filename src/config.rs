//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::chart::{ChartConfig, SeriesStyle};
use crate::dashboard::{DashboardSettings, PAGE_BACKGROUND};
use crate::scene::Color;
use crate::surface::OutputFormat;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,

    /// Per-series label and color overrides, keyed by series key
    #[serde(default)]
    pub series: BTreeMap<String, SeriesOverride>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default)]
    pub format: OutputFormat,

    /// Output path; `-` writes to stdout. Unset means a timestamped file.
    pub output: Option<String>,

    /// Page background as `#rrggbb`
    pub background: Option<String>,
}

fn default_width() -> f64 {
    1280.0
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            format: OutputFormat::default(),
            output: None,
            background: None,
        }
    }
}

/// Partial style for one series
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeriesOverride {
    pub label: Option<String>,
    pub color: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("chartboard").join("config.toml")),
            Some(PathBuf::from("/etc/chartboard/config.toml")),
            Some(PathBuf::from("./chartboard.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any `CHARTBOARD_*` variable source
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(width) = lookup("CHARTBOARD_WIDTH") {
            match width.parse() {
                Ok(w) => self.render.width = w,
                Err(_) => tracing::warn!("Ignoring CHARTBOARD_WIDTH={:?}: not a number", width),
            }
        }
        if let Some(format) = lookup("CHARTBOARD_FORMAT") {
            match format.parse() {
                Ok(f) => self.render.format = f,
                Err(e) => tracing::warn!("Ignoring CHARTBOARD_FORMAT: {}", e),
            }
        }
        if let Some(output) = lookup("CHARTBOARD_OUTPUT") {
            self.render.output = Some(output);
        }

        if let Some(level) = lookup("CHARTBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CHARTBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Check values the type system does not
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.render.width.is_finite() && self.render.width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "render.width must be positive, got {}",
                self.render.width
            )));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::Invalid(format!(
                "logging.format must be \"pretty\" or \"json\", got {:?}",
                self.logging.format
            )));
        }
        self.background()?;
        for (key, entry) in &self.series {
            if let Some(color) = &entry.color {
                parse_color(&format!("series.{}.color", key), color)?;
            }
        }
        Ok(())
    }

    /// Configured page background, if any
    pub fn background(&self) -> Result<Option<Color>, ConfigError> {
        self.render
            .background
            .as_deref()
            .map(|c| parse_color("render.background", c))
            .transpose()
    }

    /// Layer the series overrides over `base`. Partial entries keep the
    /// base label or color; unknown keys are added.
    pub fn apply_series(&self, base: &mut ChartConfig) -> Result<(), ConfigError> {
        for (key, entry) in &self.series {
            let mut style = base
                .get(key)
                .cloned()
                .unwrap_or_else(|| SeriesStyle::fallback(key, base.len()));
            if let Some(label) = &entry.label {
                style.label = label.clone();
            }
            if let Some(color) = &entry.color {
                style.color = parse_color(&format!("series.{}.color", key), color)?;
            }
            base.insert(key.clone(), style);
        }
        Ok(())
    }

    /// Dashboard settings with this config's width, background and series
    pub fn dashboard_settings(&self) -> Result<DashboardSettings, ConfigError> {
        let mut settings = DashboardSettings::default().with_width(self.render.width);
        settings.background = self.background()?.unwrap_or(PAGE_BACKGROUND);
        self.apply_series(&mut settings.style)?;
        Ok(settings)
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{} is not a hex color: {:?}", field, value)))
}

/// File name for output written without an explicit path
pub fn default_output_name(stem: &str, extension: &str, at: DateTime<Utc>) -> String {
    format!("{}-{}.{}", stem, at.format("%Y%m%d-%H%M%S"), extension)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r##"# chartboard configuration
#
# Environment variables override these settings:
# - CHARTBOARD_WIDTH
# - CHARTBOARD_FORMAT
# - CHARTBOARD_OUTPUT
# - CHARTBOARD_LOG_LEVEL
# - CHARTBOARD_LOG_FORMAT

[render]
# Page width in pixels
width = 1280

# Output format: svg, html or json
format = "svg"

# Output path, "-" for stdout (default: timestamped file in the current directory)
# output = "dashboard.svg"

# Page background color
# background = "#f9fafb"

# Series label and color overrides. Either field may be omitted.
# [series.revenue]
# label = "Income"
# color = "#2563eb"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/chartboard/chartboard.log"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config_parses() {
        let file = write_config(&generate_default_config());
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.render.width, 1280.0);
        assert_eq!(config.render.format, OutputFormat::Svg);
        assert!(config.render.output.is_none());
        assert!(config.series.is_empty());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_sections() {
        let file = write_config(
            r##"
[render]
width = 900
format = "html"
background = "#fff"

[series.revenue]
label = "Income"

[series.profit]
label = "Profit"
color = "#000000"

[logging]
format = "json"
"##,
        );
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.render.width, 900.0);
        assert_eq!(config.render.format, OutputFormat::Html);
        assert_eq!(config.logging.format, "json");

        let settings = config.dashboard_settings().unwrap();
        assert_eq!(settings.width, 900.0);
        assert_eq!(settings.background, Color::WHITE);

        let revenue = settings.style.get("revenue").unwrap();
        assert_eq!(revenue.label, "Income");
        assert_eq!(revenue.color, Color::rgb(0x25, 0x63, 0xeb));
        assert_eq!(settings.style.get("profit").unwrap().color, Color::BLACK);
    }

    #[test]
    fn test_parse_error() {
        let file = write_config("[render\nwidth = ");
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/chartboard.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_values() {
        let file = write_config("[render]\nwidth = 0\n");
        assert!(matches!(
            Config::load(file.path()).unwrap_err(),
            ConfigError::Invalid(_)
        ));

        let file = write_config("[series.revenue]\ncolor = \"blue\"\n");
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("series.revenue.color"));

        let file = write_config("[logging]\nformat = \"xml\"\n");
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("CHARTBOARD_WIDTH", "640"),
            ("CHARTBOARD_FORMAT", "json"),
            ("CHARTBOARD_OUTPUT", "-"),
            ("CHARTBOARD_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides_from(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.render.width, 640.0);
        assert_eq!(config.render.format, OutputFormat::Json);
        assert_eq!(config.render.output.as_deref(), Some("-"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_bad_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides_from(|k| match k {
            "CHARTBOARD_WIDTH" => Some("wide".to_string()),
            "CHARTBOARD_FORMAT" => Some("png".to_string()),
            _ => None,
        });
        assert_eq!(config.render.width, 1280.0);
        assert_eq!(config.render.format, OutputFormat::Svg);
    }

    #[test]
    fn test_default_output_name() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        assert_eq!(
            default_output_name("dashboard", "svg", at),
            "dashboard-20240305-140709.svg"
        );
    }
}
