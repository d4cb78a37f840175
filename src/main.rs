//! chartboard CLI
//!
//! Command-line interface for rendering the dashboard:
//! - Render the whole page or a single chart
//! - List chart panels
//! - Export the sample datasets
//! - Print the default config file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chartboard::config::{default_output_name, generate_default_config, Config, LoggingConfig};
use chartboard::dashboard::{self, datasets};
use chartboard::{export_dataset, ExportFormat, OutputFormat, RenderError, Scene};

#[derive(Parser)]
#[command(name = "chartboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render the charts dashboard as SVG, HTML or JSON")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the full dashboard page
    Render {
        /// Output format (svg, html, json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
        /// Output file, "-" for stdout (default: timestamped file)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Page width in pixels
        #[arg(short, long)]
        width: Option<f64>,
    },

    /// Render a single chart panel
    Chart {
        /// Panel id (see `list`)
        id: String,
        /// Output format (svg, html, json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
        /// Output file, "-" for stdout (default: timestamped file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List chart panels and datasets
    List,

    /// Export a sample dataset
    Export {
        /// Dataset name (sales, user-growth, devices, performance)
        dataset: String,
        /// Export format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };

    init_tracing(&config.logging)?;
    tracing::debug!("chartboard v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Render {
            format,
            output,
            width,
        } => {
            let mut settings = config
                .dashboard_settings()
                .context("building dashboard settings")?;
            if let Some(width) = width {
                settings.width = width;
            }
            let scene = dashboard::build_dashboard(&settings);
            let format = format.unwrap_or(config.render.format);
            write_scene(&scene, format, output, &config, "dashboard")?;
        }

        Commands::Chart { id, format, output } => {
            let settings = config
                .dashboard_settings()
                .context("building dashboard settings")?;
            let scene = dashboard::render_panel(&id, &settings)
                .ok_or_else(|| RenderError::UnknownChart(id.clone()))?;
            let format = format.unwrap_or(config.render.format);
            write_scene(&scene, format, output, &config, &id)?;
        }

        Commands::List => {
            println!("{:<14} {:<14} {:<24} {}", "Chart", "Kind", "Title", "Dataset");
            println!("{}", "-".repeat(70));
            for panel in dashboard::panels() {
                println!(
                    "{:<14} {:<14} {:<24} {}",
                    panel.id,
                    panel.kind.to_string(),
                    panel.title,
                    panel.dataset
                );
            }
            println!();
            println!("Datasets: {}", datasets::DATASET_NAMES.join(", "));
        }

        Commands::Export {
            dataset,
            format,
            output,
        } => {
            let data = datasets::by_name(&dataset)?;
            let content = export_dataset(&data, datasets::series_keys(&dataset), format)
                .with_context(|| format!("exporting dataset {}", dataset))?;

            match output {
                Some(path) => {
                    write_file(&path, &content)?;
                    println!("Exported to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    write_file(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("chartboard={}", logging.level).into());

    let file = match &logging.file {
        Some(path) => Some(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path))?,
        ),
        None => None,
    };

    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries rendered output; logs go to stderr or the log file
    match (logging.format.as_str(), file) {
        ("json", Some(file)) => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::sync::Mutex::new(file)))
            .init(),
        ("json", None) => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        (_, Some(file)) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file)),
            )
            .init(),
        (_, None) => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    Ok(())
}

fn write_scene(
    scene: &Scene,
    format: OutputFormat,
    output: Option<PathBuf>,
    config: &Config,
    stem: &str,
) -> Result<()> {
    let encoder = format.encoder();
    let content = encoder
        .encode(scene)
        .with_context(|| format!("encoding {} as {}", stem, encoder.name()))?;

    let target = output
        .or_else(|| config.render.output.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| {
            PathBuf::from(default_output_name(stem, encoder.extension(), chrono::Utc::now()))
        });

    if target.as_os_str() == "-" {
        print!("{}", content);
        return Ok(());
    }

    write_file(&target, &content)?;
    tracing::info!(
        path = %target.display(),
        bytes = content.len(),
        content_type = encoder.content_type(),
        "wrote {}",
        stem
    );
    println!("Rendered {} to {:?}", stem, target);
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    // Create parent directory if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {:?}", parent))?;
        }
    }
    std::fs::write(path, content).with_context(|| format!("writing {:?}", path))?;
    Ok(())
}
