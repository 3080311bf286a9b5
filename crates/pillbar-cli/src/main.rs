use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pillbar_core::AppConfig;

mod commands;

use commands::frame::{DragDirection, FrameArgs};

#[derive(Parser)]
#[command(name = "pillbar")]
#[command(author, version, about = "A smooth pill page indicator in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this configuration file instead of ~/.config/pillbar/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive demo
    Run,
    /// Print the draw commands of a single frame
    Frame {
        /// Number of pages
        #[arg(short = 'n', long, default_value_t = 5)]
        pages: usize,
        /// Lower page of the transition
        #[arg(short = 'p', long, default_value_t = 0)]
        page: usize,
        /// Progress towards the next page, 0 to 1
        #[arg(short = 'o', long, default_value_t = 0.0)]
        offset: f32,
        /// Drag direction to replay
        #[arg(short = 'd', long, value_enum, default_value_t = DragDirection::Forward)]
        direction: DragDirection,
        /// Surface width in indicator units
        #[arg(long, default_value_t = 400.0)]
        width: f32,
        /// Surface height in indicator units
        #[arg(long, default_value_t = 40.0)]
        height: f32,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short = 'f', long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)?;

    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Frame {
            pages,
            page,
            offset,
            direction,
            width,
            height,
            json,
        }) => commands::frame::run(
            &config,
            FrameArgs {
                pages,
                page,
                offset,
                direction,
                width,
                height,
            },
            json,
        ),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
    }
}

/// Set up tracing; the interactive demo logs to a file so the screen stays clean
fn init_logging(config: &AppConfig, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if interactive {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
