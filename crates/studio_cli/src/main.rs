// SPDX-License-Identifier: MIT OR Apache-2.0
//! Studio CLI
//!
//! Headless access to the workflow validator, execution planner, canvas
//! culler and snapping helpers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod config;

use config::StudioConfig;

#[derive(Parser)]
#[command(name = "studio")]
#[command(author, version, about = "Creative studio workflow and canvas tools", long_about = None)]
struct Cli {
    /// Configuration file (RON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a connection may be added to a workflow
    Validate {
        /// Workflow document (RON or JSON)
        #[arg(value_name = "WORKFLOW")]
        workflow: PathBuf,

        /// Source node ID
        #[arg(long)]
        source: String,

        /// Source handle ID
        #[arg(long)]
        source_handle: Option<String>,

        /// Target node ID
        #[arg(long)]
        target: String,

        /// Target handle ID
        #[arg(long)]
        target_handle: Option<String>,
    },

    /// Print the execution order and lint findings of a workflow
    Plan {
        /// Workflow document (RON or JSON)
        #[arg(value_name = "WORKFLOW")]
        workflow: PathBuf,
    },

    /// List canvas objects visible on a screen
    Cull {
        /// Canvas document (JSON or RON)
        #[arg(value_name = "CANVAS")]
        canvas: PathBuf,

        /// Screen width in pixels
        #[arg(long)]
        width: f64,

        /// Screen height in pixels
        #[arg(long)]
        height: f64,

        /// Margin in world units (defaults to the configured margin)
        #[arg(long)]
        margin: Option<f64>,
    },

    /// Snap a dragged workflow node to the grid and its neighbours
    Snap {
        /// Workflow document (RON or JSON)
        #[arg(value_name = "WORKFLOW")]
        workflow: PathBuf,

        /// Dragged node ID
        #[arg(long)]
        node: String,

        /// Proposed x position
        #[arg(long, allow_hyphen_values = true)]
        x: f64,

        /// Proposed y position
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },

    /// Snap a dragged timeline clip edge to neighbouring clips
    ClipSnap {
        /// Timeline items (JSON array)
        #[arg(value_name = "TIMELINE")]
        timeline: PathBuf,

        /// Proposed time in milliseconds
        #[arg(long, allow_hyphen_values = true)]
        time: f64,

        /// ID of the dragged item, excluded from snap points
        #[arg(long)]
        exclude: Option<String>,
    },
}

fn init_logging(config: &StudioConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = StudioConfig::load_or_default(cli.config.as_deref())
        .with_context(|| format!("Failed to load config {:?}", cli.config))?;
    init_logging(&config);
    tracing::debug!("Starting studio v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Validate {
            workflow,
            source,
            source_handle,
            target,
            target_handle,
        } => commands::validate::run(&workflow, source, source_handle, target, target_handle),
        Commands::Plan { workflow } => commands::plan::run(&workflow),
        Commands::Cull {
            canvas,
            width,
            height,
            margin,
        } => commands::cull::run(&canvas, width, height, margin.unwrap_or(config.canvas.cull_margin)),
        Commands::Snap { workflow, node, x, y } => {
            commands::snap::run(&workflow, &node, x, y, &config.canvas)
        }
        Commands::ClipSnap {
            timeline,
            time,
            exclude,
        } => commands::clip_snap::run(&timeline, time, exclude.as_deref(), &config.timeline),
    }
}
