//! # maintainme
//!
//! Static-site tool for the MaintainME landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Pre-render the page (dark theme) to stdout
//! maintainme render
//!
//! # Light variant into a file, creating dist/ if needed
//! maintainme render --theme light --out dist/index.html
//!
//! # Plan catalogue
//! maintainme plans --json
//! ```
//!
//! Settings can also come from `maintainme.toml` in the working directory;
//! flags win over the file.

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use maintainme_site::Theme;
use tracing::debug;

use commands::RenderPlan;
use config::SiteConfig;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "maintainme")]
#[command(about = "Pre-render the MaintainME landing page and inspect its plans")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the landing page to static HTML
    Render(RenderArgs),
    /// Print the plan catalogue
    Plans(PlansArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Output file (stdout when neither this nor the config sets one)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Theme baked into the page: dark or light
    #[arg(long)]
    theme: Option<Theme>,

    /// Config file (default: ./maintainme.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PlansArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

// ============================================================================
// Entry point
// ============================================================================

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Render(args) => {
            let config = match &args.config {
                Some(path) => SiteConfig::load_explicit(path)?,
                None => {
                    let cwd = std::env::current_dir()
                        .context("Failed to resolve working directory")?;
                    SiteConfig::load(&cwd)
                }
            };
            let plan = RenderPlan::resolve(config, args.theme, args.out);
            debug!(?plan, "render plan");
            commands::render(&plan, &mut stdout)
        }
        Command::Plans(args) => commands::plans(args.json, &mut stdout),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    debug!("maintainme v{}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[maintainme][error] {e:#}");
            ExitCode::FAILURE
        }
    }
}
