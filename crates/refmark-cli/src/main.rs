//! Refmark CLI - Render TypeDoc reflection output as markdown

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use refmark_core::{Config, Emit, CONFIG_FILE};

mod groups;
mod render;

#[derive(Parser)]
#[command(name = "refmark")]
#[command(version = refmark_core::VERSION)]
#[command(about = "Render TypeDoc reflection output as markdown", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a TypeDoc JSON document to markdown on stdout
    Render {
        /// Path to the TypeDoc JSON output (`-` reads stdin)
        input: PathBuf,

        /// Config file (defaults to ./refmark.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Which groups to emit (first or all)
        #[arg(long)]
        emit: Option<Emit>,

        /// Deepest heading level allowed
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// List the groups declared in a TypeDoc JSON document
    Groups {
        /// Path to the TypeDoc JSON output (`-` reads stdin)
        input: PathBuf,

        /// Config file (defaults to ./refmark.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Initialize tracing on stderr so stdout carries only markdown
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "refmark_core=debug,refmark=debug"
        } else {
            "refmark_core=info,refmark=info"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load the explicit config file, or `refmark.toml` from the working directory
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::from_path(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()));
    }

    let default_path = Path::new(CONFIG_FILE);
    if default_path.exists() {
        tracing::debug!(path = CONFIG_FILE, "using config from working directory");
        Config::from_path(default_path).context("Failed to load refmark.toml")
    } else {
        Ok(Config::default())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render {
            input,
            config,
            emit,
            max_depth,
        } => {
            let options = render::RenderOptions {
                input,
                config: load_config(config.as_deref())?,
                emit,
                max_depth,
            };
            let output = render::render_document(&options)?;
            println!("{output}");
        }

        Commands::Groups { input, config } => {
            let config = load_config(config.as_deref())?;
            for summary in groups::list_groups(&input, &config)? {
                println!("{summary}");
            }
        }
    }

    Ok(())
}
