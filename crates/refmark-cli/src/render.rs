//! Implementation of the `refmark render` command.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use refmark_core::{select_output, Config, Document, Emit, OutputAssembler};

/// Options for rendering a document.
#[derive(Debug)]
pub struct RenderOptions {
    /// TypeDoc JSON file, or `-` for stdin.
    pub input: PathBuf,
    /// Settings from the config file.
    pub config: Config,
    /// Emit policy overriding the config file.
    pub emit: Option<Emit>,
    /// Depth limit overriding the config file.
    pub max_depth: Option<usize>,
}

/// Read a document from a path, or from stdin when the path is `-`.
pub fn read_document(input: &Path) -> Result<Document> {
    if input == Path::new("-") {
        Document::from_reader(std::io::stdin().lock())
            .context("Failed to read document from stdin")
    } else {
        Document::from_path(input)
            .with_context(|| format!("Failed to load '{}'", input.display()))
    }
}

/// Render a document and return the text for stdout.
pub fn render_document(options: &RenderOptions) -> Result<String> {
    let mut settings = options.config.render.clone();
    if let Some(emit) = options.emit {
        settings.emit = emit;
    }
    if let Some(max_depth) = options.max_depth {
        settings.max_depth = max_depth;
    }
    settings.validate().context("Invalid render settings")?;

    let document = read_document(&options.input)?;
    let groups = OutputAssembler::from_config(&settings)
        .assemble(&document)
        .with_context(|| format!("Failed to render '{}'", options.input.display()))?;

    match (settings.emit, groups.len()) {
        (_, 0) => tracing::warn!("document declares no groups, nothing to render"),
        (Emit::First, n) if n > 1 => {
            tracing::info!(
                skipped = n - 1,
                "emitting only the first group, pass --emit all for the rest"
            );
        }
        _ => {}
    }

    Ok(select_output(&groups, settings.emit))
}
