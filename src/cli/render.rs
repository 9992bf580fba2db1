//! Render command: produce the poster PNG.

use crate::cli::common::{CliError, CliResult};
use crate::parser;
use crate::render::{render_landscape, FontProvider, RenderSettings};
use clap::Args;
use std::path::PathBuf;

/// Minimum canvas dimensions; anything smaller leaves no drawable area
/// after margins and chrome.
const MIN_CANVAS_WIDTH: u32 = 320;
const MIN_CANVAS_HEIGHT: u32 = 240;

/// Render a landscape definition to a PNG poster
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Path to landscape YAML file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Output path for the PNG poster
    #[arg(short, long, value_name = "FILE", default_value = "landscape.png")]
    pub output: PathBuf,

    /// Directory holding <name>.png thumbnail assets
    #[arg(long, value_name = "DIR", default_value = "img")]
    pub assets: PathBuf,

    /// Poster title shown in the header band
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Canvas width in pixels
    #[arg(long, value_name = "PIXELS")]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long, value_name = "PIXELS")]
    pub height: Option<u32>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        if !self.config.exists() {
            return Err(CliError::io(format!(
                "Landscape file not found: {}",
                self.config.display()
            )));
        }

        let landscape = parser::parse_landscape_file(&self.config)
            .map_err(|e| CliError::validation(format!("Failed to load landscape: {e:#}")))?;

        let mut settings = RenderSettings {
            asset_dir: self.assets.clone(),
            ..RenderSettings::default()
        };
        if let Some(title) = &self.title {
            settings.title.clone_from(title);
        }
        if let Some(width) = self.width {
            settings.canvas_width = width;
        }
        if let Some(height) = self.height {
            settings.canvas_height = height;
        }
        if settings.canvas_width < MIN_CANVAS_WIDTH || settings.canvas_height < MIN_CANVAS_HEIGHT {
            return Err(CliError::validation(format!(
                "Canvas {}x{} is below the {MIN_CANVAS_WIDTH}x{MIN_CANVAS_HEIGHT} minimum",
                settings.canvas_width, settings.canvas_height
            )));
        }

        let fonts = FontProvider::load();
        let image = render_landscape(&landscape, &settings, &fonts)
            .map_err(|e| CliError::validation(format!("Failed to render landscape: {e:#}")))?;

        image.save(&self.output).map_err(|e| {
            CliError::io(format!("Failed to write {}: {e}", self.output.display()))
        })?;

        println!(
            "✓ Rendered {} domain(s) x {} layer(s)",
            landscape.domains.len(),
            landscape.layers.len()
        );
        println!("  Output: {}", self.output.display());

        Ok(())
    }
}
