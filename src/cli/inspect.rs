//! Inspect command: summarize the landscape matrix.

use crate::cli::common::{CliError, CliResult};
use crate::models::Landscape;
use crate::parser;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Print a density summary of the landscape matrix
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to landscape YAML file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One (domain, layer) cell of the summary.
#[derive(Debug, Serialize)]
pub struct CellSummary {
    /// Domain name.
    pub domain: String,
    /// Layer name.
    pub layer: String,
    /// Aggregate tool + control count.
    pub items: usize,
    /// Number of referenced thumbnails.
    pub images: usize,
}

/// Whole-matrix summary in row-major order.
#[derive(Debug, Serialize)]
pub struct MatrixSummary {
    /// Number of layer rows.
    pub layers: usize,
    /// Number of domain columns.
    pub domains: usize,
    /// Maximum cell item count (intensity scaling reference).
    pub max_items: usize,
    /// Per-cell counts.
    pub cells: Vec<CellSummary>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        if !self.config.exists() {
            return Err(CliError::io(format!(
                "Landscape file not found: {}",
                self.config.display()
            )));
        }

        let landscape = parser::parse_landscape_file(&self.config)
            .map_err(|e| CliError::validation(format!("Failed to load landscape: {e:#}")))?;

        let summary = build_summary(&landscape);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&summary)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!(
                "Landscape: {} domain(s) x {} layer(s), max cell density {}",
                summary.domains, summary.layers, summary.max_items
            );
            println!();
            println!("  {:<24} {:<24} {:>5}  {:>6}", "Domain", "Layer", "Items", "Images");
            for cell in &summary.cells {
                println!(
                    "  {:<24} {:<24} {:>5}  {:>6}",
                    cell.domain, cell.layer, cell.items, cell.images
                );
            }
        }

        Ok(())
    }
}

/// Builds the per-cell summary in row-major (layer, then domain) order.
fn build_summary(landscape: &Landscape) -> MatrixSummary {
    let mut cells = Vec::new();
    for layer in &landscape.layers {
        for domain in &landscape.domains {
            let images = domain
                .entries_for(&layer.id)
                .map(|e| e.images.len())
                .sum::<usize>();
            cells.push(CellSummary {
                domain: domain.name.clone(),
                layer: layer.name.clone(),
                items: domain.cell_item_count(&layer.id),
                images,
            });
        }
    }

    MatrixSummary {
        layers: landscape.layers.len(),
        domains: landscape.domains.len(),
        max_items: landscape.max_item_count(),
        cells,
    }
}
