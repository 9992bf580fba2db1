//! Validation command for landscape definition files.

use crate::cli::common::{CliError, CliResult};
use crate::models::Landscape;
use crate::parser;
use crate::render::thumbs;
use clap::Args;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Validate a landscape definition for errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to landscape YAML file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Directory holding <name>.png thumbnail assets
    #[arg(long, value_name = "DIR", default_value = "img")]
    pub assets: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// Per-check status summary.
#[derive(Debug, Serialize)]
pub struct ValidationChecks {
    /// Axis and identity checks on the document structure.
    pub structure: String,
    /// Entry layer reference checks.
    pub layer_refs: String,
    /// Thumbnail asset presence checks.
    pub assets: String,
}

/// A single validation finding.
#[derive(Debug, Serialize)]
pub struct ValidationMessage {
    /// "error" or "warning".
    pub severity: String,
    /// Human-readable description.
    pub message: String,
}

/// Full validation outcome for one document.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    /// True when no errors were found (warnings allowed).
    pub valid: bool,
    /// Per-check statuses.
    pub checks: ValidationChecks,
    /// All findings, errors first.
    pub messages: Vec<ValidationMessage>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        if !self.config.exists() {
            return Err(CliError::io(format!(
                "Landscape file not found: {}",
                self.config.display()
            )));
        }

        let landscape = parser::parse_landscape_file(&self.config)
            .map_err(|e| CliError::validation(format!("Failed to load landscape: {e:#}")))?;

        let response = build_response(&landscape, &self.assets);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }

            println!("\nChecks:");
            println!("  Structure:  {}", response.checks.structure);
            println!("  Layer refs: {}", response.checks.layer_refs);
            println!("  Assets:     {}", response.checks.assets);

            if !response.messages.is_empty() {
                println!("\nIssues:");
                for msg in &response.messages {
                    let prefix = if msg.severity == "error" { "  ✗" } else { "  ⚠" };
                    println!("{} {}", prefix, msg.message);
                }
            }
        }

        let has_warnings = response.messages.iter().any(|m| m.severity == "warning");
        if !response.valid {
            return Err(CliError::validation("Landscape validation failed"));
        }
        if self.strict && has_warnings {
            return Err(CliError::validation("Warnings treated as errors (--strict)"));
        }

        Ok(())
    }
}

/// Runs all checks against the parsed landscape.
fn build_response(landscape: &Landscape, asset_dir: &Path) -> ValidationResponse {
    let mut messages = Vec::new();
    let mut structure = "passed".to_string();
    let mut layer_refs = "passed".to_string();
    let mut assets = "passed".to_string();

    if landscape.layers.is_empty() {
        structure = "failed".to_string();
        messages.push(error("Landscape has no layers"));
    }
    if landscape.domains.is_empty() {
        structure = "failed".to_string();
        messages.push(error("Landscape has no domains"));
    }

    let mut seen = HashSet::new();
    for layer in &landscape.layers {
        if !seen.insert(layer.id.as_str()) {
            structure = "failed".to_string();
            messages.push(error(format!("Duplicate layer id '{}'", layer.id)));
        }
    }

    let layer_ids: HashSet<&str> = landscape.layers.iter().map(|l| l.id.as_str()).collect();
    for domain in &landscape.domains {
        for entry in &domain.entries {
            if !layer_ids.contains(entry.layer.as_str()) {
                layer_refs = "warning".to_string();
                messages.push(warning(format!(
                    "Domain '{}' references unknown layer '{}'; the entry will not be rendered",
                    domain.name, entry.layer
                )));
            }
            for name in &entry.images {
                let path = thumbs::asset_path(asset_dir, name);
                if !path.exists() {
                    assets = "warning".to_string();
                    messages.push(warning(format!(
                        "Thumbnail not found: {} (referenced by domain '{}')",
                        path.display(),
                        domain.name
                    )));
                }
            }
        }
    }

    messages.sort_by_key(|m| m.severity != "error");
    let valid = messages.iter().all(|m| m.severity != "error");

    ValidationResponse {
        valid,
        checks: ValidationChecks {
            structure,
            layer_refs,
            assets,
        },
        messages,
    }
}

fn error(message: impl Into<String>) -> ValidationMessage {
    ValidationMessage {
        severity: "error".to_string(),
        message: message.into(),
    }
}

fn warning(message: impl Into<String>) -> ValidationMessage {
    ValidationMessage {
        severity: "warning".to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_landscape_str;

    #[test]
    fn test_valid_document_passes() {
        let landscape = parse_landscape_str(
            "layers:\n  - id: a\n    name: A\ndomains:\n  - name: D\n    entries:\n      - layer: a\n        tools: [T]\n",
        )
        .unwrap();
        let response = build_response(&landscape, Path::new("img"));
        assert!(response.valid);
        assert!(response.messages.is_empty());
    }

    #[test]
    fn test_empty_axes_are_errors() {
        let landscape = parse_landscape_str("layers: []\ndomains: []\n").unwrap();
        let response = build_response(&landscape, Path::new("img"));
        assert!(!response.valid);
        assert_eq!(response.checks.structure, "failed");
        assert_eq!(response.messages.len(), 2);
    }

    #[test]
    fn test_duplicate_layer_ids_are_errors() {
        let landscape = parse_landscape_str(
            "layers:\n  - id: a\n    name: A\n  - id: a\n    name: Again\ndomains:\n  - name: D\n",
        )
        .unwrap();
        let response = build_response(&landscape, Path::new("img"));
        assert!(!response.valid);
    }

    #[test]
    fn test_unknown_layer_ref_is_warning_only() {
        let landscape = parse_landscape_str(
            "layers:\n  - id: a\n    name: A\ndomains:\n  - name: D\n    entries:\n      - layer: ghost\n",
        )
        .unwrap();
        let response = build_response(&landscape, Path::new("img"));
        assert!(response.valid, "unknown refs do not invalidate the document");
        assert_eq!(response.checks.layer_refs, "warning");
        assert_eq!(response.messages.len(), 1);
    }

    #[test]
    fn test_missing_asset_is_warning() {
        let landscape = parse_landscape_str(
            "layers:\n  - id: a\n    name: A\ndomains:\n  - name: D\n    entries:\n      - layer: a\n        image: missing_logo\n",
        )
        .unwrap();
        let response = build_response(&landscape, Path::new("/nonexistent"));
        assert!(response.valid);
        assert_eq!(response.checks.assets, "warning");
    }

    #[test]
    fn test_errors_sorted_before_warnings() {
        let landscape = parse_landscape_str(
            "layers: []\ndomains:\n  - name: D\n    entries:\n      - layer: ghost\n",
        )
        .unwrap();
        let response = build_response(&landscape, Path::new("img"));
        assert_eq!(response.messages[0].severity, "error");
        assert_eq!(response.messages.last().unwrap().severity, "warning");
    }
}
