//! Parsing landscape definitions from YAML documents.
//!
//! The canonical document has `layers` and `domains` at the top level.
//! Definitions that nest the whole landscape under a single program key
//! (a common authoring convention) are accepted by descending one level.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::models::Landscape;

/// Loads and parses a landscape definition from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not contain a
/// well-formed landscape document.
pub fn parse_landscape_file(path: &Path) -> Result<Landscape> {
    let text = fs::read_to_string(path)
        .context(format!("Failed to read landscape file: {}", path.display()))?;
    parse_landscape_str(&text)
        .context(format!("Failed to parse landscape file: {}", path.display()))
}

/// Parses a landscape definition from YAML text.
///
/// # Errors
///
/// Returns an error if the text is not valid YAML or the document does not
/// contain a `layers`/`domains` mapping at the top level (or one level
/// below a single wrapper key).
pub fn parse_landscape_str(text: &str) -> Result<Landscape> {
    let value: serde_yml::Value = serde_yml::from_str(text).context("Invalid YAML document")?;
    let root = unwrap_document_root(value)?;
    let landscape: Landscape =
        serde_yml::from_value(root).context("Document does not match the landscape structure")?;
    Ok(landscape)
}

/// Returns the mapping that holds `layers`/`domains`.
///
/// Accepts either the canonical top-level form or a document wrapped in a
/// single program key.
fn unwrap_document_root(value: serde_yml::Value) -> Result<serde_yml::Value> {
    let serde_yml::Value::Mapping(map) = &value else {
        bail!("Top level of a landscape document must be a mapping");
    };

    if value.get("layers").is_some() {
        return Ok(value);
    }

    if map.len() == 1 {
        if let Some((_, inner)) = map.iter().next() {
            if inner.get("layers").is_some() {
                return Ok(inner.clone());
            }
        }
    }

    bail!("Landscape document has no `layers` section");
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = r"
layers:
  - id: identify
    name: Identify
domains:
  - name: Governance
    entries:
      - layer: identify
        tools: [Registry]
";

    #[test]
    fn test_parse_canonical_document() {
        let landscape = parse_landscape_str(CANONICAL).unwrap();
        assert_eq!(landscape.layers.len(), 1);
        assert_eq!(landscape.domains.len(), 1);
        assert_eq!(landscape.domains[0].entries[0].tools, vec!["Registry"]);
    }

    #[test]
    fn test_parse_wrapped_document() {
        // The whole landscape nested under one program key.
        let wrapped = format!(
            "security_program:\n{}",
            CANONICAL
                .trim_start_matches('\n')
                .lines()
                .map(|l| format!("  {l}\n"))
                .collect::<String>()
        );
        let landscape = parse_landscape_str(&wrapped).unwrap();
        assert_eq!(landscape.layers[0].id, "identify");
        assert_eq!(landscape.domains[0].name, "Governance");
    }

    #[test]
    fn test_reject_scalar_root() {
        assert!(parse_landscape_str("just a string").is_err());
    }

    #[test]
    fn test_reject_document_without_layers() {
        assert!(parse_landscape_str("domains: []").is_err());
        assert!(parse_landscape_str("a: 1\nb: 2").is_err());
    }

    #[test]
    fn test_reject_malformed_yaml() {
        assert!(parse_landscape_str("layers: [unclosed").is_err());
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_landscape_file(Path::new("/nonexistent/landscape.yaml"));
        assert!(err.is_err());
    }
}
