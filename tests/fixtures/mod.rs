//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use image::{Rgba, RgbaImage};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// YAML for a small two-layer, one-domain landscape.
///
/// Matches the end-to-end scenario: cell(L1) holds one tool, cell(L2)
/// holds two controls.
pub fn basic_landscape_yaml() -> String {
    r#"
layers:
  - id: L1
    name: First Stage
  - id: L2
    name: Second Stage
domains:
  - name: Operations
    entries:
      - layer: L1
        tools: ["A"]
      - layer: L2
        controls: ["B", "C"]
"#
    .to_string()
}

/// YAML with thumbnail references for asset-handling tests.
pub fn landscape_with_images_yaml() -> String {
    r#"
layers:
  - id: L1
    name: First Stage
domains:
  - name: Vendors
    entries:
      - layer: L1
        tools: ["Scanner"]
        image: "logo_a, logo_b"
"#
    .to_string()
}

/// Structurally invalid YAML: both axes empty.
pub fn empty_axes_yaml() -> String {
    "layers: []\ndomains: []\n".to_string()
}

/// YAML whose single entry references a layer that does not exist.
pub fn unknown_layer_ref_yaml() -> String {
    r"
layers:
  - id: L1
    name: First Stage
domains:
  - name: Operations
    entries:
      - layer: ghost
        tools: [T]
"
    .to_string()
}

/// Writes a landscape YAML file into a fresh temp dir.
///
/// Returns the file path and the `TempDir` guard that keeps it alive.
pub fn create_temp_landscape_file(yaml: &str) -> (PathBuf, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("landscape.yaml");
    fs::write(&path, yaml).expect("Failed to write landscape file");
    (path, dir)
}

/// Creates an asset directory holding a solid-color PNG thumbnail for each
/// of the given names.
pub fn create_temp_assets(names: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for name in names {
        let image = RgbaImage::from_pixel(48, 32, Rgba([40, 90, 160, 255]));
        image
            .save(dir.path().join(format!("{name}.png")))
            .expect("Failed to write asset");
    }
    dir
}
