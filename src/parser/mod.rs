//! Parsing for landscape definition documents.
//!
//! This module handles reading landscape definitions from YAML files and
//! normalizing them into the data model.

pub mod landscape_yaml;

// Re-export commonly used functions
pub use landscape_yaml::{parse_landscape_file, parse_landscape_str};
