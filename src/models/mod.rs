//! Data models for landscape definitions and colors.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of rendering and
//! CLI logic.

pub mod landscape;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use landscape::{Domain, Entry, Landscape, Layer};
pub use palette::{domain_base_color, DOMAIN_PALETTE};
pub use rgb::RgbColor;
