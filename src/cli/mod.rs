//! CLI command handlers for Landscaper.
//!
//! This module provides headless, scriptable access to the renderer for
//! automation, testing, and CI/CD integration.

pub mod common;
pub mod inspect;
pub mod render;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use inspect::InspectArgs;
pub use render::RenderArgs;
pub use validate::ValidateArgs;
