//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Project config (eli5.toml)
//! 3. Environment variables (ELI5_*)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
