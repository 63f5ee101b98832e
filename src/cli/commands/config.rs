//! Config Command
//!
//! Displays the effective configuration and its file locations.

use crate::config::ConfigLoader;
use crate::types::Result;

pub fn show(as_json: bool) -> Result<()> {
    ConfigLoader::show_config(as_json)
}

pub fn path() {
    ConfigLoader::show_path();
}
