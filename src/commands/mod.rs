//! Command handlers for the CLI binary

pub mod check;
pub mod keys;
pub mod typing;

use std::path::Path;

use anyhow::{Context, Result};

/// Read the whole payload up front, before any device I/O is attempted
pub fn read_payload(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
