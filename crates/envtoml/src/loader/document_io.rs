//! IO helpers for reading documents from disk.

use crate::DecodeError;
use log::{debug, info};
use std::fs;
use std::path::Path;
use toml::Table;

/// Parse TOML text into a table.
pub(super) fn parse(contents: &str) -> Result<Table, DecodeError> {
    Ok(contents.parse::<Table>()?)
}

/// Read and parse a document file.
pub(super) fn read(path: &Path) -> Result<Table, DecodeError> {
    info!("loading document from path: {}", path.display());
    let contents = fs::read_to_string(path)?;
    let table = parse(&contents)?;
    debug!(
        "parsed document (path={}, top_level_keys={})",
        path.display(),
        table.len()
    );
    Ok(table)
}
