//! Catalog loading from JSON files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Error;

/// Parse a JSON array of items from `bytes`.
///
/// An empty array is returned as-is; rejecting it is the deck's job.
///
/// # Errors
/// Returns [`Error::Json`] if the input is not a JSON array of `T`.
pub fn parse<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, Error> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Read and parse a catalog file.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Json`] if it
/// does not contain a JSON array of `T`.
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, Error> {
    let bytes = fs::read(path)?;
    let items: Vec<T> = parse(&bytes)?;
    debug!(path = %path.display(), count = items.len(), "catalog read");
    Ok(items)
}
