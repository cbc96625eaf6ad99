//! Startup snapshot loading.

use crate::error::{PublisherError, PublisherErrorExt};
use crate::model::Publisher;
use std::fs;
use std::path::Path;

/// Reads a JSON array of publishers from `path`.
///
/// # Errors
/// Returns [`PublisherError::SeedIo`] if the file cannot be read and
/// [`PublisherError::SeedFormat`] if it is not a valid publishers array.
pub fn load_seed(path: &Path) -> Result<Vec<Publisher>, PublisherError> {
    let raw = fs::read(path).context(format!("reading {}", path.display()))?;
    let publishers = serde_json::from_slice(&raw).context(format!("parsing {}", path.display()))?;
    Ok(publishers)
}
