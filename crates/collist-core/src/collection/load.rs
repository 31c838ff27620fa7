//! Read a collection export from disk.

use serde::Deserialize;
use std::path::Path;

use super::error::CollectionError;
use super::model::Collection;

/// Loads and parses the collection at `path`.
///
/// A missing file is reported as [`CollectionError::NotFound`] before any
/// read is attempted.
pub fn load_collection(path: &Path) -> Result<Collection, CollectionError> {
    if !path.exists() {
        tracing::warn!("collection file not found: {}", path.display());
        return Err(CollectionError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| CollectionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let collection = parse_collection(&bytes)?;
    tracing::debug!(
        "loaded collection {:?} (schema {}) from {} ({} top-level items)",
        collection.name().unwrap_or("<unnamed>"),
        collection.schema().unwrap_or("unknown"),
        path.display(),
        collection.item.len()
    );
    Ok(collection)
}

/// Parses a collection document. Folder nesting depth is not limited: the
/// parser grows its stack on the heap instead of failing.
pub fn parse_collection(bytes: &[u8]) -> Result<Collection, CollectionError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let collection = Collection::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(collection)
}
