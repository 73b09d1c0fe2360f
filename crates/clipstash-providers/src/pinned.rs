use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use clipstash_types::{ItemId, PinnedIdSet};

use crate::error::{Error, Result};

/// Subdirectory of the data directory holding pinned-item metadata.
pub const PINNED_DIR: &str = "pinned";

/// Name of the pinned metadata document.
pub const PINNED_METADATA_FILE: &str = "metadata.json";

/// On-disk shape of the pinned metadata document: an `items` map keyed by
/// item id. The per-item payloads are opaque here.
#[derive(Debug, Deserialize)]
struct PinnedDocument {
    #[serde(default)]
    items: Option<BTreeMap<String, serde_json::Value>>,
}

/// Load the pinned-id set from the metadata document in `pinned_dir`.
///
/// The three failure shapes are distinct: the directory itself missing, the
/// metadata document missing inside it, and a document whose item map is
/// absent or empty. Keys that do not parse as ids are skipped.
pub fn load_pinned(pinned_dir: &Path) -> Result<PinnedIdSet> {
    if !pinned_dir.is_dir() {
        return Err(Error::PinnedDirMissing(pinned_dir.to_path_buf()));
    }

    let path = pinned_dir.join(PINNED_METADATA_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(Error::PinnedMetadataMissing(path));
        }
        Err(err) => return Err(Error::Io(err)),
    };

    let document: PinnedDocument = serde_json::from_str(&content)?;
    let Some(items) = document.items else {
        return Err(Error::PinnedEmpty);
    };
    if items.is_empty() {
        return Err(Error::PinnedEmpty);
    }

    Ok(items
        .keys()
        .filter_map(|key| key.parse::<ItemId>().ok())
        .collect())
}
