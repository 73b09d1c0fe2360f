//! Filesystem layout builder for integration tests.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use clipstash_providers::file::HISTORY_FILE;
use clipstash_providers::pinned::{PINNED_DIR, PINNED_METADATA_FILE};
use clipstash_types::{ClipItem, ItemId};

use crate::fixtures;

/// Temporary data directory in the on-disk shape the CLI expects.
pub struct TestData {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl TestData {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let data_dir = temp_dir.path().join("clipstash");
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            _temp_dir: temp_dir,
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Write the history document for the given items.
    pub fn write_history(&self, items: &[ClipItem]) -> Result<()> {
        let document = fixtures::history_document(items);
        fs::write(
            self.data_dir.join(HISTORY_FILE),
            serde_json::to_string_pretty(&document)?,
        )?;
        Ok(())
    }

    /// Write a raw history document body, bypassing the builders.
    pub fn write_history_raw(&self, body: &str) -> Result<()> {
        fs::write(self.data_dir.join(HISTORY_FILE), body)?;
        Ok(())
    }

    /// Write the pinned metadata document for the given ids.
    pub fn write_pinned(&self, ids: &[ItemId]) -> Result<()> {
        let pinned_dir = self.data_dir.join(PINNED_DIR);
        fs::create_dir_all(&pinned_dir)?;
        let document = fixtures::pinned_document(ids);
        fs::write(
            pinned_dir.join(PINNED_METADATA_FILE),
            serde_json::to_string_pretty(&document)?,
        )?;
        Ok(())
    }

    /// Create the pinned directory without a metadata document inside.
    pub fn create_empty_pinned_dir(&self) -> Result<()> {
        fs::create_dir_all(self.data_dir.join(PINNED_DIR))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{item_id, text_item};
    use clipstash_providers::{FileHistoryStore, HistoryStore, load_pinned, paths};

    #[test]
    fn written_documents_load_through_the_providers() {
        let data = TestData::new().unwrap();
        data.write_history(&[text_item(1, "hello")]).unwrap();
        data.write_pinned(&[item_id(1)]).unwrap();

        let store = FileHistoryStore::new(data.data_dir());
        let items = store.list().unwrap();
        assert_eq!(items[0].content.text(), Some("hello"));

        let pinned = load_pinned(&paths::pinned_dir(data.data_dir())).unwrap();
        assert!(pinned.contains(&item_id(1)));
    }
}
