use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clipstash_types::{ClipContent, ClipItem, ContentType, ItemId};

use crate::error::{Error, Result};
use crate::traits::{HistoryStore, SetCurrentOutcome};

/// Name of the history document inside the data directory.
pub const HISTORY_FILE: &str = "history.json";

/// On-disk shape of the history document, as written by the capture side.
#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryDocument {
    #[serde(default)]
    items: Vec<HistoryRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct HistoryRecord {
    id: ItemId,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    formats: ClipContent,
}

impl From<HistoryRecord> for ClipItem {
    fn from(record: HistoryRecord) -> Self {
        ClipItem {
            id: record.id,
            timestamp: record.timestamp,
            content: record.formats,
        }
    }
}

/// History store backed by a JSON document in the data directory.
///
/// Reading the document here keeps the query path independent of any
/// platform clipboard API; the head of the item list is the current
/// clipboard content.
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(HISTORY_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<HistoryDocument> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(Error::HistoryDisabled(self.path.clone()));
            }
            Err(err) if err.kind() == ErrorKind::PermissionDenied => {
                return Err(Error::AccessDenied(self.path.clone()));
            }
            Err(err) => return Err(Error::Io(err)),
        };
        Ok(serde_json::from_str(&content)?)
    }

    fn write_document(&self, document: &HistoryDocument) -> Result<()> {
        let content = serde_json::to_string_pretty(document)?;
        match fs::write(&self.path, content) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::PermissionDenied => {
                Err(Error::AccessDenied(self.path.clone()))
            }
            Err(err) => Err(Error::Io(err)),
        }
    }
}

impl HistoryStore for FileHistoryStore {
    fn list(&self) -> Result<Vec<ClipItem>> {
        let document = self.read_document()?;
        if document.items.is_empty() {
            return Err(Error::EmptyHistory);
        }
        Ok(document.items.into_iter().map(ClipItem::from).collect())
    }

    fn current(&self, content_type: ContentType) -> Result<Option<String>> {
        let document = self.read_document()?;
        let Some(head) = document.items.first() else {
            return Ok(None);
        };
        if content_type.supports_text() {
            return Ok(head.formats.text().map(str::to_string));
        }
        Ok(None)
    }

    fn set_current(&self, item: &ClipItem) -> Result<SetCurrentOutcome> {
        let mut document = match self.read_document() {
            Ok(document) => document,
            Err(Error::AccessDenied(_)) => return Ok(SetCurrentOutcome::AccessDenied),
            Err(err) => return Err(err),
        };

        let Some(position) = document.items.iter().position(|record| record.id == item.id) else {
            return Ok(SetCurrentOutcome::ItemMissing);
        };

        let record = document.items.remove(position);
        document.items.insert(0, record);

        match self.write_document(&document) {
            Ok(()) => Ok(SetCurrentOutcome::Applied),
            Err(Error::AccessDenied(_)) => Ok(SetCurrentOutcome::AccessDenied),
            Err(err) => Err(err),
        }
    }
}
