//! In-memory `HistoryStore` for unit tests.

use std::sync::Mutex;

use clipstash_providers::{Error, HistoryStore, Result, SetCurrentOutcome};
use clipstash_types::{ClipItem, ContentType};

/// History store holding its items in memory.
///
/// Mirrors the file-backed store's semantics: the head of the list is the
/// current clipboard content, and `set_current` moves an item to the head.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<Vec<ClipItem>>,
    deny_set_current: bool,
}

impl MemoryStore {
    pub fn new(items: Vec<ClipItem>) -> Self {
        Self {
            items: Mutex::new(items),
            deny_set_current: false,
        }
    }

    /// Store whose `set_current` always reports an access denial.
    pub fn denying_set_current(items: Vec<ClipItem>) -> Self {
        Self {
            items: Mutex::new(items),
            deny_set_current: true,
        }
    }

    pub fn snapshot(&self) -> Vec<ClipItem> {
        self.items.lock().expect("store lock").clone()
    }
}

impl HistoryStore for MemoryStore {
    fn list(&self) -> Result<Vec<ClipItem>> {
        let items = self.items.lock().expect("store lock");
        if items.is_empty() {
            return Err(Error::EmptyHistory);
        }
        Ok(items.clone())
    }

    fn current(&self, content_type: ContentType) -> Result<Option<String>> {
        let items = self.items.lock().expect("store lock");
        let Some(head) = items.first() else {
            return Ok(None);
        };
        if content_type.supports_text() {
            return Ok(head.content.text().map(str::to_string));
        }
        Ok(None)
    }

    fn set_current(&self, item: &ClipItem) -> Result<SetCurrentOutcome> {
        if self.deny_set_current {
            return Ok(SetCurrentOutcome::AccessDenied);
        }

        let mut items = self.items.lock().expect("store lock");
        let Some(position) = items.iter().position(|candidate| candidate.id == item.id) else {
            return Ok(SetCurrentOutcome::ItemMissing);
        };
        let moved = items.remove(position);
        items.insert(0, moved);
        Ok(SetCurrentOutcome::Applied)
    }
}
