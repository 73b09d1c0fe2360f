use clipstash_types::{ClipItem, ContentType};

use crate::Result;

/// Outcome of replacing the current clipboard content with a history item.
///
/// Kept separate from read failures: a successful read can coexist with a
/// failed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetCurrentOutcome {
    Applied,
    /// The item disappeared between the read and the write.
    ItemMissing,
    AccessDenied,
}

/// Boundary to the platform clipboard-history service.
///
/// Implementations own all blocking I/O; callers invoke each operation at
/// most once per command.
pub trait HistoryStore: Send + Sync {
    /// Ordered history entries, most recent first.
    fn list(&self) -> Result<Vec<ClipItem>>;

    /// Text of the current clipboard content for the requested type.
    ///
    /// `None` is the valid "nothing to print" outcome.
    fn current(&self, content_type: ContentType) -> Result<Option<String>>;

    /// Make a history item the current clipboard content.
    fn set_current(&self, item: &ClipItem) -> Result<SetCurrentOutcome>;
}
