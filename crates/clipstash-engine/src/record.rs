use chrono::{DateTime, SecondsFormat, Utc};
use clipstash_types::ItemId;

/// Escape sequence that returns terminal formatting attributes to default.
pub const RESET_SEQUENCE: &str = "\x1b[0m";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Record layout flags, fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordOptions {
    /// Separate records with a null byte instead of the line terminator.
    pub null_separator: bool,
    /// Prefix records with the ordinal index.
    pub show_index: bool,
    /// Prefix records with the item id.
    pub show_id: bool,
    /// Prefix records with the capture timestamp.
    pub show_timestamp: bool,
}

/// Renders one output record from a value and optional metadata.
///
/// Formatting is a pure function of its inputs; writing is the caller's job.
/// When rendering a list, the caller suppresses the final record's
/// terminator so no trailing separator is emitted.
#[derive(Debug, Clone, Copy)]
pub struct RecordFormatter {
    options: RecordOptions,
}

impl RecordFormatter {
    pub fn new(options: RecordOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RecordOptions {
        &self.options
    }

    /// Record for a bare value (the current-clipboard case).
    pub fn format_value(&self, value: &str, reset: bool, terminate: bool) -> String {
        self.render(value, None, None, None, reset, terminate)
    }

    /// Record for a history entry with its metadata.
    pub fn format_item(
        &self,
        value: &str,
        index: Option<usize>,
        id: &ItemId,
        timestamp: &DateTime<Utc>,
        reset: bool,
        terminate: bool,
    ) -> String {
        self.render(value, index, Some(id), Some(timestamp), reset, terminate)
    }

    fn render(
        &self,
        value: &str,
        index: Option<usize>,
        id: Option<&ItemId>,
        timestamp: Option<&DateTime<Utc>>,
        reset: bool,
        terminate: bool,
    ) -> String {
        let mut record = String::new();

        if self.options.show_index
            && let Some(index) = index
        {
            record.push_str(&index.to_string());
            record.push(':');
        }

        if self.options.show_id
            && let Some(id) = id
        {
            record.push_str(&id.to_string());
            record.push(':');
        }

        if self.options.show_timestamp
            && let Some(timestamp) = timestamp
        {
            record.push_str(&timestamp.to_rfc3339_opts(SecondsFormat::Secs, true));
            record.push(':');
        }

        record.push_str(value);

        if reset {
            record.push_str(RESET_SEQUENCE);
        }

        if terminate {
            if self.options.null_separator {
                record.push('\0');
            } else {
                record.push_str(LINE_ENDING);
            }
        }

        record
    }
}
