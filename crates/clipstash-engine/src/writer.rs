use owo_colors::OwoColorize;
use std::io::{self, Write};

use clipstash_types::{ClipItem, ContentType, formats};

use crate::record::RecordFormatter;
use crate::reset::ResetPolicy;

/// Placeholder for content that only exists as an image.
const IMAGE_PLACEHOLDER: &str = "[image]";

/// Resolves one textual value per history entry and writes exactly one
/// record per resolved value.
///
/// Absence of a value is a valid "nothing to print" outcome, never an error;
/// upstream failures are not interpreted here.
pub struct ItemWriter<'a> {
    formatter: &'a RecordFormatter,
    reset: &'a ResetPolicy,
    color: bool,
}

impl<'a> ItemWriter<'a> {
    pub fn new(formatter: &'a RecordFormatter, reset: &'a ResetPolicy, color: bool) -> Self {
        Self {
            formatter,
            reset,
            color,
        }
    }

    /// Resolve the textual value for an entry under the effective filter.
    ///
    /// Text wins when the filter admits it; image-only content becomes a
    /// fixed placeholder; under "all", content with no textual form becomes
    /// a placeholder listing the available format identifiers.
    pub fn render_value(&self, item: &ClipItem, content_type: ContentType) -> Option<String> {
        if content_type.supports_text()
            && let Some(text) = item.content.text()
        {
            return Some(text.to_string());
        }

        if content_type.supports_image() && item.content.has_format(formats::IMAGE) {
            return Some(self.paint(IMAGE_PLACEHOLDER));
        }

        if content_type.is_all() && !item.content.is_empty() {
            let listing = item.content.available_formats().join(", ");
            return Some(self.paint(&format!("[no text representation: {}]", listing)));
        }

        None
    }

    fn paint(&self, placeholder: &str) -> String {
        if self.color {
            format!("{}", placeholder.dimmed())
        } else {
            placeholder.to_string()
        }
    }

    /// Write one record for an entry; reports whether anything was written.
    pub fn write_item<W: Write>(
        &self,
        out: &mut W,
        index: Option<usize>,
        item: &ClipItem,
        content_type: ContentType,
        terminate: bool,
    ) -> io::Result<bool> {
        let Some(value) = self.render_value(item, content_type) else {
            return Ok(false);
        };

        let reset = self.reset.should_reset(&value);
        let record = self
            .formatter
            .format_item(&value, index, &item.id, &item.timestamp, reset, terminate);
        out.write_all(record.as_bytes())?;
        Ok(true)
    }

    /// Write a record for a bare value (no entry metadata).
    pub fn write_value<W: Write>(&self, out: &mut W, value: &str, terminate: bool) -> io::Result<()> {
        let reset = self.reset.should_reset(value);
        let record = self.formatter.format_value(value, reset, terminate);
        out.write_all(record.as_bytes())
    }

    /// Write records for an ordered entry list.
    ///
    /// Each rendered record is held back until the next one resolves so the
    /// final record is written without its terminator. Entries that resolve
    /// to no value are skipped without disturbing the index labels of the
    /// rest. Returns the number of records written.
    pub fn write_list<W: Write>(
        &self,
        out: &mut W,
        items: &[(usize, &ClipItem)],
        content_type: ContentType,
    ) -> io::Result<usize> {
        let mut pending: Option<(usize, &ClipItem, String)> = None;
        let mut written = 0;

        for &(index, item) in items {
            let Some(value) = self.render_value(item, content_type) else {
                continue;
            };
            if let Some((held_index, held_item, held_value)) = pending.take() {
                self.write_resolved(out, held_index, held_item, &held_value, true)?;
                written += 1;
            }
            pending = Some((index, item, value));
        }

        if let Some((index, item, value)) = pending {
            self.write_resolved(out, index, item, &value, false)?;
            written += 1;
        }

        Ok(written)
    }

    fn write_resolved<W: Write>(
        &self,
        out: &mut W,
        index: usize,
        item: &ClipItem,
        value: &str,
        terminate: bool,
    ) -> io::Result<()> {
        let reset = self.reset.should_reset(value);
        let record =
            self.formatter
                .format_item(value, Some(index), &item.id, &item.timestamp, reset, terminate);
        out.write_all(record.as_bytes())
    }
}
