use anyhow::Result;
use std::io::{self, Write};

use clipstash_engine::{ItemWriter, RecordFormatter, ResetPolicy};
use clipstash_providers::{HistoryStore, SetCurrentOutcome};
use clipstash_types::{ContentType, ItemLocator};

#[allow(clippy::too_many_arguments)]
pub fn handle(
    store: &dyn HistoryStore,
    locator_text: &str,
    content_type: ContentType,
    formatter: &RecordFormatter,
    policy: &ResetPolicy,
    color: bool,
    restore: bool,
) -> Result<()> {
    // Parse failures surface before the store is touched.
    let locator: ItemLocator = locator_text.parse()?;

    let items = store.list()?;
    let Some((index, item)) = locator.resolve(&items) else {
        match locator {
            ItemLocator::Index(index) => anyhow::bail!("no history item at index {}", index),
            ItemLocator::Id(id) => anyhow::bail!("no history item with id {}", id),
        }
    };

    let writer = ItemWriter::new(formatter, policy, color);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writer.write_item(&mut out, Some(index), item, content_type, false)?;
    out.flush()?;

    // The read already succeeded; a failing restore is its own diagnostic.
    if restore {
        match store.set_current(item)? {
            SetCurrentOutcome::Applied => {}
            SetCurrentOutcome::ItemMissing => {
                anyhow::bail!("item {} disappeared before it could be restored", item.id)
            }
            SetCurrentOutcome::AccessDenied => {
                anyhow::bail!("the clipboard refused item {}", item.id)
            }
        }
    }

    Ok(())
}
