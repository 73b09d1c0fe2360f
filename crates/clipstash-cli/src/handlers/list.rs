use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use clipstash_engine::{ItemWriter, RecordFormatter, ResetPolicy, filter_pinned};
use clipstash_providers::{HistoryStore, load_pinned};
use clipstash_types::{ClipItem, ContentType};

pub fn handle(
    store: &dyn HistoryStore,
    pinned_dir: Option<&Path>,
    content_type: ContentType,
    formatter: &RecordFormatter,
    policy: &ResetPolicy,
    color: bool,
) -> Result<()> {
    let items = store.list()?;

    let indexed: Vec<(usize, &ClipItem)> = match pinned_dir {
        Some(pinned_dir) => {
            let pinned = load_pinned(pinned_dir)?;
            let filtered = filter_pinned(&items, &pinned);
            if filtered.is_empty() {
                anyhow::bail!("none of the pinned items are in the history");
            }
            filtered
        }
        None => items.iter().enumerate().collect(),
    };

    let writer = ItemWriter::new(formatter, policy, color);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writer.write_list(&mut out, &indexed, content_type)?;
    out.flush()?;

    Ok(())
}
