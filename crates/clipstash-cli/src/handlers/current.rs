use anyhow::Result;
use std::io::{self, Write};

use clipstash_engine::{ItemWriter, RecordFormatter, ResetPolicy};
use clipstash_providers::HistoryStore;
use clipstash_types::ContentType;

pub fn handle(
    store: &dyn HistoryStore,
    content_type: ContentType,
    formatter: &RecordFormatter,
    policy: &ResetPolicy,
) -> Result<()> {
    // An absent value is a valid "nothing to print" outcome.
    let Some(value) = store.current(content_type)? else {
        return Ok(());
    };

    let writer = ItemWriter::new(formatter, policy, false);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writer.write_value(&mut out, &value, false)?;
    out.flush()?;

    Ok(())
}
