use clipstash_types::{ClipItem, PinnedIdSet};

/// Keep only pinned entries, preserving order and original index labels.
///
/// Entries are not renumbered after filtering; each survivor carries the
/// ordinal position it had in the full list.
pub fn filter_pinned<'a>(items: &'a [ClipItem], pinned: &PinnedIdSet) -> Vec<(usize, &'a ClipItem)> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| pinned.contains(&item.id))
        .collect()
}
