use std::collections::HashSet;

use super::id::ItemId;

/// Ids of history items the user pinned for retention.
///
/// Loaded once per invocation; a pure membership predicate thereafter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinnedIdSet(HashSet<ItemId>);

impl PinnedIdSet {
    pub fn contains(&self, id: &ItemId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ItemId> for PinnedIdSet {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn membership_is_by_id_value() {
        let pinned: PinnedIdSet = [ItemId::new(Uuid::from_bytes([1; 16]))]
            .into_iter()
            .collect();
        assert!(pinned.contains(&ItemId::new(Uuid::from_bytes([1; 16]))));
        assert!(!pinned.contains(&ItemId::new(Uuid::from_bytes([2; 16]))));
        assert_eq!(pinned.len(), 1);
    }
}
