use std::fmt;
use std::str::FromStr;

use super::content::ClipItem;
use super::id::ItemId;
use crate::Error;

/// Locates one history entry by ordinal position or by stable id.
///
/// Exactly one variant is populated. The two kinds never compare equal, even
/// when an index's decimal text happens to resemble part of an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemLocator {
    /// Zero-based position within the retrieved list. Negative values parse
    /// but can never resolve.
    Index(i64),
    Id(ItemId),
}

impl ItemLocator {
    /// Resolve against an ordered entry list.
    ///
    /// Returns the ordinal position together with the entry so callers keep
    /// the original index label. Out-of-range positions and absent ids yield
    /// `None`.
    pub fn resolve<'a>(&self, items: &'a [ClipItem]) -> Option<(usize, &'a ClipItem)> {
        match self {
            ItemLocator::Index(index) => {
                let index = usize::try_from(*index).ok()?;
                items.get(index).map(|item| (index, item))
            }
            ItemLocator::Id(id) => items.iter().enumerate().find(|(_, item)| item.id == *id),
        }
    }
}

impl FromStr for ItemLocator {
    type Err = Error;

    /// Integer parse wins; the unique-id form is the fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.parse::<i64>() {
            return Ok(ItemLocator::Index(index));
        }
        if let Ok(id) = s.parse::<ItemId>() {
            return Ok(ItemLocator::Id(id));
        }
        Err(Error::LocatorParse(s.to_string()))
    }
}

impl fmt::Display for ItemLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemLocator::Index(index) => write!(f, "{}", index),
            ItemLocator::Id(id) => write!(f, "{}", id),
        }
    }
}
