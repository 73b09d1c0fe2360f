use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a clipboard history item.
///
/// Wraps a 128-bit UUID. Parsing accepts the hyphenated, simple, and braced
/// (`{...}`) textual forms; comparisons go through the parsed value, so id
/// lookups are case-insensitive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ItemId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ItemId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s)
            .map(Self)
            .map_err(|_| crate::Error::IdParse(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hyphenated_form() {
        let id: ItemId = "a1b2c3d4-0000-4000-8000-000000000001".parse().unwrap();
        assert_eq!(id.to_string(), "a1b2c3d4-0000-4000-8000-000000000001");
    }

    #[test]
    fn parses_braced_and_uppercase_forms_to_same_id() {
        let lower: ItemId = "a1b2c3d4-0000-4000-8000-000000000001".parse().unwrap();
        let braced: ItemId = "{A1B2C3D4-0000-4000-8000-000000000001}".parse().unwrap();
        assert_eq!(lower, braced);
    }

    #[test]
    fn rejects_garbage() {
        assert!("not-an-id".parse::<ItemId>().is_err());
    }
}
