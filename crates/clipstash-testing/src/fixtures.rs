//! Deterministic item and document builders.

use chrono::{DateTime, TimeZone, Utc};
use clipstash_types::{ClipContent, ClipItem, ClipPayload, ItemId, formats};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Fixed epoch all fixture timestamps are derived from.
const FIXTURE_EPOCH: i64 = 1_700_000_000;

/// Deterministic item id derived from a single byte marker.
pub fn item_id(marker: u8) -> ItemId {
    ItemId::new(Uuid::from_bytes([marker; 16]))
}

/// Timestamp `seconds` after the fixture epoch.
pub fn timestamp(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(FIXTURE_EPOCH + seconds, 0)
        .single()
        .expect("fixture timestamp in range")
}

/// History item carrying only inline text.
pub fn text_item(marker: u8, text: &str) -> ClipItem {
    item_with_formats(
        marker,
        [(formats::TEXT.to_string(), ClipPayload::Text(text.to_string()))].into(),
    )
}

/// History item carrying only an opaque image payload.
pub fn image_item(marker: u8, bytes: u64) -> ClipItem {
    item_with_formats(
        marker,
        [(formats::IMAGE.to_string(), ClipPayload::Binary { bytes })].into(),
    )
}

/// History item with an arbitrary format map.
pub fn item_with_formats(marker: u8, format_map: BTreeMap<String, ClipPayload>) -> ClipItem {
    ClipItem {
        id: item_id(marker),
        timestamp: timestamp(i64::from(marker)),
        content: ClipContent::new(format_map),
    }
}

/// Serialize items into the on-disk history document shape.
pub fn history_document(items: &[ClipItem]) -> serde_json::Value {
    serde_json::json!({
        "items": items
            .iter()
            .map(|item| serde_json::json!({
                "id": item.id,
                "timestamp": item.timestamp,
                "formats": item.content,
            }))
            .collect::<Vec<_>>(),
    })
}

/// Serialize a pinned metadata document for the given ids.
pub fn pinned_document(ids: &[ItemId]) -> serde_json::Value {
    let items: serde_json::Map<String, serde_json::Value> = ids
        .iter()
        .map(|id| (id.to_string(), serde_json::json!({})))
        .collect();
    serde_json::json!({ "items": items })
}
