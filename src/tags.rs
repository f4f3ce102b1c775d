//! Tag dictionary extraction: custom annotation tags as a keyed map.

use crate::model::RawRecord;
use serde_json::{Map, Value};

/// Collect a record's `tags` array into a title → value map.
///
/// Later duplicates overwrite earlier ones. A tag without a value slot
/// maps to `Null`, which the normalizer treats as "unset the field".
/// Entries that are not objects or lack a string title are skipped.
pub fn tag_dict(record: &RawRecord) -> Map<String, Value> {
    let mut dict = Map::new();

    let Some(Value::Array(tags)) = record.get("tags") else {
        return dict;
    };
    for tag in tags {
        let Some(title) = tag.get("title").and_then(Value::as_str) else {
            continue;
        };
        let value = tag.get("value").cloned().unwrap_or(Value::Null);
        dict.insert(title.to_string(), value);
    }

    dict
}
