use serde_json::{Map, Value};
use shelf_core::Book;

use crate::FeedError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode a feed payload: a JSON array of record objects.
///
/// Anything else is [`FeedError::Malformed`]. Inside a record, fields of the
/// wrong JSON type are dropped rather than failing the whole feed, and
/// unknown keys are ignored.
pub fn decode_feed(bytes: &[u8]) -> Result<Vec<Book>, FeedError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| FeedError::Malformed(err.to_string()))?;

    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(FeedError::Malformed(format!(
                "expected an array of records, found {}",
                json_kind(&other)
            )))
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(record) => Ok(book_from_record(record)),
            other => Err(FeedError::Malformed(format!(
                "entry {index} is {}, expected an object",
                json_kind(&other)
            ))),
        })
        .collect()
}

fn book_from_record(mut record: Map<String, Value>) -> Book {
    Book {
        title: take_string(&mut record, "title"),
        tags: take_tags(&mut record),
        cover: take_string(&mut record, "cover"),
        srcset: take_string(&mut record, "srcset"),
        sizes: take_string(&mut record, "sizes"),
        annotation: take_string(&mut record, "annotation"),
        read_url: take_string(&mut record, "readUrl"),
        reason: take_string(&mut record, "reason"),
    }
}

fn take_string(record: &mut Map<String, Value>, key: &str) -> Option<String> {
    match record.remove(key) {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

fn take_tags(record: &mut Map<String, Value>) -> Vec<String> {
    match record.remove("tags") {
        Some(Value::Array(tags)) => tags
            .into_iter()
            .filter_map(|tag| match tag {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
