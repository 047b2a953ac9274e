use crate::error::Result;
use crate::record::Record;
use serde_json::Value;
use std::path::Path;

/// Serialize records as one JSON array document and write it whole,
/// overwriting any existing file at `path`.
pub fn encode_to_file<T: Record>(objects: &[T], path: &Path) -> Result<()> {
    let values: Vec<Value> = objects.iter().map(Record::to_value).collect();
    let document = serde_json::to_string_pretty(&values)?;
    super::write_atomic(path, &document)
}

/// Read a JSON array document and rebuild its records.
///
/// Entries that fail to parse are dropped with a warning, so the result
/// may be shorter than the persisted sequence. A document whose top level
/// is not an array is a serialization error.
pub fn decode_from_file<T: Record>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)?;
    let entries: Vec<Value> = serde_json::from_str(&content)?;

    let objects = entries
        .iter()
        .filter_map(|entry| match T::from_value(entry) {
            Some(object) => Some(object),
            None => {
                tracing::warn!(%entry, "Skipping unparseable record");
                None
            }
        })
        .collect();

    Ok(objects)
}
