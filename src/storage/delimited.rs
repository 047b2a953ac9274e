use crate::error::Result;
use crate::record::Record;
use std::path::Path;

/// Render records as delimited text and write it whole, overwriting any
/// existing file at `path`.
///
/// The first line is a header of [`Record::field_names`] joined by
/// `separator`; every record contributes one line after it.
pub fn encode_to_file<T: Record>(objects: &[T], path: &Path, separator: char) -> Result<()> {
    let sep = separator.to_string();
    let mut lines = Vec::with_capacity(objects.len() + 1);
    lines.push(T::field_names().join(&sep));
    lines.extend(objects.iter().map(|object| object.to_line(separator)));

    super::write_atomic(path, &lines.join("\n"))
}

/// Read delimited text and rebuild its records.
///
/// The header line is discarded without validation. Lines that fail to
/// parse are dropped with a warning, so the result may be shorter than
/// the persisted sequence. An empty file has no header to discard and
/// decodes to an empty collection.
pub fn decode_from_file<T: Record>(path: &Path, separator: char) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)?;
    if content.is_empty() {
        return Ok(Vec::new());
    }

    let objects = content
        .lines()
        .skip(1)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match T::from_line(line, separator) {
            Some(object) => Some(object),
            None => {
                tracing::warn!(line, "Skipping unparseable line");
                None
            }
        })
        .collect();

    Ok(objects)
}
