use serde_json::Value;

/// Capabilities a domain type must provide so an
/// [`ObjectStore`](crate::store::ObjectStore) can persist it.
///
/// Both codecs go through this trait: the JSON codec uses
/// [`to_value`](Record::to_value) / [`from_value`](Record::from_value),
/// the delimited-text codec uses [`field_names`](Record::field_names),
/// [`to_line`](Record::to_line) and [`from_line`](Record::from_line).
pub trait Record: Sized {
    /// Identity key. Must be stable across serialization round-trips.
    type Id: PartialEq;

    fn id(&self) -> Self::Id;

    /// Structured-record view of this value, as a JSON document.
    fn to_value(&self) -> Value;

    /// Rebuild a record from its structured-record view.
    ///
    /// Returns `None` on malformed input; decoders drop such entries
    /// instead of failing the whole load.
    fn from_value(value: &Value) -> Option<Self>;

    /// Field names in record order, used as the delimited-text header.
    fn field_names() -> &'static [&'static str];

    /// Render this record as one delimited-text line.
    ///
    /// Fields appear in [`field_names`](Record::field_names) order, joined
    /// by `separator`. Implementations that do not escape the separator
    /// inside field values will not round-trip such values.
    fn to_line(&self, separator: char) -> String;

    /// Rebuild a record from one delimited-text line.
    ///
    /// Returns `None` on malformed input; decoders drop such lines
    /// instead of failing the whole load.
    fn from_line(line: &str, separator: char) -> Option<Self>;
}
