/// Identifier for the source that exported a table.
/// Example: `mongo::network_security::phishing_data`
pub type SourceId = String;
/// Named table column.
/// Examples: `having_IP_Address`, `URL_Length`, `Result`
pub type ColumnName = String;
/// Field name inside a source document.
/// Examples: `_id`, `SSLfinal_State`
pub type FieldName = String;
/// A schemaless document as exported from the store, keyed by field name.
pub type RawDocument = serde_json::Map<String, serde_json::Value>;
