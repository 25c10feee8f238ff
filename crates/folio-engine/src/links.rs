use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

/// URL-component charset: escape everything except ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )` (the `encodeURIComponent` set).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const CONTENT_PREFIX: &str = "/content";

/// Navigation link for a single item, or `None` when the collection has no
/// known primary key or the record is missing its key value.
pub fn item_link(collection: &str, item: &Value, primary_key: Option<&str>) -> Option<String> {
    let pk = primary_key?;
    let raw = match item.get(pk)? {
        Value::String(s) => s.clone(),
        Value::Null => return None,
        other => other.to_string(),
    };

    let encoded = utf8_percent_encode(&raw, COMPONENT);
    Some(format!("{CONTENT_PREFIX}/{collection}/{encoded}"))
}
