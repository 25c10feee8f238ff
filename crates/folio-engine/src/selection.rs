use serde_json::Value;

/// Project every item's primary-key value, in item order.
///
/// The item list is deep-copied before projection so collaborator-owned
/// records are never aliased into the selection. Without a known primary key
/// the selection is left for the caller to keep unchanged (empty result).
pub fn select_all(items: &[Value], primary_key: Option<&str>) -> Vec<Value> {
    let Some(pk) = primary_key else {
        return Vec::new();
    };

    let copies: Vec<Value> = items.to_vec();
    copies
        .into_iter()
        .map(|item| item.get(pk).cloned().unwrap_or(Value::Null))
        .collect()
}
