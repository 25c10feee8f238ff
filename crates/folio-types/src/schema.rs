use serde::{Deserialize, Serialize};

/// A field descriptor supplied by the collection-metadata collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    /// Field name as used in query specifications.
    pub field: String,

    /// Declared type of the field, if the metadata provider knows it.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
}

impl FieldMeta {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            field_type: None,
        }
    }
}

/// Read-only collection metadata, keyed by collection name at the provider.
///
/// folio never mutates this; a collection without a known primary key is a
/// valid, degraded state (empty default sort, no item links, no select-all).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key_field: Option<FieldMeta>,

    #[serde(default)]
    pub fields_in_collection: Vec<FieldMeta>,
}

impl CollectionMeta {
    /// Name of the primary-key field, when one is known.
    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key_field.as_ref().map(|f| f.field.as_str())
    }
}
