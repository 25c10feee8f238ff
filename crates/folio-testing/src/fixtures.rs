use folio_runtime::SchemaProvider;
use folio_types::{CollectionMeta, FieldMeta};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Schema provider backed by a fixed collection map.
#[derive(Debug, Default)]
pub struct StaticSchema {
    collections: HashMap<String, CollectionMeta>,
}

impl StaticSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, name: impl Into<String>, meta: CollectionMeta) -> Self {
        self.collections.insert(name.into(), meta);
        self
    }
}

impl SchemaProvider for StaticSchema {
    fn collection_meta(&self, collection: &str) -> Option<CollectionMeta> {
        self.collections.get(collection).cloned()
    }
}

/// Metadata for the sample `articles` collection used across tests.
pub fn articles_meta() -> CollectionMeta {
    CollectionMeta {
        primary_key_field: Some(FieldMeta::new("id")),
        fields_in_collection: vec![
            FieldMeta::new("id"),
            FieldMeta::new("name"),
            FieldMeta::new("author"),
            FieldMeta::new("year"),
            FieldMeta::new("cover"),
        ],
    }
}

/// Generate `count` sample article records with sequential ids.
pub fn sample_articles(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|n| {
            json!({
                "id": n,
                "name": format!("Article {n}"),
                "author": format!("Author {}", (n % 5) + 1),
                "year": 2000 + (n as i64 % 25),
            })
        })
        .collect()
}
