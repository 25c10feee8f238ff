use anyhow::{Result, bail};
use folio_runtime::ItemService;
use folio_types::QuerySpec;
use serde_json::Value;

/// Query execution over an in-memory record vector.
///
/// Honors `search` (case-insensitive substring over string fields), `page`
/// and `limit`. The opaque host `filter` object is ignored; tests that need
/// filtered counts use `search`.
#[derive(Debug, Default)]
pub struct InMemoryItems {
    records: Vec<Value>,
}

impl InMemoryItems {
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }

    fn matches(record: &Value, search: &str) -> bool {
        let needle = search.to_lowercase();
        record
            .as_object()
            .map(|fields| {
                fields
                    .values()
                    .filter_map(Value::as_str)
                    .any(|v| v.to_lowercase().contains(&needle))
            })
            .unwrap_or(false)
    }

    fn filtered(&self, spec: &QuerySpec) -> Vec<Value> {
        match spec.search.as_deref() {
            Some(search) if !search.is_empty() => self
                .records
                .iter()
                .filter(|r| Self::matches(r, search))
                .cloned()
                .collect(),
            _ => self.records.clone(),
        }
    }
}

impl ItemService for InMemoryItems {
    fn items(&self, _collection: &str, spec: &QuerySpec) -> Result<Vec<Value>> {
        let matching = self.filtered(spec);
        let limit = spec.limit.max(1) as usize;
        let offset = (spec.page.max(1) as usize - 1) * limit;
        Ok(matching.into_iter().skip(offset).take(limit).collect())
    }

    fn total_count(&self, _collection: &str) -> Result<u64> {
        Ok(self.records.len() as u64)
    }

    fn item_count(&self, _collection: &str, spec: &QuerySpec) -> Result<u64> {
        Ok(self.filtered(spec).len() as u64)
    }
}

/// Item service whose every request fails with a fixed message.
#[derive(Debug)]
pub struct FailingItems {
    message: String,
}

impl FailingItems {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ItemService for FailingItems {
    fn items(&self, _collection: &str, _spec: &QuerySpec) -> Result<Vec<Value>> {
        bail!("{}", self.message)
    }

    fn total_count(&self, _collection: &str) -> Result<u64> {
        bail!("{}", self.message)
    }

    fn item_count(&self, _collection: &str, _spec: &QuerySpec) -> Result<u64> {
        bail!("{}", self.message)
    }
}
