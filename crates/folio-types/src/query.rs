use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default page number (pages are 1-based).
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size.
pub const DEFAULT_LIMIT: u32 = 25;

/// Persisted pagination/sort state for a collection list view.
///
/// Same optionality discipline as [`crate::LayoutOptions`]: `None` means
/// unset. The derived query field list is intentionally absent here; it is
/// recomputed from the layout options and collection metadata on every read
/// and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutQuery {
    /// Current page, 1-based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Field-sort-specs, e.g. `["-date_created", "name"]`. A leading `-`
    /// sorts descending. The default depends on collection metadata (the
    /// primary key) and is therefore evaluated at read time, not stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<String>>,

    /// Extra display fields chosen by the user. Kept separate from the
    /// derived query fields; the composing layer decides whether to also
    /// request these.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_fields: Option<Vec<String>>,
}

/// The full specification handed to the query-execution collaborator.
///
/// folio only produces this value; it never executes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySpec {
    /// De-duplicated field list the view needs to render.
    pub fields: Vec<String>,
    /// Opaque filter object owned by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    /// Full-text search string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub sort: Vec<String>,
    pub limit: u32,
    pub page: u32,
}
