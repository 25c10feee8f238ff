use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fetch-result state owned by the view.
///
/// Each slice (`items`, `total_count`, `item_count`) is refreshed by an
/// independent request and may arrive in any order; a failed fetch records
/// `error` without clearing the other slices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    /// Records for the current page, as returned by the query collaborator.
    pub items: Vec<Value>,

    /// Number of items matching the active filter/search, across all pages.
    pub item_count: Option<u64>,

    /// Number of items in the collection with no filter applied.
    pub total_count: Option<u64>,

    /// True while an items request is in flight.
    pub loading: bool,

    /// Last fetch error, verbatim from the collaborator.
    pub error: Option<String>,
}

impl ResultSet {
    /// Total page count for a given page size, from the filtered item count.
    ///
    /// Unknown counts and zero limits yield zero pages rather than failing.
    pub fn total_pages(&self, limit: u32) -> u64 {
        if limit == 0 {
            return 0;
        }
        let count = self.item_count.unwrap_or(0);
        count.div_ceil(u64::from(limit))
    }
}
