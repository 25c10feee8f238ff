use serde::{Deserialize, Serialize};

/// Numeric parameters for ranged count messages.
///
/// Locale formatting is the caller's concern; these are plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub start: u64,
    pub end: u64,
    pub count: u64,
}

/// Which result-count message the view should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "message", content = "params", rename_all = "snake_case")]
pub enum CountMessage {
    /// Exactly one item matches the active user filter.
    OneFilteredItem,
    /// "start-end of count filtered items".
    StartEndOfCountFilteredItems(CountRange),
    /// "start-end of count items" (unfiltered, more than one page).
    StartEndOfCountItems(CountRange),
    /// Plain "n items" (everything fits on one page).
    ItemCount { count: u64 },
}

/// Route the visible item count to a message variant.
///
/// `start`/`end` describe the window the current page shows:
/// `start = (page - 1) * per_page + 1`, `end = min(page * per_page, total)`.
pub fn format_item_count(
    total_items: u64,
    current_page: u32,
    per_page: u32,
    filtered: bool,
) -> CountMessage {
    let range = CountRange {
        start: u64::from(current_page.saturating_sub(1)) * u64::from(per_page) + 1,
        end: (u64::from(current_page) * u64::from(per_page)).min(total_items),
        count: total_items,
    };

    if filtered {
        if total_items == 1 {
            return CountMessage::OneFilteredItem;
        }
        return CountMessage::StartEndOfCountFilteredItems(range);
    }

    if total_items > u64::from(per_page) {
        return CountMessage::StartEndOfCountItems(range);
    }

    CountMessage::ItemCount { count: total_items }
}

/// Whether the view is showing a filtered subset.
///
/// True only when a user-supplied filter is active AND the visible count is
/// strictly below the unfiltered total; count mismatches without an active
/// filter do not count as filtering.
pub fn is_filtered(item_count: u64, total_count: u64, has_user_filter: bool) -> bool {
    has_user_filter && item_count < total_count
}
