use folio_types::{CollectionMeta, DEFAULT_LIMIT, DEFAULT_PAGE, LayoutQuery};

/// Typed, defaulted accessors over a persisted [`LayoutQuery`] bag.
///
/// `page` and `limit` carry static defaults; `sort` carries a *dynamic*
/// default (the collection's primary key), re-evaluated against the current
/// metadata on every read while unset rather than captured once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryStore {
    bag: LayoutQuery,
}

impl QueryStore {
    pub fn new(bag: LayoutQuery) -> Self {
        Self { bag }
    }

    /// The raw persisted bag, for the host to serialize.
    pub fn bag(&self) -> &LayoutQuery {
        &self.bag
    }

    pub fn into_bag(self) -> LayoutQuery {
        self.bag
    }

    /// Current page, clamped to >= 1 on read so a persisted zero still
    /// yields a usable value.
    pub fn page(&self) -> u32 {
        self.bag.page.unwrap_or(DEFAULT_PAGE).max(1)
    }

    pub fn set_page(&mut self, page: u32) {
        self.bag.page = Some(page);
    }

    /// Page size, clamped to >= 1 on read.
    pub fn limit(&self) -> u32 {
        self.bag.limit.unwrap_or(DEFAULT_LIMIT).max(1)
    }

    pub fn set_limit(&mut self, limit: u32) {
        self.bag.limit = Some(limit);
    }

    /// Sort specs, defaulting to the collection's primary key while unset.
    pub fn sort(&self, meta: &CollectionMeta) -> Vec<String> {
        match &self.bag.sort {
            Some(sort) => sort.clone(),
            None => meta
                .primary_key()
                .map(|pk| vec![pk.to_string()])
                .unwrap_or_default(),
        }
    }

    pub fn set_sort(&mut self, sort: Vec<String>) {
        self.bag.sort = Some(sort);
    }

    pub fn selected_fields(&self) -> &[String] {
        self.bag.selected_fields.as_deref().unwrap_or(&[])
    }

    pub fn set_selected_fields(&mut self, fields: Vec<String>) {
        self.bag.selected_fields = Some(fields);
    }
}
