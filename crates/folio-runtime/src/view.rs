use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use folio_engine::{
    CountMessage, FieldSources, TemplateFields, format_item_count, is_filtered, is_single_row,
    item_link, resolve_fields, select_all,
};
use folio_types::{CollectionMeta, FieldMeta, LayoutOptions, LayoutQuery, QuerySpec, ResultSet};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::options::OptionStore;
use crate::query::QueryStore;
use crate::refresh::{FetchEvent, ItemService, RefreshCoordinator};

const REFRESH_TIMEOUT: Duration = Duration::from_secs(5);

/// Collection-metadata collaborator, keyed by collection name.
pub trait SchemaProvider: Send + Sync {
    fn collection_meta(&self, collection: &str) -> Option<CollectionMeta>;
}

/// Host-supplied view configuration.
#[derive(Debug, Clone, Default)]
pub struct ViewConfig {
    pub collection: String,

    /// Opaque filter object owned by the host, passed through to the query
    /// specification verbatim.
    pub filter: Option<Value>,

    /// Full-text search string.
    pub search: Option<String>,

    /// Filter supplied interactively by the user. Its presence (not the
    /// host filter's) drives the "filtered" count messages.
    pub filter_user: Option<Value>,
}

/// Optional host callback invoked by [`ListView::reset_preset_and_refresh`]
/// before local state is reset.
pub type ResetPreset = Box<dyn FnMut() -> anyhow::Result<()> + Send>;

/// The list-view facade: persisted bags behind typed stores, plus every
/// derived value the view renders.
///
/// All derivations are pure functions of the current bags, metadata and
/// result state, recomputed on read; mutating any input through the typed
/// setters is therefore all the invalidation there is.
pub struct ListView {
    config: ViewConfig,
    meta: CollectionMeta,
    options: OptionStore,
    query: QueryStore,
    templates: Arc<dyn TemplateFields>,
    coordinator: RefreshCoordinator,
    completions: Receiver<FetchEvent>,
    result: ResultSet,
    selection: Vec<Value>,
    container_width: f64,
    reset_preset: Option<ResetPreset>,
}

impl ListView {
    /// Mount a view over a collection. A collection the schema provider does
    /// not know yields empty metadata, which degrades every primary-key
    /// dependent derivation instead of failing.
    pub fn new(
        config: ViewConfig,
        schema: &dyn SchemaProvider,
        templates: Arc<dyn TemplateFields>,
        items: Arc<dyn ItemService>,
    ) -> Self {
        let meta = schema
            .collection_meta(&config.collection)
            .unwrap_or_default();
        let (coordinator, completions) = RefreshCoordinator::new(items);

        Self {
            config,
            meta,
            options: OptionStore::default(),
            query: QueryStore::default(),
            templates,
            coordinator,
            completions,
            result: ResultSet::default(),
            selection: Vec::new(),
            container_width: 0.0,
            reset_preset: None,
        }
    }

    /// Restore persisted bags, e.g. from a saved preset.
    pub fn with_state(mut self, options: LayoutOptions, query: LayoutQuery) -> Self {
        self.options = OptionStore::new(options);
        self.query = QueryStore::new(query);
        self
    }

    pub fn with_reset_preset(mut self, callback: ResetPreset) -> Self {
        self.reset_preset = Some(callback);
        self
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn meta(&self) -> &CollectionMeta {
        &self.meta
    }

    pub fn options(&self) -> &OptionStore {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut OptionStore {
        &mut self.options
    }

    pub fn query(&self) -> &QueryStore {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryStore {
        &mut self.query
    }

    pub fn result(&self) -> &ResultSet {
        &self.result
    }

    pub fn selection(&self) -> &[Value] {
        &self.selection
    }

    pub fn set_selection(&mut self, selection: Vec<Value>) {
        self.selection = selection;
    }

    /// Observed container width in pixels, fed by the host's layout layer.
    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = width;
    }

    /// Every field the collection declares, for option pickers.
    pub fn file_fields(&self) -> &[FieldMeta] {
        &self.meta.fields_in_collection
    }

    /// Derived query field list: primary key, image sub-fields, then
    /// template fields, de-duplicated in first-occurrence order.
    pub fn fields(&self) -> Vec<String> {
        let sources = FieldSources {
            primary_key: self.meta.primary_key(),
            image_source: self.options.image_source(),
            title: self.options.title(),
            subtitle: self.options.subtitle(),
            tag: self.options.tag(),
        };
        resolve_fields(sources, self.templates.as_ref())
    }

    /// The full outbound query specification for the current state.
    pub fn query_spec(&self) -> QuerySpec {
        QuerySpec {
            fields: self.fields(),
            filter: self.config.filter.clone(),
            search: self.config.search.clone(),
            sort: self.query.sort(&self.meta),
            limit: self.query.limit(),
            page: self.query.page(),
        }
    }

    /// Which result-count message the view should render right now.
    pub fn showing_count(&self) -> CountMessage {
        let item_count = self.result.item_count.unwrap_or(0);
        let total_count = self.result.total_count.unwrap_or(0);
        let filtered = is_filtered(item_count, total_count, self.config.filter_user.is_some());
        format_item_count(item_count, self.query.page(), self.query.limit(), filtered)
    }

    /// Row-fit heuristic over the currently loaded items.
    pub fn is_single_row(&self) -> bool {
        is_single_row(
            self.result.items.len(),
            self.options.size(),
            self.container_width,
        )
    }

    /// Navigation link for one item, `None` without a known primary key.
    pub fn item_link(&self, item: &Value) -> Option<String> {
        item_link(&self.config.collection, item, self.meta.primary_key())
    }

    /// Replace the selection with every loaded item's primary-key value.
    /// No-op when the collection has no known primary key.
    pub fn select_all(&mut self) {
        if self.meta.primary_key().is_none() {
            return;
        }
        self.selection = select_all(&self.result.items, self.meta.primary_key());
    }

    pub fn to_page(&mut self, page: u32) {
        self.query.set_page(page);
    }

    pub fn total_pages(&self) -> u64 {
        self.result.total_pages(self.query.limit())
    }

    /// Issue the three refresh requests for the current query specification.
    /// Completions are folded in by [`poll_results`].
    ///
    /// [`poll_results`]: ListView::poll_results
    pub fn refresh(&mut self) {
        let spec = self.query_spec();
        self.result.loading = true;
        self.result.error = None;
        self.coordinator.refresh(&self.config.collection, &spec);
    }

    /// Drain completed fetches into the result state without blocking.
    /// Returns the number of completions received.
    pub fn poll_results(&mut self) -> usize {
        let mut received = 0;
        loop {
            match self.completions.try_recv() {
                Ok(event) => {
                    self.coordinator.apply(&mut self.result, event);
                    received += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        received
    }

    /// Refresh and wait for all three completions of this generation.
    pub fn refresh_blocking(&mut self) -> Result<()> {
        self.refresh();
        let generation = self.coordinator.generation();

        let mut pending = 3;
        while pending > 0 {
            let event = self
                .completions
                .recv_timeout(REFRESH_TIMEOUT)
                .map_err(|err| Error::Fetch(format!("refresh did not complete: {err}")))?;
            if event.generation == generation {
                pending -= 1;
            }
            self.coordinator.apply(&mut self.result, event);
        }
        Ok(())
    }

    /// Ask the host to reset its persisted preset, then reset the local bags
    /// to their defaults and refresh.
    pub fn reset_preset_and_refresh(&mut self) -> Result<()> {
        if let Some(callback) = self.reset_preset.as_mut() {
            callback().map_err(|err| Error::Preset(err.to_string()))?;
        }
        self.options = OptionStore::default();
        self.query = QueryStore::default();
        self.refresh();
        Ok(())
    }
}
