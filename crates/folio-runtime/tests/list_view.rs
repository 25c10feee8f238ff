use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use folio_engine::{CountMessage, CountRange};
use folio_runtime::{ItemService, ListView, Preset, ViewConfig};
use folio_testing::{
    BraceTemplates, FailingItems, InMemoryItems, StaticSchema, articles_meta, sample_articles,
};
use folio_types::QuerySpec;
use serde_json::{Value, json};

fn schema() -> StaticSchema {
    StaticSchema::new().with_collection("articles", articles_meta())
}

fn view_over(records: Vec<Value>, config: ViewConfig) -> ListView {
    ListView::new(
        config,
        &schema(),
        Arc::new(BraceTemplates),
        Arc::new(InMemoryItems::new(records)),
    )
}

fn articles_config() -> ViewConfig {
    ViewConfig {
        collection: "articles".to_string(),
        ..Default::default()
    }
}

#[test]
fn query_spec_derives_fields_sort_and_pagination() {
    let mut view = view_over(sample_articles(10), articles_config());
    view.options_mut().set_title(Some("{name} {id}".to_string()));
    view.options_mut().set_image_source(Some("cover".to_string()));
    view.query_mut().set_limit(50);

    let spec = view.query_spec();
    assert_eq!(
        spec.fields,
        vec![
            "id",
            "cover.modified_on",
            "cover.type",
            "cover.filename_disk",
            "cover.storage",
            "cover.id",
            "name",
        ]
    );
    // Unset sort falls back to the primary key.
    assert_eq!(spec.sort, vec!["id"]);
    assert_eq!(spec.limit, 50);
    assert_eq!(spec.page, 1);
}

#[test]
fn refresh_populates_items_and_counts() -> Result<()> {
    let mut view = view_over(sample_articles(60), articles_config());
    view.refresh_blocking()?;

    let result = view.result();
    assert_eq!(result.items.len(), 25);
    assert_eq!(result.item_count, Some(60));
    assert_eq!(result.total_count, Some(60));
    assert!(!result.loading);
    assert!(result.error.is_none());
    assert_eq!(view.total_pages(), 3);

    // More than one page: ranged unfiltered message.
    assert_eq!(
        view.showing_count(),
        CountMessage::StartEndOfCountItems(CountRange {
            start: 1,
            end: 25,
            count: 60,
        })
    );
    Ok(())
}

#[test]
fn paging_refetches_the_requested_window() -> Result<()> {
    let mut view = view_over(sample_articles(60), articles_config());
    view.to_page(3);
    view.refresh_blocking()?;

    let items = &view.result().items;
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["id"], 51);

    assert_eq!(
        view.showing_count(),
        CountMessage::StartEndOfCountItems(CountRange {
            start: 51,
            end: 60,
            count: 60,
        })
    );
    Ok(())
}

#[test]
fn plain_count_message_when_everything_fits_one_page() -> Result<()> {
    let mut view = view_over(sample_articles(10), articles_config());
    view.refresh_blocking()?;
    assert_eq!(view.showing_count(), CountMessage::ItemCount { count: 10 });
    Ok(())
}

#[test]
fn filtered_messages_require_an_active_user_filter() -> Result<()> {
    // Search narrows the results, and a user filter is present.
    let config = ViewConfig {
        collection: "articles".to_string(),
        search: Some("Article 1".to_string()),
        filter_user: Some(json!({"name": {"_contains": "Article 1"}})),
        ..Default::default()
    };
    let mut view = view_over(sample_articles(30), config);
    view.refresh_blocking()?;

    // "Article 1", "Article 10" .. "Article 19": 11 matches of 30.
    assert_eq!(view.result().item_count, Some(11));
    assert_eq!(
        view.showing_count(),
        CountMessage::StartEndOfCountFilteredItems(CountRange {
            start: 1,
            end: 11,
            count: 11,
        })
    );

    // Same narrowing without a user filter: not "filtered".
    let config = ViewConfig {
        collection: "articles".to_string(),
        search: Some("Article 1".to_string()),
        ..Default::default()
    };
    let mut view = view_over(sample_articles(30), config);
    view.refresh_blocking()?;
    assert_eq!(view.showing_count(), CountMessage::ItemCount { count: 11 });
    Ok(())
}

#[test]
fn single_filtered_item_message() -> Result<()> {
    let config = ViewConfig {
        collection: "articles".to_string(),
        search: Some("Article 7".to_string()),
        filter_user: Some(json!({"name": {"_eq": "Article 7"}})),
        ..Default::default()
    };
    let mut view = view_over(sample_articles(9), config);
    view.refresh_blocking()?;

    assert_eq!(view.result().item_count, Some(1));
    assert_eq!(view.showing_count(), CountMessage::OneFilteredItem);
    Ok(())
}

#[test]
fn fetch_errors_surface_without_clearing_counts() -> Result<()> {
    /// Succeeds until told to fail, so state from a good refresh exists.
    struct FlakyItems {
        inner: InMemoryItems,
        failing: AtomicBool,
    }

    impl ItemService for FlakyItems {
        fn items(&self, collection: &str, spec: &QuerySpec) -> Result<Vec<Value>> {
            if self.failing.load(Ordering::SeqCst) {
                anyhow::bail!("backend unavailable");
            }
            self.inner.items(collection, spec)
        }

        fn total_count(&self, collection: &str) -> Result<u64> {
            if self.failing.load(Ordering::SeqCst) {
                anyhow::bail!("backend unavailable");
            }
            self.inner.total_count(collection)
        }

        fn item_count(&self, collection: &str, spec: &QuerySpec) -> Result<u64> {
            if self.failing.load(Ordering::SeqCst) {
                anyhow::bail!("backend unavailable");
            }
            self.inner.item_count(collection, spec)
        }
    }

    let service = Arc::new(FlakyItems {
        inner: InMemoryItems::new(sample_articles(5)),
        failing: AtomicBool::new(false),
    });
    let mut view = ListView::new(
        articles_config(),
        &schema(),
        Arc::new(BraceTemplates),
        service.clone(),
    );

    view.refresh_blocking()?;
    assert_eq!(view.result().items.len(), 5);

    service.failing.store(true, Ordering::SeqCst);
    view.refresh_blocking()?;

    let result = view.result();
    assert_eq!(result.error.as_deref(), Some("backend unavailable"));
    // The failed refresh did not wipe previously fetched state.
    assert_eq!(result.items.len(), 5);
    assert_eq!(result.item_count, Some(5));
    assert!(!result.loading);
    Ok(())
}

#[test]
fn all_requests_failing_reports_the_error() -> Result<()> {
    let mut view = ListView::new(
        articles_config(),
        &schema(),
        Arc::new(BraceTemplates),
        Arc::new(FailingItems::new("boom")),
    );
    view.refresh_blocking()?;

    let result = view.result();
    assert_eq!(result.error.as_deref(), Some("boom"));
    assert!(result.items.is_empty());
    assert_eq!(result.item_count, None);
    Ok(())
}

#[test]
fn select_all_and_item_links() -> Result<()> {
    let mut view = view_over(sample_articles(3), articles_config());
    view.refresh_blocking()?;

    view.select_all();
    assert_eq!(view.selection(), &[json!(1), json!(2), json!(3)]);

    let link = view.item_link(&view.result().items[0]);
    assert_eq!(link.as_deref(), Some("/content/articles/1"));
    Ok(())
}

#[test]
fn unknown_collection_degrades_instead_of_failing() {
    let config = ViewConfig {
        collection: "ghosts".to_string(),
        ..Default::default()
    };
    let mut view = ListView::new(
        config,
        &schema(),
        Arc::new(BraceTemplates),
        Arc::new(InMemoryItems::new(Vec::new())),
    );
    view.set_selection(vec![json!("kept")]);

    let spec = view.query_spec();
    assert!(spec.sort.is_empty());
    assert!(spec.fields.is_empty());

    assert_eq!(view.item_link(&json!({"id": 1})), None);

    // select-all is a no-op without a primary key.
    view.select_all();
    assert_eq!(view.selection(), &[json!("kept")]);
}

#[test]
fn row_fit_uses_loaded_items_and_size() -> Result<()> {
    let mut view = view_over(sample_articles(3), articles_config());
    view.refresh_blocking()?;

    view.set_container_width(200.0);
    assert!(view.is_single_row());

    view.set_container_width(150.0);
    assert!(!view.is_single_row());

    view.options_mut().set_size(2.0);
    view.set_container_width(200.0);
    assert!(!view.is_single_row());
    Ok(())
}

#[test]
fn reset_preset_invokes_callback_and_restores_defaults() -> Result<()> {
    let called = Arc::new(AtomicBool::new(false));
    let flag = called.clone();

    let mut view = view_over(sample_articles(5), articles_config()).with_reset_preset(Box::new(
        move || {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        },
    ));

    view.options_mut().set_size(4.0);
    view.query_mut().set_limit(100);
    view.reset_preset_and_refresh()?;

    assert!(called.load(Ordering::SeqCst));
    assert_eq!(view.options().size(), 1.0);
    assert_eq!(view.query().limit(), 25);
    Ok(())
}

#[test]
fn preset_capture_and_restore_round_trip() {
    let mut view = view_over(Vec::new(), articles_config());
    view.options_mut().set_title(Some("{name}".to_string()));
    view.query_mut().set_sort(vec!["-year".to_string()]);

    let preset = Preset::capture(&view);

    let restored = view_over(Vec::new(), articles_config())
        .with_state(preset.layout_options.clone(), preset.layout_query.clone());
    assert_eq!(restored.options().title(), Some("{name}"));
    assert_eq!(
        restored.query_spec().sort,
        vec!["-year".to_string()]
    );
}
