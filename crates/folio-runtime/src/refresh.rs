use anyhow::Result;
use folio_types::{QuerySpec, ResultSet};
use serde_json::Value;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use tracing::{debug, warn};

/// Query-execution collaborator. folio only builds [`QuerySpec`]s; this
/// service runs them.
pub trait ItemService: Send + Sync {
    /// Fetch the records for one page of the given specification.
    fn items(&self, collection: &str, spec: &QuerySpec) -> Result<Vec<Value>>;

    /// Count every item in the collection, ignoring filter and search.
    fn total_count(&self, collection: &str) -> Result<u64>;

    /// Count the items matching the specification's filter and search.
    fn item_count(&self, collection: &str, spec: &QuerySpec) -> Result<u64>;
}

/// One completed fetch, or its failure.
#[derive(Debug)]
pub enum FetchOutcome {
    Items(Vec<Value>),
    TotalCount(u64),
    ItemCount(u64),
    Failed(String),
}

/// A fetch completion tagged with the generation that issued it.
#[derive(Debug)]
pub struct FetchEvent {
    pub generation: u64,
    pub outcome: FetchOutcome,
}

/// Issues the three refresh requests (items, total count, filtered count) as
/// independent fire-and-forget fetches.
///
/// Requests are never cancelled or sequenced; completions arrive over the
/// channel in any order. Each refresh bumps a generation token and [`apply`]
/// drops completions from superseded generations, so a slow stale response
/// cannot overwrite newer state.
///
/// [`apply`]: RefreshCoordinator::apply
pub struct RefreshCoordinator {
    service: Arc<dyn ItemService>,
    tx: Sender<FetchEvent>,
    generation: u64,
}

impl RefreshCoordinator {
    pub fn new(service: Arc<dyn ItemService>) -> (Self, Receiver<FetchEvent>) {
        let (tx, rx) = channel();
        (
            Self {
                service,
                tx,
                generation: 0,
            },
            rx,
        )
    }

    /// Generation of the most recently issued refresh.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Issue all three requests for the given specification. Returns the new
    /// generation token.
    pub fn refresh(&mut self, collection: &str, spec: &QuerySpec) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        debug!(
            collection,
            generation,
            page = spec.page,
            limit = spec.limit,
            "issuing refresh"
        );

        {
            let service = Arc::clone(&self.service);
            let tx = self.tx.clone();
            let collection = collection.to_string();
            let spec = spec.clone();
            thread::spawn(move || {
                let outcome = match service.items(&collection, &spec) {
                    Ok(items) => FetchOutcome::Items(items),
                    Err(err) => FetchOutcome::Failed(err.to_string()),
                };
                let _ = tx.send(FetchEvent {
                    generation,
                    outcome,
                });
            });
        }

        {
            let service = Arc::clone(&self.service);
            let tx = self.tx.clone();
            let collection = collection.to_string();
            thread::spawn(move || {
                let outcome = match service.total_count(&collection) {
                    Ok(count) => FetchOutcome::TotalCount(count),
                    Err(err) => FetchOutcome::Failed(err.to_string()),
                };
                let _ = tx.send(FetchEvent {
                    generation,
                    outcome,
                });
            });
        }

        {
            let service = Arc::clone(&self.service);
            let tx = self.tx.clone();
            let collection = collection.to_string();
            let spec = spec.clone();
            thread::spawn(move || {
                let outcome = match service.item_count(&collection, &spec) {
                    Ok(count) => FetchOutcome::ItemCount(count),
                    Err(err) => FetchOutcome::Failed(err.to_string()),
                };
                let _ = tx.send(FetchEvent {
                    generation,
                    outcome,
                });
            });
        }

        generation
    }

    /// Fold a completion into the result set.
    ///
    /// Each outcome updates only its own slice; a failure records the error
    /// without clearing items or counts. Completions from a superseded
    /// generation are dropped.
    pub fn apply(&self, result: &mut ResultSet, event: FetchEvent) {
        if event.generation != self.generation {
            warn!(
                stale = event.generation,
                latest = self.generation,
                "dropping stale fetch completion"
            );
            return;
        }

        match event.outcome {
            FetchOutcome::Items(items) => {
                result.items = items;
                result.loading = false;
            }
            FetchOutcome::TotalCount(count) => result.total_count = Some(count),
            FetchOutcome::ItemCount(count) => result.item_count = Some(count),
            FetchOutcome::Failed(message) => {
                result.loading = false;
                result.error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EmptyService;

    impl ItemService for EmptyService {
        fn items(&self, _collection: &str, _spec: &QuerySpec) -> Result<Vec<Value>> {
            Ok(Vec::new())
        }

        fn total_count(&self, _collection: &str) -> Result<u64> {
            Ok(0)
        }

        fn item_count(&self, _collection: &str, _spec: &QuerySpec) -> Result<u64> {
            Ok(0)
        }
    }

    fn spec() -> QuerySpec {
        QuerySpec {
            fields: vec!["id".to_string()],
            filter: None,
            search: None,
            sort: vec!["id".to_string()],
            limit: 25,
            page: 1,
        }
    }

    #[test]
    fn stale_generations_are_dropped() {
        let (mut coordinator, _rx) = RefreshCoordinator::new(Arc::new(EmptyService));
        coordinator.refresh("articles", &spec());
        coordinator.refresh("articles", &spec());
        assert_eq!(coordinator.generation(), 2);

        let mut result = ResultSet::default();
        coordinator.apply(
            &mut result,
            FetchEvent {
                generation: 1,
                outcome: FetchOutcome::Items(vec![json!({"id": "stale"})]),
            },
        );
        assert!(result.items.is_empty());

        coordinator.apply(
            &mut result,
            FetchEvent {
                generation: 2,
                outcome: FetchOutcome::Items(vec![json!({"id": "fresh"})]),
            },
        );
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0]["id"], "fresh");
    }

    #[test]
    fn each_outcome_updates_only_its_own_slice() {
        let (mut coordinator, _rx) = RefreshCoordinator::new(Arc::new(EmptyService));
        coordinator.refresh("articles", &spec());
        let generation = coordinator.generation();

        let mut result = ResultSet {
            loading: true,
            ..Default::default()
        };

        coordinator.apply(
            &mut result,
            FetchEvent {
                generation,
                outcome: FetchOutcome::TotalCount(100),
            },
        );
        assert_eq!(result.total_count, Some(100));
        assert!(result.loading, "counts do not end the items request");

        coordinator.apply(
            &mut result,
            FetchEvent {
                generation,
                outcome: FetchOutcome::ItemCount(40),
            },
        );
        assert_eq!(result.item_count, Some(40));

        coordinator.apply(
            &mut result,
            FetchEvent {
                generation,
                outcome: FetchOutcome::Items(vec![json!({"id": 1})]),
            },
        );
        assert!(!result.loading);
        assert_eq!(result.items.len(), 1);
    }

    #[test]
    fn failure_records_the_error_without_clearing_state() {
        let (mut coordinator, _rx) = RefreshCoordinator::new(Arc::new(EmptyService));
        coordinator.refresh("articles", &spec());
        let generation = coordinator.generation();

        let mut result = ResultSet {
            items: vec![json!({"id": 1})],
            item_count: Some(1),
            total_count: Some(10),
            loading: true,
            error: None,
        };

        coordinator.apply(
            &mut result,
            FetchEvent {
                generation,
                outcome: FetchOutcome::Failed("backend unavailable".to_string()),
            },
        );

        assert_eq!(result.error.as_deref(), Some("backend unavailable"));
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.item_count, Some(1));
        assert_eq!(result.total_count, Some(10));
        assert!(!result.loading);
    }
}
