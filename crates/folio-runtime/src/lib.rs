pub mod error;
pub mod options;
pub mod preset;
pub mod query;
pub mod refresh;
pub mod view;

pub use error::{Error, Result};
pub use options::OptionStore;
pub use preset::Preset;
pub use query::QueryStore;
pub use refresh::{FetchEvent, FetchOutcome, ItemService, RefreshCoordinator};
pub use view::{ListView, ResetPreset, SchemaProvider, ViewConfig};
