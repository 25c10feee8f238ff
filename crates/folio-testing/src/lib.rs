//! Testing infrastructure for folio integration tests.
//!
//! Provides in-process stand-ins for the three external collaborators:
//! - `StaticSchema`: collection metadata from a fixed map
//! - `InMemoryItems` / `FailingItems`: query execution over a record vector
//! - `BraceTemplates`: `{field}` placeholder extraction

pub mod fixtures;
pub mod items;
pub mod templates;

pub use fixtures::{StaticSchema, articles_meta, sample_articles};
pub use items::{FailingItems, InMemoryItems};
pub use templates::BraceTemplates;
