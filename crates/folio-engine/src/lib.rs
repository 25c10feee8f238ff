// Engine module - pure derivations over list-view state
// This layer sits between persisted configuration (types) and the runtime facade

pub mod count;
pub mod fields;
pub mod links;
pub mod rowfit;
pub mod selection;

pub use count::{CountMessage, CountRange, format_item_count, is_filtered};
pub use fields::{FieldSources, TemplateError, TemplateFields, resolve_fields, resolve_fields_raw};
pub use links::item_link;
pub use rowfit::is_single_row;
pub use selection::select_all;
