pub mod layout;
pub mod query;
pub mod result;
pub mod schema;

pub use layout::*;
pub use query::*;
pub use result::*;
pub use schema::*;
