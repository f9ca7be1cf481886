pub mod error;
pub mod gateway;
pub mod manager;
pub mod query;

pub use error::StoreError;
pub use gateway::{PgStore, Row, Store};
pub use query::{SelectQuery, SortDirection};
