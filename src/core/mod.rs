//! Core module containing the order model, query state and error types

pub mod error;
pub mod order;
pub mod query;
pub mod record;
pub mod store;

pub use error::QueryError;
pub use order::{Order, OrderId, OrderStatus, StatusBadge};
pub use query::{QueryParams, QueryState, SortDirection, SortField, StatusFilter};
pub use record::OrderRecord;
pub use store::OrderSource;
