//! # Pizza Orders
//!
//! Query engine behind the pizza-shop orders dashboard.
//!
//! ## Features
//!
//! - **Search & Filter**: case-insensitive search over order id, customer and
//!   pizza type, combined with a status filter
//! - **Stable Sorting**: any column, either direction, equal keys keep their
//!   store order
//! - **Summary Cards**: order counts and exact decimal revenue over the
//!   current view
//! - **Typed Query State**: unknown sort fields or statuses are rejected when
//!   raw parameters are parsed, never at query time
//! - **Pluggable Sources**: JSON files, sample data, or any [`OrderSource`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pizza_orders::prelude::*;
//!
//! let store = InMemoryOrderStore::load(&SampleOrderSource)?;
//!
//! let mut state = QueryState::default().with_search("pepperoni");
//! let view = store.view(&state);
//! println!("{} orders, {}", view.summary.total_count, view.summary.revenue_display());
//!
//! // Clicking the "Total" header
//! state.toggle_sort(SortField::Total);
//! let view = store.view(&state);
//! ```
//!
//! [`OrderSource`]: crate::core::OrderSource

pub mod config;
pub mod core;
pub mod engine;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::QueryError,
        order::{Order, OrderId, OrderStatus, StatusBadge},
        query::{QueryParams, QueryState, SortDirection, SortField, StatusFilter},
        record::OrderRecord,
        store::OrderSource,
    };

    // === Engine ===
    pub use crate::engine::{OrderView, Summary, compute_view, compute_view_from_params};

    // === Storage ===
    pub use crate::storage::{InMemoryOrderStore, JsonOrderSource, SampleOrderSource};

    // === Config ===
    pub use crate::config::DashboardConfig;

    // === External dependencies ===
    pub use rust_decimal::Decimal;
}
