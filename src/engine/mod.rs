//! Order table query engine
//!
//! Derives the orders view from a record snapshot and a [`QueryState`]:
//!
//! 1. [`filter`]: search term and status filter, store order preserved
//! 2. [`sort`]: stable sort by one field, either direction
//! 3. [`summarize`]: counts and revenue over the resulting rows
//!
//! Every call recomputes from scratch and allocates a fresh [`OrderView`],
//! so the engine can be shared freely between threads.

pub mod filter;
pub mod sort;
pub mod summary;

pub use filter::{filter, matches_search};
pub use sort::{Comparator, comparator, sort};
pub use summary::{Summary, format_money, summarize};

use crate::core::error::QueryError;
use crate::core::order::Order;
use crate::core::query::{QueryParams, QueryState};
use serde::Serialize;

/// Rows and summary currently on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub rows: Vec<Order>,
    pub summary: Summary,
}

impl OrderView {
    /// No order matched the query; presentation shows "No orders found"
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Export the view as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, QueryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run the full pipeline: filter, then sort, then summarize
pub fn compute_view(orders: &[Order], state: &QueryState) -> OrderView {
    let filtered = filter(orders, state);
    tracing::trace!(matched = filtered.len(), total = orders.len(), "filter stage");

    let sorted = sort(&filtered, state.sort_field, state.sort_direction);
    let summary = summarize(sorted.iter().copied());

    tracing::debug!(
        rows = sorted.len(),
        search = %state.search_term,
        status = %state.status_filter,
        sort_field = %state.sort_field,
        sort_direction = %state.sort_direction,
        "computed order view"
    );

    OrderView {
        rows: sorted.into_iter().cloned().collect(),
        summary,
    }
}

/// Parse raw parameters, then run [`compute_view`]
pub fn compute_view_from_params(
    orders: &[Order],
    params: &QueryParams,
) -> Result<OrderView, QueryError> {
    let state = QueryState::try_from(params)?;
    Ok(compute_view(orders, &state))
}
