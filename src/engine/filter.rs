//! Search and status filtering

use crate::core::order::Order;
use crate::core::query::QueryState;

/// Case-insensitive substring search over id, customer and pizza type
///
/// `needle` must already be lower-cased. An empty needle matches everything.
pub fn matches_search(order: &Order, needle: &str) -> bool {
    needle.is_empty()
        || order.id.as_str().to_lowercase().contains(needle)
        || order.customer_name.to_lowercase().contains(needle)
        || order.pizza_type.to_lowercase().contains(needle)
}

/// Keep the orders matching both the search term and the status filter
///
/// Store order is preserved.
pub fn filter<'a>(orders: &'a [Order], state: &QueryState) -> Vec<&'a Order> {
    let needle = state.search_term.to_lowercase();

    orders
        .iter()
        .filter(|order| {
            matches_search(order, &needle) && state.status_filter.matches(order.status)
        })
        .collect()
}
