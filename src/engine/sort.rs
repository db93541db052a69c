//! Stable sorting by a single order attribute

use crate::core::order::Order;
use crate::core::query::{SortDirection, SortField};
use std::cmp::Ordering;

/// Comparator over two orders
pub type Comparator = fn(&Order, &Order) -> Ordering;

/// Compare two strings ignoring case, without allocating
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn by_id(a: &Order, b: &Order) -> Ordering {
    cmp_ignore_case(a.id.as_str(), b.id.as_str())
}

fn by_customer_name(a: &Order, b: &Order) -> Ordering {
    cmp_ignore_case(&a.customer_name, &b.customer_name)
}

fn by_pizza_type(a: &Order, b: &Order) -> Ordering {
    cmp_ignore_case(&a.pizza_type, &b.pizza_type)
}

fn by_quantity(a: &Order, b: &Order) -> Ordering {
    a.quantity.cmp(&b.quantity)
}

fn by_order_date(a: &Order, b: &Order) -> Ordering {
    a.order_date.cmp(&b.order_date)
}

fn by_status(a: &Order, b: &Order) -> Ordering {
    cmp_ignore_case(a.status.label(), b.status.label())
}

fn by_total(a: &Order, b: &Order) -> Ordering {
    a.total.cmp(&b.total)
}

/// Ascending comparator for a sort field
///
/// Text fields compare case-insensitively. `status` compares on its label,
/// so "Cancelled" < "Delivered" < "Out for Delivery" < "Pending" <
/// "Preparing". `orderDate` compares chronologically, which is the same
/// order as its zero-padded `YYYY-MM-DD HH:MM` label.
pub fn comparator(field: SortField) -> Comparator {
    match field {
        SortField::Id => by_id,
        SortField::CustomerName => by_customer_name,
        SortField::PizzaType => by_pizza_type,
        SortField::Quantity => by_quantity,
        SortField::OrderDate => by_order_date,
        SortField::Status => by_status,
        SortField::Total => by_total,
    }
}

/// Return a sorted copy of `orders`
///
/// The sort is stable in both directions: `desc` flips the comparator
/// instead of reversing the output, so orders with equal keys keep their
/// input order.
pub fn sort<'a>(
    orders: &[&'a Order],
    field: SortField,
    direction: SortDirection,
) -> Vec<&'a Order> {
    let cmp = comparator(field);
    let mut sorted = orders.to_vec();

    match direction {
        SortDirection::Asc => sorted.sort_by(|a, b| cmp(a, b)),
        SortDirection::Desc => sorted.sort_by(|a, b| cmp(b, a)),
    }

    sorted
}
