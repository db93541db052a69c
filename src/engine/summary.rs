//! Summary cards computed over the current view

use crate::core::order::{Order, OrderStatus};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Aggregates over a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_count: usize,
    pub delivered_count: usize,
    /// Pending, preparing or out for delivery
    pub active_count: usize,
    pub cancelled_count: usize,
    /// Exact sum of order totals, rounded to cents
    pub total_revenue: Decimal,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            total_count: 0,
            delivered_count: 0,
            active_count: 0,
            cancelled_count: 0,
            total_revenue: Decimal::new(0, 2),
        }
    }
}

impl Summary {
    /// Revenue as shown on the card, e.g. `$280.84`
    pub fn revenue_display(&self) -> String {
        format_money(self.total_revenue, "$")
    }
}

/// Render an amount with a currency symbol and exactly two decimals
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let mut rounded = round_cents(amount);
    rounded.rescale(2);
    format!("{}{}", symbol, rounded)
}

fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Count statuses and add up revenue over `view`
pub fn summarize<'a, I>(view: I) -> Summary
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut summary = Summary::default();
    let mut revenue = Decimal::ZERO;

    for order in view {
        summary.total_count += 1;
        match order.status {
            OrderStatus::Delivered => summary.delivered_count += 1,
            OrderStatus::Cancelled => summary.cancelled_count += 1,
            OrderStatus::Pending | OrderStatus::Preparing | OrderStatus::OutForDelivery => {
                summary.active_count += 1
            }
        }
        revenue += order.total;
    }

    let mut total_revenue = round_cents(revenue);
    total_revenue.rescale(2);
    summary.total_revenue = total_revenue;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::order::{OrderId, parse_order_date};
    use crate::storage::seed::sample_orders;

    fn order(n: u32, status: OrderStatus, total: Decimal) -> Order {
        Order {
            id: OrderId::new(format!("PZA{:03}", n)),
            customer_name: "Test".to_string(),
            pizza_type: "Margherita".to_string(),
            quantity: 1,
            order_date: parse_order_date("2024-05-28 12:00").unwrap(),
            status,
            total,
        }
    }

    #[test]
    fn test_summary_of_sample_orders() {
        let orders = sample_orders();
        let summary = summarize(&orders);

        assert_eq!(summary.total_count, 10);
        assert_eq!(summary.delivered_count, 2);
        assert_eq!(summary.active_count, 7);
        assert_eq!(summary.cancelled_count, 1);
        assert_eq!(summary.total_revenue, Decimal::new(28084, 2));
        assert_eq!(summary.revenue_display(), "$280.84");
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize(std::iter::empty());
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.revenue_display(), "$0.00");
    }

    #[test]
    fn test_counts_add_up() {
        let orders = sample_orders();
        let summary = summarize(&orders);
        assert_eq!(
            summary.delivered_count + summary.active_count + summary.cancelled_count,
            summary.total_count
        );
    }

    #[test]
    fn test_no_drift_over_many_rows() {
        let orders: Vec<Order> = (0..10_000)
            .map(|n| order(n, OrderStatus::Delivered, Decimal::new(1, 1)))
            .collect();
        let summary = summarize(&orders);
        assert_eq!(summary.total_revenue, Decimal::new(100_000, 2));
        assert_eq!(summary.revenue_display(), "$1000.00");
    }

    #[test]
    fn test_revenue_rounds_half_away_from_zero() {
        let orders = vec![order(1, OrderStatus::Pending, Decimal::new(10_005, 3))];
        assert_eq!(summarize(&orders).total_revenue, Decimal::new(1001, 2));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(5, 0), "€"), "€5.00");
        assert_eq!(format_money(Decimal::new(12_345, 3), "$"), "$12.35");
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let json = serde_json::to_value(Summary::default()).unwrap();
        assert_eq!(json["totalCount"], 0);
        assert_eq!(json["totalRevenue"], "0.00");
    }
}
