//! The ten sample orders shown on the dashboard

use crate::core::error::QueryError;
use crate::core::order::OrderStatus::{Cancelled, Delivered, OutForDelivery, Pending, Preparing};
use crate::core::order::{Order, OrderId, OrderStatus};
use crate::core::record::OrderRecord;
use crate::core::store::OrderSource;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// All sample orders were placed on 2024-05-28; times are `(hour, minute)`
const SAMPLE: [(&str, &str, &str, u32, (u32, u32), OrderStatus, i64); 10] = [
    ("PZA001", "John Doe", "Margherita", 2, (14, 30), Delivered, 2499),
    ("PZA002", "Sarah Johnson", "Pepperoni", 1, (15, 15), OutForDelivery, 1699),
    ("PZA003", "Mike Chen", "Veggie Supreme", 3, (16, 45), Preparing, 4597),
    ("PZA004", "Emily Davis", "Hawaiian", 1, (17, 20), Pending, 1899),
    ("PZA005", "David Wilson", "Meat Lovers", 2, (18, 0), Delivered, 3998),
    ("PZA006", "Lisa Brown", "BBQ Chicken", 1, (18, 30), Preparing, 1999),
    ("PZA007", "Tom Miller", "Four Cheese", 2, (19, 15), Pending, 3398),
    ("PZA008", "Anna Garcia", "Margherita", 1, (19, 45), Cancelled, 1299),
    ("PZA009", "James Rodriguez", "Pepperoni", 3, (20, 0), OutForDelivery, 5097),
    ("PZA010", "Rachel White", "Veggie Supreme", 1, (20, 30), Preparing, 1599),
];

fn sample_date(hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, 5, 28).and_then(|day| day.and_hms_opt(hour, minute, 0))
}

/// Sample orders `PZA001`..`PZA010`, in store order
pub fn sample_orders() -> Vec<Order> {
    SAMPLE
        .iter()
        .map(|&(id, customer, pizza, quantity, (hour, minute), status, cents)| Order {
            id: OrderId::new(id),
            customer_name: customer.to_string(),
            pizza_type: pizza.to_string(),
            quantity,
            // every SAMPLE time is a valid wall-clock time (test_sample_dates_are_valid)
            order_date: sample_date(hour, minute).expect("sample times are valid"),
            status,
            total: Decimal::new(cents, 2),
        })
        .collect()
}

/// [`OrderSource`] serving the sample orders
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleOrderSource;

impl OrderSource for SampleOrderSource {
    fn name(&self) -> &str {
        "sample"
    }

    fn fetch_records(&self) -> Result<Vec<OrderRecord>, QueryError> {
        Ok(sample_orders().iter().map(OrderRecord::from).collect())
    }
}
