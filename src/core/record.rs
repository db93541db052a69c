//! Raw order records as delivered by a data source

use crate::core::error::QueryError;
use crate::core::order::{Order, OrderId, OrderStatus, parse_order_date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An order before validation
///
/// Only the id is mandatory here, so that a bad record can always be
/// reported by id. Converting into an [`Order`] never fills in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub customer_name: Option<String>,
    pub pizza_type: Option<String>,
    pub quantity: Option<u32>,
    pub order_date: Option<String>,
    pub status: Option<String>,
    pub total: Option<Decimal>,
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        OrderRecord {
            id: order.id.to_string(),
            customer_name: Some(order.customer_name.clone()),
            pizza_type: Some(order.pizza_type.clone()),
            quantity: Some(order.quantity),
            order_date: Some(order.order_date_label()),
            status: Some(order.status.label().to_string()),
            total: Some(order.total),
        }
    }
}

impl TryFrom<OrderRecord> for Order {
    type Error = QueryError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let id = OrderId::new(record.id);

        let customer_name = record
            .customer_name
            .ok_or_else(|| QueryError::missing(&id, "customerName"))?;
        let pizza_type = record
            .pizza_type
            .ok_or_else(|| QueryError::missing(&id, "pizzaType"))?;

        let quantity = record
            .quantity
            .ok_or_else(|| QueryError::missing(&id, "quantity"))?;
        if quantity == 0 {
            return Err(malformed(&id, "quantity", "must be positive"));
        }

        let order_date = record
            .order_date
            .ok_or_else(|| QueryError::missing(&id, "orderDate"))?;
        let order_date = parse_order_date(&order_date)
            .map_err(|e| malformed(&id, "orderDate", &format!("'{}': {}", order_date, e)))?;

        let status = record
            .status
            .ok_or_else(|| QueryError::missing(&id, "status"))?;
        let status = status
            .parse::<OrderStatus>()
            .map_err(|e| malformed(&id, "status", &e.to_string()))?;

        let total = record
            .total
            .ok_or_else(|| QueryError::missing(&id, "total"))?;
        if total < Decimal::ZERO {
            return Err(malformed(&id, "total", "must not be negative"));
        }

        Ok(Order {
            id,
            customer_name,
            pizza_type,
            quantity,
            order_date,
            status,
            total,
        })
    }
}

fn malformed(id: &OrderId, field: &'static str, reason: &str) -> QueryError {
    QueryError::MalformedRecord {
        order_id: id.clone(),
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> OrderRecord {
        OrderRecord {
            id: "PZA004".to_string(),
            customer_name: Some("Emily Davis".to_string()),
            pizza_type: Some("Hawaiian".to_string()),
            quantity: Some(1),
            order_date: Some("2024-05-28 17:20".to_string()),
            status: Some("Pending".to_string()),
            total: Some(Decimal::new(1899, 2)),
        }
    }

    #[test]
    fn test_valid_record_converts() {
        let order = Order::try_from(record()).unwrap();
        assert_eq!(order.id.as_str(), "PZA004");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, Decimal::new(1899, 2));
        assert_eq!(order.order_date_label(), "2024-05-28 17:20");
    }

    #[test]
    fn test_missing_total_is_malformed() {
        let err = Order::try_from(OrderRecord {
            total: None,
            ..record()
        })
        .unwrap_err();

        match err {
            QueryError::MalformedRecord {
                order_id, field, ..
            } => {
                assert_eq!(order_id.as_str(), "PZA004");
                assert_eq!(field, "total");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_status_is_malformed() {
        let err = Order::try_from(OrderRecord {
            status: Some("Lost".to_string()),
            ..record()
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_RECORD");
        assert!(err.to_string().contains("unknown order status 'Lost'"));
    }

    #[test]
    fn test_zero_quantity_is_malformed() {
        let err = Order::try_from(OrderRecord {
            quantity: Some(0),
            ..record()
        })
        .unwrap_err();
        assert!(err.to_string().contains("'quantity' must be positive"));
    }

    #[test]
    fn test_negative_total_is_malformed() {
        assert!(
            Order::try_from(OrderRecord {
                total: Some(Decimal::new(-100, 2)),
                ..record()
            })
            .is_err()
        );
    }

    #[test]
    fn test_bad_date_is_malformed() {
        let err = Order::try_from(OrderRecord {
            order_date: Some("yesterday".to_string()),
            ..record()
        })
        .unwrap_err();
        assert!(err.to_string().contains("field 'orderDate'"));
    }

    #[test]
    fn test_record_from_order() {
        let order = Order::try_from(record()).unwrap();
        assert_eq!(OrderRecord::from(&order), record());
    }

    #[test]
    fn test_record_json_with_numeric_total() {
        let json = r#"{
            "id": "PZA001",
            "customerName": "John Doe",
            "pizzaType": "Margherita",
            "quantity": 2,
            "orderDate": "2024-05-28 14:30",
            "status": "Delivered",
            "total": 24.99
        }"#;
        let record: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.total, Some(Decimal::new(2499, 2)));

        let order = Order::try_from(record).unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_record_json_missing_fields() {
        let record: OrderRecord = serde_json::from_str(r#"{"id": "PZA011"}"#).unwrap();
        let err = Order::try_from(record).unwrap_err();
        assert_eq!(err.order_id().map(|id| id.as_str()), Some("PZA011"));
    }
}
