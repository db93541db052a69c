//! Order records and their lifecycle status

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire and display format of an order timestamp (`YYYY-MM-DD HH:MM`)
pub const ORDER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Opaque order identifier (`"PZA" + zero-padded sequence`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Lifecycle status of an order
///
/// The set is closed: anything else is rejected at the ingestion boundary.
/// Labels are the ones shown on the dashboard, so `OutForDelivery` renders
/// as `"Out for Delivery"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Preparing,
    #[serde(rename = "Out for Delivery", alias = "OutForDelivery")]
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Dashboard label for this status
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Whether the order is still being worked on
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Preparing | OrderStatus::OutForDelivery
        )
    }

    /// Badge tone the presentation layer uses for this status
    pub fn badge(&self) -> StatusBadge {
        match self {
            OrderStatus::Pending => StatusBadge::Yellow,
            OrderStatus::Preparing => StatusBadge::Blue,
            OrderStatus::OutForDelivery => StatusBadge::Purple,
            OrderStatus::Delivered => StatusBadge::Green,
            OrderStatus::Cancelled => StatusBadge::Red,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Error returned when a status label is not one of the five known ones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Preparing" => Ok(OrderStatus::Preparing),
            "Out for Delivery" | "OutForDelivery" => Ok(OrderStatus::OutForDelivery),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Display tone of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBadge {
    Yellow,
    Blue,
    Purple,
    Green,
    Red,
}

/// A single pizza order
///
/// Orders are immutable once built; the query engine only ever reads them.
/// Deserializing goes through [`OrderRecord`](crate::core::record::OrderRecord),
/// so the same field checks apply as at any other ingestion point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "crate::core::record::OrderRecord")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub pizza_type: String,
    pub quantity: u32,
    #[serde(serialize_with = "serialize_order_date")]
    pub order_date: NaiveDateTime,
    pub status: OrderStatus,
    pub total: Decimal,
}

impl Order {
    /// Order timestamp rendered as `YYYY-MM-DD HH:MM`
    pub fn order_date_label(&self) -> String {
        self.order_date.format(ORDER_DATE_FORMAT).to_string()
    }
}

/// Parse a `YYYY-MM-DD HH:MM` timestamp
pub fn parse_order_date(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, ORDER_DATE_FORMAT)
}

fn serialize_order_date<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(ORDER_DATE_FORMAT))
}
