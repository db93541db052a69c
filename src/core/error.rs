//! Typed errors for the order query engine
//!
//! The engine itself is total over well-formed input. Errors only surface at
//! the two boundaries where untyped data enters the crate:
//!
//! - [`QueryError::InvalidQueryState`]: raw query parameters name an unknown
//!   sort field, status filter or direction
//! - [`QueryError::MalformedRecord`]: a record from a data source is missing a
//!   field or carries a value outside its domain
//! - [`QueryError::DuplicateOrder`]: two records share the same order id
//! - [`QueryError::Source`]: the data source could not be read or decoded
//!
//! # Example
//!
//! ```rust,ignore
//! match QueryState::try_from(params) {
//!     Ok(state) => compute_view(store.orders(), &state),
//!     Err(QueryError::InvalidQueryState { parameter, value }) => {
//!         eprintln!("bad {}: {}", parameter, value);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use crate::core::order::OrderId;
use serde::Serialize;
use thiserror::Error;

/// Main error type of the crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A query parameter holds a value outside its closed set
    #[error("Invalid query state: unknown {parameter} '{value}'")]
    InvalidQueryState { parameter: String, value: String },

    /// A source record cannot become an [`Order`](crate::core::order::Order)
    #[error("Malformed order record '{order_id}': field '{field}' {reason}")]
    MalformedRecord {
        order_id: OrderId,
        field: &'static str,
        reason: String,
    },

    /// The same id appears twice in one store
    #[error("Duplicate order id '{order_id}'")]
    DuplicateOrder { order_id: OrderId },

    /// The data source failed before any record was seen
    #[error("Order source error: {message}")]
    Source { message: String },
}

/// Serializable error body for presentation layers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl QueryError {
    pub(crate) fn invalid(parameter: &str, value: &str) -> Self {
        QueryError::InvalidQueryState {
            parameter: parameter.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn missing(order_id: &OrderId, field: &'static str) -> Self {
        QueryError::MalformedRecord {
            order_id: order_id.clone(),
            field,
            reason: "is missing".to_string(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::InvalidQueryState { .. } => "INVALID_QUERY_STATE",
            QueryError::MalformedRecord { .. } => "MALFORMED_RECORD",
            QueryError::DuplicateOrder { .. } => "DUPLICATE_ORDER",
            QueryError::Source { .. } => "SOURCE_ERROR",
        }
    }

    /// Order id the error is about, if any
    pub fn order_id(&self) -> Option<&OrderId> {
        match self {
            QueryError::MalformedRecord { order_id, .. }
            | QueryError::DuplicateOrder { order_id } => Some(order_id),
            _ => None,
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            QueryError::InvalidQueryState { parameter, value } => Some(serde_json::json!({
                "parameter": parameter,
                "value": value,
            })),
            QueryError::MalformedRecord {
                order_id, field, ..
            } => Some(serde_json::json!({
                "order_id": order_id.as_str(),
                "field": field,
            })),
            QueryError::DuplicateOrder { order_id } => {
                Some(serde_json::json!({ "order_id": order_id.as_str() }))
            }
            QueryError::Source { .. } => None,
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::Source {
            message: err.to_string(),
        }
    }
}
