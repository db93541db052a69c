//! In-memory snapshot of the order working set

use crate::core::error::QueryError;
use crate::core::order::{Order, OrderId};
use crate::core::query::{QueryParams, QueryState};
use crate::core::record::OrderRecord;
use crate::core::store::OrderSource;
use crate::engine::{self, OrderView};
use std::collections::HashSet;
use std::sync::Arc;

/// Immutable order snapshot
///
/// Cloning is cheap (the orders live behind an `Arc`), and the snapshot can
/// be queried from several threads at once without locking.
#[derive(Debug, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<[Order]>,
}

impl InMemoryOrderStore {
    /// Build a store from validated orders
    ///
    /// Fails with [`QueryError::DuplicateOrder`] when two orders share an id.
    pub fn new(orders: Vec<Order>) -> Result<Self, QueryError> {
        let mut seen = HashSet::with_capacity(orders.len());
        for order in &orders {
            if !seen.insert(&order.id) {
                return Err(QueryError::DuplicateOrder {
                    order_id: order.id.clone(),
                });
            }
        }

        Ok(Self {
            orders: orders.into(),
        })
    }

    /// Validate raw records and build a store
    ///
    /// The first malformed record aborts the load; nothing is skipped or
    /// patched up.
    pub fn from_records(records: Vec<OrderRecord>) -> Result<Self, QueryError> {
        let orders = records
            .into_iter()
            .map(|record| {
                Order::try_from(record).inspect_err(|e| {
                    tracing::warn!(order_id = ?e.order_id(), error = %e, "rejected order record");
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(orders)
    }

    /// Fetch a snapshot from a source
    pub fn load(source: &dyn OrderSource) -> Result<Self, QueryError> {
        let records = source.fetch_records()?;
        let store = Self::from_records(records)?;
        tracing::info!(source = source.name(), orders = store.len(), "loaded order snapshot");
        Ok(store)
    }

    /// All orders, in store order
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Compute the view for a query state
    pub fn view(&self, state: &QueryState) -> OrderView {
        engine::compute_view(&self.orders, state)
    }

    /// Compute the view for raw query parameters
    pub fn view_from_params(&self, params: &QueryParams) -> Result<OrderView, QueryError> {
        engine::compute_view_from_params(&self.orders, params)
    }
}

impl OrderSource for InMemoryOrderStore {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn fetch_records(&self) -> Result<Vec<OrderRecord>, QueryError> {
        Ok(self.orders.iter().map(OrderRecord::from).collect())
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self {
            orders: Arc::from(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed::{SampleOrderSource, sample_orders};

    #[test]
    fn test_load_sample_source() {
        let store = InMemoryOrderStore::load(&SampleOrderSource).unwrap();
        assert_eq!(store.len(), 10);
        assert_eq!(store.orders(), sample_orders().as_slice());
    }

    #[test]
    fn test_get_order() {
        let store = InMemoryOrderStore::new(sample_orders()).unwrap();

        let order = store.get(&OrderId::new("PZA005")).unwrap();
        assert_eq!(order.customer_name, "David Wilson");
        assert!(store.get(&OrderId::new("PZA999")).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut orders = sample_orders();
        orders.push(orders[2].clone());

        let err = InMemoryOrderStore::new(orders).unwrap_err();
        assert_eq!(
            err,
            QueryError::DuplicateOrder {
                order_id: OrderId::new("PZA003")
            }
        );
    }

    #[test]
    fn test_malformed_record_aborts_load() {
        let mut records: Vec<OrderRecord> = sample_orders().iter().map(OrderRecord::from).collect();
        records[6].total = None;

        let err = InMemoryOrderStore::load(&records).unwrap_err();
        assert_eq!(err.order_id(), Some(&OrderId::new("PZA007")));
        assert_eq!(err.error_code(), "MALFORMED_RECORD");
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryOrderStore::default();
        assert!(store.is_empty());

        let view = store.view(&QueryState::default());
        assert!(view.is_empty());
        assert_eq!(view.summary.total_count, 0);
    }

    #[test]
    fn test_view_from_params() {
        let store = InMemoryOrderStore::new(sample_orders()).unwrap();
        let params = QueryParams {
            sort_field: "total".to_string(),
            sort_direction: "asc".to_string(),
            ..Default::default()
        };

        let view = store.view_from_params(&params).unwrap();
        assert_eq!(view.rows[0].id.as_str(), "PZA008");
        assert_eq!(view.rows[9].id.as_str(), "PZA009");
    }

    #[test]
    fn test_store_serves_as_source() {
        let store = InMemoryOrderStore::new(sample_orders()).unwrap();
        let reloaded = InMemoryOrderStore::load(&store).unwrap();
        assert_eq!(reloaded.orders(), store.orders());
        assert_eq!(store.name(), "in-memory");
    }

    #[test]
    fn test_clones_share_snapshot() {
        let store = InMemoryOrderStore::new(sample_orders()).unwrap();
        let clone = store.clone();
        assert!(std::ptr::eq(store.orders(), clone.orders()));
    }
}
