//! Data source trait for order records

use crate::core::error::QueryError;
use crate::core::record::OrderRecord;

/// A read-only supplier of order records
///
/// Implement this trait for whatever backs the dashboard (a file, a fixture,
/// an upstream service client). The query engine never talks to a source
/// directly: records are fetched once into an
/// [`InMemoryOrderStore`](crate::storage::InMemoryOrderStore) snapshot.
pub trait OrderSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Fetch the current working set
    ///
    /// # Returns
    /// Raw records, in the order the source delivers them. That order is the
    /// store order the filter stage preserves.
    fn fetch_records(&self) -> Result<Vec<OrderRecord>, QueryError>;
}

impl OrderSource for Vec<OrderRecord> {
    fn name(&self) -> &str {
        "records"
    }

    fn fetch_records(&self) -> Result<Vec<OrderRecord>, QueryError> {
        Ok(self.clone())
    }
}
