//! Order sources and the in-memory snapshot store

pub mod in_memory;
pub mod json;
pub mod seed;

pub use in_memory::InMemoryOrderStore;
pub use json::JsonOrderSource;
pub use seed::{SampleOrderSource, sample_orders};
