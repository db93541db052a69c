//! Tests for loading the dashboard from configuration files

use pizza_orders::prelude::*;
use std::io::Write;

fn sample_json_path() -> String {
    format!("{}/data/orders.json", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_bundled_json_matches_sample_orders() {
    let store = InMemoryOrderStore::load(&JsonOrderSource::new(sample_json_path())).unwrap();
    assert_eq!(store.orders(), pizza_orders::storage::sample_orders().as_slice());

    let view = store.view(&QueryState::default());
    assert_eq!(view.summary.revenue_display(), "$280.84");
}

#[test]
fn test_config_file_with_orders_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "orders_file: {}\ncurrency_symbol: \"€\"\ndefault_query:\n  searchTerm: pepperoni\n  sortDirection: asc",
        sample_json_path()
    )
    .unwrap();

    let config = DashboardConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.currency_symbol, "€");

    let store = config.load_store().unwrap();
    let state = config.initial_state().unwrap();
    let view = store.view(&state);

    let ids: Vec<&str> = view.rows.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["PZA002", "PZA009"]);
    assert_eq!(
        pizza_orders::engine::format_money(view.summary.total_revenue, &config.currency_symbol),
        "€67.96"
    );
}

#[test]
fn test_missing_config_file() {
    let err = DashboardConfig::from_yaml_file("/nonexistent/dashboard.yaml").unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_missing_orders_file() {
    let config = DashboardConfig {
        orders_file: Some("/nonexistent/orders.json".into()),
        ..DashboardConfig::default_config()
    };
    let err = config.load_store().unwrap_err();
    assert!(err.to_string().contains("failed to load orders"));
}

#[test]
fn test_malformed_orders_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"id": "PZA001", "customerName": "John Doe"}}]"#).unwrap();

    let config = DashboardConfig {
        orders_file: Some(file.path().to_path_buf()),
        ..DashboardConfig::default_config()
    };
    let err = config.load_store().unwrap_err();
    let root = err.downcast_ref::<QueryError>().unwrap();
    assert_eq!(root.order_id(), Some(&OrderId::new("PZA001")));
}
