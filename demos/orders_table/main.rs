//! Orders table demo: loads a snapshot and replays a few dashboard clicks

use anyhow::Result;
use pizza_orders::engine::format_money;
use pizza_orders::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_view(title: &str, state: &QueryState, view: &OrderView, currency: &str) {
    println!("\n📋 {}", title);
    println!(
        "   search={:?} status={} sort={} {}",
        state.search_term, state.status_filter, state.sort_field, state.sort_direction
    );

    let headers: Vec<String> = SortField::ALL
        .iter()
        .map(|field| match state.sort_indicator(*field) {
            Some(SortDirection::Asc) => format!("{} ▲", field.column_title()),
            Some(SortDirection::Desc) => format!("{} ▼", field.column_title()),
            None => field.column_title().to_string(),
        })
        .collect();
    println!(
        "   {:<10} {:<18} {:<16} {:<5} {:<18} {:<18} {:>9}",
        headers[0], headers[1], headers[2], headers[3], headers[4], headers[5], headers[6]
    );

    if view.is_empty() {
        println!("   No orders found");
        println!("   Try adjusting your search or filter criteria");
    }

    for order in &view.rows {
        println!(
            "   {:<10} {:<18} {:<16} {:<5} {:<18} {:<18} {:>9}",
            order.id,
            order.customer_name,
            order.pizza_type,
            order.quantity,
            order.order_date_label(),
            format!("{} ({:?})", order.status, order.status.badge()),
            format_money(order.total, currency),
        );
    }

    let summary = &view.summary;
    println!(
        "   Total Orders: {}  Delivered: {}  Active Orders: {}  Total Revenue: {}",
        summary.total_count,
        summary.delivered_count,
        summary.active_count,
        format_money(summary.total_revenue, currency),
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🍕 Pizza Orders Demo");
    println!("====================");

    let config = match std::env::args().nth(1) {
        Some(path) => DashboardConfig::from_yaml_file(&path)?,
        None => DashboardConfig::default_config(),
    };
    let currency = config.currency_symbol.clone();

    let store = config.load_store()?;
    let mut state = config.initial_state()?;
    println!("✅ Loaded {} orders", store.len());

    print_view("All orders", &state, &store.view(&state), &currency);

    state.toggle_sort(SortField::Total);
    print_view("Clicked \"Total\"", &state, &store.view(&state), &currency);

    state.search_term = "pepperoni".to_string();
    print_view("Searched \"pepperoni\"", &state, &store.view(&state), &currency);

    state.search_term.clear();
    state.status_filter = StatusFilter::Only(OrderStatus::Cancelled);
    print_view("Cancelled only", &state, &store.view(&state), &currency);

    state.status_filter = StatusFilter::All;
    state.search_term = "zzz".to_string();
    print_view("Searched \"zzz\"", &state, &store.view(&state), &currency);

    println!("\n📤 Export of the default view:");
    println!("{}", store.view(&QueryState::default()).to_json_pretty()?);

    Ok(())
}
