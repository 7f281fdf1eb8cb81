use chrono::Utc;

use storefront_app::{AppConfig, AppState};
use storefront_catalog::{FEATURED_LIMIT, SIMILAR_LIMIT};
use storefront_observability::LogFormat;

fn main() -> anyhow::Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err.into());
        }
    }

    let config = AppConfig::from_env()?;
    storefront_observability::init_with(LogFormat::from_json_flag(config.log_json));

    if config.catalog_path.is_none() {
        tracing::warn!("STOREFRONT_CATALOG_PATH not set; serving the demo catalog");
    }

    let state = AppState::bootstrap(config)?;
    let catalog = &state.catalog;

    tracing::info!(
        products = catalog.total_count(),
        pages = catalog.page_count(),
        categories = ?catalog.categories(),
        "catalog ready"
    );

    for product in catalog.featured(FEATURED_LIMIT) {
        tracing::info!(
            id = %product.id(),
            name = product.name(),
            from = %product.lowest_price().unwrap_or_default(),
            "featured"
        );
    }

    let trending: Vec<&str> = catalog.trending(Utc::now()).iter().map(|p| p.name()).collect();
    tracing::info!(?trending, "trending");

    if let Some(first) = catalog.current_page_items().first() {
        let similar: Vec<&str> = catalog
            .similar(first.id(), SIMILAR_LIMIT)
            .iter()
            .map(|p| p.name())
            .collect();
        tracing::info!(product = first.name(), ?similar, "similar products");
    }

    tracing::info!(
        orders = state.orders.orders().len(),
        transactions = state.transactions.transactions().len(),
        users = state.auth.users().len(),
        "storefront state loaded"
    );
    Ok(())
}
