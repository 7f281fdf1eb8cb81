//! Application state: every store the storefront needs, owned in one place.

use chrono::{DateTime, Utc};
use thiserror::Error;

use storefront_auth::{AuthError, AuthStore, PasswordHasher};
use storefront_cart::Cart;
use storefront_catalog::{
    demo_catalog, CmsProductSource, InMemoryProductSource, ProductStore, ReviewStore, SourceError,
};
use storefront_core::{DomainError, OrderId, TransactionId};
use storefront_orders::{
    demo_orders, demo_transactions, Order, OrderBook, OrderItem, OrderStatus, Transaction,
    TransactionItem, TransactionStatus, TransactionStore,
};

use crate::config::{AppConfig, ConfigError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("sign in to check out")]
    NotSignedIn,

    #[error("cart is empty")]
    EmptyCart,
}

#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: ProductStore,
    pub cart: Cart,
    pub auth: AuthStore,
    pub orders: OrderBook,
    pub transactions: TransactionStore,
    pub reviews: ReviewStore,
}

impl AppState {
    /// Build every store and load the catalog.
    ///
    /// A CMS dump that fails to load is fatal here; the demo catalog is used
    /// only when no dump is configured.
    pub fn bootstrap(config: AppConfig) -> Result<Self, AppError> {
        let auth = AuthStore::with_default_admin(PasswordHasher::new(config.bcrypt_cost))?;
        let mut state = Self {
            catalog: ProductStore::with_page_size(config.page_size),
            cart: Cart::new(),
            auth,
            orders: OrderBook::with_orders(demo_orders()?),
            transactions: TransactionStore::new(config.transactions_page_size)
                .with_transactions(demo_transactions()?),
            reviews: ReviewStore::new(),
            config,
        };
        state.load_catalog()?;
        Ok(state)
    }

    pub fn load_catalog(&mut self) -> Result<usize, AppError> {
        let count = match &self.config.catalog_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading catalog from CMS dump");
                let source = CmsProductSource::from_path(path, self.config.asset_base_url.as_str());
                self.catalog.load_from(&source)?
            }
            None => {
                tracing::info!("no catalog path configured; using demo catalog");
                self.catalog.load_from(&InMemoryProductSource::new(demo_catalog()?))?
            }
        };
        Ok(count)
    }

    /// Turn the cart into an order and a transaction for the signed-in user.
    ///
    /// Lines are charged at their effective price at `now`. Each line is also
    /// recorded as a sale for trending, and the cart is emptied. If any line
    /// no longer matches the catalog nothing is changed.
    pub fn checkout(&mut self, now: DateTime<Utc>) -> Result<OrderId, AppError> {
        let user = self.auth.current_user().ok_or(AppError::NotSignedIn)?;
        if self.cart.is_empty() {
            return Err(AppError::EmptyCart);
        }
        for line in self.cart.items() {
            self.catalog
                .validate_sale(line.product.id(), line.variant.sku(), line.quantity)?;
        }

        let mut order_items = Vec::with_capacity(self.cart.items().len());
        let mut transaction_items = Vec::with_capacity(self.cart.items().len());
        for line in self.cart.items() {
            let price = line.product.effective_price(&line.variant, now);
            order_items.push(OrderItem {
                product_id: line.product.id().clone(),
                variant_sku: line.variant.sku().to_string(),
                quantity: line.quantity,
                price,
            });
            transaction_items.push(TransactionItem {
                id: line.variant.sku().to_string(),
                name: line.product.name().to_string(),
                quantity: line.quantity,
                price,
            });
        }

        let order = Order {
            id: OrderId::generate(),
            customer_id: user.id.clone(),
            date: now,
            status: OrderStatus::Processing,
            total: order_items.iter().map(OrderItem::line_total).sum(),
            items: order_items,
        };
        let transaction = Transaction {
            id: TransactionId::generate(),
            date: now.date_naive(),
            total: order.total,
            items: transaction_items,
            user_id: user.id.clone(),
            user_name: user.display_name(),
            status: TransactionStatus::Completed,
        };

        let order_id = order.id.clone();
        let total = order.total;
        self.orders.add_order(order)?;
        self.transactions.add(transaction)?;
        for line in self.cart.items() {
            self.catalog
                .record_sale(line.product.id(), line.variant.sku(), line.quantity, now)?;
        }
        self.cart.clear();
        tracing::info!(order_id = %order_id, %total, "checkout completed");
        Ok(order_id)
    }
}
