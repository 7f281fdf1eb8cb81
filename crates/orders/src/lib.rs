//! Orders and payment transactions.
//!
//! Admin-facing records of what was bought. Orders reference catalog
//! products by id; transactions carry denormalized item names for the
//! history and admin views.

pub mod order;
pub mod seed;
pub mod transaction;

pub use order::{Order, OrderBook, OrderItem, OrderStatus, OrderSummary, TAX_PERCENT};
pub use seed::{demo_orders, demo_transactions};
pub use transaction::{
    Transaction, TransactionFilter, TransactionItem, TransactionStatus, TransactionStore,
    DEFAULT_TRANSACTIONS_PAGE_SIZE,
};
