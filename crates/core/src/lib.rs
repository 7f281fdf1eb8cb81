//! `storefront-core`: shared storefront building blocks.
//!
//! Pure primitives only: errors, identifiers, money and page slicing. No IO.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod pagination;

pub use entity::{find_by_id, find_by_id_mut, position_by_id, Entity};
pub use error::{DomainError, DomainResult};
pub use id::{OrderId, ProductId, ReviewId, TransactionId, UserId};
pub use money::Money;
pub use pagination::{clamp_page, page_count, paginate, PageCursor};
