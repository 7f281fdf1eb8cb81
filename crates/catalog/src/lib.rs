//! Storefront catalog.
//!
//! Products and their variants, the filter evaluator, and the product store
//! that combines search, filters and pagination into the shopper's view of
//! the catalog. Pure domain logic; loading goes through [`ProductSource`].

pub mod filter;
pub mod product;
pub mod review;
pub mod seed;
pub mod sku;
pub mod source;
pub mod store;

pub use filter::{filter_products, FilterSet, PriceRange, OTHER_SIZE};
pub use product::{
    Discount, DiscountWindow, Product, ProductBuilder, ProductDraft, ProductStatus, ProductUpdate,
    Variant, VariantDraft, STANDARD_CATEGORIES, STANDARD_SIZES, UNCATEGORIZED,
};
pub use review::{NewReview, Review, ReviewStore};
pub use seed::demo_catalog;
pub use sku::{build_sku, generate_sku};
pub use source::{CmsProductSource, InMemoryProductSource, ProductSource, SourceError};
pub use store::{
    ProductStore, Sale, DEFAULT_PAGE_SIZE, FEATURED_LIMIT, SIMILAR_LIMIT, TRENDING_LIMIT,
};
