//! Product store: the catalog as the storefront sees it.
//!
//! Owns the product list plus the shopper's current search term, filter
//! selection and page. The matching set is recomputed whenever any of those
//! inputs change, and every such change sends the shopper back to page 1.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{
    find_by_id, find_by_id_mut, paginate, position_by_id, DomainError, DomainResult, PageCursor,
    ProductId,
};

use crate::filter::FilterSet;
use crate::product::{Discount, DiscountWindow, Product, ProductDraft, ProductUpdate};
use crate::source::{ProductSource, SourceError};

/// Products per catalog page.
pub const DEFAULT_PAGE_SIZE: usize = 12;
/// Featured products shown on the home page.
pub const FEATURED_LIMIT: usize = 10;
pub const TRENDING_LIMIT: usize = 8;
/// "You may also like" products on a product page.
pub const SIMILAR_LIMIT: usize = 4;

/// A recorded sale, used to rank trending products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub product_id: ProductId,
    pub variant_sku: String,
    pub quantity: u32,
    pub sold_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProductStore {
    products: Vec<Product>,
    search_term: String,
    filters: FilterSet,
    page_size: usize,
    cursor: PageCursor,
    /// Indices into `products` matching the current search + filters.
    matching: Vec<usize>,
    sales: Vec<Sale>,
    last_error: Option<String>,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            products: Vec::new(),
            search_term: String::new(),
            filters: FilterSet::default(),
            page_size: page_size.max(1),
            cursor: PageCursor::new(),
            matching: Vec::new(),
            sales: Vec::new(),
            last_error: None,
        }
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self.refresh();
        self
    }

    /// Replace the catalog with whatever `source` returns.
    ///
    /// On failure the current products are kept and the error message is
    /// exposed through [`last_error`](Self::last_error). No retry is attempted.
    pub fn load_from<S>(&mut self, source: &S) -> Result<usize, SourceError>
    where
        S: ProductSource + ?Sized,
    {
        match source.fetch_products() {
            Ok(products) => {
                let count = products.len();
                self.products = products;
                self.last_error = None;
                self.refresh();
                tracing::info!(products = count, "catalog loaded");
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog load failed; keeping previous products");
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Search, filters, paging
    // ─────────────────────────────────────────────────────────────────────

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refresh();
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FilterSet) {
        self.filters = filters;
        self.refresh();
    }

    pub fn reset_filters(&mut self) {
        self.set_filters(FilterSet::default());
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.cursor.current()
    }

    /// Move to `page`, clamped to the pages that exist. Returns the page now shown.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.cursor.go_to(page, self.matching.len(), self.page_size)
    }

    pub fn page_count(&self) -> usize {
        storefront_core::page_count(self.matching.len(), self.page_size)
    }

    pub fn total_count(&self) -> usize {
        self.products.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.matching.len()
    }

    /// Every product matching the current search and filters, in catalog order.
    pub fn filtered(&self) -> Vec<&Product> {
        self.matching.iter().map(|&i| &self.products[i]).collect()
    }

    /// The current page of [`filtered`](Self::filtered).
    pub fn current_page_items(&self) -> Vec<&Product> {
        paginate(&self.matching, self.page_size, self.cursor.current())
            .iter()
            .map(|&i| &self.products[i])
            .collect()
    }

    fn refresh(&mut self) {
        let needle = self.search_term.as_str();
        let matching: Vec<usize> = self
            .products
            .iter()
            .enumerate()
            .filter(|(_, p)| self.filters.matches(p, needle))
            .map(|(i, _)| i)
            .collect();
        self.matching = matching;
        self.cursor.reset();
        tracing::debug!(
            total = self.products.len(),
            matching = self.matching.len(),
            filters_active = self.filters.is_active(),
            "catalog selection recomputed"
        );
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lookups and presentation subsets
    // ─────────────────────────────────────────────────────────────────────

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        find_by_id(&self.products, id)
    }

    /// Products flagged as featured, in catalog order.
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_featured()).take(limit).collect()
    }

    /// Best sellers of the month before `now`, by quantity sold.
    ///
    /// Ties keep the order in which products were first sold. Without any
    /// recorded sales the first products of the catalog are returned.
    pub fn trending(&self, now: DateTime<Utc>) -> Vec<&Product> {
        if self.sales.is_empty() {
            return self.products.iter().take(TRENDING_LIMIT).collect();
        }

        let since = now
            .checked_sub_months(Months::new(1))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let mut totals: Vec<(&ProductId, u64)> = Vec::new();
        for sale in self.sales.iter().filter(|s| s.sold_at >= since) {
            match totals.iter_mut().find(|(id, _)| *id == &sale.product_id) {
                Some((_, qty)) => *qty += u64::from(sale.quantity),
                None => totals.push((&sale.product_id, u64::from(sale.quantity))),
            }
        }
        totals.sort_by(|a, b| b.1.cmp(&a.1));

        totals
            .into_iter()
            .filter_map(|(id, _)| self.product(id))
            .take(TRENDING_LIMIT)
            .collect()
    }

    /// Other products in the same category as `id`.
    pub fn similar(&self, id: &ProductId, limit: usize) -> Vec<&Product> {
        let Some(product) = self.product(id) else {
            return Vec::new();
        };
        self.products
            .iter()
            .filter(|p| p.category() == product.category() && p.id() != id)
            .take(limit)
            .collect()
    }

    /// Distinct variant colours, in first-seen order.
    pub fn available_colors(&self) -> Vec<&str> {
        distinct(self.products.iter().flat_map(|p| p.variants()).filter_map(|v| v.color()))
    }

    /// Distinct variant materials, in first-seen order.
    pub fn available_materials(&self) -> Vec<&str> {
        distinct(self.products.iter().flat_map(|p| p.variants()).filter_map(|v| v.material()))
    }

    /// Distinct product categories, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.category()))
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    // ─────────────────────────────────────────────────────────────────────
    // Admin mutations
    // ─────────────────────────────────────────────────────────────────────

    pub fn add_product(&mut self, product: Product) -> DomainResult<()> {
        if self.product(product.id()).is_some() {
            return Err(DomainError::conflict(format!("product {} already exists", product.id())));
        }
        tracing::info!(product_id = %product.id(), "product added");
        self.products.push(product);
        self.refresh();
        Ok(())
    }

    /// Create a product from an admin draft under a freshly generated id.
    pub fn create_product(&mut self, draft: ProductDraft) -> DomainResult<ProductId> {
        let product = draft.into_product(ProductId::generate())?;
        let id = product.id().clone();
        self.add_product(product)?;
        Ok(id)
    }

    pub fn update_product(&mut self, id: &ProductId, update: ProductUpdate) -> DomainResult<()> {
        self.product_mut(id)?.apply_update(update)?;
        tracing::info!(product_id = %id, "product updated");
        self.refresh();
        Ok(())
    }

    pub fn delete_product(&mut self, id: &ProductId) -> DomainResult<Product> {
        let index = position_by_id(&self.products, id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        let removed = self.products.remove(index);
        tracing::info!(product_id = %id, "product deleted");
        self.refresh();
        Ok(removed)
    }

    /// Attach a discount to one variant (`variant_sku`) or to the whole product.
    ///
    /// The window always applies at product level, whichever target is chosen.
    pub fn apply_discount(
        &mut self,
        id: &ProductId,
        discount: Discount,
        window: Option<DiscountWindow>,
        variant_sku: Option<&str>,
    ) -> DomainResult<()> {
        let product = self.product_mut(id)?;
        match variant_sku {
            Some(sku) => product
                .variant_mut(sku)
                .ok_or_else(|| DomainError::not_found(format!("variant {sku} of product {id}")))?
                .set_discount(Some(discount)),
            None => product.set_discount(Some(discount)),
        }
        product.set_discount_window(window);
        tracing::info!(product_id = %id, variant = ?variant_sku, ?discount, "discount applied");
        Ok(())
    }

    pub fn record_sale(
        &mut self,
        product_id: &ProductId,
        variant_sku: &str,
        quantity: u32,
        sold_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.validate_sale(product_id, variant_sku, quantity)?;
        self.sales.push(Sale {
            product_id: product_id.clone(),
            variant_sku: variant_sku.to_string(),
            quantity,
            sold_at,
        });
        Ok(())
    }

    /// Check that a sale could be recorded, without recording it.
    pub fn validate_sale(
        &self,
        product_id: &ProductId,
        variant_sku: &str,
        quantity: u32,
    ) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("sale quantity must be positive"));
        }
        let product = self
            .product(product_id)
            .ok_or_else(|| DomainError::not_found(format!("product {product_id}")))?;
        if product.variant(variant_sku).is_none() {
            return Err(DomainError::not_found(format!(
                "variant {variant_sku} of product {product_id}"
            )));
        }
        Ok(())
    }

    fn product_mut(&mut self, id: &ProductId) -> DomainResult<&mut Product> {
        find_by_id_mut(&mut self.products, id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
