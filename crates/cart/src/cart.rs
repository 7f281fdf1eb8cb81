use serde::{Deserialize, Serialize};

use storefront_catalog::{Product, Variant};
use storefront_core::{DomainError, DomainResult, Money};

/// One cart line: a product variant and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    pub product: Product,
    pub variant: Variant,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Money {
        self.variant.price().times(self.quantity)
    }
}

/// Cart lines keyed by variant SKU, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CartRecord")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` of `variant`. Adding a SKU already in the cart increases that line.
    pub fn add_item(&mut self, product: &Product, variant: &Variant, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if product.variant(variant.sku()).is_none() {
            return Err(DomainError::invariant(format!(
                "variant {} does not belong to product {}",
                variant.sku(),
                product.id()
            )));
        }

        match self.line_mut(variant.sku()) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.items.push(CartItem {
                product: product.clone(),
                variant: variant.clone(),
                quantity,
            }),
        }
        tracing::debug!(sku = variant.sku(), quantity, "cart item added");
        Ok(())
    }

    /// Remove the line for `sku`; returns it if present.
    pub fn remove_item(&mut self, sku: &str) -> Option<CartItem> {
        let index = self.items.iter().position(|i| i.variant.sku() == sku)?;
        Some(self.items.remove(index))
    }

    /// Set the quantity of the line for `sku`; zero removes the line.
    pub fn update_quantity(&mut self, sku: &str, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return self
                .remove_item(sku)
                .map(|_| ())
                .ok_or_else(|| DomainError::not_found(format!("cart item {sku}")));
        }
        let line = self
            .line_mut(sku)
            .ok_or_else(|| DomainError::not_found(format!("cart item {sku}")))?;
        line.quantity = quantity;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of list price times quantity over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    fn line_mut(&mut self, sku: &str) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| i.variant.sku() == sku)
    }
}

/// Saved cart shape. Lines are replayed through [`Cart::add_item`] on decode.
#[derive(Deserialize)]
struct CartRecord {
    items: Vec<CartLineRecord>,
}

#[derive(Deserialize)]
struct CartLineRecord {
    product: Product,
    variant: Variant,
    quantity: u32,
}

impl TryFrom<CartRecord> for Cart {
    type Error = DomainError;

    fn try_from(record: CartRecord) -> DomainResult<Self> {
        let mut cart = Cart::new();
        for line in record.items {
            cart.add_item(&line.product, &line.variant, line.quantity)?;
        }
        Ok(cart)
    }
}
