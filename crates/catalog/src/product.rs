use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, Money, ProductId};

use crate::sku::generate_sku;

/// Sizes offered by the size filter; anything else is grouped under "Other".
pub const STANDARD_SIZES: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

/// Categories offered by the category filter.
pub const STANDARD_CATEGORIES: [&str; 6] =
    ["tops", "bottoms", "dresses", "outerwear", "footwear", "accessories"];

/// Category assigned when a product is added without one.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Product visibility status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

/// Price reduction attached to a product or a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", try_from = "DiscountRecord")]
pub enum Discount {
    /// Whole-percent reduction (`0..=100`).
    Percentage { percent: u8 },
    /// Flat reduction, floored at a zero price.
    Fixed { amount: Money },
}

impl Discount {
    pub fn percentage(percent: u8) -> DomainResult<Self> {
        if percent > 100 {
            return Err(DomainError::validation(format!(
                "percentage discount must be within 0..=100 (got {percent})"
            )));
        }
        Ok(Self::Percentage { percent })
    }

    pub fn fixed(amount: Money) -> Self {
        Self::Fixed { amount }
    }

    /// Discounted price.
    pub fn apply(&self, price: Money) -> Money {
        match *self {
            Discount::Percentage { percent } => {
                price.saturating_sub(price.percent(u32::from(percent)))
            }
            Discount::Fixed { amount } => price.saturating_sub(amount),
        }
    }
}

/// Period during which product discounts are in effect. Open ends are unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DiscountWindowRecord")]
pub struct DiscountWindow {
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
}

impl DiscountWindow {
    pub fn new(
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        if let (Some(start), Some(end)) = (starts_at, ends_at) {
            if start > end {
                return Err(DomainError::validation("discount window ends before it starts"));
            }
        }
        Ok(Self { starts_at, ends_at })
    }

    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        self.starts_at
    }

    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        self.ends_at
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.starts_at.is_none_or(|start| at >= start) && self.ends_at.is_none_or(|end| at <= end)
    }
}

/// A purchasable SKU-level configuration of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VariantRecord")]
pub struct Variant {
    sku: String,
    size: String,
    stock: u32,
    price: Money,
    color: Option<String>,
    material: Option<String>,
    discount: Option<Discount>,
    images: Vec<String>,
}

impl Variant {
    pub fn new(
        sku: impl Into<String>,
        size: impl Into<String>,
        stock: u32,
        price: Money,
    ) -> DomainResult<Self> {
        let sku = sku.into();
        let size = size.into();
        if sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if size.trim().is_empty() {
            return Err(DomainError::validation(format!("variant {sku}: size cannot be empty")));
        }
        Ok(Self {
            sku,
            size,
            stock,
            price,
            color: None,
            material: None,
            discount: None,
            images: Vec::new(),
        })
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    pub fn discount(&self) -> Option<&Discount> {
        self.discount.as_ref()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Whether the size falls outside [`STANDARD_SIZES`].
    pub fn has_nonstandard_size(&self) -> bool {
        !STANDARD_SIZES.contains(&self.size.as_str())
    }

    pub(crate) fn set_discount(&mut self, discount: Option<Discount>) {
        self.discount = discount;
    }
}

/// A catalog product with its variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    category: String,
    cover_image: String,
    status: ProductStatus,
    variants: Vec<Variant>,
    featured: bool,
    brand: Option<String>,
    slug: Option<String>,
    discount: Option<Discount>,
    discount_window: Option<DiscountWindow>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Product {
    pub fn builder(id: ProductId, name: impl Into<String>) -> ProductBuilder {
        ProductBuilder::new(id, name)
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn cover_image(&self) -> &str {
        &self.cover_image
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn variant(&self, sku: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.sku == sku)
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn discount(&self) -> Option<&Discount> {
        self.discount.as_ref()
    }

    pub fn discount_window(&self) -> Option<&DiscountWindow> {
        self.discount_window.as_ref()
    }

    /// Lowest list price across variants (`None` without variants).
    pub fn lowest_price(&self) -> Option<Money> {
        self.variants.iter().map(Variant::price).min()
    }

    pub fn total_stock(&self) -> u64 {
        self.variants.iter().map(|v| u64::from(v.stock)).sum()
    }

    /// Price a shopper pays for `variant` at `at`.
    ///
    /// A variant discount wins over the product discount. Either one only
    /// applies while `at` is inside the product's discount window (if any).
    pub fn effective_price(&self, variant: &Variant, at: DateTime<Utc>) -> Money {
        if let Some(window) = &self.discount_window {
            if !window.contains(at) {
                return variant.price;
            }
        }
        match variant.discount.as_ref().or(self.discount.as_ref()) {
            Some(discount) => discount.apply(variant.price),
            None => variant.price,
        }
    }

    /// Apply a partial update; the product is left untouched if it fails validation.
    pub fn apply_update(&mut self, update: ProductUpdate) -> DomainResult<()> {
        let mut next = self.clone();
        if let Some(name) = update.name {
            next.name = name;
        }
        if let Some(description) = update.description {
            next.description = description;
        }
        if let Some(category) = update.category {
            next.category = category_or_default(category);
        }
        if let Some(cover_image) = update.cover_image {
            next.cover_image = cover_image;
        }
        if let Some(status) = update.status {
            next.status = status;
        }
        if let Some(featured) = update.featured {
            next.featured = featured;
        }
        if let Some(variants) = update.variants {
            next.variants = variants;
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    pub(crate) fn set_discount(&mut self, discount: Option<Discount>) {
        self.discount = discount;
    }

    pub(crate) fn set_discount_window(&mut self, window: Option<DiscountWindow>) {
        self.discount_window = window;
    }

    pub(crate) fn variant_mut(&mut self, sku: &str) -> Option<&mut Variant> {
        self.variants.iter_mut().find(|v| v.sku == sku)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let mut seen = HashSet::new();
        for variant in &self.variants {
            if !seen.insert(variant.sku.as_str()) {
                return Err(DomainError::invariant(format!(
                    "duplicate SKU {} in product {}",
                    variant.sku, self.id
                )));
            }
        }
        Ok(())
    }
}

/// Validating constructor for [`Product`].
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            product: Product {
                id,
                name: name.into(),
                description: String::new(),
                category: String::new(),
                cover_image: String::new(),
                status: ProductStatus::Active,
                variants: Vec::new(),
                featured: false,
                brand: None,
                slug: None,
                discount: None,
                discount_window: None,
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.product.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.product.category = category.into();
        self
    }

    pub fn cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.product.cover_image = cover_image.into();
        self
    }

    pub fn status(mut self, status: ProductStatus) -> Self {
        self.product.status = status;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.product.featured = featured;
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.product.brand = Some(brand.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.product.slug = Some(slug.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.product.variants.push(variant);
        self
    }

    pub fn variants(mut self, variants: impl IntoIterator<Item = Variant>) -> Self {
        self.product.variants.extend(variants);
        self
    }

    pub fn build(self) -> DomainResult<Product> {
        let mut product = self.product;
        product.category = category_or_default(product.category);
        product.validate()?;
        Ok(product)
    }
}

/// Admin edit of a product. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub cover_image: Option<String>,
    pub status: Option<ProductStatus>,
    pub featured: Option<bool>,
    pub variants: Option<Vec<Variant>>,
}

/// Admin form input for a new variant. The SKU is generated on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDraft {
    pub size: String,
    pub stock: u32,
    pub price: Money,
    pub color: Option<String>,
    pub material: Option<String>,
}

/// Admin form input for a new product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub cover_image: String,
    pub featured: bool,
    pub variants: Vec<VariantDraft>,
}

impl ProductDraft {
    /// Build the product under `id`, giving every variant a fresh SKU.
    pub fn into_product(self, id: ProductId) -> DomainResult<Product> {
        let category = category_or_default(self.category);
        let mut skus: HashSet<String> = HashSet::new();
        let mut variants = Vec::with_capacity(self.variants.len());
        for draft in self.variants {
            let sku = loop {
                let candidate = generate_sku(&category, &self.name, &draft.size);
                if skus.insert(candidate.clone()) {
                    break candidate;
                }
            };
            let mut variant = Variant::new(sku, draft.size, draft.stock, draft.price)?;
            variant.color = draft.color;
            variant.material = draft.material;
            variants.push(variant);
        }

        Product::builder(id, self.name)
            .description(self.description)
            .category(category)
            .cover_image(self.cover_image)
            .featured(self.featured)
            .variants(variants)
            .build()
    }
}

fn category_or_default(category: String) -> String {
    if category.trim().is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        category
    }
}

// Decoded shapes. Deserialization goes through these and the validating
// constructors.

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum DiscountRecord {
    Percentage { percent: u8 },
    Fixed { amount: Money },
}

impl TryFrom<DiscountRecord> for Discount {
    type Error = DomainError;

    fn try_from(record: DiscountRecord) -> DomainResult<Self> {
        match record {
            DiscountRecord::Percentage { percent } => Discount::percentage(percent),
            DiscountRecord::Fixed { amount } => Ok(Discount::fixed(amount)),
        }
    }
}

#[derive(Deserialize)]
struct DiscountWindowRecord {
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
}

impl TryFrom<DiscountWindowRecord> for DiscountWindow {
    type Error = DomainError;

    fn try_from(record: DiscountWindowRecord) -> DomainResult<Self> {
        DiscountWindow::new(record.starts_at, record.ends_at)
    }
}

#[derive(Deserialize)]
struct VariantRecord {
    sku: String,
    size: String,
    stock: u32,
    price: Money,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    material: Option<String>,
    #[serde(default)]
    discount: Option<Discount>,
    #[serde(default)]
    images: Vec<String>,
}

impl TryFrom<VariantRecord> for Variant {
    type Error = DomainError;

    fn try_from(record: VariantRecord) -> DomainResult<Self> {
        let mut variant = Variant::new(record.sku, record.size, record.stock, record.price)?;
        variant.color = record.color;
        variant.material = record.material;
        variant.discount = record.discount;
        variant.images = record.images;
        Ok(variant)
    }
}

#[derive(Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    cover_image: String,
    #[serde(default)]
    status: ProductStatus,
    #[serde(default)]
    variants: Vec<Variant>,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    discount: Option<Discount>,
    #[serde(default)]
    discount_window: Option<DiscountWindow>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> DomainResult<Self> {
        let mut product = Product::builder(record.id, record.name)
            .description(record.description)
            .category(record.category)
            .cover_image(record.cover_image)
            .status(record.status)
            .featured(record.featured)
            .variants(record.variants)
            .build()?;
        product.brand = record.brand;
        product.slug = record.slug;
        product.discount = record.discount;
        product.discount_window = record.discount_window;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pid(id: &str) -> ProductId {
        ProductId::new(id).unwrap()
    }

    fn tee() -> Product {
        Product::builder(pid("1"), "Classic Cotton T-Shirt")
            .category("tops")
            .variant(Variant::new("CT-S-WHT", "S", 50, Money::from_minor(1999)).unwrap())
            .variant(Variant::new("CT-M-BLK", "M", 75, Money::from_minor(2499)).unwrap())
            .build()
            .unwrap()
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn builder_rejects_empty_name() {
        let err = Product::builder(pid("1"), "  ").build().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn builder_rejects_duplicate_sku() {
        let err = Product::builder(pid("1"), "Tee")
            .variant(Variant::new("SKU-1", "S", 1, Money::ZERO).unwrap())
            .variant(Variant::new("SKU-1", "M", 1, Money::ZERO).unwrap())
            .build()
            .unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) => assert!(msg.contains("SKU-1")),
            _ => panic!("Expected InvariantViolation for duplicate SKU"),
        }
    }

    #[test]
    fn builder_defaults_missing_category() {
        let product = Product::builder(pid("1"), "Tee").build().unwrap();
        assert_eq!(product.category(), UNCATEGORIZED);
        assert!(product.is_active());
        assert!(!product.is_featured());
    }

    #[test]
    fn variant_requires_sku_and_size() {
        assert!(Variant::new("", "M", 1, Money::ZERO).is_err());
        assert!(Variant::new("SKU", " ", 1, Money::ZERO).is_err());
    }

    #[test]
    fn lowest_price_spans_variants() {
        assert_eq!(tee().lowest_price(), Some(Money::from_minor(1999)));
        let bare = Product::builder(pid("2"), "Bare").build().unwrap();
        assert_eq!(bare.lowest_price(), None);
    }

    #[test]
    fn percentage_discount_must_be_at_most_one_hundred() {
        assert!(Discount::percentage(100).is_ok());
        assert!(Discount::percentage(101).is_err());
    }

    #[test]
    fn fixed_discount_floors_at_zero() {
        let discount = Discount::fixed(Money::from_minor(5000));
        assert_eq!(discount.apply(Money::from_minor(1999)), Money::ZERO);
    }

    #[test]
    fn variant_discount_wins_over_product_discount() {
        let mut product = tee();
        product.set_discount(Some(Discount::percentage(50).unwrap()));
        product
            .variant_mut("CT-S-WHT")
            .unwrap()
            .set_discount(Some(Discount::fixed(Money::from_minor(499))));

        let small = product.variant("CT-S-WHT").unwrap().clone();
        let medium = product.variant("CT-M-BLK").unwrap().clone();
        assert_eq!(product.effective_price(&small, at(1)), Money::from_minor(1500));
        assert_eq!(product.effective_price(&medium, at(1)), Money::from_minor(1249));
    }

    #[test]
    fn discount_only_applies_inside_window() {
        let mut product = tee();
        product.set_discount(Some(Discount::percentage(10).unwrap()));
        product.set_discount_window(Some(DiscountWindow::new(Some(at(5)), Some(at(10))).unwrap()));

        let variant = product.variant("CT-S-WHT").unwrap().clone();
        assert_eq!(product.effective_price(&variant, at(1)), Money::from_minor(1999));
        assert_eq!(product.effective_price(&variant, at(7)), Money::from_minor(1799));
        assert_eq!(product.effective_price(&variant, at(11)), Money::from_minor(1999));
    }

    #[test]
    fn discount_window_rejects_inverted_bounds() {
        assert!(DiscountWindow::new(Some(at(10)), Some(at(5))).is_err());
        assert!(DiscountWindow::new(None, Some(at(5))).is_ok());
    }

    #[test]
    fn failed_update_leaves_product_untouched() {
        let mut product = tee();
        let before = product.clone();
        let update = ProductUpdate {
            name: Some("Renamed".to_string()),
            variants: Some(vec![
                Variant::new("DUP", "S", 1, Money::ZERO).unwrap(),
                Variant::new("DUP", "M", 1, Money::ZERO).unwrap(),
            ]),
            ..ProductUpdate::default()
        };
        assert!(product.apply_update(update).is_err());
        assert_eq!(product, before);
    }

    #[test]
    fn update_changes_only_given_fields() {
        let mut product = tee();
        product
            .apply_update(ProductUpdate {
                status: Some(ProductStatus::Inactive),
                ..ProductUpdate::default()
            })
            .unwrap();
        assert_eq!(product.status(), ProductStatus::Inactive);
        assert_eq!(product.name(), "Classic Cotton T-Shirt");
        assert_eq!(product.variants().len(), 2);
    }

    #[test]
    fn blank_category_update_falls_back_to_uncategorized() {
        let mut product = tee();
        product
            .apply_update(ProductUpdate {
                category: Some("  ".to_string()),
                ..ProductUpdate::default()
            })
            .unwrap();
        assert_eq!(product.category(), UNCATEGORIZED);
    }

    #[test]
    fn serialized_product_decodes_to_the_same_product() {
        let mut product = tee();
        product.set_discount(Some(Discount::percentage(20).unwrap()));
        product.set_discount_window(Some(DiscountWindow::new(Some(at(1)), None).unwrap()));
        let json = serde_json::to_string(&product).unwrap();
        let decoded: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, product);
    }

    #[test]
    fn decoding_enforces_constructor_rules() {
        let blank_name = r#"{"id":"1","name":"  "}"#;
        assert!(serde_json::from_str::<Product>(blank_name).is_err());

        let duplicate_skus = r#"{"id":"1","name":"Tee","variants":[
            {"sku":"A","size":"S","stock":1,"price":100},
            {"sku":"A","size":"M","stock":1,"price":100}]}"#;
        assert!(serde_json::from_str::<Product>(duplicate_skus).is_err());

        let empty_sku = r#"{"sku":"","size":"S","stock":1,"price":100}"#;
        assert!(serde_json::from_str::<Variant>(empty_sku).is_err());

        let oversized = r#"{"type":"percentage","percent":250}"#;
        assert!(serde_json::from_str::<Discount>(oversized).is_err());

        let inverted = r#"{"starts_at":"2024-06-10T00:00:00Z","ends_at":"2024-06-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<DiscountWindow>(inverted).is_err());
    }

    #[test]
    fn decoded_product_without_category_is_uncategorized() {
        let product: Product = serde_json::from_str(r#"{"id":"1","name":"Tee","category":""}"#).unwrap();
        assert_eq!(product.category(), UNCATEGORIZED);
    }

    #[test]
    fn draft_generates_distinct_skus_per_variant() {
        let draft = ProductDraft {
            name: "Linen Shirt".to_string(),
            category: "tops".to_string(),
            variants: vec![
                VariantDraft {
                    size: "s".to_string(),
                    stock: 3,
                    price: Money::from_minor(3999),
                    color: Some("White".to_string()),
                    material: Some("Linen".to_string()),
                },
                VariantDraft {
                    size: "S".to_string(),
                    stock: 0,
                    price: Money::from_minor(3999),
                    color: None,
                    material: None,
                },
            ],
            ..ProductDraft::default()
        };
        let product = draft.into_product(pid("42")).unwrap();
        let skus: Vec<&str> = product.variants().iter().map(Variant::sku).collect();
        assert!(skus.iter().all(|sku| sku.starts_with("TOP-LIN-S-")));
        assert_ne!(skus[0], skus[1]);
        assert_eq!(product.variants()[0].color(), Some("White"));
    }

    #[test]
    fn draft_without_category_or_size_is_handled() {
        let draft = ProductDraft {
            name: "Mystery Box".to_string(),
            variants: vec![VariantDraft {
                size: "OS".to_string(),
                stock: 1,
                price: Money::ZERO,
                color: None,
                material: None,
            }],
            ..ProductDraft::default()
        };
        let product = draft.into_product(pid("7")).unwrap();
        assert_eq!(product.category(), UNCATEGORIZED);
        assert!(product.variants()[0].sku().starts_with("UNC-MYS-OS-"));

        let sizeless = ProductDraft {
            name: "Tee".to_string(),
            variants: vec![VariantDraft {
                size: " ".to_string(),
                stock: 1,
                price: Money::ZERO,
                color: None,
                material: None,
            }],
            ..ProductDraft::default()
        };
        assert!(sizeless.into_product(pid("8")).is_err());
    }

    #[test]
    fn nonstandard_sizes_are_detected() {
        let shoe = Variant::new("RS-8", "8", 1, Money::ZERO).unwrap();
        let shirt = Variant::new("CT-XL", "XL", 1, Money::ZERO).unwrap();
        assert!(shoe.has_nonstandard_size());
        assert!(!shirt.has_nonstandard_size());
    }
}
