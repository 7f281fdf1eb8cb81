//! Catalog filter evaluation.
//!
//! Every dimension is independent: an empty selection lets everything
//! through, otherwise at least one variant has to satisfy it. A product
//! without variants therefore only matches when no variant-level dimension
//! (colour, size, material, price) is narrowed.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use storefront_core::Money;

use crate::product::{Product, Variant};

/// Size selection that stands for every size outside `STANDARD_SIZES`.
pub const OTHER_SIZE: &str = "Other";

/// Inclusive price bounds; a missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<Money>,
    pub max: Option<Money>,
}

impl PriceRange {
    pub fn new(min: Option<Money>, max: Option<Money>) -> Self {
        Self { min, max }
    }

    /// Build a range from raw form input. Blank or non-numeric text means "no bound".
    pub fn parse(min: &str, max: &str) -> Self {
        Self {
            min: Money::parse_lenient(min),
            max: Money::parse_lenient(max),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// `min > max` with both bounds present.
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    /// Each bound is checked against the variants on its own: some variant
    /// reaches `min` and some variant stays under `max`. An inverted range
    /// never matches.
    pub fn matches(&self, variants: &[Variant]) -> bool {
        if self.is_inverted() {
            return false;
        }
        let min_ok = self
            .min
            .is_none_or(|min| variants.iter().any(|v| v.price() >= min));
        let max_ok = self
            .max
            .is_none_or(|max| variants.iter().any(|v| v.price() <= max));
        min_ok && max_ok
    }
}

/// Per-dimension selections narrowing the visible catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    pub categories: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub materials: BTreeSet<String>,
    pub price_range: PriceRange,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn with_colors<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn with_sizes<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn with_materials<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.materials.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = price_range;
        self
    }

    pub fn toggle_category(&mut self, value: &str) {
        toggle(&mut self.categories, value);
    }

    pub fn toggle_color(&mut self, value: &str) {
        toggle(&mut self.colors, value);
    }

    pub fn toggle_size(&mut self, value: &str) {
        toggle(&mut self.sizes, value);
    }

    pub fn toggle_material(&mut self, value: &str) {
        toggle(&mut self.materials, value);
    }

    /// Whether any dimension narrows the catalog.
    pub fn is_active(&self) -> bool {
        !self.categories.is_empty()
            || !self.colors.is_empty()
            || !self.sizes.is_empty()
            || !self.materials.is_empty()
            || !self.price_range.is_unbounded()
    }

    /// Evaluate `product` against the filters and a free-text search term.
    pub fn matches(&self, product: &Product, search_term: &str) -> bool {
        matches_search(product, &search_term.to_lowercase()) && self.matches_filters(product)
    }

    fn matches_filters(&self, product: &Product) -> bool {
        let variants = product.variants();

        let category_ok =
            self.categories.is_empty() || self.categories.contains(product.category());

        let color_ok = self.colors.is_empty()
            || variants
                .iter()
                .any(|v| v.color().is_some_and(|c| self.colors.contains(c)));

        let size_ok = self.sizes.is_empty() || variants.iter().any(|v| self.size_selected(v));

        let material_ok = self.materials.is_empty()
            || variants
                .iter()
                .any(|v| v.material().is_some_and(|m| self.materials.contains(m)));

        category_ok && color_ok && size_ok && material_ok && self.price_range.matches(variants)
    }

    fn size_selected(&self, variant: &Variant) -> bool {
        self.sizes.contains(variant.size())
            || (self.sizes.contains(OTHER_SIZE) && variant.has_nonstandard_size())
    }
}

/// Products matching `filters` and `search_term`, in input order.
pub fn filter_products<'a>(
    products: &'a [Product],
    filters: &FilterSet,
    search_term: &str,
) -> Vec<&'a Product> {
    let needle = search_term.to_lowercase();
    products
        .iter()
        .filter(|p| matches_search(p, &needle) && filters.matches_filters(p))
        .collect()
}

/// Case-insensitive substring match on name or description; `needle` is already lowercase.
fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name().to_lowercase().contains(needle)
        || product.description().to_lowercase().contains(needle)
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    fn variant(sku: &str, size: &str, price: u64) -> Variant {
        Variant::new(sku, size, 10, Money::from_minor(price)).unwrap()
    }

    fn tops() -> Product {
        Product::builder(ProductId::new("1").unwrap(), "Basic Tee")
            .description("Soft everyday cotton")
            .category("tops")
            .variant(variant("T-M", "M", 2000).with_color("White").with_material("Cotton"))
            .variant(variant("T-L", "L", 2500).with_color("Black"))
            .build()
            .unwrap()
    }

    fn no_variants() -> Product {
        Product::builder(ProductId::new("2").unwrap(), "Gift Card")
            .category("accessories")
            .build()
            .unwrap()
    }

    fn dollars(amount: u64) -> Option<Money> {
        Some(Money::from_minor(amount * 100))
    }

    #[test]
    fn size_filter_with_open_price_range_matches() {
        let filters = FilterSet::new().with_sizes(["L"]);
        assert!(filters.matches(&tops(), ""));
    }

    #[test]
    fn price_floor_above_every_variant_rejects() {
        let filters = FilterSet::new()
            .with_sizes(["L"])
            .with_price_range(PriceRange::new(dollars(30), None));
        assert!(!filters.matches(&tops(), ""));
    }

    #[test]
    fn price_bounds_are_checked_independently() {
        // Both bounds are individually satisfiable here, but the range is inverted.
        let inverted = PriceRange::new(dollars(22), dollars(21));
        assert!(!inverted.matches(tops().variants()));

        // No variant lies inside [21, 24]; 25 reaches the floor and 20 stays under the cap.
        let straddling = PriceRange::new(dollars(21), dollars(24));
        assert!(straddling.matches(tops().variants()));
    }

    #[test]
    fn search_is_case_insensitive_on_name_and_description() {
        let filters = FilterSet::new();
        assert!(filters.matches(&tops(), "BASIC"));
        assert!(filters.matches(&tops(), "cotton"));
        assert!(!filters.matches(&tops(), "denim"));
    }

    #[test]
    fn missing_color_or_material_never_matches_a_selection() {
        let by_material = FilterSet::new().with_materials(["Cotton"]);
        assert!(by_material.matches(&tops(), ""));

        let p = Product::builder(ProductId::new("3").unwrap(), "Plain")
            .variant(variant("P-S", "S", 100))
            .build()
            .unwrap();
        assert!(!by_material.matches(&p, ""));
        assert!(!FilterSet::new().with_colors(["White"]).matches(&p, ""));
    }

    #[test]
    fn other_size_matches_nonstandard_sizes_only() {
        let other = FilterSet::new().with_sizes([OTHER_SIZE]);
        assert!(!other.matches(&tops(), ""));

        let shoes = Product::builder(ProductId::new("5").unwrap(), "Running Shoes")
            .variant(variant("RS-8", "8", 8999))
            .build()
            .unwrap();
        assert!(other.matches(&shoes, ""));

        let scarf = Product::builder(ProductId::new("9").unwrap(), "Silk Scarf")
            .variant(variant("SS-OS", "One Size", 2999))
            .build()
            .unwrap();
        assert!(other.matches(&scarf, ""));
    }

    #[test]
    fn category_filter_uses_product_category() {
        let filters = FilterSet::new().with_categories(["bottoms", "tops"]);
        assert!(filters.matches(&tops(), ""));
        assert!(!filters.matches(&no_variants(), ""));
    }

    #[test]
    fn product_without_variants_fails_variant_dimensions_only() {
        let p = no_variants();
        assert!(FilterSet::new().matches(&p, ""));
        assert!(FilterSet::new().with_categories(["accessories"]).matches(&p, ""));
        assert!(!FilterSet::new().with_sizes(["M"]).matches(&p, ""));
        assert!(
            !FilterSet::new()
                .with_price_range(PriceRange::new(None, dollars(100)))
                .matches(&p, "")
        );
    }

    #[test]
    fn malformed_price_input_is_no_bound() {
        let range = PriceRange::parse("abc", "");
        assert!(range.is_unbounded());

        let range = PriceRange::parse("10", "oops");
        assert_eq!(range.min, dollars(10));
        assert_eq!(range.max, None);
    }

    #[test]
    fn toggling_adds_then_removes() {
        let mut filters = FilterSet::new();
        filters.toggle_color("Red");
        assert!(filters.is_active());
        filters.toggle_color("Red");
        assert!(!filters.is_active());
    }

    #[test]
    fn filter_products_preserves_order() {
        let products = vec![tops(), no_variants()];
        let all = filter_products(&products, &FilterSet::new(), "");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id().as_str(), "1");
        assert_eq!(all[1].id().as_str(), "2");

        let gifts = filter_products(&products, &FilterSet::new(), "gift");
        assert_eq!(gifts.len(), 1);
        assert_eq!(gifts[0].id().as_str(), "2");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const SIZES: [&str; 8] = ["XS", "S", "M", "L", "XL", "XXL", "8", "One Size"];
        const COLORS: [&str; 4] = ["Red", "Black", "White", "Blue"];

        fn arb_variant() -> impl Strategy<Value = (usize, Option<usize>, u64)> {
            (0..SIZES.len(), proptest::option::of(0..COLORS.len()), 0u64..50_000)
        }

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                "[a-z]{1,10}",
                proptest::collection::vec(arb_variant(), 0..5),
            )
                .prop_map(|(name, specs)| {
                    let variants = specs.into_iter().enumerate().map(|(i, (size, color, price))| {
                        let v = Variant::new(format!("SKU-{i}"), SIZES[size], 1, Money::from_minor(price))
                            .unwrap();
                        match color {
                            Some(c) => v.with_color(COLORS[c]),
                            None => v,
                        }
                    });
                    Product::builder(ProductId::new("p").unwrap(), name)
                        .category("tops")
                        .variants(variants)
                        .build()
                        .unwrap()
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the empty filter set with no search term matches everything.
            #[test]
            fn identity_filter_matches_every_product(product in arb_product()) {
                prop_assert!(FilterSet::new().matches(&product, ""));
            }

            /// Property: an inverted price range matches nothing.
            #[test]
            fn inverted_price_range_matches_nothing(
                product in arb_product(),
                low in 0u64..50_000,
                gap in 1u64..10_000
            ) {
                let range = PriceRange::new(
                    Some(Money::from_minor(low + gap)),
                    Some(Money::from_minor(low)),
                );
                let filters = FilterSet::new().with_price_range(range);
                prop_assert!(!filters.matches(&product, ""));
            }

            /// Property: narrowing a filter never admits more products.
            #[test]
            fn adding_a_selection_never_widens_results(
                products in proptest::collection::vec(arb_product(), 0..20),
                color in 0..COLORS.len(),
                size in 0..SIZES.len()
            ) {
                let base = FilterSet::new().with_colors([COLORS[color]]);
                let narrowed = base.clone().with_sizes([SIZES[size]]);
                let wide = filter_products(&products, &base, "").len();
                let narrow = filter_products(&products, &narrowed, "").len();
                prop_assert!(narrow <= wide);
            }
        }
    }
}
