//! Demo catalog used when no CMS dump is configured.

use storefront_core::{DomainResult, Money, ProductId};

use crate::product::{Product, ProductStatus, Variant};

const IMAGE_HOST: &str = "https://images.unsplash.com";

fn image(photo: &str) -> String {
    format!("{IMAGE_HOST}/{photo}?auto=format&fit=crop&w=500&h=500&q=80")
}

struct Spec {
    sku: &'static str,
    size: &'static str,
    stock: u32,
    cents: u64,
    color: &'static str,
    material: &'static str,
    photos: &'static [&'static str],
}

fn variant(spec: &Spec) -> DomainResult<Variant> {
    Ok(
        Variant::new(spec.sku, spec.size, spec.stock, Money::from_minor(spec.cents))?
            .with_color(spec.color)
            .with_material(spec.material)
            .with_images(spec.photos.iter().map(|p| image(p)).collect()),
    )
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    cover: &str,
    status: ProductStatus,
    featured: bool,
    specs: &[Spec],
) -> DomainResult<Product> {
    let variants = specs.iter().map(variant).collect::<DomainResult<Vec<_>>>()?;
    Product::builder(ProductId::new(id)?, name)
        .description(description)
        .category(category)
        .cover_image(image(cover))
        .status(status)
        .featured(featured)
        .variants(variants)
        .build()
}

/// Eleven apparel products covering in-stock, out-of-stock and inactive cases.
pub fn demo_catalog() -> DomainResult<Vec<Product>> {
    use ProductStatus::{Active, Inactive};

    Ok(vec![
        product(
            "1",
            "Classic Cotton T-Shirt",
            "A comfortable and versatile t-shirt for everyday wear.",
            "tops",
            "photo-1521572163474-6864f9cf17ab",
            Active,
            true,
            &[
                Spec { sku: "CT-S-WHT", size: "S", stock: 50, cents: 1999, color: "White", material: "Cotton", photos: &["photo-1581655353564-df123a1eb820", "photo-1583743814966-8936f5b7be1a"] },
                Spec { sku: "CT-M-BLK", size: "M", stock: 75, cents: 1999, color: "Black", material: "Cotton", photos: &["photo-1583743814966-8936f5b7be1a"] },
            ],
        )?,
        product(
            "2",
            "Slim Fit Jeans",
            "Modern slim fit jeans with a comfortable stretch.",
            "bottoms",
            "photo-1541099649105-f69ad21f3246",
            Active,
            true,
            &[
                Spec { sku: "SFJ-30-BLU", size: "30", stock: 40, cents: 4999, color: "Blue", material: "Denim", photos: &["photo-1582552938357-32b906df40cb"] },
                Spec { sku: "SFJ-32-BLK", size: "32", stock: 55, cents: 4999, color: "Black", material: "Denim", photos: &["photo-1576995853123-5a10305d93c0"] },
            ],
        )?,
        product(
            "3",
            "Floral Summer Dress",
            "A light and breezy floral dress perfect for summer days.",
            "dresses",
            "photo-1572804013309-59a88b7e92f1",
            Active,
            true,
            &[
                Spec { sku: "FSD-S-FLR", size: "S", stock: 30, cents: 3999, color: "Floral", material: "Chiffon", photos: &["photo-1595777457583-95e059d581b8"] },
                Spec { sku: "FSD-M-FLR", size: "M", stock: 45, cents: 3999, color: "Floral", material: "Chiffon", photos: &["photo-1583496661160-fb5886a0aaaa"] },
            ],
        )?,
        product(
            "4",
            "Leather Jacket",
            "A classic leather jacket for a timeless look.",
            "outerwear",
            "photo-1551028719-00167b16eac5",
            Active,
            true,
            &[
                Spec { sku: "LJ-S-BLK", size: "S", stock: 20, cents: 19999, color: "Black", material: "Leather", photos: &["photo-1521223890158-f9f7c3d5d504"] },
                Spec { sku: "LJ-M-BRN", size: "M", stock: 30, cents: 19999, color: "Brown", material: "Leather", photos: &["photo-1559551409-dadc959f76b8"] },
            ],
        )?,
        product(
            "5",
            "Running Shoes",
            "Lightweight and comfortable shoes for your daily run.",
            "footwear",
            "photo-1542291026-7eec264c27ff",
            Active,
            false,
            &[
                Spec { sku: "RS-8-GRY", size: "8", stock: 40, cents: 8999, color: "Gray", material: "Synthetic", photos: &["photo-1606107557195-0e29a4b5b4aa"] },
                Spec { sku: "RS-9-BLK", size: "9", stock: 50, cents: 8999, color: "Black", material: "Synthetic", photos: &["photo-1608231387042-66d1773070a5"] },
            ],
        )?,
        product(
            "6",
            "Polo Shirt",
            "Classic polo shirt for a smart casual look.",
            "tops",
            "photo-1581655353564-df123a1eb820",
            Active,
            false,
            &[Spec { sku: "PS-M-NVY", size: "M", stock: 60, cents: 2999, color: "Navy", material: "Cotton", photos: &["photo-1581655353564-df123a1eb820"] }],
        )?,
        product(
            "7",
            "Cargo Pants",
            "Durable cargo pants with multiple pockets.",
            "bottoms",
            "photo-1517445312882-bc9910d016b7",
            Active,
            false,
            &[Spec { sku: "CP-32-KHK", size: "32", stock: 45, cents: 5999, color: "Khaki", material: "Cotton", photos: &["photo-1517445312882-bc9910d016b7"] }],
        )?,
        product(
            "8",
            "Wool Sweater",
            "Warm and cozy wool sweater for cold days.",
            "tops",
            "photo-1576871337632-b9aef4c17ab9",
            Active,
            false,
            &[Spec { sku: "WS-L-GRY", size: "L", stock: 30, cents: 7999, color: "Gray", material: "Wool", photos: &["photo-1576871337632-b9aef4c17ab9"] }],
        )?,
        product(
            "9",
            "Silk Scarf",
            "Elegant silk scarf to complement any outfit.",
            "accessories",
            "photo-1606760227091-3dd870d97f1d",
            Active,
            false,
            &[Spec { sku: "SS-OS-RED", size: "One Size", stock: 50, cents: 2999, color: "Red", material: "Silk", photos: &["photo-1606760227091-3dd870d97f1d"] }],
        )?,
        product(
            "10",
            "Denim Jacket",
            "Classic denim jacket for a casual look.",
            "outerwear",
            "photo-1544642899-f0d6e5f6ed6f",
            Active,
            false,
            // Out of stock.
            &[Spec { sku: "DJ-M-BLU", size: "M", stock: 0, cents: 6999, color: "Blue", material: "Denim", photos: &["photo-1544642899-f0d6e5f6ed6f"] }],
        )?,
        product(
            "11",
            "Summer Hat",
            "Stylish summer hat for sun protection.",
            "accessories",
            "photo-1582791694770-cbdc9dda338f",
            Inactive,
            false,
            &[Spec { sku: "SH-OS-BEG", size: "One Size", stock: 100, cents: 2499, color: "Beige", material: "Straw", photos: &["photo-1582791694770-cbdc9dda338f"] }],
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_builds() {
        let products = demo_catalog().unwrap();
        assert_eq!(products.len(), 11);
        assert_eq!(products.iter().filter(|p| p.is_featured()).count(), 4);
        assert_eq!(products.iter().filter(|p| !p.is_active()).count(), 1);
        assert_eq!(products[9].total_stock(), 0);
    }
}
