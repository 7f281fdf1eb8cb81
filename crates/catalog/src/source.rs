//! Product sources: where the catalog is loaded from.
//!
//! The store only sees a flat `Vec<Product>`; transports (HTTP, files, seed
//! data) live behind [`ProductSource`].

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use storefront_core::{DomainError, Money, ProductId};

use crate::product::{Product, ProductStatus, Variant};
use crate::sku::build_sku;

/// Size used for CMS variants that do not declare one.
const DEFAULT_SIZE: &str = "One Size";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read catalog from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode catalog payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid product record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },
}

impl SourceError {
    fn invalid(id: impl Into<String>, err: DomainError) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            reason: err.to_string(),
        }
    }
}

/// Fetch collaborator for the product store.
pub trait ProductSource {
    fn fetch_products(&self) -> Result<Vec<Product>, SourceError>;
}

impl<S> ProductSource for &S
where
    S: ProductSource + ?Sized,
{
    fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        (**self).fetch_products()
    }
}

/// Serves a fixed product list (seed data, tests).
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductSource {
    products: Vec<Product>,
}

impl InMemoryProductSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl ProductSource for InMemoryProductSource {
    fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        Ok(self.products.clone())
    }
}

#[derive(Debug, Clone)]
enum Payload {
    Inline(String),
    File(PathBuf),
}

/// Decodes the headless-CMS product listing (`GET /api/products?populate=*`).
#[derive(Debug, Clone)]
pub struct CmsProductSource {
    payload: Payload,
    asset_base_url: String,
}

impl CmsProductSource {
    /// Decode a response body held in memory.
    pub fn from_json(body: impl Into<String>, asset_base_url: impl Into<String>) -> Self {
        Self {
            payload: Payload::Inline(body.into()),
            asset_base_url: asset_base_url.into(),
        }
    }

    /// Decode a response body saved to disk; the file is read on every fetch.
    pub fn from_path(path: impl Into<PathBuf>, asset_base_url: impl Into<String>) -> Self {
        Self {
            payload: Payload::File(path.into()),
            asset_base_url: asset_base_url.into(),
        }
    }

    pub fn decode(&self, body: &str) -> Result<Vec<Product>, SourceError> {
        let envelope: CmsEnvelope = serde_json::from_str(body)?;
        let products = envelope
            .data
            .into_iter()
            .map(|record| record.into_product(&self.asset_base_url))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = products.len(), "decoded CMS product listing");
        Ok(products)
    }
}

impl ProductSource for CmsProductSource {
    fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        match &self.payload {
            Payload::Inline(body) => self.decode(body),
            Payload::File(path) => {
                let body = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source,
                })?;
                self.decode(&body)
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CMS wire format
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CmsEnvelope {
    #[serde(default)]
    data: Vec<CmsProduct>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CmsId {
    Number(u64),
    Text(String),
}

impl CmsId {
    fn into_string(self) -> String {
        match self {
            CmsId::Number(n) => n.to_string(),
            CmsId::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CmsProduct {
    id: CmsId,
    name: Option<String>,
    #[serde(default)]
    description: Vec<CmsBlock>,
    #[serde(default)]
    image: Vec<CmsMedia>,
    category: Option<String>,
    status: Option<String>,
    price: Option<f64>,
    #[serde(default)]
    featured: bool,
    brand: Option<String>,
    slug: Option<String>,
    variants: Option<CmsRelation<CmsVariant>>,
}

#[derive(Debug, Deserialize)]
struct CmsBlock {
    #[serde(default)]
    children: Vec<CmsText>,
}

#[derive(Debug, Deserialize)]
struct CmsText {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CmsMedia {
    url: String,
}

#[derive(Debug, Deserialize)]
struct CmsRelation<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct CmsVariant {
    id: CmsId,
    sku: Option<String>,
    size: Option<String>,
    color: Option<String>,
    material: Option<String>,
    price: Option<f64>,
    quantity: Option<i64>,
    #[serde(default)]
    images: Vec<CmsMedia>,
}

impl CmsProduct {
    fn into_product(self, asset_base_url: &str) -> Result<Product, SourceError> {
        let id = self.id.into_string();
        let product_id = ProductId::new(id.clone()).map_err(|e| SourceError::invalid(&id, e))?;
        let name = self.name.unwrap_or_default();
        let category = self.category.unwrap_or_default();

        let description = self
            .description
            .into_iter()
            .next()
            .and_then(|block| block.children.into_iter().next())
            .and_then(|child| child.text)
            .unwrap_or_default();

        let cover_image = self
            .image
            .first()
            .map(|media| join_url(asset_base_url, &media.url))
            .unwrap_or_default();

        let status = match self.status.as_deref() {
            Some("inactive") => ProductStatus::Inactive,
            _ => ProductStatus::Active,
        };

        let fallback_price = self.price;
        let variants = self
            .variants
            .map(|rel| rel.data)
            .unwrap_or_default()
            .into_iter()
            .map(|v| v.into_variant(&category, &name, fallback_price, asset_base_url))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SourceError::invalid(&id, e))?;

        let mut builder = Product::builder(product_id, name)
            .description(description)
            .category(category)
            .cover_image(cover_image)
            .status(status)
            .featured(self.featured)
            .variants(variants);
        if let Some(brand) = self.brand {
            builder = builder.brand(brand);
        }
        if let Some(slug) = self.slug {
            builder = builder.slug(slug);
        }
        builder.build().map_err(|e| SourceError::invalid(&id, e))
    }
}

impl CmsVariant {
    fn into_variant(
        self,
        category: &str,
        product_name: &str,
        fallback_price: Option<f64>,
        asset_base_url: &str,
    ) -> Result<Variant, DomainError> {
        let size = self
            .size
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SIZE.to_string());
        let sku = match self.sku.filter(|s| !s.trim().is_empty()) {
            Some(sku) => sku,
            None => build_sku(category, product_name, &size, &self.id.into_string()),
        };
        let price = Money::from_major(self.price.or(fallback_price).unwrap_or(0.0))?;
        let stock = u32::try_from(self.quantity.unwrap_or(0).max(0)).unwrap_or(u32::MAX);
        let images = self
            .images
            .iter()
            .map(|media| join_url(asset_base_url, &media.url))
            .collect();

        let mut variant = Variant::new(sku, size, stock, price)?.with_images(images);
        if let Some(color) = self.color {
            variant = variant.with_color(color);
        }
        if let Some(material) = self.material {
            variant = variant.with_material(material);
        }
        Ok(variant)
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
