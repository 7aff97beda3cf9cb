//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    Food,
    Electronics,
    Clothing,
    Books,
    Other,
}

/// Exchange or return eligibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExchangeEligibility {
    Yes,
    No,
}

impl Default for ExchangeEligibility {
    fn default() -> Self {
        Self::Yes
    }
}

fn default_image_count() -> u32 {
    1
}

/// Product entity
///
/// Serialized in camelCase so persisted snapshots stay compatible with the
/// storefront frontend's field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Creation-timestamp id (milliseconds), unique and immutable
    pub id: i64,
    pub product_name: String,
    pub product_type: ProductType,
    pub quantity_stock: i64,
    pub mrp: Decimal,
    pub selling_price: Decimal,
    pub brand_name: String,
    /// Self-contained data URL of the uploaded image, if any
    #[serde(default)]
    pub product_image: Option<String>,
    /// Cosmetic indicator only, not validated against attached images
    #[serde(default = "default_image_count")]
    pub image_count: u32,
    #[serde(default)]
    pub exchange_eligibility: ExchangeEligibility,
    #[serde(default)]
    pub published: bool,
}

/// Unsaved product form payload
///
/// Required fields are optional here so validation can name each missing
/// field instead of failing at deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_type: Option<ProductType>,
    #[serde(default)]
    pub quantity_stock: Option<i64>,
    #[serde(default)]
    pub mrp: Option<Decimal>,
    #[serde(default)]
    pub selling_price: Option<Decimal>,
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub product_image: Option<String>,
    #[serde(default = "default_image_count")]
    pub image_count: u32,
    #[serde(default)]
    pub exchange_eligibility: ExchangeEligibility,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            product_type: None,
            quantity_stock: None,
            mrp: None,
            selling_price: None,
            brand_name: String::new(),
            product_image: None,
            image_count: default_image_count(),
            exchange_eligibility: ExchangeEligibility::default(),
        }
    }
}

impl From<&Product> for ProductDraft {
    /// Pre-fill an edit form from an existing record
    fn from(product: &Product) -> Self {
        Self {
            product_name: product.product_name.clone(),
            product_type: Some(product.product_type),
            quantity_stock: Some(product.quantity_stock),
            mrp: Some(product.mrp),
            selling_price: Some(product.selling_price),
            brand_name: product.brand_name.clone(),
            product_image: product.product_image.clone(),
            image_count: product.image_count,
            exchange_eligibility: product.exchange_eligibility,
        }
    }
}
