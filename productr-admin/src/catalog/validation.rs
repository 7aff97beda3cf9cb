//! Draft validation
//!
//! A draft must carry all six required fields before it becomes (or
//! replaces) a persisted record. Every missing field is reported, not just
//! the first.

use shared::{AppError, AppResult, ProductDraft};

/// Validate the required fields of a draft, naming each missing one
pub fn validate_draft(draft: &ProductDraft) -> AppResult<()> {
    let mut missing: Vec<&str> = Vec::new();

    if draft.product_name.trim().is_empty() {
        missing.push("productName");
    }
    if draft.product_type.is_none() {
        missing.push("productType");
    }
    if draft.quantity_stock.is_none() {
        missing.push("quantityStock");
    }
    if draft.mrp.is_none() {
        missing.push("mrp");
    }
    if draft.selling_price.is_none() {
        missing.push("sellingPrice");
    }
    if draft.brand_name.trim().is_empty() {
        missing.push("brandName");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::missing_fields(&missing))
    }
}
