//! Catalog store
//!
//! Owns the canonical product collection. Each mutating operation reads the
//! full persisted collection, applies the change, and writes the full
//! collection back; there is no partial or delta persistence. Validation
//! and lookup failures never touch persisted state, and a failed write
//! leaves the caller's prior view intact.

use crate::catalog::backend::CatalogBackend;
use crate::catalog::validation::validate_draft;
use parking_lot::Mutex;
use shared::{AppError, AppResult, Product, ProductDraft};
use std::sync::Arc;

// =============================================================================
// Tabs
// =============================================================================

/// Client-side filter predicate, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    All,
    Published,
    Unpublished,
}

/// Pure projection of a collection by publish status
///
/// `All` is the identity; the other tabs keep the original relative order.
pub fn filter(products: &[Product], tab: Tab) -> Vec<Product> {
    match tab {
        Tab::All => products.to_vec(),
        Tab::Published => products.iter().filter(|p| p.published).cloned().collect(),
        Tab::Unpublished => products.iter().filter(|p| !p.published).cloned().collect(),
    }
}

// =============================================================================
// CatalogStore
// =============================================================================

/// Sole mediator between mutation intents and the persisted collection
pub struct CatalogStore {
    backend: Arc<dyn CatalogBackend>,
    /// Highest id issued by this store instance, for monotonic assignment
    last_id: Mutex<i64>,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("last_id", &*self.last_id.lock())
            .finish()
    }
}

impl CatalogStore {
    pub fn new(backend: Arc<dyn CatalogBackend>) -> Self {
        Self {
            backend,
            last_id: Mutex::new(0),
        }
    }

    // =========================================================================
    // Read path
    // =========================================================================

    /// Load the persisted collection
    ///
    /// Nothing persisted yet means an empty collection. A malformed
    /// snapshot also degrades to empty rather than failing startup; a
    /// backend read failure is a storage error.
    pub fn load(&self) -> AppResult<Vec<Product>> {
        let Some(snapshot) = self.backend.load()? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&snapshot) {
            Ok(products) => Ok(products),
            Err(e) => {
                tracing::warn!(error = %e, "Malformed catalog snapshot, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validate a draft and append it as a new unpublished record
    pub fn create(&self, draft: ProductDraft) -> AppResult<Product> {
        validate_draft(&draft)?;

        let mut products = self.load()?;
        let id = self.next_id(&products);
        let product = materialize(draft, id, false)?;

        products.push(product.clone());
        self.persist(&products)?;

        tracing::info!(id, name = %product.product_name, "Product created");
        Ok(product)
    }

    /// Replace every field except `id` and `published` on an existing record
    pub fn update(&self, id: i64, draft: ProductDraft) -> AppResult<Product> {
        validate_draft(&draft)?;

        let mut products = self.load()?;
        let Some(index) = products.iter().position(|p| p.id == id) else {
            return Err(AppError::product_not_found(id));
        };

        let product = materialize(draft, id, products[index].published)?;
        products[index] = product.clone();
        self.persist(&products)?;

        tracing::info!(id, name = %product.product_name, "Product updated");
        Ok(product)
    }

    /// Flip the publish flag of an existing record, touching nothing else
    pub fn toggle_publish(&self, id: i64) -> AppResult<Product> {
        let mut products = self.load()?;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Err(AppError::product_not_found(id));
        };

        product.published = !product.published;
        let updated = product.clone();
        self.persist(&products)?;

        tracing::info!(id, published = updated.published, "Publish state toggled");
        Ok(updated)
    }

    /// Remove the record with the given id; absent ids are not an error
    pub fn delete(&self, id: i64) -> AppResult<()> {
        let mut products = self.load()?;
        let before = products.len();
        products.retain(|p| p.id != id);

        self.persist(&products)?;

        if products.len() < before {
            tracing::info!(id, "Product deleted");
        }
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn persist(&self, products: &[Product]) -> AppResult<()> {
        let snapshot = serde_json::to_string_pretty(products)
            .map_err(|e| AppError::internal(format!("failed to serialize catalog: {e}")))?;
        self.backend.save(&snapshot)
    }

    /// Issue a creation-timestamp id guaranteed distinct from every id this
    /// store has issued and every id already persisted, even under rapid
    /// successive creates within one millisecond.
    fn next_id(&self, products: &[Product]) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let max_existing = products.iter().map(|p| p.id).max().unwrap_or(0);

        let mut last = self.last_id.lock();
        let id = now.max(*last + 1).max(max_existing + 1);
        *last = id;
        id
    }
}

/// Turn a validated draft into a record
///
/// Callers must have run `validate_draft` first; a still-missing field here
/// is an internal error, not a user-facing validation failure.
fn materialize(draft: ProductDraft, id: i64, published: bool) -> AppResult<Product> {
    let (Some(product_type), Some(quantity_stock), Some(mrp), Some(selling_price)) = (
        draft.product_type,
        draft.quantity_stock,
        draft.mrp,
        draft.selling_price,
    ) else {
        return Err(AppError::internal("draft passed validation with missing fields"));
    };

    Ok(Product {
        id,
        product_name: draft.product_name,
        product_type,
        quantity_stock,
        mrp,
        selling_price,
        brand_name: draft.brand_name,
        product_image: draft.product_image,
        image_count: draft.image_count,
        exchange_eligibility: draft.exchange_eligibility,
        published,
    })
}
