use indexmap::IndexMap;

use crate::error::{AppError, AppResult};
use crate::models::{Product, ProductPayload};

/// Data-access seam the HTTP handlers talk to.
///
/// Implementations own id assignment: callers never choose the id of a new
/// product. Unknown ids surface as [`AppError::NotFound`] and must leave the
/// stored records untouched.
pub trait ProductRepository: Send + Sync {
    /// All products in storage order.
    fn list(&self) -> Vec<Product>;

    fn get(&self, id: i64) -> AppResult<Product>;

    /// Store a new product under `max(existing ids) + 1` (or `1` when empty).
    fn create(&mut self, payload: ProductPayload) -> Product;

    /// Overwrite every field but `id` of an existing product.
    fn update(&mut self, id: i64, payload: ProductPayload) -> AppResult<()>;

    fn delete(&mut self, id: i64) -> AppResult<()>;
}

// ── In-memory store ───────────────────────────────────────────────────────────

/// Process-lifetime product store.
///
/// `IndexMap` keyed by id gives unique ids, O(1) lookup and insertion-ordered
/// iteration. Deletes use `shift_remove` so the surviving order is unchanged.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: IndexMap<i64, Product>,
}

impl InMemoryProductStore {
    /// Build a store pre-populated with `products`. A later duplicate id
    /// replaces the earlier record in place.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    fn next_id(&self) -> i64 {
        self.products.keys().max().map_or(1, |max| max + 1)
    }
}

impl ProductRepository for InMemoryProductStore {
    fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    fn get(&self, id: i64) -> AppResult<Product> {
        self.products
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound(id))
    }

    fn create(&mut self, payload: ProductPayload) -> Product {
        let id = self.next_id();
        let product = Product::from_payload(id, payload);
        self.products.insert(id, product.clone());
        product
    }

    fn update(&mut self, id: i64, payload: ProductPayload) -> AppResult<()> {
        let existing = self.products.get_mut(&id).ok_or(AppError::NotFound(id))?;
        existing.apply(payload);
        Ok(())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        self.products
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound(id))
    }
}
