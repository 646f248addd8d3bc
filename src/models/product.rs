use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Core product entity. `id` is always assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// Build a stored record from a request payload under the given id.
    pub fn from_payload(id: i64, payload: ProductPayload) -> Self {
        Self {
            id,
            name: payload.name,
            price: payload.price,
            category: payload.category,
            in_stock: payload.in_stock,
        }
    }

    /// Overwrite every field except `id`.
    pub fn apply(&mut self, payload: ProductPayload) {
        self.name = payload.name;
        self.price = payload.price;
        self.category = payload.category;
        self.in_stock = payload.in_stock;
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of create and update requests. Nothing is validated; missing fields
/// fall back to their defaults. Unknown keys, including a client-sent `id`,
/// are skipped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPayload {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub in_stock: bool,
}
