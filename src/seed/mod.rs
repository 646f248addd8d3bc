use rust_decimal::Decimal;
use tracing::info;

use crate::models::Product;

/// (name, price in cents, category, in stock)
static SEED_ROWS: &[(&str, i64, &str, bool)] = &[
    ("Laptop", 999_99, "Electronics", true),
    ("Mouse", 29_99, "Electronics", true),
    ("Keyboard", 79_99, "Electronics", false),
];

/// The fixed rows every fresh store starts with, ids 1..=3.
pub fn seed_products() -> Vec<Product> {
    let products: Vec<Product> = SEED_ROWS
        .iter()
        .zip(1_i64..)
        .map(|(&(name, cents, category, in_stock), id)| Product {
            id,
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            category: category.to_string(),
            in_stock,
        })
        .collect();

    info!(count = products.len(), "Seeded product store");
    products
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_three_rows_with_sequential_ids() {
        let products = seed_products();
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn keyboard_is_out_of_stock() {
        let products = seed_products();
        let keyboard = &products[2];
        assert_eq!(keyboard.name, "Keyboard");
        assert_eq!(keyboard.price, Decimal::new(7999, 2));
        assert!(!keyboard.in_stock);
        assert!(products[..2].iter().all(|p| p.in_stock));
    }
}
