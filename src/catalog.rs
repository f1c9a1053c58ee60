//! Product Catalog
//!
//! The fixed set of products offered by the cart demo.

use crate::models::CatalogItem;

/// Built-in products (id, name, price)
pub const PRODUCTS: &[(u32, &str, u32)] = &[
    (1, "T-shirt", 299),
    (2, "Jeans", 999),
    (3, "Sneakers", 1999),
    (4, "Cap", 199),
    (5, "Jacket", 1499),
];

/// Immutable product list, constructed once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn builtin() -> Self {
        let items = PRODUCTS
            .iter()
            .map(|(id, name, price)| CatalogItem {
                id: *id,
                name: name.to_string(),
                price: *price,
            })
            .collect();
        Self { items }
    }

    /// Caller guarantees unique ids (checked by config validation)
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[cfg(test)]
    pub fn get(&self, id: u32) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
