//! Product document type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WriteError;

/// A product document as stored in the search index.
///
/// The wire format is a flat JSON object with exactly the fields `id`, `name`,
/// `description`, `category` and `price`. Writing a product whose `id` already
/// exists overwrites the previous document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the index; also used as the store document id.
    pub id: String,
    /// Display name, the target of free-text matching.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Low-cardinality category label, matched exactly.
    pub category: String,
    /// Non-negative price.
    pub price: f64,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            price,
        }
    }

    /// Returns the document id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Serializes the product into its store document.
    ///
    /// JSON has no representation for NaN or infinity, and prices are
    /// non-negative, so either case is reported as a serialization failure
    /// instead of silently writing `null`.
    pub fn to_document(&self) -> Result<Value, WriteError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(WriteError::Serialization {
                id: self.id.clone(),
                message: format!("price must be a finite non-negative number, got {}", self.price),
            });
        }

        serde_json::to_value(self).map_err(|e| WriteError::Serialization {
            id: self.id.clone(),
            message: e.to_string(),
        })
    }
}

/// Generates the synthetic product batch used to seed an index.
///
/// Product `i` (1-based) gets id `"i"`, name `"Product i"`, a matching
/// description, category `"Electronics"` and price `i * 10`.
pub fn synthetic_products(count: usize) -> impl Iterator<Item = Product> {
    (1..=count).map(|i| {
        Product::new(
            i.to_string(),
            format!("Product {}", i),
            format!("Description for Product {}", i),
            "Electronics",
            (i * 10) as f64,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format() {
        let product = Product::new("42", "Phone", "A phone", "Electronics", 199.5);
        let doc = product.to_document().unwrap();
        assert_eq!(
            doc,
            json!({
                "id": "42",
                "name": "Phone",
                "description": "A phone",
                "category": "Electronics",
                "price": 199.5
            })
        );
        assert_eq!(doc.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let product = Product::new("1", "Broken", "", "Electronics", f64::NAN);
        let err = product.to_document().unwrap_err();
        assert!(matches!(err, WriteError::Serialization { ref id, .. } if id == "1"));

        let product = Product::new("2", "Broken", "", "Electronics", f64::INFINITY);
        assert!(product.to_document().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let product = Product::new("3", "Refund", "", "Electronics", -1.0);
        assert!(product.to_document().is_err());
    }

    #[test]
    fn test_synthetic_products() {
        let products: Vec<Product> = synthetic_products(3).collect();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].id, "1");
        assert_eq!(products[0].name, "Product 1");
        assert_eq!(products[2].description, "Description for Product 3");
        assert_eq!(products[2].category, "Electronics");
        assert_eq!(products[2].price, 30.0);
    }

    #[test]
    fn test_synthetic_products_empty() {
        assert_eq!(synthetic_products(0).count(), 0);
    }
}
