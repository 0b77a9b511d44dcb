use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::product::Product;

/// One page of the product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products in server order. Never re-sorted client side.
    pub products: Vec<Product>,
    /// Total number of products on the server.
    pub total: u32,
    /// Offset of this page.
    pub skip: u32,
    /// Requested page size.
    pub limit: u32,
}

/// A page that holds more products than its own `limit`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("page holds {count} products but its limit is {limit}")]
pub struct PageInvariantError {
    pub count: usize,
    pub limit: u32,
}

impl ProductPage {
    /// Checks `products.len() <= limit`.
    pub fn validate(&self) -> Result<(), PageInvariantError> {
        let count = self.products.len();
        if count > self.limit as usize {
            return Err(PageInvariantError {
                count,
                limit: self.limit,
            });
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_json(id: u32) -> String {
        format!(
            r#"{{"id": {id}, "title": "Item {id}", "description": "d", "price": 1.5,
                "discountPercentage": 0.0, "rating": 3.0, "stock": 1, "brand": "b",
                "category": "c", "thumbnail": "t", "images": []}}"#
        )
    }

    #[test]
    fn deserializes_page_keeping_server_order() {
        let json = format!(
            r#"{{"products": [{}, {}, {}], "total": 194, "skip": 0, "limit": 30}}"#,
            product_json(3),
            product_json(1),
            product_json(2)
        );
        let page: ProductPage = serde_json::from_str(&json).unwrap();
        let ids: Vec<u32> = page.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(page.total, 194);
        assert_eq!(page.limit, 30);
        assert!(page.validate().is_ok());
    }

    #[test]
    fn validate_rejects_page_larger_than_limit() {
        let json = format!(
            r#"{{"products": [{}, {}], "total": 2, "skip": 0, "limit": 1}}"#,
            product_json(1),
            product_json(2)
        );
        let page: ProductPage = serde_json::from_str(&json).unwrap();
        let err = page.validate().unwrap_err();
        assert_eq!(err, PageInvariantError { count: 2, limit: 1 });
    }

    #[test]
    fn empty_page_is_valid() {
        let page: ProductPage =
            serde_json::from_str(r#"{"products": [], "total": 0, "skip": 0, "limit": 30}"#)
                .unwrap();
        assert!(page.is_empty());
        assert!(page.validate().is_ok());
    }
}
