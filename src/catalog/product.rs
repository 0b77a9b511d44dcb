use serde::{Deserialize, Serialize};

/// Server-assigned product identifier.
pub type ProductId = u32;

/// A catalog product as returned by both the list and detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Unit price, non-negative.
    pub price: f64,
    /// Discount in percent, 0 to 100.
    pub discount_percentage: f64,
    /// Average rating, 0 to 5.
    pub rating: f64,
    pub stock: u32,
    /// Some categories ship without a brand.
    #[serde(default)]
    pub brand: String,
    pub category: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Gallery image URLs in server order.
    pub images: Vec<String>,
}

impl Product {
    /// Price formatted as a dollar amount with two decimals.
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}
