//! Intents for the product detail view.

use crate::catalog::{Product, ProductId};
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the product detail reducer.
///
/// Result intents carry the id they were requested for and only resolve a
/// pending load of that same id.
#[derive(Debug)]
pub enum ProductDetailIntent {
    /// A fetch for `id` has started.
    Load { id: ProductId },

    /// The server returned the product.
    Found { id: ProductId, product: Product },

    /// The server has no product with this id.
    Missing { id: ProductId },

    /// The request failed. `None` when the failure had no message.
    Failed {
        id: ProductId,
        message: Option<String>,
    },
}

impl Intent for ProductDetailIntent {}
