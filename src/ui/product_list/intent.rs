//! Intents for the product list.

use crate::catalog::Product;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the product list reducer.
#[derive(Debug)]
pub enum ProductListIntent {
    /// The page request succeeded.
    PageLoaded { products: Vec<Product> },

    /// The page request failed. `None` when the failure had no message.
    LoadFailed { message: Option<String> },

    /// Move the selection one row down, wrapping at the end.
    SelectNext,

    /// Move the selection one row up, wrapping at the start.
    SelectPrevious,
}

impl Intent for ProductListIntent {}
