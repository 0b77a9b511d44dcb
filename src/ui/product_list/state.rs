//! State for the product list.

use crate::catalog::Product;
use crate::ui::mvi::UiState;

/// Shown when a failed request carried no message.
pub const GENERIC_ERROR: &str = "Unknown error while loading products";

/// Product list phase.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProductListState {
    /// Request in flight.
    #[default]
    Loading,

    /// Request failed.
    Error { message: String },

    /// Request succeeded with zero products.
    Empty,

    /// Request succeeded. `selected` always indexes into `products`.
    Loaded {
        products: Vec<Product>,
        selected: usize,
    },
}

impl UiState for ProductListState {}

impl ProductListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn products(&self) -> &[Product] {
        match self {
            Self::Loaded { products, .. } => products,
            _ => &[],
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Self::Loaded { selected, .. } => Some(*selected),
            _ => None,
        }
    }

    pub fn selected_product(&self) -> Option<&Product> {
        match self {
            Self::Loaded { products, selected } => products.get(*selected),
            _ => None,
        }
    }
}
