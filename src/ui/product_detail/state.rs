//! State for the product detail view.

use crate::catalog::{Product, ProductId};
use crate::ui::mvi::UiState;

/// Shown when a failed request carried no message.
pub const GENERIC_ERROR: &str = "Unknown error while loading the product";

/// Product detail phase.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductDetailState {
    Loading { id: ProductId },
    Error { id: ProductId, message: String },
    Loaded { product: Product },
    NotFound { id: ProductId },
}

/// Placeholder used while a reducer takes ownership of the state.
impl Default for ProductDetailState {
    fn default() -> Self {
        Self::Loading { id: 0 }
    }
}

impl UiState for ProductDetailState {}

impl ProductDetailState {
    /// The product id this state belongs to.
    pub fn id(&self) -> ProductId {
        match self {
            Self::Loading { id } | Self::Error { id, .. } | Self::NotFound { id } => *id,
            Self::Loaded { product } => product.id,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            Self::Loaded { product } => Some(product),
            _ => None,
        }
    }
}
