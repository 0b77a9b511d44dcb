//! Reducer for the product detail view.

use crate::ui::mvi::Reducer;

use super::intent::ProductDetailIntent;
use super::state::{ProductDetailState, GENERIC_ERROR};

pub struct ProductDetailReducer;

impl Reducer for ProductDetailReducer {
    type State = ProductDetailState;
    type Intent = ProductDetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductDetailIntent::Load { id } => ProductDetailState::Loading { id },

            ProductDetailIntent::Found { id, product } => match state {
                ProductDetailState::Loading { id: pending } if pending == id => {
                    ProductDetailState::Loaded { product }
                }
                other => other,
            },

            ProductDetailIntent::Missing { id } => match state {
                ProductDetailState::Loading { id: pending } if pending == id => {
                    ProductDetailState::NotFound { id }
                }
                other => other,
            },

            ProductDetailIntent::Failed { id, message } => match state {
                ProductDetailState::Loading { id: pending } if pending == id => {
                    ProductDetailState::Error {
                        id,
                        message: message
                            .filter(|m| !m.trim().is_empty())
                            .unwrap_or_else(|| GENERIC_ERROR.to_string()),
                    }
                }
                other => other,
            },
        }
    }
}
