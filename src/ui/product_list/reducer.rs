//! Reducer for the product list.

use crate::ui::mvi::Reducer;

use super::intent::ProductListIntent;
use super::state::{ProductListState, GENERIC_ERROR};

pub struct ProductListReducer;

impl Reducer for ProductListReducer {
    type State = ProductListState;
    type Intent = ProductListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductListIntent::PageLoaded { products } => {
                if products.is_empty() {
                    ProductListState::Empty
                } else {
                    ProductListState::Loaded {
                        products,
                        selected: 0,
                    }
                }
            }

            ProductListIntent::LoadFailed { message } => ProductListState::Error {
                message: message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| GENERIC_ERROR.to_string()),
            },

            ProductListIntent::SelectNext => match state {
                ProductListState::Loaded { products, selected } => {
                    let selected = if selected + 1 >= products.len() {
                        0
                    } else {
                        selected + 1
                    };
                    ProductListState::Loaded { products, selected }
                }
                other => other,
            },

            ProductListIntent::SelectPrevious => match state {
                ProductListState::Loaded { products, selected } => {
                    let selected = if selected == 0 {
                        products.len().saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    ProductListState::Loaded { products, selected }
                }
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn product(id: u32) -> Product {
        Product {
            id,
            title: format!("Item {id}"),
            description: String::new(),
            price: 1.0,
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 0,
            brand: String::new(),
            category: String::new(),
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    fn loaded(ids: &[u32], selected: usize) -> ProductListState {
        ProductListState::Loaded {
            products: ids.iter().copied().map(product).collect(),
            selected,
        }
    }

    #[test]
    fn page_with_products_is_loaded_in_order() {
        let state = ProductListReducer::reduce(
            ProductListState::Loading,
            ProductListIntent::PageLoaded {
                products: vec![product(9), product(2), product(5)],
            },
        );
        let ids: Vec<u32> = state.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn empty_page_is_empty_not_error() {
        let state = ProductListReducer::reduce(
            ProductListState::Loading,
            ProductListIntent::PageLoaded { products: vec![] },
        );
        assert_eq!(state, ProductListState::Empty);
    }

    #[test]
    fn failure_keeps_message_verbatim() {
        let state = ProductListReducer::reduce(
            ProductListState::Loading,
            ProductListIntent::LoadFailed {
                message: Some("connection refused".to_string()),
            },
        );
        assert_eq!(
            state,
            ProductListState::Error {
                message: "connection refused".to_string()
            }
        );
    }

    #[test]
    fn failure_without_message_uses_generic_text() {
        for message in [None, Some(String::new()), Some("  ".to_string())] {
            let state = ProductListReducer::reduce(
                ProductListState::Loading,
                ProductListIntent::LoadFailed { message },
            );
            assert_eq!(
                state,
                ProductListState::Error {
                    message: GENERIC_ERROR.to_string()
                }
            );
        }
    }

    #[test]
    fn select_next_wraps_to_first() {
        let state = ProductListReducer::reduce(loaded(&[1, 2, 3], 2), ProductListIntent::SelectNext);
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn select_previous_wraps_to_last() {
        let state =
            ProductListReducer::reduce(loaded(&[1, 2, 3], 0), ProductListIntent::SelectPrevious);
        assert_eq!(state.selected_index(), Some(2));
    }

    #[test]
    fn selection_is_noop_outside_loaded() {
        let state = ProductListReducer::reduce(ProductListState::Loading, ProductListIntent::SelectNext);
        assert!(state.is_loading());
        let state = ProductListReducer::reduce(ProductListState::Empty, ProductListIntent::SelectPrevious);
        assert_eq!(state, ProductListState::Empty);
    }
}
