use std::fmt;

use crate::catalog::ProductId;

/// Screens the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Products,
    Product { id: ProductId },
}

/// Navigation requested by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Open the detail view for a product.
    ViewProduct(ProductId),
    /// Return to the product list.
    Back,
}

impl NavigationIntent {
    pub fn route(&self) -> Route {
        match self {
            NavigationIntent::ViewProduct(id) => Route::Product { id: *id },
            NavigationIntent::Back => Route::Products,
        }
    }
}

impl fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationIntent::ViewProduct(id) => write!(f, "view product {id}"),
            NavigationIntent::Back => write!(f, "back"),
        }
    }
}
