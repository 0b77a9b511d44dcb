//! Catalog API client contract and its HTTP implementation.
//!
//! Views only see the [`CatalogApi`] trait, so tests can substitute a
//! scripted client for the real HTTP one.

mod error;
mod http;

use async_trait::async_trait;

use crate::catalog::{Product, ProductId, ProductPage};

pub use error::{ApiError, ErrorKind};
pub use http::HttpCatalogClient;

/// Remote product catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the default page of products.
    async fn list_products(&self) -> Result<ProductPage, ApiError>;

    /// Fetch one product. `Ok(None)` when the server has no such record.
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, ApiError>;
}
