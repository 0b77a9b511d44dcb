//! A `CatalogApi` whose calls resolve only when the test says so.

use async_trait::async_trait;
use parking_lot::Mutex;
use product_catalog::api::{ApiError, CatalogApi};
use product_catalog::catalog::{Product, ProductId, ProductPage};
use tokio::sync::oneshot;

type PageReply = oneshot::Sender<Result<ProductPage, ApiError>>;
type ProductReply = oneshot::Sender<Result<Option<Product>, ApiError>>;

#[derive(Default)]
pub struct ScriptedApi {
    list_calls: Mutex<Vec<Option<PageReply>>>,
    product_calls: Mutex<Vec<(ProductId, Option<ProductReply>)>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.lock().len()
    }

    pub fn product_call_ids(&self) -> Vec<ProductId> {
        self.product_calls.lock().iter().map(|(id, _)| *id).collect()
    }

    /// Resolves the `index`-th list call. Returns false if its caller is gone.
    pub fn resolve_list(&self, index: usize, result: Result<ProductPage, ApiError>) -> bool {
        let reply = self.list_calls.lock()[index].take().expect("list call already resolved");
        reply.send(result).is_ok()
    }

    /// Resolves the oldest unresolved call for `id`. Returns false if its
    /// caller is gone.
    pub fn resolve_product(&self, id: ProductId, result: Result<Option<Product>, ApiError>) -> bool {
        let reply = self
            .product_calls
            .lock()
            .iter_mut()
            .find(|(call_id, reply)| *call_id == id && reply.is_some())
            .and_then(|(_, reply)| reply.take())
            .expect("no pending call for product");
        reply.send(result).is_ok()
    }
}

#[async_trait]
impl CatalogApi for ScriptedApi {
    async fn list_products(&self) -> Result<ProductPage, ApiError> {
        let (tx, rx) = oneshot::channel();
        self.list_calls.lock().push(Some(tx));
        rx.await
            .unwrap_or_else(|_| Err(ApiError::network("scripted reply dropped")))
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, ApiError> {
        let (tx, rx) = oneshot::channel();
        self.product_calls.lock().push((id, Some(tx)));
        rx.await
            .unwrap_or_else(|_| Err(ApiError::network("scripted reply dropped")))
    }
}
