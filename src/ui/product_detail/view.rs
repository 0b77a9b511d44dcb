use std::sync::Arc;

use crate::api::CatalogApi;
use crate::catalog::ProductId;
use crate::ui::fetch::{FetchEvent, FetchOutcome, FetchSender, FetchSlot};
use crate::ui::mvi::dispatch_mvi;

use super::intent::ProductDetailIntent;
use super::reducer::ProductDetailReducer;
use super::state::ProductDetailState;

/// Mounted product detail, keyed by product id.
///
/// Every id change supersedes the fetch in flight, so only the result for
/// the current id can reach the state.
pub struct ProductDetailView {
    id: ProductId,
    state: ProductDetailState,
    fetch: FetchSlot,
    api: Arc<dyn CatalogApi>,
    tx: FetchSender,
}

impl ProductDetailView {
    pub fn mount(api: &Arc<dyn CatalogApi>, tx: &FetchSender, id: ProductId) -> Self {
        let mut view = Self {
            id,
            state: ProductDetailState::Loading { id },
            fetch: FetchSlot::new(),
            api: Arc::clone(api),
            tx: tx.clone(),
        };
        view.request();
        view
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn state(&self) -> &ProductDetailState {
        &self.state
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.is_in_flight()
    }

    /// Changes the id input. Setting the current id again is not a change.
    pub fn set_id(&mut self, id: ProductId) {
        if id == self.id {
            return;
        }
        tracing::debug!(from = self.id, to = id, "product id changed");
        self.id = id;
        self.request();
    }

    /// Moves the id input by `delta`, staying at or above 1.
    pub fn step(&mut self, delta: i64) {
        let next = (i64::from(self.id) + delta).clamp(1, i64::from(ProductId::MAX));
        if let Ok(next) = ProductId::try_from(next) {
            self.set_id(next);
        }
    }

    /// Applies a fetch result. Returns `false` if it was not ours to apply.
    pub fn on_fetch(&mut self, event: FetchEvent) -> bool {
        if !self.fetch.settle(event.ticket) {
            return false;
        }

        let id = self.id;
        let intent = match event.outcome {
            FetchOutcome::Product(Ok(Some(product))) => {
                tracing::info!(id, title = %product.title, "product loaded");
                ProductDetailIntent::Found { id, product }
            }
            FetchOutcome::Product(Ok(None)) => {
                tracing::info!(id, "product not found");
                ProductDetailIntent::Missing { id }
            }
            FetchOutcome::Product(Err(err)) => {
                tracing::warn!(id, error = %err, kind = ?err.kind(), "failed to load product");
                ProductDetailIntent::Failed {
                    id,
                    message: err.message().map(str::to_string),
                }
            }
            FetchOutcome::Page(_) => {
                tracing::warn!(id, "product detail received a page result");
                return false;
            }
        };
        self.dispatch(intent);
        true
    }

    fn request(&mut self) {
        let id = self.id;
        self.dispatch(ProductDetailIntent::Load { id });
        let api = Arc::clone(&self.api);
        self.fetch.spawn(&self.tx, async move {
            FetchOutcome::Product(api.get_product(id).await)
        });
    }

    fn dispatch(&mut self, intent: ProductDetailIntent) {
        dispatch_mvi!(self, state, ProductDetailReducer, intent);
    }
}
