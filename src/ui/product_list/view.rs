use std::sync::Arc;

use crate::api::CatalogApi;
use crate::ui::fetch::{FetchEvent, FetchOutcome, FetchSender, FetchSlot};
use crate::ui::mvi::dispatch_mvi;
use crate::ui::navigation::NavigationIntent;

use super::intent::ProductListIntent;
use super::reducer::ProductListReducer;
use super::state::ProductListState;

/// Mounted product list.
///
/// Issues exactly one `list_products` call when mounted. There is no
/// re-fetch trigger; navigating away and back mounts a fresh view.
#[derive(Debug)]
pub struct ProductListView {
    state: ProductListState,
    fetch: FetchSlot,
}

impl ProductListView {
    pub fn mount(api: &Arc<dyn CatalogApi>, tx: &FetchSender) -> Self {
        let mut fetch = FetchSlot::new();
        let api = Arc::clone(api);
        tracing::debug!(mount = fetch.mount(), "requesting product list");
        fetch.spawn(tx, async move { FetchOutcome::Page(api.list_products().await) });

        Self {
            state: ProductListState::default(),
            fetch,
        }
    }

    pub fn state(&self) -> &ProductListState {
        &self.state
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.is_in_flight()
    }

    /// Applies a fetch result. Returns `false` if it was not ours to apply.
    pub fn on_fetch(&mut self, event: FetchEvent) -> bool {
        if !self.fetch.settle(event.ticket) {
            return false;
        }

        let intent = match event.outcome {
            FetchOutcome::Page(Ok(page)) => {
                tracing::info!(count = page.products.len(), total = page.total, "products loaded");
                ProductListIntent::PageLoaded {
                    products: page.products,
                }
            }
            FetchOutcome::Page(Err(err)) => {
                tracing::warn!(error = %err, kind = ?err.kind(), "failed to load products");
                ProductListIntent::LoadFailed {
                    message: err.message().map(str::to_string),
                }
            }
            FetchOutcome::Product(_) => {
                tracing::warn!("product list received a product result");
                return false;
            }
        };
        self.dispatch(intent);
        true
    }

    pub fn select_next(&mut self) {
        self.dispatch(ProductListIntent::SelectNext);
    }

    pub fn select_previous(&mut self) {
        self.dispatch(ProductListIntent::SelectPrevious);
    }

    /// Navigation for the action control on the selected row.
    pub fn open_selected(&self) -> Option<NavigationIntent> {
        self.state
            .selected_product()
            .map(|product| NavigationIntent::ViewProduct(product.id))
    }

    fn dispatch(&mut self, intent: ProductListIntent) {
        dispatch_mvi!(self, state, ProductListReducer, intent);
    }
}
