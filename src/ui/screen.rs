use std::sync::Arc;

use ratatui::text::Line;

use crate::api::CatalogApi;
use crate::ui::fetch::{FetchEvent, FetchSender};
use crate::ui::navigation::Route;
use crate::ui::product_detail::{self, ProductDetailView};
use crate::ui::product_list::{self, ProductListView};

/// The single mounted view.
pub enum Screen {
    List(ProductListView),
    Detail(ProductDetailView),
}

impl Screen {
    /// Mounts the view for `route`, which starts its fetch.
    pub fn mount(route: Route, api: &Arc<dyn CatalogApi>, tx: &FetchSender) -> Self {
        match route {
            Route::Products => Screen::List(ProductListView::mount(api, tx)),
            Route::Product { id } => Screen::Detail(ProductDetailView::mount(api, tx, id)),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::List(_) => Route::Products,
            Screen::Detail(view) => Route::Product { id: view.id() },
        }
    }

    pub fn title(&self) -> String {
        match self {
            Screen::List(_) => "Products".to_string(),
            Screen::Detail(view) => format!("Product #{}", view.id()),
        }
    }

    pub fn is_fetching(&self) -> bool {
        match self {
            Screen::List(view) => view.is_fetching(),
            Screen::Detail(view) => view.is_fetching(),
        }
    }

    pub fn on_fetch(&mut self, event: FetchEvent) -> bool {
        match self {
            Screen::List(view) => view.on_fetch(event),
            Screen::Detail(view) => view.on_fetch(event),
        }
    }

    pub fn lines(&self, spinner: &str) -> Vec<Line<'static>> {
        match self {
            Screen::List(view) => product_list::lines(view.state(), spinner),
            Screen::Detail(view) => product_detail::lines(view.state(), spinner),
        }
    }
}
