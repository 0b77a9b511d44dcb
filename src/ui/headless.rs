//! One-shot rendering without a terminal.

use std::sync::Arc;

use crate::api::CatalogApi;
use crate::ui::fetch;
use crate::ui::navigation::Route;
use crate::ui::plain_text;
use crate::ui::screen::Screen;

/// Mounts the view for `route`, waits until its fetch settles and returns
/// the rendered text, one string per line.
pub async fn render_once(api: Arc<dyn CatalogApi>, route: Route) -> Vec<String> {
    let (tx, mut rx) = fetch::channel();
    let mut screen = Screen::mount(route, &api, &tx);

    while screen.is_fetching() {
        match rx.recv().await {
            Some(event) => {
                screen.on_fetch(event);
            }
            None => break,
        }
    }

    screen.lines("").iter().map(plain_text).collect()
}
