//! Terminal front end: views, navigation and the event loop.

pub mod app;
pub mod fetch;
pub mod footer;
pub mod header;
pub mod headless;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod navigation;
pub mod product_detail;
pub mod product_list;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;

use ratatui::text::Line;

/// Concatenated span contents of `line`, without styling.
pub fn plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}
