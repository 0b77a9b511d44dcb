//! Text for each product list phase.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::catalog::Product;
use crate::ui::theme::{ACCENT, ATTENTION, BODY_TEXT, MUTED_TEXT};

use super::state::ProductListState;

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No products found";

/// Lines for `state`; one line per product when loaded.
pub fn lines(state: &ProductListState, spinner: &str) -> Vec<Line<'static>> {
    match state {
        ProductListState::Loading => vec![Line::from(vec![
            Span::styled(format!("{spinner} "), Style::default().fg(ACCENT)),
            Span::styled(LOADING_TEXT, Style::default().fg(BODY_TEXT)),
        ])],
        ProductListState::Error { message } => vec![Line::from(Span::styled(
            format!("Error: {message}"),
            Style::default().fg(ATTENTION),
        ))],
        ProductListState::Empty => vec![Line::from(Span::styled(
            EMPTY_TEXT,
            Style::default().fg(MUTED_TEXT),
        ))],
        ProductListState::Loaded { products, .. } => products.iter().map(row_line).collect(),
    }
}

/// A list row: id, title and the view action.
pub fn row_line(product: &Product) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>4}", product.id), Style::default().fg(MUTED_TEXT)),
        Span::raw("  "),
        Span::styled(product.title.clone(), Style::default().fg(BODY_TEXT)),
        Span::raw("  "),
        Span::styled(
            "[view]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ])
}
