//! Text for each product detail phase.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::catalog::Product;
use crate::ui::theme::{ACCENT, ATTENTION, BODY_TEXT, HEADING_TEXT, MUTED_TEXT};

use super::state::ProductDetailState;

pub const LOADING_TEXT: &str = "Loading product details...";
pub const NOT_FOUND_TEXT: &str = "Could not load the product";

pub fn lines(state: &ProductDetailState, spinner: &str) -> Vec<Line<'static>> {
    let attention = Style::default().fg(ATTENTION);
    match state {
        ProductDetailState::Loading { .. } => vec![Line::from(vec![
            Span::styled(format!("{spinner} "), Style::default().fg(ACCENT)),
            Span::styled(LOADING_TEXT, Style::default().fg(BODY_TEXT)),
        ])],
        ProductDetailState::Error { message, .. } => {
            vec![Line::from(Span::styled(format!("Error: {message}"), attention))]
        }
        ProductDetailState::NotFound { .. } => {
            vec![Line::from(Span::styled(NOT_FOUND_TEXT, attention))]
        }
        ProductDetailState::Loaded { product } => product_lines(product),
    }
}

fn product_lines(product: &Product) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            product.title.clone(),
            Style::default()
                .fg(HEADING_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Price", product.formatted_price()),
        field("Discount", format!("{}%", product.discount_percentage)),
        field("Brand", product.brand.clone()),
        field("Category", product.category.clone()),
        field("Stock", product.stock.to_string()),
        field("Rating", product.rating.to_string()),
        Line::from(""),
    ];
    lines.extend(
        product
            .description
            .lines()
            .map(|text| Line::from(Span::styled(text.to_string(), Style::default().fg(BODY_TEXT)))),
    );
    lines
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(MUTED_TEXT)),
        Span::styled(value, Style::default().fg(BODY_TEXT)),
    ])
}
