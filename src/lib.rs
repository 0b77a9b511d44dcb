//! Terminal browser for a remote product catalog.
//!
//! - [`catalog`]: product and page value types
//! - [`api`]: the [`api::CatalogApi`] contract and its HTTP client
//! - [`ui`]: list and detail views, navigation and the terminal loop

pub mod api;
pub mod args;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod ui;
