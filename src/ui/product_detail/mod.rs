//! Product detail feature module.
//!
//! Fetches one product by id. The id is a reactive key: changing it resets
//! the view to Loading and starts a fresh fetch.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Phase enum (Loading → Error | NotFound | Loaded)
//! - `intent.rs` - Load requests and fetch results
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - Keyed fetch controller around the reducer
//! - `render.rs` - Text lines for each phase

mod intent;
mod reducer;
mod render;
mod state;
mod view;

pub use intent::ProductDetailIntent;
pub use reducer::ProductDetailReducer;
pub use render::{lines, LOADING_TEXT, NOT_FOUND_TEXT};
pub use state::{ProductDetailState, GENERIC_ERROR};
pub use view::ProductDetailView;
