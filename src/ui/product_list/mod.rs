//! Product list feature module.
//!
//! Fetches one page of products on mount and shows it as a selectable list.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Phase enum (Loading → Error | Empty | Loaded)
//! - `intent.rs` - Fetch results and selection moves
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - Mount/fetch controller around the reducer
//! - `render.rs` - Text lines for each phase

mod intent;
mod reducer;
mod render;
mod state;
mod view;

pub use intent::ProductListIntent;
pub use reducer::ProductListReducer;
pub use render::{lines, row_line, EMPTY_TEXT, LOADING_TEXT};
pub use state::{ProductListState, GENERIC_ERROR};
pub use view::ProductListView;
