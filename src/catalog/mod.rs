//! Catalog data model.
//!
//! Immutable value types deserialized from the catalog API. A view owns the
//! values it fetched and drops them on unmount or re-fetch.

mod page;
mod product;

pub use page::{PageInvariantError, ProductPage};
pub use product::{Product, ProductId};
