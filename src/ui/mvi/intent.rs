//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (selection moves, stepping the product id)
/// - Fetch results (page loaded, product found, request failed)
pub trait Intent: Send + 'static {}
