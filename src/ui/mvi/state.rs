//! Base trait for UI state in MVI architecture.

/// Marker trait for view state objects.
///
/// States are tagged unions: exactly one phase is active, so combinations
/// like "loading with data present" cannot be represented.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
