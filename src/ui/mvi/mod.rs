//! Model-View-Intent (MVI) architecture primitives.
//!
//! Each catalog view is a small state machine built from these traits.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a view's phase
//! - **Intent**: User actions or fetch results
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer as $crate::ui::mvi::Reducer>::reduce(
            std::mem::take(&mut $self.$field),
            $intent,
        );
    };
}

pub(crate) use dispatch_mvi;
