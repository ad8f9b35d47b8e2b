//! State/intent/reducer primitives for panel state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

/// Marker trait for panel state. Transitions produce new values.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for user actions and action outcomes.
pub trait Intent: Send + 'static {}

/// Pure transition function: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
