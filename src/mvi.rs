//! Model-View-Intent primitives.
//!
//! ```text
//! key press / network reply / timer ──→ Intent ──→ Reducer ──→ State ──→ render
//!                  ↑                                             │
//!                  └──────────── side effects observe ───────────┘
//! ```
//!
//! Reducers never perform I/O. Whatever talks to the network, the clipboard
//! or the preference file does so outside the reducer and feeds its result
//! back in as another intent.

/// Marker trait for intent objects.
///
/// Intents are either user actions (submit, copy) or completions reported by
/// background work (generation finished, copied indicator expired).
pub trait Intent: Send + 'static {}

/// Marker trait for UI state objects.
///
/// States are plain values: cloned to snapshot, compared to detect change,
/// defaulted to obtain the freshly-loaded page.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// The only place where state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Run the reducer in place on a mutable slot.
    fn apply(slot: &mut Self::State, intent: Self::Intent) {
        *slot = Self::reduce(std::mem::take(slot), intent);
    }
}
