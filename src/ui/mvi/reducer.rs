use super::intent::Intent;
use super::state::UiState;

/// The only place UI state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must not perform side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
