use super::intent::Intent;
use super::state::UiState;

/// The only place viewer state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure: no I/O, no navigation, no logging.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
