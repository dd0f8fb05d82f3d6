use super::intent::Intent;
use super::state::State;

/// A pure state transition function.
///
/// Implementations take the state by value and return the next one. They
/// must not perform I/O, read clocks or generate ids, and must be total:
/// an intent that cannot apply returns the input unchanged.
pub trait Reducer {
    type State: State;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
