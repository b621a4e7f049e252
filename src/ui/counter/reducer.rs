use crate::counter::CounterState;
use crate::ui::counter::intent::CounterIntent;
use crate::ui::mvi::{Reducer, UiState};

impl UiState for CounterState {}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => {
                state.increment();
            }
            CounterIntent::Decrement => {
                state.decrement();
            }
        }
        state
    }
}
