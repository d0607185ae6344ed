use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Two's-complement wraparound at the i64 limits.
        let count = match intent {
            CounterIntent::Increment => state.count.wrapping_add(1),
            CounterIntent::Decrement => state.count.wrapping_sub(1),
        };
        CounterState { count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_adds_one() {
        let state = CounterReducer::reduce(CounterState::new(41), CounterIntent::Increment);
        assert_eq!(state.count, 42);
    }

    #[test]
    fn decrement_goes_below_zero() {
        let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Decrement);
        assert_eq!(state.count, -1);
    }

    #[test]
    fn overflow_wraps() {
        let state = CounterReducer::reduce(CounterState::new(i64::MAX), CounterIntent::Increment);
        assert_eq!(state.count, i64::MIN);
        let state = CounterReducer::reduce(state, CounterIntent::Decrement);
        assert_eq!(state.count, i64::MAX);
    }
}
