use crate::ui::mvi::UiState;

/// The single state cell. Starts at zero and has no bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self { count }
    }
}
