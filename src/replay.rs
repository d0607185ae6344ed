//! Headless mode: drive the widget from a string of presses.

use thiserror::Error;

use crate::config::Config;
use crate::ui::app::App;
use crate::ui::counter::{Actuator, CounterView};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("unexpected '{ch}' at position {position} in replay sequence (expected '+' or '-')")]
    UnexpectedChar { ch: char, position: usize },
}

/// `+` is Increment, `-` is Decrement; whitespace is skipped.
pub fn parse_sequence(sequence: &str) -> Result<Vec<Actuator>, ReplayError> {
    sequence
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(position, ch)| match ch {
            '+' => Ok(Actuator::Increment),
            '-' => Ok(Actuator::Decrement),
            _ => Err(ReplayError::UnexpectedChar { ch, position }),
        })
        .collect()
}

/// Mount a fresh widget, press each actuator in order and return the final view.
pub fn replay(config: &Config, sequence: &str) -> Result<CounterView, ReplayError> {
    let presses = parse_sequence(sequence)?;
    let mut app = App::new(config);
    for actuator in presses {
        app.activate(actuator);
    }
    tracing::debug!(count = app.count(), "replay finished");
    Ok(app.view())
}
