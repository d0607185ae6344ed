//! Pure projection of [`CounterState`] to a view tree.

use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;

pub const TITLE: &str = "Simple Counter";

/// One of the two controls of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actuator {
    Increment,
    Decrement,
}

impl Actuator {
    /// In display order.
    pub const ALL: [Actuator; 2] = [Actuator::Increment, Actuator::Decrement];

    pub fn label(self) -> &'static str {
        match self {
            Actuator::Increment => "Increment",
            Actuator::Decrement => "Decrement",
        }
    }

    /// The one intent this actuator is bound to.
    pub fn intent(self) -> CounterIntent {
        match self {
            Actuator::Increment => CounterIntent::Increment,
            Actuator::Decrement => CounterIntent::Decrement,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Actuator::Increment => Actuator::Decrement,
            Actuator::Decrement => Actuator::Increment,
        }
    }

    pub fn prev(self) -> Self {
        // Only two actuators, so stepping back lands on the same one as forward.
        self.next()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActuatorView {
    pub actuator: Actuator,
    pub label: &'static str,
    pub intent: CounterIntent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub title: &'static str,
    pub count_text: String,
    pub actuators: [ActuatorView; 2],
}

/// Build the view tree for `state`.
pub fn render(state: &CounterState) -> CounterView {
    CounterView {
        title: TITLE,
        count_text: format!("Current Count: {}", state.count),
        actuators: Actuator::ALL.map(|actuator| ActuatorView {
            actuator,
            label: actuator.label(),
            intent: actuator.intent(),
        }),
    }
}

impl CounterView {
    /// Plain-text rendering, one element per line.
    pub fn to_lines(&self) -> Vec<String> {
        let buttons = self
            .actuators
            .iter()
            .map(|a| format!("[ {} ]", a.label))
            .collect::<Vec<_>>()
            .join(" ");
        vec![
            self.title.to_string(),
            self.count_text.clone(),
            buttons,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_zero() {
        let view = render(&CounterState::default());
        assert_eq!(view.title, "Simple Counter");
        assert_eq!(view.count_text, "Current Count: 0");
    }

    #[test]
    fn actuators_are_bound_in_order() {
        let view = render(&CounterState::new(5));
        assert_eq!(view.actuators[0].label, "Increment");
        assert_eq!(view.actuators[0].intent, CounterIntent::Increment);
        assert_eq!(view.actuators[1].label, "Decrement");
        assert_eq!(view.actuators[1].intent, CounterIntent::Decrement);
    }

    #[test]
    fn text_lines() {
        let lines = render(&CounterState::new(-3)).to_lines();
        assert_eq!(
            lines,
            vec![
                "Simple Counter".to_string(),
                "Current Count: -3".to_string(),
                "[ Increment ] [ Decrement ]".to_string(),
            ]
        );
    }

    #[test]
    fn focus_cycles_between_two() {
        assert_eq!(Actuator::Increment.next(), Actuator::Decrement);
        assert_eq!(Actuator::Decrement.next(), Actuator::Increment);
        assert_eq!(Actuator::Increment.prev(), Actuator::Decrement);
    }
}
