use crate::ui::counter::Actuator;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};

pub const BUTTON_WIDTH: u16 = 15;
pub const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 2;
const FOOTER_HEIGHT: u16 = 3;

/// Screen areas of the counter widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterRegions {
    pub title: Rect,
    pub count: Rect,
    pub increment: Rect,
    pub decrement: Rect,
    pub footer: Option<Rect>,
}

impl CounterRegions {
    pub fn actuator(&self, actuator: Actuator) -> Rect {
        match actuator {
            Actuator::Increment => self.increment,
            Actuator::Decrement => self.decrement,
        }
    }

    /// The actuator under a terminal cell, if any.
    pub fn actuator_at(&self, column: u16, row: u16) -> Option<Actuator> {
        let position = Position::new(column, row);
        Actuator::ALL
            .into_iter()
            .find(|actuator| self.actuator(*actuator).contains(position))
    }
}

pub fn counter_regions(area: Rect, show_footer: bool) -> CounterRegions {
    let footer_height = if show_footer {
        FOOTER_HEIGHT.min(area.height)
    } else {
        0
    };
    let [widget, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(footer_height)]).areas(area);

    let [title, _, count, _, buttons] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(widget);

    let [increment, decrement] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .spacing(BUTTON_GAP)
    .flex(Flex::Center)
    .areas(buttons);

    CounterRegions {
        title,
        count,
        increment,
        decrement,
        footer: show_footer.then_some(footer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_sit_side_by_side() {
        let regions = counter_regions(Rect::new(0, 0, 60, 20), true);
        assert_eq!(regions.increment.width, BUTTON_WIDTH);
        assert_eq!(regions.decrement.width, BUTTON_WIDTH);
        assert_eq!(regions.increment.y, regions.decrement.y);
        assert!(regions.increment.right() < regions.decrement.x);
        assert!(regions.title.y < regions.count.y);
        assert!(regions.count.y < regions.increment.y);
    }

    #[test]
    fn hit_test_finds_buttons() {
        let regions = counter_regions(Rect::new(0, 0, 60, 20), false);
        let inc = regions.increment;
        let dec = regions.decrement;
        assert_eq!(regions.actuator_at(inc.x, inc.y), Some(Actuator::Increment));
        assert_eq!(
            regions.actuator_at(dec.x + 1, dec.y + 1),
            Some(Actuator::Decrement)
        );
        assert_eq!(regions.actuator_at(0, 0), None);
    }

    #[test]
    fn footer_is_optional() {
        assert!(counter_regions(Rect::new(0, 0, 60, 20), false).footer.is_none());
        let footer = counter_regions(Rect::new(0, 0, 60, 20), true).footer;
        assert_eq!(footer.map(|r| r.height), Some(FOOTER_HEIGHT));
    }
}
