use crate::config::KeysConfig;
use crate::ui::app::App;
use crate::ui::counter::Actuator;
use crate::ui::layout::counter_regions;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What a single input event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Event ignored.
    None,
    /// An actuator was pressed (exactly one state update).
    Activated(Actuator),
    FocusMoved,
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_quit_key(key) {
        app.request_quit();
        return InputAction::Quit;
    }

    if let Some(actuator) = bound_actuator(app.keys(), &key) {
        app.activate(actuator);
        return InputAction::Activated(actuator);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Right => {
            app.focus_next();
            InputAction::FocusMoved
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.focus_prev();
            InputAction::FocusMoved
        }
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::Activated(app.activate_focused()),
        _ => InputAction::None,
    }
}

/// Left click on a button presses it and moves focus there.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) -> InputAction {
    if !app.mouse_enabled() {
        return InputAction::None;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return InputAction::None;
    }

    let regions = counter_regions(app.viewport(), app.show_footer());
    let Some(actuator) = regions.actuator_at(mouse.column, mouse.row) else {
        return InputAction::None;
    };
    app.set_focus(actuator);
    app.activate(actuator);
    InputAction::Activated(actuator)
}

fn bound_actuator(keys: &KeysConfig, key: &KeyEvent) -> Option<Actuator> {
    if keys.increment.iter().any(|binding| binding.matches(key)) {
        Some(Actuator::Increment)
    } else if keys.decrement.iter().any(|binding| binding.matches(key)) {
        Some(Actuator::Decrement)
    } else {
        None
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char(ch) => {
            ch.eq_ignore_ascii_case(&'c') && key.modifiers.contains(KeyModifiers::CONTROL)
        }
        _ => false,
    }
}
