mod common;

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use simple_counter::config::{Config, KeyBinding};
use simple_counter::ui::app::App;
use simple_counter::ui::counter::Actuator;
use simple_counter::ui::input::{handle_key, handle_mouse, InputAction};
use simple_counter::ui::layout::counter_regions;

#[test]
fn default_keys_increment_and_decrement() {
    let mut app = common::mounted();
    for code in [KeyCode::Char('+'), KeyCode::Char('k'), KeyCode::Up] {
        assert_eq!(
            handle_key(&mut app, common::press(code)),
            InputAction::Activated(Actuator::Increment)
        );
    }
    assert_eq!(app.count(), 3);

    for code in [KeyCode::Char('-'), KeyCode::Char('j'), KeyCode::Down] {
        handle_key(&mut app, common::press(code));
    }
    assert_eq!(app.count(), 0);
}

#[test]
fn key_release_is_ignored() {
    let mut app = common::mounted();
    assert_eq!(
        handle_key(&mut app, common::release(KeyCode::Char('+'))),
        InputAction::None
    );
    assert_eq!(app.count(), 0);
}

#[test]
fn quit_keys() {
    for key in [
        common::press(KeyCode::Char('q')),
        common::press(KeyCode::Esc),
        common::ctrl('c'),
    ] {
        let mut app = common::mounted();
        assert_eq!(handle_key(&mut app, key), InputAction::Quit);
        assert!(app.should_quit());
        assert_eq!(app.count(), 0);
    }
}

#[test]
fn tab_then_enter_presses_decrement() {
    let mut app = common::mounted();
    assert_eq!(
        handle_key(&mut app, common::press(KeyCode::Tab)),
        InputAction::FocusMoved
    );
    assert_eq!(app.focus(), Actuator::Decrement);
    assert_eq!(
        handle_key(&mut app, common::press(KeyCode::Enter)),
        InputAction::Activated(Actuator::Decrement)
    );
    assert_eq!(app.count(), -1);

    handle_key(&mut app, common::press(KeyCode::Left));
    handle_key(&mut app, common::press(KeyCode::Char(' ')));
    assert_eq!(app.count(), 0);
}

#[test]
fn unbound_key_does_nothing() {
    let mut app = common::mounted();
    assert_eq!(
        handle_key(&mut app, common::press(KeyCode::Char('x'))),
        InputAction::None
    );
    assert_eq!(app.revision(), 0);
}

#[test]
fn custom_bindings_replace_defaults() {
    let mut config = Config::default();
    config.keys.increment = vec![KeyBinding::Char('a')];
    config.keys.decrement = vec![KeyBinding::Char('z')];
    let mut app = App::new(&config);

    handle_key(&mut app, common::press(KeyCode::Char('a')));
    handle_key(&mut app, common::press(KeyCode::Char('a')));
    handle_key(&mut app, common::press(KeyCode::Char('z')));
    handle_key(&mut app, common::press(KeyCode::Char('+')));
    assert_eq!(app.count(), 1);
}

#[test]
fn clicking_buttons_presses_them() {
    let mut app = common::mounted();
    app.on_resize(60, 20);
    let regions = counter_regions(Rect::new(0, 0, 60, 20), app.show_footer());

    let inc = regions.increment;
    let dec = regions.decrement;
    assert_eq!(
        handle_mouse(&mut app, common::left_click(inc.x + 2, inc.y + 1)),
        InputAction::Activated(Actuator::Increment)
    );
    assert_eq!(
        handle_mouse(&mut app, common::left_click(dec.x + 2, dec.y + 1)),
        InputAction::Activated(Actuator::Decrement)
    );
    assert_eq!(
        handle_mouse(&mut app, common::left_click(dec.x + 3, dec.y)),
        InputAction::Activated(Actuator::Decrement)
    );
    assert_eq!(app.count(), -1);
    assert_eq!(app.focus(), Actuator::Decrement);
}

#[test]
fn click_outside_buttons_is_ignored() {
    let mut app = common::mounted();
    app.on_resize(60, 20);
    assert_eq!(
        handle_mouse(&mut app, common::left_click(0, 0)),
        InputAction::None
    );
    assert_eq!(app.count(), 0);
}

#[test]
fn mouse_can_be_disabled() {
    let mut config = Config::default();
    config.ui.mouse = false;
    let mut app = App::new(&config);
    app.on_resize(60, 20);
    let inc = counter_regions(app.viewport(), app.show_footer()).increment;

    assert_eq!(
        handle_mouse(&mut app, common::left_click(inc.x + 1, inc.y + 1)),
        InputAction::None
    );
    assert_eq!(app.count(), 0);
}
