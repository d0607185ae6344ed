use crate::config::{Config, KeysConfig};
use crate::ui::counter::{render, Actuator, CounterReducer, CounterState, CounterView};
use crate::ui::mvi::Store;
use ratatui::layout::Rect;
use std::cell::Cell;
use std::rc::Rc;

/// The mounted counter widget plus the host state around it.
pub struct App {
    should_quit: bool,
    focus: Actuator,
    counter: Store<CounterReducer>,
    /// Raised by the store subscription and by focus/resize changes.
    dirty: Rc<Cell<bool>>,
    viewport: Rect,
    keys: KeysConfig,
    show_footer: bool,
    mouse: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let mut counter = Store::<CounterReducer>::new();
        let on_change = Rc::clone(&dirty);
        counter.subscribe(move |state: &CounterState| {
            tracing::debug!(count = state.count, "count changed");
            on_change.set(true);
        });
        tracing::debug!("counter mounted");

        Self {
            should_quit: false,
            focus: Actuator::Increment,
            counter,
            dirty,
            viewport: Rect::default(),
            keys: config.keys.clone(),
            show_footer: config.ui.show_footer,
            mouse: config.ui.mouse,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn count(&self) -> i64 {
        self.counter.state().count
    }

    /// Number of effective count changes since mount.
    pub fn revision(&self) -> u64 {
        self.counter.revision()
    }

    pub fn view(&self) -> CounterView {
        render(self.counter.state())
    }

    /// Press `actuator`: dispatch the one intent it is bound to.
    pub fn activate(&mut self, actuator: Actuator) -> bool {
        self.counter.dispatch(actuator.intent())
    }

    pub fn focus(&self) -> Actuator {
        self.focus
    }

    pub fn set_focus(&mut self, actuator: Actuator) {
        if self.focus != actuator {
            self.focus = actuator;
            self.dirty.set(true);
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn activate_focused(&mut self) -> Actuator {
        let actuator = self.focus;
        self.activate(actuator);
        actuator
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty.get()
    }

    pub fn mark_drawn(&mut self) {
        self.dirty.set(false);
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Rect::new(0, 0, cols, rows);
        self.dirty.set(true);
    }

    pub fn keys(&self) -> &KeysConfig {
        &self.keys
    }

    pub fn show_footer(&self) -> bool {
        self.show_footer
    }

    pub fn mouse_enabled(&self) -> bool {
        self.mouse
    }
}

impl Drop for App {
    fn drop(&mut self) {
        tracing::debug!(count = self.count(), "counter unmounted");
    }
}
