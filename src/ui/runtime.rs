use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

const EVENT_TIMEOUT: Duration = Duration::from_millis(250);

/// Mount the counter in the terminal and run until the user quits.
///
/// Returns the final count.
pub fn run(config: &Config, shutdown: ShutdownHandle) -> io::Result<i64> {
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let mut app = App::new(config);
    let events = EventHandler::new(shutdown)?;

    loop {
        if app.needs_redraw() {
            let area = terminal.draw(|frame| draw(frame, &app))?.area;
            app.set_viewport(area);
            app.mark_drawn();
        }
        if app.should_quit() {
            break;
        }

        let action = match events.next(EVENT_TIMEOUT) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => {
                app.on_resize(cols, rows);
                continue;
            }
            Ok(AppEvent::Shutdown) => {
                app.request_quit();
                continue;
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };
        tracing::trace!(?action, "input handled");
    }

    let count = app.count();
    drop(app);
    drop(guard);
    Ok(count)
}
