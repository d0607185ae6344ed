use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crate::shutdown::ShutdownHandle;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Termination signal received
    Shutdown,
}

/// Reads terminal events on a background thread and queues them.
///
/// The UI loop takes one event at a time from the queue, so handlers never
/// overlap.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(shutdown: ShutdownHandle) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("terminal-events".to_string())
            .spawn(move || read_loop(&tx, &shutdown))?;

        Ok(Self { rx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

fn read_loop(tx: &Sender<AppEvent>, shutdown: &ShutdownHandle) {
    loop {
        if shutdown.is_shutting_down() {
            let _ = tx.send(AppEvent::Shutdown);
            break;
        }

        // Short poll so the shutdown flag is checked frequently
        let ready = match event::poll(POLL_INTERVAL) {
            Ok(ready) => ready,
            Err(err) => {
                tracing::error!(error = %err, "polling terminal events failed");
                break;
            }
        };
        if !ready {
            continue;
        }

        let forwarded = match event::read() {
            Ok(Event::Key(key)) => AppEvent::Key(key),
            Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
            Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
            Ok(_) => continue,
            Err(err) => {
                tracing::error!(error = %err, "reading terminal event failed");
                break;
            }
        };

        if tx.send(forwarded).is_err() {
            // UI loop is gone
            break;
        }
    }
}
