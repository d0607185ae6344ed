//! A counter widget hosted in a terminal UI.
//!
//! The widget itself lives in [`ui::counter`]: one integer and two actuators
//! that increment or decrement it. Everything else is the host around it.

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod shutdown;
pub mod ui;
