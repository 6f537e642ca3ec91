//! Password form: validated length, selectable character classes, random password.

pub mod cli;
pub mod clipboard;
pub mod exits;
pub mod form;
pub mod logging;
pub mod pass;
pub mod rng;
pub mod settings;
pub mod terminal;
pub mod tui;
