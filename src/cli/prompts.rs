//! Centralized warning and notice messages for CLI output.

use super::quiet;
use crate::pass::entropy::Estimate;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Warning to stderr (yellow). Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr (red). Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn settings_load_failed(err: &std::io::Error) {
    warn(&format!("Failed to load settings, using defaults: {err}"));
}

pub fn settings_saved() {
    if !quiet::enabled() {
        eprintln!("Defaults saved.");
    }
}

pub fn clipboard_copied(count: u32) {
    if !quiet::enabled() {
        eprintln!("*** -COPIED {count} TO CLIPBOARD- ***");
    }
}

/// Clipboard errors are always shown; output falls back to stdout.
pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
    warn("Printing to terminal instead.");
}

pub fn entropy(estimate: &Estimate, source: &str) {
    if !quiet::enabled() {
        eprintln!(
            "Entropy: {:.1} bits ({}) • Charset: {} chars • Source: {source}",
            estimate.bits,
            estimate.strength(),
            estimate.pool
        );
    }
}

pub fn clipboard_batch_too_large(count: u32, max: u32) {
    warn(&format!(
        "{count} passwords exceed the clipboard limit of {max}; printing to terminal instead."
    ));
}

pub fn not_interactive() {
    error("The password form needs a terminal. Pass --length to generate without it.");
}
