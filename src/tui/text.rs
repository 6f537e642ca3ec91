use super::Focus;
use crate::form::{FormState, MAX_LENGTH, MIN_LENGTH};
use crate::pass::CharacterClass;
use crate::pass::entropy::{self, Estimate};
use crate::terminal::{
    BOLD, DIM, GREEN, RED, RESET, REVERSE, box_bottom, box_line, box_line_center, box_line_split,
    box_rule, box_top, flush,
};

/// One-line notice under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

fn highlight(text: &str, focused: bool) -> String {
    if focused {
        format!("{REVERSE}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn checkbox(class: CharacterClass, checked: bool, focused: bool) -> String {
    let mark = if checked { "[x]" } else { "[ ]" };
    highlight(&format!("{mark} {}", class.label()), focused)
}

pub fn length_field(input: &str, focused: bool) -> String {
    let shown = if input.is_empty() && !focused {
        format!("{DIM}  8 {RESET}")
    } else {
        format!("{input:>3}{}", if focused { "_" } else { " " })
    };
    format!("[{}]", highlight(&shown, focused))
}

pub fn button(label: &str, enabled: bool, focused: bool) -> String {
    let text = format!("[ {label} ]");
    if !enabled {
        let marker = if focused { "›" } else { " " };
        format!("{marker}{DIM}{text}{RESET}")
    } else if focused {
        format!(" {REVERSE}{BOLD}{text}{RESET}")
    } else {
        format!(" {BOLD}{text}{RESET}")
    }
}

pub fn render(state: &FormState, focus: Focus, status: Option<&Status>) {
    box_top("Password Generator");
    box_line("");

    box_line_split(
        "Password Length",
        &length_field(state.length_input(), focus == Focus::Length),
    );
    match state.visible_length_error() {
        Some(err) => box_line(&format!("{RED}{err}{RESET}")),
        None => box_line(&format!("{DIM}{MIN_LENGTH} to {MAX_LENGTH} characters{RESET}")),
    }
    box_line("");

    for class in Focus::class_rows() {
        box_line(&checkbox(
            class,
            state.classes().contains(class),
            focus == Focus::Class(class),
        ));
    }
    if let Some(err) = state.class_error() {
        box_line(&format!("{RED}{err}{RESET}"));
    } else {
        box_line("");
    }

    box_rule();
    box_line_split(
        &button("Generate Password", state.can_submit(), focus == Focus::Generate),
        &button("Reset", true, focus == Focus::Reset),
    );
    box_bottom();

    if let Some(pass) = state.password() {
        println!();
        box_top("Password");
        box_line("");
        box_line_center(&format!("{BOLD}{}{RESET}", pass.as_str()));
        box_line("");
        if let Some(alphabet) = state.drawn_from() {
            box_line_center(&strength_line(&entropy::estimate(alphabet, pass.len())));
        }
        box_bottom();
    }

    println!();
    match status {
        Some(Status::Info(msg)) => println!("{GREEN}{msg}{RESET}"),
        Some(Status::Error(msg)) => println!("{RED}{msg}{RESET}"),
        None => println!(),
    }
    println!("{DIM}Tab/↑↓ move • Space toggle • Enter activate • c copy • Esc quit{RESET}");
    flush();
}

fn strength_line(estimate: &Estimate) -> String {
    format!(
        "{DIM}{:.1} bits ({}) • {} char pool{RESET}",
        estimate.bits,
        estimate.strength(),
        estimate.pool
    )
}
