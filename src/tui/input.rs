//! Key handling for the password form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::{Action, FormState};
use crate::pass::CharacterClass;

/// Longest length text the field accepts. Anything this long is already out of range.
const LENGTH_FIELD_MAX: usize = 4;

/// Focusable form elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Length,
    Class(CharacterClass),
    Generate,
    Reset,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Length,
        Focus::Class(CharacterClass::Lowercase),
        Focus::Class(CharacterClass::Uppercase),
        Focus::Class(CharacterClass::Digit),
        Focus::Class(CharacterClass::Symbol),
        Focus::Generate,
        Focus::Reset,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let n = Self::ORDER.len();
        Self::ORDER[(self.position() + n - 1) % n]
    }

    /// Checkbox rows in display order.
    pub fn class_rows() -> impl Iterator<Item = CharacterClass> {
        Self::ORDER.into_iter().filter_map(|f| match f {
            Focus::Class(c) => Some(c),
            _ => None,
        })
    }
}

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Form(Action),
    Move(Focus),
    Copy,
    Quit,
    Ignore,
}

pub fn interpret(key: KeyEvent, focus: Focus, state: &FormState) -> Command {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return Command::Quit,
        KeyCode::Char('q') if ctrl => return Command::Quit,
        KeyCode::Esc => return Command::Quit,
        KeyCode::Tab | KeyCode::Down => return Command::Move(focus.next()),
        KeyCode::BackTab | KeyCode::Up => return Command::Move(focus.prev()),
        KeyCode::Char('c') if state.password().is_some() => return Command::Copy,
        _ => {}
    }

    match focus {
        Focus::Length => length_key(key, state),
        Focus::Class(class) => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Command::Form(Action::Toggle(class)),
            _ => Command::Ignore,
        },
        Focus::Generate => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter if state.can_submit() => {
                Command::Form(Action::Submit)
            }
            _ => Command::Ignore,
        },
        Focus::Reset => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Command::Form(Action::Reset),
            _ => Command::Ignore,
        },
    }
}

fn length_key(key: KeyEvent, state: &FormState) -> Command {
    let current = state.length_input();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let edited = match key.code {
        KeyCode::Char('u') if ctrl => String::new(),
        KeyCode::Char(c) if c.is_ascii_digit() && current.len() < LENGTH_FIELD_MAX => {
            format!("{current}{c}")
        }
        KeyCode::Backspace => {
            let mut s = current.to_string();
            s.pop();
            s
        }
        KeyCode::Delete => String::new(),
        // Enter in the field submits the form, valid or not, so errors surface.
        KeyCode::Enter => return Command::Form(Action::Submit),
        _ => return Command::Ignore,
    };
    Command::Form(Action::EditLength(edited))
}
