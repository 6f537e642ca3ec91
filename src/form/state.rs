//! Form state and its reducer.
//!
//! `FormState` is a plain value. Every user interaction becomes an [`Action`]
//! and [`FormState::reduce`] returns the next state; nothing mutates in place.

use super::validate::{FormError, LengthError, validate_length, validate_request};
use crate::pass::{self, Alphabet, CharacterClass, ClassSet, Password};
use crate::rng::IndexSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    EditLength(String),
    Toggle(CharacterClass),
    Submit,
    Reset,
}

/// Values a fresh or reset form starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    pub length: String,
    pub classes: ClassSet,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            length: String::new(),
            classes: ClassSet::only(CharacterClass::Lowercase),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PasswordDisplayed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    defaults: FormDefaults,
    length_input: String,
    touched: bool,
    classes: ClassSet,
    password: Option<Password>,
    drawn_from: Option<Alphabet>,
}

impl FormState {
    pub fn new(defaults: FormDefaults) -> Self {
        Self {
            length_input: defaults.length.clone(),
            touched: false,
            classes: defaults.classes,
            password: None,
            drawn_from: None,
            defaults,
        }
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    /// Alphabet the displayed password was drawn from.
    pub fn drawn_from(&self) -> Option<&Alphabet> {
        self.drawn_from.as_ref()
    }

    pub fn phase(&self) -> Phase {
        match self.password {
            Some(_) => Phase::PasswordDisplayed,
            None => Phase::Idle,
        }
    }

    pub fn length_error(&self) -> Option<LengthError> {
        validate_length(Some(&self.length_input)).err()
    }

    /// Length error, but only once the field has been touched.
    pub fn visible_length_error(&self) -> Option<LengthError> {
        if self.touched { self.length_error() } else { None }
    }

    pub fn class_error(&self) -> Option<FormError> {
        self.classes
            .is_empty()
            .then_some(FormError::NoCharacterClass)
    }

    /// Validated request, or the first reason generation is blocked.
    pub fn request(&self) -> Result<(Alphabet, usize), FormError> {
        validate_request(Some(&self.length_input), self.classes)
    }

    pub fn can_submit(&self) -> bool {
        self.request().is_ok()
    }

    pub fn reduce<S: IndexSource>(&self, action: Action, source: &mut S) -> FormState {
        let mut next = self.clone();
        match action {
            Action::EditLength(raw) => {
                next.length_input = raw;
                next.touched = true;
            }
            Action::Toggle(class) => {
                next.classes = self.classes.toggled(class);
            }
            Action::Submit => {
                next.touched = true;
                match self.request() {
                    Ok((alphabet, length)) => {
                        next.password = Some(pass::generate(&alphabet, length, source));
                        tracing::debug!(length, pool = alphabet.len(), "form submitted");
                        next.drawn_from = Some(alphabet);
                    }
                    Err(e) => tracing::debug!(reason = %e, "submit blocked"),
                }
            }
            Action::Reset => {
                next = FormState::new(self.defaults.clone());
                tracing::debug!("form reset");
            }
        }
        next
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormDefaults::default())
    }
}
