//! Password form: validation rule and state machine.

mod state;
mod validate;

pub use state::{Action, FormDefaults, FormState, Phase};
pub use validate::{FormError, LengthError, MAX_LENGTH, MIN_LENGTH, validate_length, validate_request};
