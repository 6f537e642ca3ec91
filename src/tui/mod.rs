//! Interactive password form.

mod input;
mod text;

pub use input::{Command, Focus, interpret};
pub use text::{Status, render};

use crate::clipboard;
use crate::form::{Action, FormState, Phase};
use crate::rng::RngIndex;
use crate::settings::Settings;
use crate::terminal::{clear, read_key, reset_terminal};

/// Run the form until the user quits.
pub fn run(settings: &Settings) {
    let mut source = RngIndex::os();
    let mut state = FormState::new(settings.form_defaults());
    let mut focus = Focus::Length;
    let mut status: Option<Status> = None;

    loop {
        clear();
        render(&state, focus, status.take().as_ref());

        let key = match read_key() {
            Ok(k) => k,
            Err(e) => {
                tracing::warn!(error = %e, "terminal input failed");
                break;
            }
        };

        match interpret(key, focus, &state) {
            Command::Form(action) => {
                let submitted = action == Action::Submit;
                state = state.reduce(action, &mut source);
                if submitted && settings.to_clipboard && state.phase() == Phase::PasswordDisplayed {
                    status = Some(copy_password(&state));
                }
            }
            Command::Move(next) => focus = next,
            Command::Copy => status = Some(copy_password(&state)),
            Command::Quit => break,
            Command::Ignore => {}
        }
    }

    clear();
    reset_terminal();
}

fn copy_password(state: &FormState) -> Status {
    let Some(pass) = state.password() else {
        return Status::Error("Nothing to copy".to_string());
    };
    match clipboard::copy(pass.as_str()) {
        Ok(()) => Status::Info("Copied to clipboard".to_string()),
        Err(e) => Status::Error(format!("Clipboard error: {e}")),
    }
}
