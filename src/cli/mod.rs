mod context;
mod flags;
pub mod prompts;
pub mod quiet;

pub use context::{CliError, Context};
pub use flags::CliFlags;

use crate::settings::Settings;

/// Run one-shot generation for the parsed flags.
pub fn run(flags: CliFlags) -> Result<(), CliError> {
    Context::new(flags).run()
}

/// Saved settings, or defaults when asked for or when loading fails.
pub fn load_settings(defaults: bool) -> Settings {
    if defaults {
        return Settings::default();
    }
    Settings::load_from_file().unwrap_or_else(|e| {
        prompts::settings_load_failed(&e);
        Settings::default()
    })
}
