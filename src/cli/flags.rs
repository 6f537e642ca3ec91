use clap::Parser;

use crate::pass::{CharacterClass, ClassSet};

/// Generate a random password from selectable character classes.
///
/// Run without arguments to open the interactive form.
#[derive(Debug, Parser)]
#[command(name = "passform", version)]
pub struct CliFlags {
    /// Password length (4 to 26)
    #[arg(short, long, value_name = "LEN", allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Include lowercase letters
    #[arg(short = 'L', long)]
    pub lowercase: bool,

    /// Include uppercase letters
    #[arg(short = 'U', long)]
    pub uppercase: bool,

    /// Include digits
    #[arg(short = 'D', long)]
    pub digits: bool,

    /// Include symbols
    #[arg(short = 'S', long)]
    pub symbols: bool,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub number: u32,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Suppress everything except passwords and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Ignore saved settings
    #[arg(short = 'd', long = "default")]
    pub defaults: bool,

    /// Save the given length and classes as form defaults, then exit
    #[arg(long)]
    pub save: bool,

    /// Deterministic output from a seed (not secure)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Print the entropy estimate to stderr
    #[arg(short, long)]
    pub entropy: bool,

    /// Open the interactive form
    #[arg(short, long)]
    pub interactive: bool,
}

impl CliFlags {
    /// Classes named on the command line, if any were.
    pub fn explicit_classes(&self) -> Option<ClassSet> {
        let mut set = ClassSet::empty();
        set.set(CharacterClass::Lowercase, self.lowercase);
        set.set(CharacterClass::Uppercase, self.uppercase);
        set.set(CharacterClass::Digit, self.digits);
        set.set(CharacterClass::Symbol, self.symbols);
        (!set.is_empty()).then_some(set)
    }
}
