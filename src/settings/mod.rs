//! Saved form defaults.

mod file;

pub use file::default_path;

use std::path::Path;

use crate::form::FormDefaults;
use crate::pass::{CharacterClass, ClassSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Raw length the form starts with. Empty leaves the field blank.
    pub length: String,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }

    pub fn classes(&self) -> ClassSet {
        let mut set = ClassSet::empty();
        set.set(CharacterClass::Lowercase, self.lowercase);
        set.set(CharacterClass::Uppercase, self.uppercase);
        set.set(CharacterClass::Digit, self.digits);
        set.set(CharacterClass::Symbol, self.symbols);
        set
    }

    pub fn set_classes(&mut self, classes: ClassSet) {
        self.lowercase = classes.contains(CharacterClass::Lowercase);
        self.uppercase = classes.contains(CharacterClass::Uppercase);
        self.digits = classes.contains(CharacterClass::Digit);
        self.symbols = classes.contains(CharacterClass::Symbol);
    }

    pub fn form_defaults(&self) -> FormDefaults {
        FormDefaults {
            length: self.length.clone(),
            classes: self.classes(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: String::new(),
            lowercase: true,
            uppercase: false,
            digits: false,
            symbols: false,
            to_clipboard: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_form_default() {
        assert_eq!(Settings::default().form_defaults(), FormDefaults::default());
    }

    #[test]
    fn classes_round_trip() {
        let mut settings = Settings::default();
        let classes = ClassSet::only(CharacterClass::Symbol).with(CharacterClass::Uppercase);
        settings.set_classes(classes);
        assert!(!settings.lowercase);
        assert_eq!(settings.classes(), classes);
    }
}
