//! Character classes and alphabet composition.

use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+=-':><?/.,";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Composition order. Alphabets are always built in this order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Include Uppercase Letters",
            CharacterClass::Lowercase => "Include Lowercase Letters",
            CharacterClass::Digit => "Include Numbers",
            CharacterClass::Symbol => "Include Symbols",
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Uppercase => 0b0001,
            CharacterClass::Lowercase => 0b0010,
            CharacterClass::Digit => 0b0100,
            CharacterClass::Symbol => 0b1000,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digits",
            CharacterClass::Symbol => "symbols",
        };
        f.write_str(name)
    }
}

/// Set of enabled character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub fn only(class: CharacterClass) -> Self {
        ClassSet(class.bit())
    }

    pub fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.0 |= class.bit();
        } else {
            self.0 &= !class.bit();
        }
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.set(class, true);
        self
    }

    pub fn toggled(mut self, class: CharacterClass) -> Self {
        self.0 ^= class.bit();
        self
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled classes in composition order.
    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        iter.into_iter().fold(ClassSet::empty(), ClassSet::with)
    }
}

/// Non-empty pool of characters eligible for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Concatenate the literals of every enabled class.
    /// Returns `None` when no class is enabled.
    pub fn compose(classes: ClassSet) -> Option<Self> {
        let chars: Vec<char> = classes.iter().flat_map(|c| c.chars().chars()).collect();
        if chars.is_empty() {
            return None;
        }
        Some(Self { chars })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> char {
        self.chars[index]
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}
