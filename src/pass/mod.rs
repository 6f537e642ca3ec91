//! Password generation from character classes.

pub mod charset;
pub mod entropy;
mod generate;

pub use charset::{Alphabet, CharacterClass, ClassSet};
pub use generate::{Password, generate};
