//! Entropy estimate for a password drawn uniformly from an [`Alphabet`].

use std::fmt;

use super::Alphabet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub bits: f64,
    pub pool: usize,
}

impl Estimate {
    pub fn strength(&self) -> Strength {
        // bands in whole bits
        match self.bits.floor() as u32 {
            0..=35 => Strength::Weak,
            36..=59 => Strength::Fair,
            60..=127 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

/// `length * log2(|alphabet|)`. An alphabet is never empty.
pub fn estimate(alphabet: &Alphabet, length: usize) -> Estimate {
    let pool = alphabet.len();
    Estimate {
        bits: length as f64 * (pool as f64).log2(),
        pool,
    }
}
