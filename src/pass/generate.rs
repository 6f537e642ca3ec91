//! Password generation.

use std::fmt;
use std::ops::Deref;

use zeroize::Zeroizing;

use super::charset::Alphabet;
use crate::rng::IndexSource;

/// A generated password. The buffer is zeroed when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

// Never print the value through Debug.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

/// Draw `length` characters from `alphabet`, one independent index per position.
pub fn generate<S: IndexSource>(alphabet: &Alphabet, length: usize, source: &mut S) -> Password {
    let mut out = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        out.push(alphabet.get(source.next_index(alphabet.len())));
    }
    tracing::trace!(length, pool = alphabet.len(), source = source.name(), "generated password");
    Password(out)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::pass::charset::{CharacterClass, ClassSet};
    use crate::rng::{RngIndex, ScriptedIndex};

    fn alphabet(classes: &[CharacterClass]) -> Alphabet {
        Alphabet::compose(classes.iter().copied().collect()).unwrap()
    }

    fn any_classes() -> impl Strategy<Value = ClassSet> {
        (1u8..16).prop_map(|bits| {
            CharacterClass::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .map(|(_, c)| c)
                .collect::<ClassSet>()
        })
    }

    proptest! {
        #[test]
        fn length_and_membership_hold(classes in any_classes(), length in 4usize..=26, seed in any::<u64>()) {
            let alphabet = Alphabet::compose(classes).unwrap();
            let pass = generate(&alphabet, length, &mut RngIndex::seeded(seed));
            prop_assert_eq!(pass.len(), length);
            prop_assert!(pass.chars().all(|c| alphabet.contains(c)));
        }
    }

    #[test]
    fn thousand_runs_stay_in_every_alphabet() {
        let mut src = RngIndex::os();
        for bits in 1u8..16 {
            let classes: ClassSet = CharacterClass::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .map(|(_, c)| c)
                .collect();
            let alphabet = Alphabet::compose(classes).unwrap();
            for _ in 0..1000 {
                let pass = generate(&alphabet, 12, &mut src);
                assert!(pass.chars().all(|c| alphabet.contains(c)));
            }
        }
    }

    #[test]
    fn lowercase_only_eight() {
        let pass = generate(
            &alphabet(&[CharacterClass::Lowercase]),
            8,
            &mut RngIndex::os(),
        );
        assert_eq!(pass.len(), 8);
        assert!(pass.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn uppercase_and_digits_four() {
        let pass = generate(
            &alphabet(&[CharacterClass::Uppercase, CharacterClass::Digit]),
            4,
            &mut RngIndex::os(),
        );
        assert_eq!(pass.len(), 4);
        assert!(
            pass.chars()
                .all(|c| "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".contains(c))
        );
    }

    #[test]
    fn last_index_selects_last_char() {
        let alphabet = alphabet(&[CharacterClass::Digit]);
        let last = alphabet.len() - 1;
        let mut src = ScriptedIndex::new(vec![last, 0]);
        let pass = generate(&alphabet, 4, &mut src);
        assert_eq!(pass.as_str(), "9090");
    }

    #[test]
    fn debug_hides_value() {
        let pass = generate(&alphabet(&[CharacterClass::Symbol]), 6, &mut RngIndex::seeded(3));
        let shown = format!("{pass:?}");
        assert_eq!(shown, "Password(<6 chars>)");
    }
}
