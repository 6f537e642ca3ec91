use passform::form::{Action, FormDefaults, FormError, FormState, LengthError, Phase};
use passform::form::{validate_length, validate_request};
use passform::pass::{self, Alphabet, CharacterClass, ClassSet};
use passform::rng::{IndexSource, RngIndex};

/// Always picks the highest index it is allowed to.
struct Highest;

impl IndexSource for Highest {
    fn next_index(&mut self, bound: usize) -> usize {
        bound - 1
    }

    fn name(&self) -> &'static str {
        "highest"
    }
}

fn submit(state: &FormState, source: &mut impl IndexSource) -> FormState {
    state.reduce(Action::Submit, source)
}

#[test]
fn every_class_combination_and_length() {
    let mut src = RngIndex::os();
    for bits in 1u8..16 {
        let classes: ClassSet = CharacterClass::ALL
            .into_iter()
            .enumerate()
            .filter(|(i, _)| bits & (1 << i) != 0)
            .map(|(_, c)| c)
            .collect();
        for length in 4..=26 {
            let (alphabet, n) = validate_request(Some(&length.to_string()), classes).unwrap();
            let password = pass::generate(&alphabet, n, &mut src);
            assert_eq!(password.len(), length);
            assert!(password.chars().all(|c| alphabet.contains(c)));
        }
    }
}

#[test]
fn rejected_lengths_explain_why() {
    for raw in ["0", "3", "27", "100", "abc", ""] {
        let err = validate_length(Some(raw)).unwrap_err();
        assert!(!err.to_string().is_empty(), "no reason for {raw:?}");
    }
    assert_eq!(validate_length(None), Err(LengthError::Missing));
}

#[test]
fn highest_index_never_leaves_alphabet() {
    let all: ClassSet = CharacterClass::ALL.into_iter().collect();
    let alphabet = Alphabet::compose(all).unwrap();
    let password = pass::generate(&alphabet, 26, &mut Highest);
    assert_eq!(password.as_str(), ",".repeat(26));
}

#[test]
fn full_session() {
    let mut src = RngIndex::seeded(2024);
    let state = FormState::default();
    assert_eq!(state.phase(), Phase::Idle);

    // no classes: submit is a no-op with an explicit reason
    let state = state
        .reduce(Action::EditLength("8".into()), &mut src)
        .reduce(Action::Toggle(CharacterClass::Lowercase), &mut src);
    let state = submit(&state, &mut src);
    assert_eq!(state.password(), None);
    assert_eq!(state.request().unwrap_err(), FormError::NoCharacterClass);

    let state = state
        .reduce(Action::Toggle(CharacterClass::Uppercase), &mut src)
        .reduce(Action::Toggle(CharacterClass::Digit), &mut src)
        .reduce(Action::EditLength("4".into()), &mut src);
    let state = submit(&state, &mut src);
    assert_eq!(state.phase(), Phase::PasswordDisplayed);
    let password = state.password().unwrap();
    assert_eq!(password.len(), 4);
    assert!(
        password
            .chars()
            .all(|c| "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".contains(c))
    );

    let reset = state.reduce(Action::Reset, &mut src);
    assert_eq!(reset.phase(), Phase::Idle);
    assert_eq!(reset, FormState::new(FormDefaults::default()));
    assert_eq!(reset.reduce(Action::Reset, &mut src), reset);
}
