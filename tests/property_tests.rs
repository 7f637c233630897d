//! Invariants of the guessing state machine, checked over random words and
//! random key sequences.

use hangterm::games::hangman::{GameState, Status, WordEntry};
use proptest::prelude::*;

fn state_for(word: &str) -> GameState {
    GameState::with_entry("Test", &WordEntry::new(word, "hint")).unwrap()
}

fn all_letters_guessed(state: &GameState) -> bool {
    state.word().chars().all(|c| state.guessed().contains(&c))
}

proptest! {
    #[test]
    fn wrong_count_matches_guesses(
        word in "[a-z]{1,12}",
        guesses in prop::collection::vec(any::<char>(), 0..40),
    ) {
        let mut state = state_for(&word);

        for c in guesses {
            state.guess_char(c);
            state.evaluate_outcome();

            let misses = state.guessed().iter().filter(|l| !state.word().contains(**l)).count();
            prop_assert_eq!(usize::from(state.wrong_guesses()), misses);
            prop_assert!(state.guessed().iter().all(|l| l.is_ascii_lowercase()));
        }
    }

    #[test]
    fn status_follows_guesses(word in "[a-z]{1,12}", guesses in "[a-zA-Z0-9 ]{0,40}") {
        let mut state = state_for(&word);

        for c in guesses.chars() {
            state.guess_char(c);
            state.evaluate_outcome();

            let complete = all_letters_guessed(&state);
            prop_assert_eq!(state.status() == Status::Won, complete);
            prop_assert_eq!(
                state.status() == Status::Lost,
                state.wrong_guesses() >= state.max_attempts() && !complete
            );
            prop_assert_eq!(state.message().is_empty(), state.status() == Status::InProgress);
        }
    }

    #[test]
    fn repeat_guess_is_noop(word in "[a-z]{1,12}", prefix in "[a-z]{0,8}", c in any::<char>()) {
        let mut state = state_for(&word);
        for p in prefix.chars() {
            state.guess_char(p);
            state.evaluate_outcome();
        }

        state.guess_char(c);
        state.evaluate_outcome();
        let once = state.clone();

        prop_assert!(!state.guess_char(c));
        prop_assert!(!state.guess_char(c.to_ascii_uppercase()));
        state.evaluate_outcome();
        prop_assert_eq!(state, once);
    }

    #[test]
    fn mask_reveals_exactly_guessed(word in "[a-z]{1,12}", guesses in "[a-z]{0,26}") {
        let mut state = state_for(&word);
        for c in guesses.chars() {
            state.guess_char(c);
            state.evaluate_outcome();
        }

        let mask = state.mask();
        prop_assert_eq!(mask.len(), word.len());
        for (m, letter) in mask.iter().zip(word.chars()) {
            prop_assert_eq!(m.letter, letter);
            prop_assert_eq!(m.revealed, state.guessed().contains(&letter));
        }
        let snapshot = state.snapshot();
        prop_assert!(snapshot.stage <= snapshot.max_attempts);
        let remaining = state.max_attempts().saturating_sub(state.wrong_guesses());
        prop_assert_eq!(snapshot.remaining_attempts, remaining);
    }
}
