use game_core::{DEFAULT_MAX_GUESSES, Dictionary, GameSession, GuessOutcome};
use game_types::{GameStatus, Score, Word};

/// Creates a test dictionary with a known set of four-letter words
pub fn create_test_dictionary() -> Dictionary {
    let word_list = "code\ndove\nrain\nmist\nglow\nfern\nharp\nlock\nwasp\nclip\ndusk\nfrog";
    Dictionary::from_word_list(word_list, 4)
}

/// Creates a session with a fixed target word
pub fn create_session_with_target(target: &str) -> GameSession {
    GameSession::new(Word::new(target), DEFAULT_MAX_GUESSES)
}

/// Submits a guess that is expected to be accepted and returns its
/// score and the resulting status
pub fn submit_accepted(
    session: &mut GameSession,
    dictionary: &Dictionary,
    word: &str,
) -> (Score, GameStatus) {
    match session.submit_guess(word, dictionary).unwrap() {
        GuessOutcome::Accepted { record, status, .. } => (record.score, status),
        GuessOutcome::Rejected(err) => panic!("Guess {:?} unexpectedly rejected: {}", word, err),
    }
}

/// Asserts a guess is rejected and the session is left untouched
pub fn assert_rejected(session: &mut GameSession, dictionary: &Dictionary, word: &str) {
    let history_before = session.history().len();
    let status_before = session.status();

    match session.submit_guess(word, dictionary).unwrap() {
        GuessOutcome::Rejected(_) => {}
        GuessOutcome::Accepted { .. } => panic!("Guess {:?} unexpectedly accepted", word),
    }

    assert_eq!(session.history().len(), history_before);
    assert_eq!(session.status(), status_before);
}
