use super::types::{ErrorState, RejectReason, SubmitOutcome};
use super::validate::{MIN_WORD_LEN, is_possible, normalize_answer};
use crate::session_rng::SessionRng;
use crate::words::{SpellChecker, WordList};

/// Root word used when the word list has no entries.
pub const FALLBACK_ROOT: &str = "Silkworm";

/// One player's game: a root word plus the words accepted so far.
///
/// All mutation goes through `start_game` and `submit`; the view layer
/// only reads state and renders it.
pub struct GameSession {
    word_list: WordList,
    spell_checker: Box<dyn SpellChecker>,
    locale: String,
    rng: SessionRng,
    root_word: String,
    used_words: Vec<String>,
    score: u32,
    pending_input: String,
    error: Option<ErrorState>,
}

impl GameSession {
    pub fn new(
        word_list: WordList,
        spell_checker: Box<dyn SpellChecker>,
        locale: &str,
        rng: SessionRng,
    ) -> Self {
        Self {
            word_list,
            spell_checker,
            locale: locale.to_string(),
            rng,
            root_word: String::new(),
            used_words: Vec::new(),
            score: 0,
            pending_input: String::new(),
            error: None,
        }
    }

    /// Picks a fresh root word. Used words and score survive a refresh:
    /// the score keeps accumulating across rounds within one session.
    pub fn start_game(&mut self) {
        self.root_word = self
            .word_list
            .pick(&mut self.rng)
            .unwrap_or(FALLBACK_ROOT)
            .to_string();
    }

    /// Runs the submitted text through the validation chain. A failure
    /// records an alert and leaves everything else untouched; success
    /// credits the word and clears the input buffer.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let answer = normalize_answer(raw);
        if answer.is_empty() {
            return SubmitOutcome::Ignored;
        }

        if let Err(reason) = self.validate(&answer) {
            self.error = Some(ErrorState::from_reason(reason, &self.root_word));
            return SubmitOutcome::Rejected(reason);
        }

        let points = answer.chars().count() as u32;
        self.used_words.insert(0, answer.clone());
        self.score += points;
        self.pending_input.clear();
        SubmitOutcome::Accepted {
            word: answer,
            points,
        }
    }

    fn validate(&self, answer: &str) -> Result<(), RejectReason> {
        if answer.chars().count() < MIN_WORD_LEN {
            return Err(RejectReason::TooShort);
        }
        if answer == self.root_word {
            return Err(RejectReason::EqualsRoot);
        }
        if !self.is_original(answer) {
            return Err(RejectReason::AlreadyUsed);
        }
        if !is_possible(answer, &self.root_word) {
            return Err(RejectReason::NotPossible);
        }
        if !self.spell_checker.is_valid(answer, &self.locale) {
            return Err(RejectReason::NotReal);
        }
        Ok(())
    }

    fn is_original(&self, answer: &str) -> bool {
        !self.used_words.iter().any(|used| used == answer)
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn pending_input_mut(&mut self) -> &mut String {
        &mut self.pending_input
    }

    pub fn error(&self) -> Option<&ErrorState> {
        self.error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AcceptAll;

    impl SpellChecker for AcceptAll {
        fn is_valid(&self, _word: &str, _locale: &str) -> bool {
            true
        }
    }

    struct RejectAll;

    impl SpellChecker for RejectAll {
        fn is_valid(&self, _word: &str, _locale: &str) -> bool {
            false
        }
    }

    fn session_with_root(root: &str) -> GameSession {
        let list = WordList::from_words(vec![root.to_string()]);
        let mut session =
            GameSession::new(list, Box::new(AcceptAll), "en", SessionRng::new(42));
        session.start_game();
        session
    }

    #[test]
    fn test_root_word_comes_from_list() {
        let list = WordList::from_words(vec![
            "silkworm".to_string(),
            "listen".to_string(),
            "retain".to_string(),
        ]);
        let mut session =
            GameSession::new(list, Box::new(AcceptAll), "en", SessionRng::new(1));
        session.start_game();
        assert!(["silkworm", "listen", "retain"].contains(&session.root_word()));
    }

    #[test]
    fn test_empty_list_falls_back_to_silkworm() {
        let list = WordList::from_words(vec![]);
        let mut session =
            GameSession::new(list, Box::new(AcceptAll), "en", SessionRng::new(1));
        session.start_game();
        assert_eq!(session.root_word(), FALLBACK_ROOT);
    }

    #[test]
    fn test_empty_submit_is_a_noop() {
        let mut session = session_with_root("silkworm");
        assert_eq!(session.submit(""), SubmitOutcome::Ignored);
        assert_eq!(session.submit("   \n"), SubmitOutcome::Ignored);
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_too_short_is_rejected() {
        let mut session = session_with_root("silkworm");
        let outcome = session.submit("si");
        assert_eq!(outcome, SubmitOutcome::Rejected(RejectReason::TooShort));
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
        assert_eq!(session.error().unwrap().title, "Word too short");
    }

    #[test]
    fn test_root_word_itself_is_rejected() {
        let mut session = session_with_root("silkworm");
        let outcome = session.submit("silkworm");
        assert_eq!(outcome, SubmitOutcome::Rejected(RejectReason::EqualsRoot));
    }

    #[test]
    fn test_accepted_word_scores_its_length() {
        let mut session = session_with_root("silkworm");
        let outcome = session.submit("silk");
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                word: "silk".to_string(),
                points: 4,
            }
        );
        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words(), ["silk".to_string()]);
    }

    #[test]
    fn test_submission_is_normalized() {
        let mut session = session_with_root("silkworm");
        let outcome = session.submit("  SILK \n");
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                word: "silk".to_string(),
                points: 4,
            }
        );
    }

    #[test]
    fn test_duplicate_word_is_rejected() {
        let mut session = session_with_root("silkworm");
        session.submit("silk");
        let outcome = session.submit("silk");
        assert_eq!(outcome, SubmitOutcome::Rejected(RejectReason::AlreadyUsed));
        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words().len(), 1);
    }

    #[test]
    fn test_letters_not_in_root_are_rejected() {
        let mut session = session_with_root("silkworm");
        let outcome = session.submit("silkworms");
        assert_eq!(outcome, SubmitOutcome::Rejected(RejectReason::NotPossible));
        assert!(session
            .error()
            .unwrap()
            .message
            .contains("silkworm"));
    }

    #[test]
    fn test_anagram_of_root_letters_is_accepted() {
        let mut session = session_with_root("listen");
        let outcome = session.submit("tinsel");
        assert!(matches!(outcome, SubmitOutcome::Accepted { .. }));
    }

    #[test]
    fn test_dictionary_miss_is_rejected() {
        let list = WordList::from_words(vec!["silkworm".to_string()]);
        let mut session =
            GameSession::new(list, Box::new(RejectAll), "en", SessionRng::new(42));
        session.start_game();
        let outcome = session.submit("silk");
        assert_eq!(outcome, SubmitOutcome::Rejected(RejectReason::NotReal));
        assert_eq!(session.error().unwrap().title, "Word not recognized");
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let mut session = session_with_root("silkworm");
        let first = session.submit("xyz");
        let second = session.submit("xyz");
        assert_eq!(first, second);
        assert_eq!(
            first,
            SubmitOutcome::Rejected(RejectReason::NotPossible)
        );
    }

    #[test]
    fn test_used_words_are_most_recent_first() {
        let mut session = session_with_root("silkworm");
        session.submit("silk");
        session.submit("worm");
        session.submit("slim");
        assert_eq!(
            session.used_words(),
            [
                "slim".to_string(),
                "worm".to_string(),
                "silk".to_string(),
            ]
        );
    }

    #[test]
    fn test_score_sums_accepted_lengths() {
        let mut session = session_with_root("silkworm");
        session.submit("silk");
        session.submit("worm");
        session.submit("si"); // rejected, no points
        session.submit("slim");
        assert_eq!(session.score(), 4 + 4 + 4);
    }

    #[test]
    fn test_pending_input_cleared_only_on_acceptance() {
        let mut session = session_with_root("silkworm");

        session.pending_input_mut().push_str("xyz");
        session.submit("xyz");
        assert_eq!(session.pending_input(), "xyz");

        session.pending_input_mut().clear();
        session.pending_input_mut().push_str("silk");
        session.submit("silk");
        assert_eq!(session.pending_input(), "");
    }

    #[test]
    fn test_new_failure_overwrites_previous_error() {
        let mut session = session_with_root("silkworm");
        session.submit("ab");
        assert_eq!(session.error().unwrap().title, "Word too short");
        session.submit("xyz");
        assert_eq!(session.error().unwrap().title, "Word not possible");
    }

    #[test]
    fn test_dismiss_error_clears_it() {
        let mut session = session_with_root("silkworm");
        session.submit("ab");
        assert!(session.error().is_some());
        session.dismiss_error();
        assert!(session.error().is_none());
    }

    #[test]
    fn test_rejection_does_not_touch_progress() {
        let mut session = session_with_root("silkworm");
        session.submit("silk");
        session.submit("silkworms");
        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words().len(), 1);
    }

    #[test]
    fn test_new_root_word_keeps_progress() {
        // A refresh deliberately replaces only the root word; used words
        // and score carry over across rounds.
        let mut session = session_with_root("silkworm");
        session.submit("silk");
        session.start_game();
        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words().len(), 1);
    }
}
