pub mod game;
pub mod logger;
pub mod session_rng;
pub mod words;

pub use game::{ErrorState, GameSession, RejectReason, SubmitOutcome};
pub use session_rng::SessionRng;
pub use words::{FileDictionary, SpellChecker, WordList, WordsError};
