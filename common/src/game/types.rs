/// Why a submitted word was turned down. Checks run in this order and
/// the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    TooShort,
    EqualsRoot,
    AlreadyUsed,
    NotPossible,
    NotReal,
}

impl RejectReason {
    pub fn title(&self) -> &'static str {
        match self {
            RejectReason::TooShort => "Word too short",
            RejectReason::EqualsRoot => "Not allowed",
            RejectReason::AlreadyUsed => "Word used already",
            RejectReason::NotPossible => "Word not possible",
            RejectReason::NotReal => "Word not recognized",
        }
    }

    pub fn message(&self, root_word: &str) -> String {
        match self {
            RejectReason::TooShort => {
                "Words must be at least 3 letters long".to_string()
            }
            RejectReason::EqualsRoot => {
                "The answer cannot be the root word itself".to_string()
            }
            RejectReason::AlreadyUsed => "Be more original".to_string(),
            RejectReason::NotPossible => {
                format!("You can't spell that word from '{}'!", root_word)
            }
            RejectReason::NotReal => {
                "You can't just make them up, you know!".to_string()
            }
        }
    }
}

/// User-facing alert for a rejected submission. Overwritten by each new
/// failure, dismissed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    pub title: String,
    pub message: String,
}

impl ErrorState {
    pub fn from_reason(reason: RejectReason, root_word: &str) -> Self {
        Self {
            title: reason.title().to_string(),
            message: reason.message(root_word),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { word: String, points: u32 },
    /// Empty input after normalization. No error is shown.
    Ignored,
    Rejected(RejectReason),
}
