mod session;
mod types;
pub mod validate;

pub use session::GameSession;
pub use types::{ErrorState, RejectReason, SubmitOutcome};
