mod progress;
mod service;
mod state;
mod workflow;

// Public API of the quiz session subsystem.
pub use progress::QuizProgress;
pub use service::QuizSession;
pub use state::{Ignored, PendingAdvance, Screen, SessionState, SubmitOutcome, Transition};
pub use workflow::{DEFAULT_REVEAL_DELAY, QuizLoopService};
