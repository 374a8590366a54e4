#![forbid(unsafe_code)]

pub mod sessions;

pub use quiz_core::{Question, QuestionBank};

pub use sessions::{
    DEFAULT_REVEAL_DELAY, Ignored, PendingAdvance, QuizLoopService, QuizProgress, QuizSession,
    Screen, SessionState, SubmitOutcome, Transition,
};
