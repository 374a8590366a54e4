#![forbid(unsafe_code)]

pub mod model;

pub use model::{Question, QuestionBank, QuestionBankError, QuestionDraft, QuestionError};
