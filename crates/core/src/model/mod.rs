mod bank;
mod question;

pub use bank::{QuestionBank, QuestionBankError};
pub use question::{OPTION_COUNT, Question, QuestionDraft, QuestionError};
