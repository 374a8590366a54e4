use serde::Deserialize;
use thiserror::Error;

/// Every question offers exactly this many answer choices.
pub const OPTION_COUNT: usize = 4;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question as it appears in bundled content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl QuestionDraft {
    pub fn new(
        text: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct: usize,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct,
        }
    }

    /// Check the draft and freeze it into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the prompt is blank.
    /// Returns `QuestionError::OptionCount` unless there are exactly four options.
    /// Returns `QuestionError::EmptyOption` if any option is blank.
    /// Returns `QuestionError::CorrectOutOfRange` if `correct` is not a valid option index.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }

        let len = self.options.len();
        let options: [String; OPTION_COUNT] = self
            .options
            .try_into()
            .map_err(|_| QuestionError::OptionCount { len })?;

        if let Some(index) = options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }

        if self.correct >= OPTION_COUNT {
            return Err(QuestionError::CorrectOutOfRange {
                index: self.correct,
            });
        }

        Ok(Question {
            text: self.text,
            options,
            correct_index: self.correct,
        })
    }
}

/// A multiple-choice question with exactly four options and one correct answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: [String; OPTION_COUNT],
    correct_index: usize,
}

impl Question {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Options in display order.
    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,

    #[error("expected 4 options, got {len}")]
    OptionCount { len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct answer index {index} is out of range")]
    CorrectOutOfRange { index: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft::new("Какой химический символ у золота?", ["Ag", "Fe", "Au", "Cu"], 2)
    }

    #[test]
    fn valid_draft_builds_question() {
        let question = draft().validate().unwrap();
        assert_eq!(question.text(), "Какой химический символ у золота?");
        assert_eq!(question.option(2), Some("Au"));
        assert_eq!(question.option(4), None);
        assert!(question.is_correct(2));
        assert!(!question.is_correct(0));
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = QuestionDraft { text: "  ".into(), ..draft() }
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn wrong_option_count_is_rejected() {
        let err = QuestionDraft::new("Q", ["a", "b", "c"], 0)
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionError::OptionCount { len: 3 });

        let err = QuestionDraft::new("Q", ["a", "b", "c", "d", "e"], 0)
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionError::OptionCount { len: 5 });
    }

    #[test]
    fn blank_option_is_rejected() {
        let err = QuestionDraft::new("Q", ["a", "", "c", "d"], 0)
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionError::EmptyOption { index: 1 });
    }

    #[test]
    fn correct_index_must_be_in_bounds() {
        let err = QuestionDraft { correct: 4, ..draft() }.validate().unwrap_err();
        assert_eq!(err, QuestionError::CorrectOutOfRange { index: 4 });
    }
}
