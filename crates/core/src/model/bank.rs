use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use super::question::{Question, QuestionDraft, QuestionError};

const BUILTIN_QUESTIONS: &str = include_str!("questions.toml");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("question bank is empty")]
    Empty,

    #[error("invalid question #{index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
struct BankDocument {
    #[serde(rename = "question", default)]
    questions: Vec<QuestionDraft>,
}

/// Ordered, non-empty, immutable list of questions for one quiz.
///
/// Clones share the underlying storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `QuestionBankError::Empty` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }
        Ok(Self {
            questions: questions.into(),
        })
    }

    /// Validate a list of drafts, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Question` for the first invalid draft,
    /// or `QuestionBankError::Empty` if there are none.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, QuestionBankError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| QuestionBankError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    /// Parse a TOML document made of `[[question]]` tables.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Parse` for malformed TOML, otherwise the
    /// errors of [`QuestionBank::from_drafts`].
    pub fn from_toml(source: &str) -> Result<Self, QuestionBankError> {
        let document: BankDocument = toml::from_str(source)?;
        Self::from_drafts(document.questions)
    }

    /// The question set bundled with the program.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled content itself is broken.
    pub fn builtin() -> Result<Self, QuestionBankError> {
        Self::from_toml(BUILTIN_QUESTIONS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    #[must_use]
    pub fn is_last(&self, index: usize) -> bool {
        index == self.last_index()
    }
}
