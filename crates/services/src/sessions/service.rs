use std::fmt;

use quiz_core::{Question, QuestionBank};
use quiz_core::model::OPTION_COUNT;
use tracing::{debug, info};

use super::progress::QuizProgress;
use super::state::{Ignored, PendingAdvance, Screen, SessionState, SubmitOutcome, Transition};

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Quiz state machine: `Start -> Playing -> Result`, with a locked sub-state
/// while an answer is being revealed.
///
/// The session is purely synchronous. Accepting an answer hands out a
/// [`PendingAdvance`]; whoever owns the timer feeds it back through
/// [`QuizSession::apply_advance`] once the reveal delay has elapsed.
/// `restart` bumps the generation so tickets issued before it are dropped.
pub struct QuizSession {
    bank: QuestionBank,
    state: SessionState,
    generation: u64,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        let state = SessionState::initial(bank.len());
        Self {
            bank,
            state,
            generation: 0,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Snapshot of the current state for rendering.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Question on screen; `None` outside of `Playing`.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.state.screen {
            Screen::Playing => self.bank.get(self.state.current_index),
            Screen::Start | Screen::Result => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::of(&self.state)
    }

    /// Leave the start screen and show the first question.
    pub fn begin(&mut self) -> Transition {
        if self.state.screen != Screen::Start {
            return self.ignore("begin", Ignored::WrongScreen);
        }

        self.state = SessionState {
            screen: Screen::Playing,
            ..SessionState::initial(self.bank.len())
        };
        info!(total = self.bank.len(), "quiz started");
        Transition::Applied
    }

    /// Record an answer for the current question and lock further input.
    ///
    /// The session stays on the same question until the returned advance is
    /// applied.
    pub fn submit_answer(&mut self, choice: usize) -> SubmitOutcome {
        if self.state.screen != Screen::Playing {
            return SubmitOutcome::Ignored(self.ignore_answer(choice, Ignored::WrongScreen));
        }
        if self.state.locked {
            return SubmitOutcome::Ignored(self.ignore_answer(choice, Ignored::Locked));
        }
        if choice >= OPTION_COUNT {
            return SubmitOutcome::Ignored(self.ignore_answer(choice, Ignored::InvalidChoice));
        }

        let Some(question) = self.bank.get(self.state.current_index) else {
            return SubmitOutcome::Ignored(self.ignore_answer(choice, Ignored::WrongScreen));
        };
        let correct = question.is_correct(choice);

        self.state.selected_option = Some(choice);
        self.state.locked = true;
        if correct {
            self.state.score += 1;
        }
        debug!(
            question = self.state.current_index,
            choice,
            correct,
            score = self.state.score,
            "answer recorded"
        );

        SubmitOutcome::Recorded {
            correct,
            advance: PendingAdvance {
                generation: self.generation,
                question_index: self.state.current_index,
            },
        }
    }

    /// Run the deferred advance for an accepted answer.
    ///
    /// Moves to the next question, or to `Result` after the last one. This is
    /// the only way the lock is released.
    pub fn apply_advance(&mut self, advance: PendingAdvance) -> Transition {
        let current = advance.generation == self.generation
            && advance.question_index == self.state.current_index
            && self.state.screen == Screen::Playing
            && self.state.locked;
        if !current {
            return self.ignore("advance", Ignored::Stale);
        }

        if self.bank.is_last(self.state.current_index) {
            self.state.screen = Screen::Result;
            info!(
                score = self.state.score,
                total = self.bank.len(),
                "quiz finished"
            );
        } else {
            self.state.current_index += 1;
            self.state.selected_option = None;
            self.state.locked = false;
            debug!(question = self.state.current_index, "next question");
        }
        Transition::Applied
    }

    /// Throw the session away and return to the start screen.
    ///
    /// Accepted from `Playing` as well as `Result`, so a quiz can be abandoned
    /// while an answer is still being revealed. Any advance issued before the
    /// restart becomes stale.
    pub fn restart(&mut self) -> Transition {
        if self.state.screen == Screen::Start {
            return self.ignore("restart", Ignored::WrongScreen);
        }

        self.generation = self.generation.wrapping_add(1);
        self.state = SessionState::initial(self.bank.len());
        info!(generation = self.generation, "quiz restarted");
        Transition::Applied
    }

    fn ignore(&self, command: &'static str, reason: Ignored) -> Transition {
        debug!(command, ?reason, screen = %self.state.screen, "command ignored");
        Transition::Ignored(reason)
    }

    fn ignore_answer(&self, choice: usize, reason: Ignored) -> Ignored {
        debug!(choice, ?reason, screen = %self.state.screen, "answer ignored");
        reason
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("bank_len", &self.bank.len())
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
