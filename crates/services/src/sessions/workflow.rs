use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use quiz_core::QuestionBank;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use super::progress::QuizProgress;
use super::service::QuizSession;
use super::state::{Ignored, PendingAdvance, SessionState, SubmitOutcome, Transition};

/// How long the correct answer stays on screen before the quiz moves on.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(1200);

/// Owns a `QuizSession` and runs its deferred advances on tokio.
///
/// Every mutation is published on a `watch` channel so the presentation
/// layer can re-render without polling.
#[derive(Clone)]
pub struct QuizLoopService {
    session: Arc<Mutex<QuizSession>>,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
    updates: Arc<watch::Sender<SessionState>>,
    reveal_delay: Duration,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        let session = QuizSession::new(bank);
        let (updates, _) = watch::channel(session.state());
        Self {
            session: Arc::new(Mutex::new(session)),
            pending: Arc::new(Mutex::new(None)),
            updates: Arc::new(updates),
            reveal_delay: DEFAULT_REVEAL_DELAY,
        }
    }

    #[must_use]
    pub fn with_reveal_delay(mut self, reveal_delay: Duration) -> Self {
        self.reveal_delay = reveal_delay;
        self
    }

    #[must_use]
    pub fn bank(&self) -> QuestionBank {
        lock(&self.session).bank().clone()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        lock(&self.session).state()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        lock(&self.session).progress()
    }

    /// Receiver that sees every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.updates.subscribe()
    }

    pub fn begin(&self) -> Transition {
        self.mutate(QuizSession::begin)
    }

    /// Submit an answer and schedule the advance after the reveal delay.
    ///
    /// Outside a tokio runtime the answer is rejected with
    /// `Ignored::NoRuntime` and the session is left as it was.
    pub fn submit_answer(&self, choice: usize) -> SubmitOutcome {
        let Ok(runtime) = Handle::try_current() else {
            warn!(choice, "answer rejected: no tokio runtime for the reveal timer");
            return SubmitOutcome::Ignored(Ignored::NoRuntime);
        };

        let outcome = {
            let mut session = lock(&self.session);
            let outcome = session.submit_answer(choice);
            if outcome.is_recorded() {
                self.updates.send_replace(session.state());
            }
            outcome
        };

        if let SubmitOutcome::Recorded { advance, .. } = outcome {
            self.schedule_advance(&runtime, advance);
        }
        outcome
    }

    /// Reset to the start screen and cancel any pending advance.
    pub fn restart(&self) -> Transition {
        let transition = self.mutate(QuizSession::restart);
        if transition.is_applied() {
            if let Some(handle) = lock(&self.pending).take() {
                handle.abort();
            }
        }
        transition
    }

    fn mutate(&self, op: impl FnOnce(&mut QuizSession) -> Transition) -> Transition {
        let mut session = lock(&self.session);
        let transition = op(&mut session);
        if transition.is_applied() {
            self.updates.send_replace(session.state());
        }
        transition
    }

    fn schedule_advance(&self, runtime: &Handle, advance: PendingAdvance) {
        let session = Arc::clone(&self.session);
        let updates = Arc::clone(&self.updates);
        let delay = self.reveal_delay;
        trace!(
            ?delay,
            question = advance.question_index(),
            generation = advance.generation(),
            "advance scheduled"
        );

        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let mut session = lock(&session);
            // A restart in the meantime makes this a no-op.
            if session.apply_advance(advance).is_applied() {
                updates.send_replace(session.state());
            }
        });
        *lock(&self.pending) = Some(handle);
    }
}

impl std::fmt::Debug for QuizLoopService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizLoopService")
            .field("reveal_delay", &self.reveal_delay)
            .finish_non_exhaustive()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
