use super::state::{Screen, SessionState};

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based position of the question on screen.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub score: usize,
}

impl QuizProgress {
    /// Progress as seen from a published snapshot.
    #[must_use]
    pub fn of(state: &SessionState) -> Self {
        let answered = match state.screen {
            Screen::Start => 0,
            Screen::Playing => state.current_index + usize::from(state.locked),
            Screen::Result => state.total,
        };
        Self {
            position: state.current_index + 1,
            total: state.total,
            answered,
            score: state.score,
        }
    }
}
