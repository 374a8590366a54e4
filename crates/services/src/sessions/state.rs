use std::fmt;

/// Screen the presentation layer should render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Start,
    Playing,
    Result,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Start => "start",
            Screen::Playing => "playing",
            Screen::Result => "result",
        };
        f.write_str(name)
    }
}

/// Read-only snapshot of a quiz session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub screen: Screen,
    pub current_index: usize,
    pub score: usize,
    pub selected_option: Option<usize>,
    /// An answer is in and the deferred advance has not fired yet.
    pub locked: bool,
    /// Number of questions in the bank.
    pub total: usize,
}

impl SessionState {
    #[must_use]
    pub fn initial(total: usize) -> Self {
        Self {
            screen: Screen::Start,
            current_index: 0,
            score: 0,
            selected_option: None,
            locked: false,
            total,
        }
    }
}

/// Ticket for the advance scheduled by an accepted answer.
///
/// Only valid against the session generation and question it was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAdvance {
    pub(crate) generation: u64,
    pub(crate) question_index: usize,
}

impl PendingAdvance {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }
}

/// Why a command left the session untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ignored {
    /// The command is not valid on the current screen.
    WrongScreen,
    /// An answer for this question is already in.
    Locked,
    /// The choice does not name one of the options.
    InvalidChoice,
    /// The advance belongs to an earlier question or an earlier session.
    Stale,
    /// No tokio runtime is around to run the deferred advance.
    NoRuntime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(Ignored),
}

impl Transition {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Transition::Applied)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Recorded {
        correct: bool,
        advance: PendingAdvance,
    },
    Ignored(Ignored),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_recorded(self) -> bool {
        matches!(self, SubmitOutcome::Recorded { .. })
    }
}
