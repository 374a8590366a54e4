use quiz_core::QuestionBank;
use services::{QuizLoopService, QuizProgress, Screen, SessionState};
use tracing::debug;

/// User actions forwarded from the screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Begin,
    Answer(usize),
    Restart,
}

/// How an option is highlighted while the answer is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionReveal {
    Neutral,
    Correct,
    Wrong,
}

impl OptionReveal {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionReveal::Neutral => "quiz-option",
            OptionReveal::Correct => "quiz-option quiz-option--correct",
            OptionReveal::Wrong => "quiz-option quiz-option--wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub reveal: OptionReveal,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayingVm {
    pub progress_label: String,
    pub question: String,
    pub options: Vec<OptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub score: usize,
    pub total: usize,
    pub score_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Start,
    Playing(PlayingVm),
    Result(ResultVm),
}

/// Map a session snapshot to what the screens render.
#[must_use]
pub fn map_screen(state: &SessionState, bank: &QuestionBank) -> ScreenVm {
    match state.screen {
        Screen::Start => ScreenVm::Start,
        Screen::Playing => {
            // The session never reports an index outside the bank while playing.
            let Some(question) = bank.get(state.current_index) else {
                return ScreenVm::Start;
            };
            let options = question
                .options()
                .iter()
                .enumerate()
                .map(|(index, label)| OptionVm {
                    index,
                    label: label.clone(),
                    reveal: reveal_for(state, question.correct_index(), index),
                    enabled: !state.locked,
                })
                .collect();
            ScreenVm::Playing(PlayingVm {
                progress_label: progress_label(QuizProgress::of(state)),
                question: question.text().to_string(),
                options,
            })
        }
        Screen::Result => ScreenVm::Result(ResultVm {
            score: state.score,
            total: bank.len(),
            score_label: format!("{} из {}", state.score, bank.len()),
        }),
    }
}

/// "ВОПРОС n ИЗ N" header shown above the question.
#[must_use]
pub fn progress_label(progress: QuizProgress) -> String {
    format!("ВОПРОС {} ИЗ {}", progress.position, progress.total)
}

fn reveal_for(state: &SessionState, correct: usize, index: usize) -> OptionReveal {
    if !state.locked {
        OptionReveal::Neutral
    } else if index == correct {
        OptionReveal::Correct
    } else if state.selected_option == Some(index) {
        OptionReveal::Wrong
    } else {
        OptionReveal::Neutral
    }
}

/// Forward an intent to the quiz loop. Rejected intents are dropped.
pub fn dispatch_intent(quiz: &QuizLoopService, intent: QuizIntent) {
    debug!(?intent, "quiz intent");
    match intent {
        QuizIntent::Begin => {
            quiz.begin();
        }
        QuizIntent::Answer(choice) => {
            quiz.submit_answer(choice);
        }
        QuizIntent::Restart => {
            quiz.restart();
        }
    }
}
