use dioxus::prelude::*;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use crate::context::AppContext;
use crate::vm::{OptionVm, PlayingVm, QuizIntent, ResultVm, ScreenVm, dispatch_intent, map_screen};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz_loop();
    let bank = use_hook({
        let quiz = quiz.clone();
        move || quiz.bank()
    });
    let state = use_signal({
        let quiz = quiz.clone();
        move || quiz.state()
    });

    // Mirror snapshots published by the quiz loop, including the deferred
    // advance that fires without any user input.
    use_future({
        let quiz = quiz.clone();
        move || {
            let quiz = quiz.clone();
            async move {
                let mut state = state;
                let mut updates = quiz.subscribe();
                let current = *updates.borrow_and_update();
                state.set(current);
                while updates.changed().await.is_ok() {
                    let snapshot = *updates.borrow_and_update();
                    state.set(snapshot);
                }
            }
        }
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut state = state;
        dispatch_intent(&quiz, intent);
        state.set(quiz.state());
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let screen = map_screen(&state.read(), &bank);

    rsx! {
        div { class: "quiz",
            match screen {
                ScreenVm::Start => rsx! {
                    StartScreen { on_intent: dispatch }
                },
                ScreenVm::Playing(vm) => rsx! {
                    PlayingScreen { vm, on_intent: dispatch }
                },
                ScreenVm::Result(vm) => rsx! {
                    ResultScreen { vm, on_intent: dispatch }
                },
            }
        }
    }
}

#[component]
fn StartScreen(on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-card quiz-start",
            h1 { class: "quiz-title",
                "ИНТЕЛЛЕКТ"
                br {}
                span { class: "quiz-title__accent", "ШОУ" }
            }
            p { class: "quiz-desc", "Проверь свои знания в нашей викторине." }
            button {
                class: "quiz-primary",
                id: "quiz-begin",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Begin),
                "НАЧАТЬ ИГРУ"
            }
        }
    }
}

#[component]
fn PlayingScreen(vm: PlayingVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-play",
            p { class: "quiz-progress", "{vm.progress_label}" }
            h2 { class: "quiz-question", "{vm.question}" }
            div { class: "quiz-options",
                for option in vm.options.iter().cloned() {
                    OptionButton { key: "{option.index}", option, on_intent }
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = option.index;
    rsx! {
        button {
            class: "{option.reveal.class()}",
            id: "quiz-option-{index}",
            r#type: "button",
            disabled: !option.enabled,
            onclick: move |_| on_intent.call(QuizIntent::Answer(index)),
            "{option.label}"
        }
    }
}

#[component]
fn ResultScreen(vm: ResultVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-card quiz-result",
            h2 { class: "quiz-title", "ФИНАЛ" }
            p { class: "quiz-desc",
                "Ваш результат: "
                br {}
                strong { "{vm.score_label}" }
            }
            button {
                class: "quiz-primary",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "ЗАНОВО"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
