use std::time::Duration;

use services::{DEFAULT_REVEAL_DELAY, Screen};

use crate::vm::QuizIntent;

use super::test_harness::setup_view_harness;

async fn wait_reveal() {
    tokio::time::sleep(DEFAULT_REVEAL_DELAY + Duration::from_millis(1)).await;
}

#[tokio::test(flavor = "current_thread")]
async fn start_screen_renders_title_and_begin_button() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("ИНТЕЛЛЕКТ"), "missing title in {html}");
    assert!(html.contains("НАЧАТЬ ИГРУ"), "missing begin button in {html}");
    assert!(!html.contains("ВОПРОС"), "unexpected question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn begin_intent_shows_first_question() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.dispatch(QuizIntent::Begin);
    let html = harness.render();
    assert!(html.contains("ВОПРОС 1 ИЗ 3"), "missing progress in {html}");
    assert!(
        html.contains("Какая планета самая большая в Солнечной системе?"),
        "missing question in {html}"
    );
    for option in ["Марс", "Юпитер", "Сатурн", "Венера"] {
        assert!(html.contains(option), "missing option {option} in {html}");
    }
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn wrong_answer_is_revealed_then_quiz_moves_on() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    harness.dispatch(QuizIntent::Begin);

    harness.dispatch(QuizIntent::Answer(0));
    let html = harness.render();
    assert!(html.contains("quiz-option--wrong"), "missing wrong mark in {html}");
    assert!(html.contains("quiz-option--correct"), "missing correct mark in {html}");

    // A second click during the reveal changes nothing.
    harness.dispatch(QuizIntent::Answer(1));
    assert_eq!(harness.quiz.state().score, 0);

    wait_reveal().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("ВОПРОС 2 ИЗ 3"), "quiz did not advance: {html}");
    assert!(!html.contains("quiz-option--wrong"), "stale reveal in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn full_run_shows_result_and_restart_returns_to_start() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    harness.dispatch(QuizIntent::Begin);

    for choice in [1, 0, 2] {
        harness.dispatch(QuizIntent::Answer(choice));
        wait_reveal().await;
        harness.drive_async().await;
    }

    assert_eq!(harness.quiz.state().screen, Screen::Result);
    let html = harness.render();
    assert!(html.contains("ФИНАЛ"), "missing result title in {html}");
    assert!(html.contains("2 из 3"), "missing score in {html}");

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("НАЧАТЬ ИГРУ"), "restart did not return to start: {html}");
    assert_eq!(harness.quiz.state().score, 0);
}

#[tokio::test(flavor = "current_thread")]
async fn external_transitions_reach_the_view() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    harness.drive_async().await;

    harness.quiz.begin();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("ВОПРОС 1 ИЗ 3"), "view missed begin: {html}");
}
