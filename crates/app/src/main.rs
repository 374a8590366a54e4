use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::{QuestionBank, QuestionBankError};
use services::QuizLoopService;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const WINDOW_TITLE: &str = "Интеллект Шоу";

#[derive(Debug, Parser)]
#[command(name = "quiz-show", version, about = "Interactive multiple-choice quiz")]
struct Args {
    /// How long the correct answer stays on screen, in milliseconds
    #[arg(long, env = "QUIZ_REVEAL_DELAY_MS", default_value_t = 1200)]
    reveal_delay_ms: u64,

    /// Log filter, e.g. "info" or "services=debug"
    #[arg(long = "log", env = "RUST_LOG", default_value = "info")]
    log_filter: String,
}

impl Args {
    fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to load questions: {0}")]
    Questions(#[from] QuestionBankError),
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

fn init_tracing(filter: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    Ok(())
}

fn run(args: &Args) -> Result<(), AppError> {
    init_tracing(&args.log_filter)?;

    let bank = QuestionBank::builtin()?;
    let reveal_delay = args.reveal_delay();
    info!(questions = bank.len(), ?reveal_delay, "launching quiz");

    let quiz_loop = Arc::new(QuizLoopService::new(bank).with_reveal_delay(reveal_delay));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { quiz_loop });
    let context = build_app_context(&app);

    // Some window managers default new windows to always-on-top; keep it a normal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

// The quiz loop schedules its reveal timers on this runtime.
#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
