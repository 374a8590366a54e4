mod quiz_vm;

pub use quiz_vm::{
    OptionReveal, OptionVm, PlayingVm, QuizIntent, ResultVm, ScreenVm, dispatch_intent, map_screen,
    progress_label,
};
