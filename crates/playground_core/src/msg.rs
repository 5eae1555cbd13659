use crate::{FileTab, Language, RunId, Screen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a language in the selector.
    LanguageSelected(Language),
    /// Source editor content replaced.
    SourceChanged(String),
    /// Input editor content replaced.
    InputChanged(String),
    /// User switched file tab. Cosmetic only.
    TabSelected(FileTab),
    /// Navigation shell switched screens.
    ScreenSelected(Screen),
    /// Keyboard focus moves to the other editor.
    FocusNext,
    /// User pressed "Run Code".
    RunClicked,
    /// Engine reported the end of a run.
    RunFinished { run_id: RunId, outcome: RunOutcome },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for unmapped input.
    NoOp,
}

/// How a submitted run ended, as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// 2xx response; `output` is the `output` field when present.
    Completed { output: Option<String> },
    /// Non-2xx response; `error` is the `error` field when present.
    Rejected { error: Option<String> },
    /// The request never produced a usable response.
    TransportFailed { message: String },
}

pub const NO_OUTPUT: &str = "No output";
pub const GENERIC_FAILURE: &str = "Something went wrong";

impl RunOutcome {
    /// Text shown in the output pane for this outcome.
    pub fn display_text(&self) -> String {
        match self {
            RunOutcome::Completed { output } => match output.as_deref() {
                Some(text) if !text.is_empty() => text.to_string(),
                _ => NO_OUTPUT.to_string(),
            },
            RunOutcome::Rejected { error } => match error.as_deref() {
                Some(text) if !text.is_empty() => format!("Error: {text}"),
                _ => format!("Error: {GENERIC_FAILURE}"),
            },
            RunOutcome::TransportFailed { message } => format!("Error: {message}"),
        }
    }

    /// Short label for logs and the status line.
    pub fn kind_label(&self) -> &'static str {
        match self {
            RunOutcome::Completed { .. } => "completed",
            RunOutcome::Rejected { .. } => "rejected",
            RunOutcome::TransportFailed { .. } => "transport failure",
        }
    }
}

/// Output text for source that fails the language check.
pub fn validation_failure_message(language: Language) -> String {
    let name = language.display_name();
    format!(
        "Error: The code doesn't match the selected language ({name}). Please ensure the code is written in {name}."
    )
}
