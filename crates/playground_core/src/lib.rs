//! Playground core: pure state machine and view-model helpers.
mod effect;
mod language;
mod msg;
pub mod profile;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, RunRequest};
pub use language::Language;
pub use msg::{validation_failure_message, Msg, RunOutcome, GENERIC_FAILURE, NO_OUTPUT};
pub use state::{AppState, EditorFocus, FileTab, RunId, RunPhase, Screen, DEFAULT_SOURCE};
pub use update::update;
pub use view_model::{AppViewModel, LanguageOption, TabView};
