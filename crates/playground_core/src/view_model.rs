use crate::{EditorFocus, FileTab, Language, RunPhase, Screen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub language: Language,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub tab: FileTab,
    pub title: &'static str,
    pub active: bool,
}

/// Snapshot of everything the renderer draws for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub screen: Screen,
    pub language: Language,
    pub languages: Vec<LanguageOption>,
    pub tabs: Vec<TabView>,
    pub focus: EditorFocus,
    pub source: String,
    pub input: String,
    pub output: String,
    pub phase: RunPhase,
    pub run_enabled: bool,
    pub run_label: &'static str,
    pub status: String,
    pub dirty: bool,
}
