use crate::view_model::{AppViewModel, LanguageOption, TabView};
use crate::{Language, RunRequest};

pub type RunId = u64;

/// Initial content of the source editor.
pub const DEFAULT_SOURCE: &str = "// Write your code here";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    /// A run finished and its result is on screen.
    Done,
}

/// File tabs shown above the editor. Only one source buffer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileTab {
    #[default]
    MainPy,
    CodeJava,
}

impl FileTab {
    pub const ALL: [FileTab; 2] = [FileTab::MainPy, FileTab::CodeJava];

    pub fn title(self) -> &'static str {
        match self {
            FileTab::MainPy => "main.py",
            FileTab::CodeJava => "code.java",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FileTab::MainPy => FileTab::CodeJava,
            FileTab::CodeJava => FileTab::MainPy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Playground,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Playground, Screen::Profile];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Playground => "Playground",
            Screen::Profile => "Profile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFocus {
    #[default]
    Source,
    Input,
}

impl EditorFocus {
    pub fn other(self) -> Self {
        match self {
            EditorFocus::Source => EditorFocus::Input,
            EditorFocus::Input => EditorFocus::Source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    screen: Screen,
    language: Language,
    active_tab: FileTab,
    focus: EditorFocus,
    source: String,
    input: String,
    output: String,
    phase: RunPhase,
    in_flight: Option<RunId>,
    next_run_id: RunId,
    last_outcome: Option<&'static str>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            language: Language::default(),
            active_tab: FileTab::default(),
            focus: EditorFocus::default(),
            source: DEFAULT_SOURCE.to_string(),
            input: String::new(),
            output: String::new(),
            phase: RunPhase::Idle,
            in_flight: None,
            next_run_id: 1,
            last_outcome: None,
            dirty: true,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn active_tab(&self) -> FileTab {
        self.active_tab
    }

    pub fn focus(&self) -> EditorFocus {
        self.focus
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    pub fn in_flight(&self) -> Option<RunId> {
        self.in_flight
    }

    pub fn view(&self) -> AppViewModel {
        let running = self.is_running();
        AppViewModel {
            screen: self.screen,
            language: self.language,
            languages: Language::ALL
                .iter()
                .map(|&language| LanguageOption {
                    language,
                    label: language.display_name(),
                    selected: language == self.language,
                })
                .collect(),
            tabs: FileTab::ALL
                .iter()
                .map(|&tab| TabView {
                    tab,
                    title: tab.title(),
                    active: tab == self.active_tab,
                })
                .collect(),
            focus: self.focus,
            source: self.source.clone(),
            input: self.input.clone(),
            output: self.output.clone(),
            phase: self.phase,
            run_enabled: !running,
            run_label: if running { "Running..." } else { "Run Code" },
            status: self.status_text(),
            dirty: self.dirty,
        }
    }

    fn status_text(&self) -> String {
        match (self.phase, self.last_outcome) {
            (RunPhase::Running, _) => format!(
                "Running #{} ({})",
                self.in_flight.unwrap_or_default(),
                self.language.display_name()
            ),
            (_, Some(kind)) => format!("Last run: {kind}"),
            (_, None) => "Ready".to_string(),
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            self.screen = screen;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_language(&mut self, language: Language) {
        if self.language != language {
            self.language = language;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_active_tab(&mut self, tab: FileTab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_focus(&mut self, focus: EditorFocus) {
        if self.focus != focus {
            self.focus = focus;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_source(&mut self, source: String) {
        if self.source != source {
            self.source = source;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.mark_dirty();
        }
    }

    /// Settles a rejected submission without touching the network.
    pub(crate) fn reject_run(&mut self, message: String) {
        self.output = message;
        self.phase = RunPhase::Idle;
        self.last_outcome = Some("validation failed");
        self.mark_dirty();
    }

    /// Moves to Running and returns the request for the new run.
    pub(crate) fn begin_run(&mut self) -> (RunId, RunRequest) {
        let run_id = self.next_run_id;
        self.next_run_id += 1;
        self.in_flight = Some(run_id);
        self.phase = RunPhase::Running;
        self.output.clear();
        self.mark_dirty();
        let request = RunRequest {
            code: self.source.clone(),
            language: self.language,
            input: self.input.clone(),
        };
        (run_id, request)
    }

    /// Applies the terminal step of a run. Returns false for stale run ids.
    pub(crate) fn finish_run(&mut self, run_id: RunId, output: String, kind: &'static str) -> bool {
        if self.in_flight != Some(run_id) {
            return false;
        }
        self.in_flight = None;
        self.output = output;
        self.phase = RunPhase::Done;
        self.last_outcome = Some(kind);
        self.mark_dirty();
        true
    }
}
