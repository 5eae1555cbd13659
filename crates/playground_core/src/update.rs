use playground_logging::{pg_debug, pg_info};

use crate::{validation_failure_message, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LanguageSelected(language) => {
            pg_debug!("language selected: {}", language);
            state.set_language(language);
            Vec::new()
        }
        Msg::SourceChanged(source) => {
            state.set_source(source);
            Vec::new()
        }
        Msg::InputChanged(input) => {
            state.set_input(input);
            Vec::new()
        }
        Msg::TabSelected(tab) => {
            // Tabs never feed the request; there is a single source buffer.
            state.set_active_tab(tab);
            Vec::new()
        }
        Msg::ScreenSelected(screen) => {
            state.set_screen(screen);
            Vec::new()
        }
        Msg::FocusNext => {
            let next = state.focus().other();
            state.set_focus(next);
            Vec::new()
        }
        Msg::RunClicked => {
            if state.is_running() {
                return (state, Vec::new());
            }
            let language = state.language();
            if !language.matches_source(state.source()) {
                pg_info!("run rejected: source does not look like {}", language);
                state.reject_run(validation_failure_message(language));
                return (state, Vec::new());
            }
            let (run_id, request) = state.begin_run();
            vec![Effect::SubmitRun { run_id, request }]
        }
        Msg::RunFinished { run_id, outcome } => {
            let kind = outcome.kind_label();
            if !state.finish_run(run_id, outcome.display_text(), kind) {
                pg_debug!("ignoring result for stale run #{}", run_id);
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
