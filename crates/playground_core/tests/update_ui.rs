use playground_core::{
    update, AppState, EditorFocus, Effect, FileTab, Language, Msg, Screen,
};

#[test]
fn initial_view_defaults() {
    let view = AppState::new().view();

    assert_eq!(view.screen, Screen::Playground);
    assert_eq!(view.language, Language::Java);
    assert_eq!(view.source, "// Write your code here");
    assert_eq!(view.input, "");
    assert_eq!(view.output, "");
    assert!(view.run_enabled);
    assert_eq!(view.run_label, "Run Code");
    assert!(view.dirty);

    let selected: Vec<_> = view
        .languages
        .iter()
        .filter(|opt| opt.selected)
        .map(|opt| opt.label)
        .collect();
    assert_eq!(selected, vec!["Java"]);

    let titles: Vec<_> = view.tabs.iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["main.py", "code.java"]);
    assert!(view.tabs[0].active);
}

#[test]
fn selecting_language_marks_dirty() {
    let mut state = AppState::new();
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::LanguageSelected(Language::Python));
    assert!(effects.is_empty());
    assert_eq!(state.view().language, Language::Python);
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::LanguageSelected(Language::Python));
    assert!(!state.consume_dirty());
}

#[test]
fn editors_replace_buffers() {
    let (state, _) = update(AppState::new(), Msg::SourceChanged("def f():".to_string()));
    let (state, _) = update(state, Msg::InputChanged("1\n2\n".to_string()));
    assert_eq!(state.source(), "def f():");
    assert_eq!(state.input(), "1\n2\n");

    let (state, _) = update(state, Msg::SourceChanged("ünïcødé ✓".to_string()));
    assert_eq!(state.source(), "ünïcødé ✓");
}

#[test]
fn tab_selection_is_cosmetic() {
    let (state, _) = update(AppState::new(), Msg::LanguageSelected(Language::Python));
    let (state, _) = update(state, Msg::SourceChanged("print(1)".to_string()));

    let (on_main, main_effects) = update(state.clone(), Msg::RunClicked);
    let (state, _) = update(state, Msg::TabSelected(FileTab::CodeJava));
    assert_eq!(state.active_tab(), FileTab::CodeJava);
    assert!(state.view().tabs[1].active);
    let (on_java_tab, java_effects) = update(state, Msg::RunClicked);

    assert_eq!(main_effects, java_effects);
    assert_eq!(on_main.phase(), on_java_tab.phase());
    assert!(matches!(main_effects.as_slice(), [Effect::SubmitRun { .. }]));
}

#[test]
fn focus_toggles_between_editors() {
    let state = AppState::new();
    assert_eq!(state.focus(), EditorFocus::Source);
    let (state, _) = update(state, Msg::FocusNext);
    assert_eq!(state.focus(), EditorFocus::Input);
    let (state, _) = update(state, Msg::FocusNext);
    assert_eq!(state.focus(), EditorFocus::Source);
    assert_eq!(state.view().focus, EditorFocus::Source);
}

#[test]
fn switching_screens_keeps_in_flight_run() {
    let (state, _) = update(AppState::new(), Msg::SourceChanged("public class A {}".to_string()));
    let (state, effects) = update(state, Msg::RunClicked);
    assert_eq!(effects.len(), 1);

    let (state, _) = update(state, Msg::ScreenSelected(Screen::Profile));
    assert_eq!(state.screen(), Screen::Profile);
    assert!(state.is_running());

    let (state, _) = update(state, Msg::ScreenSelected(Screen::Playground));
    assert!(state.is_running());
    assert_eq!(state.source(), "public class A {}");
}
