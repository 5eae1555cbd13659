use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use playground_core::{AppState, EditorFocus, Msg, Screen};

use super::editor::{self, Cursors, Edit};
use super::ui::render::ScrollStep;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Dispatch(Msg),
    /// Page the output pane.
    ScrollOutput(ScrollStep),
    /// Only a cursor moved; redraw without touching state.
    Redraw,
    Ignore,
}

/// Maps a key press to an action given the current state.
///
/// Cursor movement is applied to `cursors` directly; buffer edits come back
/// as replacement messages.
pub fn map_key(state: &AppState, cursors: &mut Cursors, key: &KeyEvent) -> KeyAction {
    // Control+Alt is AltGr on Windows and must stay available for typing.
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => return KeyAction::Quit,
        KeyCode::F(4) => {
            let next = match state.screen() {
                Screen::Playground => Screen::Profile,
                Screen::Profile => Screen::Playground,
            };
            return KeyAction::Dispatch(Msg::ScreenSelected(next));
        }
        _ => {}
    }

    if state.screen() != Screen::Playground {
        return match key.code {
            KeyCode::Esc => KeyAction::Dispatch(Msg::ScreenSelected(Screen::Playground)),
            _ => KeyAction::Ignore,
        };
    }

    match key.code {
        KeyCode::F(5) => KeyAction::Dispatch(Msg::RunClicked),
        KeyCode::Char('r') if ctrl => KeyAction::Dispatch(Msg::RunClicked),
        KeyCode::F(2) if key.modifiers.contains(KeyModifiers::SHIFT) => {
            KeyAction::Dispatch(Msg::LanguageSelected(state.language().prev()))
        }
        KeyCode::F(2) => KeyAction::Dispatch(Msg::LanguageSelected(state.language().next())),
        KeyCode::F(3) => KeyAction::Dispatch(Msg::TabSelected(state.active_tab().next())),
        KeyCode::BackTab => KeyAction::Dispatch(Msg::FocusNext),
        KeyCode::PageUp => KeyAction::ScrollOutput(ScrollStep::PageUp),
        KeyCode::PageDown => KeyAction::ScrollOutput(ScrollStep::PageDown),
        _ => {
            let (buffer, cursor) = match state.focus() {
                EditorFocus::Source => (state.source(), &mut cursors.source),
                EditorFocus::Input => (state.input(), &mut cursors.input),
            };
            match editor::apply_key(buffer, cursor, key) {
                Some(Edit::Text(text)) => KeyAction::Dispatch(match state.focus() {
                    EditorFocus::Source => Msg::SourceChanged(text),
                    EditorFocus::Input => Msg::InputChanged(text),
                }),
                Some(Edit::Moved) => KeyAction::Redraw,
                None => KeyAction::Ignore,
            }
        }
    }
}
