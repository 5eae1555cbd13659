//! Cursor-aware text editing for the two buffers.
//!
//! The cursor is a byte offset kept by the front end. Edits yield the new
//! buffer value, which the core receives as a wholesale replacement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use playground_core::AppState;

pub const INDENT: &str = "    ";

/// Insertion points of the source and input editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursors {
    pub source: usize,
    pub input: usize,
}

impl Cursors {
    /// Places both cursors after the current buffer contents.
    pub fn at_end(state: &AppState) -> Self {
        Self {
            source: state.source().len(),
            input: state.input().len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// The buffer changed; carries its new value.
    Text(String),
    /// Only the cursor moved.
    Moved,
}

/// Applies `key` at `cursor`. Returns `None` when the key neither edits nor
/// moves.
pub fn apply_key(buffer: &str, cursor: &mut usize, key: &KeyEvent) -> Option<Edit> {
    let chord = KeyModifiers::CONTROL | KeyModifiers::ALT;
    // AltGr arrives as Control+Alt on Windows; only its characters are text.
    let altgr = key.modifiers.contains(chord);
    if key.modifiers.intersects(chord) && !(altgr && matches!(key.code, KeyCode::Char(_))) {
        return None;
    }

    let at = clamp_cursor(buffer, *cursor);
    let (edit, next) = match key.code {
        KeyCode::Char(ch) => insert(buffer, at, ch.encode_utf8(&mut [0; 4])),
        KeyCode::Enter => insert(buffer, at, "\n"),
        KeyCode::Tab => insert(buffer, at, INDENT),
        KeyCode::Backspace => {
            let start = prev_boundary(buffer, at)?;
            (Edit::Text(remove(buffer, start, at)), start)
        }
        KeyCode::Delete => {
            let end = next_boundary(buffer, at)?;
            (Edit::Text(remove(buffer, at, end)), at)
        }
        KeyCode::Left => (Edit::Moved, prev_boundary(buffer, at)?),
        KeyCode::Right => (Edit::Moved, next_boundary(buffer, at)?),
        KeyCode::Home => (Edit::Moved, line_start(buffer, at)),
        KeyCode::End => (Edit::Moved, line_end(buffer, at)),
        KeyCode::Up => {
            let start = line_start(buffer, at);
            if start == 0 {
                return None;
            }
            let above = line_start(buffer, start - 1);
            (Edit::Moved, offset_at_column(buffer, above, column(buffer, at)))
        }
        KeyCode::Down => {
            let end = line_end(buffer, at);
            if end == buffer.len() {
                return None;
            }
            (Edit::Moved, offset_at_column(buffer, end + 1, column(buffer, at)))
        }
        _ => return None,
    };

    if edit == Edit::Moved && next == at && *cursor == at {
        return None;
    }
    *cursor = next;
    Some(edit)
}

/// Clamps `cursor` into `buffer` and onto a character boundary.
pub fn clamp_cursor(buffer: &str, cursor: usize) -> usize {
    let mut at = cursor.min(buffer.len());
    while !buffer.is_char_boundary(at) {
        at -= 1;
    }
    at
}

/// Byte offset of the start of the line containing `at`.
pub fn line_start(buffer: &str, at: usize) -> usize {
    buffer[..at].rfind('\n').map_or(0, |idx| idx + 1)
}

fn line_end(buffer: &str, at: usize) -> usize {
    buffer[at..].find('\n').map_or(buffer.len(), |idx| at + idx)
}

fn column(buffer: &str, at: usize) -> usize {
    buffer[line_start(buffer, at)..at].chars().count()
}

fn offset_at_column(buffer: &str, start: usize, column: usize) -> usize {
    let end = line_end(buffer, start);
    buffer[start..end]
        .char_indices()
        .nth(column)
        .map_or(end, |(idx, _)| start + idx)
}

fn prev_boundary(buffer: &str, at: usize) -> Option<usize> {
    buffer[..at].char_indices().next_back().map(|(idx, _)| idx)
}

fn next_boundary(buffer: &str, at: usize) -> Option<usize> {
    buffer[at..].chars().next().map(|ch| at + ch.len_utf8())
}

fn insert(buffer: &str, at: usize, text: &str) -> (Edit, usize) {
    let mut next = String::with_capacity(buffer.len() + text.len());
    next.push_str(&buffer[..at]);
    next.push_str(text);
    next.push_str(&buffer[at..]);
    (Edit::Text(next), at + text.len())
}

fn remove(buffer: &str, start: usize, end: usize) -> String {
    let mut next = String::with_capacity(buffer.len() - (end - start));
    next.push_str(&buffer[..start]);
    next.push_str(&buffer[end..]);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn edit(buffer: &str, cursor: &mut usize, code: KeyCode) -> Option<String> {
        match apply_key(buffer, cursor, &key(code))? {
            Edit::Text(text) => Some(text),
            Edit::Moved => None,
        }
    }

    #[test]
    fn typing_at_end_appends() {
        let mut cursor = 4;
        assert_eq!(edit("prin", &mut cursor, KeyCode::Char('t')).as_deref(), Some("print"));
        assert_eq!(cursor, 5);

        let shifted = KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT);
        let mut cursor = 0;
        assert_eq!(apply_key("", &mut cursor, &shifted), Some(Edit::Text("P".to_string())));
    }

    #[test]
    fn enter_tab_and_backspace() {
        let mut cursor = 1;
        assert_eq!(edit("a", &mut cursor, KeyCode::Enter).as_deref(), Some("a\n"));
        let mut cursor = 0;
        assert_eq!(edit("", &mut cursor, KeyCode::Tab).as_deref(), Some("    "));
        assert_eq!(cursor, 4);
        let mut cursor = "ab✓".len();
        assert_eq!(edit("ab✓", &mut cursor, KeyCode::Backspace).as_deref(), Some("ab"));
        assert_eq!(cursor, 2);
        let mut cursor = 0;
        assert_eq!(apply_key("", &mut cursor, &key(KeyCode::Backspace)), None);
    }

    #[test]
    fn typo_is_fixed_in_the_middle() {
        let buffer = "prnt(1)";
        let mut cursor = buffer.len();
        for _ in 0..5 {
            assert_eq!(apply_key(buffer, &mut cursor, &key(KeyCode::Left)), Some(Edit::Moved));
        }
        assert_eq!(cursor, 2);
        assert_eq!(edit(buffer, &mut cursor, KeyCode::Char('i')).as_deref(), Some("print(1)"));
        assert_eq!(cursor, 3);

        let mut cursor = 0;
        assert_eq!(edit("xprint", &mut cursor, KeyCode::Delete).as_deref(), Some("print"));
        assert_eq!(cursor, 0);
        let mut cursor = 5;
        assert_eq!(apply_key("print", &mut cursor, &key(KeyCode::Delete)), None);
    }

    #[test]
    fn home_end_and_vertical_moves() {
        let buffer = "def f():\n    return 1\nf()";
        let mut cursor = buffer.find("return").unwrap_or_default();

        apply_key(buffer, &mut cursor, &key(KeyCode::Home));
        assert_eq!(cursor, 9);
        apply_key(buffer, &mut cursor, &key(KeyCode::End));
        assert_eq!(&buffer[..cursor], "def f():\n    return 1");

        apply_key(buffer, &mut cursor, &key(KeyCode::Down));
        assert_eq!(cursor, buffer.len());
        apply_key(buffer, &mut cursor, &key(KeyCode::Up));
        assert_eq!(&buffer[..cursor], "def f():\n   ");
        apply_key(buffer, &mut cursor, &key(KeyCode::Up));
        assert_eq!(&buffer[..cursor], "def");
        assert_eq!(apply_key(buffer, &mut cursor, &key(KeyCode::Up)), None);
    }

    #[test]
    fn moves_step_over_whole_characters() {
        let buffer = "é✓";
        let mut cursor = buffer.len();
        apply_key(buffer, &mut cursor, &key(KeyCode::Left));
        assert_eq!(cursor, "é".len());
        apply_key(buffer, &mut cursor, &key(KeyCode::Left));
        assert_eq!(cursor, 0);
        assert_eq!(apply_key(buffer, &mut cursor, &key(KeyCode::Left)), None);

        let mut stale = 99;
        assert_eq!(edit("ab", &mut stale, KeyCode::Char('c')).as_deref(), Some("abc"));
        assert_eq!(clamp_cursor("é", 1), 0);
    }

    #[test]
    fn control_chords_are_not_text() {
        let mut cursor = 1;
        let chord = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(apply_key("x", &mut cursor, &chord), None);
        let alt = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::ALT);
        assert_eq!(apply_key("x", &mut cursor, &alt), None);
        assert_eq!(apply_key("x", &mut cursor, &key(KeyCode::F(5))), None);
        assert_eq!(cursor, 1);
    }

    #[test]
    fn altgr_characters_are_typed() {
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        let mut cursor = 3;
        let brace = KeyEvent::new(KeyCode::Char('{'), altgr);
        assert_eq!(apply_key("f()", &mut cursor, &brace), Some(Edit::Text("f(){".to_string())));

        let backslash = KeyEvent::new(KeyCode::Char('\\'), altgr);
        assert_eq!(
            apply_key("f(){", &mut cursor, &backslash),
            Some(Edit::Text("f(){\\".to_string()))
        );
        assert_eq!(apply_key("x", &mut cursor, &KeyEvent::new(KeyCode::Left, altgr)), None);
    }
}
