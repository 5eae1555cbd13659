use ratatui::style::Color;

pub const APP_TITLE: &str = "Code Playground";

pub const TITLE_SOURCE: &str = "Code";
pub const TITLE_INPUT: &str = "Input (optional)";
pub const TITLE_OUTPUT: &str = "Output";
pub const TITLE_LANGUAGE: &str = "Language [F2]";
pub const TITLE_FILES: &str = "Files [F3]";

pub const INPUT_PLACEHOLDER: &str = "Provide input here... (optional)";

pub const HINTS_PLAYGROUND: &str =
    "F5/Ctrl+R run | F2 language | F3 tab | Shift+Tab switch editor | F4 profile | Ctrl+Q quit";
pub const HINTS_PROFILE: &str = "F4/Esc playground | Ctrl+Q quit";

pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;
pub const ERROR: Color = Color::Red;
