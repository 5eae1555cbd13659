use playground_core::profile::{student_profile, StudentProfile};
use playground_core::{AppViewModel, EditorFocus, RunPhase, Screen};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap};
use ratatui::Frame;

use crate::platform::editor::{clamp_cursor, line_start, Cursors};
use super::constants::*;
use super::layout;

/// Front-end details that live outside the core state.
pub struct Chrome<'a> {
    pub endpoint: &'a str,
    pub finished_at: Option<&'a str>,
    pub spinner_frame: usize,
    pub cursors: Cursors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStep {
    PageUp,
    PageDown,
}

/// Scroll position of the output pane.
///
/// Rendering clamps `offset` to the wrapped output and records the page
/// height, so paging never runs past either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputScroll {
    pub offset: usize,
    pub page: usize,
}

impl OutputScroll {
    pub fn apply(&mut self, step: ScrollStep) {
        let page = self.page.max(1);
        self.offset = match step {
            ScrollStep::PageUp => self.offset.saturating_sub(page),
            ScrollStep::PageDown => self.offset.saturating_add(page),
        };
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

pub fn render(
    frame: &mut Frame,
    view: &AppViewModel,
    chrome: &Chrome,
    scroll: &mut OutputScroll,
) {
    let areas = layout::shell(frame.area());
    render_navbar(frame, areas.navbar, view.screen);
    match view.screen {
        Screen::Playground => render_playground(frame, areas.body, view, chrome, scroll),
        Screen::Profile => render_profile(frame, areas.body, &student_profile()),
    }
    render_status(frame, areas.status, view, chrome);
}

fn render_navbar(frame: &mut Frame, area: Rect, screen: Screen) {
    let selected = Screen::ALL.iter().position(|s| *s == screen).unwrap_or(0);
    let tabs = Tabs::new(Screen::ALL.iter().map(|s| s.title()))
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title(APP_TITLE))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .divider("|");
    frame.render_widget(tabs, area);
}

fn render_playground(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewModel,
    chrome: &Chrome,
    scroll: &mut OutputScroll,
) {
    let areas = layout::playground(area);

    let active = view.tabs.iter().position(|t| t.active).unwrap_or(0);
    let tabs = Tabs::new(view.tabs.iter().map(|t| t.title))
        .select(active)
        .block(Block::default().borders(Borders::ALL).title(TITLE_FILES))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, areas.tabs);

    let options: Vec<Span> = view
        .languages
        .iter()
        .flat_map(|opt| {
            let style = if opt.selected {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            let label = if opt.selected {
                format!("[{}]", opt.label)
            } else {
                opt.label.to_string()
            };
            [Span::styled(label, style), Span::raw(" ")]
        })
        .collect();
    let selector = Paragraph::new(Line::from(options))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(TITLE_LANGUAGE));
    frame.render_widget(selector, areas.language);

    render_editor(
        frame,
        areas.source,
        TITLE_SOURCE,
        &view.source,
        None,
        (view.focus == EditorFocus::Source).then_some(chrome.cursors.source),
    );
    render_editor(
        frame,
        areas.input,
        TITLE_INPUT,
        &view.input,
        Some(INPUT_PLACEHOLDER),
        (view.focus == EditorFocus::Input).then_some(chrome.cursors.input),
    );

    let (label, style) = if view.run_enabled {
        (
            format!("[ {} ]", view.run_label),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
    } else {
        let spinner = SPINNER_FRAMES[chrome.spinner_frame % SPINNER_FRAMES.len()];
        (
            format!("{spinner} {}", view.run_label),
            Style::default().fg(MUTED),
        )
    };
    let run = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(run, areas.run);

    render_output(frame, areas.output, view, chrome, scroll);
}

fn render_output(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewModel,
    chrome: &Chrome,
    scroll: &mut OutputScroll,
) {
    let output_style = if view.output.starts_with("Error:") {
        Style::default().fg(ERROR)
    } else {
        Style::default()
    };
    let output = Paragraph::new(Text::raw(view.output.as_str()))
        .style(output_style)
        .wrap(Wrap { trim: false });

    let visible = usize::from(area.height.saturating_sub(2));
    let total = output.line_count(area.width.saturating_sub(2));
    scroll.page = visible;
    scroll.offset = scroll.offset.min(total.saturating_sub(visible));

    let mut title = match (view.phase, chrome.finished_at) {
        (RunPhase::Done, Some(at)) => format!("{TITLE_OUTPUT} (finished {at})"),
        _ => TITLE_OUTPUT.to_string(),
    };
    if total > visible {
        let last = (scroll.offset + visible).min(total);
        title.push_str(&format!(" [{}-{last}/{total}, PgUp/PgDn]", scroll.offset + 1));
    }

    let offset = u16::try_from(scroll.offset).unwrap_or(u16::MAX);
    let output = output
        .scroll((offset, 0))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(output, area);
}

fn render_editor(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    text: &str,
    placeholder: Option<&str>,
    cursor: Option<usize>,
) {
    let focused = cursor.is_some();
    let border_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let paragraph = match placeholder {
        Some(hint) if text.is_empty() && !focused => {
            Paragraph::new(Span::styled(hint, Style::default().fg(MUTED)))
        }
        _ => match cursor {
            Some(cursor) => {
                let at = clamp_cursor(text, cursor);
                let cursor_line = text[..at].matches('\n').count();
                // Keep the cursor line in view.
                let visible = usize::from(area.height.saturating_sub(2));
                let offset = (cursor_line + 1).saturating_sub(visible);
                let offset = u16::try_from(offset).unwrap_or(u16::MAX);
                Paragraph::new(text_with_cursor(text, at)).scroll((offset, 0))
            }
            None => Paragraph::new(Text::raw(text)),
        },
    };
    frame.render_widget(paragraph.block(block), area);
}

/// Splits `text` into lines and highlights the cell at byte offset `at`.
fn text_with_cursor(text: &str, at: usize) -> Text<'_> {
    let start = line_start(text, at);
    let cursor_line = text[..at].matches('\n').count();
    let lines: Vec<Line> = text
        .split('\n')
        .enumerate()
        .map(|(idx, line)| {
            if idx != cursor_line {
                return Line::raw(line);
            }
            let (before, rest) = line.split_at(at - start);
            let mut chars = rest.chars();
            let under = chars.next().map_or_else(|| " ".to_string(), String::from);
            Line::from(vec![
                Span::raw(before),
                Span::styled(under, Style::default().add_modifier(Modifier::REVERSED)),
                Span::raw(chars.as_str()),
            ])
        })
        .collect();
    Text::from(lines)
}

fn render_profile(frame: &mut Frame, area: Rect, profile: &StudentProfile) {
    let areas = layout::profile(area);

    let label = Style::default().add_modifier(Modifier::BOLD);
    let info = Paragraph::new(vec![
        Line::from(Span::styled(profile.name, label.fg(ACCENT))),
        Line::from(format!("Student # {}", profile.student_no)),
        Line::from(""),
        Line::from(vec![Span::styled("Course: ", label), Span::raw(profile.course)]),
        Line::from(vec![
            Span::styled("Year Level: ", label),
            Span::raw(profile.year_level),
        ]),
        Line::from(vec![Span::styled("Section: ", label), Span::raw(profile.section)]),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Student"));
    frame.render_widget(info, areas.info);

    let graph = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Performance: Graph Analysis"),
        )
        .data(profile.weekly_scores.as_slice())
        .bar_width(4)
        .bar_gap(2)
        .max(100)
        .bar_style(Style::default().fg(ACCENT));
    frame.render_widget(graph, areas.graph);

    let analysis = Paragraph::new(vec![
        Line::from(Span::styled("Strengths", label)),
        Line::from(profile.strengths),
        Line::from(""),
        Line::from(Span::styled("Weaknesses", label)),
        Line::from(profile.weaknesses),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(analysis, areas.analysis);

    let rows = profile.history.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.index.to_string()),
            Cell::from(row.subject),
            Cell::from(row.assessment),
            Cell::from(row.score.to_string()),
        ])
    });
    let history = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Length(8),
        ],
    )
    .header(Row::new(vec!["#", "Subject", "Assessment", "Scores"]).style(label))
    .block(Block::default().borders(Borders::ALL).title("History"));
    frame.render_widget(history, areas.history);
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewModel, chrome: &Chrome) {
    let hints = match view.screen {
        Screen::Playground => HINTS_PLAYGROUND,
        Screen::Profile => HINTS_PROFILE,
    };
    let line = Line::from(vec![
        Span::styled(view.status.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" | "),
        Span::styled(chrome.endpoint, Style::default().fg(MUTED)),
        Span::raw(" | "),
        Span::styled(hints, Style::default().fg(MUTED)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
