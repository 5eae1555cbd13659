use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Navigation bar, screen body and status line.
pub struct ShellAreas {
    pub navbar: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub struct PlaygroundAreas {
    pub tabs: Rect,
    pub language: Rect,
    pub source: Rect,
    pub input: Rect,
    pub run: Rect,
    pub output: Rect,
}

pub struct ProfileAreas {
    pub info: Rect,
    pub graph: Rect,
    pub analysis: Rect,
    pub history: Rect,
}

pub fn shell(area: Rect) -> ShellAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    ShellAreas {
        navbar: rows[0],
        body: rows[1],
        status: rows[2],
    }
}

pub fn playground(area: Rect) -> PlaygroundAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Percentage(30),
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(34)])
        .split(rows[0]);

    let run_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(rows[3]);

    PlaygroundAreas {
        tabs: header[0],
        language: header[1],
        source: rows[1],
        input: rows[2],
        run: run_row[1],
        output: rows[4],
    }
}

pub fn profile(area: Rect) -> ProfileAreas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(33), Constraint::Percentage(67)])
        .split(area);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(4),
            Constraint::Length(6),
        ])
        .split(columns[1]);

    ProfileAreas {
        info: columns[0],
        graph: right[0],
        analysis: right[1],
        history: right[2],
    }
}
