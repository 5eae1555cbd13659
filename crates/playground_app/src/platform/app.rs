use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use playground_core::{update, AppState, Msg};
use playground_logging::{pg_error, pg_info};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use super::cli::Cli;
use super::editor::Cursors;
use super::effects::EffectRunner;
use super::input::{map_key, KeyAction};
use super::logging;
use super::ui::render::{render, Chrome, OutputScroll};

const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, cli.log_level, &cli.log_file);
    pg_info!(
        "starting playground endpoint={} timeout={:?}",
        cli.endpoint,
        cli.request_timeout_secs
    );

    let runner = EffectRunner::new(cli.execution_settings())
        .context("failed to start execution engine")?;
    let mut app = App::new(runner, cli.endpoint.clone());

    let mut terminal = TerminalGuard::enter().context("failed to set up terminal")?;
    let result = app.run(terminal.terminal());
    if let Err(err) = &result {
        pg_error!("playground stopped with error: {:#}", err);
    }
    drop(terminal);
    pg_info!("playground exited");
    result
}

/// Restores the terminal on every exit path.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

struct App {
    state: AppState,
    effects: EffectRunner,
    endpoint: String,
    cursors: Cursors,
    output_scroll: OutputScroll,
    finished_at: Option<String>,
    spinner_frame: usize,
    needs_redraw: bool,
    should_quit: bool,
}

impl App {
    fn new(effects: EffectRunner, endpoint: String) -> Self {
        let state = AppState::new();
        Self {
            cursors: Cursors::at_end(&state),
            output_scroll: OutputScroll::default(),
            state,
            effects,
            endpoint,
            finished_at: None,
            spinner_frame: 0,
            needs_redraw: true,
            should_quit: false,
        }
    }

    fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        loop {
            for msg in self.effects.drain() {
                self.dispatch_msg(msg);
            }

            if self.state.is_running() {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                self.needs_redraw = true;
            }

            if self.state.consume_dirty() || self.needs_redraw {
                self.needs_redraw = false;
                let view = self.state.view();
                let chrome = Chrome {
                    endpoint: &self.endpoint,
                    finished_at: self.finished_at.as_deref(),
                    spinner_frame: self.spinner_frame,
                    cursors: self.cursors,
                };
                let scroll = &mut self.output_scroll;
                terminal
                    .draw(|frame| render(frame, &view, &chrome, scroll))
                    .context("failed to draw frame")?;
            }

            if self.should_quit {
                return Ok(());
            }

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        match map_key(&self.state, &mut self.cursors, &key) {
                            KeyAction::Quit => self.should_quit = true,
                            KeyAction::Dispatch(msg) => self.dispatch_msg(msg),
                            KeyAction::ScrollOutput(step) => {
                                self.output_scroll.apply(step);
                                self.needs_redraw = true;
                            }
                            KeyAction::Redraw => self.needs_redraw = true,
                            KeyAction::Ignore => {}
                        }
                    }
                    Event::Resize(..) => self.needs_redraw = true,
                    _ => {}
                }
            } else {
                self.dispatch_msg(Msg::Tick);
            }
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let completes_run = matches!(
            &msg,
            Msg::RunFinished { run_id, .. } if self.state.in_flight() == Some(*run_id)
        );
        // Fresh output is shown from its first line.
        if completes_run || msg == Msg::RunClicked {
            self.output_scroll.reset();
        }
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        if completes_run {
            self.finished_at = Some(chrono::Local::now().format("%H:%M:%S").to_string());
        }
        self.effects.enqueue(effects);
    }
}
