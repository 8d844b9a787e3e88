mod app;
mod views;

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use indecision_core::{KeyValueStore, OptionManager, RandomSource};
use ratatui::prelude::*;

use app::App;

pub fn run<S, R>(manager: OptionManager<S, R>) -> Result<(), String>
where
    S: KeyValueStore,
    R: RandomSource,
{
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let mut app = App::new(manager);

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_loop<S, R>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S, R>,
) -> Result<(), String>
where
    S: KeyValueStore,
    R: RandomSource,
{
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        if let Event::Key(key) = event::read().map_err(|e| format!("event error: {e}"))? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }
    }
}

fn draw<S, R>(frame: &mut Frame, app: &App<S, R>)
where
    S: KeyValueStore,
    R: RandomSource,
{
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Pick action
            Constraint::Min(3),    // Options
            Constraint::Length(3), // Add option input
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    views::draw_header(frame, &view, chunks[0]);
    views::draw_action(frame, &view, chunks[1]);
    views::draw_options(frame, app, &view, chunks[2]);
    views::draw_input(frame, app, chunks[3]);
    views::draw_status_bar(frame, app, chunks[4]);

    if let Some(ref choice) = app.picked {
        views::draw_pick_popup(frame, choice);
    } else if app.show_help {
        views::draw_help_popup(frame);
    }
}
