//! Raw-mode terminal front end
//!
//! Owns the terminal for the lifetime of the session: raw mode, alternate
//! screen and mouse capture are switched on at start and always restored on
//! the way out, including when the event loop fails.

use crate::core::config::RobotConfig;
use crate::core::error::Result;
use crate::ui::app::App;
use crate::ui::input::map_event;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

/// Poll interval while the marker is sliding (~60 fps)
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Poll interval while idle
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Run the interactive grid until the user quits
pub fn run(config: &RobotConfig) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let mut app = App::new(config);
    tracing::info!(state = %app.session.state(), "Terminal UI started");
    let result = event_loop(&mut terminal, &mut app);

    restore(&mut terminal);
    result
}

fn restore(terminal: &mut Terminal<CrosstermBackend<Stdout>>) {
    if let Err(err) = terminal.show_cursor() {
        tracing::error!(?err, "failed to show cursor");
    }
    if let Err(err) = disable_raw_mode() {
        tracing::error!(?err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    ) {
        tracing::error!(?err, "failed to leave alternate screen");
    }
}

/// Draw, wait for input, apply it; redraw after every state change and on
/// every frame of a running marker animation.
pub fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut needs_redraw = true;
    let mut was_animating = false;

    while !app.should_quit() {
        let animating = app.is_animating();
        // One extra frame after a slide ends settles the marker on its cell
        if needs_redraw || animating || was_animating {
            terminal.draw(|frame| app.draw(frame))?;
            needs_redraw = false;
        }
        was_animating = animating;

        let timeout = if animating { ANIMATION_FRAME } else { IDLE_POLL };
        if event::poll(timeout)? {
            let event = event::read()?;
            if let Some(action) = map_event(&event) {
                needs_redraw |= app.handle(action);
            }
        }
    }

    Ok(())
}
