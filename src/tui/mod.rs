//! Terminal User Interface for the greeting form

mod input;
mod render;

use crate::app::{App, Event, Handler};
use anyhow::{Context, Result};
use ratatui::crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        KeyEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::{info, warn};

/// Run the TUI application until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or polled
pub fn run(mut app: App) -> Result<()> {
    let mouse_capture = app.config.mouse_capture;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    if mouse_capture && let Err(e) = execute!(stdout, EnableMouseCapture) {
        warn!("Failed to enable mouse capture: {e}");
    }

    let backend = CrosstermBackend::new(stdout);
    let result = Terminal::new(backend)
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let event_handler = Handler::new(app.config.poll_interval_ms);
            let result = run_loop(&mut terminal, &mut app, &event_handler);
            restore_terminal(&mut terminal, mouse_capture);
            result
        });

    // Raw mode must be off even if the terminal was never created.
    let _ = disable_raw_mode();
    info!("Terminal restored");
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &Handler,
) -> Result<()> {
    info!("Entering main loop");

    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        match event_handler.next()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                input::handle_key_event(app, key.code, key.modifiers);
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let frame_area = Rect::new(0, 0, size.width, size.height);
                input::handle_mouse_event(app, mouse, frame_area);
            }
            Event::Paste(text) => app.paste(&text),
            Event::Key(_) | Event::Tick | Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mouse_capture: bool) {
    if mouse_capture && let Err(e) = execute!(terminal.backend_mut(), DisableMouseCapture) {
        warn!("Failed to disable mouse capture: {e}");
    }
    if let Err(e) = execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    ) {
        warn!("Failed to leave alternate screen: {e}");
    }
    if let Err(e) = terminal.show_cursor() {
        warn!("Failed to show cursor: {e}");
    }
}
