//! Terminal User Interface (TUI) module
//!
//! The shortening form, the result panel and the launch-time redirect

use std::io::{self, Stderr};
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{debug, info};

mod app;
mod constants;
mod event_handler;
mod ui;

pub use app::{App, CurrentScreen, FocusField, PendingAction};
use ui::ui;

use crate::config::UiConfig;

/// Run the TUI application
///
/// `location` is the page location the app was launched with; a `u=<code>`
/// query in it triggers the redirect flow.
pub async fn run_tui(
    location: Option<String>,
    ui_config: &UiConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new(location, ui_config);
    let tick_rate = Duration::from_millis(ui_config.tick_rate_ms.max(1));
    let res = run_app(&mut terminal, &mut app, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    if let Some(target) = app.navigated_to {
        println!("Redirected to {}", target);
    }

    Ok(())
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    app.mount();

    loop {
        // Render UI
        terminal.draw(|f| ui(f, app))?;

        // Queued work runs after the repaint so in-flight state is visible
        if app.pending.is_some() {
            app.run_pending().await;
            if app.should_quit {
                info!("Leaving after redirect");
                return Ok(());
            }
            continue;
        }

        // Handle events
        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            debug!("Key pressed: {:?}", key.code);
            if event_handler::handle_key_event(app, key) {
                return Ok(());
            }
        }

        app.on_tick();
    }
}
