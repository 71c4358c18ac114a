// TUI module - Terminal User Interface
//
// Terminal setup/teardown, the event loop, and key handling. The loop
// multiplexes three sources with tokio::select!: keyboard input, a
// periodic tick (spinner/redraw), and completed search requests coming
// back over a channel. Searches are spawned so the UI never blocks on
// the network; nothing cancels an in-flight request if the user fires
// another one - later responses simply overwrite earlier ones.

pub mod app;
pub mod ui;

use crate::api::SearchClient;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, ContentView, SearchOutcome};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done - also on error, so a failed draw never leaves the shell
/// in raw mode.
pub async fn run_tui(client: SearchClient, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(log_buffer);
    let result = run_event_loop(&mut terminal, &mut app, &client).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &SearchClient,
) -> Result<()> {
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<SearchOutcome>(8);

    // Ticker for spinner animation and periodic redraws
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event, client, &outcome_tx);
                    }
                }
            } => {}

            // Periodic tick
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // Completed search requests
            Some(outcome) = outcome_rx.recv() => {
                match outcome {
                    SearchOutcome::Success(response) => {
                        app.controller.apply_success(&mut app.surface, response);
                    }
                    SearchOutcome::Failure(message) => {
                        app.controller.apply_failure(&mut app.surface, message);
                    }
                }
                app.article_scroll = 0;
                app.content_scroll = 0;
            }
        }

        // Surface alerts (validation, clipboard) become the blocking modal
        app.sync_alert();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input. An open alert absorbs everything until
/// dismissed; otherwise keys either edit the input buffer or trigger
/// an action.
fn handle_key_event(
    app: &mut App,
    key_event: KeyEvent,
    client: &SearchClient,
    outcome_tx: &mpsc::Sender<SearchOutcome>,
) {
    if key_event.kind == KeyEventKind::Release {
        return;
    }

    // Blocking alert: Enter or Esc dismisses, everything else is eaten
    if app.alert.is_some() {
        if matches!(key_event.code, KeyCode::Enter | KeyCode::Esc) {
            app.alert = None;
        }
        return;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        // Quit
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if ctrl => app.should_quit = true,

        // Copy the active content panel
        KeyCode::Char('y') if ctrl => app.copy_active_panel(write_system_clipboard),

        // Search on Enter - same path as any explicit invocation
        KeyCode::Enter => dispatch_search(app, client, outcome_tx),

        // Filter cycling
        KeyCode::Tab => app.cycle_filter(true),
        KeyCode::BackTab => app.cycle_filter(false),

        // Content view switching
        KeyCode::F(n @ 1..=4) => {
            app.set_content_view(ContentView::ALL[(n - 1) as usize]);
        }

        // Scrolling
        KeyCode::Up => app.scroll_articles_up(),
        KeyCode::Down => app.scroll_articles_down(),
        KeyCode::PageUp => app.scroll_content_up(),
        KeyCode::PageDown => app.scroll_content_down(),

        // Input editing
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) if !ctrl => app.input.push(c),

        _ => {}
    }
}

/// Validate the input and, if accepted, spawn the request. The response
/// comes back through the outcome channel.
fn dispatch_search(app: &mut App, client: &SearchClient, outcome_tx: &mpsc::Sender<SearchOutcome>) {
    let raw_input = app.input.clone();
    let Some(keyword) = app.controller.begin_search(&mut app.surface, &raw_input) else {
        return;
    };

    let client = client.clone();
    let tx = outcome_tx.clone();
    tokio::spawn(async move {
        let outcome = match client.search(&keyword).await {
            Ok(response) => SearchOutcome::Success(response),
            Err(e) => SearchOutcome::Failure(e.to_string()),
        };
        // Receiver only goes away on shutdown
        let _ = tx.send(outcome).await;
    });
}

/// Put the generated content on the system clipboard so it can be
/// pasted straight into a blog editor or social client. A fresh arboard
/// handle per copy; fails without a display server or when the platform
/// denies clipboard access, and [`App::copy_active_panel`] turns that
/// into a failure notice.
fn write_system_clipboard(text: &str) -> Result<()> {
    arboard::Clipboard::new()
        .context("clipboard unavailable")?
        .set_text(text)
        .context("clipboard write rejected")?;
    Ok(())
}
