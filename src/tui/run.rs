//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal; all intelligence lives in the pure layers.
//!
//! The loop blocks on the next key event and runs each handler to
//! completion, so every store dispatch appears atomic to the renderer.
//! There is no background work and no second thread.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::store::Store;

use super::state::{Action, App, Screen, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a key event to a semantic Action for the current screen.
///
/// The mapping is screen-aware: the form consumes printable characters as
/// text input, so the list hotkeys only exist while the list has focus.
/// Ctrl+C always quits. Returns None for keys that map to nothing.
pub fn map_key(key: KeyEvent, screen: &Screen) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match screen {
        Screen::Browse { .. } => map_browse_key(key),
        Screen::Form { .. } => map_form_key(key),
    }
}

fn map_browse_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),

        // Roster actions
        KeyCode::Char('a') => Some(Action::OpenAdd),
        KeyCode::Char('e') | KeyCode::Enter => Some(Action::OpenEdit),
        KeyCode::Char('d') => Some(Action::Delete),

        // Presentation
        KeyCode::Char('t') => Some(Action::ToggleTheme),

        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

fn map_form_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::Save),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop over an injected store.
///
/// Sets up the terminal and processes key events until the user quits.
/// Each tick renders from the store's current snapshot, so dispatched
/// operations are visible on the following draw.
pub fn run(store: &mut Store) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    loop {
        let snapshot = store.snapshot();
        terminal.draw(|frame| render(&app, &snapshot, frame))?;

        if app.should_quit {
            break;
        }

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue, // ignore mouse, resize, key releases
        };

        if let Some(action) = map_key(key, &app.screen) {
            let screen = std::mem::take(&mut app.screen);
            match update(screen, &action, &snapshot) {
                Transition::Screen(next) => {
                    app.screen = next;
                }
                Transition::Quit => {
                    app.should_quit = true;
                }
                Transition::Dispatch { op, next } => {
                    store.dispatch(op);
                    app.screen = next;
                }
            }
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
