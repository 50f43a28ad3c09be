//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire UI state space; illegal states should be
//! unrepresentable. The transition function and the rendering layer both
//! program against these types.
//!
//! Design principle: Screen variants carry only transient view state
//! (cursor, draft, focus). User records and the theme live in the store
//! snapshot, which the event loop passes to the pure layers each tick.

use crate::store::StoreOp;
use crate::types::UserRecord;
use crate::validate::{Field, ValidationError};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Holds only the current screen and the quit flag. The store is injected
/// into the event loop separately and never owned by the view.
#[derive(Debug)]
pub struct App {
    /// Current screen, carrying its transient state.
    pub screen: Screen,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Start on the list with the cursor at the top.
    pub fn new() -> Self {
        App {
            screen: Screen::browse(),
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The roster list. The modal form is closed.
    Browse {
        /// Focused row index.
        cursor: usize,
    },

    /// The modal form, open over the list.
    Form {
        /// Whether a save appends a new record or replaces an existing one.
        mode: FormMode,
        /// Working copy. Committed whole on save, discarded on cancel,
        /// never shared with the store before then.
        draft: UserRecord,
        /// Input currently receiving keystrokes.
        focus: Field,
        /// Blocking validation alert. While present, every action collapses
        /// to dismissing it.
        alert: Option<ValidationError>,
    },
}

/// Default screen is the list (used as placeholder during transitions).
impl Default for Screen {
    fn default() -> Self {
        Screen::browse()
    }
}

impl Screen {
    /// The list with the cursor at the top.
    pub fn browse() -> Self {
        Screen::Browse { cursor: 0 }
    }

    /// Open the form on an empty draft with a fresh id.
    pub fn add_form(draft: UserRecord) -> Self {
        Screen::Form {
            mode: FormMode::Add,
            draft,
            focus: Field::Username,
            alert: None,
        }
    }

    /// Open the form on a copy of an existing record.
    pub fn edit_form(draft: UserRecord) -> Self {
        Screen::Form {
            mode: FormMode::Edit,
            draft,
            focus: Field::Username,
            alert: None,
        }
    }
}

/// What a successful save dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Append a new record.
    Add,
    /// Replace the record with the draft's id.
    Edit,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions per screen (the form
/// consumes printable characters as text). The transition function decides
/// what each Action means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move the list cursor up.
    MoveUp,
    /// Move the list cursor down.
    MoveDown,
    /// Open the form on an empty draft.
    OpenAdd,
    /// Open the form on the record under the cursor.
    OpenEdit,
    /// Remove the record under the cursor immediately, no confirmation.
    Delete,
    /// Switch between the light and dark schemes.
    ToggleTheme,
    /// Append a character to the focused input.
    Input(char),
    /// Delete the last character of the focused input.
    Backspace,
    /// Focus the next form field.
    FocusNext,
    /// Focus the previous form field.
    FocusPrev,
    /// Validate the draft and commit it.
    Save,
    /// Discard the draft and close the form.
    Cancel,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// Describes the next screen and at most one store operation. Pure code
/// never mutates the store; the event loop interprets this value, applies
/// the screen, and dispatches the operation if one is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Show this screen; no store change.
    Screen(Screen),
    /// Quit the application.
    Quit,
    /// Dispatch one store operation, then show this screen.
    Dispatch { op: StoreOp, next: Screen },
}

// ============================================================================
// TESTS
// ============================================================================
