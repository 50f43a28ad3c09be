//! Pure state transitions: (Screen, Action, Snapshot) -> Transition.
//!
//! This is the core logic of the UI. Fully testable without a terminal.
//! Each screen defines which actions it accepts; unhandled actions return
//! the current screen unchanged (no-op). Store mutations are never executed
//! here, only described.

use crate::store::{Snapshot, StoreOp};
use crate::types::UserRecord;
use crate::validate::{self, Field, ValidationError};

use super::state::{Action, FormMode, Screen, Transition};

/// Pure state transition function.
///
/// Given the current screen, an action, and a read-only view of the store
/// state, produces the next transition. The event loop interprets the
/// result.
pub fn update(screen: Screen, action: &Action, snapshot: &Snapshot) -> Transition {
    match screen {
        Screen::Browse { cursor } => update_browse(cursor, action, snapshot),
        Screen::Form {
            mode,
            draft,
            focus,
            alert,
        } => update_form(mode, draft, focus, alert, action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Browse: cursor movement, opening the form, delete, theme toggle.
fn update_browse(cursor: usize, action: &Action, snapshot: &Snapshot) -> Transition {
    let len = snapshot.users().len();

    match action {
        Action::MoveUp => Transition::Screen(Screen::Browse {
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => {
            let new_cursor = if len == 0 { 0 } else { (cursor + 1).min(len - 1) };
            Transition::Screen(Screen::Browse { cursor: new_cursor })
        }
        Action::OpenAdd => Transition::Screen(Screen::add_form(UserRecord::template(
            snapshot.next_user_id(),
        ))),
        Action::OpenEdit => match snapshot.users().get(cursor) {
            Some(user) => Transition::Screen(Screen::edit_form(user.clone())),
            None => Transition::Screen(Screen::Browse { cursor }),
        },
        Action::Delete => match snapshot.users().get(cursor) {
            Some(user) => Transition::Dispatch {
                op: StoreOp::RemoveUser(user.id),
                // the list shrinks by one; keep the cursor inside it
                next: Screen::Browse {
                    cursor: cursor.min(len.saturating_sub(2)),
                },
            },
            None => Transition::Screen(Screen::Browse { cursor }),
        },
        Action::ToggleTheme => Transition::Dispatch {
            op: StoreOp::SetTheme(snapshot.theme().toggled()),
            next: Screen::Browse { cursor },
        },
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Browse { cursor }),
    }
}

/// Form: field editing, focus movement, save validation, cancel.
///
/// A visible alert blocks everything: the next action dismisses it and does
/// nothing else. Focus was already moved to the offending field when the
/// alert was raised, so dismissal lands the user on the input to fix.
fn update_form(
    mode: FormMode,
    mut draft: UserRecord,
    focus: Field,
    alert: Option<ValidationError>,
    action: &Action,
) -> Transition {
    if alert.is_some() {
        if *action == Action::Quit {
            return Transition::Quit;
        }
        return Transition::Screen(Screen::Form {
            mode,
            draft,
            focus,
            alert: None,
        });
    }

    match action {
        Action::Input(c) => {
            field_mut(&mut draft, focus).push(*c);
            Transition::Screen(Screen::Form {
                mode,
                draft,
                focus,
                alert: None,
            })
        }
        Action::Backspace => {
            field_mut(&mut draft, focus).pop();
            Transition::Screen(Screen::Form {
                mode,
                draft,
                focus,
                alert: None,
            })
        }
        Action::FocusNext => Transition::Screen(Screen::Form {
            mode,
            draft,
            focus: focus.next(),
            alert: None,
        }),
        Action::FocusPrev => Transition::Screen(Screen::Form {
            mode,
            draft,
            focus: focus.prev(),
            alert: None,
        }),
        Action::Save => match validate::validate(&draft) {
            Ok(()) => {
                let op = match mode {
                    FormMode::Add => StoreOp::AddUser(draft),
                    FormMode::Edit => StoreOp::EditUser(draft),
                };
                Transition::Dispatch {
                    op,
                    next: Screen::browse(),
                }
            }
            Err(err) => Transition::Screen(Screen::Form {
                mode,
                draft,
                focus: err.focus(),
                alert: Some(err),
            }),
        },
        Action::Cancel => Transition::Screen(Screen::browse()),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Form {
            mode,
            draft,
            focus,
            alert: None,
        }),
    }
}

/// The draft field behind a focus position.
fn field_mut(draft: &mut UserRecord, focus: Field) -> &mut String {
    match focus {
        Field::Username => &mut draft.username,
        Field::Email => &mut draft.email,
        Field::Age => &mut draft.age,
    }
}

// ============================================================================
// TESTS
// ============================================================================
