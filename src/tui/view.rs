//! Pure rendering: map (screen, snapshot) to ratatui widget trees.
//!
//! Each screen has a dedicated render function; `render()` dispatches on the
//! current Screen variant. Widget-building is pure (state in, widgets out);
//! the only effect is Frame::render_widget() writing to the terminal buffer.
//! Every style comes from the active theme's palette, so toggling the theme
//! restyles the whole frame at once.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::store::Snapshot;
use crate::types::UserRecord;
use crate::validate::{Field, ValidationError};

use super::state::{App, FormMode, Screen};
use super::theme::{self, Palette};

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, snapshot: &Snapshot, frame: &mut Frame) {
    let palette = theme::palette(snapshot.theme());
    let area = frame.area();

    // Paint the themed background under everything
    frame.render_widget(Block::new().style(palette.base), area);

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(snapshot, palette), chunks[0]);
    frame.render_widget(render_help(&app.screen, palette), chunks[2]);

    let content_area = chunks[1];

    match &app.screen {
        Screen::Browse { cursor } => {
            render_list(snapshot, Some(*cursor), frame, content_area, palette);
        }
        Screen::Form {
            mode,
            draft,
            focus,
            alert,
        } => {
            // Keep the list visible behind the modal, without a cursor
            render_list(snapshot, None, frame, content_area, palette);
            render_form(*mode, draft, *focus, alert.as_ref(), frame, content_area, palette);
        }
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar showing the app name and the active theme.
fn render_title(snapshot: &Snapshot, palette: &Palette) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(" user-roster", palette.title),
        Span::styled(
            format!("   theme: {}", snapshot.theme()),
            palette.accent,
        ),
    ]))
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen, palette: &Palette) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Browse { .. } => {
            "[j/k] move  [a] add  [e] edit  [d] delete  [t] theme  [q] quit"
        }
        Screen::Form { alert: Some(_), .. } => "press any key to continue",
        Screen::Form { .. } => "[Tab] next field  [Enter] save  [Esc] cancel",
    };

    Paragraph::new(Span::styled(format!(" {}", help_text), palette.help))
}

// ============================================================================
// SCREEN: LIST
// ============================================================================

/// The roster, one card line per record in sequence order.
///
/// `cursor` is None while the form is open (no row focus behind a modal).
fn render_list(
    snapshot: &Snapshot,
    cursor: Option<usize>,
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
) {
    let users = snapshot.users();

    // Split: list area + tally line
    let chunks = Layout::vertical([
        Constraint::Min(0),    // cards
        Constraint::Length(1), // tally
    ])
    .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, user) in users.iter().enumerate() {
        let spans = vec![
            Span::raw("  "),
            Span::styled(user.username.clone(), palette.emphasis),
            Span::styled(format!("  {}", user.email), palette.dim),
            Span::styled(format!("  age {}", user.age), palette.dim),
        ];
        let line = if cursor == Some(i) {
            Line::from(spans).style(palette.cursor)
        } else {
            Line::from(spans)
        };
        lines.push(line);
    }

    if users.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (no users yet, press a to add)",
            palette.dim,
        )));
    }

    // Scroll: if the cursor is beyond the visible area, offset the view
    let visible_height = chunks[0].height as usize;
    let scroll_offset = match cursor {
        Some(c) if visible_height > 0 && c >= visible_height => c - visible_height + 1,
        _ => 0,
    };

    let list = Paragraph::new(lines).scroll((scroll_offset as u16, 0));
    frame.render_widget(list, chunks[0]);

    let tally = format!(
        "  {} user{}",
        users.len(),
        if users.len() == 1 { "" } else { "s" }
    );
    frame.render_widget(
        Paragraph::new(Span::styled(tally, palette.dim)),
        chunks[1],
    );
}

// ============================================================================
// SCREEN: FORM
// ============================================================================

/// The modal form: three labeled inputs over the list, plus the alert
/// overlay when a save was rejected.
fn render_form(
    mode: FormMode,
    draft: &UserRecord,
    focus: Field,
    alert: Option<&ValidationError>,
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
) {
    let title = match mode {
        FormMode::Add => " Add User ",
        FormMode::Edit => " Edit User ",
    };

    let popup = centered_rect(46, 9, area);
    frame.render_widget(Clear, popup);

    let block = Block::new()
        .borders(Borders::ALL)
        .title(title)
        .style(palette.base)
        .border_style(palette.input);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines = vec![Line::from("")];
    for field in [Field::Username, Field::Email, Field::Age] {
        let focused = field == focus && alert.is_none();
        let style = if focused {
            palette.input_focused
        } else {
            palette.input
        };
        let caret = if focused { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", format!("{}:", field.label())), palette.dim),
            Span::styled(format!("{}{}", field_value(draft, field), caret), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);

    if let Some(err) = alert {
        render_alert(err, frame, area, palette);
    }
}

/// Blocking validation alert, centered over the form.
fn render_alert(err: &ValidationError, frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup = centered_rect(40, 5, area);
    frame.render_widget(Clear, popup);

    let block = Block::new()
        .borders(Borders::ALL)
        .title(" ! ")
        .style(palette.base)
        .border_style(palette.alert);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(format!("  {}", err), palette.alert)),
        Line::from(""),
        Line::from(Span::styled("  press any key to continue", palette.dim)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// HELPERS
// ============================================================================

/// The draft field behind a focus position, for display.
fn field_value(draft: &UserRecord, field: Field) -> &str {
    match field {
        Field::Username => &draft.username,
        Field::Email => &draft.email,
        Field::Age => &draft.age,
    }
}

/// A rect of at most `width` x `height`, centered in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

// ============================================================================
// TESTS
// ============================================================================
