//! Color palettes for the light and dark schemes.
//!
//! Pure data, consumed by the rendering layer. The active palette is chosen
//! per frame from the store's theme value, so a theme change is visible on
//! the very next draw.
//!
//! Color semantics:
//! - base: whole-screen background and default text
//! - emphasis: primary card text (usernames)
//! - dim: secondary text (email, age, tallies)
//! - accent: interactive hints (hotkeys, theme indicator)
//! - alert: validation failures

use ratatui::style::{Color, Modifier, Style};

use crate::types::Theme;

// ============================================================================
// PALETTE
// ============================================================================

/// The full set of semantic styles the renderer draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Whole-screen background and default text.
    pub base: Style,
    /// Title bar.
    pub title: Style,
    /// Primary text on a card.
    pub emphasis: Style,
    /// Secondary text and metadata.
    pub dim: Style,
    /// Row under the cursor.
    pub cursor: Style,
    /// Form input, unfocused.
    pub input: Style,
    /// The input currently receiving keystrokes.
    pub input_focused: Style,
    /// Validation alert text and border.
    pub alert: Style,
    /// Footer / keybinding hints.
    pub help: Style,
    /// Interactive accents.
    pub accent: Style,
}

/// Light scheme: dark text on a light background.
pub const LIGHT: Palette = Palette {
    base: Style::new().fg(Color::Black).bg(Color::White),
    title: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
    emphasis: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
    dim: Style::new().fg(Color::DarkGray),
    cursor: Style::new().add_modifier(Modifier::REVERSED),
    input: Style::new().fg(Color::Black),
    input_focused: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
    alert: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
    help: Style::new().fg(Color::DarkGray),
    accent: Style::new().fg(Color::Blue),
};

/// Dark scheme: light text on a dark background.
pub const DARK: Palette = Palette {
    base: Style::new().fg(Color::White).bg(Color::Black),
    title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    emphasis: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    dim: Style::new().fg(Color::Gray),
    cursor: Style::new().add_modifier(Modifier::REVERSED),
    input: Style::new().fg(Color::White),
    input_focused: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    alert: Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD),
    help: Style::new().fg(Color::Gray),
    accent: Style::new().fg(Color::Cyan),
};

/// Palette for a theme value.
pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_returns_the_matching_palette() {
        assert_eq!(palette(Theme::Light), &LIGHT);
        assert_eq!(palette(Theme::Dark), &DARK);
    }

    #[test]
    fn schemes_differ_in_base_colors() {
        assert_ne!(LIGHT.base, DARK.base);
        assert_eq!(LIGHT.base.fg, Some(Color::Black));
        assert_eq!(LIGHT.base.bg, Some(Color::White));
        assert_eq!(DARK.base.fg, Some(Color::White));
        assert_eq!(DARK.base.bg, Some(Color::Black));
    }

    #[test]
    fn cursor_style_is_reversed_in_both_schemes() {
        assert!(LIGHT.cursor.add_modifier.contains(Modifier::REVERSED));
        assert!(DARK.cursor.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn focused_input_stands_out_from_unfocused() {
        assert_ne!(LIGHT.input, LIGHT.input_focused);
        assert_ne!(DARK.input, DARK.input_focused);
    }
}
