//! Domain types for user-roster.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Identity of a roster entry.
///
/// Assigned when a draft is created, immutable afterwards. Fresh ids come
/// from the store snapshot's watermark (one past the highest id ever added),
/// so they stay unique for the lifetime of the process.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// Returns the raw numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// STRUCTS
// ============================================================================

/// A single roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique, immutable identity.
    pub id: UserId,
    /// Display name. Must be non-empty to save.
    pub username: String,
    /// Contact address. Must match the address pattern to save.
    pub email: String,
    /// Free-form age text. Must be non-empty to save; never parsed further.
    pub age: String,
}

impl UserRecord {
    /// Empty template for a fresh draft.
    pub fn template(id: UserId) -> Self {
        UserRecord {
            id,
            username: String::new(),
            email: String::new(),
            age: String::new(),
        }
    }
}

// ============================================================================
// ENUMS
// ============================================================================

/// UI color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// The other scheme (toggle target).
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}
