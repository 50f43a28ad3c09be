//! Save-time validation for user drafts.
//!
//! Pure functions, no I/O. Checks run in fixed field order and stop at the
//! first failure; the caller moves focus to the failing field and shows the
//! error as a blocking alert.

use thiserror::Error;

use crate::types::UserRecord;

/// Shortest final domain label accepted.
const MIN_TLD_LEN: usize = 2;
/// Longest final domain label accepted ("info" fits, "museum" does not).
const MAX_TLD_LEN: usize = 4;

// ============================================================================
// FIELDS
// ============================================================================

/// Form fields, in validation and focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Age,
}

impl Field {
    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Age => "Age",
        }
    }

    /// Next field in focus order, wrapping at the end.
    pub fn next(self) -> Field {
        match self {
            Field::Username => Field::Email,
            Field::Email => Field::Age,
            Field::Age => Field::Username,
        }
    }

    /// Previous field in focus order, wrapping at the start.
    pub fn prev(self) -> Field {
        match self {
            Field::Username => Field::Age,
            Field::Email => Field::Username,
            Field::Age => Field::Email,
        }
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Why a save was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty. Carries the field to focus.
    #[error("Please fill out all fields")]
    MissingField(Field),
    /// The email field is empty or malformed.
    #[error("Invalid email format")]
    InvalidEmailFormat,
}

impl ValidationError {
    /// The input that should receive focus while this error is shown.
    pub fn focus(&self) -> Field {
        match self {
            ValidationError::MissingField(field) => *field,
            ValidationError::InvalidEmailFormat => Field::Email,
        }
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Check a draft in fixed field order, stopping at the first failure.
///
/// Order: username non-empty, email well-formed, age non-empty. The age
/// check is truthiness only; "abc" passes.
pub fn validate(record: &UserRecord) -> Result<(), ValidationError> {
    if record.username.is_empty() {
        return Err(ValidationError::MissingField(Field::Username));
    }
    if record.email.is_empty() || !is_valid_email(&record.email) {
        return Err(ValidationError::InvalidEmailFormat);
    }
    if record.age.is_empty() {
        return Err(ValidationError::MissingField(Field::Age));
    }
    Ok(())
}

// ============================================================================
// INTERNAL: address pattern
// ============================================================================

/// Check an address against the accepted shape: a non-empty local part of
/// word characters, dots and hyphens, exactly one `@`, then two or more
/// domain labels of word characters and hyphens, the final label 2 to 4
/// characters long.
///
/// The local part is deliberately permissive (dots and hyphens anywhere);
/// the domain is where the structure lives.
pub fn is_valid_email(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };

    if local.is_empty() || !local.chars().all(is_local_char) {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    if labels
        .iter()
        .any(|label| label.is_empty() || !label.chars().all(is_label_char))
    {
        return false;
    }

    let last = labels[labels.len() - 1];
    (MIN_TLD_LEN..=MAX_TLD_LEN).contains(&last.len())
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_local_char(c: char) -> bool {
    is_word_char(c) || c == '-' || c == '.'
}

fn is_label_char(c: char) -> bool {
    is_word_char(c) || c == '-'
}

// ============================================================================
// TESTS
// ============================================================================
