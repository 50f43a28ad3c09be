//! Report formatting for roster checks.
//!
//! Pure functions: (CheckReport, OutputFormat) -> String. No I/O.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::{OutputFormat, UserId, UserRecord};
use crate::validate;

// ============================================================================
// CHECK RESULTS
// ============================================================================

/// Outcome of checking one roster entry.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEntry {
    /// Id from the roster file.
    pub id: UserId,
    /// Username from the roster file (possibly empty).
    pub username: String,
    /// None when the record is valid, otherwise the problem description.
    pub problem: Option<String>,
}

/// Validation outcomes for a whole roster file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    /// Check every record: the save-time field validation plus id
    /// uniqueness across the file.
    pub fn from_roster(roster: &[UserRecord]) -> Self {
        let mut seen: HashSet<UserId> = HashSet::new();
        let entries = roster
            .iter()
            .map(|user| {
                let first_occurrence = seen.insert(user.id);
                let problem = match validate::validate(user) {
                    Err(e) => Some(e.to_string()),
                    Ok(()) if !first_occurrence => Some(format!("Duplicate id {}", user.id)),
                    Ok(()) => None,
                };
                CheckEntry {
                    id: user.id,
                    username: user.username.clone(),
                    problem,
                }
            })
            .collect();
        CheckReport { entries }
    }

    /// True when every record passed.
    pub fn all_valid(&self) -> bool {
        self.entries.iter().all(|e| e.problem.is_none())
    }

    /// Number of records that failed.
    pub fn problem_count(&self) -> usize {
        self.entries.iter().filter(|e| e.problem.is_some()).count()
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Format a check report for output.
pub fn format_report(report: &CheckReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
    }
}

fn format_human(report: &CheckReport) -> String {
    let mut out = String::new();

    let problems: Vec<&CheckEntry> = report
        .entries
        .iter()
        .filter(|e| e.problem.is_some())
        .collect();

    if !problems.is_empty() {
        out.push_str("=== Problems ===\n");
        for entry in &problems {
            let name = if entry.username.is_empty() {
                "(no username)"
            } else {
                entry.username.as_str()
            };
            out.push_str(&format!(
                "  [{}] {} - {}\n",
                entry.id,
                name,
                entry.problem.as_deref().unwrap_or("")
            ));
        }
        out.push('\n');
    }

    out.push_str("=== Summary ===\n");
    out.push_str(&format!("Records checked: {}\n", report.entries.len()));
    out.push_str(&format!(
        "Valid:           {}\n",
        report.entries.len() - report.problem_count()
    ));
    out.push_str(&format!("Problems:        {}\n", report.problem_count()));

    out
}

fn format_json(report: &CheckReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize report to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
