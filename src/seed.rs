//! Seed roster input.
//!
//! Reads a JSON array of user records to pre-populate the store or to feed
//! the `check` command. Input only; the application never writes state back.

use std::fs;
use std::io;
use std::path::Path;

use crate::types::UserRecord;

/// Load a roster from a JSON file.
///
/// The file holds a JSON array of records:
/// `[{"id": 1, "username": "bob", "email": "bob@example.com", "age": "42"}]`
///
/// Records are returned in file order; the store assigns no meaning to the
/// ids beyond what the file provides.
pub fn load_roster(path: &Path) -> io::Result<Vec<UserRecord>> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: {}", path.display(), e),
        )
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::types::UserId;

    #[test]
    fn loads_a_roster_in_file_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("roster.json");
        fs::write(
            &path,
            r#"[
                {"id": 3, "username": "carol", "email": "carol@example.com", "age": "28"},
                {"id": 1, "username": "bob", "email": "bob@example.com", "age": "42"}
            ]"#,
        )
        .unwrap();

        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].id, UserId(3));
        assert_eq!(roster[0].username, "carol");
        assert_eq!(roster[1].id, UserId(1));
        assert_eq!(roster[1].email, "bob@example.com");
    }

    #[test]
    fn empty_array_is_an_empty_roster() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("roster.json");
        fs::write(&path, "[]").unwrap();

        assert!(load_roster(&path).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_invalid_data() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("roster.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_roster(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn missing_file_propagates_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_roster(&temp.path().join("absent.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn wrong_shape_is_invalid_data() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("roster.json");
        fs::write(&path, r#"{"users": []}"#).unwrap();

        let err = load_roster(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
