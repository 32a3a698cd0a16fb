//! Data types for the dedupe crate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RecordError, Result};

/// A validated snapshot of one remote file.
///
/// Built from raw API records via [`FileEntry::from_parts`]; every entry
/// is guaranteed to carry a parent set and a parsed modification time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Opaque identifier, stable for the file's lifetime on the service
    pub id: String,
    /// Display name; not unique
    pub name: String,
    /// Parent folder ids, treated as a single compound key value
    pub parents: Vec<String>,
    /// Last modification time, used only for ordering
    pub modified: DateTime<Utc>,
}

impl FileEntry {
    /// Build an entry from raw record parts.
    ///
    /// Returns a [`RecordError`] when the record is missing its parents or
    /// modification time, or when the timestamp does not parse. Callers
    /// skip and log such records rather than aborting.
    pub fn from_parts(
        id: String,
        name: String,
        parents: Option<Vec<String>>,
        modified_time: Option<String>,
    ) -> Result<Self> {
        let Some(parents) = parents else {
            return Err(RecordError::MissingParents { id, name });
        };
        let Some(raw) = modified_time else {
            return Err(RecordError::MissingModifiedTime { id, name });
        };
        let modified = match DateTime::parse_from_rfc3339(&raw) {
            Ok(t) => t.with_timezone(&Utc),
            Err(source) => {
                return Err(RecordError::BadTimestamp {
                    id,
                    name,
                    value: raw,
                    source,
                });
            }
        };

        Ok(Self {
            id,
            name,
            parents,
            modified,
        })
    }
}

/// Files sharing one name whose (name, parents) pair occurs more than
/// once in the full set.
///
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// The shared display name
    pub name: String,
    /// Members, in discovery order
    pub files: Vec<FileEntry>,
}

impl DuplicateGroup {
    /// Number of members in this group
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_ok() {
        let entry = FileEntry::from_parts(
            "abc123".to_string(),
            "report.txt".to_string(),
            Some(vec!["P1".to_string()]),
            Some("2023-01-01T00:00:00.000Z".to_string()),
        )
        .unwrap();

        assert_eq!(entry.id, "abc123");
        assert_eq!(entry.name, "report.txt");
        assert_eq!(entry.parents, vec!["P1".to_string()]);
        assert_eq!(entry.modified.to_rfc3339(), "2023-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_from_parts_missing_parents() {
        let err = FileEntry::from_parts(
            "abc123".to_string(),
            "orphan".to_string(),
            None,
            Some("2023-01-01T00:00:00.000Z".to_string()),
        )
        .unwrap_err();

        assert!(matches!(err, RecordError::MissingParents { .. }));
        assert!(err.to_string().contains("abc123"));
    }

    #[test]
    fn test_from_parts_missing_time() {
        let err = FileEntry::from_parts(
            "abc123".to_string(),
            "timeless".to_string(),
            Some(vec!["P1".to_string()]),
            None,
        )
        .unwrap_err();

        assert!(matches!(err, RecordError::MissingModifiedTime { .. }));
    }

    #[test]
    fn test_from_parts_bad_timestamp() {
        let err = FileEntry::from_parts(
            "abc123".to_string(),
            "weird".to_string(),
            Some(vec!["P1".to_string()]),
            Some("yesterday".to_string()),
        )
        .unwrap_err();

        match err {
            RecordError::BadTimestamp { value, .. } => assert_eq!(value, "yesterday"),
            other => panic!("expected BadTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn test_from_parts_fractional_seconds() {
        // Drive timestamps carry millisecond precision
        let entry = FileEntry::from_parts(
            "f1".to_string(),
            "a.txt".to_string(),
            Some(vec!["P1".to_string()]),
            Some("2023-06-15T12:34:56.789Z".to_string()),
        )
        .unwrap();

        assert_eq!(entry.modified.timestamp_subsec_millis(), 789);
    }

    #[test]
    fn test_group_count() {
        let group = DuplicateGroup {
            name: "x.txt".to_string(),
            files: Vec::new(),
        };
        assert_eq!(group.count(), 0);
    }
}
