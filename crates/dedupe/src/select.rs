//! Deletion selection: everything but the newest copy of each group

use std::collections::HashSet;

use crate::types::{DuplicateGroup, FileEntry};

/// Pick the members of each group to delete.
///
/// A member is marked when at least one other member of its group has a
/// strictly later modification time; the unique newest copy, and every
/// copy tied for newest, survive. Ties preserve all copies.
///
/// The result follows discovery order and contains each file at most
/// once, however many newer siblings it has.
pub fn select_deletions(groups: &[DuplicateGroup]) -> Vec<FileEntry> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut deletions: Vec<FileEntry> = Vec::new();

    for group in groups {
        for file in &group.files {
            let superseded = group.files.iter().any(|other| file.modified < other.modified);
            if superseded && seen.insert(file.id.as_str()) {
                deletions.push(file.clone());
            }
        }
    }

    deletions
}
