//! Duplicate detection: group files by (name, parent-folder-set)

use std::collections::HashMap;

use crate::types::{DuplicateGroup, FileEntry};

/// Partition a file set into duplicate groups.
///
/// A file belongs to a group when its name occurs more than once in the
/// whole set AND its (name, parents) pair occurs more than once in the
/// whole set. Both counts are global: a file is flagged as soon as its
/// pair appears anywhere else, not per group.
///
/// Two passes: count first, then collect into groups keyed by name.
/// Groups and their members keep discovery order.
pub fn find_duplicates(files: &[FileEntry]) -> Vec<DuplicateGroup> {
    let mut name_counts: HashMap<&str, usize> = HashMap::new();
    let mut pair_counts: HashMap<(&str, &[String]), usize> = HashMap::new();
    for file in files {
        *name_counts.entry(file.name.as_str()).or_insert(0) += 1;
        *pair_counts
            .entry((file.name.as_str(), file.parents.as_slice()))
            .or_insert(0) += 1;
    }

    let mut groups: Vec<DuplicateGroup> = Vec::new();
    let mut by_name: HashMap<&str, usize> = HashMap::new();
    for file in files {
        if name_counts[file.name.as_str()] < 2 {
            continue;
        }
        if pair_counts[&(file.name.as_str(), file.parents.as_slice())] < 2 {
            continue;
        }

        match by_name.get(file.name.as_str()) {
            Some(&i) => groups[i].files.push(file.clone()),
            None => {
                by_name.insert(file.name.as_str(), groups.len());
                groups.push(DuplicateGroup {
                    name: file.name.clone(),
                    files: vec![file.clone()],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, parents: &[&str], time: &str) -> FileEntry {
        FileEntry::from_parts(
            id.to_string(),
            name.to_string(),
            Some(parents.iter().map(ToString::to_string).collect()),
            Some(time.to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_same_name_same_parent_grouped() {
        let files = vec![
            entry("f1", "report.txt", &["P1"], "2023-01-01T00:00:00.000Z"),
            entry("f2", "report.txt", &["P1"], "2023-01-02T00:00:00.000Z"),
        ];

        let groups = find_duplicates(&files);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "report.txt");
        assert_eq!(groups[0].count(), 2);
    }

    #[test]
    fn test_same_name_different_parents_not_grouped() {
        // Scenario B: name collision alone is not a duplicate
        let files = vec![
            entry("f1", "x.txt", &["P1"], "2023-01-01T00:00:00.000Z"),
            entry("f2", "x.txt", &["P2"], "2023-01-02T00:00:00.000Z"),
        ];

        assert!(find_duplicates(&files).is_empty());
    }

    #[test]
    fn test_unique_names_not_grouped() {
        let files = vec![
            entry("f1", "a.txt", &["P1"], "2023-01-01T00:00:00.000Z"),
            entry("f2", "b.txt", &["P1"], "2023-01-02T00:00:00.000Z"),
        ];

        assert!(find_duplicates(&files).is_empty());
    }

    #[test]
    fn test_pair_count_is_global() {
        // f3 shares a (name, parents) pair with f1, so both are flagged;
        // f2 shares only the name and stays out.
        let files = vec![
            entry("f1", "x.txt", &["P1"], "2023-01-01T00:00:00.000Z"),
            entry("f2", "x.txt", &["P2"], "2023-01-02T00:00:00.000Z"),
            entry("f3", "x.txt", &["P1"], "2023-01-03T00:00:00.000Z"),
        ];

        let groups = find_duplicates(&files);
        assert_eq!(groups.len(), 1);
        let ids: Vec<&str> = groups[0].files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f3"]);
    }

    #[test]
    fn test_multi_parent_key_is_exact() {
        // The whole parent sequence is the key; a subset does not match.
        let files = vec![
            entry("f1", "x.txt", &["P1", "P2"], "2023-01-01T00:00:00.000Z"),
            entry("f2", "x.txt", &["P1"], "2023-01-02T00:00:00.000Z"),
        ];

        assert!(find_duplicates(&files).is_empty());
    }

    #[test]
    fn test_discovery_order_preserved() {
        let files = vec![
            entry("b1", "b.txt", &["P1"], "2023-01-01T00:00:00.000Z"),
            entry("a1", "a.txt", &["P1"], "2023-01-01T00:00:00.000Z"),
            entry("b2", "b.txt", &["P1"], "2023-01-02T00:00:00.000Z"),
            entry("a2", "a.txt", &["P1"], "2023-01-02T00:00:00.000Z"),
        ];

        let groups = find_duplicates(&files);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["b.txt", "a.txt"]);
        let b_ids: Vec<&str> = groups[0].files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(b_ids, vec!["b1", "b2"]);
    }

    #[test]
    fn test_idempotent() {
        let files = vec![
            entry("f1", "x.txt", &["P1"], "2023-01-01T00:00:00.000Z"),
            entry("f2", "x.txt", &["P1"], "2023-01-02T00:00:00.000Z"),
            entry("f3", "y.txt", &["P2"], "2023-01-03T00:00:00.000Z"),
        ];

        assert_eq!(find_duplicates(&files), find_duplicates(&files));
    }

    #[test]
    fn test_empty_input() {
        assert!(find_duplicates(&[]).is_empty());
    }
}
