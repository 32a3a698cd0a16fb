#![allow(dead_code)]

use colored::Colorize;

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a warning message
pub fn warn(msg: &str) {
    println!("{} {}", "⚠".yellow(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a dim/muted message
pub fn dim(msg: &str) {
    println!("  {}", msg.dimmed());
}

/// Print a header/title
pub fn header(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "─".repeat(title.len()).dimmed());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// One-line rendering of a file for reports
pub fn file_line(name: &str, id: &str, modified: &str) -> String {
    format!("{name} | {id} | modified {modified}")
}

/// Indented rendering of a group member (the name is already printed
/// on the group line)
pub fn member_line(id: &str, modified: &str) -> String {
    format!("{id} modified {modified}")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_line() {
        assert_eq!(
            file_line("report.txt", "1abc", "2023-01-01T00:00:00.000Z"),
            "report.txt | 1abc | modified 2023-01-01T00:00:00.000Z"
        );
    }

    #[test]
    fn test_member_line() {
        assert_eq!(
            member_line("1abc", "2023-01-01T00:00:00.000Z"),
            "1abc modified 2023-01-01T00:00:00.000Z"
        );
    }
}
