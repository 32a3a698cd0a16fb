//! Subcommand implementations.

pub mod clean;
pub mod scan;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;

use dedupe::{DuplicateGroup, FileEntry};
use gdrive::{Authenticator, ClientSecrets, DriveClient, filter_unshared};

use crate::config;
use crate::ui;

/// Run the interactive OAuth login and return an authenticated client.
fn login(credentials: &str) -> Result<DriveClient> {
    let path = config::credentials_path(credentials)?;
    let secrets =
        ClientSecrets::load(&path).with_context(|| format!("failed to load {}", path.display()))?;

    ui::info("Initializing OAuth flow...");
    println!();
    let token = Authenticator::new(secrets)
        .login()
        .context("authentication failed")?;
    ui::success("Authenticated");
    println!();

    Ok(DriveClient::new(token))
}

/// Enumerate every non-shared file and convert to validated entries.
///
/// Malformed records (missing parents or modification time) are logged
/// and skipped; the skip count comes back for the end-of-run summary.
fn fetch_entries(client: &DriveClient) -> Result<(Vec<FileEntry>, usize)> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message("Listing files...");

    let files = client
        .list_all(|count| spinner.set_message(format!("Listing files... {count}")))
        .context("listing files failed")?;
    spinner.finish_and_clear();

    let files = filter_unshared(files);

    let mut entries = Vec::with_capacity(files.len());
    let mut skipped = 0usize;
    for file in files {
        match FileEntry::from_parts(file.id, file.name, file.parents, file.modified_time) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                log::warn!("skipping record: {e}");
                skipped += 1;
            }
        }
    }

    Ok((entries, skipped))
}

/// RFC 3339 with milliseconds, the way the API prints timestamps.
fn timestamp(entry: &FileEntry) -> String {
    entry.modified.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Print every duplicate group with its members, marking the copies
/// queued for deletion.
fn print_groups(groups: &[DuplicateGroup], deletions: &[FileEntry]) {
    let marked: HashSet<&str> = deletions.iter().map(|f| f.id.as_str()).collect();

    for group in groups {
        println!("{}", group.name.bold());
        for file in &group.files {
            let line = ui::member_line(&file.id, &timestamp(file));
            if marked.contains(file.id.as_str()) {
                println!("  {} {}", "✗".red(), line.dimmed());
            } else {
                println!("  {} {}", "★".green(), line);
            }
        }
        println!();
    }
}
