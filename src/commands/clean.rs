//! Confirmed deletion of older duplicate copies.

use anyhow::{Context, Result};
use colored::Colorize;

use dedupe::{find_duplicates, select_deletions};

use crate::cli::CleanArgs;
use crate::ui;

pub fn run(args: &CleanArgs) -> Result<()> {
    ui::header("Google Drive duplicate sweep");

    let client = super::login(&args.credentials)?;
    let (entries, skipped) = super::fetch_entries(&client)?;

    ui::kv("Files", &entries.len().to_string());
    if skipped > 0 {
        ui::warn(&format!("Skipped {skipped} malformed records (see log)"));
    }
    println!();

    let groups = find_duplicates(&entries);
    if groups.is_empty() {
        ui::success("No duplicates found!");
        return Ok(());
    }

    let deletions = select_deletions(&groups);
    super::print_groups(&groups, &deletions);

    ui::kv("Duplicate groups", &groups.len().to_string());
    ui::kv("Queued for deletion", &deletions.len().to_string());
    println!();

    if deletions.is_empty() {
        // Every group is tied on modification time; ties keep all copies
        ui::info("Nothing to delete.");
        return Ok(());
    }

    if args.dry_run {
        for file in &deletions {
            println!(
                "  would delete {}",
                ui::file_line(&file.name, &file.id, &super::timestamp(file))
            );
        }
        println!();
        ui::dim("Dry run - nothing deleted");
        return Ok(());
    }

    if !args.yes {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!("Delete {} files?", deletions.len()))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;

        if !confirmed {
            println!();
            ui::warn("Cancelled. No files deleted.");
            return Ok(());
        }
        println!();
    }

    let mut deleted = 0usize;
    let mut failures: Vec<(String, gdrive::Error)> = Vec::new();
    for file in &deletions {
        println!(
            "  {}",
            ui::file_line(&file.name, &file.id, &super::timestamp(file))
        );
        match client.delete(&file.id) {
            Ok(()) => deleted += 1,
            Err(e) => {
                println!("    {} {e}", "✗".red());
                failures.push((file.id.clone(), e));
            }
        }
    }

    println!();
    if failures.is_empty() {
        ui::success(&format!("Finished: {deleted} files deleted"));
    } else {
        ui::warn(&format!(
            "Finished with errors: {} deleted, {} failed",
            deleted,
            failures.len()
        ));
        for (id, err) in &failures {
            ui::dim(&format!("{id}: {err}"));
        }
    }

    Ok(())
}
