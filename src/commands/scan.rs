//! Read-only duplicate report.

use anyhow::Result;

use dedupe::{find_duplicates, select_deletions};

use crate::cli::ScanArgs;
use crate::ui;

pub fn run(args: &ScanArgs) -> Result<()> {
    ui::header("Google Drive duplicates");

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
    ui::dim("Run 'drivesweep clean' to delete the marked copies");

    Ok(())
}
