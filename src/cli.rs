use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "drivesweep")]
#[command(version)]
#[command(about = "Find and remove duplicate files in Google Drive", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report duplicate files without deleting anything
    Scan(ScanArgs),

    /// Delete all but the newest copy of each duplicate group
    Clean(CleanArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
pub struct ScanArgs {
    /// Path to the OAuth client credentials JSON
    #[arg(short, long, default_value = "./credentials.json")]
    pub credentials: String,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the OAuth client credentials JSON
    #[arg(short, long, default_value = "./credentials.json")]
    pub credentials: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Show what would be deleted without deleting anything
    #[arg(long)]
    pub dry_run: bool,
}
