use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use moodlog_core::VERSION;

/// Moodlog - a tiny journal where every entry carries a mood
#[derive(Parser)]
#[command(name = "moodlog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal database
    #[arg(long, global = true, env = "MOODLOG_DB")]
    pub db: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, global = true, env = "MOODLOG_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an entry dated today
    Add(AddArgs),

    /// List entries, newest date first
    List(ListArgs),

    /// Delete an entry by id
    Delete(DeleteArgs),
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry text
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Mood rating: 1 (awful), 2 (bad), 3 (good), 4 (great)
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..=4))]
    pub rating: i32,

    /// Print the updated list after adding
    #[arg(long)]
    pub show: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show full entry text instead of a preview
    #[arg(long)]
    pub full: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Print the updated list after deleting
    #[arg(long)]
    pub show: bool,
}
