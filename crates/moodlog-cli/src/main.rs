//! Moodlog CLI - a tiny journal where every entry carries a mood
//!
//! This is the terminal front end for Moodlog. It resolves where the journal
//! lives, opens the entry repository and renders what it publishes.

mod cli;
mod commands;
mod config;
mod logging;
mod output;

use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = config::load(&cli)?;
    let db_path = config::resolve_db_path(&cli, &config)?;
    let repo = commands::open_repository(&db_path)?;

    match &cli.command {
        Commands::Add(args) => commands::handle_add(&cli, args, &repo, &config),
        Commands::List(args) => commands::handle_list(args, &repo, &config),
        Commands::Delete(args) => commands::handle_delete(&cli, args, &repo, &config),
    }
}
