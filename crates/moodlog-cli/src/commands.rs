use std::path::Path;

use anyhow::Context;
use tracing::debug;

use moodlog_core::{EntryRepository, SqliteStore};

use crate::cli::{AddArgs, Cli, DeleteArgs, ListArgs};
use crate::config::MoodlogConfig;
use crate::output::{entries_json, render_list};

pub fn open_repository(path: &Path) -> anyhow::Result<EntryRepository<SqliteStore>> {
    debug!(path = %path.display(), "opening journal");
    EntryRepository::open(path)
        .with_context(|| format!("could not load entries from {}", path.display()))
}

/// Re-render the list whenever the repository publishes.
fn redraw_on_change(repo: &EntryRepository<SqliteStore>, preview_chars: usize) {
    repo.subscribe(move |entries| {
        println!("{}", render_list(entries, Some(preview_chars)));
    });
}

pub fn handle_add(
    cli: &Cli,
    args: &AddArgs,
    repo: &EntryRepository<SqliteStore>,
    config: &MoodlogConfig,
) -> anyhow::Result<()> {
    if args.show {
        redraw_on_change(repo, config.preview_chars());
    }

    let id = repo
        .add_entry(&args.text, args.rating)
        .context("could not save entry")?;

    if !cli.quiet {
        println!("Added entry {}", id);
    }
    Ok(())
}

pub fn handle_list(
    args: &ListArgs,
    repo: &EntryRepository<SqliteStore>,
    config: &MoodlogConfig,
) -> anyhow::Result<()> {
    let entries = repo.current();
    if args.json {
        println!("{}", entries_json(&entries)?);
        return Ok(());
    }

    let preview = if args.full {
        None
    } else {
        Some(config.preview_chars())
    };
    println!("{}", render_list(&entries, preview));
    Ok(())
}

pub fn handle_delete(
    cli: &Cli,
    args: &DeleteArgs,
    repo: &EntryRepository<SqliteStore>,
    config: &MoodlogConfig,
) -> anyhow::Result<()> {
    if args.show {
        redraw_on_change(repo, config.preview_chars());
    }

    repo.delete_entry(args.id)
        .context("could not delete entry")?;

    if !cli.quiet {
        println!("Deleted entry {}", args.id);
    }
    Ok(())
}
