//! Attendance roster CLI.
//!
//! Manages a persisted list of groups (`.roster/groups.json`) with a member
//! count and an attendance status each. `toggle` flips a group between
//! `pending` and `ok`; the remaining subcommands cover the rest of the group
//! lifecycle.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;

use roster::core::roster::ToggleOutcome;
use roster::exit_codes;
use roster::group::{Group, Status};
use roster::io::config::{RosterConfig, load_config};
use roster::io::confirm::{AssumeYes, StdinConfirm};
use roster::io::paths::RosterPaths;
use roster::io::snapshot_store::FileSnapshot;
use roster::logging;
use roster::store::GroupStore;

#[derive(Parser)]
#[command(name = "roster", version, about = "Attendance tracker for named groups")]
struct Cli {
    /// Project root containing the `.roster/` data directory.
    #[arg(long, global = true, default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a group. Zero members start as `unknown`, otherwise `pending`.
    Add {
        name: String,
        /// Member count.
        count: u32,
    },
    /// Print all groups in creation order.
    List,
    /// Toggle a group between `pending` and `ok` (`unknown` never changes).
    Toggle { id: u64 },
    /// Replace a group's name and member count. Status is kept as is.
    Edit { id: u64, name: String, count: u32 },
    /// Delete a group.
    Remove { id: u64 },
    /// Delete every group and the persisted snapshot.
    Reset {
        /// Skip the interactive confirmation.
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = RosterPaths::new(&cli.dir);
    let config = load_config(&paths.config_path)?;
    let backend = FileSnapshot::new(paths.snapshot_path(&config.snapshot_file));
    let mut store = GroupStore::open(backend);

    match cli.command {
        Command::Add { name, count } => cmd_add(&mut store, &name, count),
        Command::List => cmd_list(&store, &config),
        Command::Toggle { id } => cmd_toggle(&mut store, id),
        Command::Edit { id, name, count } => cmd_edit(&mut store, id, &name, count),
        Command::Remove { id } => cmd_remove(&mut store, id),
        Command::Reset { yes } => cmd_reset(&mut store, yes),
    }
}

fn cmd_add(store: &mut GroupStore<FileSnapshot>, name: &str, count: u32) -> Result<()> {
    let group = store
        .create(name, Some(count))
        .ok_or_else(|| anyhow!("group name must not be blank"))?;
    println!("added {} (id {}, {})", group.name, group.id, group.status.label());
    Ok(())
}

fn cmd_list(store: &GroupStore<FileSnapshot>, config: &RosterConfig) -> Result<()> {
    for group in store.groups() {
        println!("{}", group_line(group, config.color));
    }
    Ok(())
}

fn cmd_toggle(store: &mut GroupStore<FileSnapshot>, id: u64) -> Result<()> {
    match store.toggle_status(id) {
        ToggleOutcome::Changed(status) => {
            println!("group {id} is now {}", status.label());
            Ok(())
        }
        ToggleOutcome::Sticky => {
            println!("group {id} stays unknown");
            Ok(())
        }
        ToggleOutcome::NotFound => Err(anyhow!("no group with id {id}")),
    }
}

fn cmd_edit(store: &mut GroupStore<FileSnapshot>, id: u64, name: &str, count: u32) -> Result<()> {
    if store.update(id, name, Some(count)) {
        println!("updated group {id}");
        return Ok(());
    }
    if store.get(id).is_none() {
        return Err(anyhow!("no group with id {id}"));
    }
    Err(anyhow!("group name must not be blank"))
}

fn cmd_remove(store: &mut GroupStore<FileSnapshot>, id: u64) -> Result<()> {
    if !store.delete(id) {
        return Err(anyhow!("no group with id {id}"));
    }
    println!("removed group {id}");
    Ok(())
}

fn cmd_reset(store: &mut GroupStore<FileSnapshot>, yes: bool) -> Result<()> {
    let cleared = if yes {
        store.reset_all(&AssumeYes)
    } else {
        store.reset_all(&StdinConfirm)
    };
    if cleared {
        println!("all groups deleted");
    } else {
        println!("reset cancelled");
    }
    Ok(())
}

fn group_line(group: &Group, color: bool) -> String {
    format!(
        "{:>6}  {:<24} {:>5}  {}",
        group.id,
        group.name,
        group.count,
        status_cell(group.status, color)
    )
}

/// Status column: pending is amber, ok green, unknown purple.
fn status_cell(status: Status, color: bool) -> String {
    let label = status.label();
    if !color {
        return label.to_string();
    }
    match status {
        Status::Pending => label.yellow(),
        Status::Ok => label.green(),
        Status::Unknown => label.purple(),
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add() {
        let cli = Cli::parse_from(["roster", "add", "Team A", "5"]);
        assert!(matches!(
            cli.command,
            Command::Add { ref name, count: 5 } if name == "Team A"
        ));
    }

    #[test]
    fn parse_reset_defaults_to_interactive() {
        let cli = Cli::parse_from(["roster", "reset"]);
        assert!(matches!(cli.command, Command::Reset { yes: false }));
    }

    #[test]
    fn parse_reset_yes() {
        let cli = Cli::parse_from(["roster", "reset", "--yes"]);
        assert!(matches!(cli.command, Command::Reset { yes: true }));
    }

    #[test]
    fn parse_global_dir_after_subcommand() {
        let cli = Cli::parse_from(["roster", "list", "--dir", "/tmp/elsewhere"]);
        assert_eq!(cli.dir, PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn parse_rejects_negative_count() {
        assert!(Cli::try_parse_from(["roster", "add", "Team A", "-1"]).is_err());
    }

    #[test]
    fn group_line_without_color_is_plain() {
        let group = Group {
            id: 1,
            name: "Team A".to_string(),
            count: 5,
            status: Status::Pending,
        };
        let line = group_line(&group, false);
        assert!(line.contains("Team A"));
        assert!(line.ends_with("pending"));
        assert!(!line.contains('\u{1b}'), "no ANSI escapes expected: {line:?}");
    }
}
