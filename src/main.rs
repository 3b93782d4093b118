//! IPA Master - CLI
//!
//! Terminal IPA transcription quiz with a TUI game mode and CLI commands
//! for the persistent player profile.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ipa_master::{
    dictionary::{Dictionary, loader},
    interactive::{App, run_tui},
    output::{print_achievements, print_statistics},
    profile::ProfileStore,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "ipa_master",
    about = "Terminal IPA transcription quiz with scoring, achievements, and player progression",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (one `spelling,transcription` per line); defaults to the embedded list
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz (default - interactive TUI)
    Play,

    /// Show lifetime statistics
    Stats,

    /// List unlocked and locked achievements
    Achievements,

    /// Change the profile name
    Rename {
        /// The new player name
        name: String,
    },

    /// Delete all progress
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Dump the profile and game history as JSON
    Export,
}

/// Load the word list from the -d flag, or fall back to the embedded one
fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => Ok(loader::load_from_file(path)?),
        None => Ok(Dictionary::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.dictionary.as_deref()),
        Commands::Stats => run_stats_command(),
        Commands::Achievements => run_achievements_command(),
        Commands::Rename { name } => run_rename_command(&name),
        Commands::Reset { yes } => run_reset_command(yes),
        Commands::Export => run_export_command(),
    }
}

fn run_play_command(dictionary_path: Option<&Path>) -> Result<()> {
    let dictionary = load_dictionary(dictionary_path)?;
    let store = ProfileStore::open()?;
    let app = App::new(&dictionary, store);
    run_tui(app)
}

fn run_stats_command() -> Result<()> {
    let store = ProfileStore::open()?;
    let profile = store.load_profile()?;
    print_statistics(&profile);
    Ok(())
}

fn run_achievements_command() -> Result<()> {
    let store = ProfileStore::open()?;
    let profile = store.load_profile()?;
    print_achievements(&profile.achievements);
    Ok(())
}

fn run_rename_command(name: &str) -> Result<()> {
    let store = ProfileStore::open()?;
    let mut profile = store.load_profile()?;
    profile.name = name.to_string();
    store.save_profile(&profile)?;
    println!("✅ Name changed to: {name}");
    Ok(())
}

fn run_reset_command(yes: bool) -> Result<()> {
    if !yes {
        let confirm = prompt("❌ Are you sure? This will delete ALL progress (y/N)")?;
        if confirm.trim().to_lowercase() != "y" {
            println!("Aborted.");
            return Ok(());
        }
    }

    let store = ProfileStore::open()?;
    store.reset()?;
    println!("✅ Progress reset!");
    Ok(())
}

fn run_export_command() -> Result<()> {
    let store = ProfileStore::open()?;
    println!("{}", store.export_json()?);
    Ok(())
}

/// Get user input with a prompt
fn prompt(question: &str) -> Result<String> {
    print!("{question}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
