//! Word Guess - CLI
//!
//! Play in a TUI or on plain stdin, evaluate guesses against a known
//! secret, and manage saved statistics.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use word_guess::{
    commands::{evaluate_guesses, reset_stats, run_simple, show_stats},
    config::{Settings, default_data_dir},
    core::{Difficulty, KeyboardLayout, Outcome},
    output::{print_board, print_error, print_keyboard, print_warning},
    session::Session,
    storage::Store,
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_guess",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for statistics, settings and the saved game
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Rules to play by (saved for next time)
    #[arg(short = 'm', long, global = true, value_enum)]
    difficulty: Option<Difficulty>,

    /// Secret words to draw puzzles from, one per line
    #[arg(short = 'a', long, global = true)]
    answers: Option<PathBuf>,

    /// Keyboard arrangement (saved for next time)
    #[arg(short = 'k', long, global = true, value_enum)]
    keyboard: Option<KeyboardLayout>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-mode game on stdin without the TUI
    Simple,

    /// Score a sequence of guesses against a known secret
    Evaluate {
        /// The secret word
        secret: String,

        /// Guesses in the order they are made
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Show saved statistics
    Stats,

    /// Clear statistics and discard the saved game
    Reset,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        print_error(format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let store = Store::new(data_dir);
    let settings = load_settings(&store, &cli)?;

    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let dictionary = load_dictionary(cli.answers.as_deref())?;
            run_play_command(store, dictionary, settings)
        }
        Commands::Simple => {
            let dictionary = load_dictionary(cli.answers.as_deref())?;
            run_simple_command(store, dictionary, settings)
        }
        Commands::Evaluate { secret, guesses } => {
            run_evaluate_command(&secret, &guesses, settings)
        }
        Commands::Stats => {
            show_stats(&store).context("could not read statistics")?;
            Ok(())
        }
        Commands::Reset => {
            reset_stats(&store).context("could not reset statistics")?;
            println!("{}", "Statistics cleared.".green());
            Ok(())
        }
    }
}

/// Saved settings with command-line overrides applied and written back
fn load_settings(store: &Store, cli: &Cli) -> Result<Settings> {
    let saved = store.load_settings().unwrap_or_else(|err| {
        print_warning(format!("{err}; using default settings"));
        Settings::default()
    });

    let settings = saved.with_overrides(cli.difficulty, cli.keyboard);
    if settings != saved {
        store
            .save_settings(&settings)
            .with_context(|| format!("could not save settings in {}", store.root().display()))?;
    }
    Ok(settings)
}

/// Embedded word lists, or a custom secret-word file
fn load_dictionary(answers: Option<&Path>) -> Result<Dictionary> {
    let Some(path) = answers else {
        return Ok(Dictionary::embedded());
    };

    let words = load_from_file(path)?;
    if words.is_empty() {
        bail!("{} contains no five-letter words", path.display());
    }
    Ok(Dictionary::with_answers(words))
}

fn open_session(store: Store, dictionary: Dictionary, settings: Settings) -> Result<Session> {
    let (session, report) = Session::open(store, dictionary, settings, StdRng::from_os_rng())
        .context("could not start a puzzle")?;

    for err in &report.recovered {
        print_warning(format!("{err}; starting from defaults"));
    }
    Ok(session)
}

fn run_play_command(store: Store, dictionary: Dictionary, settings: Settings) -> Result<()> {
    use word_guess::interactive::{App, run_tui};

    let session = open_session(store, dictionary, settings)?;
    run_tui(App::new(session))
}

fn run_simple_command(store: Store, dictionary: Dictionary, settings: Settings) -> Result<()> {
    let mut session = open_session(store, dictionary, settings)?;
    run_simple(&mut session)
}

fn run_evaluate_command(secret: &str, guesses: &[String], settings: Settings) -> Result<()> {
    let report = evaluate_guesses(secret, guesses, settings.difficulty)
        .with_context(|| format!("could not evaluate guesses against {secret}"))?;

    print_board(&report.rows);
    println!();
    print_keyboard(&report.keyboard, settings.keyboard_layout);
    println!();

    match report.outcome {
        Outcome::Won => println!(
            "{}",
            format!("✅ Solved in {}/6", report.rows.len()).green().bold()
        ),
        Outcome::Lost => println!(
            "{}",
            format!("❌ Lost, the word was {}", report.secret).red().bold()
        ),
        Outcome::InProgress => println!("{}", "In progress".bright_cyan()),
    }

    Ok(())
}
