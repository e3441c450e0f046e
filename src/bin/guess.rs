//! Terminal front-end: think of a character, answer the questions.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;

use question_tree::{evaluate, logging, Error, GameConfig, GameSetup, Result};

#[derive(Parser, Debug)]
#[command(name = "guess", version, about = "Guess a character with yes/no questions")]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Question bank CSV (overrides the config).
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Characters CSV (overrides the config).
    #[arg(long)]
    characters: Option<PathBuf>,

    /// Skip questions that cannot narrow the candidates.
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively (default).
    Play,
    /// Print the shape of the built tree.
    Stats,
    /// Play every candidate automatically and report accuracy.
    Evaluate {
        /// Seed for coin-flip answers (overrides the config).
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    logging::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::new(),
    };
    if let Some(path) = cli.questions {
        config = config.with_questions_path(path);
    }
    if let Some(path) = cli.characters {
        config = config.with_characters_path(path);
    }
    if cli.strict {
        config = config.strict();
    }
    debug!(?config, "configuration");

    let setup = GameSetup::from_config(&config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play(&setup),
        Command::Stats => {
            let stats = setup.tree().stats();
            println!("nodes: {}", stats.node_count);
            println!("questions: {}", stats.internal_count);
            println!("max depth: {}", stats.max_depth);
            println!(
                "leaves: {} identified, {} exhausted, {} undistinguishable, {} no match",
                stats.identified, stats.exhausted, stats.undistinguishable, stats.no_match
            );
            Ok(())
        }
        Command::Evaluate { seed } => {
            let seed = seed.unwrap_or(config.seed);
            let report = evaluate(setup.tree().clone(), setup.universe(), seed)?;
            println!("games: {}", report.games);
            println!("correct: {} ({:.1}%)", report.correct, report.accuracy() * 100.0);
            println!("misidentified: {}", report.misidentified);
            println!(
                "unresolved: {} exhausted, {} undistinguishable, {} no match",
                report.exhausted, report.undistinguishable, report.no_match
            );
            println!(
                "questions: {:.2} mean, {} max",
                report.mean_questions(),
                report.max_questions
            );
            Ok(())
        }
    }
}

fn play(setup: &GameSetup) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = setup.new_game();

    println!("Think of a character. Answer with y or n.");
    while let Some(text) = game.current_question() {
        print!("{} ", text);
        io::stdout().flush().map_err(|source| Error::Io {
            operation: "write prompt".to_string(),
            source,
        })?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.map_err(|source| Error::Io {
            operation: "read answer".to_string(),
            source,
        })?;

        match parse_answer(&line) {
            Some(answer) => game.submit_answer(answer)?,
            None => println!("Please answer y or n."),
        }
    }

    let outcome = game.require_outcome()?;
    match setup.character_for(outcome)? {
        Some(character) => println!("You are thinking of {} ({}).", character.name, character.image_path),
        None => println!("I give up: {}.", outcome),
    }
    Ok(())
}

fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
