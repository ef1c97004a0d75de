//! CLI front-end. Not part of the library's public contract — this is
//! just enough of a binary to drive `generate`/`analyse` from a
//! terminal.

use std::error::Error as StdError;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use boggle_board_generator::{analyse, generate, Constraints, Dictionary, DiceSet, ScoreTable};

#[derive(Parser)]
#[command(name = "boggle_board_generator", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Roll boards until one satisfies the given constraints, or the try
    /// budget is exhausted.
    Generate {
        #[arg(long)]
        dictionary: PathBuf,
        /// Path to a file with one die's 6 faces per line.
        #[arg(long)]
        dice: PathBuf,
        #[arg(long)]
        width: usize,
        #[arg(long)]
        height: usize,
        #[arg(long, default_value_t = 0)]
        min_words: u32,
        #[arg(long, default_value_t = -1)]
        max_words: i64,
        #[arg(long, default_value_t = 0)]
        min_score: u64,
        #[arg(long, default_value_t = -1)]
        max_score: i64,
        #[arg(long, default_value_t = 0)]
        min_longest: usize,
        #[arg(long, default_value_t = -1)]
        max_longest: i64,
        #[arg(long, default_value_t = 3)]
        min_legal_len: usize,
        #[arg(long, default_value_t = 1000)]
        max_tries: u32,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long)]
        no_prefilter: bool,
        /// JSON array of length->points entries; defaults to the
        /// standard table if omitted.
        #[arg(long)]
        score_table: Option<PathBuf>,
    },
    /// Find every legal word on a fixed board layout, ignoring all
    /// constraints.
    Analyse {
        #[arg(long)]
        dictionary: PathBuf,
        #[arg(long)]
        layout: String,
        #[arg(long)]
        width: usize,
        #[arg(long)]
        height: usize,
        #[arg(long)]
        score_table: Option<PathBuf>,
    },
}

fn load_dice(path: &PathBuf) -> Result<DiceSet, Box<dyn StdError>> {
    let text = std::fs::read_to_string(path)?;
    let faces: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    Ok(DiceSet::parse(&faces)?)
}

fn load_score_table(path: Option<PathBuf>) -> Result<ScoreTable, Box<dyn StdError>> {
    match path {
        Some(p) => Ok(ScoreTable::load(&p)?),
        None => Ok(ScoreTable::standard()),
    }
}

fn run() -> Result<(), Box<dyn StdError>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            dictionary,
            dice,
            width,
            height,
            min_words,
            max_words,
            min_score,
            max_score,
            min_longest,
            max_longest,
            min_legal_len,
            max_tries,
            seed,
            no_prefilter,
            score_table,
        } => {
            let dict = Dictionary::load(&dictionary)?;
            let mut dice_set = load_dice(&dice)?;
            let scores = load_score_table(score_table)?;
            let constraints = Constraints {
                min_words,
                max_words,
                min_score,
                max_score,
                min_longest,
                max_longest,
                min_legal_len,
            };
            let result = generate(
                &mut dice_set,
                width,
                height,
                &dict,
                &scores,
                &constraints,
                max_tries,
                seed,
                !no_prefilter,
            )?;
            match result {
                Some(r) => println!("{}", serde_json::to_string_pretty(&r)?),
                None => println!("null"),
            }
        }
        Command::Analyse {
            dictionary,
            layout,
            width,
            height,
            score_table,
        } => {
            let dict = Dictionary::load(&dictionary)?;
            let scores = load_score_table(score_table)?;
            let words = analyse(&dict, &scores, width, height, &layout)?;
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
