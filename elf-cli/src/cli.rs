//! CLI argument parsing using clap

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code input fetcher and answer submitter
#[derive(Parser, Debug)]
#[command(name = "elf", about = "Fetch Advent of Code inputs and submit answers", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Cache directory for inputs and guess logs [default: $ELF_CACHE_DIR]
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Session cookie value [default: $AOC_SESSION_COOKIE]
    #[arg(long, global = true)]
    pub session: Option<String>,

    /// Plain messages without festive flavor text
    #[arg(long, global = true)]
    pub plain: bool,

    /// Quiet mode - only output the essentials
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the puzzle input, downloading it on first use
    FetchInput(PuzzleArgs),
    /// Submit an answer, unless the guess log already knows the outcome
    Submit(AnswerArgs),
    /// Check an answer against the guess log without submitting
    Check(AnswerArgs),
    /// List logged guesses for a puzzle
    Guesses {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// Only show guesses for this part
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
        part: Option<u8>,
    },
}

#[derive(ClapArgs, Debug, Clone, Copy)]
pub struct PuzzleArgs {
    /// Puzzle year
    pub year: u16,

    /// Puzzle day
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AnswerArgs {
    #[command(flatten)]
    pub puzzle: PuzzleArgs,

    /// Puzzle part
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: u8,

    /// Answer to submit (integers enable bound checks)
    pub answer: String,
}
