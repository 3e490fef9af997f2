//! Elf CLI - fetch Advent of Code inputs and submit answers

mod cli;
mod config;
mod error;
mod output;

use clap::Parser;
use cli::{Args, Command};
use config::Config;
use elf_core::{Answer, FestiveMessages, InputCache, InputFetcher, PlainMessages, SubmissionStatus, Submitter};
use error::CliError;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    enable_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; RUST_LOG wins over --verbose
fn enable_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let mut config = Config::from_args(&args);
    let formatter = OutputFormatter::new(config.quiet);
    tracing::debug!(cache_dir = %config.elf.cache_dir.display(), "Resolved configuration");

    match args.command {
        Command::FetchInput(puzzle) => {
            if !InputCache::new(config.elf.clone()).contains(puzzle.year, puzzle.day) {
                config.ensure_session("Session token required to download the puzzle input")?;
            }
            let input = InputFetcher::new(config.elf)?.get_input(puzzle.year, puzzle.day, None)?;
            formatter.print_input(puzzle.year, puzzle.day, &input);
        }
        Command::Submit(submission) => {
            let answer = Answer::parse(&submission.answer);
            let (year, day, part) = (submission.puzzle.year, submission.puzzle.day, submission.part);

            let check = submitter(&config)?.check_cached(year, day, part, &answer);
            if check.status == SubmissionStatus::Unknown {
                config.ensure_session("Session token required for submission")?;
            }

            let result = submitter(&config)?.submit_answer(year, day, part, &answer, None)?;
            formatter.print_submission(part, &result);
        }
        Command::Check(submission) => {
            let answer = Answer::parse(&submission.answer);
            let check = submitter(&config)?.check_cached(
                submission.puzzle.year,
                submission.puzzle.day,
                submission.part,
                &answer,
            );
            formatter.print_check(submission.part, &check);
        }
        Command::Guesses { puzzle, part } => {
            let guesses: Vec<_> = submitter(&config)?
                .guess_cache(puzzle.year, puzzle.day)
                .read_all()
                .into_iter()
                .filter(|guess| part.is_none_or(|p| guess.part == p))
                .collect();
            formatter.print_guesses(&guesses);
        }
    }

    Ok(())
}

fn submitter(config: &Config) -> Result<Submitter, CliError> {
    let submitter = Submitter::new(config.elf.clone())?;
    Ok(if config.plain {
        submitter.messages(PlainMessages)
    } else {
        submitter.messages(FestiveMessages)
    })
}
