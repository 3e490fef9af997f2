//! Elf Core
//!
//! Answer submission for Advent of Code puzzles, backed by a per-puzzle
//! guess log so the same (or a provably wrong) answer is never sent twice.
//!
//! # Workflow
//!
//! 1. [`Submitter::submit_answer`] makes sure the puzzle cache directory exists
//! 2. If a guess log exists, [`check_cached_guesses`] tries to decide the
//!    outcome offline: a logged `CORRECT` duplicate, or a candidate at or
//!    beyond a logged `TOO_LOW`/`TOO_HIGH` bound
//! 3. Only when that yields `UNKNOWN` is the answer posted to the judge
//! 4. Definitive replies are appended to the log; `WAIT` and `COMPLETED`
//!    are not
//!
//! # Example
//!
//! ```no_run
//! use elf_core::{Answer, ElfConfig, InputFetcher, Submitter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ElfConfig::new("/tmp/elf").with_session("your_session_cookie");
//!
//! let input = InputFetcher::new(config.clone())?.get_input(2024, 1, None)?;
//! let answer = Answer::Int(input.lines().count() as i128);
//!
//! let result = Submitter::new(config)?.submit_answer(2024, 1, 1, &answer, None)?;
//! println!("{} (cached: {})", result.message, result.is_cached);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod guess_cache;
mod inference;
mod input;
mod messages;
mod models;
mod submit;

pub use config::{CACHE_DIR_ENV_VAR, ElfConfig, SESSION_ENV_VAR};
pub use error::{CacheError, ConfigError, InputFetchError, SubmissionError};
pub use guess_cache::GuessCache;
pub use inference::{GuessBounds, check_cached_guesses};
pub use input::{InputCache, InputFetcher};
pub use messages::{FestiveMessages, Messages, PlainMessages};
pub use models::{Answer, CachedGuessCheck, Guess, SubmissionResult, SubmissionStatus};
pub use submit::Submitter;
