//! Offline answer checks against the guess log
//!
//! A logged `CORRECT` value is final. A logged `TOO_LOW` value L rules out
//! every integer <= L, a logged `TOO_HIGH` value H rules out every integer
//! >= H. Text answers only ever match exactly.

use crate::messages::Messages;
use crate::models::{Answer, CachedGuessCheck, Guess, SubmissionStatus};

/// Integer bounds implied by the log for one part
#[derive(Debug, Clone, Copy, Default)]
pub struct GuessBounds<'a> {
    /// Highest guess marked `TOO_LOW`
    pub highest_low: Option<&'a Guess>,
    /// Lowest guess marked `TOO_HIGH`
    pub lowest_high: Option<&'a Guess>,
}

impl<'a> GuessBounds<'a> {
    /// Collect bounds from the integer guesses of `part`
    ///
    /// On ties the earliest guess is kept.
    pub fn from_history(history: &'a [Guess], part: u8) -> Self {
        let mut bounds = Self::default();
        for guess in history.iter().filter(|g| g.part == part) {
            let Some(value) = guess.value.as_int() else {
                continue;
            };
            match guess.status {
                SubmissionStatus::TooLow => {
                    if bounds.highest_low.is_none_or(|low| value > bound_value(low)) {
                        bounds.highest_low = Some(guess);
                    }
                }
                SubmissionStatus::TooHigh => {
                    if bounds.lowest_high.is_none_or(|high| value < bound_value(high)) {
                        bounds.lowest_high = Some(guess);
                    }
                }
                _ => {}
            }
        }
        bounds
    }
}

// Only integer guesses are ever stored as bounds.
fn bound_value(guess: &Guess) -> i128 {
    guess.value.as_int().unwrap_or_default()
}

/// Decide from `history` alone what submitting `candidate` for `part` would yield
///
/// Returns `UNKNOWN` when only a live submission can tell.
pub fn check_cached_guesses(
    history: &[Guess],
    part: u8,
    candidate: &Answer,
    messages: &dyn Messages,
) -> CachedGuessCheck {
    let resolved = |previous: &Guess, status: SubmissionStatus, message: String| CachedGuessCheck {
        guess: candidate.clone(),
        previous_guess: Some(previous.value.clone()),
        previous_timestamp: Some(previous.timestamp),
        status,
        message,
    };

    if let Some(previous) = history.iter().find(|g| {
        g.part == part && g.status == SubmissionStatus::Correct && &g.value == candidate
    }) {
        return resolved(
            previous,
            SubmissionStatus::Correct,
            messages.cached_duplicate(candidate, previous),
        );
    }

    if let Some(value) = candidate.as_int() {
        let bounds = GuessBounds::from_history(history, part);
        if let Some(low) = bounds.highest_low
            && value <= bound_value(low)
        {
            return resolved(low, SubmissionStatus::TooLow, messages.cached_too_low(candidate, low));
        }
        if let Some(high) = bounds.lowest_high
            && value >= bound_value(high)
        {
            return resolved(high, SubmissionStatus::TooHigh, messages.cached_too_high(candidate, high));
        }
    }

    CachedGuessCheck {
        guess: candidate.clone(),
        previous_guess: None,
        previous_timestamp: None,
        status: SubmissionStatus::Unknown,
        message: messages.unique_guess(candidate),
    }
}
