//! Output formatting for submission results and guess logs

use elf_core::{CachedGuessCheck, Guess, SubmissionResult, SubmissionStatus};

/// Output formatter for command results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print puzzle input
    pub fn print_input(&self, year: u16, day: u8, input: &str) {
        if !self.quiet {
            eprintln!("{}/{:02}: {} line(s)", year, day, input.lines().count());
        }
        println!("{}", input);
    }

    pub fn print_submission(&self, part: u8, result: &SubmissionResult) {
        if self.quiet {
            println!("{}", result.status);
            return;
        }
        let source = if result.is_cached { "cached" } else { "submitted" };
        println!(
            "Part {} {}: {} ({})",
            part,
            result.guess,
            format_status(result.status),
            source
        );
        println!("{}", result.message);
    }

    pub fn print_check(&self, part: u8, check: &CachedGuessCheck) {
        if self.quiet {
            println!("{}", check.status);
            return;
        }
        println!("Part {} {}: {}", part, check.guess, format_status(check.status));
        if let (Some(previous), Some(timestamp)) = (&check.previous_guess, check.previous_timestamp) {
            println!("  decided by {} at {}", previous, timestamp.format("%Y-%m-%d %H:%M:%S UTC"));
        }
        println!("{}", check.message);
    }

    /// Print the guess log, oldest first
    pub fn print_guesses(&self, guesses: &[Guess]) {
        if guesses.is_empty() {
            if !self.quiet {
                println!("No guesses logged.");
            }
            return;
        }
        for guess in guesses {
            if self.quiet {
                println!("{},{},{}", guess.part, guess.value, guess.status);
            } else {
                println!("{}", format_guess_row(guess));
            }
        }
    }
}

fn format_guess_row(guess: &Guess) -> String {
    format!(
        "{}  part {}  {:>20}  {}",
        guess.timestamp.format("%Y-%m-%d %H:%M:%S"),
        guess.part,
        guess.value.to_string(),
        format_status(guess.status)
    )
}

/// Format a submission status for display
fn format_status(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Correct => "✓ Correct",
        SubmissionStatus::Incorrect => "✗ Incorrect",
        SubmissionStatus::TooHigh => "↓ Too high",
        SubmissionStatus::TooLow => "↑ Too low",
        SubmissionStatus::Wait => "⏳ Throttled",
        SubmissionStatus::Completed => "⏭ Already completed",
        SubmissionStatus::Unknown => "? Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use elf_core::Answer;

    #[test]
    fn test_guess_row_alignment() {
        let guess = Guess {
            timestamp: Utc.with_ymd_and_hms(2024, 12, 3, 6, 1, 2).unwrap(),
            part: 2,
            value: Answer::Int(42),
            status: SubmissionStatus::TooLow,
        };
        assert_eq!(
            format_guess_row(&guess),
            "2024-12-03 06:01:02  part 2                    42  ↑ Too low"
        );
    }

    #[test]
    fn test_every_status_has_a_label() {
        for status in SubmissionStatus::ALL {
            assert!(!format_status(status).is_empty());
        }
    }
}
