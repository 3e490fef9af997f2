//! User-facing message text for submission outcomes
//!
//! The orchestrator never formats messages itself; it asks a [`Messages`]
//! implementation. [`FestiveMessages`] picks a random line per outcome,
//! [`PlainMessages`] is fixed text for scripts and tests.

use crate::models::{Answer, Guess};
use rand::seq::SliceRandom;
use std::time::Duration;

/// Message provider for every submission and cache outcome
pub trait Messages {
    fn correct(&self, answer: &Answer) -> String;
    fn too_high(&self, answer: &Answer) -> String;
    fn too_low(&self, answer: &Answer) -> String;
    fn wait(&self, wait_time: Option<Duration>) -> String;
    fn already_completed(&self) -> String;
    fn incorrect(&self, answer: &Answer) -> String;
    fn unexpected(&self) -> String;
    fn empty_response(&self) -> String;

    /// Candidate matches a logged `CORRECT` guess
    fn cached_duplicate(&self, answer: &Answer, previous: &Guess) -> String;
    /// Candidate is at or below the highest logged `TOO_LOW` guess
    fn cached_too_low(&self, answer: &Answer, highest_low: &Guess) -> String;
    /// Candidate is at or above the lowest logged `TOO_HIGH` guess
    fn cached_too_high(&self, answer: &Answer, lowest_high: &Guess) -> String;
    fn unique_guess(&self, answer: &Answer) -> String;
}

const CORRECT: &[&str] = &[
    "🎉 Correct! The sleigh is ready to fly! 🎉",
    "🎄 Ho ho ho! Santa approves your answer! 🎄",
    "✨ Sparkling success! That's the one! ✨",
    "🎁 Perfect! You've unwrapped the solution! 🎁",
    "🌟 Bravo! Another star for the tree! 🌟",
];

const TOO_HIGH: &[&str] = &[
    "🎅 Oops! That's too high. Bring it down a notch! 🎁",
    "🦌 You overshot like a reindeer in flight. Lower it a bit! 🦌",
    "❄️ Frosty says your number is too big. Cool it down! ❄️",
    "🎄 So close, but a tad too high! Aim a little lower! 🎄",
];

const TOO_LOW: &[&str] = &[
    "🎅 Hmm, that's too low. Raise the stakes! 🎁",
    "🦌 Your guess is under the tree! Look a little higher! 🦌",
    "🎈 Not quite enough! Pump up that number! 🎈",
    "✨ Reach higher, like the star on top of the tree! 🎄",
];

const WAIT: &[&str] = &[
    "🕒 Hold on! You need to wait before submitting again! ⏳",
    "🎅 Ho, ho, hold on! Patience is a virtue! 🎄",
    "❄️ Let the snow settle before trying again. ❄️",
    "⏰ The elves are still wrapping your last answer! 🎁",
];

const COMPLETED: &[&str] = &[
    "🎉 You've already completed this part! 🎉",
    "🌟 This part is already shining on your advent calendar! 🌟",
    "🎁 You've unwrapped this gift already! On to the next one! 🎁",
];

const INCORRECT: &[&str] = &[
    "🎅 Not quite the right answer. Keep trying! 🎄",
    "❄️ That's not it, but the answer is out there! ❄️",
    "🧝 Not quite! The elves think you'll get it next try! 🎄",
    "🔥 The fireplace is warm, but your answer needs more heat! 🔥",
];

const UNEXPECTED: &[&str] = &[
    "🤔 Hmm, the elves are puzzled by this response!",
    "🎄 An unexpected twist! Check the website for details!",
    "🎁 Curious! The response is unusual. Time to investigate!",
];

fn pick(pool: &'static [&'static str]) -> &'static str {
    pool.choose(&mut rand::thread_rng()).copied().unwrap_or_default()
}

fn format_wait(wait_time: Option<Duration>) -> Option<String> {
    wait_time.map(|wait| humantime::format_duration(wait).to_string())
}

/// Randomised holiday-themed messages
#[derive(Debug, Default, Clone, Copy)]
pub struct FestiveMessages;

impl Messages for FestiveMessages {
    fn correct(&self, answer: &Answer) -> String {
        format!("{} (answer: {})", pick(CORRECT), answer)
    }

    fn too_high(&self, answer: &Answer) -> String {
        format!("{} (answer: {})", pick(TOO_HIGH), answer)
    }

    fn too_low(&self, answer: &Answer) -> String {
        format!("{} (answer: {})", pick(TOO_LOW), answer)
    }

    fn wait(&self, wait_time: Option<Duration>) -> String {
        match format_wait(wait_time) {
            Some(wait) => format!("{} ({} left)", pick(WAIT), wait),
            None => pick(WAIT).to_string(),
        }
    }

    fn already_completed(&self) -> String {
        pick(COMPLETED).to_string()
    }

    fn incorrect(&self, answer: &Answer) -> String {
        format!("{} (answer: {})", pick(INCORRECT), answer)
    }

    fn unexpected(&self) -> String {
        pick(UNEXPECTED).to_string()
    }

    fn empty_response(&self) -> String {
        "🎄 Answer submitted, but no response message was found. \
         Check your submission on the Advent of Code website."
            .to_string()
    }

    fn cached_duplicate(&self, answer: &Answer, previous: &Guess) -> String {
        format!(
            "🎁 You already got this one! {} was marked {} on {}.",
            answer,
            previous.status,
            previous.timestamp.format("%Y-%m-%d %H:%M UTC"),
        )
    }

    fn cached_too_low(&self, answer: &Answer, highest_low: &Guess) -> String {
        format!(
            "🦌 {} is too low: {} was already too low on {}.",
            answer,
            highest_low.value,
            highest_low.timestamp.format("%Y-%m-%d %H:%M UTC"),
        )
    }

    fn cached_too_high(&self, answer: &Answer, lowest_high: &Guess) -> String {
        format!(
            "❄️ {} is too high: {} was already too high on {}.",
            answer,
            lowest_high.value,
            lowest_high.timestamp.format("%Y-%m-%d %H:%M UTC"),
        )
    }

    fn unique_guess(&self, _answer: &Answer) -> String {
        "This is a unique guess.".to_string()
    }
}

/// Fixed, emoji-free messages
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainMessages;

impl Messages for PlainMessages {
    fn correct(&self, answer: &Answer) -> String {
        format!("Correct answer: {}", answer)
    }

    fn too_high(&self, answer: &Answer) -> String {
        format!("Answer too high: {}", answer)
    }

    fn too_low(&self, answer: &Answer) -> String {
        format!("Answer too low: {}", answer)
    }

    fn wait(&self, wait_time: Option<Duration>) -> String {
        match format_wait(wait_time) {
            Some(wait) => format!("Submitted too recently, wait {}", wait),
            None => "Submitted too recently".to_string(),
        }
    }

    fn already_completed(&self) -> String {
        "Part already completed".to_string()
    }

    fn incorrect(&self, answer: &Answer) -> String {
        format!("Incorrect answer: {}", answer)
    }

    fn unexpected(&self) -> String {
        "Unexpected response".to_string()
    }

    fn empty_response(&self) -> String {
        "Empty response".to_string()
    }

    fn cached_duplicate(&self, answer: &Answer, previous: &Guess) -> String {
        format!("Cached: {} already marked {}", answer, previous.status)
    }

    fn cached_too_low(&self, answer: &Answer, highest_low: &Guess) -> String {
        format!("Cached: {} <= {} (TOO_LOW)", answer, highest_low.value)
    }

    fn cached_too_high(&self, answer: &Answer, lowest_high: &Guess) -> String {
        format!("Cached: {} >= {} (TOO_HIGH)", answer, lowest_high.value)
    }

    fn unique_guess(&self, answer: &Answer) -> String {
        format!("Unique guess: {}", answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubmissionStatus;

    #[test]
    fn test_plain_messages_are_stable() {
        let messages = PlainMessages;
        let answer = Answer::Int(42);
        assert_eq!(messages.correct(&answer), messages.correct(&answer));
        assert_eq!(messages.too_high(&answer), "Answer too high: 42");
        assert_eq!(
            messages.wait(Some(Duration::from_secs(252))),
            "Submitted too recently, wait 4m 12s"
        );
    }

    #[test]
    fn test_festive_messages_come_from_pools() {
        let messages = FestiveMessages;
        let answer = Answer::Int(7);
        for _ in 0..20 {
            let text = messages.too_low(&answer);
            assert!(TOO_LOW.iter().any(|line| text.starts_with(line)), "{}", text);
            assert!(text.ends_with("(answer: 7)"));
        }
    }

    #[test]
    fn test_cached_messages_mention_previous_guess() {
        let previous = Guess::now(1, Answer::Int(100), SubmissionStatus::TooLow);
        let text = FestiveMessages.cached_too_low(&Answer::Int(50), &previous);
        assert!(text.contains("50"));
        assert!(text.contains("100"));
    }
}
