//! Guess log and submission data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A candidate answer
///
/// An answer is an integer only when its canonical decimal form is exactly
/// what was typed, so `0124` and `+5` stay text and are submitted verbatim.
/// Integers take part in bound inference, text only in duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Answer {
    Int(i128),
    Text(String),
}

impl Answer {
    /// Parse a raw answer, preferring the integer form when it is lossless
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        raw.parse::<i128>()
            .ok()
            .filter(|value| value.to_string() == raw)
            .map(Answer::Int)
            .unwrap_or_else(|| Answer::Text(raw.to_string()))
    }

    /// The integer value, if this answer is numeric
    pub fn as_int(&self) -> Option<i128> {
        match self {
            Answer::Int(value) => Some(*value),
            Answer::Text(_) => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Int(value) => write!(f, "{}", value),
            Answer::Text(text) => f.write_str(text),
        }
    }
}

impl FromStr for Answer {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Answer::parse(s))
    }
}

impl From<i64> for Answer {
    fn from(value: i64) -> Self {
        Answer::Int(value.into())
    }
}

impl From<i128> for Answer {
    fn from(value: i128) -> Self {
        Answer::Int(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::parse(value)
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::parse(&value)
    }
}

/// Outcome classification of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Correct,
    Incorrect,
    TooHigh,
    TooLow,
    /// Rate-limited by the judge
    Wait,
    /// Part already solved
    Completed,
    /// Reply could not be classified
    Unknown,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 7] = [
        SubmissionStatus::Correct,
        SubmissionStatus::Incorrect,
        SubmissionStatus::TooHigh,
        SubmissionStatus::TooLow,
        SubmissionStatus::Wait,
        SubmissionStatus::Completed,
        SubmissionStatus::Unknown,
    ];

    /// Name as stored in the guess log
    pub fn name(self) -> &'static str {
        match self {
            SubmissionStatus::Correct => "CORRECT",
            SubmissionStatus::Incorrect => "INCORRECT",
            SubmissionStatus::TooHigh => "TOO_HIGH",
            SubmissionStatus::TooLow => "TOO_LOW",
            SubmissionStatus::Wait => "WAIT",
            SubmissionStatus::Completed => "COMPLETED",
            SubmissionStatus::Unknown => "UNKNOWN",
        }
    }

    /// Look up a status by its log name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.name() == name.trim())
    }

    /// Whether a guess with this status belongs in the guess log
    ///
    /// `WAIT` and `COMPLETED` say nothing about the answer itself.
    pub fn is_cacheable(self) -> bool {
        !matches!(self, SubmissionStatus::Wait | SubmissionStatus::Completed)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One historical submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub timestamp: DateTime<Utc>,
    pub part: u8,
    pub value: Answer,
    pub status: SubmissionStatus,
}

impl Guess {
    /// A guess made now
    pub fn now(part: u8, value: Answer, status: SubmissionStatus) -> Self {
        Self {
            timestamp: Utc::now(),
            part,
            value,
            status,
        }
    }
}

/// Result of consulting the guess log for a candidate answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedGuessCheck {
    /// The candidate that was checked
    pub guess: Answer,
    /// The logged guess that decided the outcome, if any
    pub previous_guess: Option<Answer>,
    /// When that logged guess was made
    pub previous_timestamp: Option<DateTime<Utc>>,
    /// `UNKNOWN` means the log cannot decide and a live submission is needed
    pub status: SubmissionStatus,
    pub message: String,
}

/// Outcome of [`crate::Submitter::submit_answer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub guess: Answer,
    pub status: SubmissionStatus,
    pub message: String,
    pub is_correct: bool,
    /// `true` when answered from the guess log without a network call
    pub is_cached: bool,
    /// Remaining rate-limit wait, when the judge stated one
    pub wait_time: Option<Duration>,
}

impl SubmissionResult {
    pub(crate) fn new(guess: Answer, status: SubmissionStatus, message: String, is_cached: bool) -> Self {
        Self {
            guess,
            is_correct: status == SubmissionStatus::Correct,
            status,
            message,
            is_cached,
            wait_time: None,
        }
    }
}
