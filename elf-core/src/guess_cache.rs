//! Append-only CSV log of submitted guesses
//!
//! One file per puzzle, both parts interleaved:
//!
//! ```text
//! timestamp,part,guess,status
//! 2024-12-01T05:00:12.345678Z,1,150,TOO_HIGH
//! ```
//!
//! Nothing in here fails loudly. Read errors yield whatever rows were read
//! so far, write errors are logged and dropped.

use crate::error::CacheError;
use crate::models::{Answer, Guess, SubmissionStatus};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Serialize, Deserialize)]
struct GuessRecord {
    timestamp: String,
    part: String,
    guess: String,
    status: String,
}

impl From<&Guess> for GuessRecord {
    fn from(guess: &Guess) -> Self {
        Self {
            timestamp: guess.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
            part: guess.part.to_string(),
            guess: guess.value.to_string(),
            status: guess.status.name().to_string(),
        }
    }
}

/// Guess log for a single year/day
#[derive(Debug, Clone)]
pub struct GuessCache {
    path: PathBuf,
}

impl GuessCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one guess, writing the header first if the log is new
    pub fn append(&self, guess: &Guess) {
        match self.try_append(guess) {
            Ok(()) => debug!(path = %self.path.display(), part = guess.part, status = %guess.status, "Guess logged"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to write guess log"),
        }
    }

    fn try_append(&self, guess: &Guess) -> Result<(), CacheError> {
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(GuessRecord::from(guess))?;
        writer.flush()?;
        Ok(())
    }

    /// All logged guesses, oldest first
    ///
    /// A missing file is an empty history.
    pub fn read_all(&self) -> Vec<Guess> {
        if !self.exists() {
            return Vec::new();
        }

        let mut reader = match csv::ReaderBuilder::new().flexible(true).from_path(&self.path) {
            Ok(reader) => reader,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to open guess log");
                return Vec::new();
            }
        };

        let mut guesses = Vec::new();
        for (line, row) in reader.deserialize::<GuessRecord>().enumerate() {
            match row {
                Ok(record) => {
                    if let Some(guess) = parse_record(record) {
                        guesses.push(guess);
                    }
                }
                Err(e) if e.is_io_error() => {
                    warn!(path = %self.path.display(), error = %e, "Guess log read aborted");
                    break;
                }
                Err(e) => warn!(path = %self.path.display(), row = line + 1, error = %e, "Skipping unreadable row"),
            }
        }
        guesses
    }
}

fn parse_record(record: GuessRecord) -> Option<Guess> {
    let Ok(part) = record.part.trim().parse::<u8>() else {
        warn!(part = %record.part, "Skipping row with invalid part");
        return None;
    };

    let status = SubmissionStatus::from_name(&record.status).unwrap_or_else(|| {
        warn!(status = %record.status, "Unknown status in guess log");
        SubmissionStatus::Unknown
    });

    let timestamp = parse_timestamp(&record.timestamp).unwrap_or_else(|| {
        warn!(timestamp = %record.timestamp, "Invalid timestamp in guess log");
        Utc::now()
    });

    Some(Guess {
        timestamp,
        part,
        value: Answer::parse(&record.guess),
        status,
    })
}

/// RFC 3339, or a naive ISO-8601 timestamp taken as UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}
