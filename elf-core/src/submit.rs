//! Submission orchestrator: guess log first, judge only on a miss

use crate::config::ElfConfig;
use crate::error::SubmissionError;
use crate::guess_cache::GuessCache;
use crate::inference::check_cached_guesses;
use crate::messages::{FestiveMessages, Messages};
use crate::models::{Answer, CachedGuessCheck, Guess, SubmissionResult, SubmissionStatus};
use elf_http_client::{ElfClient, Reply, Verdict};
use tracing::{debug, info};

impl From<Verdict> for SubmissionStatus {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => SubmissionStatus::Correct,
            Verdict::TooHigh => SubmissionStatus::TooHigh,
            Verdict::TooLow => SubmissionStatus::TooLow,
            Verdict::TooRecent => SubmissionStatus::Wait,
            Verdict::AlreadyCompleted => SubmissionStatus::Completed,
            Verdict::Incorrect => SubmissionStatus::Incorrect,
            Verdict::Empty | Verdict::Unexpected => SubmissionStatus::Unknown,
        }
    }
}

/// Submits answers, answering from the guess log whenever it can
///
/// # Example
///
/// ```no_run
/// use elf_core::{Answer, ElfConfig, Submitter};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let submitter = Submitter::new(ElfConfig::from_env())?;
/// let result = submitter.submit_answer(2024, 1, 1, &Answer::Int(42), None)?;
/// println!("{} ({})", result.message, result.status);
/// # Ok(())
/// # }
/// ```
pub struct Submitter {
    config: ElfConfig,
    client: ElfClient,
    messages: Box<dyn Messages>,
}

impl Submitter {
    /// Submitter talking to the public site with festive messages
    pub fn new(config: ElfConfig) -> Result<Self, SubmissionError> {
        Ok(Self::with_client(config, ElfClient::new()?))
    }

    /// Submitter using a preconfigured client
    pub fn with_client(config: ElfConfig, client: ElfClient) -> Self {
        Self {
            config,
            client,
            messages: Box::new(FestiveMessages),
        }
    }

    /// Replace the message provider
    pub fn messages(mut self, messages: impl Messages + 'static) -> Self {
        self.messages = Box::new(messages);
        self
    }

    pub fn config(&self) -> &ElfConfig {
        &self.config
    }

    /// The guess log for one puzzle
    pub fn guess_cache(&self, year: u16, day: u8) -> GuessCache {
        GuessCache::new(self.config.guess_cache_file(year, day))
    }

    /// Run inference against the log without submitting anything
    pub fn check_cached(&self, year: u16, day: u8, part: u8, answer: &Answer) -> CachedGuessCheck {
        let history = self.guess_cache(year, day).read_all();
        check_cached_guesses(&history, part, answer, self.messages.as_ref())
    }

    /// Submit `answer`, unless the guess log already knows the outcome
    ///
    /// `session` overrides the configured session token.
    ///
    /// # Errors
    ///
    /// * `SubmissionError::Storage` - The cache directory cannot be created
    /// * `SubmissionError::Config` - A live submission is needed and no valid session is available
    /// * `SubmissionError::Transport` - The judge could not be reached or replied non-2xx
    pub fn submit_answer(
        &self,
        year: u16,
        day: u8,
        part: u8,
        answer: &Answer,
        session: Option<&str>,
    ) -> Result<SubmissionResult, SubmissionError> {
        let dir = self.config.puzzle_dir(year, day);
        std::fs::create_dir_all(&dir).map_err(|source| SubmissionError::Storage { path: dir, source })?;

        let cache = self.guess_cache(year, day);
        if cache.exists() {
            let check = check_cached_guesses(&cache.read_all(), part, answer, self.messages.as_ref());
            if check.status != SubmissionStatus::Unknown {
                info!(year, day, part, %answer, status = %check.status, "Answered from guess log");
                return Ok(SubmissionResult::new(check.guess, check.status, check.message, true));
            }
            debug!(year, day, part, %answer, "Guess log cannot decide");
        }

        self.submit_live(&cache, year, day, part, answer, session)
    }

    fn submit_live(
        &self,
        cache: &GuessCache,
        year: u16,
        day: u8,
        part: u8,
        answer: &Answer,
        session: Option<&str>,
    ) -> Result<SubmissionResult, SubmissionError> {
        let token = self.config.session_token(session)?;
        let reply = self
            .client
            .submit_answer(year, day, part, &answer.to_string(), &token)?;

        let status = SubmissionStatus::from(reply.verdict);
        info!(year, day, part, %answer, %status, "Submitted answer");

        if status.is_cacheable() {
            cache.append(&Guess::now(part, answer.clone(), status));
        }

        let message = self.message_for(&reply, answer);
        let mut result = SubmissionResult::new(answer.clone(), status, message, false);
        result.wait_time = reply.wait_time;
        Ok(result)
    }

    fn message_for(&self, reply: &Reply, answer: &Answer) -> String {
        let messages = self.messages.as_ref();
        match reply.verdict {
            Verdict::Empty => messages.empty_response(),
            Verdict::Correct => messages.correct(answer),
            Verdict::TooHigh => messages.too_high(answer),
            Verdict::TooLow => messages.too_low(answer),
            Verdict::TooRecent => messages.wait(reply.wait_time),
            Verdict::AlreadyCompleted => messages.already_completed(),
            Verdict::Incorrect => messages.incorrect(answer),
            Verdict::Unexpected => messages.unexpected(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::messages::PlainMessages;
    use mockito::{Matcher, Server, ServerGuard};
    use std::time::Duration;
    use tempfile::TempDir;

    const ANSWER_PATH: &str = "/2024/day/1/answer";

    fn page(text: &str) -> String {
        format!("<html><body><main><article><p>{}</p></article></main></body></html>", text)
    }

    fn submitter(server: &ServerGuard, temp_dir: &TempDir) -> Submitter {
        let client = ElfClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();
        let config = ElfConfig::new(temp_dir.path()).with_session("test_session");
        Submitter::with_client(config, client).messages(PlainMessages)
    }

    #[test]
    fn test_verdict_mapping() {
        assert_eq!(SubmissionStatus::from(Verdict::TooRecent), SubmissionStatus::Wait);
        assert_eq!(SubmissionStatus::from(Verdict::AlreadyCompleted), SubmissionStatus::Completed);
        assert_eq!(SubmissionStatus::from(Verdict::Empty), SubmissionStatus::Unknown);
        assert_eq!(SubmissionStatus::from(Verdict::Unexpected), SubmissionStatus::Unknown);
    }

    #[test]
    fn test_live_submission_is_logged() {
        let mut server = Server::new();
        let temp_dir = TempDir::new().unwrap();
        let mock = server
            .mock("POST", ANSWER_PATH)
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("level".into(), "1".into()),
                Matcher::UrlEncoded("answer".into(), "100".into()),
            ]))
            .with_status(200)
            .with_body(page("That's not the right answer; your answer is too low."))
            .expect(1)
            .create();

        let submitter = submitter(&server, &temp_dir);
        let result = submitter.submit_answer(2024, 1, 1, &Answer::Int(100), None).unwrap();

        mock.assert();
        assert_eq!(result.status, SubmissionStatus::TooLow);
        assert!(!result.is_cached);
        assert!(!result.is_correct);
        assert_eq!(result.message, "Answer too low: 100");

        let logged = submitter.guess_cache(2024, 1).read_all();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].value, Answer::Int(100));
        assert_eq!(logged[0].status, SubmissionStatus::TooLow);
    }

    #[test]
    fn test_inferred_bound_skips_network() {
        let mut server = Server::new();
        let temp_dir = TempDir::new().unwrap();
        let mock = server
            .mock("POST", ANSWER_PATH)
            .with_status(200)
            .with_body(page("That's not the right answer; your answer is too low."))
            .expect(1)
            .create();

        let submitter = submitter(&server, &temp_dir);
        submitter.submit_answer(2024, 1, 1, &Answer::Int(100), None).unwrap();
        let result = submitter.submit_answer(2024, 1, 1, &Answer::Int(50), None).unwrap();

        mock.assert();
        assert_eq!(result.status, SubmissionStatus::TooLow);
        assert!(result.is_cached);
        assert_eq!(result.message, "Cached: 50 <= 100 (TOO_LOW)");
    }

    #[test]
    fn test_wait_is_not_logged() {
        let mut server = Server::new();
        let temp_dir = TempDir::new().unwrap();
        let _mock = server
            .mock("POST", ANSWER_PATH)
            .with_status(200)
            .with_body(page(
                "You gave an answer too recently; you have to wait after submitting an answer \
                 before trying again. You have 4m 12s left to wait.",
            ))
            .create();

        let submitter = submitter(&server, &temp_dir);
        let result = submitter.submit_answer(2024, 1, 1, &Answer::Int(7), None).unwrap();

        assert_eq!(result.status, SubmissionStatus::Wait);
        assert_eq!(result.wait_time, Some(Duration::from_secs(252)));
        assert_eq!(result.message, "Submitted too recently, wait 4m 12s");
        assert!(!submitter.guess_cache(2024, 1).exists());
    }

    #[test]
    fn test_unexpected_reply_is_logged_as_unknown() {
        let mut server = Server::new();
        let temp_dir = TempDir::new().unwrap();
        let _mock = server
            .mock("POST", ANSWER_PATH)
            .with_status(200)
            .with_body(page("The elves are on strike."))
            .create();

        let submitter = submitter(&server, &temp_dir);
        let result = submitter.submit_answer(2024, 1, 2, &Answer::from("XYZ"), None).unwrap();

        assert_eq!(result.status, SubmissionStatus::Unknown);
        assert_eq!(result.message, "Unexpected response");
        let logged = submitter.guess_cache(2024, 1).read_all();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].status, SubmissionStatus::Unknown);
    }

    #[test]
    fn test_empty_reply_is_logged_as_unknown() {
        let mut server = Server::new();
        let temp_dir = TempDir::new().unwrap();
        let mock = server
            .mock("POST", ANSWER_PATH)
            .with_status(200)
            .with_body("<html><body><main><article>  </article></main></body></html>")
            .expect(1)
            .create();

        let submitter = submitter(&server, &temp_dir);
        let result = submitter.submit_answer(2024, 1, 1, &Answer::Int(9), None).unwrap();

        mock.assert();
        assert_eq!(result.status, SubmissionStatus::Unknown);
        assert_eq!(result.message, "Empty response");
        assert!(!result.is_cached);
        let logged = submitter.guess_cache(2024, 1).read_all();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].value, Answer::Int(9));
        assert_eq!(logged[0].status, SubmissionStatus::Unknown);
    }

    #[test]
    fn test_leading_zero_answer_is_sent_verbatim() {
        let mut server = Server::new();
        let temp_dir = TempDir::new().unwrap();
        let mock = server
            .mock("POST", ANSWER_PATH)
            .match_body(Matcher::UrlEncoded("answer".into(), "0124515891".into()))
            .with_status(200)
            .with_body(page("That's the right answer!"))
            .expect(1)
            .create();

        let submitter = submitter(&server, &temp_dir);
        let answer = Answer::parse("0124515891");
        let result = submitter.submit_answer(2024, 1, 1, &answer, None).unwrap();

        mock.assert();
        assert!(result.is_correct);
        assert_eq!(result.message, "Correct answer: 0124515891");
        let logged = submitter.guess_cache(2024, 1).read_all();
        assert_eq!(logged[0].value, Answer::Text("0124515891".to_string()));

        // The canonical integer is a different guess.
        let check = submitter.check_cached(2024, 1, 1, &Answer::Int(124515891));
        assert_eq!(check.status, SubmissionStatus::Unknown);
    }

    #[test]
    fn test_malformed_session_is_config_error() {
        let mut server = Server::new();
        let temp_dir = TempDir::new().unwrap();
        let mock = server.mock("POST", ANSWER_PATH).expect(0).create();

        let submitter = submitter(&server, &temp_dir);
        let err = submitter
            .submit_answer(2024, 1, 1, &Answer::Int(1), Some("bad\nsession"))
            .unwrap_err();

        mock.assert();
        assert!(matches!(err, SubmissionError::Config(ConfigError::InvalidSession)));
        assert!(!submitter.guess_cache(2024, 1).exists());
    }

    #[test]
    fn test_missing_session_fails_before_network() {
        let mut server = Server::new();
        let temp_dir = TempDir::new().unwrap();
        let mock = server.mock("POST", ANSWER_PATH).expect(0).create();

        let client = ElfClient::builder().base_url(server.url()).unwrap().build().unwrap();
        let submitter = Submitter::with_client(ElfConfig::new(temp_dir.path()), client);
        let err = submitter
            .submit_answer(2024, 1, 1, &Answer::Int(1), None)
            .unwrap_err();

        mock.assert();
        assert!(matches!(err, SubmissionError::Config(ConfigError::MissingSession { .. })));
        assert!(!submitter.guess_cache(2024, 1).exists());
    }

    #[test]
    fn test_session_override_is_sent() {
        let mut server = Server::new();
        let temp_dir = TempDir::new().unwrap();
        let mock = server
            .mock("POST", ANSWER_PATH)
            .match_header("cookie", "session=override")
            .with_status(200)
            .with_body(page("That's the right answer! You are one gold star closer."))
            .expect(1)
            .create();

        let submitter = submitter(&server, &temp_dir);
        let result = submitter
            .submit_answer(2024, 1, 1, &Answer::Int(42), Some("override"))
            .unwrap();

        mock.assert();
        assert!(result.is_correct);
    }

    #[test]
    fn test_transport_error_is_wrapped() {
        let mut server = Server::new();
        let temp_dir = TempDir::new().unwrap();
        let _mock = server.mock("POST", ANSWER_PATH).with_status(500).create();

        let submitter = submitter(&server, &temp_dir);
        let err = submitter
            .submit_answer(2024, 1, 1, &Answer::Int(1), None)
            .unwrap_err();

        assert!(matches!(err, SubmissionError::Transport(_)));
        assert!(!submitter.guess_cache(2024, 1).exists());
    }

    #[test]
    fn test_unwritable_cache_dir_is_storage_error() {
        let server = Server::new();
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let client = ElfClient::builder().base_url(server.url()).unwrap().build().unwrap();
        let submitter = Submitter::with_client(ElfConfig::new(&blocker), client);
        let err = submitter
            .submit_answer(2024, 1, 1, &Answer::Int(1), Some("token"))
            .unwrap_err();

        assert!(matches!(err, SubmissionError::Storage { .. }));
    }
}
