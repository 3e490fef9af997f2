//! Elf HTTP client implementation

use crate::error::ClientError;
use crate::parser::ResponseParser;
use reqwest::header::{HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::debug;
use zeroize::Zeroize;

/// Default judge location
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

const USER_AGENT_VALUE: &str = concat!(
    "elf-http-client/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/cak/elf)"
);

/// How the judge classified a submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Reply had no readable content
    Empty,
    /// Answer was correct
    Correct,
    /// Answer was wrong and too high
    TooHigh,
    /// Answer was wrong and too low
    TooLow,
    /// Submission was rate-limited
    TooRecent,
    /// The part was already solved
    AlreadyCompleted,
    /// Answer was wrong, no hint given
    Incorrect,
    /// Reply did not match any known phrase
    Unexpected,
}

/// Classified reply to an answer submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Outcome derived from the reply text
    pub verdict: Verdict,
    /// Remaining wait time when rate-limited and the page states one
    pub wait_time: Option<Duration>,
    /// Text of the primary content element
    pub text: String,
}

/// Blocking client for the puzzle website
///
/// # Example
///
/// ```no_run
/// use elf_http_client::{ElfClient, Verdict};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ElfClient::new()?;
/// let session = "your_session_cookie";
///
/// let input = client.get_input(2024, 1, session)?;
/// println!("Input: {} bytes", input.len());
///
/// let reply = client.submit_answer(2024, 1, 1, "42", session)?;
/// if reply.verdict == Verdict::Correct {
///     println!("Gold star!");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ElfClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    parser: ResponseParser,
}

impl ElfClient {
    /// Create a client with rustls-tls and no redirect policy
    ///
    /// # Errors
    ///
    /// Returns `ClientError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, ClientError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ElfClientBuilder {
        ElfClientBuilder::new()
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Create a sensitive cookie header value from a session string
    ///
    /// The temporary formatted string is zeroized after use.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, ClientError> {
        let mut cookie_string = format!("session={}", session);
        let mut header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| ClientError::InvalidSession)?;
        header_value.set_sensitive(true);
        cookie_string.zeroize();

        Ok(header_value)
    }

    /// Build `{base}/{year}/day/{day}/{leaf}`
    fn day_url(&self, year: u16, day: u8, leaf: &str) -> Result<reqwest::Url, ClientError> {
        let (year, day) = (year.to_string(), day.to_string());
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend([year.as_str(), "day", day.as_str(), leaf]);
        Ok(url)
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// # Errors
    ///
    /// * `ClientError::Request` - Network error
    /// * `ClientError::InvalidStatus` - HTTP error (e.g., 404 if the puzzle is not unlocked)
    /// * `ClientError::Encoding` - Response is not valid UTF-8
    /// * `ClientError::InvalidSession` - The session cannot be sent as a cookie
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, ClientError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let url = self.day_url(year, day, "input")?;
        debug!(%url, "fetching puzzle input");

        let response = self
            .client
            .get(url)
            .header("Cookie", cookie_header)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()?;

        if !response.status().is_success() {
            return Err(ClientError::InvalidStatus {
                status: response.status(),
            });
        }

        response.text().map_err(|_| ClientError::Encoding)
    }

    /// Submit an answer for a puzzle part and classify the reply
    ///
    /// Sends exactly one request; failures are not retried.
    ///
    /// # Arguments
    ///
    /// * `year` - The puzzle year (e.g., 2024)
    /// * `day` - The day number (1-25)
    /// * `part` - The part number (1 or 2), sent as the `level` form field
    /// * `answer` - The answer, sent as the `answer` form field
    /// * `session` - The session cookie value
    ///
    /// # Errors
    ///
    /// * `ClientError::Request` - Network error
    /// * `ClientError::InvalidStatus` - Non-2xx reply (redirects included)
    /// * `ClientError::Encoding` - Response is not valid UTF-8
    /// * `ClientError::InvalidSession` - The session cannot be sent as a cookie
    pub fn submit_answer(
        &self,
        year: u16,
        day: u8,
        part: u8,
        answer: &str,
        session: &str,
    ) -> Result<Reply, ClientError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let url = self.day_url(year, day, "answer")?;
        let form = [("level", part.to_string()), ("answer", answer.to_string())];
        debug!(%url, part, "submitting answer");

        let response = self
            .client
            .post(url)
            .header("Cookie", cookie_header)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .form(&form)
            .send()?;

        if !response.status().is_success() {
            return Err(ClientError::InvalidStatus {
                status: response.status(),
            });
        }

        let html = response.text().map_err(|_| ClientError::Encoding)?;
        let reply = self.parser.parse_submission_response(&html);
        debug!(verdict = ?reply.verdict, "classified submission reply");
        Ok(reply)
    }
}

/// Builder for configuring an [`ElfClient`]
///
/// The redirect policy is always forced to `Policy::none()`: the judge
/// answers an expired session with a redirect, which must surface as a
/// non-success status rather than a followed login page.
///
/// # Example
///
/// ```no_run
/// use elf_http_client::ElfClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ElfClient::builder()
///     .base_url("http://localhost:1234")?
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(10))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ElfClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl ElfClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL, parsed and validated immediately
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, ClientError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder (timeouts, proxies, ...)
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns `ClientError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<ElfClient, ClientError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| ClientError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;

        Ok(ElfClient {
            client,
            base_url,
            parser: ResponseParser::new(),
        })
    }
}
