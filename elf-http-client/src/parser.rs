//! HTML response parsing and answer classification

use crate::client::{Reply, Verdict};
use regex::Regex;
use scraper::{Html, Selector};
use std::cell::OnceCell;
use std::time::Duration;

/// Ordered classification rules, first match wins.
///
/// "too high"/"too low" sit before the incorrect-answer phrase because the
/// judge embeds them in its "not the right answer" reply.
pub const CLASSIFICATION_RULES: &[(&str, Verdict)] = &[
    ("That's the right answer", Verdict::Correct),
    ("too high", Verdict::TooHigh),
    ("too low", Verdict::TooLow),
    ("You gave an answer too recently", Verdict::TooRecent),
    ("Did you already complete it", Verdict::AlreadyCompleted),
    ("That's not the right answer", Verdict::Incorrect),
];

/// Classify the text of a submission reply using [`CLASSIFICATION_RULES`]
pub fn classify(text: &str) -> Verdict {
    if text.trim().is_empty() {
        return Verdict::Empty;
    }
    CLASSIFICATION_RULES
        .iter()
        .find(|(needle, _)| text.contains(needle))
        .map_or(Verdict::Unexpected, |&(_, verdict)| verdict)
}

/// Parser for judge HTML responses with cached regex patterns and selectors
#[derive(Clone, Debug)]
pub(crate) struct ResponseParser {
    throttle_regex: OnceCell<Regex>,
    article_selector: OnceCell<Selector>,
    main_selector: OnceCell<Selector>,
}

impl ResponseParser {
    pub fn new() -> Self {
        Self {
            throttle_regex: OnceCell::new(),
            article_selector: OnceCell::new(),
            main_selector: OnceCell::new(),
        }
    }

    fn throttle_regex(&self) -> &Regex {
        self.throttle_regex
            .get_or_init(|| Regex::new(r"You have (.+?) left to wait\.").unwrap())
    }

    fn article_selector(&self) -> &Selector {
        self.article_selector
            .get_or_init(|| Selector::parse("article").unwrap())
    }

    fn main_selector(&self) -> &Selector {
        self.main_selector
            .get_or_init(|| Selector::parse("main").unwrap())
    }

    /// Extract the text of the primary content block
    ///
    /// Every `<article>` is collected; pages without one fall back to
    /// `<main>`. Returns an empty string when neither exists.
    pub fn extract_content_text(&self, html: &str) -> String {
        let document = Html::parse_document(html);

        let articles: String = document
            .select(self.article_selector())
            .flat_map(|article| article.text())
            .collect();
        if !articles.trim().is_empty() {
            return articles.trim().to_string();
        }

        document
            .select(self.main_selector())
            .next()
            .map(|main| main.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }

    /// Extract the remaining wait time from a rate-limit reply
    fn extract_throttle_duration(&self, text: &str) -> Option<Duration> {
        let captures = self.throttle_regex().captures(text)?;
        let duration_str = captures.get(1)?.as_str();
        humantime::parse_duration(duration_str).ok()
    }

    /// Parse a submission response into a classified [`Reply`]
    pub fn parse_submission_response(&self, html: &str) -> Reply {
        let text = self.extract_content_text(html);
        let verdict = classify(&text);
        let wait_time = match verdict {
            Verdict::TooRecent => self.extract_throttle_duration(&text),
            _ => None,
        };

        Reply {
            verdict,
            wait_time,
            text,
        }
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}
