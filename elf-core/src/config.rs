//! Explicit configuration: session credential and cache locations

use crate::error::ConfigError;
use std::fmt;
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Environment variable holding the session cookie
pub const SESSION_ENV_VAR: &str = "AOC_SESSION_COOKIE";
/// Environment variable overriding the cache directory
pub const CACHE_DIR_ENV_VAR: &str = "ELF_CACHE_DIR";

/// Configuration handed to [`crate::Submitter`] and [`crate::InputFetcher`]
///
/// Cache layout:
///
/// ```text
/// <cache_dir>/<year>/day<DD>/
///   input.txt     # puzzle input
///   guesses.csv   # append-only guess log
/// ```
#[derive(Clone)]
pub struct ElfConfig {
    /// Session key (zeroized on drop)
    pub session: Option<Zeroizing<String>>,
    /// Root of the input and guess caches
    pub cache_dir: PathBuf,
}

impl ElfConfig {
    /// Config rooted at `cache_dir` with no session
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            session: None,
            cache_dir: cache_dir.into(),
        }
    }

    /// Set the session token
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        let session = session.into();
        self.session = (!session.is_empty()).then(|| Zeroizing::new(session));
        self
    }

    /// Read `AOC_SESSION_COOKIE` and `ELF_CACHE_DIR`
    ///
    /// Unset or empty variables fall back to no session and the default cache dir.
    pub fn from_env() -> Self {
        let cache_dir = std::env::var_os(CACHE_DIR_ENV_VAR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_cache_dir);
        let config = Self::new(cache_dir);
        match std::env::var(SESSION_ENV_VAR).map(Zeroizing::new) {
            Ok(session) => config.with_session(session.trim()),
            Err(_) => config,
        }
    }

    /// `<platform cache dir>/elf`, or `.elf-cache` when there is none
    pub fn default_cache_dir() -> PathBuf {
        dirs::cache_dir()
            .map(|dir| dir.join("elf"))
            .unwrap_or_else(|| PathBuf::from(".elf-cache"))
    }

    /// Resolve the session token: explicit override first, then the config
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingSession` - No token anywhere
    /// * `ConfigError::InvalidSession` - The token cannot be sent as a cookie value
    pub fn session_token(&self, override_token: Option<&str>) -> Result<Zeroizing<String>, ConfigError> {
        let token = match override_token.filter(|t| !t.is_empty()) {
            Some(token) => Zeroizing::new(token.to_string()),
            None => self
                .session
                .clone()
                .ok_or(ConfigError::MissingSession { var: SESSION_ENV_VAR })?,
        };
        // Cookie values are visible ASCII only.
        if !token.bytes().all(|b| b.is_ascii_graphic() && b != b';') {
            return Err(ConfigError::InvalidSession);
        }
        Ok(token)
    }

    /// Directory holding everything cached for one puzzle
    pub fn puzzle_dir(&self, year: u16, day: u8) -> PathBuf {
        self.cache_dir.join(year.to_string()).join(format!("day{:02}", day))
    }

    /// Guess log for one puzzle
    pub fn guess_cache_file(&self, year: u16, day: u8) -> PathBuf {
        self.puzzle_dir(year, day).join("guesses.csv")
    }

    /// Cached input for one puzzle
    pub fn input_cache_file(&self, year: u16, day: u8) -> PathBuf {
        self.puzzle_dir(year, day).join("input.txt")
    }
}

impl fmt::Debug for ElfConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElfConfig")
            .field("session", &self.session.as_ref().map(|_| "<redacted>"))
            .field("cache_dir", &self.cache_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_path_format() {
        let config = ElfConfig::new("/tmp/elf");

        let path = config.guess_cache_file(2024, 1);
        assert_eq!(path, PathBuf::from("/tmp/elf/2024/day01/guesses.csv"));

        let path = config.input_cache_file(2016, 25);
        assert_eq!(path, PathBuf::from("/tmp/elf/2016/day25/input.txt"));
    }

    #[test]
    fn test_session_override_wins() {
        let config = ElfConfig::new("/tmp/elf").with_session("from-config");
        assert_eq!(config.session_token(Some("explicit")).unwrap().as_str(), "explicit");
        assert_eq!(config.session_token(None).unwrap().as_str(), "from-config");
        assert_eq!(config.session_token(Some("")).unwrap().as_str(), "from-config");
    }

    #[test]
    fn test_missing_session() {
        let config = ElfConfig::new("/tmp/elf").with_session("");
        let err = config.session_token(None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSession { var: SESSION_ENV_VAR }));
    }

    #[test]
    fn test_malformed_session_is_config_error() {
        for bad in ["abc\ndef", "abc def", "abc;def", "caf\u{e9}"] {
            let config = ElfConfig::new("/tmp/elf").with_session(bad);
            assert!(matches!(config.session_token(None), Err(ConfigError::InvalidSession)));
            let config = ElfConfig::new("/tmp/elf");
            assert!(matches!(config.session_token(Some(bad)), Err(ConfigError::InvalidSession)));
        }
        let config = ElfConfig::new("/tmp/elf").with_session("53616c7465645f5f");
        assert!(config.session_token(None).is_ok());
    }

    // The only test in this crate touching the process environment.
    #[test]
    fn test_from_env() {
        unsafe {
            std::env::set_var(SESSION_ENV_VAR, " env-session\n");
            std::env::set_var(CACHE_DIR_ENV_VAR, "/tmp/elf-env");
        }
        let config = ElfConfig::from_env();
        assert_eq!(config.session_token(None).unwrap().as_str(), "env-session");
        assert_eq!(config.session_token(Some("explicit")).unwrap().as_str(), "explicit");
        assert_eq!(config.guess_cache_file(2024, 2), PathBuf::from("/tmp/elf-env/2024/day02/guesses.csv"));

        unsafe {
            std::env::set_var(SESSION_ENV_VAR, "");
            std::env::set_var(CACHE_DIR_ENV_VAR, "");
        }
        let config = ElfConfig::from_env();
        assert!(matches!(
            config.session_token(None),
            Err(ConfigError::MissingSession { var: SESSION_ENV_VAR })
        ));
        assert_eq!(config.cache_dir, ElfConfig::default_cache_dir());

        unsafe {
            std::env::remove_var(SESSION_ENV_VAR);
            std::env::remove_var(CACHE_DIR_ENV_VAR);
        }
        assert!(ElfConfig::from_env().session.is_none());
    }

    #[test]
    fn test_debug_redacts_session() {
        let config = ElfConfig::new("/tmp/elf").with_session("secret-cookie");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-cookie"));
        assert!(debug.contains("<redacted>"));
    }
}
