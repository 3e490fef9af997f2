//! Puzzle input download with a local file cache

use crate::config::ElfConfig;
use crate::error::{CacheError, InputFetchError};
use elf_http_client::ElfClient;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// File-based cache for puzzle inputs
///
/// Directory structure: `{cache_dir}/{year}/day{day:02}/input.txt`
#[derive(Debug, Clone)]
pub struct InputCache {
    config: ElfConfig,
}

impl InputCache {
    pub fn new(config: ElfConfig) -> Self {
        Self { config }
    }

    pub fn cache_path(&self, year: u16, day: u8) -> PathBuf {
        self.config.input_cache_file(year, day)
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.cache_path(year, day).exists()
    }

    /// Cached input with trailing whitespace trimmed, or None if not cached
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, CacheError> {
        let path = self.cache_path(year, day);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(content.trim_end().to_string()))
    }

    /// Store input, creating the puzzle directory if needed
    pub fn put(&self, year: u16, day: u8, input: &str) -> Result<(), CacheError> {
        fs::create_dir_all(self.config.puzzle_dir(year, day))?;
        fs::write(self.cache_path(year, day), input)?;
        Ok(())
    }
}

/// Fetches puzzle inputs, downloading each one at most once
pub struct InputFetcher {
    config: ElfConfig,
    client: ElfClient,
    cache: InputCache,
}

impl InputFetcher {
    pub fn new(config: ElfConfig) -> Result<Self, InputFetchError> {
        let client = ElfClient::new().map_err(InputFetchError::ClientInit)?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: ElfConfig, client: ElfClient) -> Self {
        let cache = InputCache::new(config.clone());
        Self { config, client, cache }
    }

    pub fn cache(&self) -> &InputCache {
        &self.cache
    }

    /// Puzzle input for `year`/`day`, from cache when possible
    ///
    /// The session is only required when the input is not cached yet.
    /// Failing to write the cache is logged, not returned.
    pub fn get_input(&self, year: u16, day: u8, session: Option<&str>) -> Result<String, InputFetchError> {
        match self.cache.get(year, day) {
            Ok(Some(input)) => {
                debug!(year, day, "Input cache hit");
                return Ok(input);
            }
            Ok(None) => {}
            Err(e) => warn!(year, day, error = %e, "Failed to read cached input"),
        }

        let token = self.config.session_token(session)?;
        let input = self
            .client
            .get_input(year, day, &token)
            .map_err(|source| InputFetchError::Transport { year, day, source })?;
        let input = input.trim_end().to_string();
        info!(year, day, bytes = input.len(), "Downloaded input");

        if let Err(e) = self.cache.put(year, day, &input) {
            warn!(year, day, error = %e, "Failed to cache input");
        }
        Ok(input)
    }
}
