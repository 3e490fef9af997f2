//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use elf_core::ElfConfig;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Resolved runtime configuration
pub struct Config {
    /// Session and cache locations handed to the library
    pub elf: ElfConfig,
    /// Plain messages
    pub plain: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args; flags win over the environment
    pub fn from_args(args: &Args) -> Self {
        let mut elf = ElfConfig::from_env();
        elf.cache_dir = expand_tilde(args.cache_dir.as_deref().unwrap_or(elf.cache_dir.as_path()));
        if let Some(session) = args.session.as_deref().filter(|s| !s.trim().is_empty()) {
            elf = elf.with_session(session.trim());
        }

        Config {
            elf,
            plain: args.plain,
            quiet: args.quiet,
        }
    }

    /// Make sure a session is available, prompting for one if not
    pub fn ensure_session(&mut self, reason: &str) -> Result<(), CliError> {
        if self.elf.session.is_none() {
            self.elf.session = Some(prompt_session(reason)?);
        }
        Ok(())
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Prompt user for session token
pub fn prompt_session(reason: &str) -> Result<Zeroizing<String>, CliError> {
    eprintln!("{}", reason);
    let s = rpassword::prompt_password("Enter AOC session key: ")
        .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?;
    let s = Zeroizing::new(s);
    if s.trim().is_empty() {
        return Err(CliError::Config("Session token is required.".to_string()));
    }
    Ok(Zeroizing::new(s.trim().to_string()))
}
