use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Which backend derives project ideas from the top-ranked skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaSource {
    /// Secondary completion call, falling back to the catalog on failure.
    Llm,
    /// Static catalog lookup only. No second network call.
    Catalog,
}

impl FromStr for IdeaSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "llm" => Ok(IdeaSource::Llm),
            "catalog" => Ok(IdeaSource::Catalog),
            other => bail!("IDEA_SOURCE must be 'llm' or 'catalog', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// The API key is optional at startup: without it every submission fails with
/// an auth error before any network call is made.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub top_k: usize,
    pub llm_timeout: Duration,
    pub idea_source: IdeaSource,
    pub port: u16,
    pub rust_log: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("gemini_api_base", &self.gemini_api_base)
            .field("top_k", &self.top_k)
            .field("llm_timeout", &self.llm_timeout)
            .field("idea_source", &self.idea_source)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let top_k = parse_or(&lookup, "TOP_K_SKILLS", 3usize)?;
        if top_k == 0 {
            bail!("TOP_K_SKILLS must be at least 1");
        }

        let timeout_secs = parse_or(&lookup, "LLM_TIMEOUT_SECS", 30u64)?;
        if timeout_secs == 0 {
            bail!("LLM_TIMEOUT_SECS must be at least 1");
        }

        Ok(Config {
            gemini_api_key,
            gemini_api_base: lookup("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            top_k,
            llm_timeout: Duration::from_secs(timeout_secs),
            idea_source: parse_or(&lookup, "IDEA_SOURCE", IdeaSource::Llm)?,
            port: parse_or(&lookup, "PORT", 8080u16)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
    }
}
