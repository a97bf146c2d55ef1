//! Service configuration structures and loaders.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use team_core::localized::Language;

/// Tunables for the analysis service.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Upper bound for one advice call; slower calls degrade to fallback.
    pub advice_timeout: Duration,
    /// Whether the boundary response cache is active.
    pub cache_enabled: bool,
    /// TTL of cached analysis responses.
    pub cache_ttl: Duration,
    /// Fixed rate-limit window.
    pub rate_limit_window: Duration,
    /// Analyses allowed per key per window.
    pub rate_limit_quota: u32,
    /// Language used when a request does not specify one.
    pub default_language: Language,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            advice_timeout: Duration::from_secs(30),
            cache_enabled: true,
            // Advice calls are expensive; cache completed reports for an hour.
            cache_ttl: Duration::from_secs(3600),
            // One analysis fans out to seven advice calls, so the default
            // window is conservative.
            rate_limit_window: Duration::from_secs(120),
            rate_limit_quota: 1,
            default_language: Language::En,
        }
    }
}

impl ServiceConfig {
    /// Construct configuration from process environment variables.
    ///
    /// A `.env` file is honored when present. Environment variables:
    /// - `ADVICE_TIMEOUT_SECS` - Per-call advice timeout (default: 30)
    /// - `ANALYSIS_CACHE_ENABLED` - Response cache switch (default: true)
    /// - `ANALYSIS_CACHE_TTL_SECS` - Response cache TTL (default: 3600)
    /// - `RATE_LIMIT_WINDOW_SECS` - Rate-limit window (default: 120)
    /// - `RATE_LIMIT_QUOTA` - Analyses per window (default: 1)
    /// - `DEFAULT_LANGUAGE` - "en" or "zh" (default: en)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let mut config = Self::default();

        if let Some(secs) = read_env::<u64>("ADVICE_TIMEOUT_SECS") {
            config.advice_timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(enabled) = read_env::<bool>("ANALYSIS_CACHE_ENABLED") {
            config.cache_enabled = enabled;
        }
        if let Some(secs) = read_env::<u64>("ANALYSIS_CACHE_TTL_SECS") {
            config.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(secs) = read_env::<u64>("RATE_LIMIT_WINDOW_SECS") {
            config.rate_limit_window = Duration::from_secs(secs.max(1));
        }
        if let Some(quota) = read_env::<u32>("RATE_LIMIT_QUOTA") {
            config.rate_limit_quota = quota.max(1);
        }
        if let Some(language) = read_env::<Language>("DEFAULT_LANGUAGE") {
            config.default_language = language;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok()?.parse().ok()
}
