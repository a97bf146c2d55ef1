//! Fixed-window rate limiting for analysis requests.
//!
//! An explicit, injected store — never ambient global state. Each key maps
//! to `(count, window start)`; windows reset lazily when a check arrives
//! after expiry. Two keyings are used at the boundary: the caller alone,
//! and caller + team fingerprint (language-independent), so switching
//! languages or teams cannot dodge the limit.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use team_core::localized::Language;

/// Fixed-window counter store.
pub struct RateLimiter {
    window: Duration,
    quota: u32,
    windows: Mutex<HashMap<String, (u32, Instant)>>,
}

impl RateLimiter {
    /// A limiter allowing `quota` requests per `window` per key.
    pub fn new(window: Duration, quota: u32) -> Self {
        Self {
            window,
            quota,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Records one request against `key`. Returns `false` when the key has
    /// exhausted its quota for the current window.
    pub fn check_and_record(&self, key: &str) -> bool {
        let Ok(mut windows) = self.windows.lock() else {
            // A poisoned limiter fails open; analysis must stay available.
            return true;
        };
        let now = Instant::now();

        match windows.get_mut(key) {
            Some((count, start)) if now.duration_since(*start) <= self.window => {
                if *count >= self.quota {
                    tracing::warn!(key, "analysis rate limit exceeded");
                    return false;
                }
                *count += 1;
                true
            }
            _ => {
                windows.insert(key.to_owned(), (1, now));
                true
            }
        }
    }

    /// Composite key for caller + team composition.
    pub fn composite_key(caller: &str, team_fingerprint: &str) -> String {
        format!("{caller}:{team_fingerprint}")
    }
}

/// Localized rejection message shown to the caller.
pub fn rate_limit_message(language: Language) -> String {
    match language {
        Language::En => "Too many requests. Please wait before analyzing again. \
                         Tip: Analyzing the same team again uses cache and is instant!"
            .to_owned(),
        Language::Zh => "请求过于频繁，请等待后再试。提示：重新分析相同队伍会使用缓存，无需等待！".to_owned(),
    }
}
