//! Mock advice generator for testing without network.
//!
//! Matches prompts by substring so concurrent calls map deterministically to
//! their scripted responses regardless of completion order.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{AdviceError, AdviceGenerator};

enum Script {
    Reply(serde_json::Value),
    Fail,
}

struct Rule {
    needle: String,
    script: Script,
}

/// Scriptable in-memory advice generator.
///
/// Rules are checked in registration order against the incoming prompt; the
/// first whose needle is contained in the prompt wins. Prompts matching no
/// rule get an empty JSON object (which parses into an all-default payload).
#[derive(Clone, Default)]
pub struct MockAdvisor {
    rules: Arc<Vec<Rule>>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl MockAdvisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replies with `value` for prompts containing `needle`.
    #[must_use]
    pub fn respond_with(mut self, needle: &str, value: serde_json::Value) -> Self {
        self.push(Rule {
            needle: needle.to_owned(),
            script: Script::Reply(value),
        });
        self
    }

    /// Fails with a transport error for prompts containing `needle`.
    #[must_use]
    pub fn fail_when(mut self, needle: &str) -> Self {
        self.push(Rule {
            needle: needle.to_owned(),
            script: Script::Fail,
        });
        self
    }

    /// Sleeps before answering any prompt (for timeout tests).
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&mut self, rule: Rule) {
        Arc::get_mut(&mut self.rules)
            .expect("rules are only added before the advisor is shared")
            .push(rule);
    }
}

#[async_trait]
impl AdviceGenerator for MockAdvisor {
    async fn generate(&self, prompt: &str) -> Result<serde_json::Value, AdviceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        for rule in self.rules.iter() {
            if prompt.contains(&rule.needle) {
                return match &rule.script {
                    Script::Reply(value) => Ok(value.clone()),
                    Script::Fail => Err(AdviceError::Transport("scripted failure".to_owned())),
                };
            }
        }

        Ok(serde_json::json!({}))
    }
}
