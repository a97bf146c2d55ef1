//! Advice-generation call boundary.
//!
//! The external generative-language service is a black box behind
//! [`AdviceGenerator`]: prompt string in, structured JSON out. Everything
//! unreliable about it — transport failures, timeouts, malformed bodies —
//! is absorbed here: the client methods always return a payload, degrading
//! to a localized fallback so the deterministic report is never blocked.

pub mod mock;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use team_core::localized::Language;
use thiserror::Error;

/// Failures at the advice-call boundary. These never cross the Dispatch
/// phase; they exist only so implementations and logs can name the cause.
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("advice call timed out")]
    Timeout,

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// The external advice generator: one prompt, one JSON document.
#[async_trait]
pub trait AdviceGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<serde_json::Value, AdviceError>;
}

/// Parsed per-monster advice.
///
/// Fields default individually, so a reply that carries only part of the
/// requested shape still contributes what it has.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitSynergyPayload {
    #[serde(default)]
    pub synergy_moves: Vec<String>,
    #[serde(default)]
    pub recommendation: Vec<String>,
}

impl TraitSynergyPayload {
    /// The safe structure returned when the call fails in any way.
    pub fn fallback(language: Language) -> Self {
        Self {
            synergy_moves: Vec::new(),
            recommendation: vec![fallback_text(language)],
        }
    }
}

/// Parsed team-level advice.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamSynergyPayload {
    #[serde(default)]
    pub key_combos: Vec<String>,
    #[serde(default)]
    pub turn_order_strategy: Vec<String>,
    #[serde(default)]
    pub magic_item_usage: Vec<String>,
    #[serde(default)]
    pub general_strategy: Vec<String>,
}

impl TeamSynergyPayload {
    /// The safe structure returned when the call fails in any way.
    pub fn fallback(language: Language) -> Self {
        Self {
            general_strategy: vec![fallback_text(language)],
            ..Self::default()
        }
    }
}

/// Human-readable error line, in the report language.
fn fallback_text(language: Language) -> String {
    match language {
        Language::En => "Error generating analysis.".to_owned(),
        Language::Zh => "生成分析时出错。".to_owned(),
    }
}

/// Bounded, failure-absorbing client over an [`AdviceGenerator`].
#[derive(Clone)]
pub struct AdviceClient {
    generator: Arc<dyn AdviceGenerator>,
    timeout: Duration,
}

impl AdviceClient {
    pub fn new(generator: Arc<dyn AdviceGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Issues a per-monster prompt; never fails.
    pub async fn trait_synergy(&self, prompt: &str, language: Language) -> TraitSynergyPayload {
        match self.call(prompt).await {
            Ok(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "trait-synergy reply did not match the schema");
                TraitSynergyPayload::fallback(language)
            }),
            Err(e) => {
                tracing::warn!(error = %e, "trait-synergy advice call failed");
                TraitSynergyPayload::fallback(language)
            }
        }
    }

    /// Issues the team-level prompt; never fails.
    pub async fn team_synergy(&self, prompt: &str, language: Language) -> TeamSynergyPayload {
        match self.call(prompt).await {
            Ok(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "team-synergy reply did not match the schema");
                TeamSynergyPayload::fallback(language)
            }),
            Err(e) => {
                tracing::warn!(error = %e, "team-synergy advice call failed");
                TeamSynergyPayload::fallback(language)
            }
        }
    }

    /// One bounded call: whatever the generator does, it resolves within
    /// the configured timeout.
    async fn call(&self, prompt: &str) -> Result<serde_json::Value, AdviceError> {
        match tokio::time::timeout(self.timeout, self.generator.generate(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(AdviceError::Timeout),
        }
    }
}
