//! Output languages and localized display strings.
//!
//! Reference entities carry a canonical English name/description plus
//! optional translations. Resolution order is fixed: requested language,
//! then English, then the raw entity field.

use std::collections::BTreeMap;

/// Supported output languages.
///
/// The language is an explicit request parameter; it is never inferred.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    /// English (default).
    #[default]
    En,
    /// Chinese.
    Zh,
}

/// Per-language overrides for an entity's display strings.
///
/// The canonical English text lives on the entity itself; this map only
/// holds translations (and may override English for display purposes).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalizedText {
    /// Localized display names, keyed by language.
    #[cfg_attr(feature = "serde", serde(default))]
    pub names: BTreeMap<Language, String>,
    /// Localized descriptions, keyed by language.
    #[cfg_attr(feature = "serde", serde(default))]
    pub descriptions: BTreeMap<Language, String>,
}

impl LocalizedText {
    /// Empty localization (canonical text only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a display name: requested language → English → `fallback`.
    pub fn name_in<'a>(&'a self, language: Language, fallback: &'a str) -> &'a str {
        self.names
            .get(&language)
            .or_else(|| self.names.get(&Language::En))
            .map(String::as_str)
            .unwrap_or(fallback)
    }

    /// Resolves a description: requested language → English → `fallback`.
    pub fn description_in<'a>(&'a self, language: Language, fallback: &'a str) -> &'a str {
        self.descriptions
            .get(&language)
            .or_else(|| self.descriptions.get(&Language::En))
            .map(String::as_str)
            .unwrap_or(fallback)
    }

    /// Adds a localized name (builder pattern, used by seeders and tests).
    #[must_use]
    pub fn with_name(mut self, language: Language, name: impl Into<String>) -> Self {
        self.names.insert(language, name.into());
        self
    }

    /// Adds a localized description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, language: Language, text: impl Into<String>) -> Self {
        self.descriptions.insert(language, text.into());
        self
    }
}
