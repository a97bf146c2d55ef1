//! Glossary of domain terms shipped to the advice generator.

use crate::ids::TermId;
use crate::localized::{Language, LocalizedText};

/// One glossary entry: a short key and its explanation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameTerm {
    pub id: TermId,
    pub key: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub localized: LocalizedText,
}

impl GameTerm {
    /// Localized description with fallback to the canonical description.
    pub fn display_description(&self, language: Language) -> &str {
        self.localized.description_in(language, &self.description)
    }
}
