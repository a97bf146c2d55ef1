//! Passive traits.

use crate::ids::TraitId;
use crate::localized::{Language, LocalizedText};

/// A named passive ability; every monster carries exactly one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trait {
    pub id: TraitId,
    pub name: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub localized: LocalizedText,
}

impl Trait {
    /// Localized display name with fallback to the canonical name.
    pub fn display_name(&self, language: Language) -> &str {
        self.localized.name_in(language, &self.name)
    }

    /// Localized description with fallback to the canonical description.
    pub fn display_description(&self, language: Language) -> &str {
        self.localized.description_in(language, &self.description)
    }
}
