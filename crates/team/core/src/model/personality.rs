//! Personalities: per-stat percentage modifiers.

use crate::ids::PersonalityId;
use crate::localized::{Language, LocalizedText};

/// Multiplicative per-stat modifiers, expressed as fractions
/// (`0.1` = +10%, `-0.1` = -10%).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifiers {
    pub hp: f64,
    pub phy_atk: f64,
    pub mag_atk: f64,
    pub phy_def: f64,
    pub mag_def: f64,
    pub spd: f64,
}

/// A personality applied to one team member.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Personality {
    pub id: PersonalityId,
    pub name: String,
    pub modifiers: StatModifiers,
    #[cfg_attr(feature = "serde", serde(default))]
    pub localized: LocalizedText,
}

impl Personality {
    /// Localized display name with fallback to the canonical name.
    pub fn display_name(&self, language: Language) -> &str {
        self.localized.name_in(language, &self.name)
    }
}
