//! Team-wide magic items and their effect codes.

use crate::ids::{MagicItemId, TypeId};
use crate::localized::{Language, LocalizedText};

/// Effect code selecting one of the item eligibility rules.
///
/// A closed enumeration; every consumer dispatches with an exhaustive
/// `match`, so a new code fails to compile until each rule site handles it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MagicEffectCode {
    /// Universal enhancement: every member qualifies.
    EnhanceSpell,
    /// Grass-themed healing.
    SunHealing,
    /// Fire-themed burst.
    FlareBurst,
    /// Water-themed flow.
    FlowSpell,
    /// Evolution power, gated on leader potential + Leader legacy type.
    EvolutionPower,
}

/// A magic item selectable for a team.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagicItem {
    pub id: MagicItemId,
    pub name: String,
    pub description: String,
    pub effect_code: MagicEffectCode,
    /// Type the effect references, for elemental codes.
    pub applies_to_type: Option<TypeId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub localized: LocalizedText,
}

impl MagicItem {
    /// Localized display name with fallback to the canonical name.
    pub fn display_name(&self, language: Language) -> &str {
        self.localized.name_in(language, &self.name)
    }
}
