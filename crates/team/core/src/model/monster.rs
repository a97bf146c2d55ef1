//! Monster (species + form) records and base stats.

use crate::ids::{MonsterId, MoveId, SpeciesId, TraitId, TypeId};
use crate::localized::{Language, LocalizedText};

/// Preferred attack style of a monster.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum AttackStyle {
    Physical,
    Magic,
    #[default]
    Both,
}

/// The six base stats every monster ships with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub phy_atk: u32,
    pub mag_atk: u32,
    pub phy_def: u32,
    pub mag_def: u32,
    pub spd: u32,
}

impl BaseStats {
    pub const fn new(
        hp: u32,
        phy_atk: u32,
        mag_atk: u32,
        phy_def: u32,
        mag_def: u32,
        spd: u32,
    ) -> Self {
        Self {
            hp,
            phy_atk,
            mag_atk,
            phy_def,
            mag_def,
            spd,
        }
    }
}

/// A species grouping several monster forms.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Species {
    pub id: SpeciesId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub localized: LocalizedText,
}

/// A pinned legacy-move unlock: choosing this legacy type grants this move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegacyMove {
    pub type_id: TypeId,
    pub move_id: MoveId,
}

/// A species+form entry in the reference store.
///
/// Invariants: exactly one main type, at most one sub type, trait mandatory.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub id: MonsterId,
    pub species: SpeciesId,
    pub name: String,
    /// Form label within the species ("default" unless a variant).
    pub form: String,
    /// Previous evolution stage, when one exists.
    pub evolves_from: Option<MonsterId>,
    pub main_type: TypeId,
    pub sub_type: Option<TypeId>,
    /// Legacy type assigned when the player does not override it.
    pub default_legacy_type: TypeId,
    pub trait_id: TraitId,
    /// Final-stage monsters that may lead a team.
    pub leader_potential: bool,
    pub is_leader_form: bool,
    pub base: BaseStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred_attack_style: AttackStyle,
    /// Moves this monster can learn.
    #[cfg_attr(feature = "serde", serde(default))]
    pub move_pool: Vec<MoveId>,
    /// Legacy-type-gated move unlocks.
    #[cfg_attr(feature = "serde", serde(default))]
    pub legacy_moves: Vec<LegacyMove>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub localized: LocalizedText,
}

impl Monster {
    /// Localized display name with fallback to the canonical name.
    pub fn display_name(&self, language: Language) -> &str {
        self.localized.name_in(language, &self.name)
    }
}
