//! Move records and categories.

use crate::ids::{MoveId, TypeId};
use crate::localized::{Language, LocalizedText};

/// Move category.
///
/// A closed enumeration: new categories are added here and in every `match`
/// that consumes them, never by comparing free-form strings.
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
pub enum MoveCategory {
    PhysicalAttack,
    MagicAttack,
    Defense,
    Status,
}

impl MoveCategory {
    /// True for the two attacking categories.
    pub const fn is_attack(self) -> bool {
        matches!(self, Self::PhysicalAttack | Self::MagicAttack)
    }

    /// True for Defense and Status moves.
    pub const fn is_defensive(self) -> bool {
        matches!(self, Self::Defense | Self::Status)
    }
}

/// A move in the reference store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub id: MoveId,
    pub name: String,
    /// Elemental type; typeless utility moves have none.
    pub move_type: Option<TypeId>,
    pub category: MoveCategory,
    /// Energy spent per use; zero-cost moves exist and matter for analysis.
    pub energy_cost: u32,
    /// Damage base; defensive/status moves have none.
    pub power: Option<u32>,
    /// Display text, also scanned for energy-restore phrasing.
    pub description: String,
    /// Whether the move carries a counter effect.
    pub has_counter: bool,
    /// Whether the move is taught by a move stone rather than learned.
    pub is_move_stone: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub localized: LocalizedText,
}

impl Move {
    /// Localized display name with fallback to the canonical name.
    pub fn display_name(&self, language: Language) -> &str {
        self.localized.name_in(language, &self.name)
    }

    /// Localized description with fallback to the canonical description.
    pub fn display_description(&self, language: Language) -> &str {
        self.localized.description_in(language, &self.description)
    }
}
