//! The assembled reference data set.

use team_core::model::{
    GameTerm, MagicItem, Monster, Move, Personality, Species, Trait, TypeChart,
};

/// Every reference entity the analysis pipeline can consume, loaded once at
/// startup and handed to the runtime's reference repository.
#[derive(Clone, Debug, Default)]
pub struct ReferenceBundle {
    pub chart: TypeChart,
    pub species: Vec<Species>,
    pub monsters: Vec<Monster>,
    pub moves: Vec<Move>,
    pub traits: Vec<Trait>,
    pub personalities: Vec<Personality>,
    pub magic_items: Vec<MagicItem>,
    pub terms: Vec<GameTerm>,
}
