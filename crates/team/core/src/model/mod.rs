//! Domain model: reference entities and team composition.
//!
//! Reference entities (types, monsters, moves, traits, personalities, magic
//! items, glossary terms) are seeded once and read-only during analysis.
//! Team entities are created and deleted through explicit user actions.

pub mod glossary;
pub mod magic_item;
pub mod monster;
pub mod moves;
pub mod personality;
pub mod talent;
pub mod team;
pub mod traits;
pub mod types;

pub use glossary::GameTerm;
pub use magic_item::{MagicEffectCode, MagicItem};
pub use monster::{AttackStyle, BaseStats, LegacyMove, Monster, Species};
pub use moves::{Move, MoveCategory};
pub use personality::{Personality, StatModifiers};
pub use talent::{ALLOWED_BOOSTS, MAX_BOOSTED_STATS, Talent, TalentError};
pub use team::{MAX_TEAM_NAME_CHARS, MOVES_PER_MEMBER, TEAM_SIZE, TeamMember, TeamSheet};
pub use traits::Trait;
pub use types::{LEADER_TYPE_NAME, TypeChart, TypeRecord};
