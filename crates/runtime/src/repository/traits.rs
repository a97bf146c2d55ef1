//! Repository contracts for reference data and stored teams.
//!
//! The analysis pipeline only ever talks to these traits; the relational
//! store behind them is a deployment detail. Batch lookups return a map
//! keyed by id — absent ids are simply missing from the map, and detecting
//! them is the caller's responsibility.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use team_core::ids::{MagicItemId, MonsterId, MoveId, PersonalityId, TeamId, TraitId};
use team_core::model::{
    GameTerm, MagicItem, Monster, Move, Personality, TeamSheet, Trait, TypeChart,
};

use super::error::Result;

/// Read-only access to the seeded reference data.
///
/// All lookups are independent read queries; the orchestrator issues them
/// concurrently. Implementations must be cheap to call repeatedly — the
/// reference data is immutable for the lifetime of the process.
#[async_trait]
pub trait ReferenceRepository: Send + Sync {
    /// Batch lookup of monsters by id set.
    async fn monsters_by_ids(
        &self,
        ids: &BTreeSet<MonsterId>,
    ) -> Result<BTreeMap<MonsterId, Monster>>;

    /// Batch lookup of moves by id set.
    async fn moves_by_ids(&self, ids: &BTreeSet<MoveId>) -> Result<BTreeMap<MoveId, Move>>;

    /// Batch lookup of traits by id set.
    async fn traits_by_ids(&self, ids: &BTreeSet<TraitId>) -> Result<BTreeMap<TraitId, Trait>>;

    /// Batch lookup of personalities by id set.
    async fn personalities_by_ids(
        &self,
        ids: &BTreeSet<PersonalityId>,
    ) -> Result<BTreeMap<PersonalityId, Personality>>;

    /// The full type chart with effectiveness edges pre-loaded.
    async fn type_chart(&self) -> Result<TypeChart>;

    /// Single magic item lookup; `None` when the id is unknown.
    async fn magic_item(&self, id: MagicItemId) -> Result<Option<MagicItem>>;

    /// The flat glossary term list.
    async fn glossary(&self) -> Result<Vec<GameTerm>>;
}

/// A team persisted through the CRUD surface.
///
/// Members and talents are embedded in the sheet, so deleting the team
/// removes them with it — they have no existence of their own.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredTeam {
    pub id: TeamId,
    pub sheet: TeamSheet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// CRUD store for user teams.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Persists a new team and returns it with its assigned id.
    async fn create(&self, sheet: TeamSheet) -> Result<StoredTeam>;

    /// Loads a team by id.
    async fn get(&self, id: TeamId) -> Result<Option<StoredTeam>>;

    /// Lists all teams, newest first.
    async fn list(&self) -> Result<Vec<StoredTeam>>;

    /// Replaces a team's sheet, bumping `updated_at`. Returns the updated
    /// team, or `None` when the id is unknown.
    async fn update(&self, id: TeamId, sheet: TeamSheet) -> Result<Option<StoredTeam>>;

    /// Deletes a team (and, through embedding, its members and talents).
    /// Returns whether a team was removed.
    async fn delete(&self, id: TeamId) -> Result<bool>;
}
