//! In-memory repository implementations.
//!
//! The reference repository serves a [`ReferenceBundle`] loaded at startup;
//! the team repository keeps teams in a mutex-guarded map. Both are the
//! production stores for single-process deployments and the fixtures for
//! tests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use team_content::ReferenceBundle;
use team_core::ids::{MagicItemId, MonsterId, MoveId, PersonalityId, TeamId, TraitId};
use team_core::model::{
    GameTerm, MagicItem, Monster, Move, Personality, TeamSheet, Trait, TypeChart,
};

use super::error::{RepositoryError, Result};
use super::traits::{ReferenceRepository, StoredTeam, TeamRepository};

/// Reference store backed by maps built from a loaded bundle.
pub struct InMemoryReferenceRepo {
    chart: TypeChart,
    monsters: BTreeMap<MonsterId, Monster>,
    moves: BTreeMap<MoveId, Move>,
    traits: BTreeMap<TraitId, Trait>,
    personalities: BTreeMap<PersonalityId, Personality>,
    magic_items: BTreeMap<MagicItemId, MagicItem>,
    terms: Vec<GameTerm>,
}

impl InMemoryReferenceRepo {
    pub fn new(bundle: ReferenceBundle) -> Self {
        Self {
            chart: bundle.chart,
            monsters: bundle.monsters.into_iter().map(|m| (m.id, m)).collect(),
            moves: bundle.moves.into_iter().map(|m| (m.id, m)).collect(),
            traits: bundle.traits.into_iter().map(|t| (t.id, t)).collect(),
            personalities: bundle
                .personalities
                .into_iter()
                .map(|p| (p.id, p))
                .collect(),
            magic_items: bundle.magic_items.into_iter().map(|i| (i.id, i)).collect(),
            terms: bundle.terms,
        }
    }
}

fn select<K: Ord + Copy, V: Clone>(map: &BTreeMap<K, V>, ids: &BTreeSet<K>) -> BTreeMap<K, V> {
    ids.iter()
        .filter_map(|id| map.get(id).map(|v| (*id, v.clone())))
        .collect()
}

#[async_trait]
impl ReferenceRepository for InMemoryReferenceRepo {
    async fn monsters_by_ids(
        &self,
        ids: &BTreeSet<MonsterId>,
    ) -> Result<BTreeMap<MonsterId, Monster>> {
        Ok(select(&self.monsters, ids))
    }

    async fn moves_by_ids(&self, ids: &BTreeSet<MoveId>) -> Result<BTreeMap<MoveId, Move>> {
        Ok(select(&self.moves, ids))
    }

    async fn traits_by_ids(&self, ids: &BTreeSet<TraitId>) -> Result<BTreeMap<TraitId, Trait>> {
        Ok(select(&self.traits, ids))
    }

    async fn personalities_by_ids(
        &self,
        ids: &BTreeSet<PersonalityId>,
    ) -> Result<BTreeMap<PersonalityId, Personality>> {
        Ok(select(&self.personalities, ids))
    }

    async fn type_chart(&self) -> Result<TypeChart> {
        Ok(self.chart.clone())
    }

    async fn magic_item(&self, id: MagicItemId) -> Result<Option<MagicItem>> {
        Ok(self.magic_items.get(&id).cloned())
    }

    async fn glossary(&self) -> Result<Vec<GameTerm>> {
        Ok(self.terms.clone())
    }
}

/// Team store backed by a mutex-guarded map.
#[derive(Default)]
pub struct InMemoryTeamRepo {
    inner: Mutex<TeamStore>,
}

#[derive(Default)]
struct TeamStore {
    next_id: u32,
    teams: BTreeMap<TeamId, StoredTeam>,
}

impl InMemoryTeamRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, TeamStore>> {
        self.inner.lock().map_err(|_| RepositoryError::LockPoisoned)
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepo {
    async fn create(&self, sheet: TeamSheet) -> Result<StoredTeam> {
        let mut store = self.lock()?;
        store.next_id += 1;
        let id = TeamId(store.next_id);
        let now = Utc::now();
        let team = StoredTeam {
            id,
            sheet,
            created_at: now,
            updated_at: now,
        };
        store.teams.insert(id, team.clone());
        Ok(team)
    }

    async fn get(&self, id: TeamId) -> Result<Option<StoredTeam>> {
        Ok(self.lock()?.teams.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<StoredTeam>> {
        let store = self.lock()?;
        let mut teams: Vec<StoredTeam> = store.teams.values().cloned().collect();
        teams.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(teams)
    }

    async fn update(&self, id: TeamId, sheet: TeamSheet) -> Result<Option<StoredTeam>> {
        let mut store = self.lock()?;
        let Some(team) = store.teams.get_mut(&id) else {
            return Ok(None);
        };
        team.sheet = sheet;
        team.updated_at = Utc::now();
        Ok(Some(team.clone()))
    }

    async fn delete(&self, id: TeamId) -> Result<bool> {
        Ok(self.lock()?.teams.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use team_core::ids::MagicItemId;

    fn sheet(name: &str) -> TeamSheet {
        TeamSheet {
            name: name.to_owned(),
            members: Vec::new(),
            magic_item: MagicItemId(1),
        }
    }

    #[tokio::test]
    async fn team_crud_round_trip() {
        let repo = InMemoryTeamRepo::new();

        let created = repo.create(sheet("Alpha")).await.unwrap();
        assert_eq!(created.id, TeamId(1));

        let fetched = repo.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.sheet.name, "Alpha");

        let updated = repo
            .update(created.id, sheet("Beta"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.sheet.name, "Beta");
        assert!(updated.updated_at >= updated.created_at);

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let repo = InMemoryTeamRepo::new();
        repo.create(sheet("First")).await.unwrap();
        repo.create(sheet("Second")).await.unwrap();

        let teams = repo.list().await.unwrap();
        assert_eq!(teams[0].sheet.name, "Second");
        assert_eq!(teams[1].sheet.name, "First");
    }

    #[tokio::test]
    async fn reference_lookup_skips_absent_ids() {
        let repo = InMemoryReferenceRepo::new(ReferenceBundle::default());
        let ids: BTreeSet<MonsterId> = [MonsterId(1)].into();
        let found = repo.monsters_by_ids(&ids).await.unwrap();
        assert!(found.is_empty());
    }
}
