//! TTL response cache and team fingerprinting.
//!
//! The cache sits at the service boundary in front of the analysis
//! pipeline: a repeated (composition, language) request within the TTL is
//! answered without re-running the advice calls. Expiry is lazy — entries
//! are dropped when read or overwritten, never by a background sweeper.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};
use team_core::model::TeamSheet;

/// A time-bounded cache with lazy expiry.
pub struct TimedCache<K, V> {
    ttl: Duration,
    entries: Mutex<HashMap<K, (V, Instant)>>,
}

impl<K: Eq + Hash, V: Clone> TimedCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value unless it has expired; expired entries are
    /// removed on the way out.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.lock().ok()?;
        match entries.get(key) {
            Some((_, stored)) if stored.elapsed() > self.ttl => {
                entries.remove(key);
                None
            }
            Some((value, _)) => Some(value.clone()),
            None => None,
        }
    }

    /// Stores a value with the current timestamp.
    pub fn insert(&self, key: K, value: V) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key, (value, Instant::now()));
        }
    }

    /// Drops a specific key.
    pub fn remove(&self, key: &K) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }

    /// Drops everything.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

/// Language-independent fingerprint of a team composition.
///
/// Covers exactly the inputs the deterministic pipeline consumes — member
/// order, monster/personality/legacy/move selections, talents, and the
/// magic item — but not the team name or request language. Used as the
/// cache key (together with the language) and as the rate-limit key, so
/// re-analyzing the same team in another language cannot dodge the limiter.
pub fn team_fingerprint(sheet: &TeamSheet) -> String {
    let mut hasher = Sha256::new();
    hasher.update(u32::try_from(sheet.members.len()).unwrap_or(u32::MAX).to_le_bytes());
    for member in &sheet.members {
        hasher.update(member.monster.0.to_le_bytes());
        hasher.update(member.personality.0.to_le_bytes());
        hasher.update(member.legacy_type.0.to_le_bytes());
        for move_id in member.moves {
            hasher.update(move_id.0.to_le_bytes());
        }
        for boost in member.talent.boosts() {
            hasher.update(boost.to_le_bytes());
        }
    }
    hasher.update(sheet.magic_item.0.to_le_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use team_core::ids::{MagicItemId, MonsterId, MoveId, PersonalityId, TypeId};
    use team_core::model::{Talent, TeamMember};

    fn sheet(first_monster: u32) -> TeamSheet {
        TeamSheet {
            name: "Alpha".to_owned(),
            members: vec![TeamMember {
                monster: MonsterId(first_monster),
                personality: PersonalityId(1),
                legacy_type: TypeId(1),
                moves: [MoveId(1), MoveId(2), MoveId(3), MoveId(4)],
                talent: Talent {
                    hp_boost: 10,
                    ..Talent::default()
                },
            }],
            magic_item: MagicItemId(1),
        }
    }

    #[test]
    fn fingerprint_ignores_the_name_but_not_the_composition() {
        let a = sheet(1);
        let mut renamed = sheet(1);
        renamed.name = "Beta".to_owned();
        assert_eq!(team_fingerprint(&a), team_fingerprint(&renamed));

        let different = sheet(2);
        assert_ne!(team_fingerprint(&a), team_fingerprint(&different));
    }

    #[test]
    fn fingerprint_sees_talent_changes() {
        let a = sheet(1);
        let mut boosted = sheet(1);
        boosted.members[0].talent.spd_boost = 9;
        assert_ne!(team_fingerprint(&a), team_fingerprint(&boosted));
    }

    #[test]
    fn cache_returns_fresh_entries_and_expires_stale_ones() {
        let cache: TimedCache<String, u32> = TimedCache::new(Duration::from_millis(20));
        cache.insert("k".to_owned(), 7);
        assert_eq!(cache.get(&"k".to_owned()), Some(7));

        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(cache.get(&"k".to_owned()), None);
        // The expired entry was evicted on read.
        cache.insert("k".to_owned(), 8);
        assert_eq!(cache.get(&"k".to_owned()), Some(8));
    }
}
