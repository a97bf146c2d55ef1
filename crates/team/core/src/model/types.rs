//! Elemental types and the effectiveness chart.
//!
//! The chart stores only the forward relation sets (`effective_against`,
//! `weak_against`); the inverse lookups ("vulnerable to", "resistant to")
//! are answered by querying the attacker's forward sets, so every forward
//! edge has exactly one reverse lookup and the two can never drift apart.

use std::collections::{BTreeMap, BTreeSet};

use crate::ids::TypeId;
use crate::localized::{Language, LocalizedText};

/// Name of the non-combat pseudo-type excluded from offensive coverage.
pub const LEADER_TYPE_NAME: &str = "Leader";

/// A single entry in the type chart.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRecord {
    pub id: TypeId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub localized: LocalizedText,
    /// Types this type damages super-effectively.
    #[cfg_attr(feature = "serde", serde(default))]
    pub effective_against: BTreeSet<TypeId>,
    /// Types that resist this type.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weak_against: BTreeSet<TypeId>,
}

impl TypeRecord {
    /// Localized display name with fallback to the canonical name.
    pub fn display_name(&self, language: Language) -> &str {
        self.localized.name_in(language, &self.name)
    }
}

/// Immutable type-relationship graph, seeded once and shared read-only.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeChart {
    types: BTreeMap<TypeId, TypeRecord>,
}

impl TypeChart {
    /// Builds a chart from its records.
    pub fn new(records: impl IntoIterator<Item = TypeRecord>) -> Self {
        Self {
            types: records.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeRecord> {
        self.types.get(&id)
    }

    pub fn contains(&self, id: TypeId) -> bool {
        self.types.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// All type ids, in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.types.keys().copied()
    }

    /// All records, in ascending id order.
    pub fn records(&self) -> impl Iterator<Item = &TypeRecord> {
        self.types.values()
    }

    /// Case-insensitive lookup by canonical name.
    pub fn find_by_name(&self, name: &str) -> Option<&TypeRecord> {
        self.types
            .values()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// True when `attacker` damages `defender` super-effectively
    /// (`defender` is vulnerable to `attacker`).
    pub fn hits_effectively(&self, attacker: TypeId, defender: TypeId) -> bool {
        self.types
            .get(&attacker)
            .is_some_and(|t| t.effective_against.contains(&defender))
    }

    /// True when `defender` resists `attacker`
    /// (`attacker` is weak against `defender`).
    pub fn resists(&self, defender: TypeId, attacker: TypeId) -> bool {
        self.types
            .get(&attacker)
            .is_some_and(|t| t.weak_against.contains(&defender))
    }

    /// Ids of pseudo-types excluded from offensive coverage (currently the
    /// Leader type, when present in the chart).
    pub fn ignored_pseudo_types(&self) -> BTreeSet<TypeId> {
        self.types
            .values()
            .filter(|t| t.name.eq_ignore_ascii_case(LEADER_TYPE_NAME))
            .map(|t| t.id)
            .collect()
    }

    /// Localized display name for a type id; unknown ids render as `#id`.
    pub fn display_name(&self, id: TypeId, language: Language) -> String {
        match self.types.get(&id) {
            Some(record) => record.display_name(language).to_owned(),
            None => format!("#{id}"),
        }
    }
}
