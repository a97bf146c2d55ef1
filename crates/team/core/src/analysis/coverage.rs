//! Team-wide type coverage and defensive weakness aggregation.

use std::collections::BTreeSet;

use crate::ids::TypeId;
use crate::model::types::TypeChart;

/// A type is a team weakness once at least this many members are weak to it.
pub const TEAM_WEAKNESS_THRESHOLD: usize = 3;

/// The innate typing of one member's monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberTyping {
    pub main: TypeId,
    pub sub: Option<TypeId>,
}

/// Offensive and defensive coverage of a whole team.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeCoverageReport {
    /// Types at least one team move hits super-effectively (sorted).
    pub effective_against_types: Vec<TypeId>,
    /// Combat types the team cannot hit super-effectively (sorted).
    pub weak_against_types: Vec<TypeId>,
    /// Types at least three members are weak to (sorted).
    pub team_weak_to: Vec<TypeId>,
}

/// Per-monster weakness rule for an attacking type against a main/sub pair.
///
/// A double vulnerability always counts. A single-side vulnerability counts
/// unless the other side resists the attacker; the resistance check is
/// deliberately one-sided per branch (game-balance tie-break, not an
/// oversight). In particular, a resistance on one side with no vulnerability
/// anywhere never produces a weakness.
pub fn is_member_weak_to(chart: &TypeChart, attacker: TypeId, typing: MemberTyping) -> bool {
    let weak_main = chart.hits_effectively(attacker, typing.main);
    let weak_sub = typing
        .sub
        .is_some_and(|sub| chart.hits_effectively(attacker, sub));

    let resist_main = chart.resists(typing.main, attacker);
    let resist_sub = typing.sub.is_some_and(|sub| chart.resists(sub, attacker));

    if weak_main && weak_sub {
        return true;
    }
    (weak_main && !resist_sub && !weak_sub) || (weak_sub && !resist_main && !weak_main)
}

/// Aggregates team-wide type coverage.
///
/// * `team_move_types` — the distinct types of all selected team moves.
/// * `typings` — the six members' innate main/sub types.
/// * `ignored` — pseudo-types excluded from offensive coverage.
pub fn type_coverage(
    team_move_types: &BTreeSet<TypeId>,
    typings: &[MemberTyping],
    chart: &TypeChart,
    ignored: &BTreeSet<TypeId>,
) -> TypeCoverageReport {
    // Offense: union of effective_against over every distinct move type.
    let mut effective: BTreeSet<TypeId> = BTreeSet::new();
    for move_type in team_move_types {
        if let Some(record) = chart.get(*move_type) {
            effective.extend(record.effective_against.iter().copied());
        }
    }

    let weak_against: Vec<TypeId> = chart
        .ids()
        .filter(|id| !ignored.contains(id) && !effective.contains(id))
        .collect();

    // Defense: count members weak to each attacking type in the chart.
    let team_weak_to: Vec<TypeId> = chart
        .ids()
        .filter(|attacker| {
            let weak_members = typings
                .iter()
                .filter(|typing| is_member_weak_to(chart, *attacker, **typing))
                .count();
            weak_members >= TEAM_WEAKNESS_THRESHOLD
        })
        .collect();

    TypeCoverageReport {
        effective_against_types: effective.into_iter().collect(),
        weak_against_types: weak_against,
        team_weak_to,
    }
}
