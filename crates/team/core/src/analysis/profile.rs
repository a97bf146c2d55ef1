//! Move-profile analysis: energy, counters, and defensive depth.
//!
//! Three independent computations over one member's four selected moves.

use std::sync::LazyLock;

use regex::Regex;

use crate::ids::MoveId;
use crate::model::moves::{Move, MoveCategory};

/// Phrasings that mark a move as restoring energy.
///
/// This is a pattern-based heuristic over the English description text: a
/// description that conveys energy restoration without matching one of the
/// listed phrasings will be misclassified. That approximation is accepted;
/// extend the alternation rather than "fixing" individual descriptions.
static ENERGY_RESTORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)gain[s]? \w+ energy|restore[s]? \w+ energy|steal[s]? \w+ energy|gain[s]? energy|restore[s]? energy",
    )
    .expect("energy-restore pattern is valid")
});

/// Energy usage profile of one member's moveset.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyProfile {
    /// Mean energy cost across the moves, rounded to two decimals.
    pub avg_energy_cost: f64,
    pub has_zero_cost_move: bool,
    pub has_energy_restore_move: bool,
    pub zero_cost_moves: Vec<MoveId>,
    pub energy_restore_moves: Vec<MoveId>,
}

/// Counter-effect coverage of one member's moveset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterCoverage {
    /// A counter on an attacking move (punishes status play).
    pub has_attack_counter: bool,
    /// A counter on a defense move (punishes attacks).
    pub has_defense_counter: bool,
    /// A counter on a status move (punishes defensive play).
    pub has_status_counter: bool,
    pub total_counter_moves: usize,
    pub counter_move_ids: Vec<MoveId>,
}

/// Defense/Status depth of one member's moveset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefenseStatusProfile {
    pub count: usize,
    pub move_ids: Vec<MoveId>,
}

/// Computes the energy profile: mean cost, zero-cost moves, and moves whose
/// description matches an energy-restore phrasing (case-insensitive).
pub fn energy_profile(moves: &[&Move]) -> EnergyProfile {
    let avg = if moves.is_empty() {
        0.0
    } else {
        let total: u32 = moves.iter().map(|m| m.energy_cost).sum();
        let mean = f64::from(total) / moves.len() as f64;
        (mean * 100.0).round() / 100.0
    };

    let zero_cost_moves: Vec<MoveId> = moves
        .iter()
        .filter(|m| m.energy_cost == 0)
        .map(|m| m.id)
        .collect();

    let energy_restore_moves: Vec<MoveId> = moves
        .iter()
        .filter(|m| ENERGY_RESTORE.is_match(&m.description))
        .map(|m| m.id)
        .collect();

    EnergyProfile {
        avg_energy_cost: avg,
        has_zero_cost_move: !zero_cost_moves.is_empty(),
        has_energy_restore_move: !energy_restore_moves.is_empty(),
        zero_cost_moves,
        energy_restore_moves,
    }
}

/// Classifies the counter-flagged moves by category.
pub fn counter_coverage(moves: &[&Move]) -> CounterCoverage {
    let mut coverage = CounterCoverage::default();

    for m in moves {
        if !m.has_counter {
            continue;
        }
        coverage.counter_move_ids.push(m.id);
        match m.category {
            MoveCategory::PhysicalAttack | MoveCategory::MagicAttack => {
                coverage.has_attack_counter = true;
            }
            MoveCategory::Defense => coverage.has_defense_counter = true,
            MoveCategory::Status => coverage.has_status_counter = true,
        }
    }

    coverage.total_counter_moves = coverage.counter_move_ids.len();
    coverage
}

/// Tallies the Defense and Status moves.
pub fn defense_status_profile(moves: &[&Move]) -> DefenseStatusProfile {
    let move_ids: Vec<MoveId> = moves
        .iter()
        .filter(|m| m.category.is_defensive())
        .map(|m| m.id)
        .collect();

    DefenseStatusProfile {
        count: move_ids.len(),
        move_ids,
    }
}
