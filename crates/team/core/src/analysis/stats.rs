//! Effective battle-stat computation.
//!
//! Combines base stats, the talent boost, and the personality modifier into
//! the six integers a monster actually fights with. The formulas and their
//! rounding points reproduce the in-game values bit-for-bit.

use crate::model::monster::BaseStats;
use crate::model::personality::StatModifiers;
use crate::model::talent::Talent;

/// The six effective stats of one configured member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveStats {
    pub hp: i32,
    pub phy_atk: i32,
    pub mag_atk: i32,
    pub phy_def: i32,
    pub mag_def: i32,
    pub spd: i32,
}

impl EffectiveStats {
    /// Physical plus magic defense, used for the tank highlight.
    pub const fn overall_def(&self) -> i32 {
        self.phy_def + self.mag_def
    }
}

/// Rounds half up on the exact value: `x.5` always goes to `x + 1`.
///
/// Not banker's rounding and not truncation; the game's published stat
/// tables depend on this at `.5` boundaries. Inputs are non-negative.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// HP formula, rounded twice:
/// `round(1.7·(base + boost·6) + 70 − 2.55·boost)`,
/// then `round(hp·(1 + modifier) + 100)`.
fn hp_stat(base: u32, boost: u32, modifier: f64) -> i32 {
    let raw = 1.7 * f64::from(base + boost * 6) + 70.0 - 2.55 * f64::from(boost);
    let rounded = round_half_up(raw) as f64;
    round_half_up(rounded * (1.0 + modifier) + 100.0) as i32
}

/// Non-HP formula, rounded twice:
/// `round(1.1·(base + boost·6) + 10)`, then `round(val·(1 + modifier) + 50)`.
fn other_stat(base: u32, boost: u32, modifier: f64) -> i32 {
    let raw = 1.1 * f64::from(base + boost * 6) + 10.0;
    let rounded = round_half_up(raw) as f64;
    round_half_up(rounded * (1.0 + modifier) + 50.0) as i32
}

/// Computes the six effective stats for one member.
///
/// Pure and deterministic: identical inputs always produce identical
/// outputs. Inputs are validated upstream; no error paths exist here.
pub fn compute_effective_stats(
    base: &BaseStats,
    modifiers: &StatModifiers,
    talent: &Talent,
) -> EffectiveStats {
    EffectiveStats {
        hp: hp_stat(base.hp, talent.hp_boost, modifiers.hp),
        phy_atk: other_stat(base.phy_atk, talent.phy_atk_boost, modifiers.phy_atk),
        mag_atk: other_stat(base.mag_atk, talent.mag_atk_boost, modifiers.mag_atk),
        phy_def: other_stat(base.phy_def, talent.phy_def_boost, modifiers.phy_def),
        mag_def: other_stat(base.mag_def, talent.mag_def_boost, modifiers.mag_def),
        spd: other_stat(base.spd, talent.spd_boost, modifiers.spd),
    }
}
