//! Analysis report structures: the per-member and team-level sections the
//! orchestrator assembles and serializes for callers.

use crate::ids::{MemberId, MonsterId, MoveId, TraitId, TypeId};
use crate::localized::Language;
use crate::model::monster::AttackStyle;

use super::coverage::TypeCoverageReport;
use super::eligibility::MagicItemEvaluation;
use super::profile::{CounterCoverage, DefenseStatusProfile, EnergyProfile};
use super::rules::Advisory;
use super::stats::EffectiveStats;

/// Externally generated trait-synergy advice for one member.
///
/// `synergy_moves` hold only ids that resolved against the member's own
/// selection; free-text recommendations are carried verbatim.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitSynergyFinding {
    pub monster: MonsterId,
    pub trait_id: TraitId,
    pub synergy_moves: Vec<MoveId>,
    pub recommendation: Vec<String>,
}

/// Everything computed for a single team member.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberAnalysis {
    pub member: MemberId,
    pub monster: MonsterId,
    /// Monster name already resolved in the report language.
    pub display_name: String,
    pub main_type: TypeId,
    pub sub_type: Option<TypeId>,
    pub preferred_attack_style: AttackStyle,
    pub effective_stats: EffectiveStats,
    pub energy_profile: EnergyProfile,
    pub counter_coverage: CounterCoverage,
    pub defense_status: DefenseStatusProfile,
    pub trait_synergies: Vec<TraitSynergyFinding>,
}

/// Team-wide playing advice from the external generator.
///
/// Lists are empty (plus a single error line in `general_strategy`) when the
/// team-level advice call fell back.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamSynergyAdvice {
    pub key_combos: Vec<String>,
    pub turn_order_strategy: Vec<String>,
    pub magic_item_usage: Vec<String>,
    pub general_strategy: Vec<String>,
}

/// The unified analysis report.
///
/// Per-member sections appear in the same order as the submitted team.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamAnalysis {
    pub team_name: String,
    pub language: Language,
    pub per_member: Vec<MemberAnalysis>,
    pub type_coverage: TypeCoverageReport,
    pub magic_item_eval: MagicItemEvaluation,
    /// Flat human-readable messages, in rule order.
    pub recommendations: Vec<String>,
    /// The same advisories with category, severity and implicated ids.
    pub recommendations_structured: Vec<Advisory>,
    pub team_synergy: TeamSynergyAdvice,
}
