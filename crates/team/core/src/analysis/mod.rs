//! Deterministic team-analysis components.
//!
//! Everything in this module is a pure function over loaded reference data
//! and a validated team sheet: effective stats, move profiles, type
//! coverage, magic-item eligibility, and the recommendation rule battery.
//! Analyzing the same composition twice yields identical results.

pub mod coverage;
pub mod eligibility;
pub mod profile;
pub mod report;
pub mod rules;
pub mod stats;

pub use coverage::{
    MemberTyping, TEAM_WEAKNESS_THRESHOLD, TypeCoverageReport, is_member_weak_to, type_coverage,
};
pub use eligibility::{EligibilityInput, MagicItemEvaluation, evaluate_magic_item};
pub use profile::{
    CounterCoverage, DefenseStatusProfile, EnergyProfile, counter_coverage,
    defense_status_profile, energy_profile,
};
pub use report::{MemberAnalysis, TeamAnalysis, TeamSynergyAdvice, TraitSynergyFinding};
pub use rules::{
    Advisory, AdvisoryCategory, HIGH_ENERGY_THRESHOLD, MIN_DEFENSE_STATUS_MOVES,
    REDUNDANT_TYPE_THRESHOLD, RuleContext, Severity, generate_recommendations,
};
pub use stats::{EffectiveStats, compute_effective_stats};
