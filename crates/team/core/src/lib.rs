//! Deterministic team-analysis logic and data types shared across services.
//!
//! `team-core` defines the canonical domain model (reference entities and
//! team composition) and exposes pure APIs for stat computation, move
//! profiling, type coverage, magic-item eligibility, advice-prompt rendering,
//! and the recommendation rule battery. Nothing here performs I/O; the
//! runtime crate wires these functions to stores and the advice generator.
pub mod analysis;
pub mod ids;
pub mod localized;
pub mod model;
pub mod prompt;
pub mod validate;

pub use analysis::{
    Advisory, AdvisoryCategory, CounterCoverage, DefenseStatusProfile, EffectiveStats,
    EligibilityInput, EnergyProfile, MagicItemEvaluation, MemberAnalysis, MemberTyping,
    RuleContext, Severity, TeamAnalysis, TeamSynergyAdvice, TraitSynergyFinding,
    TypeCoverageReport, compute_effective_stats, counter_coverage, defense_status_profile,
    energy_profile, evaluate_magic_item, generate_recommendations, is_member_weak_to,
    type_coverage,
};
pub use ids::{
    MagicItemId, MemberId, MonsterId, MoveId, PersonalityId, SpeciesId, TeamId, TermId, TraitId,
    TypeId,
};
pub use localized::{Language, LocalizedText};
pub use model::{
    AttackStyle, BaseStats, GameTerm, LegacyMove, MagicEffectCode, MagicItem, Monster, Move,
    MoveCategory, Personality, Species, StatModifiers, Talent, TalentError, TeamMember, TeamSheet,
    Trait, TypeChart, TypeRecord,
};
pub use prompt::{TeamPromptEntry, team_synergy_prompt, trait_synergy_prompt};
pub use validate::{TeamValidationError, validate_team};
