//! Team-analysis orchestrator.
//!
//! Drives one analysis request through its five phases:
//!
//! 1. **Load** — batch-resolve every referenced entity from the reference
//!    store (independent queries issued concurrently).
//! 2. **Dispatch** — render seven advice prompts (six members + one team)
//!    and fire all advice calls at once.
//! 3. **Collect** — wait for every call to settle; failures already arrived
//!    as fallback payloads, so nothing here can abort the report.
//! 4. **Aggregate** — run the deterministic analysis components and the
//!    recommendation rule battery.
//! 5. **Respond** — assemble the unified report, member sections in input
//!    order.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use team_core::analysis::{
    EligibilityInput, MemberAnalysis, MemberTyping, RuleContext, TeamAnalysis, TeamSynergyAdvice,
    TraitSynergyFinding, compute_effective_stats, counter_coverage, defense_status_profile,
    energy_profile, evaluate_magic_item, generate_recommendations, type_coverage,
};
use team_core::ids::{MemberId, MonsterId, MoveId, PersonalityId, TraitId, TypeId};
use team_core::localized::Language;
use team_core::model::{Monster, Move, Personality, TeamMember, TeamSheet, Trait, TypeChart};
use team_core::prompt::{TeamPromptEntry, team_synergy_prompt, trait_synergy_prompt};
use team_core::validate::validate_team;

use crate::advisor::{AdviceClient, TeamSynergyPayload, TraitSynergyPayload};
use crate::cache::{TimedCache, team_fingerprint};
use crate::config::ServiceConfig;
use crate::error::{MissingReferences, Result, ServiceError};
use crate::limiter::{RateLimiter, rate_limit_message};
use crate::repository::{ReferenceRepository, TeamRepository};

/// One analysis request: a full sheet, the output language, and an optional
/// caller key for rate limiting.
#[derive(Clone, Debug)]
pub struct AnalyzeRequest {
    pub sheet: TeamSheet,
    pub language: Language,
    /// Boundary-assigned caller identity (usually the client address).
    /// Requests without one are not rate limited.
    pub caller: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(sheet: TeamSheet, language: Language) -> Self {
        Self {
            sheet,
            language,
            caller: None,
        }
    }

    /// Attaches the caller key the limiter should account against.
    #[must_use]
    pub fn with_caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = Some(caller.into());
        self
    }
}

/// The top-level coordinator for team analysis.
pub struct TeamAnalyzer {
    reference: Arc<dyn ReferenceRepository>,
    teams: Arc<dyn TeamRepository>,
    advice: AdviceClient,
    cache: Option<TimedCache<(String, Language), TeamAnalysis>>,
    limiter: Option<Arc<RateLimiter>>,
}

impl TeamAnalyzer {
    pub fn new(
        reference: Arc<dyn ReferenceRepository>,
        teams: Arc<dyn TeamRepository>,
        advice: AdviceClient,
        config: &ServiceConfig,
    ) -> Self {
        let cache = config
            .cache_enabled
            .then(|| TimedCache::new(config.cache_ttl));
        Self {
            reference,
            teams,
            advice,
            cache,
            limiter: None,
        }
    }

    /// Injects the boundary-owned rate limiter. Requests carrying a caller
    /// key are then accounted per caller and per caller + composition.
    #[must_use]
    pub fn with_rate_limiter(mut self, limiter: Arc<RateLimiter>) -> Self {
        self.limiter = Some(limiter);
        self
    }

    /// Analyzes an inline team sheet.
    ///
    /// Validation runs first; a cached report for the same composition and
    /// language short-circuits the whole pipeline (including the advice
    /// calls and the rate limiter — cached replies cost nothing).
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<TeamAnalysis> {
        validate_team(&request.sheet)?;

        let fingerprint = team_fingerprint(&request.sheet);
        let cache_key = (fingerprint.clone(), request.language);
        if let Some(cache) = &self.cache {
            if let Some(report) = cache.get(&cache_key) {
                tracing::info!(team = %request.sheet.name, "analysis served from cache");
                return Ok(report);
            }
        }

        // The composite key is language-independent: switching languages
        // for the same team still counts against the same window.
        if let (Some(limiter), Some(caller)) = (&self.limiter, &request.caller) {
            let allowed = limiter.check_and_record(caller)
                && limiter.check_and_record(&RateLimiter::composite_key(caller, &fingerprint));
            if !allowed {
                return Err(ServiceError::RateLimited {
                    message: rate_limit_message(request.language),
                });
            }
        }

        let report = self.run_pipeline(&request.sheet, request.language).await?;

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, report.clone());
        }
        Ok(report)
    }

    /// Loads a stored team and analyzes it through the same pipeline.
    pub async fn analyze_stored(
        &self,
        team_id: team_core::ids::TeamId,
        language: Language,
    ) -> Result<TeamAnalysis> {
        let stored = self
            .teams
            .get(team_id)
            .await?
            .ok_or(ServiceError::TeamNotFound(team_id))?;
        self.analyze(AnalyzeRequest::new(stored.sheet, language))
            .await
    }

    async fn run_pipeline(&self, sheet: &TeamSheet, language: Language) -> Result<TeamAnalysis> {
        // ==== Load ====
        tracing::info!(team = %sheet.name, "loading reference data for analysis");

        let monster_ids: BTreeSet<MonsterId> = sheet.members.iter().map(|m| m.monster).collect();
        let move_ids: BTreeSet<MoveId> = sheet
            .members
            .iter()
            .flat_map(|m| m.moves.iter().copied())
            .collect();
        let personality_ids: BTreeSet<PersonalityId> =
            sheet.members.iter().map(|m| m.personality).collect();

        let (monsters, moves, personalities, chart, magic_item, glossary) = tokio::join!(
            self.reference.monsters_by_ids(&monster_ids),
            self.reference.moves_by_ids(&move_ids),
            self.reference.personalities_by_ids(&personality_ids),
            self.reference.type_chart(),
            self.reference.magic_item(sheet.magic_item),
            self.reference.glossary(),
        );
        let monsters = monsters?;
        let moves = moves?;
        let personalities = personalities?;
        let chart = chart?;
        let magic_item = magic_item?;
        let glossary = glossary?;

        // Traits resolve through the loaded monsters.
        let trait_ids: BTreeSet<TraitId> = monsters.values().map(|m| m.trait_id).collect();
        let traits = self.reference.traits_by_ids(&trait_ids).await?;

        tracing::debug!(
            monsters = monsters.len(),
            moves = moves.len(),
            traits = traits.len(),
            personalities = personalities.len(),
            types = chart.len(),
            terms = glossary.len(),
            "reference data loaded"
        );

        let missing = MissingReferences {
            monsters: absent(&monster_ids, &monsters),
            moves: absent(&move_ids, &moves),
            traits: absent(&trait_ids, &traits),
            personalities: absent(&personality_ids, &personalities),
            types: sheet
                .members
                .iter()
                .map(|m| m.legacy_type)
                .filter(|id| !chart.contains(*id))
                .collect::<BTreeSet<TypeId>>()
                .into_iter()
                .collect(),
            magic_item: magic_item.is_none().then_some(sheet.magic_item),
        };
        if !missing.is_empty() {
            tracing::warn!(%missing, "analysis rejected: unknown reference ids");
            return Err(ServiceError::MissingReference(missing));
        }
        let Some(item) = magic_item else {
            unreachable!("missing magic item was reported above")
        };

        // ==== Dispatch ====
        let members = resolve_members(sheet, &monsters, &moves, &traits, &personalities);

        let member_prompts: Vec<String> = members
            .iter()
            .map(|m| trait_synergy_prompt(m.monster, m.passive, &m.moves, &glossary, language))
            .collect();
        let roster: Vec<TeamPromptEntry> = members
            .iter()
            .map(|m| TeamPromptEntry {
                name: m.monster.display_name(language).to_owned(),
                type_line: type_line(m.monster, &chart, language),
                attack_style: m.monster.preferred_attack_style,
                moves: m
                    .moves
                    .iter()
                    .map(|mv| mv.display_name(language).to_owned())
                    .collect(),
            })
            .collect();
        let team_prompt = team_synergy_prompt(&sheet.name, &roster, &item, &glossary, language);

        tracing::info!(
            calls = member_prompts.len() + 1,
            "dispatching concurrent advice calls"
        );
        let member_tasks: Vec<_> = member_prompts
            .into_iter()
            .map(|prompt| {
                let client = self.advice.clone();
                tokio::spawn(async move { client.trait_synergy(&prompt, language).await })
            })
            .collect();
        let team_task = {
            let client = self.advice.clone();
            tokio::spawn(async move { client.team_synergy(&team_prompt, language).await })
        };

        // ==== Collect ====
        // Results map back to members by slot index, never by content. A
        // panicked task folds into the same fallback as a failed call.
        let mut member_advice: Vec<TraitSynergyPayload> = Vec::with_capacity(member_tasks.len());
        for task in member_tasks {
            member_advice.push(task.await.unwrap_or_else(|e| {
                tracing::error!(error = %e, "advice task aborted");
                TraitSynergyPayload::fallback(language)
            }));
        }
        let team_advice = team_task.await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "team advice task aborted");
            TeamSynergyPayload::fallback(language)
        });

        // ==== Aggregate ====
        let per_member: Vec<MemberAnalysis> = members
            .iter()
            .zip(member_advice)
            .enumerate()
            .map(|(slot, (m, advice))| analyze_member(slot, m, advice, language))
            .collect();

        let team_move_types: BTreeSet<TypeId> = members
            .iter()
            .flat_map(|m| m.moves.iter().filter_map(|mv| mv.move_type))
            .collect();
        let typings: Vec<MemberTyping> = members
            .iter()
            .map(|m| MemberTyping {
                main: m.monster.main_type,
                sub: m.monster.sub_type,
            })
            .collect();
        let ignored = chart.ignored_pseudo_types();
        let coverage = type_coverage(&team_move_types, &typings, &chart, &ignored);

        let eligibility_inputs: Vec<EligibilityInput> = members
            .iter()
            .enumerate()
            .map(|(slot, m)| EligibilityInput {
                member: MemberId(slot as u32),
                main_type: m.monster.main_type,
                sub_type: m.monster.sub_type,
                legacy_type: m.member.legacy_type,
                leader_potential: m.monster.leader_potential,
            })
            .collect();
        let item_eval = evaluate_magic_item(&item, &eligibility_inputs, &chart);

        let move_names: BTreeMap<MoveId, String> = moves
            .values()
            .map(|mv| (mv.id, mv.display_name(language).to_owned()))
            .collect();
        let advisories = generate_recommendations(&RuleContext {
            per_member: &per_member,
            coverage: &coverage,
            item_eval: &item_eval,
            chart: &chart,
            move_names: &move_names,
            language,
        });

        // ==== Respond ====
        tracing::info!(
            advisories = advisories.len(),
            "analysis complete, assembling report"
        );
        Ok(TeamAnalysis {
            team_name: sheet.name.clone(),
            language,
            per_member,
            type_coverage: coverage,
            magic_item_eval: item_eval,
            recommendations: advisories.iter().map(|a| a.message.clone()).collect(),
            recommendations_structured: advisories,
            team_synergy: TeamSynergyAdvice {
                key_combos: team_advice.key_combos,
                turn_order_strategy: team_advice.turn_order_strategy,
                magic_item_usage: team_advice.magic_item_usage,
                general_strategy: team_advice.general_strategy,
            },
        })
    }
}

/// Ids from `wanted` that `found` does not contain, in ascending order.
fn absent<K: Ord + Copy, V>(wanted: &BTreeSet<K>, found: &BTreeMap<K, V>) -> Vec<K> {
    wanted
        .iter()
        .filter(|id| !found.contains_key(*id))
        .copied()
        .collect()
}

/// One member with every reference record resolved.
struct ResolvedMember<'a> {
    member: &'a TeamMember,
    monster: &'a Monster,
    passive: &'a Trait,
    personality: &'a Personality,
    moves: Vec<&'a Move>,
}

fn resolve_members<'a>(
    sheet: &'a TeamSheet,
    monsters: &'a BTreeMap<MonsterId, Monster>,
    moves: &'a BTreeMap<MoveId, Move>,
    traits: &'a BTreeMap<TraitId, Trait>,
    personalities: &'a BTreeMap<PersonalityId, Personality>,
) -> Vec<ResolvedMember<'a>> {
    sheet
        .members
        .iter()
        .map(|member| {
            let monster = &monsters[&member.monster];
            ResolvedMember {
                member,
                monster,
                passive: &traits[&monster.trait_id],
                personality: &personalities[&member.personality],
                moves: member.moves.iter().map(|id| &moves[id]).collect(),
            }
        })
        .collect()
}

/// Runs the deterministic per-member components and folds in the advice
/// payload, mapping returned move names back onto the member's selection.
fn analyze_member(
    slot: usize,
    m: &ResolvedMember<'_>,
    advice: TraitSynergyPayload,
    language: Language,
) -> MemberAnalysis {
    let stats = compute_effective_stats(&m.monster.base, &m.personality.modifiers, &m.member.talent);

    // The generator names moves the way the prompt showed them; accept the
    // localized display name or the canonical one, drop anything else.
    let mut name_to_id: BTreeMap<&str, MoveId> = BTreeMap::new();
    for mv in &m.moves {
        name_to_id.insert(mv.name.as_str(), mv.id);
        name_to_id.insert(mv.display_name(language), mv.id);
    }
    let mut synergy_moves: Vec<MoveId> = Vec::new();
    for name in &advice.synergy_moves {
        if let Some(id) = name_to_id.get(name.as_str()) {
            if !synergy_moves.contains(id) {
                synergy_moves.push(*id);
            }
        }
    }

    MemberAnalysis {
        member: MemberId(slot as u32),
        monster: m.monster.id,
        display_name: m.monster.display_name(language).to_owned(),
        main_type: m.monster.main_type,
        sub_type: m.monster.sub_type,
        preferred_attack_style: m.monster.preferred_attack_style,
        effective_stats: stats,
        energy_profile: energy_profile(&m.moves),
        counter_coverage: counter_coverage(&m.moves),
        defense_status: defense_status_profile(&m.moves),
        trait_synergies: vec![TraitSynergyFinding {
            monster: m.monster.id,
            trait_id: m.passive.id,
            synergy_moves,
            recommendation: advice.recommendation,
        }],
    }
}

/// Renders "Main" or "Main / Sub" in the requested language.
fn type_line(monster: &Monster, chart: &TypeChart, language: Language) -> String {
    let main = chart.display_name(monster.main_type, language);
    match monster.sub_type {
        Some(sub) => format!("{main} / {}", chart.display_name(sub, language)),
        None => main,
    }
}
