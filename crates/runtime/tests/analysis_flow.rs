//! End-to-end orchestrator tests: Load → Dispatch → Collect → Aggregate →
//! Respond over the in-memory stores and the scripted advisor.

mod common;

use common::{FIRE, ROCK, WATER, default_service, en, service, team_sheet, test_config};
use runtime::advisor::mock::MockAdvisor;
use runtime::{AnalyzeRequest, ServiceError};
use team_core::analysis::AdvisoryCategory;
use team_core::ids::{MemberId, MonsterId, MoveId};
use team_core::localized::Language;

#[tokio::test]
async fn full_report_is_assembled_in_member_order() {
    let svc = default_service();
    let report = svc
        .analyzer
        .analyze(AnalyzeRequest::new(team_sheet(), en()))
        .await
        .unwrap();

    assert_eq!(report.team_name, "Alpha Squad");
    assert_eq!(report.per_member.len(), 6);
    let monster_order: Vec<MonsterId> = report.per_member.iter().map(|m| m.monster).collect();
    assert_eq!(monster_order, (1..=6).map(MonsterId).collect::<Vec<_>>());

    // Deterministic sections for the first member (Ember Fox).
    let fox = &report.per_member[0];
    assert_eq!(fox.effective_stats.hp, 417);
    assert_eq!(fox.effective_stats.mag_atk, 181);
    assert_eq!(fox.energy_profile.avg_energy_cost, 1.5);
    assert_eq!(fox.energy_profile.zero_cost_moves, vec![MoveId(3)]);
    assert_eq!(fox.energy_profile.energy_restore_moves, vec![MoveId(4)]);

    // Counter coverage comes from the member's own moves.
    let hound = &report.per_member[1];
    assert!(hound.counter_coverage.has_attack_counter);
    assert!(hound.counter_coverage.has_defense_counter);
    assert_eq!(hound.counter_coverage.total_counter_moves, 2);

    // Team-level sets.
    assert_eq!(report.type_coverage.weak_against_types, vec![ROCK]);
    assert_eq!(report.type_coverage.team_weak_to, vec![WATER, ROCK]);
    assert!(report.type_coverage.effective_against_types.contains(&FIRE));

    // Flare Crest: the three Fire mains qualify, in team order.
    assert_eq!(
        report.magic_item_eval.valid_targets,
        vec![MemberId(0), MemberId(1), MemberId(2)]
    );

    // Scripted advice mapped back onto the member's own move ids.
    let synergy = &fox.trait_synergies[0];
    assert_eq!(synergy.synergy_moves, vec![MoveId(1), MoveId(4)]);
    assert_eq!(synergy.recommendation.len(), 3);

    // Team-wide advice survived the round trip.
    assert_eq!(
        report.team_synergy.turn_order_strategy,
        vec!["Lead with Ember Fox."]
    );

    // Flat messages mirror the structured advisories one-to-one.
    assert_eq!(
        report.recommendations,
        report
            .recommendations_structured
            .iter()
            .map(|a| a.message.clone())
            .collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn recommendation_categories_follow_the_contract_order() {
    let svc = default_service();
    let report = svc
        .analyzer
        .analyze(AnalyzeRequest::new(team_sheet(), en()))
        .await
        .unwrap();

    let categories: Vec<AdvisoryCategory> = report
        .recommendations_structured
        .iter()
        .map(|a| a.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            AdvisoryCategory::Coverage,
            AdvisoryCategory::Weakness,
            AdvisoryCategory::MagicItem,
            // Member 0: no counters, plus the scripted trait synergy.
            AdvisoryCategory::Counters,
            AdvisoryCategory::TraitSynergy,
            // Members 2-4: no counters. Members 1 and 5 carry counter moves.
            AdvisoryCategory::Counters,
            AdvisoryCategory::Counters,
            AdvisoryCategory::Counters,
            // The five stat highlights close the report.
            AdvisoryCategory::StatHighlight,
            AdvisoryCategory::StatHighlight,
            AdvisoryCategory::StatHighlight,
            AdvisoryCategory::StatHighlight,
            AdvisoryCategory::StatHighlight,
        ]
    );
}

#[tokio::test]
async fn one_failing_advice_slot_degrades_alone() {
    let advisor = common::scripted_advisor().fail_when("Monster: Flare Moth");
    let svc = service(advisor, test_config());

    let report = svc
        .analyzer
        .analyze(AnalyzeRequest::new(team_sheet(), en()))
        .await
        .unwrap();

    // All six member sections and the team section still exist.
    assert_eq!(report.per_member.len(), 6);
    assert!(!report.team_synergy.key_combos.is_empty());

    // Only the failed slot shows the fallback text.
    let moth = &report.per_member[2].trait_synergies[0];
    assert!(moth.synergy_moves.is_empty());
    assert_eq!(moth.recommendation, vec!["Error generating analysis."]);

    let fox = &report.per_member[0].trait_synergies[0];
    assert_ne!(fox.recommendation, vec!["Error generating analysis."]);
}

#[tokio::test]
async fn team_advice_failure_leaves_the_deterministic_report_intact() {
    let advisor = MockAdvisor::new().fail_when("Roster:");
    let svc = service(advisor, test_config());

    let report = svc
        .analyzer
        .analyze(AnalyzeRequest::new(team_sheet(), en()))
        .await
        .unwrap();

    assert!(report.team_synergy.key_combos.is_empty());
    assert_eq!(
        report.team_synergy.general_strategy,
        vec!["Error generating analysis."]
    );
    // Deterministic sections are unaffected.
    assert_eq!(report.type_coverage.weak_against_types, vec![ROCK]);
    assert_eq!(report.per_member.len(), 6);
}

#[tokio::test]
async fn advice_fallback_is_localized() {
    let advisor = MockAdvisor::new().fail_when("");
    let svc = service(advisor, test_config());

    let report = svc
        .analyzer
        .analyze(AnalyzeRequest::new(team_sheet(), Language::Zh))
        .await
        .unwrap();

    for member in &report.per_member {
        assert_eq!(
            member.trait_synergies[0].recommendation,
            vec!["生成分析时出错。"]
        );
    }
    assert_eq!(report.team_synergy.general_strategy, vec!["生成分析时出错。"]);
    // Rule messages render in the requested language too.
    assert!(report.recommendations[0].contains("你的队伍"));
}

#[tokio::test]
async fn deterministic_components_are_idempotent() {
    let svc = default_service();
    let request = AnalyzeRequest::new(team_sheet(), en());

    let first = svc.analyzer.analyze(request.clone()).await.unwrap();
    let second = svc.analyzer.analyze(request).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn cache_short_circuits_repeat_analyses_per_language() {
    let mut config = test_config();
    config.cache_enabled = true;
    let svc = service(common::scripted_advisor(), config);
    let request = AnalyzeRequest::new(team_sheet(), en());

    svc.analyzer.analyze(request.clone()).await.unwrap();
    assert_eq!(svc.advisor.calls(), 7);

    // Same composition and language: served from cache, no new calls.
    svc.analyzer.analyze(request.clone()).await.unwrap();
    assert_eq!(svc.advisor.calls(), 7);

    // Another language is a different report and re-dispatches.
    svc.analyzer
        .analyze(AnalyzeRequest::new(team_sheet(), Language::Zh))
        .await
        .unwrap();
    assert_eq!(svc.advisor.calls(), 14);
}

#[tokio::test]
async fn rate_limiter_bounds_repeat_analyses_but_not_cached_ones() {
    use runtime::RateLimiter;
    use std::sync::Arc;
    use std::time::Duration;

    // Cache off: every allowed request reaches the pipeline.
    let limiter = Arc::new(RateLimiter::new(Duration::from_secs(60), 1));
    let svc = common::service(common::scripted_advisor(), test_config());
    let analyzer = svc.analyzer.with_rate_limiter(limiter.clone());

    let request = AnalyzeRequest::new(team_sheet(), en()).with_caller("10.0.0.1");
    analyzer.analyze(request.clone()).await.unwrap();

    let error = analyzer.analyze(request.clone()).await.unwrap_err();
    assert!(matches!(error, ServiceError::RateLimited { .. }));
    assert!(error.to_string().contains("Too many requests"));

    // A different caller has its own window.
    let other = AnalyzeRequest::new(team_sheet(), en()).with_caller("10.0.0.2");
    analyzer.analyze(other).await.unwrap();

    // With the cache on, a repeated request is served before the limiter
    // is consulted.
    let mut cached_config = test_config();
    cached_config.cache_enabled = true;
    let svc = common::service(common::scripted_advisor(), cached_config);
    let analyzer = svc
        .analyzer
        .with_rate_limiter(Arc::new(RateLimiter::new(Duration::from_secs(60), 1)));
    let request = AnalyzeRequest::new(team_sheet(), en()).with_caller("10.0.0.9");
    analyzer.analyze(request.clone()).await.unwrap();
    analyzer.analyze(request).await.unwrap();
    assert_eq!(svc.advisor.calls(), 7);
}

#[tokio::test]
async fn missing_reference_ids_are_enumerated() {
    let svc = default_service();
    let mut sheet = team_sheet();
    sheet.members[5].monster = MonsterId(99);
    sheet.members[0].moves[0] = MoveId(999);

    let error = svc
        .analyzer
        .analyze(AnalyzeRequest::new(sheet, en()))
        .await
        .unwrap_err();

    match &error {
        ServiceError::MissingReference(missing) => {
            assert_eq!(missing.monsters, vec![MonsterId(99)]);
            assert_eq!(missing.moves, vec![MoveId(999)]);
        }
        other => panic!("expected MissingReference, got {other:?}"),
    }
    let message = error.to_string();
    assert!(message.contains("monsters [99]"));
    assert!(message.contains("moves [999]"));

    // No advice call was dispatched for the rejected request.
    assert_eq!(svc.advisor.calls(), 0);
}

#[tokio::test]
async fn invalid_sheets_are_rejected_before_any_work() {
    let svc = default_service();
    let mut sheet = team_sheet();
    sheet.members.pop();

    let error = svc
        .analyzer
        .analyze(AnalyzeRequest::new(sheet, en()))
        .await
        .unwrap_err();

    assert!(matches!(error, ServiceError::Validation(_)));
    assert_eq!(svc.advisor.calls(), 0);
}
