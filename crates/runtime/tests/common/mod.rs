//! Shared fixtures: a small reference universe and a default team.
#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::{Arc, Once};
use std::time::Duration;

use runtime::advisor::mock::MockAdvisor;
use runtime::{AdviceClient, InMemoryReferenceRepo, InMemoryTeamRepo, ServiceConfig, TeamAnalyzer};
use team_content::ReferenceBundle;
use team_core::ids::{
    MagicItemId, MonsterId, MoveId, PersonalityId, SpeciesId, TermId, TraitId, TypeId,
};
use team_core::localized::{Language, LocalizedText};
use team_core::model::{
    AttackStyle, BaseStats, GameTerm, MagicEffectCode, MagicItem, Monster, Move, MoveCategory,
    Personality, Species, StatModifiers, Talent, TeamMember, TeamSheet, Trait, TypeChart,
    TypeRecord,
};

pub const FIRE: TypeId = TypeId(1);
pub const GRASS: TypeId = TypeId(2);
pub const WATER: TypeId = TypeId(3);
pub const ROCK: TypeId = TypeId(4);
pub const LEADER: TypeId = TypeId(9);

fn type_record(id: TypeId, name: &str, effective: &[TypeId], weak: &[TypeId]) -> TypeRecord {
    TypeRecord {
        id,
        name: name.to_owned(),
        localized: LocalizedText::new(),
        effective_against: effective.iter().copied().collect::<BTreeSet<_>>(),
        weak_against: weak.iter().copied().collect::<BTreeSet<_>>(),
    }
}

fn mv(
    id: u32,
    name: &str,
    move_type: Option<TypeId>,
    category: MoveCategory,
    cost: u32,
    description: &str,
    has_counter: bool,
) -> Move {
    Move {
        id: MoveId(id),
        name: name.to_owned(),
        move_type,
        category,
        energy_cost: cost,
        power: category.is_attack().then_some(60 + 5 * id),
        description: description.to_owned(),
        has_counter,
        is_move_stone: false,
        localized: LocalizedText::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn monster(
    id: u32,
    name: &str,
    main: TypeId,
    sub: Option<TypeId>,
    trait_id: u32,
    style: AttackStyle,
    leader_potential: bool,
    base: BaseStats,
) -> Monster {
    Monster {
        id: MonsterId(id),
        species: SpeciesId(id),
        name: name.to_owned(),
        form: "default".to_owned(),
        evolves_from: None,
        main_type: main,
        sub_type: sub,
        default_legacy_type: main,
        trait_id: TraitId(trait_id),
        leader_potential,
        is_leader_form: false,
        base,
        preferred_attack_style: style,
        move_pool: Vec::new(),
        legacy_moves: Vec::new(),
        localized: LocalizedText::new(),
    }
}

fn passive(id: u32, name: &str, description: &str) -> Trait {
    Trait {
        id: TraitId(id),
        name: name.to_owned(),
        description: description.to_owned(),
        localized: LocalizedText::new(),
    }
}

/// Five types, twelve moves, six monsters, two personalities, five magic
/// items, and a two-term glossary.
pub fn reference_bundle() -> ReferenceBundle {
    let chart = TypeChart::new([
        type_record(FIRE, "Fire", &[GRASS], &[WATER]),
        type_record(GRASS, "Grass", &[WATER], &[FIRE]),
        type_record(WATER, "Water", &[FIRE], &[GRASS]),
        type_record(ROCK, "Rock", &[FIRE], &[]),
        type_record(LEADER, "Leader", &[], &[]),
    ]);

    let moves = vec![
        mv(1, "Flame Burst", Some(FIRE), MoveCategory::MagicAttack, 3,
           "A burst of searing flame.", false),
        mv(2, "Ember Jab", Some(FIRE), MoveCategory::PhysicalAttack, 2,
           "A quick burning jab.", false),
        mv(3, "Guard Stance", None, MoveCategory::Defense, 0,
           "Braces for impact.", false),
        mv(4, "Focus", None, MoveCategory::Status, 1,
           "Sharpens focus and restores 5 energy.", false),
        mv(5, "Aqua Cutter", Some(WATER), MoveCategory::PhysicalAttack, 3,
           "A blade of pressurized water.", false),
        mv(6, "Tide Surge", Some(WATER), MoveCategory::MagicAttack, 4,
           "A crushing wave.", false),
        mv(7, "Vine Lash", Some(GRASS), MoveCategory::PhysicalAttack, 2,
           "A whipping vine strike.", false),
        mv(8, "Rock Slam", Some(ROCK), MoveCategory::PhysicalAttack, 3,
           "Slams the target with stone.", true),
        mv(9, "Stone Wall", None, MoveCategory::Defense, 2,
           "Raises a wall that punishes attackers.", true),
        mv(10, "Taunt", None, MoveCategory::Status, 1,
           "Provokes the target.", false),
        mv(11, "Leaf Veil", Some(GRASS), MoveCategory::Defense, 1,
           "Shields behind leaves.", false),
        mv(12, "Torrent Dance", Some(WATER), MoveCategory::Status, 6,
           "A demanding dance of water.", false),
    ];

    let monsters = vec![
        monster(1, "Ember Fox", FIRE, None, 1, AttackStyle::Magic, true,
                BaseStats::new(100, 90, 110, 80, 85, 95)),
        monster(2, "Cinder Hound", FIRE, Some(ROCK), 4, AttackStyle::Physical, false,
                BaseStats::new(95, 115, 70, 90, 75, 88)),
        monster(3, "Flare Moth", FIRE, None, 1, AttackStyle::Magic, false,
                BaseStats::new(85, 70, 120, 70, 90, 105)),
        monster(4, "Wave Serpent", WATER, None, 2, AttackStyle::Magic, false,
                BaseStats::new(105, 80, 105, 85, 95, 80)),
        monster(5, "Moss Deer", GRASS, None, 3, AttackStyle::Physical, false,
                BaseStats::new(110, 100, 60, 95, 90, 75)),
        monster(6, "Boulder Ox", ROCK, None, 4, AttackStyle::Physical, false,
                BaseStats::new(120, 105, 55, 110, 70, 60)),
    ];

    let traits = vec![
        passive(1, "Blaze", "Boosts fire moves when HP is low."),
        passive(2, "Torrent", "Boosts water moves when HP is low."),
        passive(3, "Overgrow", "Boosts grass moves when HP is low."),
        passive(4, "Sturdy", "Survives a knockout blow with 1 HP."),
    ];

    let personalities = vec![
        Personality {
            id: PersonalityId(1),
            name: "Hardy".to_owned(),
            modifiers: StatModifiers::default(),
            localized: LocalizedText::new(),
        },
        Personality {
            id: PersonalityId(2),
            name: "Brave".to_owned(),
            modifiers: StatModifiers {
                phy_atk: 0.1,
                spd: -0.1,
                ..StatModifiers::default()
            },
            localized: LocalizedText::new(),
        },
    ];

    let item = |id: u32, name: &str, code: MagicEffectCode, applies: Option<TypeId>| MagicItem {
        id: MagicItemId(id),
        name: name.to_owned(),
        description: format!("{name} effect."),
        effect_code: code,
        applies_to_type: applies,
        localized: LocalizedText::new(),
    };
    let magic_items = vec![
        item(1, "Everglow Charm", MagicEffectCode::EnhanceSpell, None),
        item(2, "Flare Crest", MagicEffectCode::FlareBurst, Some(FIRE)),
        item(3, "Evolution Sigil", MagicEffectCode::EvolutionPower, None),
        item(4, "Dew Pendant", MagicEffectCode::FlowSpell, Some(WATER)),
        item(5, "Bloom Chalice", MagicEffectCode::SunHealing, Some(GRASS)),
    ];

    let terms = vec![
        GameTerm {
            id: TermId(1),
            key: "counter".to_owned(),
            description: "Punishes the opposing move category.".to_owned(),
            localized: LocalizedText::new(),
        },
        GameTerm {
            id: TermId(2),
            key: "energy".to_owned(),
            description: "Spent to use moves; restored over turns.".to_owned(),
            localized: LocalizedText::new(),
        },
    ];

    ReferenceBundle {
        chart,
        species: (1..=6)
            .map(|id| Species {
                id: SpeciesId(id),
                name: format!("Species {id}"),
                localized: LocalizedText::new(),
            })
            .collect(),
        monsters,
        moves,
        traits,
        personalities,
        magic_items,
        terms,
    }
}

fn member(monster: u32, legacy: TypeId, moves: [u32; 4]) -> TeamMember {
    TeamMember {
        monster: MonsterId(monster),
        personality: PersonalityId(1),
        legacy_type: legacy,
        moves: moves.map(MoveId),
        talent: Talent {
            hp_boost: 10,
            ..Talent::default()
        },
    }
}

/// The default six-member sheet used across the flow tests. Three Fire
/// mains make the team weak to Water and Rock; no team move is Rock-typed,
/// so Rock is an offensive gap.
pub fn team_sheet() -> TeamSheet {
    TeamSheet {
        name: "Alpha Squad".to_owned(),
        members: vec![
            member(1, FIRE, [1, 2, 3, 4]),
            member(2, FIRE, [2, 8, 9, 10]),
            member(3, FIRE, [1, 6, 10, 3]),
            member(4, WATER, [5, 6, 12, 3]),
            member(5, GRASS, [7, 11, 10, 4]),
            member(6, ROCK, [8, 9, 10, 3]),
        ],
        magic_item: MagicItemId(2),
    }
}

/// Advisor scripted for the default sheet: team advice plus one member
/// synergy for Ember Fox. Unscripted prompts answer with an empty object.
pub fn scripted_advisor() -> MockAdvisor {
    MockAdvisor::new()
        .respond_with(
            "Roster:",
            serde_json::json!({
                "key_combos": ["Open with Guard Stance, then Flame Burst."],
                "turn_order_strategy": ["Lead with Ember Fox."],
                "magic_item_usage": ["Save the crest for a burn turn."],
                "general_strategy": ["Trade aggressively into Grass teams."],
            }),
        )
        .respond_with(
            "Monster: Ember Fox",
            serde_json::json!({
                "synergy_moves": ["Flame Burst", "Focus"],
                "recommendation": [
                    "Alternate Focus and Flame Burst to stay above half energy.",
                    "Keep Guard Stance for predicted counters.",
                    "Favor moves that keep energy flowing.",
                ],
            }),
        )
}

/// Config with the cache off and short timeouts, so tests stay fast and
/// deterministic unless they opt in to caching.
pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        advice_timeout: Duration::from_millis(250),
        cache_enabled: false,
        ..ServiceConfig::default()
    }
}

pub struct TestService {
    pub analyzer: TeamAnalyzer,
    pub teams: Arc<InMemoryTeamRepo>,
    pub advisor: MockAdvisor,
}

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once per binary so `RUST_LOG` works
/// in test runs.
fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Wires an analyzer over the fixture bundle and the given advisor.
pub fn service(advisor: MockAdvisor, config: ServiceConfig) -> TestService {
    init_tracing();
    let reference = Arc::new(InMemoryReferenceRepo::new(reference_bundle()));
    let teams = Arc::new(InMemoryTeamRepo::new());
    let advice = AdviceClient::new(Arc::new(advisor.clone()), config.advice_timeout);
    let analyzer = TeamAnalyzer::new(reference, teams.clone(), advice, &config);
    TestService {
        analyzer,
        teams,
        advisor,
    }
}

/// Convenience: default scripted service with caching disabled.
pub fn default_service() -> TestService {
    service(scripted_advisor(), test_config())
}

pub fn en() -> Language {
    Language::En
}
