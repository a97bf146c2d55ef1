//! Recommendation rule engine.
//!
//! A fixed, ordered battery of independent checks over the aggregated
//! analysis. The evaluation order is a presentation contract: callers and
//! tests rely on advisories appearing exactly in the order the rules are
//! listed here.

use std::collections::BTreeMap;

use crate::ids::{MemberId, MoveId, TypeId};
use crate::localized::Language;
use crate::model::monster::AttackStyle;
use crate::model::types::TypeChart;

use super::coverage::TypeCoverageReport;
use super::eligibility::MagicItemEvaluation;
use super::report::MemberAnalysis;

/// Average energy cost above which a member's moveset is flagged expensive.
pub const HIGH_ENERGY_THRESHOLD: f64 = 4.0;

/// Minimum Defense/Status moves a member should carry.
pub const MIN_DEFENSE_STATUS_MOVES: usize = 2;

/// Main/sub type slots shared by this many members trigger the redundancy
/// warning.
pub const REDUNDANT_TYPE_THRESHOLD: usize = 4;

/// Advisory category tags.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AdvisoryCategory {
    Coverage,
    Weakness,
    MagicItem,
    Energy,
    Counters,
    DefenseStatus,
    TraitSynergy,
    RoleDiversity,
    StatHighlight,
    General,
}

/// Advisory severity tags.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Severity {
    Info,
    Warn,
    Danger,
}

/// One advisory emitted by a rule.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Advisory {
    pub category: AdvisoryCategory,
    pub severity: Severity,
    pub message: String,
    pub type_ids: Vec<TypeId>,
    pub member_ids: Vec<MemberId>,
    pub move_ids: Vec<MoveId>,
}

impl Advisory {
    fn new(category: AdvisoryCategory, severity: Severity, message: String) -> Self {
        Self {
            category,
            severity,
            message,
            type_ids: Vec::new(),
            member_ids: Vec::new(),
            move_ids: Vec::new(),
        }
    }

    fn with_types(mut self, type_ids: Vec<TypeId>) -> Self {
        self.type_ids = type_ids;
        self
    }

    fn with_members(mut self, member_ids: Vec<MemberId>) -> Self {
        self.member_ids = member_ids;
        self
    }

    fn with_moves(mut self, move_ids: Vec<MoveId>) -> Self {
        self.move_ids = move_ids;
        self
    }
}

/// Inputs the rule battery consumes.
pub struct RuleContext<'a> {
    pub per_member: &'a [MemberAnalysis],
    pub coverage: &'a TypeCoverageReport,
    pub item_eval: &'a MagicItemEvaluation,
    pub chart: &'a TypeChart,
    /// Localized display names for every selected move.
    pub move_names: &'a BTreeMap<MoveId, String>,
    pub language: Language,
}

/// Runs the full rule battery, in the contract order:
/// coverage gap, team weakness, item eligibility, redundant typing, the
/// per-member checks (energy, counters, defensive depth, trait synergy),
/// role homogeneity, and the five stat highlights.
pub fn generate_recommendations(ctx: &RuleContext<'_>) -> Vec<Advisory> {
    let mut advisories = Vec::new();
    let lang = ctx.language;

    // 1) Offensive coverage gap.
    if !ctx.coverage.weak_against_types.is_empty() {
        let names = type_name_list(ctx, &ctx.coverage.weak_against_types);
        advisories.push(
            Advisory::new(
                AdvisoryCategory::Coverage,
                Severity::Warn,
                match lang {
                    Language::En => format!(
                        "Your team cannot hit these types super-effectively: {names}. \
                         Consider adding moves for coverage."
                    ),
                    Language::Zh => {
                        format!("你的队伍无法对以下属性造成克制伤害：{names}。建议补充相应属性的技能。")
                    }
                },
            )
            .with_types(ctx.coverage.weak_against_types.clone()),
        );
    }

    // 2) Team-wide defensive weakness.
    if !ctx.coverage.team_weak_to.is_empty() {
        let names = type_name_list(ctx, &ctx.coverage.team_weak_to);
        advisories.push(
            Advisory::new(
                AdvisoryCategory::Weakness,
                Severity::Danger,
                match lang {
                    Language::En => format!(
                        "Your team is especially vulnerable to: {names}. \
                         Consider defensive options or resistances."
                    ),
                    Language::Zh => {
                        format!("你的队伍特别惧怕：{names}。建议加入防御手段或抗性成员。")
                    }
                },
            )
            .with_types(ctx.coverage.team_weak_to.clone()),
        );
    }

    // 3) Magic-item eligibility summary.
    let targets = &ctx.item_eval.valid_targets;
    let (severity, message) = match (targets.len(), lang) {
        (0, Language::En) => (
            Severity::Warn,
            "Your selected magic item cannot be used by any monster in your current team!"
                .to_owned(),
        ),
        (0, Language::Zh) => (
            Severity::Warn,
            "当前队伍中没有任何宠物可以使用所选的魔法道具！".to_owned(),
        ),
        (1, Language::En) => (
            Severity::Info,
            "Only one monster can use the selected magic item.".to_owned(),
        ),
        (1, Language::Zh) => (Severity::Info, "只有一只宠物可以使用所选的魔法道具。".to_owned()),
        (_, Language::En) => (
            Severity::Info,
            "Multiple monsters can use the selected magic item.".to_owned(),
        ),
        (_, Language::Zh) => (Severity::Info, "多只宠物可以使用所选的魔法道具。".to_owned()),
    };
    advisories.push(
        Advisory::new(AdvisoryCategory::MagicItem, severity, message)
            .with_members(targets.clone()),
    );

    // 4) Redundant typing across main/sub slots.
    let mut slot_counts: BTreeMap<TypeId, usize> = BTreeMap::new();
    for analysis in ctx.per_member {
        *slot_counts.entry(analysis.main_type).or_default() += 1;
        if let Some(sub) = analysis.sub_type {
            *slot_counts.entry(sub).or_default() += 1;
        }
    }
    let common: Vec<TypeId> = slot_counts
        .into_iter()
        .filter(|(_, count)| *count >= REDUNDANT_TYPE_THRESHOLD)
        .map(|(id, _)| id)
        .collect();
    if !common.is_empty() {
        let names = type_name_list(ctx, &common);
        advisories.push(
            Advisory::new(
                AdvisoryCategory::Weakness,
                Severity::Warn,
                match lang {
                    Language::En => format!(
                        "Many monsters share these types: {names}. \
                         This increases vulnerability to specific counters."
                    ),
                    Language::Zh => {
                        format!("多只宠物属性重复：{names}。这会放大特定克制带来的风险。")
                    }
                },
            )
            .with_types(common),
        );
    }

    // 5) Per-member checks, in team order.
    for analysis in ctx.per_member {
        let name = analysis.display_name.as_str();
        let member = analysis.member;

        if analysis.energy_profile.avg_energy_cost > HIGH_ENERGY_THRESHOLD {
            advisories.push(
                Advisory::new(
                    AdvisoryCategory::Energy,
                    Severity::Warn,
                    match lang {
                        Language::En => format!(
                            "{name}'s moves have high average energy cost. \
                             Consider lower-cost or energy-restoring moves."
                        ),
                        Language::Zh => {
                            format!("{name} 的技能平均耗能偏高。建议选择低耗能或回能技能。")
                        }
                    },
                )
                .with_members(vec![member]),
            );
        }

        if analysis.counter_coverage.total_counter_moves == 0 {
            advisories.push(
                Advisory::new(
                    AdvisoryCategory::Counters,
                    Severity::Warn,
                    match lang {
                        Language::En => format!("{name} has no counter-effect moves selected."),
                        Language::Zh => format!("{name} 没有携带任何反制技能。"),
                    },
                )
                .with_members(vec![member]),
            );
        }

        if analysis.defense_status.count < MIN_DEFENSE_STATUS_MOVES {
            advisories.push(
                Advisory::new(
                    AdvisoryCategory::DefenseStatus,
                    Severity::Info,
                    match lang {
                        Language::En => format!(
                            "{name} has fewer than {MIN_DEFENSE_STATUS_MOVES} Defense/Status \
                             moves. Consider adding more for survivability."
                        ),
                        Language::Zh => format!(
                            "{name} 的防御/状态技能少于 {MIN_DEFENSE_STATUS_MOVES} 个。建议补充以提高生存能力。"
                        ),
                    },
                )
                .with_members(vec![member]),
            );
        }

        for synergy in &analysis.trait_synergies {
            if synergy.synergy_moves.is_empty() {
                continue;
            }
            let move_names = move_name_list(ctx, &synergy.synergy_moves);
            advisories.push(
                Advisory::new(
                    AdvisoryCategory::TraitSynergy,
                    Severity::Info,
                    match lang {
                        Language::En => {
                            format!("{name}'s trait works well with: {move_names}.")
                        }
                        Language::Zh => {
                            format!("{name} 的特性与以下技能配合良好：{move_names}。")
                        }
                    },
                )
                .with_members(vec![member])
                .with_moves(synergy.synergy_moves.clone()),
            );
        }
    }

    // 6) Role homogeneity.
    if let Some(first) = ctx.per_member.first() {
        let style = first.preferred_attack_style;
        if ctx
            .per_member
            .iter()
            .all(|a| a.preferred_attack_style == style)
        {
            advisories.push(Advisory::new(
                AdvisoryCategory::RoleDiversity,
                Severity::Warn,
                match lang {
                    Language::En => format!(
                        "All monsters are {style}-style attackers. \
                         This may make the team predictable."
                    ),
                    Language::Zh => format!(
                        "所有宠物都是{}攻击型。队伍策略可能过于单一。",
                        style_label_zh(style)
                    ),
                },
            ));
        }
    }

    // 7) Stat highlights, each annotated with a suggested battle role.
    for highlight in STAT_HIGHLIGHTS {
        push_stat_highlight(ctx, highlight, &mut advisories);
    }

    advisories
}

// ============================================================================
// Stat Highlights
// ============================================================================

struct StatHighlight {
    value: fn(&MemberAnalysis) -> i32,
    label_en: &'static str,
    label_zh: &'static str,
    role_en: &'static str,
    role_zh: &'static str,
}

const STAT_HIGHLIGHTS: &[StatHighlight] = &[
    StatHighlight {
        value: |a| a.effective_stats.hp,
        label_en: "HP",
        label_zh: "体力",
        role_en: "frontline or defensive pivot",
        role_zh: "前排或防御轴心",
    },
    StatHighlight {
        value: |a| a.effective_stats.phy_atk,
        label_en: "Physical Attack",
        label_zh: "物理攻击",
        role_en: "main physical attacker",
        role_zh: "主物理输出",
    },
    StatHighlight {
        value: |a| a.effective_stats.mag_atk,
        label_en: "Magic Attack",
        label_zh: "魔法攻击",
        role_en: "main magic attacker",
        role_zh: "主魔法输出",
    },
    StatHighlight {
        value: |a| a.effective_stats.overall_def(),
        label_en: "Total Defense",
        label_zh: "总防御",
        role_en: "physical or special tank",
        role_zh: "物防或魔防坦克",
    },
    StatHighlight {
        value: |a| a.effective_stats.spd,
        label_en: "Speed",
        label_zh: "速度",
        role_en: "lead, scout, or revenge killer",
        role_zh: "首发、侦查或补刀手",
    },
];

/// Emits one highlight for the member with the maximum value; ties keep the
/// earliest member in team order.
fn push_stat_highlight(
    ctx: &RuleContext<'_>,
    highlight: &StatHighlight,
    advisories: &mut Vec<Advisory>,
) {
    let mut best: Option<&MemberAnalysis> = None;
    for analysis in ctx.per_member {
        let better = match best {
            Some(current) => (highlight.value)(analysis) > (highlight.value)(current),
            None => true,
        };
        if better {
            best = Some(analysis);
        }
    }
    let Some(best) = best else {
        return;
    };

    let value = (highlight.value)(best);
    let name = best.display_name.as_str();
    let message = match ctx.language {
        Language::En => format!(
            "{name} has the highest {} ({value}). Consider using it as your {}.",
            highlight.label_en, highlight.role_en
        ),
        Language::Zh => format!(
            "{name} 拥有最高的{}（{value}）。建议将其作为{}。",
            highlight.label_zh, highlight.role_zh
        ),
    };

    advisories.push(
        Advisory::new(AdvisoryCategory::StatHighlight, Severity::Info, message)
            .with_members(vec![best.member]),
    );
}

// ============================================================================
// Name Rendering
// ============================================================================

fn type_name_list(ctx: &RuleContext<'_>, ids: &[TypeId]) -> String {
    let names: Vec<String> = ids
        .iter()
        .map(|id| ctx.chart.display_name(*id, ctx.language))
        .collect();
    names.join(", ")
}

fn move_name_list(ctx: &RuleContext<'_>, ids: &[MoveId]) -> String {
    let names: Vec<String> = ids
        .iter()
        .map(|id| {
            ctx.move_names
                .get(id)
                .cloned()
                .unwrap_or_else(|| format!("#{id}"))
        })
        .collect();
    names.join(", ")
}

fn style_label_zh(style: AttackStyle) -> &'static str {
    match style {
        AttackStyle::Physical => "物理",
        AttackStyle::Magic => "魔法",
        AttackStyle::Both => "物魔双",
    }
}
