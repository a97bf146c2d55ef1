//! Advice-prompt rendering.
//!
//! Pure text builders for the external advice generator: one prompt flavor
//! per monster (trait synergy) and one for the whole team. No network call
//! happens here; the runtime owns the call boundary. Each prompt pins the
//! number and length of expected recommendations and the exact JSON shape
//! of the reply so the response parser stays trivial.

use std::fmt::Write as _;

use crate::localized::Language;
use crate::model::glossary::GameTerm;
use crate::model::magic_item::MagicItem;
use crate::model::monster::{AttackStyle, Monster};
use crate::model::moves::Move;
use crate::model::traits::Trait;

/// One roster line of the team-synergy prompt.
#[derive(Clone, Debug, PartialEq)]
pub struct TeamPromptEntry {
    /// Localized monster name.
    pub name: String,
    /// Rendered typing, e.g. "Fire / Flying".
    pub type_line: String,
    pub attack_style: AttackStyle,
    /// Localized names of the four selected moves.
    pub moves: Vec<String>,
}

fn glossary_block(terms: &[GameTerm], language: Language) -> String {
    let mut block = String::new();
    for term in terms {
        let _ = writeln!(
            block,
            "- {}: {}",
            term.key,
            term.display_description(language)
        );
    }
    block
}

/// Renders the per-monster trait-synergy prompt.
pub fn trait_synergy_prompt(
    monster: &Monster,
    passive: &Trait,
    moves: &[&Move],
    terms: &[GameTerm],
    language: Language,
) -> String {
    let mut move_lines = String::new();
    for m in moves {
        let _ = writeln!(
            move_lines,
            "- {}: {}",
            m.display_name(language),
            m.display_description(language)
        );
    }
    let glossary = glossary_block(terms, language);
    let name = monster.display_name(language);
    let trait_name = passive.display_name(language);
    let trait_text = passive.display_description(language);
    let style = monster.preferred_attack_style;

    match language {
        Language::En => format!(
            r#"You are an expert game strategist.
Monster: {name}
Trait: {trait_name} — {trait_text}
Preferred attack style: {style}
Selected moves:
{move_lines}
Game Terms Glossary:
{glossary}
Instructions:
1. Identify which moves are especially synergistic with the trait.
2. For your recommendations:
    - Give **exactly two recommendations** (3-4 sentences max) that **explain in detail how the user should use the selected moves together**, including possible combos, turn order, defensive or offensive applications, and how to leverage the trait with the current moveset.
    - Give **one additional recommendation** (1-2 sentences) for how to improve move selection in general (such as favoring certain types, effects, or utility, but do NOT suggest specific move swaps).
3. Output as JSON in the following format:
{{
"synergy_moves": [list of move names],
"recommendation": [list of suggestions as strings]
}}
"#
        ),
        Language::Zh => format!(
            r#"你是一位资深的对战策略专家。
宠物：{name}
特性：{trait_name} — {trait_text}
偏好攻击方式：{style}
已选技能：
{move_lines}
游戏术语表：
{glossary}
要求：
1. 找出与该特性配合最好的技能。
2. 给出建议：
    - 给出**恰好两条建议**（每条不超过 3-4 句），**详细说明如何组合使用已选技能**，包括连招、出手顺序、攻防用法，以及如何用当前技能组发挥特性。
    - 再给出**一条补充建议**（1-2 句），说明技能选择的总体改进方向（例如偏向某些属性、效果或功能性，但不要推荐具体的技能替换）。
3. 按以下 JSON 格式输出：
{{
"synergy_moves": [技能名称列表],
"recommendation": [建议文本列表]
}}
"#
        ),
    }
}

/// Renders the whole-team synergy prompt.
pub fn team_synergy_prompt(
    team_name: &str,
    roster: &[TeamPromptEntry],
    item: &MagicItem,
    terms: &[GameTerm],
    language: Language,
) -> String {
    let mut roster_lines = String::new();
    for entry in roster {
        let _ = writeln!(
            roster_lines,
            "- {} ({}, {} style): {}",
            entry.name,
            entry.type_line,
            entry.attack_style,
            entry.moves.join(", ")
        );
    }
    let glossary = glossary_block(terms, language);
    let item_name = item.display_name(language);
    let item_text = item.localized.description_in(language, &item.description);

    match language {
        Language::En => format!(
            r#"You are an expert game strategist.
Team: {team_name}
Roster:
{roster_lines}
Magic item: {item_name} — {item_text}
Game Terms Glossary:
{glossary}
Instructions:
1. Analyze how the six monsters work together as a team.
2. For each list below give **2-3 entries**, each 1-2 sentences:
    - key_combos: move or monster pairings that work especially well together.
    - turn_order_strategy: how to sequence the team across turns.
    - magic_item_usage: when and on whom to use the magic item.
    - general_strategy: overall game-plan advice for this composition.
3. Output as JSON in the following format:
{{
"key_combos": [list of strings],
"turn_order_strategy": [list of strings],
"magic_item_usage": [list of strings],
"general_strategy": [list of strings]
}}
"#
        ),
        Language::Zh => format!(
            r#"你是一位资深的对战策略专家。
队伍：{team_name}
阵容：
{roster_lines}
魔法道具：{item_name} — {item_text}
游戏术语表：
{glossary}
要求：
1. 分析六只宠物作为一个整体的协同方式。
2. 下面每个列表给出 **2-3 条**，每条 1-2 句：
    - key_combos：配合特别好的技能或宠物组合。
    - turn_order_strategy：队伍的出场与回合安排。
    - magic_item_usage：何时、对谁使用魔法道具。
    - general_strategy：针对该阵容的整体打法建议。
3. 按以下 JSON 格式输出：
{{
"key_combos": [字符串列表],
"turn_order_strategy": [字符串列表],
"magic_item_usage": [字符串列表],
"general_strategy": [字符串列表]
}}
"#
        ),
    }
}
