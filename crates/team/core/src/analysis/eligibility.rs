//! Magic-item target eligibility.

use crate::ids::{MagicItemId, MemberId, TypeId};
use crate::model::magic_item::{MagicEffectCode, MagicItem};
use crate::model::types::TypeChart;

/// The attributes of one member that item rules inspect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EligibilityInput {
    pub member: MemberId,
    pub main_type: TypeId,
    pub sub_type: Option<TypeId>,
    pub legacy_type: TypeId,
    pub leader_potential: bool,
}

/// Which members may use the chosen magic item.
///
/// `best_target` and `reasoning` are reserved for a future ranking pass and
/// are always `None` today.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagicItemEvaluation {
    pub chosen_item: MagicItemId,
    /// Eligible members, in team order.
    pub valid_targets: Vec<MemberId>,
    pub best_target: Option<MemberId>,
    pub reasoning: Option<String>,
}

/// True when any of the member's three type slots matches `wanted`.
fn any_type_matches(input: &EligibilityInput, wanted: Option<TypeId>) -> bool {
    let Some(wanted) = wanted else {
        return false;
    };
    input.main_type == wanted || input.sub_type == Some(wanted) || input.legacy_type == wanted
}

/// Evaluates the item's effect code against every member.
///
/// Elemental codes resolve their element through the chart by name, so the
/// rules keep working whatever ids the seed data assigned.
pub fn evaluate_magic_item(
    item: &MagicItem,
    members: &[EligibilityInput],
    chart: &TypeChart,
) -> MagicItemEvaluation {
    let type_id_of = |name: &str| chart.find_by_name(name).map(|t| t.id);

    let grass = type_id_of("grass");
    let fire = type_id_of("fire");
    let water = type_id_of("water");
    let leader = type_id_of("leader");

    let valid_targets: Vec<MemberId> = members
        .iter()
        .filter(|input| match item.effect_code {
            MagicEffectCode::EnhanceSpell => true,
            MagicEffectCode::SunHealing => any_type_matches(input, grass),
            MagicEffectCode::FlareBurst => any_type_matches(input, fire),
            MagicEffectCode::FlowSpell => any_type_matches(input, water),
            MagicEffectCode::EvolutionPower => {
                input.leader_potential && leader.is_some_and(|l| input.legacy_type == l)
            }
        })
        .map(|input| input.member)
        .collect();

    MagicItemEvaluation {
        chosen_item: item.id,
        valid_targets,
        best_target: None,
        reasoning: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localized::LocalizedText;
    use crate::model::types::TypeRecord;

    const FIRE: TypeId = TypeId(1);
    const GRASS: TypeId = TypeId(2);
    const WATER: TypeId = TypeId(3);
    const ROCK: TypeId = TypeId(4);
    const LEADER: TypeId = TypeId(9);

    fn chart() -> TypeChart {
        let record = |id: TypeId, name: &str| TypeRecord {
            id,
            name: name.to_owned(),
            localized: LocalizedText::new(),
            effective_against: Default::default(),
            weak_against: Default::default(),
        };
        TypeChart::new([
            record(FIRE, "Fire"),
            record(GRASS, "Grass"),
            record(WATER, "Water"),
            record(ROCK, "Rock"),
            record(LEADER, "Leader"),
        ])
    }

    fn item(effect_code: MagicEffectCode) -> MagicItem {
        MagicItem {
            id: MagicItemId(7),
            name: "Test Item".to_owned(),
            description: "-".to_owned(),
            effect_code,
            applies_to_type: None,
            localized: LocalizedText::new(),
        }
    }

    fn input(member: u32, main: TypeId, sub: Option<TypeId>, legacy: TypeId) -> EligibilityInput {
        EligibilityInput {
            member: MemberId(member),
            main_type: main,
            sub_type: sub,
            legacy_type: legacy,
            leader_potential: false,
        }
    }

    #[test]
    fn enhance_spell_accepts_everyone() {
        let members = [
            input(0, ROCK, None, ROCK),
            input(1, WATER, None, GRASS),
        ];
        let eval = evaluate_magic_item(&item(MagicEffectCode::EnhanceSpell), &members, &chart());
        assert_eq!(eval.valid_targets, vec![MemberId(0), MemberId(1)]);
        assert_eq!(eval.best_target, None);
    }

    #[test]
    fn elemental_item_matches_main_sub_or_legacy_type() {
        // One Fire main, one Fire sub, one Fire legacy, three unrelated.
        let members = [
            input(0, FIRE, None, ROCK),
            input(1, ROCK, Some(FIRE), ROCK),
            input(2, WATER, None, FIRE),
            input(3, GRASS, None, GRASS),
            input(4, WATER, Some(ROCK), WATER),
            input(5, ROCK, None, ROCK),
        ];
        let eval = evaluate_magic_item(&item(MagicEffectCode::FlareBurst), &members, &chart());
        assert_eq!(
            eval.valid_targets,
            vec![MemberId(0), MemberId(1), MemberId(2)]
        );
    }

    #[test]
    fn evolution_power_needs_potential_and_leader_legacy() {
        let mut qualified = input(0, FIRE, None, LEADER);
        qualified.leader_potential = true;
        let no_potential = input(1, FIRE, None, LEADER);
        let mut wrong_legacy = input(2, FIRE, None, FIRE);
        wrong_legacy.leader_potential = true;

        let members = [qualified, no_potential, wrong_legacy];
        let eval = evaluate_magic_item(&item(MagicEffectCode::EvolutionPower), &members, &chart());
        assert_eq!(eval.valid_targets, vec![MemberId(0)]);
    }

    #[test]
    fn targets_keep_team_order() {
        let members = [
            input(3, FIRE, None, ROCK),
            input(1, FIRE, None, ROCK),
            input(2, ROCK, None, ROCK),
        ];
        let eval = evaluate_magic_item(&item(MagicEffectCode::FlareBurst), &members, &chart());
        assert_eq!(eval.valid_targets, vec![MemberId(3), MemberId(1)]);
    }
}
