//! Monster and species catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use team_core::ids::{MonsterId, MoveId, SpeciesId, TraitId};
use team_core::localized::LocalizedText;
use team_core::model::{AttackStyle, BaseStats, LegacyMove, Monster, Species, TypeChart};

use crate::loaders::{LoadResult, read_file, resolve_type};

/// One species entry in the RON catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesSpec {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub localized: LocalizedText,
}

/// One legacy-move unlock, with the gating type referenced by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyMoveSpec {
    pub type_name: String,
    pub move_id: u32,
}

/// One monster entry in the RON catalog; all types referenced by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterSpec {
    pub id: u32,
    pub species: u32,
    pub name: String,
    #[serde(default = "default_form")]
    pub form: String,
    #[serde(default)]
    pub evolves_from: Option<u32>,
    pub main_type: String,
    #[serde(default)]
    pub sub_type: Option<String>,
    pub default_legacy_type: String,
    pub trait_id: u32,
    #[serde(default)]
    pub leader_potential: bool,
    #[serde(default)]
    pub is_leader_form: bool,
    pub base: BaseStats,
    #[serde(default)]
    pub preferred_attack_style: AttackStyle,
    #[serde(default)]
    pub move_pool: Vec<u32>,
    #[serde(default)]
    pub legacy_moves: Vec<LegacyMoveSpec>,
    #[serde(default)]
    pub localized: LocalizedText,
}

fn default_form() -> String {
    "default".to_owned()
}

/// Monster catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterCatalog {
    #[serde(default)]
    pub species: Vec<SpeciesSpec>,
    pub monsters: Vec<MonsterSpec>,
}

/// Loader for the monster catalog from RON files.
pub struct MonsterLoader;

impl MonsterLoader {
    /// Load species and monsters from a RON file.
    pub fn load(path: &Path, chart: &TypeChart) -> LoadResult<(Vec<Species>, Vec<Monster>)> {
        let content = read_file(path)?;
        Self::load_str(&content, chart)
    }

    /// Load species and monsters from RON text.
    pub fn load_str(content: &str, chart: &TypeChart) -> LoadResult<(Vec<Species>, Vec<Monster>)> {
        let catalog: MonsterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse monster catalog RON: {}", e))?;

        let species: Vec<Species> = catalog
            .species
            .into_iter()
            .map(|spec| Species {
                id: SpeciesId(spec.id),
                name: spec.name,
                localized: spec.localized,
            })
            .collect();

        let monsters: Vec<Monster> = catalog
            .monsters
            .into_iter()
            .map(|spec| {
                let sub_type = spec
                    .sub_type
                    .as_deref()
                    .map(|name| resolve_type(chart, name))
                    .transpose()?;
                let legacy_moves = spec
                    .legacy_moves
                    .iter()
                    .map(|lm| {
                        Ok(LegacyMove {
                            type_id: resolve_type(chart, &lm.type_name)?,
                            move_id: MoveId(lm.move_id),
                        })
                    })
                    .collect::<LoadResult<Vec<_>>>()?;

                Ok(Monster {
                    id: MonsterId(spec.id),
                    species: SpeciesId(spec.species),
                    name: spec.name,
                    form: spec.form,
                    evolves_from: spec.evolves_from.map(MonsterId),
                    main_type: resolve_type(chart, &spec.main_type)?,
                    sub_type,
                    default_legacy_type: resolve_type(chart, &spec.default_legacy_type)?,
                    trait_id: TraitId(spec.trait_id),
                    leader_potential: spec.leader_potential,
                    is_leader_form: spec.is_leader_form,
                    base: spec.base,
                    preferred_attack_style: spec.preferred_attack_style,
                    move_pool: spec.move_pool.into_iter().map(MoveId).collect(),
                    legacy_moves,
                    localized: spec.localized,
                })
            })
            .collect::<LoadResult<Vec<_>>>()?;

        Ok((species, monsters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::types::TypeChartLoader;
    use team_core::ids::TypeId;

    fn chart() -> TypeChart {
        TypeChartLoader::load_str(
            r#"TypeCatalog(types: [
                TypeSpec(id: 1, name: "Fire"),
                TypeSpec(id: 4, name: "Rock"),
            ])"#,
        )
        .unwrap()
    }

    #[test]
    fn loads_monsters_with_resolved_types() {
        let (species, monsters) = MonsterLoader::load_str(
            r#"MonsterCatalog(
                species: [SpeciesSpec(id: 1, name: "Foxkin")],
                monsters: [MonsterSpec(
                    id: 1,
                    species: 1,
                    name: "Ember Fox",
                    main_type: "Fire",
                    sub_type: Some("Rock"),
                    default_legacy_type: "fire",
                    trait_id: 7,
                    leader_potential: true,
                    base: (hp: 100, phy_atk: 90, mag_atk: 110, phy_def: 80, mag_def: 85, spd: 95),
                    move_pool: [11, 12],
                    legacy_moves: [LegacyMoveSpec(type_name: "Rock", move_id: 12)],
                )],
            )"#,
            &chart(),
        )
        .unwrap();

        assert_eq!(species.len(), 1);
        let monster = &monsters[0];
        assert_eq!(monster.main_type, TypeId(1));
        assert_eq!(monster.sub_type, Some(TypeId(4)));
        assert_eq!(monster.default_legacy_type, TypeId(1));
        assert_eq!(monster.form, "default");
        assert_eq!(monster.preferred_attack_style, AttackStyle::Both);
        assert_eq!(monster.legacy_moves[0].type_id, TypeId(4));
    }
}
