//! Move catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use team_core::ids::MoveId;
use team_core::localized::LocalizedText;
use team_core::model::{Move, MoveCategory, TypeChart};

use crate::loaders::{LoadResult, read_file, resolve_type};

/// One move entry in the RON catalog; the type is referenced by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveSpec {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub move_type: Option<String>,
    pub category: MoveCategory,
    pub energy_cost: u32,
    #[serde(default)]
    pub power: Option<u32>,
    pub description: String,
    #[serde(default)]
    pub has_counter: bool,
    #[serde(default)]
    pub is_move_stone: bool,
    #[serde(default)]
    pub localized: LocalizedText,
}

/// Move catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCatalog {
    pub moves: Vec<MoveSpec>,
}

/// Loader for the move catalog from RON files.
pub struct MoveLoader;

impl MoveLoader {
    /// Load the move catalog from a RON file, resolving type names against
    /// an already-loaded chart.
    pub fn load(path: &Path, chart: &TypeChart) -> LoadResult<Vec<Move>> {
        let content = read_file(path)?;
        Self::load_str(&content, chart)
    }

    /// Load the move catalog from RON text.
    pub fn load_str(content: &str, chart: &TypeChart) -> LoadResult<Vec<Move>> {
        let catalog: MoveCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse move catalog RON: {}", e))?;

        catalog
            .moves
            .into_iter()
            .map(|spec| {
                let move_type = spec
                    .move_type
                    .as_deref()
                    .map(|name| resolve_type(chart, name))
                    .transpose()?;
                Ok(Move {
                    id: MoveId(spec.id),
                    name: spec.name,
                    move_type,
                    category: spec.category,
                    energy_cost: spec.energy_cost,
                    power: spec.power,
                    description: spec.description,
                    has_counter: spec.has_counter,
                    is_move_stone: spec.is_move_stone,
                    localized: spec.localized,
                })
            })
            .collect()
    }
}
