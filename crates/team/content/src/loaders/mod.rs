//! Content loaders for reading reference data from RON files.

pub mod factory;
pub mod monsters;
pub mod moves;
pub mod reference;
pub mod types;

pub use factory::ContentFactory;
pub use monsters::MonsterLoader;
pub use moves::MoveLoader;
pub use reference::{MagicItemLoader, PersonalityLoader, TermLoader, TraitLoader};
pub use types::TypeChartLoader;

use std::path::Path;

use team_core::ids::TypeId;
use team_core::model::TypeChart;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Resolves a canonical type name against the chart.
pub(crate) fn resolve_type(chart: &TypeChart, name: &str) -> LoadResult<TypeId> {
    chart
        .find_by_name(name)
        .map(|t| t.id)
        .ok_or_else(|| anyhow::anyhow!("Unknown type name in catalog: {name}"))
}
