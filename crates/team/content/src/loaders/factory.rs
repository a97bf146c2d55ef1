//! Directory-level factory assembling a full [`ReferenceBundle`].

use std::path::Path;

use crate::bundle::ReferenceBundle;
use crate::loaders::{
    LoadResult, MagicItemLoader, MonsterLoader, MoveLoader, PersonalityLoader, TermLoader,
    TraitLoader, TypeChartLoader,
};

/// Loads every reference catalog from a content directory.
///
/// Expected layout:
/// ```text
/// content/
///   types.ron
///   moves.ron
///   monsters.ron
///   traits.ron
///   personalities.ron
///   magic_items.ron
///   terms.ron
/// ```
///
/// The type chart loads first; every other catalog resolves its type names
/// against it.
pub struct ContentFactory;

impl ContentFactory {
    pub fn load_dir(dir: &Path) -> LoadResult<ReferenceBundle> {
        let chart = TypeChartLoader::load(&dir.join("types.ron"))?;
        let moves = MoveLoader::load(&dir.join("moves.ron"), &chart)?;
        let (species, monsters) = MonsterLoader::load(&dir.join("monsters.ron"), &chart)?;
        let traits = TraitLoader::load(&dir.join("traits.ron"))?;
        let personalities = PersonalityLoader::load(&dir.join("personalities.ron"))?;
        let magic_items = MagicItemLoader::load(&dir.join("magic_items.ron"), &chart)?;
        let terms = TermLoader::load(&dir.join("terms.ron"))?;

        Ok(ReferenceBundle {
            chart,
            species,
            monsters,
            moves,
            traits,
            personalities,
            magic_items,
            terms,
        })
    }
}
