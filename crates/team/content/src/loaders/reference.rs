//! Loaders for the smaller reference catalogs: traits, personalities,
//! magic items, and glossary terms.

use std::path::Path;

use serde::{Deserialize, Serialize};
use team_core::ids::MagicItemId;
use team_core::localized::LocalizedText;
use team_core::model::{GameTerm, MagicEffectCode, MagicItem, Personality, Trait, TypeChart};

use crate::loaders::{LoadResult, read_file, resolve_type};

/// Trait catalog structure for RON files.
///
/// Traits carry no cross-references, so core records deserialize directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitCatalog {
    pub traits: Vec<Trait>,
}

/// Loader for the trait catalog from RON files.
pub struct TraitLoader;

impl TraitLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Trait>> {
        let content = read_file(path)?;
        Self::load_str(&content)
    }

    pub fn load_str(content: &str) -> LoadResult<Vec<Trait>> {
        let catalog: TraitCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse trait catalog RON: {}", e))?;
        Ok(catalog.traits)
    }
}

/// Personality catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityCatalog {
    pub personalities: Vec<Personality>,
}

/// Loader for the personality catalog from RON files.
pub struct PersonalityLoader;

impl PersonalityLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Personality>> {
        let content = read_file(path)?;
        Self::load_str(&content)
    }

    pub fn load_str(content: &str) -> LoadResult<Vec<Personality>> {
        let catalog: PersonalityCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse personality catalog RON: {}", e))?;
        Ok(catalog.personalities)
    }
}

/// One magic item entry; the applies-to type is referenced by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagicItemSpec {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub effect_code: MagicEffectCode,
    #[serde(default)]
    pub applies_to_type: Option<String>,
    #[serde(default)]
    pub localized: LocalizedText,
}

/// Magic item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagicItemCatalog {
    pub magic_items: Vec<MagicItemSpec>,
}

/// Loader for the magic item catalog from RON files.
pub struct MagicItemLoader;

impl MagicItemLoader {
    pub fn load(path: &Path, chart: &TypeChart) -> LoadResult<Vec<MagicItem>> {
        let content = read_file(path)?;
        Self::load_str(&content, chart)
    }

    pub fn load_str(content: &str, chart: &TypeChart) -> LoadResult<Vec<MagicItem>> {
        let catalog: MagicItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse magic item catalog RON: {}", e))?;

        catalog
            .magic_items
            .into_iter()
            .map(|spec| {
                let applies_to_type = spec
                    .applies_to_type
                    .as_deref()
                    .map(|name| resolve_type(chart, name))
                    .transpose()?;
                Ok(MagicItem {
                    id: MagicItemId(spec.id),
                    name: spec.name,
                    description: spec.description,
                    effect_code: spec.effect_code,
                    applies_to_type,
                    localized: spec.localized,
                })
            })
            .collect()
    }
}

/// Glossary catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermCatalog {
    pub terms: Vec<GameTerm>,
}

/// Loader for the glossary from RON files.
pub struct TermLoader;

impl TermLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<GameTerm>> {
        let content = read_file(path)?;
        Self::load_str(&content)
    }

    pub fn load_str(content: &str) -> LoadResult<Vec<GameTerm>> {
        let catalog: TermCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse glossary RON: {}", e))?;
        Ok(catalog.terms)
    }
}
