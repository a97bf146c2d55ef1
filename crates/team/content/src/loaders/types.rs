//! Type chart loader.
//!
//! The RON catalog declares effectiveness edges by type NAME so data files
//! stay readable; the loader resolves names to ids and fails on unknowns.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use team_core::ids::TypeId;
use team_core::localized::LocalizedText;
use team_core::model::{TypeChart, TypeRecord};

use crate::loaders::{LoadResult, read_file};

/// One type entry in the RON catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSpec {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub localized: LocalizedText,
    /// Names of types this type damages super-effectively.
    #[serde(default)]
    pub effective_against: Vec<String>,
    /// Names of types that resist this type.
    #[serde(default)]
    pub weak_against: Vec<String>,
}

/// Type chart structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeCatalog {
    pub types: Vec<TypeSpec>,
}

/// Loader for the type chart from RON files.
pub struct TypeChartLoader;

impl TypeChartLoader {
    /// Load the type chart from a RON file.
    pub fn load(path: &Path) -> LoadResult<TypeChart> {
        let content = read_file(path)?;
        Self::load_str(&content)
    }

    /// Load the type chart from RON text (used by tests and embedders).
    pub fn load_str(content: &str) -> LoadResult<TypeChart> {
        let catalog: TypeCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse type catalog RON: {}", e))?;

        // First pass: name -> id, rejecting duplicates.
        let mut ids_by_name: std::collections::BTreeMap<String, TypeId> = Default::default();
        for spec in &catalog.types {
            let key = spec.name.to_ascii_lowercase();
            if ids_by_name.insert(key, TypeId(spec.id)).is_some() {
                anyhow::bail!("Duplicate type name in catalog: {}", spec.name);
            }
        }

        let resolve = |name: &str| -> LoadResult<TypeId> {
            ids_by_name
                .get(&name.to_ascii_lowercase())
                .copied()
                .ok_or_else(|| anyhow::anyhow!("Unknown type name in type catalog: {name}"))
        };

        // Second pass: build records with resolved edge sets.
        let mut records = Vec::with_capacity(catalog.types.len());
        for spec in catalog.types {
            let mut effective_against = BTreeSet::new();
            for name in &spec.effective_against {
                effective_against.insert(resolve(name)?);
            }
            let mut weak_against = BTreeSet::new();
            for name in &spec.weak_against {
                weak_against.insert(resolve(name)?);
            }
            records.push(TypeRecord {
                id: TypeId(spec.id),
                name: spec.name,
                localized: spec.localized,
                effective_against,
                weak_against,
            });
        }

        Ok(TypeChart::new(records))
    }
}
