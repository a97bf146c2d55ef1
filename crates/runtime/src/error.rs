//! Unified error types surfaced by the analysis service.
//!
//! Validation and missing-reference failures abort a request before any
//! partial report exists; repository failures surface as a generic store
//! error. Advice-call failures never appear here — they are absorbed at the
//! call boundary and show up only as fallback content.

use std::fmt;

use thiserror::Error;

use crate::repository::RepositoryError;
use team_core::ids::{MagicItemId, MonsterId, MoveId, PersonalityId, TeamId, TraitId, TypeId};
use team_core::validate::TeamValidationError;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid team: {0}")]
    Validation(#[from] TeamValidationError),

    #[error("missing reference data: {0}")]
    MissingReference(MissingReferences),

    #[error("team {0} not found")]
    TeamNotFound(TeamId),

    #[error("{message}")]
    RateLimited { message: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Reference ids a request named that the store does not know.
///
/// The rendered message enumerates every missing identifier so the caller
/// can fix its request in one round trip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MissingReferences {
    pub monsters: Vec<MonsterId>,
    pub moves: Vec<MoveId>,
    pub traits: Vec<TraitId>,
    pub personalities: Vec<PersonalityId>,
    pub types: Vec<TypeId>,
    pub magic_item: Option<MagicItemId>,
}

impl MissingReferences {
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
            && self.moves.is_empty()
            && self.traits.is_empty()
            && self.personalities.is_empty()
            && self.types.is_empty()
            && self.magic_item.is_none()
    }
}

fn write_group(
    f: &mut fmt::Formatter<'_>,
    first: &mut bool,
    label: &str,
    ids: &[impl fmt::Display],
) -> fmt::Result {
    if ids.is_empty() {
        return Ok(());
    }
    if !*first {
        write!(f, "; ")?;
    }
    *first = false;
    let rendered: Vec<String> = ids.iter().map(ToString::to_string).collect();
    write!(f, "{label} [{}]", rendered.join(", "))
}

impl fmt::Display for MissingReferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        write_group(f, &mut first, "monsters", &self.monsters)?;
        write_group(f, &mut first, "moves", &self.moves)?;
        write_group(f, &mut first, "traits", &self.traits)?;
        write_group(f, &mut first, "personalities", &self.personalities)?;
        write_group(f, &mut first, "types", &self.types)?;
        if let Some(item) = self.magic_item {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "magic item [{item}]")?;
        }
        if first {
            write!(f, "none")?;
        }
        Ok(())
    }
}
