//! Team-composition validation.
//!
//! Runs before any reference data is loaded; a sheet that fails here is
//! rejected with an itemized error and no partial work.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::ids::MonsterId;
use crate::model::talent::TalentError;
use crate::model::team::{MAX_TEAM_NAME_CHARS, TEAM_SIZE, TeamSheet};

/// Why a team sheet was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TeamValidationError {
    #[error("team must have exactly {TEAM_SIZE} members, got {got}")]
    WrongMemberCount { got: usize },

    #[error("duplicate monsters not allowed in team: {}", format_ids(.ids))]
    DuplicateMonsters { ids: Vec<MonsterId> },

    #[error("duplicate moves not allowed at position {position}")]
    DuplicateMoves { position: usize },

    #[error("invalid talent at position {position}: {source}")]
    InvalidTalent {
        position: usize,
        source: TalentError,
    },

    #[error("team name cannot be empty or whitespace only")]
    EmptyName,

    #[error("team name cannot exceed {MAX_TEAM_NAME_CHARS} characters, got {got}")]
    NameTooLong { got: usize },
}

fn format_ids(ids: &[MonsterId]) -> String {
    let rendered: Vec<String> = ids.iter().map(ToString::to_string).collect();
    rendered.join(", ")
}

/// Validates a team sheet's structure.
///
/// Checks, in order: member count, duplicate monster selections, per-member
/// move duplicates and talent constraints (positions are 1-based in errors),
/// and the team name (non-empty after trimming, bounded length).
pub fn validate_team(sheet: &TeamSheet) -> Result<(), TeamValidationError> {
    if sheet.members.len() != TEAM_SIZE {
        return Err(TeamValidationError::WrongMemberCount {
            got: sheet.members.len(),
        });
    }

    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    for member in &sheet.members {
        if !seen.insert(member.monster) {
            duplicates.insert(member.monster);
        }
    }
    if !duplicates.is_empty() {
        return Err(TeamValidationError::DuplicateMonsters {
            ids: duplicates.into_iter().collect(),
        });
    }

    for (index, member) in sheet.members.iter().enumerate() {
        let position = index + 1;

        let unique_moves: BTreeSet<_> = member.moves.iter().collect();
        if unique_moves.len() != member.moves.len() {
            return Err(TeamValidationError::DuplicateMoves { position });
        }

        member
            .talent
            .validate()
            .map_err(|source| TeamValidationError::InvalidTalent { position, source })?;
    }

    let name = sheet.name.trim();
    if name.is_empty() {
        return Err(TeamValidationError::EmptyName);
    }
    if name.chars().count() > MAX_TEAM_NAME_CHARS {
        return Err(TeamValidationError::NameTooLong {
            got: name.chars().count(),
        });
    }

    Ok(())
}
