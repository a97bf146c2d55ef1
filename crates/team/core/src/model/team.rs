//! Team composition entities: members and the team sheet.

use crate::ids::{MagicItemId, MonsterId, MoveId, PersonalityId, TypeId};
use crate::model::talent::Talent;

/// A team always holds exactly this many members.
pub const TEAM_SIZE: usize = 6;

/// Every member selects exactly this many moves.
pub const MOVES_PER_MEMBER: usize = 4;

/// Maximum team name length, in characters.
pub const MAX_TEAM_NAME_CHARS: usize = 16;

/// One configured team member: a monster bound to a personality, a legacy
/// type override, four selected moves, and a talent allocation.
///
/// Members are owned by their team sheet; a member (and its talent) has no
/// existence outside of one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamMember {
    pub monster: MonsterId,
    pub personality: PersonalityId,
    /// Per-member override, independent of the monster's innate typing.
    pub legacy_type: TypeId,
    pub moves: [MoveId; MOVES_PER_MEMBER],
    pub talent: Talent,
}

/// A full team configuration as submitted for analysis or storage.
///
/// Member order is significant for display and report ordering only.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamSheet {
    pub name: String,
    pub members: Vec<TeamMember>,
    pub magic_item: MagicItemId,
}
