//! Talent-point allocations and their input constraints.

use thiserror::Error;

/// Boost values a talent slot may take.
pub const ALLOWED_BOOSTS: [u32; 5] = [0, 7, 8, 9, 10];

/// Maximum number of stats that may carry a non-zero boost.
pub const MAX_BOOSTED_STATS: usize = 3;

/// Why a talent allocation was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TalentError {
    #[error("boost value {value} is not one of {ALLOWED_BOOSTS:?}")]
    BoostNotAllowed { value: u32 },

    #[error("at most {MAX_BOOSTED_STATS} stats can be boosted, got {count}")]
    TooManyBoosted { count: usize },

    #[error("at least one stat must be boosted")]
    NoneBoosted,
}

/// A talent-point allocation for one team member.
///
/// Owned exclusively by its member: it is created and deleted with it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Talent {
    pub hp_boost: u32,
    pub phy_atk_boost: u32,
    pub mag_atk_boost: u32,
    pub phy_def_boost: u32,
    pub mag_def_boost: u32,
    pub spd_boost: u32,
}

impl Talent {
    /// All six boost values, in canonical stat order.
    pub const fn boosts(&self) -> [u32; 6] {
        [
            self.hp_boost,
            self.phy_atk_boost,
            self.mag_atk_boost,
            self.phy_def_boost,
            self.mag_def_boost,
            self.spd_boost,
        ]
    }

    /// Number of stats carrying a non-zero boost.
    pub fn boosted_count(&self) -> usize {
        self.boosts().iter().filter(|&&b| b != 0).count()
    }

    /// Validates the allocation against the input constraints: every value
    /// from the allowed set, between one and three stats boosted.
    pub fn validate(&self) -> Result<(), TalentError> {
        for value in self.boosts() {
            if !ALLOWED_BOOSTS.contains(&value) {
                return Err(TalentError::BoostNotAllowed { value });
            }
        }

        let count = self.boosted_count();
        if count > MAX_BOOSTED_STATS {
            return Err(TalentError::TooManyBoosted { count });
        }
        if count == 0 {
            return Err(TalentError::NoneBoosted);
        }

        Ok(())
    }
}
