//! Numeric identifier newtypes for reference and team entities.
//!
//! Every entity is addressed by a dedicated id type so that a move id can
//! never be passed where a monster id is expected. Ids are plain `u32`
//! wrappers; the reference store assigns them at seed time.

/// Declares a transparent `u32` id newtype with ordering and display.
macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(pub u32);

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }
    };
}

id_type!(
    /// A monster species+form entry in the reference store.
    MonsterId
);
id_type!(
    /// A species grouping several monster forms.
    SpeciesId
);
id_type!(
    /// A move in the reference store.
    MoveId
);
id_type!(
    /// An elemental (or pseudo) type in the type chart.
    TypeId
);
id_type!(
    /// A passive trait attached to a monster.
    TraitId
);
id_type!(
    /// A personality (per-stat percentage modifiers).
    PersonalityId
);
id_type!(
    /// A team-wide magic item.
    MagicItemId
);
id_type!(
    /// A glossary term shipped to the advice generator.
    TermId
);
id_type!(
    /// A stored team.
    TeamId
);
id_type!(
    /// A member slot within one team; slots are numbered in display order.
    MemberId
);
