//! Challenge variants and the fixed coordinates each one uses.

use std::fmt;

use crate::geometry::{Area, Position};
use crate::ledger::{ArmorVariant, Resource};

/// Which version of the challenge the run enters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::EnumString, strum::EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Variant {
    /// The crystalline challenge.
    #[default]
    #[strum(serialize = "standard", serialize = "crystalline")]
    Standard,
    /// The corrupted challenge.
    #[strum(serialize = "hard", serialize = "corrupted")]
    Hard,
}

impl Variant {
    /// Name prefix used by hostiles of this variant.
    pub const fn hostile_prefix(self) -> &'static str {
        match self {
            Variant::Standard => "Crystalline",
            Variant::Hard => "Corrupted",
        }
    }

    /// Interaction label on the entrance platform.
    pub const fn entry_action(self) -> &'static str {
        match self {
            Variant::Standard => "Enter",
            Variant::Hard => "Enter-corrupted",
        }
    }

    /// Shard kind dropped inside this variant.
    pub const fn shards(self) -> Resource {
        match self {
            Variant::Standard => Resource::CrystallineShards,
            Variant::Hard => Resource::CorruptedShards,
        }
    }

    /// Ore mined inside this variant.
    pub const fn ore(self) -> Resource {
        match self {
            Variant::Standard => Resource::CrystalOre,
            Variant::Hard => Resource::CorruptedOre,
        }
    }

    pub const fn armor(self) -> ArmorVariant {
        match self {
            Variant::Standard => ArmorVariant::Crystal,
            Variant::Hard => ArmorVariant::Corrupted,
        }
    }

    /// The room the run starts in, which also hosts the crafting station.
    pub const fn crafting_area(self) -> Area {
        match self {
            Variant::Standard => Area::new(
                Position::new(1906, 5677, 1),
                Position::new(1917, 5666, 1),
            ),
            Variant::Hard => Area::new(
                Position::new(1970, 5677, 1),
                Position::new(1981, 5666, 1),
            ),
        }
    }

    /// The encounter room whose tiles are scanned for hazards.
    pub const fn boss_room(self) -> Area {
        match self {
            Variant::Standard => Area::new(
                Position::new(1906, 5693, 1),
                Position::new(1917, 5682, 1),
            ),
            Variant::Hard => Area::new(
                Position::new(1970, 5693, 1),
                Position::new(1981, 5682, 1),
            ),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Variant::Standard => "standard",
            Variant::Hard => "hard",
        };
        write!(f, "{}", label)
    }
}
