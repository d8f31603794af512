//! The fixed resource vocabulary.

use std::str::FromStr;

use strum::IntoEnumIterator;

/// Every counted resource of a run.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
pub enum Resource {
    CrystalOre,
    CorruptedOre,
    PhrenBark,
    LinumTirinium,
    CrystallineShards,
    CorruptedShards,
    GrymLeaf,
    WeaponFrame,
    CrystallineOrb,
    CorruptedOrb,
    CrystallineBowstring,
    CorruptedBowstring,
    CrystallineDust,
    CorruptedDust,
    Vial,
    Potion,
    RawPaddlefish,
}

impl Resource {
    /// Gatherable node types, in the order they are harvested.
    pub const GATHERING_ORDER: [Resource; 4] = [
        Resource::CrystalOre,
        Resource::CorruptedOre,
        Resource::PhrenBark,
        Resource::LinumTirinium,
    ];

    /// Loot worth dropping filler for when the inventory is full.
    pub const HIGH_PRIORITY_LOOT: [Resource; 5] = [
        Resource::WeaponFrame,
        Resource::CrystallineOrb,
        Resource::CorruptedOrb,
        Resource::CrystallineBowstring,
        Resource::CorruptedBowstring,
    ];

    /// In-world item name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Resource::CrystalOre => "Crystal Ore",
            Resource::CorruptedOre => "Corrupted Ore",
            Resource::PhrenBark => "Phren Bark",
            Resource::LinumTirinium => "Linum Tirinium",
            Resource::CrystallineShards => "Crystal Shards",
            Resource::CorruptedShards => "Corrupted Shards",
            Resource::GrymLeaf => "Grym Leaf",
            Resource::WeaponFrame => "Weapon Frame",
            Resource::CrystallineOrb => "Crystalline Orb",
            Resource::CorruptedOrb => "Corrupted Orb",
            Resource::CrystallineBowstring => "Crystalline Bowstring",
            Resource::CorruptedBowstring => "Corrupted Bowstring",
            Resource::CrystallineDust => "Crystal Dust",
            Resource::CorruptedDust => "Corrupted Dust",
            Resource::Vial => "Vial",
            Resource::Potion => "Egniol Potion",
            Resource::RawPaddlefish => "Raw Paddlefish",
        }
    }

    /// Per-run collection target; a resource is needed while below it.
    pub const fn target(self) -> u32 {
        match self {
            Resource::CrystalOre
            | Resource::CorruptedOre
            | Resource::PhrenBark
            | Resource::LinumTirinium
            | Resource::GrymLeaf
            | Resource::Vial
            | Resource::Potion => 3,
            Resource::CrystallineShards | Resource::CorruptedShards => 380,
            Resource::WeaponFrame => 2,
            Resource::CrystallineOrb
            | Resource::CorruptedOrb
            | Resource::CrystallineBowstring
            | Resource::CorruptedBowstring => 1,
            Resource::CrystallineDust | Resource::CorruptedDust => 30,
            Resource::RawPaddlefish => 23,
        }
    }

    pub fn is_high_priority_loot(self) -> bool {
        Self::HIGH_PRIORITY_LOOT.contains(&self)
    }

    /// Resolves an in-world item name (as reported by the environment).
    pub fn from_item_name(name: &str) -> Option<Resource> {
        let name = name.trim();
        Resource::iter().find(|resource| resource.display_name().eq_ignore_ascii_case(name))
    }

    /// Identifier form, e.g. `"WeaponFrame"`.
    pub fn ident(self) -> &'static str {
        self.into()
    }
}

/// Accepts both the identifier form (`"WeaponFrame"`) and the in-world name
/// (`"Weapon Frame"`), case-insensitively.
impl FromStr for Resource {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let trimmed = name.trim();
        Resource::iter()
            .find(|resource| resource.ident().eq_ignore_ascii_case(trimmed))
            .or_else(|| Resource::from_item_name(trimmed))
            .ok_or(())
    }
}
