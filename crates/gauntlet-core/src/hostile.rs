//! Canonical hostile vocabulary.
//!
//! Every hostile is named `"<Prefix> <Kind>"` where the prefix is the variant's
//! (`Crystalline` / `Corrupted`). Names coming back from the environment are
//! parsed through [`Hostile::parse`] before any comparison, so short names and
//! prefixed names can never disagree.

use strum::IntoEnumIterator;

use crate::ledger::ArmorSlot;
use crate::variant::Variant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Hostile {
    Rat,
    Spider,
    Bat,
    Dragon,
    #[strum(to_string = "Dark Beast")]
    DarkBeast,
    Hunllef,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostileTier {
    Weak,
    DemiBoss,
    Boss,
}

impl Hostile {
    pub const WEAK: [Hostile; 3] = [Hostile::Rat, Hostile::Spider, Hostile::Bat];
    pub const DEMI_BOSSES: [Hostile; 2] = [Hostile::Dragon, Hostile::DarkBeast];

    pub const fn tier(self) -> HostileTier {
        match self {
            Hostile::Rat | Hostile::Spider | Hostile::Bat => HostileTier::Weak,
            Hostile::Dragon | Hostile::DarkBeast => HostileTier::DemiBoss,
            Hostile::Hunllef => HostileTier::Boss,
        }
    }

    /// Armor slot whose materials this demi-boss drops.
    pub const fn armor_slot(self) -> Option<ArmorSlot> {
        match self {
            Hostile::Dragon => Some(ArmorSlot::Body),
            Hostile::DarkBeast => Some(ArmorSlot::Helm),
            _ => None,
        }
    }

    /// Full in-world name for the given variant.
    pub fn name(self, variant: Variant) -> String {
        format!("{} {}", variant.hostile_prefix(), self)
    }

    /// Parses a full in-world name.
    pub fn parse(name: &str) -> Option<(Hostile, Variant)> {
        let (prefix, kind) = name.trim().split_once(' ')?;
        let variant = Variant::iter().find(|v| v.hostile_prefix().eq_ignore_ascii_case(prefix))?;
        let hostile = Hostile::iter().find(|h| h.to_string().eq_ignore_ascii_case(kind))?;
        Some((hostile, variant))
    }

    /// In-world names of every hostile in `kinds`, for one variant.
    pub fn names(kinds: &[Hostile], variant: Variant) -> Vec<String> {
        kinds.iter().map(|kind| kind.name(variant)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_names_carry_variant_prefix() {
        assert_eq!(Hostile::DarkBeast.name(Variant::Standard), "Crystalline Dark Beast");
        assert_eq!(Hostile::Hunllef.name(Variant::Hard), "Corrupted Hunllef");
        assert_eq!(
            Hostile::parse("Crystalline Rat"),
            Some((Hostile::Rat, Variant::Standard))
        );
    }

    #[test]
    fn parse_rejects_short_names() {
        assert_eq!(Hostile::parse("Dragon"), None);
        assert_eq!(Hostile::parse("Crystal Hunllef"), None);
        assert_eq!(
            Hostile::parse("corrupted dark beast"),
            Some((Hostile::DarkBeast, Variant::Hard))
        );
    }

    #[test]
    fn demi_bosses_map_to_armor_slots() {
        assert_eq!(Hostile::Dragon.armor_slot(), Some(ArmorSlot::Body));
        assert_eq!(Hostile::DarkBeast.armor_slot(), Some(ArmorSlot::Helm));
        assert_eq!(Hostile::Rat.armor_slot(), None);
    }
}
