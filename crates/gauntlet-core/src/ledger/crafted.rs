//! Crafted-item flags.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use super::LedgerError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WeaponKind {
    Staff,
    Bow,
}

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
    strum::EnumString,
    strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tier {
    Basic,
    Attuned,
    Perfected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ArmorSlot {
    Helm,
    Body,
    Legs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ArmorVariant {
    Crystal,
    Corrupted,
}

impl ArmorVariant {
    /// Material prefix of item names.
    pub const fn material(self) -> &'static str {
        match self {
            ArmorVariant::Crystal => "Crystal",
            ArmorVariant::Corrupted => "Corrupted",
        }
    }
}

/// One craftable item the ledger keeps a flag for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CraftKey {
    Weapon { kind: WeaponKind, tier: Tier },
    Armor { slot: ArmorSlot, variant: ArmorVariant },
}

impl CraftKey {
    pub const fn weapon(kind: WeaponKind, tier: Tier) -> Self {
        CraftKey::Weapon { kind, tier }
    }

    pub const fn armor(slot: ArmorSlot, variant: ArmorVariant) -> Self {
        CraftKey::Armor { slot, variant }
    }

    /// Parses the loose string form used by callers that only carry names:
    /// `("bow", "attuned")` or `("helm", "corrupted")`.
    pub fn parse(kind: &str, qualifier: &str) -> Result<Self, LedgerError> {
        let invalid = |detail: &str| LedgerError::InvalidCraftKey {
            kind: kind.to_string(),
            detail: detail.to_string(),
        };

        if let Ok(weapon) = WeaponKind::from_str(kind) {
            let tier = Tier::from_str(qualifier).map_err(|_| invalid(qualifier))?;
            return Ok(CraftKey::weapon(weapon, tier));
        }
        if let Ok(slot) = ArmorSlot::from_str(kind) {
            let variant = ArmorVariant::from_str(qualifier).map_err(|_| invalid(qualifier))?;
            return Ok(CraftKey::armor(slot, variant));
        }
        Err(invalid(kind))
    }

    /// In-world item name. Weapons take their material from `material`;
    /// armor carries its own.
    pub fn item_name(self, material: ArmorVariant) -> String {
        match self {
            CraftKey::Weapon { kind, tier } => {
                format!("{} {} ({})", material.material(), kind, tier)
            }
            CraftKey::Armor { slot, variant } => format!("{} {}", variant.material(), slot),
        }
    }

    pub(crate) fn flag(self) -> CraftedItems {
        use ArmorSlot::*;
        use ArmorVariant::*;
        use Tier::*;
        use WeaponKind::*;

        match self {
            CraftKey::Weapon { kind: Staff, tier: Basic } => CraftedItems::BASIC_STAFF,
            CraftKey::Weapon { kind: Staff, tier: Attuned } => CraftedItems::ATTUNED_STAFF,
            CraftKey::Weapon { kind: Staff, tier: Perfected } => CraftedItems::PERFECTED_STAFF,
            CraftKey::Weapon { kind: Bow, tier: Basic } => CraftedItems::BASIC_BOW,
            CraftKey::Weapon { kind: Bow, tier: Attuned } => CraftedItems::ATTUNED_BOW,
            CraftKey::Weapon { kind: Bow, tier: Perfected } => CraftedItems::PERFECTED_BOW,
            CraftKey::Armor { slot: Helm, variant: Crystal } => CraftedItems::CRYSTAL_HELM,
            CraftKey::Armor { slot: Helm, variant: Corrupted } => CraftedItems::CORRUPTED_HELM,
            CraftKey::Armor { slot: Body, variant: Crystal } => CraftedItems::CRYSTAL_BODY,
            CraftKey::Armor { slot: Body, variant: Corrupted } => CraftedItems::CORRUPTED_BODY,
            CraftKey::Armor { slot: Legs, variant: Crystal } => CraftedItems::CRYSTAL_LEGS,
            CraftKey::Armor { slot: Legs, variant: Corrupted } => CraftedItems::CORRUPTED_LEGS,
        }
    }
}

impl fmt::Display for CraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CraftKey::Weapon { kind, tier } => write!(f, "{} {}", tier, kind),
            CraftKey::Armor { slot, variant } => write!(f, "{} {}", variant, slot),
        }
    }
}

bitflags! {
    /// One bit per craftable item tracked during a run.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct CraftedItems: u16 {
        const BASIC_STAFF     = 1 << 0;
        const ATTUNED_STAFF   = 1 << 1;
        const PERFECTED_STAFF = 1 << 2;
        const BASIC_BOW       = 1 << 3;
        const ATTUNED_BOW     = 1 << 4;
        const PERFECTED_BOW   = 1 << 5;
        const CRYSTAL_HELM    = 1 << 6;
        const CORRUPTED_HELM  = 1 << 7;
        const CRYSTAL_BODY    = 1 << 8;
        const CORRUPTED_BODY  = 1 << 9;
        const CRYSTAL_LEGS    = 1 << 10;
        const CORRUPTED_LEGS  = 1 << 11;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_weapon_and_armor_keys() {
        assert_eq!(
            CraftKey::parse("Bow", "ATTUNED").ok(),
            Some(CraftKey::weapon(WeaponKind::Bow, Tier::Attuned))
        );
        assert_eq!(
            CraftKey::parse("legs", "corrupted").ok(),
            Some(CraftKey::armor(ArmorSlot::Legs, ArmorVariant::Corrupted))
        );
    }

    #[test]
    fn rejects_mismatched_qualifiers() {
        assert!(matches!(
            CraftKey::parse("bow", "crystal"),
            Err(LedgerError::InvalidCraftKey { .. })
        ));
        assert!(matches!(
            CraftKey::parse("shield", "basic"),
            Err(LedgerError::InvalidCraftKey { .. })
        ));
    }

    #[test]
    fn item_names_follow_material() {
        let staff = CraftKey::weapon(WeaponKind::Staff, Tier::Attuned);
        assert_eq!(staff.item_name(ArmorVariant::Corrupted), "Corrupted staff (attuned)");
        let helm = CraftKey::armor(ArmorSlot::Helm, ArmorVariant::Crystal);
        assert_eq!(helm.item_name(ArmorVariant::Corrupted), "Crystal helm");
    }

    #[test]
    fn every_key_has_its_own_bit() {
        let perfected_staff = CraftKey::weapon(WeaponKind::Staff, Tier::Perfected).flag();
        let crystal_body = CraftKey::armor(ArmorSlot::Body, ArmorVariant::Crystal).flag();
        assert_eq!(perfected_staff.bits().count_ones(), 1);
        assert!(!perfected_staff.intersects(crystal_body));
    }
}
