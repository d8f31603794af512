use crate::variant::Variant;

/// Ordered crafting stages of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
pub enum CraftingPhase {
    #[default]
    Phase1,
    Phase2,
}

/// Counts a phase needs before its crafting sequence may start.
///
/// Ore and orb/bowstring figures are combined over both variants; bark and
/// fiber are single resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseThresholds {
    pub shards: u32,
    pub frames: u32,
    pub bowstrings: u32,
    pub orbs: u32,
    pub ore: u32,
    pub bark: u32,
    pub fiber: u32,
}

/// The single canonical threshold table for a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThresholdTable {
    pub phase1: PhaseThresholds,
    pub phase2: PhaseThresholds,
}

impl ThresholdTable {
    pub const fn for_variant(variant: Variant) -> Self {
        let phase1_shards = match variant {
            Variant::Standard => 160,
            Variant::Hard => 150,
        };
        Self {
            phase1: PhaseThresholds {
                shards: phase1_shards,
                frames: 2,
                bowstrings: 0,
                orbs: 0,
                ore: 0,
                bark: 0,
                fiber: 0,
            },
            phase2: PhaseThresholds {
                shards: 380,
                frames: 0,
                bowstrings: 1,
                orbs: 1,
                ore: 3,
                bark: 3,
                fiber: 3,
            },
        }
    }

    pub const fn phase(&self, phase: CraftingPhase) -> &PhaseThresholds {
        match phase {
            CraftingPhase::Phase1 => &self.phase1,
            CraftingPhase::Phase2 => &self.phase2,
        }
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn phase_two_shards_exceed_phase_one_for_every_variant() {
        for variant in Variant::iter() {
            let table = ThresholdTable::for_variant(variant);
            assert!(table.phase2.shards > table.phase1.shards, "{variant}");
        }
    }

    #[test]
    fn hard_variant_needs_fewer_phase_one_shards() {
        assert_eq!(ThresholdTable::for_variant(Variant::Standard).phase1.shards, 160);
        assert_eq!(ThresholdTable::for_variant(Variant::Hard).phase1.shards, 150);
    }
}
