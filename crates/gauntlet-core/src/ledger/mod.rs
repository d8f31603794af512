//! Per-run progress ledger.
//!
//! Counts are run tallies: they only grow through gathering and looting and are
//! never consumed by crafting. Crafting progress lives in the crafted flags and
//! the phase.

mod crafted;
mod resource;
mod thresholds;

use std::collections::HashSet;

use strum::EnumCount;

pub use crate::error::LedgerError;
pub use crafted::{ArmorSlot, ArmorVariant, CraftKey, CraftedItems, Tier, WeaponKind};
pub use resource::Resource;
pub use thresholds::{CraftingPhase, PhaseThresholds, ThresholdTable};

use crate::hostile::{Hostile, HostileTier};
use crate::variant::Variant;

/// Name accepted by [`ProgressLedger::increment_resource`] for the run's own
/// shard kind.
pub const COMBINED_SHARDS: &str = "CombinedShards";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressLedger {
    variant: Variant,
    thresholds: ThresholdTable,
    counts: [u32; Resource::COUNT],
    crafted: CraftedItems,
    phase: CraftingPhase,
    kills: HashSet<Hostile>,
    weak_kills: u32,
    boss_defeated: bool,
}

impl ProgressLedger {
    pub fn new(variant: Variant) -> Self {
        Self::with_thresholds(variant, ThresholdTable::for_variant(variant))
    }

    pub fn with_thresholds(variant: Variant, thresholds: ThresholdTable) -> Self {
        Self {
            variant,
            thresholds,
            counts: [0; Resource::COUNT],
            crafted: CraftedItems::empty(),
            phase: CraftingPhase::Phase1,
            kills: HashSet::new(),
            weak_kills: 0,
            boss_defeated: false,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    /// Resolves a resource name, including the `CombinedShards` alias.
    pub fn resolve(&self, name: &str) -> Result<Resource, LedgerError> {
        if name.trim().eq_ignore_ascii_case(COMBINED_SHARDS) {
            return Ok(self.variant.shards());
        }
        name.parse::<Resource>()
            .map_err(|()| LedgerError::UnknownResourceKind(name.to_string()))
    }

    /// Adds `delta` to a named resource and returns the new count.
    ///
    /// Unknown names leave the ledger untouched.
    pub fn increment_resource(&mut self, name: &str, delta: i64) -> Result<u32, LedgerError> {
        match self.resolve(name) {
            Ok(resource) => Ok(self.increment(resource, delta)),
            Err(error) => {
                tracing::warn!("ignoring ledger increment: {}", error);
                Err(error)
            }
        }
    }

    /// Adds `delta` to `resource`, clamping at zero.
    pub fn increment(&mut self, resource: Resource, delta: i64) -> u32 {
        let slot = &mut self.counts[resource as usize];
        let next = (i64::from(*slot) + delta).clamp(0, i64::from(u32::MAX));
        *slot = next as u32;
        tracing::debug!("{} {:+} -> {}", resource.display_name(), delta, *slot);
        *slot
    }

    pub fn count(&self, resource: Resource) -> u32 {
        self.counts[resource as usize]
    }

    fn pair(&self, a: Resource, b: Resource) -> u32 {
        self.count(a).saturating_add(self.count(b))
    }

    pub fn combined_shards(&self) -> u32 {
        self.pair(Resource::CrystallineShards, Resource::CorruptedShards)
    }

    pub fn combined_orbs(&self) -> u32 {
        self.pair(Resource::CrystallineOrb, Resource::CorruptedOrb)
    }

    pub fn combined_bowstrings(&self) -> u32 {
        self.pair(Resource::CrystallineBowstring, Resource::CorruptedBowstring)
    }

    pub fn combined_ore(&self) -> u32 {
        self.pair(Resource::CrystalOre, Resource::CorruptedOre)
    }

    /// True while `resource` is below its per-run target.
    pub fn needs(&self, resource: Resource) -> bool {
        self.count(resource) < resource.target()
    }

    /// Name-based form of [`needs`](Self::needs). Unknown names are never needed.
    pub fn is_resource_needed(&self, name: &str) -> bool {
        match self.resolve(name) {
            Ok(resource) => self.needs(resource),
            Err(error) => {
                tracing::warn!("resource need query ignored: {}", error);
                false
            }
        }
    }

    fn meets(&self, t: &PhaseThresholds) -> bool {
        self.combined_shards() >= t.shards
            && self.count(Resource::WeaponFrame) >= t.frames
            && self.combined_bowstrings() >= t.bowstrings
            && self.combined_orbs() >= t.orbs
            && self.combined_ore() >= t.ore
            && self.count(Resource::PhrenBark) >= t.bark
            && self.count(Resource::LinumTirinium) >= t.fiber
    }

    /// Whether the counts clear `phase`'s thresholds. Phase 2 builds on phase 1,
    /// so it also requires the phase 1 thresholds.
    pub fn is_phase_ready(&self, phase: CraftingPhase) -> bool {
        match phase {
            CraftingPhase::Phase1 => self.meets(&self.thresholds.phase1),
            CraftingPhase::Phase2 => {
                self.meets(&self.thresholds.phase1) && self.meets(&self.thresholds.phase2)
            }
        }
    }

    pub fn phase(&self) -> CraftingPhase {
        self.phase
    }

    /// Moves Phase1 to Phase2 when phase 1 is ready. Returns whether the phase
    /// changed.
    pub fn advance_phase(&mut self) -> bool {
        match self.phase {
            CraftingPhase::Phase1 if self.is_phase_ready(CraftingPhase::Phase1) => {
                self.phase = CraftingPhase::Phase2;
                tracing::info!("advanced to crafting phase 2");
                true
            }
            CraftingPhase::Phase1 => {
                tracing::info!("phase 1 requirements not met; staying in phase 1");
                false
            }
            CraftingPhase::Phase2 => {
                tracing::debug!("already in the final crafting phase");
                false
            }
        }
    }

    /// Phase 1 is complete once the ledger advanced past it; phase 2 once both
    /// perfected weapons exist.
    pub fn is_phase_complete(&self, phase: CraftingPhase) -> bool {
        match phase {
            CraftingPhase::Phase1 => self.phase > CraftingPhase::Phase1,
            CraftingPhase::Phase2 => self
                .crafted
                .contains(CraftedItems::PERFECTED_STAFF | CraftedItems::PERFECTED_BOW),
        }
    }

    pub fn mark_crafted(&mut self, key: CraftKey) {
        self.crafted.insert(key.flag());
        tracing::debug!("crafted {}", key);
    }

    pub fn is_crafted(&self, key: CraftKey) -> bool {
        self.crafted.contains(key.flag())
    }

    /// String form used when only item names are known.
    pub fn mark_crafted_named(&mut self, kind: &str, qualifier: &str) -> Result<(), LedgerError> {
        let key = CraftKey::parse(kind, qualifier).inspect_err(|error| {
            tracing::warn!("ignoring crafted flag: {}", error);
        })?;
        self.mark_crafted(key);
        Ok(())
    }

    pub fn is_crafted_named(&self, kind: &str, qualifier: &str) -> bool {
        match CraftKey::parse(kind, qualifier) {
            Ok(key) => self.is_crafted(key),
            Err(error) => {
                tracing::warn!("crafted query ignored: {}", error);
                false
            }
        }
    }

    pub fn crafted(&self) -> CraftedItems {
        self.crafted
    }

    /// Records a kill. Each demi-boss counts at most once per run; returns
    /// false when the kill was already recorded.
    pub fn record_kill(&mut self, hostile: Hostile) -> bool {
        match hostile.tier() {
            HostileTier::Weak => {
                self.weak_kills = self.weak_kills.saturating_add(1);
                true
            }
            HostileTier::DemiBoss => self.kills.insert(hostile),
            HostileTier::Boss => {
                self.register_boss_defeat();
                true
            }
        }
    }

    pub fn has_killed(&self, hostile: Hostile) -> bool {
        match hostile.tier() {
            HostileTier::Weak => self.weak_kills > 0,
            HostileTier::DemiBoss => self.kills.contains(&hostile),
            HostileTier::Boss => self.boss_defeated,
        }
    }

    pub fn weak_kills(&self) -> u32 {
        self.weak_kills
    }

    /// Whether a demi-boss still has something to give this run.
    pub fn is_demi_boss_needed(&self, hostile: Hostile) -> bool {
        let Some(slot) = hostile.armor_slot() else {
            return false;
        };
        !self.is_crafted(CraftKey::armor(slot, self.variant.armor())) && !self.has_killed(hostile)
    }

    /// Weak hostiles drop shards; they are worth fighting while either shard
    /// kind is below the phase 1 threshold.
    pub fn are_weak_hostiles_needed(&self) -> bool {
        let threshold = self.thresholds.phase1.shards;
        self.count(Resource::CrystallineShards) < threshold
            || self.count(Resource::CorruptedShards) < threshold
    }

    pub fn is_hostile_needed(&self, hostile: Hostile) -> bool {
        match hostile.tier() {
            HostileTier::Weak => self.are_weak_hostiles_needed(),
            HostileTier::DemiBoss => self.is_demi_boss_needed(hostile),
            HostileTier::Boss => {
                self.is_phase_complete(CraftingPhase::Phase2) && !self.boss_defeated
            }
        }
    }

    /// Every demi-boss was killed or its armor piece already exists.
    pub fn required_kills_met(&self) -> bool {
        Hostile::DEMI_BOSSES.iter().all(|hostile| {
            self.has_killed(*hostile)
                || hostile
                    .armor_slot()
                    .is_some_and(|slot| self.is_crafted(CraftKey::armor(slot, self.variant.armor())))
        })
    }

    pub fn register_boss_defeat(&mut self) {
        if !self.boss_defeated {
            tracing::info!("boss defeat registered");
        }
        self.boss_defeated = true;
    }

    pub fn boss_defeated(&self) -> bool {
        self.boss_defeated
    }

    /// Zeroes counts, flags and kills and returns to phase 1.
    pub fn reset_for_new_run(&mut self) {
        *self = Self::with_thresholds(self.variant, self.thresholds);
        tracing::info!("progress ledger reset for a new run");
    }
}
