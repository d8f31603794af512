//! Tunables for one run.
//!
//! Every wait window and jitter bound lives here so tests can shrink them and
//! a fake clock can drive them.

use crate::gateway::DelayWindow;
use crate::ledger::ThresholdTable;
use crate::variant::Variant;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub variant: Variant,
    pub thresholds: ThresholdTable,
    pub timings: Timings,
    pub safety: SafetyConfig,
    pub inventory: InventoryConfig,
}

impl RunConfig {
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            thresholds: ThresholdTable::for_variant(variant),
            timings: Timings::default(),
            safety: SafetyConfig::default(),
            inventory: InventoryConfig::default(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// Total time the starting room may take to show its landmarks.
    pub start_wait_ms: u64,
    /// Interval between landmark checks.
    pub start_poll_ms: u64,
    /// Pause after an ordinary interaction.
    pub interaction: DelayWindow,
    /// Bound for leaving the starting room after entry.
    pub departure: DelayWindow,
    /// Bound for a target to disappear after an attack.
    pub kill: DelayWindow,
    /// Bound for a gathered item to land in the inventory.
    pub gather: DelayWindow,
    /// Bound for a crafted item to appear.
    pub craft: DelayWindow,
    /// Bound for arriving after a walk.
    pub walk: DelayWindow,
    /// Bound for a picked-up or dropped item to settle.
    pub loot: DelayWindow,
    /// Pause between boss controller cycles.
    pub boss_cycle: DelayWindow,
    /// Pause between scheduler ticks.
    pub tick: DelayWindow,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            start_wait_ms: 180_000,
            start_poll_ms: 10_000,
            interaction: DelayWindow::new(600, 1_200),
            departure: DelayWindow::new(5_000, 8_000),
            kill: DelayWindow::new(20_000, 30_000),
            gather: DelayWindow::new(8_000, 12_000),
            craft: DelayWindow::new(2_000, 3_000),
            walk: DelayWindow::new(4_000, 6_000),
            loot: DelayWindow::new(1_500, 2_500),
            boss_cycle: DelayWindow::new(150, 300),
            tick: DelayWindow::new(200, 400),
        }
    }
}

/// Vital thresholds, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SafetyConfig {
    /// The scheduler only runs ordinary work above this health.
    pub health_threshold: u8,
    /// At or below this the unexpected-scenario handler eats.
    pub low_health: u8,
    /// The boss controller eats below this health.
    pub boss_eat_below: u8,
    /// The boss controller drinks below this prayer.
    pub boss_drink_below: u8,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            health_threshold: 50,
            low_health: 30,
            boss_eat_below: 50,
            boss_drink_below: 20,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Post-encounter deposits happen when fewer slots than this are free.
    pub deposit_below_free: u32,
    /// Filler drops allowed per full-inventory event while gathering.
    pub max_filler_drops: u32,
    /// Low-priority item dropped to make room.
    pub filler: String,
    pub food: String,
    pub potion: String,
    pub teleport: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            deposit_below_free: 20,
            max_filler_drops: 3,
            filler: "Raw Paddlefish".to_string(),
            food: "Paddlefish".to_string(),
            potion: "Egniol potion".to_string(),
            teleport: "Teleport crystal".to_string(),
        }
    }
}
