//! Runtime configuration.
use std::env;

use gauntlet_core::{DelayWindow, RunConfig, Variant};

/// Settings for one driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub run: RunConfig,
    /// Capacity of the status broadcast channel.
    pub status_buffer: usize,
    /// Hand-offs allowed within a single tick.
    pub max_hand_offs: u32,
    /// Stops the loop after this many ticks. Unbounded when `None`.
    pub max_ticks: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            run: RunConfig::default(),
            status_buffer: 256,
            max_hand_offs: 2,
            max_ticks: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GAUNTLET_VARIANT` - `standard` or `hard` (default: standard)
    /// - `GAUNTLET_SAFETY_HEALTH` - health percent the scheduler guards on (default: 50)
    /// - `GAUNTLET_START_WAIT_SECS` - starting-room search window (default: 180)
    /// - `GAUNTLET_START_POLL_SECS` - starting-room recheck interval (default: 10)
    /// - `GAUNTLET_TICK_MS` - pause between ticks (default: 200-400)
    /// - `GAUNTLET_STATUS_BUFFER` - status channel capacity (default: 256)
    /// - `GAUNTLET_MAX_TICKS` - stop after this many ticks (default: unbounded)
    pub fn from_env() -> Self {
        let variant = read_env::<Variant>("GAUNTLET_VARIANT").unwrap_or_default();
        let mut config = Self {
            run: RunConfig::for_variant(variant),
            ..Self::default()
        };

        if let Some(health) = read_env::<u8>("GAUNTLET_SAFETY_HEALTH") {
            config.run.safety.health_threshold = health.min(100);
        }
        if let Some(secs) = read_env::<u64>("GAUNTLET_START_WAIT_SECS") {
            config.run.timings.start_wait_ms = secs.saturating_mul(1_000);
        }
        if let Some(secs) = read_env::<u64>("GAUNTLET_START_POLL_SECS") {
            config.run.timings.start_poll_ms = secs.max(1).saturating_mul(1_000);
        }
        if let Some(ms) = read_env::<u64>("GAUNTLET_TICK_MS") {
            config.run.timings.tick = DelayWindow::new(ms, ms.saturating_mul(2));
        }
        if let Some(capacity) = read_env::<usize>("GAUNTLET_STATUS_BUFFER") {
            config.status_buffer = capacity.max(1);
        }
        config.max_ticks = read_env::<u64>("GAUNTLET_MAX_TICKS");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
