//! Boss encounter controller.
//!
//! The fight runs as one leaf action re-entered every tick. Each pass reads
//! the new damage events, keeps the protective posture in step with the boss
//! attack cycle, steps off hazardous tiles and re-attacks.

mod controller;
mod cycle;
mod events;
mod hazards;

pub use controller::{BossEncounterAction, BossEncounterState};
pub use cycle::{ATTACKS_PER_STYLE, AttackCycle, AttackStyle};
pub use events::DamageTracker;
pub use hazards::HazardMap;
