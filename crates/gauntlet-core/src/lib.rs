//! Decision core for an automated gauntlet run.
//!
//! The crate is written purely against the [`Gateway`] capability trait and
//! the [`StatusSink`] output trait, so it runs the same against a live
//! environment or the scripted world in [`sim`].
//!
//! Modules are organized by responsibility:
//! - [`ledger`] tracks resources, crafted items, kills and the crafting phase
//! - [`scheduler`] picks the single next action from an [`Observation`]
//! - [`actions`] holds the leaf actions the scheduler chooses between
//! - [`boss`] is the real-time boss encounter controller
//! - [`gateway`], [`status`] and [`sim`] are the environment seams
pub mod actions;
pub mod boss;
pub mod config;
pub mod error;
pub mod gateway;
pub mod geometry;
pub mod hostile;
pub mod ledger;
pub mod rooms;
pub mod run;
pub mod scheduler;
pub mod sim;
pub mod status;
pub mod variant;

pub use actions::{ActionContext, ActionKind, ActionSet, LeafAction, Outcome};
pub use boss::{AttackCycle, AttackStyle, BossEncounterAction, BossEncounterState};
pub use config::{InventoryConfig, RunConfig, SafetyConfig, Timings};
pub use error::{ActionError, GatewayError, LedgerError};
pub use gateway::{
    DamageEvent, DelayWindow, Entity, EntityKind, EntityQuery, Gateway, INVENTORY_CAPACITY,
    Posture, Subject, Vital,
};
pub use geometry::{Area, Cardinal, Position, ROOM_SIZE, RoomKey};
pub use hostile::{Hostile, HostileTier};
pub use ledger::{
    ArmorSlot, ArmorVariant, COMBINED_SHARDS, CraftKey, CraftedItems, CraftingPhase,
    PhaseThresholds, ProgressLedger, Resource, ThresholdTable, Tier, WeaponKind,
};
pub use rooms::RoomVisitLedger;
pub use run::{RunState, Vitals};
pub use scheduler::{Observation, Scheduler};
pub use status::{NullStatus, StatusSink};
pub use variant::Variant;
