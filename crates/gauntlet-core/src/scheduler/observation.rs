use crate::actions::{needed_node, needed_target};
use crate::config::SafetyConfig;
use crate::gateway::Gateway;
use crate::ledger::{CraftingPhase, ProgressLedger};
use crate::rooms::RoomVisitLedger;
use crate::run::RunState;

/// Snapshot of everything the scheduler's guards read, taken once at the top
/// of a tick. Guards never see the live world, so one evaluation cannot
/// observe two different states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observation {
    pub active: bool,
    pub health: u8,
    pub health_threshold: u8,
    pub starting_room_confirmed: bool,
    pub phase: CraftingPhase,
    pub phase_ready: bool,
    pub phase_complete: bool,
    pub needed_hostile_visible: bool,
    pub needed_node_visible: bool,
    pub room_known: bool,
    pub phase2_complete: bool,
    pub required_kills_met: bool,
    pub boss_defeated: bool,
}

impl Observation {
    pub fn capture(
        run: &RunState,
        ledger: &ProgressLedger,
        rooms: &RoomVisitLedger,
        env: &dyn Gateway,
        safety: &SafetyConfig,
    ) -> Self {
        let phase = ledger.phase();
        Self {
            active: run.active,
            health: run.vitals.health,
            health_threshold: safety.health_threshold,
            starting_room_confirmed: run.starting_room_confirmed,
            phase,
            phase_ready: ledger.is_phase_ready(phase),
            phase_complete: ledger.is_phase_complete(phase),
            needed_hostile_visible: needed_target(env, ledger).is_some(),
            needed_node_visible: needed_node(env, ledger).is_some(),
            room_known: rooms.contains(env.player_position().room()),
            phase2_complete: ledger.is_phase_complete(CraftingPhase::Phase2),
            required_kills_met: ledger.required_kills_met(),
            boss_defeated: ledger.boss_defeated(),
        }
    }

    /// Health strictly above the safety threshold.
    pub fn is_healthy(&self) -> bool {
        self.health > self.health_threshold
    }

    pub fn crafting_due(&self) -> bool {
        self.phase_ready && !self.phase_complete
    }

    pub fn boss_due(&self) -> bool {
        self.phase2_complete && self.required_kills_met && !self.boss_defeated
    }
}

impl Default for Observation {
    /// A fresh run standing outside the challenge at full health.
    fn default() -> Self {
        Self {
            active: true,
            health: 100,
            health_threshold: SafetyConfig::default().health_threshold,
            starting_room_confirmed: false,
            phase: CraftingPhase::Phase1,
            phase_ready: false,
            phase_complete: false,
            needed_hostile_visible: false,
            needed_node_visible: false,
            room_known: false,
            phase2_complete: false,
            required_kills_met: false,
            boss_defeated: false,
        }
    }
}
