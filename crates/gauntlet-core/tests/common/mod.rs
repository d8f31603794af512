#![allow(dead_code)]

use gauntlet_core::actions::{ActionContext, ActionKind, ActionSet, Outcome};
use gauntlet_core::sim::{RecordingStatus, ScriptedGateway};
use gauntlet_core::{Position, ProgressLedger, RoomVisitLedger, RunConfig, RunState, Variant};

/// Lobby landmarks sit on the surface plane, far away from the dungeon.
pub const LOBBY: Position = Position::new(3030, 6120, 0);
/// A tile inside the standard starting room.
pub const START: Position = Position::new(1910, 5670, 1);

/// One run's state wired to a scripted world.
pub struct Harness {
    pub world: ScriptedGateway,
    pub ledger: ProgressLedger,
    pub run: RunState,
    pub rooms: RoomVisitLedger,
    pub status: RecordingStatus,
    pub config: RunConfig,
    pub actions: ActionSet,
}

impl Harness {
    pub fn new(player: Position) -> Self {
        let config = RunConfig::for_variant(Variant::Standard);
        Self {
            world: ScriptedGateway::new(player),
            ledger: ProgressLedger::with_thresholds(config.variant, config.thresholds),
            run: RunState::new(config.variant),
            rooms: RoomVisitLedger::new(),
            status: RecordingStatus::new(),
            config,
            actions: ActionSet::new(),
        }
    }

    /// Past the entry check, standing in the starting room.
    pub fn inside() -> Self {
        let mut harness = Self::new(START);
        harness.run.starting_room_confirmed = true;
        harness
    }

    pub fn execute(&mut self, kind: ActionKind) -> Outcome {
        let mut cx = ActionContext::new(
            &mut self.ledger,
            &mut self.run,
            &mut self.rooms,
            &mut self.world,
            &mut self.status,
            &self.config,
        );
        self.actions
            .execute(kind, &mut cx)
            .expect("scripted world stays reachable")
    }

    pub fn spawn_lobby(&mut self) {
        self.world.spawn_npc("Bryn", LOBBY);
        self.world.spawn_object("Reward Chest", LOBBY.offset(2, 0));
        self.world.spawn_object("The Gauntlet", LOBBY.offset(0, 3));
    }
}
