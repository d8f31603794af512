//! Leaf actions: the units of work the scheduler picks from.
//!
//! Each action runs to completion inside one tick. Missing entities and failed
//! interactions are soft failures: logged, surfaced as status, retried when the
//! scheduler selects the action again. Only an unreachable environment
//! propagates as an error.

mod combat;
mod context;
mod crafting;
mod gathering;
mod idle;
mod inventory;
mod post_encounter;
mod starting_room;
mod traversal;
mod unexpected;

pub use combat::{CombatAction, needed_target, weapon_preference};
pub use context::ActionContext;
pub use crafting::{CRAFTING_STATION, CraftingAction, CraftingPlan, Recipe, recipes_for};
pub use gathering::{GatheringAction, needed_node};
pub use idle::IdleAction;
pub use inventory::{collect_loot, drop_filler, eat_food, drink_potion};
pub use post_encounter::{PostEncounterAction, RestockDecision};
pub use starting_room::{STARTING_ROOM_TIMEOUT_REASON, StartingRoomCheck, in_lobby};
pub use traversal::{TraversalAction, open_passage};
pub use unexpected::{UnexpectedScenario, UnexpectedTrigger};

use crate::boss::BossEncounterAction;
use crate::error::ActionError;
use crate::gateway::Vital;
use crate::ledger::CraftingPhase;

/// The closed set of leaf actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum ActionKind {
    Idle,
    StartingRoomCheck,
    Combat,
    Gathering,
    CraftingPhase1,
    CraftingPhase2,
    Traversal,
    BossEncounter,
    PostEncounter,
    UnexpectedScenario,
}

impl ActionKind {
    pub const fn crafting(phase: CraftingPhase) -> Self {
        match phase {
            CraftingPhase::Phase1 => ActionKind::CraftingPhase1,
            CraftingPhase::Phase2 => ActionKind::CraftingPhase2,
        }
    }

    /// Status line published when the scheduler selects this action.
    pub const fn status(self) -> &'static str {
        match self {
            ActionKind::Idle => "Run inactive.",
            ActionKind::StartingRoomCheck => "Checking for the starting room...",
            ActionKind::Combat => "Looking for necessary monsters to kill...",
            ActionKind::Gathering => "Gathering resources...",
            ActionKind::CraftingPhase1 => "Preparing to craft - Phase 1...",
            ActionKind::CraftingPhase2 => "Preparing to craft - Phase 2...",
            ActionKind::Traversal => "Navigating dungeon rooms...",
            ActionKind::BossEncounter => "Fighting the boss...",
            ActionKind::PostEncounter => "Managing post-boss actions...",
            ActionKind::UnexpectedScenario => "Handling post-boss or recovery actions...",
        }
    }
}

/// How an action ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Nothing changed in the ledger; the scheduler may pick the action again.
    SoftFailure(String),
    /// The run must end. Carries the stop reason.
    Stopped(String),
    /// Run another action within the same tick.
    HandOff(ActionKind),
}

pub trait LeafAction {
    fn execute(&mut self, cx: &mut ActionContext<'_>) -> Result<Outcome, ActionError>;
}

/// One instance of every action. Actions that keep state between ticks (the
/// boss controller) keep it here.
#[derive(Debug, Default)]
pub struct ActionSet {
    pub idle: IdleAction,
    pub starting_room: StartingRoomCheck,
    pub combat: CombatAction,
    pub gathering: GatheringAction,
    pub crafting_phase1: CraftingAction,
    pub crafting_phase2: CraftingAction,
    pub traversal: TraversalAction,
    pub boss: BossEncounterAction,
    pub post_encounter: PostEncounterAction,
    pub unexpected: UnexpectedScenario,
}

impl ActionSet {
    pub fn new() -> Self {
        Self {
            crafting_phase1: CraftingAction::new(CraftingPhase::Phase1),
            crafting_phase2: CraftingAction::new(CraftingPhase::Phase2),
            ..Self::default()
        }
    }

    pub fn get_mut(&mut self, kind: ActionKind) -> &mut dyn LeafAction {
        match kind {
            ActionKind::Idle => &mut self.idle,
            ActionKind::StartingRoomCheck => &mut self.starting_room,
            ActionKind::Combat => &mut self.combat,
            ActionKind::Gathering => &mut self.gathering,
            ActionKind::CraftingPhase1 => &mut self.crafting_phase1,
            ActionKind::CraftingPhase2 => &mut self.crafting_phase2,
            ActionKind::Traversal => &mut self.traversal,
            ActionKind::BossEncounter => &mut self.boss,
            ActionKind::PostEncounter => &mut self.post_encounter,
            ActionKind::UnexpectedScenario => &mut self.unexpected,
        }
    }

    /// Runs one action. A boss encounter left through death, or through the
    /// reset that starts the next run, is dropped so it can never register a
    /// defeat later.
    pub fn execute(
        &mut self,
        kind: ActionKind,
        cx: &mut ActionContext<'_>,
    ) -> Result<Outcome, ActionError> {
        cx.env.connection()?;
        if kind != ActionKind::BossEncounter && cx.env.read_vital(Vital::Health) == 0 {
            self.boss.abandon();
        }
        let outcome = self.get_mut(kind).execute(cx)?;
        if kind == ActionKind::PostEncounter && outcome == Outcome::Completed {
            self.boss.abandon();
        }
        Ok(outcome)
    }
}
