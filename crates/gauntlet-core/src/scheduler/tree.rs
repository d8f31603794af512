//! The fixed decision tree.
//!
//! ```text
//! active?
//! ├─ no  → Idle
//! └─ yes → health > threshold?
//!          ├─ no  → UnexpectedScenario
//!          └─ yes → Selector
//!                   ├─ starting room not confirmed  → StartingRoomCheck
//!                   ├─ current phase ready, not done → Crafting(phase)
//!                   ├─ needed hostile visible       → Combat
//!                   ├─ needed node visible          → Gathering
//!                   ├─ current room not yet known   → Traversal
//!                   ├─ boss due                     → BossEncounter
//!                   ├─ boss defeated                → PostEncounter
//!                   └─ otherwise                    → UnexpectedScenario
//! ```

use behavior_tree::{Behavior, Status, branch, guarded, selector};

use crate::actions::ActionKind;

use super::Observation;

/// Tree context: the read-only observation plus the slot the chosen leaf
/// writes into.
#[derive(Debug)]
pub struct Blackboard {
    pub obs: Observation,
    pub decision: Option<ActionKind>,
}

impl Blackboard {
    pub fn new(obs: Observation) -> Self {
        Self {
            obs,
            decision: None,
        }
    }
}

/// Leaf that records a fixed decision.
struct Choose(ActionKind);

impl Behavior<Blackboard> for Choose {
    fn tick(&self, ctx: &mut Blackboard) -> Status {
        ctx.decision = Some(self.0);
        Status::Success
    }
}

fn choose(kind: ActionKind) -> Box<dyn Behavior<Blackboard>> {
    Box::new(Choose(kind))
}

/// Crafting leaf that picks the phase from the observation.
struct ChooseCrafting;

impl Behavior<Blackboard> for ChooseCrafting {
    fn tick(&self, ctx: &mut Blackboard) -> Status {
        ctx.decision = Some(ActionKind::crafting(ctx.obs.phase));
        Status::Success
    }
}

fn candidates() -> Box<dyn Behavior<Blackboard>> {
    selector(vec![
        guarded(
            |bb: &Blackboard| !bb.obs.starting_room_confirmed,
            choose(ActionKind::StartingRoomCheck),
        ),
        guarded(|bb: &Blackboard| bb.obs.crafting_due(), Box::new(ChooseCrafting)),
        guarded(
            |bb: &Blackboard| bb.obs.needed_hostile_visible,
            choose(ActionKind::Combat),
        ),
        guarded(
            |bb: &Blackboard| bb.obs.needed_node_visible,
            choose(ActionKind::Gathering),
        ),
        guarded(|bb: &Blackboard| !bb.obs.room_known, choose(ActionKind::Traversal)),
        guarded(|bb: &Blackboard| bb.obs.boss_due(), choose(ActionKind::BossEncounter)),
        guarded(
            |bb: &Blackboard| bb.obs.boss_defeated,
            choose(ActionKind::PostEncounter),
        ),
        choose(ActionKind::UnexpectedScenario),
    ])
}

pub fn build() -> Box<dyn Behavior<Blackboard>> {
    branch(
        |bb: &Blackboard| bb.obs.active,
        branch(
            |bb: &Blackboard| bb.obs.is_healthy(),
            candidates(),
            choose(ActionKind::UnexpectedScenario),
        ),
        choose(ActionKind::Idle),
    )
}
