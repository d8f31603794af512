//! Priority scheduler.
//!
//! Once per tick the driver captures an [`Observation`] and asks the
//! [`Scheduler`] for the single action to run. Candidates are tried in a fixed
//! order and the first whose guard holds wins; there is no scoring and no
//! randomness, so equal observations always produce equal decisions.

mod observation;
mod tree;

pub use observation::Observation;
pub use tree::Blackboard;

use behavior_tree::Behavior;

use crate::actions::ActionKind;

pub struct Scheduler {
    root: Box<dyn Behavior<Blackboard>>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler").finish_non_exhaustive()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self { root: tree::build() }
    }

    pub fn decide(&self, obs: &Observation) -> ActionKind {
        let mut board = Blackboard::new(*obs);
        self.root.tick(&mut board);
        let decision = board.decision.unwrap_or(ActionKind::UnexpectedScenario);
        tracing::debug!("scheduler picked {} from {:?}", decision, obs);
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::CraftingPhase;

    fn confirmed() -> Observation {
        Observation {
            starting_room_confirmed: true,
            room_known: true,
            ..Observation::default()
        }
    }

    #[test]
    fn inactive_run_idles() {
        let obs = Observation {
            active: false,
            health: 0,
            ..confirmed()
        };
        assert_eq!(Scheduler::new().decide(&obs), ActionKind::Idle);
    }

    #[test]
    fn zero_health_overrides_ready_crafting() {
        let obs = Observation {
            health: 0,
            phase: CraftingPhase::Phase2,
            phase_ready: true,
            needed_hostile_visible: true,
            ..confirmed()
        };
        assert_eq!(Scheduler::new().decide(&obs), ActionKind::UnexpectedScenario);
    }

    #[test]
    fn health_at_threshold_is_not_healthy() {
        let obs = Observation {
            health: 50,
            ..confirmed()
        };
        assert_eq!(Scheduler::new().decide(&obs), ActionKind::UnexpectedScenario);
        let obs = Observation {
            health: 51,
            needed_node_visible: true,
            ..confirmed()
        };
        assert_eq!(Scheduler::new().decide(&obs), ActionKind::Gathering);
    }

    #[test]
    fn starting_room_comes_first() {
        let obs = Observation {
            phase_ready: true,
            needed_hostile_visible: true,
            ..Observation::default()
        };
        assert_eq!(Scheduler::new().decide(&obs), ActionKind::StartingRoomCheck);
    }

    #[test]
    fn crafting_follows_the_current_phase() {
        let scheduler = Scheduler::new();
        let mut obs = Observation {
            phase_ready: true,
            needed_hostile_visible: true,
            ..confirmed()
        };
        assert_eq!(scheduler.decide(&obs), ActionKind::CraftingPhase1);
        obs.phase = CraftingPhase::Phase2;
        assert_eq!(scheduler.decide(&obs), ActionKind::CraftingPhase2);
        obs.phase_complete = true;
        assert_eq!(scheduler.decide(&obs), ActionKind::Combat);
    }

    #[test]
    fn candidate_order_is_fixed() {
        let scheduler = Scheduler::new();
        let mut obs = Observation {
            needed_hostile_visible: true,
            needed_node_visible: true,
            room_known: false,
            phase2_complete: true,
            required_kills_met: true,
            ..confirmed()
        };
        assert_eq!(scheduler.decide(&obs), ActionKind::Combat);
        obs.needed_hostile_visible = false;
        assert_eq!(scheduler.decide(&obs), ActionKind::Gathering);
        obs.needed_node_visible = false;
        assert_eq!(scheduler.decide(&obs), ActionKind::Traversal);
        obs.room_known = true;
        assert_eq!(scheduler.decide(&obs), ActionKind::BossEncounter);
        obs.boss_defeated = true;
        assert_eq!(scheduler.decide(&obs), ActionKind::PostEncounter);
    }

    #[test]
    fn boss_waits_for_required_kills() {
        let obs = Observation {
            phase2_complete: true,
            required_kills_met: false,
            ..confirmed()
        };
        assert_eq!(Scheduler::new().decide(&obs), ActionKind::UnexpectedScenario);
    }

    #[test]
    fn equal_observations_give_equal_decisions() {
        let scheduler = Scheduler::new();
        let obs = Observation {
            needed_node_visible: true,
            ..confirmed()
        };
        let first = scheduler.decide(&obs);
        for _ in 0..10 {
            assert_eq!(scheduler.decide(&obs), first);
        }
        assert_eq!(Scheduler::new().decide(&obs), first);
    }
}
