//! Recovery handler of last resort.

use crate::config::RunConfig;
use crate::error::ActionError;
use crate::gateway::{EntityKind, EntityQuery, Gateway};
use crate::ledger::Resource;
use crate::run::RunState;

use super::inventory::{drop_filler, eat_food};
use super::starting_room::in_lobby;
use super::{ActionContext, ActionKind, LeafAction, Outcome};

/// Why the handler fired, in the order the conditions are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum UnexpectedTrigger {
    Dead,
    BackInStartingRoom,
    LowHealth,
    InventoryFull,
}

impl UnexpectedTrigger {
    /// Evaluates the handler's guard. `None` means nothing unexpected is
    /// going on.
    pub fn detect(env: &dyn Gateway, run: &RunState, config: &RunConfig) -> Option<Self> {
        let health = run.vitals.health;
        if health == 0 {
            return Some(UnexpectedTrigger::Dead);
        }
        if run.starting_room_confirmed && in_lobby(env) {
            return Some(UnexpectedTrigger::BackInStartingRoom);
        }
        if health <= config.safety.low_health {
            return Some(UnexpectedTrigger::LowHealth);
        }
        if env.is_inventory_full()
            && env.inventory_contains(&config.inventory.filler)
            && priority_loot_waiting(env)
        {
            return Some(UnexpectedTrigger::InventoryFull);
        }
        None
    }
}

fn priority_loot_waiting(env: &dyn Gateway) -> bool {
    env.find_entities(&EntityQuery::new(EntityKind::GroundItem))
        .iter()
        .filter_map(|item| Resource::from_item_name(&item.name))
        .any(Resource::is_high_priority_loot)
}

/// Branch node of last resort. Its failure path is a no-op, so it always
/// terminates.
#[derive(Debug, Default)]
pub struct UnexpectedScenario;

impl LeafAction for UnexpectedScenario {
    fn execute(&mut self, cx: &mut ActionContext<'_>) -> Result<Outcome, ActionError> {
        cx.run.refresh_vitals(&*cx.env);
        let Some(trigger) = UnexpectedTrigger::detect(&*cx.env, cx.run, cx.config) else {
            cx.report("No unexpected scenario detected");
            return Ok(Outcome::Completed);
        };
        tracing::info!("unexpected scenario: {}", trigger);

        match trigger {
            UnexpectedTrigger::Dead | UnexpectedTrigger::BackInStartingRoom => {
                cx.report("Handling post-boss or recovery actions...");
                Ok(Outcome::HandOff(ActionKind::PostEncounter))
            }
            UnexpectedTrigger::LowHealth => {
                if eat_food(cx) {
                    Ok(Outcome::Completed)
                } else {
                    Ok(cx.soft_failure("Low health but no food available!"))
                }
            }
            UnexpectedTrigger::InventoryFull => {
                cx.report("Inventory is full, dropping paddlefish to make space for loot...");
                drop_filler(cx, u32::MAX);
                Ok(Outcome::Completed)
            }
        }
    }
}
