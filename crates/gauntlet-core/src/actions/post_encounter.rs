//! Reward collection and reset between runs.

use crate::error::ActionError;
use crate::gateway::{EntityKind, EntityQuery};

use super::starting_room::LOBBY_CHEST;
use super::{ActionContext, LeafAction, Outcome};

pub const DEPOSIT_BOX: &str = "Bank Deposit Box";

/// What to do with the inventory once the reward is collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestockDecision {
    Deposit,
    Proceed,
}

impl RestockDecision {
    /// Deposit when fewer than `deposit_below` slots are free.
    pub fn evaluate(free_slots: u32, deposit_below: u32) -> Self {
        if free_slots < deposit_below {
            RestockDecision::Deposit
        } else {
            RestockDecision::Proceed
        }
    }
}

#[derive(Debug, Default)]
pub struct PostEncounterAction;

impl PostEncounterAction {
    fn deposit(&self, cx: &mut ActionContext<'_>) {
        cx.report("Inventory has fewer than 20 spaces, depositing items...");
        let Some(depositor) = cx.env.find_entity(&EntityQuery::object(DEPOSIT_BOX)) else {
            tracing::warn!("bank deposit box not found");
            return;
        };
        if !cx.env.interact(&depositor, "Deposit") {
            tracing::warn!("deposit failed");
            return;
        }
        let emptied = cx.env.wait_until(
            &mut |env| {
                env.find_entities(&EntityQuery::new(EntityKind::InventoryItem))
                    .is_empty()
            },
            cx.config.timings.loot,
        );
        if emptied {
            tracing::info!("items deposited");
        }
    }
}

impl LeafAction for PostEncounterAction {
    fn execute(&mut self, cx: &mut ActionContext<'_>) -> Result<Outcome, ActionError> {
        cx.report("Managing post-boss actions...");

        let Some(chest) = cx.env.find_entity(&EntityQuery::object(LOBBY_CHEST)) else {
            return Ok(cx.soft_failure("No reward chest found or unable to loot."));
        };
        if !cx.env.interact(&chest, "Loot") {
            return Ok(cx.soft_failure("No reward chest found or unable to loot."));
        }
        cx.env.delay(cx.config.timings.loot);

        cx.ledger.reset_for_new_run();
        cx.rooms.reset();
        cx.run.reset_for_new_run();

        let free = cx.env.inventory_free_slots();
        match RestockDecision::evaluate(free, cx.config.inventory.deposit_below_free) {
            RestockDecision::Deposit => self.deposit(cx),
            RestockDecision::Proceed => cx.report("Enough space, starting the next run..."),
        }
        Ok(Outcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposits_only_below_threshold() {
        assert_eq!(RestockDecision::evaluate(19, 20), RestockDecision::Deposit);
        assert_eq!(RestockDecision::evaluate(20, 20), RestockDecision::Proceed);
        assert_eq!(RestockDecision::evaluate(0, 20), RestockDecision::Deposit);
    }
}
