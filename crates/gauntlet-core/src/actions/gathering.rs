//! Harvesting resource nodes.

use crate::error::ActionError;
use crate::gateway::{Entity, EntityQuery, Gateway};
use crate::ledger::{ProgressLedger, Resource};
use crate::variant::Variant;

use super::inventory::{collect_loot, drop_filler, teleport_home};
use super::{ActionContext, LeafAction, Outcome};

/// Tools dropped once the resource they harvest is complete.
fn tools(variant: Variant) -> [(&'static str, Resource); 3] {
    [
        ("Pickaxe", variant.ore()),
        ("Hatchet", Resource::PhrenBark),
        ("Hammer", Resource::LinumTirinium),
    ]
}

/// First node type in gathering order that is still needed and visible.
pub fn needed_node(env: &dyn Gateway, ledger: &ProgressLedger) -> Option<(Resource, Entity)> {
    Resource::GATHERING_ORDER
        .iter()
        .filter(|resource| ledger.needs(**resource))
        .find_map(|resource| {
            env.find_entity(&EntityQuery::object(resource.display_name()))
                .map(|node| (*resource, node))
        })
}

#[derive(Debug, Default)]
pub struct GatheringAction;

impl GatheringAction {
    fn gather(&self, cx: &mut ActionContext<'_>, resource: Resource, node: &Entity) -> Outcome {
        let name = resource.display_name();
        cx.report(format!("Gathering resource: {}", name));

        let before = cx.env.inventory_count(name);
        if !cx.env.interact(node, "Gather") {
            return cx.soft_failure(format!("Failed to gather {}", name));
        }
        let landed = cx
            .env
            .wait_until(&mut |env| env.inventory_count(name) > before, cx.config.timings.gather);
        if !landed {
            return cx.soft_failure(format!("No {} received", name));
        }
        let gained = cx.env.inventory_count(name).saturating_sub(before);
        let total = cx.ledger.increment(resource, i64::from(gained));
        tracing::info!("{} now at {}/{}", name, total, resource.target());
        Outcome::Completed
    }

    fn relieve_full_inventory(&self, cx: &mut ActionContext<'_>) {
        if !cx.env.is_inventory_full() {
            return;
        }
        cx.report("Inventory is full, handling resources.");
        let max_drops = cx.config.inventory.max_filler_drops;
        drop_filler(cx, max_drops);
        if cx.env.is_inventory_full() && !teleport_home(cx) {
            cx.report("Inventory full and no teleport crystal available.");
        }
    }

    fn manage_tools(&self, cx: &mut ActionContext<'_>) {
        let variant = cx.run.variant;
        for (tool, resource) in tools(variant) {
            if cx.ledger.needs(resource) {
                continue;
            }
            let Some(item) = cx.env.find_entity(&EntityQuery::inventory(tool)) else {
                continue;
            };
            if cx.env.interact(&item, "Drop") {
                cx.report(format!("Dropped {} after finishing {}", tool, resource.display_name()));
            } else {
                tracing::warn!("failed to drop {}", tool);
            }
        }
    }
}

impl LeafAction for GatheringAction {
    fn execute(&mut self, cx: &mut ActionContext<'_>) -> Result<Outcome, ActionError> {
        let outcome = match needed_node(&*cx.env, cx.ledger) {
            Some((resource, node)) => self.gather(cx, resource, &node),
            None => cx.soft_failure("No needed resource nodes found."),
        };

        self.relieve_full_inventory(cx);
        self.manage_tools(cx);
        collect_loot(cx);
        Ok(outcome)
    }
}
