//! Inventory chores shared by several actions.

use crate::gateway::{Entity, EntityKind, EntityQuery, Gateway};
use crate::ledger::Resource;

use super::ActionContext;

fn still_held(env: &dyn Gateway, item: &Entity) -> bool {
    env.find_entities(&EntityQuery::inventory(item.name.clone()))
        .iter()
        .any(|held| held.id == item.id)
}

/// Drops filler one unit at a time while the inventory is full, at most `max`
/// units. Returns how many were dropped.
pub fn drop_filler(cx: &mut ActionContext<'_>, max: u32) -> u32 {
    let filler = cx.config.inventory.filler.clone();
    let window = cx.config.timings.loot;
    let mut dropped = 0;

    while dropped < max && cx.env.is_inventory_full() {
        let Some(item) = cx.env.find_entity(&EntityQuery::inventory(filler.clone())) else {
            tracing::warn!("no {} left to drop", filler);
            break;
        };
        if !cx.env.interact(&item, "Drop") {
            tracing::warn!("failed to drop {}", item.name);
            break;
        }
        cx.env.wait_until(&mut |env| !still_held(env, &item), window);
        dropped += 1;
        if let Some(resource) = Resource::from_item_name(&filler) {
            cx.ledger.increment(resource, -1);
        }
    }

    if dropped > 0 {
        cx.report(format!("Dropped {} {} to make space", dropped, filler));
    }
    dropped
}

pub fn eat_food(cx: &mut ActionContext<'_>) -> bool {
    let food = cx.config.inventory.food.clone();
    consume(cx, food, "Eat")
}

pub fn drink_potion(cx: &mut ActionContext<'_>) -> bool {
    let potion = cx.config.inventory.potion.clone();
    consume(cx, potion, "Drink")
}

fn consume(cx: &mut ActionContext<'_>, name: String, action: &str) -> bool {
    let Some(item) = cx.env.find_entity(&EntityQuery::inventory(name.clone())) else {
        tracing::warn!("no {} in inventory", name);
        return false;
    };
    if !cx.env.interact(&item, action) {
        tracing::warn!("{} on {} failed", action, item.name);
        return false;
    }
    cx.env.delay(cx.config.timings.interaction);
    cx.report(format!("{} {}", action, name));
    true
}

/// Uses the teleport item to return to the crafting room.
pub fn teleport_home(cx: &mut ActionContext<'_>) -> bool {
    let name = cx.config.inventory.teleport.clone();
    let Some(item) = cx.env.find_entity(&EntityQuery::inventory(name.clone())) else {
        tracing::warn!("no {} available", name);
        return false;
    };
    if !cx.env.interact(&item, "Teleport") {
        tracing::warn!("{} failed", name);
        return false;
    }
    cx.env.delay(cx.config.timings.walk);
    cx.report("Teleporting back to the crafting room");
    true
}

/// Wields or wears an inventory item. Returns false when it is not held.
pub fn equip(cx: &mut ActionContext<'_>, name: &str, action: &str) -> bool {
    let Some(item) = cx.env.find_entity(&EntityQuery::inventory(name)) else {
        return false;
    };
    if !cx.env.interact(&item, action) {
        tracing::warn!("{} on {} failed", action, name);
        return false;
    }
    cx.env.delay(cx.config.timings.interaction);
    true
}

/// Picks up visible ground items the run still needs, plus high-priority loot
/// (dropping filler to fit it). Returns the number of items taken.
pub fn collect_loot(cx: &mut ActionContext<'_>) -> u32 {
    let origin = cx.env.player_position();
    let mut loot = cx.env.find_entities(&EntityQuery::new(EntityKind::GroundItem));
    loot.sort_by(|a, b| {
        a.position
            .distance_to(origin)
            .total_cmp(&b.position.distance_to(origin))
    });

    let mut taken = 0;
    for item in loot {
        let Some(resource) = Resource::from_item_name(&item.name) else {
            tracing::debug!("ignoring unknown loot {}", item.name);
            continue;
        };
        let high_priority = resource.is_high_priority_loot();
        if !cx.ledger.needs(resource) && !high_priority {
            tracing::debug!("skipping unnecessary loot {}", item.name);
            continue;
        }
        if cx.env.is_inventory_full() && high_priority {
            drop_filler(cx, 1);
        }
        if cx.env.is_inventory_full() && !cx.env.inventory_contains(&item.name) {
            cx.report(format!("No space for {}", item.name));
            continue;
        }

        let before = cx.env.inventory_count(&item.name);
        if !cx.env.interact(&item, "Take") {
            tracing::warn!("failed to take {}", item.name);
            continue;
        }
        let name = item.name.clone();
        cx.env
            .wait_until(&mut |env| env.inventory_count(&name) > before, cx.config.timings.loot);
        let gained = cx.env.inventory_count(&name).saturating_sub(before);
        if gained > 0 {
            cx.ledger.increment(resource, i64::from(gained));
            cx.report(format!("Looted {} x{}", name, gained));
            taken += 1;
        }
    }
    taken
}
