//! Opening passages into new rooms.

use strum::IntoEnumIterator;

use crate::error::ActionError;
use crate::gateway::EntityQuery;
use crate::geometry::{Area, Cardinal};

use super::{ActionContext, LeafAction, Outcome};

pub const PASSAGE_NODE: &str = "Node";
pub const ILLUMINATED_SYMBOL: &str = "Illuminated Symbol";

/// Tries to light a node beside each passage of the current room, north,
/// east, south then west. Passages leading into rooms already known are
/// tried last. Returns the side that was opened.
///
/// Only the current room is recorded. The room beyond stays unknown until the
/// run stands in it and its own passage is lit or found illuminated.
pub fn open_passage(cx: &mut ActionContext<'_>) -> Option<Cardinal> {
    let room = cx.env.player_position().room();
    let (fresh, known): (Vec<Cardinal>, Vec<Cardinal>) =
        Cardinal::iter().partition(|side| !cx.rooms.contains(room.neighbor(*side)));

    for side in fresh.into_iter().chain(known) {
        for node_tile in side.nodes(room) {
            let query = EntityQuery::object(PASSAGE_NODE).within(Area::around(node_tile, 1));
            let Some(node) = cx.env.find_entity(&query) else {
                continue;
            };
            if !cx.env.interact(&node, "Light") {
                tracing::warn!("failed to light node at {}", node.position);
                continue;
            }
            cx.env.delay(cx.config.timings.interaction);
            cx.rooms.record(room);
            cx.report(format!("Lit the {} passage of {}", side, room));
            return Some(side);
        }
    }
    None
}

/// Records the current room once it is known to be accessible, opening a
/// passage first when needed, then walks into the next room.
#[derive(Debug, Default)]
pub struct TraversalAction;

impl LeafAction for TraversalAction {
    fn execute(&mut self, cx: &mut ActionContext<'_>) -> Result<Outcome, ActionError> {
        let room = cx.env.player_position().room();
        if cx.rooms.contains(room) {
            tracing::debug!("{} already accessible", room);
            return Ok(Outcome::Completed);
        }

        let symbol = EntityQuery::object(ILLUMINATED_SYMBOL).within(room.area());
        if cx.env.find_entity(&symbol).is_some() {
            cx.rooms.record(room);
            cx.report(format!("{} already illuminated", room));
            return Ok(Outcome::Completed);
        }

        let Some(side) = open_passage(cx) else {
            return Ok(cx.soft_failure(format!("No lightable node found in {}", room)));
        };

        let next = room.neighbor(side);
        if !cx.rooms.contains(next) {
            let destination = next.area().center();
            if cx.env.walk_to(destination) {
                cx.env.delay(cx.config.timings.walk);
                cx.report(format!("Moving {} into {}", side, next));
            } else {
                tracing::warn!("could not walk into {}", next);
            }
        }
        Ok(Outcome::Completed)
    }
}
