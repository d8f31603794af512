//! Entry into the challenge from the lobby.

use crate::error::ActionError;
use crate::gateway::{DelayWindow, EntityQuery, Gateway};

use super::traversal::open_passage;
use super::{ActionContext, LeafAction, Outcome};

pub const LOBBY_NPC: &str = "Bryn";
pub const LOBBY_CHEST: &str = "Reward Chest";
pub const ENTRANCE: &str = "The Gauntlet";

/// Reason passed to the status surface when the lobby never shows up.
pub const STARTING_ROOM_TIMEOUT_REASON: &str = "Error: Not in the starting area. Stopping run.";

/// Both lobby landmarks are visible.
pub fn in_lobby(env: &dyn Gateway) -> bool {
    env.find_entity(&EntityQuery::npc(LOBBY_NPC)).is_some()
        && env.find_entity(&EntityQuery::object(LOBBY_CHEST)).is_some()
}

/// Waits for the lobby, enters, and opens the first passage.
///
/// Failing to see the lobby within the configured window is the one fatal
/// path of a run: the action calls `stop_run` once and returns
/// [`Outcome::Stopped`].
#[derive(Debug, Default)]
pub struct StartingRoomCheck {
    camera_normalized: bool,
}

impl StartingRoomCheck {
    fn await_lobby(&self, cx: &mut ActionContext<'_>) -> bool {
        let timings = cx.config.timings;
        let started = cx.env.clock_ms();
        loop {
            if in_lobby(&*cx.env) {
                return true;
            }
            let elapsed = cx.env.clock_ms().saturating_sub(started);
            if elapsed >= timings.start_wait_ms {
                return false;
            }
            tracing::debug!("lobby not visible after {}ms", elapsed);
            cx.status
                .update_status("Bryn or the reward chest not found. Rechecking...");
            cx.env.delay(DelayWindow::fixed(timings.start_poll_ms));
        }
    }

    fn enter(&self, cx: &mut ActionContext<'_>) -> Result<(), String> {
        let Some(entrance) = cx.env.find_entity(&EntityQuery::object(ENTRANCE)) else {
            return Err("Entrance platform not found".to_string());
        };
        let action = cx.run.variant.entry_action();
        if !cx.env.interact(&entrance, action) {
            return Err(format!("Failed to {} the Gauntlet", action.to_lowercase()));
        }
        let departed = cx
            .env
            .wait_until(&mut |env| !in_lobby(env), cx.config.timings.departure);
        if !departed {
            return Err("Failed to leave the starting room".to_string());
        }
        Ok(())
    }
}

impl LeafAction for StartingRoomCheck {
    fn execute(&mut self, cx: &mut ActionContext<'_>) -> Result<Outcome, ActionError> {
        cx.report("Checking for Bryn...");

        if !self.await_lobby(cx) {
            tracing::error!("lobby landmarks not found within {}ms", cx.config.timings.start_wait_ms);
            cx.status.stop_run(STARTING_ROOM_TIMEOUT_REASON);
            cx.run.active = false;
            return Ok(Outcome::Stopped(STARTING_ROOM_TIMEOUT_REASON.to_string()));
        }

        cx.report("Found Bryn, proceeding...");
        if let Err(reason) = self.enter(cx) {
            return Ok(cx.soft_failure(reason));
        }
        cx.report(format!("Entered the {} Gauntlet", cx.run.variant));

        if !self.camera_normalized {
            cx.report("Adjusting camera...");
            self.camera_normalized = cx.env.normalize_camera();
            cx.env.delay(cx.config.timings.interaction);
        }

        if open_passage(cx).is_none() {
            cx.report("Failed to light the first node.");
        }

        cx.run.starting_room_confirmed = true;
        cx.report("Starting room confirmed, entering normal operations");
        Ok(Outcome::Completed)
    }
}
