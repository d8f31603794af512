use crate::error::ActionError;

use super::{ActionContext, LeafAction, Outcome};

/// Selected when the run is inactive. Pauses for one tick interval.
#[derive(Debug, Default)]
pub struct IdleAction;

impl LeafAction for IdleAction {
    fn execute(&mut self, cx: &mut ActionContext<'_>) -> Result<Outcome, ActionError> {
        tracing::debug!("idle tick");
        cx.env.delay(cx.config.timings.tick);
        Ok(Outcome::Completed)
    }
}
