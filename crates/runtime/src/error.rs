//! Errors surfaced by the run driver.
use thiserror::Error;

use gauntlet_core::{ActionError, ActionKind};

pub type Result<T> = std::result::Result<T, RunError>;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("run already stopped")]
    AlreadyStopped,

    #[error("hand-off chain exceeded its bound at {0}")]
    HandOffLoop(ActionKind),
}
