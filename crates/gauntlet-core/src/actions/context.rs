use crate::config::RunConfig;
use crate::gateway::Gateway;
use crate::ledger::ProgressLedger;
use crate::rooms::RoomVisitLedger;
use crate::run::RunState;
use crate::status::StatusSink;

use super::Outcome;

/// Everything a leaf action may read or mutate during one execution.
pub struct ActionContext<'a> {
    pub ledger: &'a mut ProgressLedger,
    pub run: &'a mut RunState,
    pub rooms: &'a mut RoomVisitLedger,
    pub env: &'a mut dyn Gateway,
    pub status: &'a mut dyn StatusSink,
    pub config: &'a RunConfig,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        ledger: &'a mut ProgressLedger,
        run: &'a mut RunState,
        rooms: &'a mut RoomVisitLedger,
        env: &'a mut dyn Gateway,
        status: &'a mut dyn StatusSink,
        config: &'a RunConfig,
    ) -> Self {
        Self {
            ledger,
            run,
            rooms,
            env,
            status,
            config,
        }
    }

    /// Logs and surfaces a routine sub-step.
    pub fn report(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        tracing::info!("{}", message);
        self.status.update_status(message);
    }

    /// Logs a soft failure and builds the matching outcome.
    pub fn soft_failure(&mut self, message: impl Into<String>) -> Outcome {
        let message = message.into();
        tracing::warn!("{}", message);
        self.status.update_status(&message);
        Outcome::SoftFailure(message)
    }
}
