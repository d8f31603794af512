//! Outbound status surface.

/// Receives the human-readable trace of a run.
///
/// `update_status` is called on every scheduler decision and significant
/// sub-step. `stop_run` is terminal and carries a reason distinct from any
/// routine update.
pub trait StatusSink {
    fn update_status(&mut self, message: &str);

    fn stop_run(&mut self, reason: &str);
}

/// Discards everything. Useful when only the ledger effects matter.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStatus;

impl StatusSink for NullStatus {
    fn update_status(&mut self, _message: &str) {}

    fn stop_run(&mut self, _reason: &str) {}
}
