//! Broadcast status surface.
use tokio::sync::broadcast;

use gauntlet_core::StatusSink;

/// One line of the run's observable trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusEvent {
    /// Routine progress.
    Update(String),
    /// Terminal stop with its reason.
    Stopped(String),
}

/// Single-writer, many-reader status channel.
///
/// Publishing never blocks. Events sent while nobody is subscribed are
/// dropped, and slow subscribers lag instead of holding the driver back.
#[derive(Clone, Debug)]
pub struct StatusBus {
    tx: broadcast::Sender<StatusEvent>,
}

impl StatusBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StatusEvent> {
        self.tx.subscribe()
    }

    pub fn publish(&self, event: StatusEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("no status subscribers");
        }
    }
}

impl StatusSink for StatusBus {
    fn update_status(&mut self, message: &str) {
        self.publish(StatusEvent::Update(message.to_string()));
    }

    fn stop_run(&mut self, reason: &str) {
        tracing::error!("run stopped: {}", reason);
        self.publish(StatusEvent::Stopped(reason.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_see_updates_and_stops_in_order() {
        let mut bus = StatusBus::new(8);
        let mut rx = bus.subscribe();

        bus.update_status("Gathering resources...");
        bus.stop_run("done");

        assert_eq!(
            rx.try_recv().ok(),
            Some(StatusEvent::Update("Gathering resources...".to_string()))
        );
        assert_eq!(rx.try_recv().ok(), Some(StatusEvent::Stopped("done".to_string())));
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let mut bus = StatusBus::new(1);
        bus.update_status("nobody listening");
    }
}
