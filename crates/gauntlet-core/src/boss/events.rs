use std::collections::HashSet;

use crate::gateway::DamageEvent;

/// Edge detector over a displayed damage-event list.
///
/// Remembers the ids shown on the previous observation, so an event that
/// stays on screen across several ticks is reported once.
#[derive(Clone, Debug, Default)]
pub struct DamageTracker {
    seen: HashSet<u64>,
}

impl DamageTracker {
    /// Seeds the tracker so events already on screen are not reported.
    pub fn primed(events: &[DamageEvent]) -> Self {
        Self {
            seen: events.iter().map(|event| event.id).collect(),
        }
    }

    /// Returns the events not present on the previous observation.
    pub fn observe(&mut self, events: &[DamageEvent]) -> Vec<DamageEvent> {
        let fresh: Vec<DamageEvent> = events
            .iter()
            .filter(|event| !self.seen.contains(&event.id))
            .copied()
            .collect();
        self.seen = events.iter().map(|event| event.id).collect();
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: u64) -> DamageEvent {
        DamageEvent { id, amount: 7 }
    }

    #[test]
    fn same_event_is_reported_once() {
        let mut tracker = DamageTracker::default();
        assert_eq!(tracker.observe(&[hit(1)]), vec![hit(1)]);
        assert!(tracker.observe(&[hit(1)]).is_empty());
        assert_eq!(tracker.observe(&[hit(1), hit(2)]), vec![hit(2)]);
    }

    #[test]
    fn equal_amounts_with_new_ids_still_count() {
        let mut tracker = DamageTracker::primed(&[hit(4)]);
        assert_eq!(tracker.observe(&[hit(4), hit(5)]).len(), 1);
    }
}
