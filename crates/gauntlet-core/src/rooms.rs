use std::collections::HashSet;

use crate::geometry::RoomKey;

/// Rooms already confirmed accessible during the current run. Append-only
/// until [`reset`](Self::reset).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomVisitLedger {
    rooms: HashSet<RoomKey>,
}

impl RoomVisitLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the room was already known.
    pub fn record(&mut self, room: RoomKey) -> bool {
        let inserted = self.rooms.insert(room);
        if inserted {
            tracing::debug!("{} marked accessible", room);
        }
        inserted
    }

    pub fn contains(&self, room: RoomKey) -> bool {
        self.rooms.contains(&room)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn reset(&mut self) {
        self.rooms.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;

    #[test]
    fn tiles_of_one_room_share_a_key() {
        let mut rooms = RoomVisitLedger::new();
        assert!(rooms.record(Position::new(1906, 5677, 1).room()));
        assert!(rooms.contains(Position::new(1917, 5666, 1).room()));
        assert!(!rooms.record(Position::new(1910, 5670, 1).room()));
        assert!(!rooms.contains(Position::new(1920, 5670, 1).room()));
        assert_eq!(rooms.len(), 1);
    }
}
