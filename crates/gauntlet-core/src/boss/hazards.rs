use std::collections::{HashMap, HashSet};

use crate::gateway::Gateway;
use crate::geometry::{Area, Position};

/// Tile markers of the encounter room captured when the encounter begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HazardMap {
    room: Area,
    baseline: HashMap<Position, i32>,
}

impl HazardMap {
    pub fn snapshot(env: &dyn Gateway, room: Area) -> Self {
        let baseline = room.tiles().map(|tile| (tile, env.tile_marker(tile))).collect();
        Self { room, baseline }
    }

    pub fn room(&self) -> Area {
        self.room
    }

    /// A tile is safe while its marker still equals the baseline and no
    /// hazard occupies it.
    pub fn is_safe(&self, env: &dyn Gateway, tile: Position, hazards: &HashSet<Position>) -> bool {
        self.baseline
            .get(&tile)
            .is_some_and(|marker| *marker == env.tile_marker(tile))
            && !hazards.contains(&tile)
    }

    /// Nearest currently safe tile by Euclidean distance. Ties keep the first
    /// tile in scan order.
    pub fn nearest_safe(&self, env: &dyn Gateway, from: Position) -> Option<Position> {
        let hazards: HashSet<Position> = env.hazards().into_iter().collect();
        let mut best: Option<(Position, f64)> = None;
        for tile in self.room.tiles() {
            if !self.is_safe(env, tile, &hazards) {
                continue;
            }
            let distance = tile.distance_to(from);
            if best.is_none_or(|(_, nearest)| distance < nearest) {
                best = Some((tile, distance));
            }
        }
        best.map(|(tile, _)| tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ScriptedGateway;

    fn room() -> Area {
        Area::new(Position::new(0, 4, 0), Position::new(4, 0, 0))
    }

    #[test]
    fn changed_markers_and_hazards_are_unsafe() {
        let mut world = ScriptedGateway::new(Position::new(2, 2, 0));
        let map = HazardMap::snapshot(&world, room());

        world.set_marker(Position::new(2, 2, 0), 9);
        world.add_hazard(Position::new(2, 3, 0));
        let nearest = map.nearest_safe(&world, Position::new(2, 2, 0));
        assert_eq!(nearest, Some(Position::new(1, 2, 0)));
    }

    #[test]
    fn no_safe_tile_yields_none() {
        let mut world = ScriptedGateway::new(Position::new(0, 0, 0));
        let map = HazardMap::snapshot(&world, room());
        for tile in room().tiles() {
            world.add_hazard(tile);
        }
        assert_eq!(map.nearest_safe(&world, Position::new(0, 0, 0)), None);
    }
}
