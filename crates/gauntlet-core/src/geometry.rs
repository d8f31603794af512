//! Tile coordinates, rectangular areas and the 16x16 room grid.

use std::fmt;

/// Side length of one dungeon room, in tiles.
pub const ROOM_SIZE: i32 = 16;

/// World tile coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }

    /// Euclidean distance in tiles. Positions on different planes are
    /// infinitely far apart.
    pub fn distance_to(&self, other: Position) -> f64 {
        if self.plane != other.plane {
            return f64::INFINITY;
        }
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.plane)
    }

    /// The room this tile belongs to.
    pub fn room(&self) -> RoomKey {
        RoomKey {
            x: self.x.div_euclid(ROOM_SIZE),
            y: self.y.div_euclid(ROOM_SIZE),
            plane: self.plane,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.plane)
    }
}

/// Identifies one room of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomKey {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl RoomKey {
    /// South-west tile of the room.
    pub const fn origin(&self) -> Position {
        Position::new(self.x * ROOM_SIZE, self.y * ROOM_SIZE, self.plane)
    }

    /// All tiles of the room.
    pub const fn area(&self) -> Area {
        let origin = self.origin();
        Area::new(
            origin.offset(0, ROOM_SIZE - 1),
            origin.offset(ROOM_SIZE - 1, 0),
        )
    }

    pub const fn neighbor(&self, side: Cardinal) -> RoomKey {
        let (dx, dy) = match side {
            Cardinal::North => (0, 1),
            Cardinal::East => (1, 0),
            Cardinal::South => (0, -1),
            Cardinal::West => (-1, 0),
        };
        RoomKey {
            x: self.x + dx,
            y: self.y + dy,
            plane: self.plane,
        }
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room[{}, {}, {}]", self.x, self.y, self.plane)
    }
}

/// Axis-aligned rectangle given by its north-west and south-east corners,
/// both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Area {
    pub northwest: Position,
    pub southeast: Position,
}

impl Area {
    pub const fn new(northwest: Position, southeast: Position) -> Self {
        Self {
            northwest,
            southeast,
        }
    }

    /// Square of side `2 * radius + 1` centred on `center`.
    pub const fn around(center: Position, radius: i32) -> Self {
        Self::new(
            center.offset(-radius, radius),
            center.offset(radius, -radius),
        )
    }

    pub fn contains(&self, position: Position) -> bool {
        position.plane == self.northwest.plane
            && position.x >= self.northwest.x
            && position.x <= self.southeast.x
            && position.y >= self.southeast.y
            && position.y <= self.northwest.y
    }

    /// Every tile of the rectangle, column by column.
    pub fn tiles(&self) -> impl Iterator<Item = Position> + '_ {
        let plane = self.northwest.plane;
        (self.northwest.x..=self.southeast.x).flat_map(move |x| {
            (self.southeast.y..=self.northwest.y).map(move |y| Position::new(x, y, plane))
        })
    }

    pub fn center(&self) -> Position {
        Position::new(
            (self.northwest.x + self.southeast.x) / 2,
            (self.northwest.y + self.southeast.y) / 2,
            self.northwest.plane,
        )
    }
}

/// Passage directions in the order they are attempted when opening a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

impl Cardinal {
    /// Offsets, relative to the room origin, of the two lightable nodes that
    /// flank the passage on this side.
    pub const fn node_offsets(self) -> [(i32, i32); 2] {
        match self {
            Cardinal::North => [(6, 14), (9, 14)],
            Cardinal::East => [(14, 9), (14, 6)],
            Cardinal::South => [(9, 1), (6, 1)],
            Cardinal::West => [(1, 6), (1, 9)],
        }
    }

    pub fn nodes(self, room: RoomKey) -> [Position; 2] {
        let origin = room.origin();
        self.node_offsets().map(|(dx, dy)| origin.offset(dx, dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn door_nodes_match_standard_starting_room() {
        let room = Position::new(1910, 5670, 1).room();
        assert_eq!(
            Cardinal::North.nodes(room),
            [Position::new(1910, 5678, 1), Position::new(1913, 5678, 1)]
        );
        assert_eq!(
            Cardinal::West.nodes(room),
            [Position::new(1905, 5670, 1), Position::new(1905, 5673, 1)]
        );
    }

    #[test]
    fn door_nodes_match_hard_starting_room() {
        let room = Position::new(1975, 5670, 1).room();
        assert_eq!(
            Cardinal::East.nodes(room),
            [Position::new(1982, 5673, 1), Position::new(1982, 5670, 1)]
        );
        assert_eq!(
            Cardinal::South.nodes(room),
            [Position::new(1977, 5665, 1), Position::new(1974, 5665, 1)]
        );
    }

    #[test]
    fn area_tiles_cover_rectangle_inclusively() {
        let area = Area::new(Position::new(0, 2, 0), Position::new(1, 0, 0));
        let tiles: Vec<_> = area.tiles().collect();
        assert_eq!(tiles.len(), 6);
        assert!(tiles.iter().all(|tile| area.contains(*tile)));
        assert!(!area.contains(Position::new(2, 0, 0)));
        assert!(!area.contains(Position::new(0, 0, 1)));
    }

    #[test]
    fn neighbor_rooms_share_an_edge() {
        let room = Position::new(1910, 5670, 1).room();
        let north = room.neighbor(Cardinal::North);
        assert_eq!(north.origin(), room.origin().offset(0, ROOM_SIZE));
        assert!(north.area().contains(Position::new(1910, 5680, 1)));
        assert!(!room.area().contains(Position::new(1910, 5680, 1)));
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0, 0, 0);
        assert_eq!(a.distance_to(Position::new(3, 4, 0)), 5.0);
        assert!(a.distance_to(Position::new(0, 0, 1)).is_infinite());
    }
}
