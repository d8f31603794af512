//! Capability interface onto the live environment.
//!
//! The decision core never touches the world directly; every query and
//! interaction goes through [`Gateway`]. Inventory contents are exposed as
//! entities of kind [`EntityKind::InventoryItem`] so they can be interacted
//! with like anything else.

use std::fmt;

use rand::Rng;

use crate::error::GatewayError;
use crate::geometry::{Area, Position};

/// Number of inventory slots.
pub const INVENTORY_CAPACITY: u32 = 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum EntityKind {
    Npc,
    Object,
    GroundItem,
    InventoryItem,
}

/// Handle to something the environment can see.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub id: u64,
    pub kind: EntityKind,
    pub name: String,
    pub position: Position,
    /// Stack size for items, 1 for everything else.
    pub quantity: u32,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{} at {}", self.name, self.id, self.position)
    }
}

/// Filter for entity lookups. An empty name list matches any name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityQuery {
    pub kind: EntityKind,
    pub names: Vec<String>,
    pub area: Option<Area>,
}

impl EntityQuery {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            names: Vec::new(),
            area: None,
        }
    }

    pub fn npc(name: impl Into<String>) -> Self {
        Self::new(EntityKind::Npc).named(name)
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::new(EntityKind::Object).named(name)
    }

    pub fn ground_item(name: impl Into<String>) -> Self {
        Self::new(EntityKind::GroundItem).named(name)
    }

    pub fn inventory(name: impl Into<String>) -> Self {
        Self::new(EntityKind::InventoryItem).named(name)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn any_of<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn within(mut self, area: Area) -> Self {
        self.area = Some(area);
        self
    }

    /// Names compare case-insensitively; inventory items also match when the
    /// item name only adds a dose suffix such as `"Egniol potion (3)"`.
    pub fn matches(&self, entity: &Entity) -> bool {
        if entity.kind != self.kind {
            return false;
        }
        if self.area.is_some_and(|area| !area.contains(entity.position)) {
            return false;
        }
        self.names.is_empty() || self.names.iter().any(|name| name_matches(name, &entity.name))
    }
}

fn name_matches(wanted: &str, actual: &str) -> bool {
    if wanted.eq_ignore_ascii_case(actual) {
        return true;
    }
    actual.rsplit_once(" (").is_some_and(|(base, suffix)| {
        base.eq_ignore_ascii_case(wanted)
            && suffix
                .strip_suffix(')')
                .is_some_and(|doses| !doses.is_empty() && doses.bytes().all(|b| b.is_ascii_digit()))
    })
}

/// Bounds for a randomised pause or poll timeout, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayWindow {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayWindow {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub const fn fixed(ms: u64) -> Self {
        Self::new(ms, ms)
    }

    /// Picks a duration inside the window.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        if self.max_ms <= self.min_ms {
            self.min_ms
        } else {
            rng.gen_range(self.min_ms..=self.max_ms)
        }
    }
}

impl fmt::Display for DelayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}ms", self.min_ms, self.max_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Vital {
    Health,
    Prayer,
}

/// Defensive posture. Each one blocks one attack style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Posture {
    ProtectFromMagic,
    ProtectFromMissiles,
    ProtectFromMelee,
}

/// Whose damage-event list is being read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Subject {
    Player,
    Boss,
}

/// One hit splat. Identity is the `id`; two events with equal amounts are
/// still distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DamageEvent {
    pub id: u64,
    pub amount: u32,
}

/// Everything the decision core needs from the environment.
pub trait Gateway {
    /// Fails only when the environment can no longer be reached at all.
    fn connection(&self) -> Result<(), GatewayError>;

    /// Monotonic clock in milliseconds.
    fn clock_ms(&self) -> u64;

    fn player_position(&self) -> Position;

    /// Every entity matching `query`, in no particular order.
    fn find_entities(&self, query: &EntityQuery) -> Vec<Entity>;

    /// Nearest entity matching `query`.
    fn find_entity(&self, query: &EntityQuery) -> Option<Entity> {
        let origin = self.player_position();
        self.find_entities(query).into_iter().min_by(|a, b| {
            a.position
                .distance_to(origin)
                .total_cmp(&b.position.distance_to(origin))
                .then(a.id.cmp(&b.id))
        })
    }

    fn interact(&mut self, entity: &Entity, action: &str) -> bool;

    /// Polls `condition` until it holds or a timeout drawn from `window`
    /// elapses. Returns false on timeout.
    fn wait_until(
        &mut self,
        condition: &mut dyn FnMut(&dyn Gateway) -> bool,
        window: DelayWindow,
    ) -> bool;

    fn delay(&mut self, window: DelayWindow);

    /// Percentage in `0..=100`.
    fn read_vital(&self, vital: Vital) -> u8;

    fn walk_to(&mut self, destination: Position) -> bool;

    /// Picks an option in an open menu or production interface.
    fn choose_menu_option(&mut self, label: &str) -> bool;

    fn normalize_camera(&mut self) -> bool;

    fn equipped_weapon(&self) -> Option<String>;

    fn active_posture(&self) -> Option<Posture>;

    fn activate_posture(&mut self, posture: Posture) -> bool;

    /// Damage events currently displayed over `subject`.
    fn damage_events(&self, subject: Subject) -> Vec<DamageEvent>;

    /// Raw marker value of a tile; hazards change it.
    fn tile_marker(&self, tile: Position) -> i32;

    /// Tiles currently covered by a hazardous effect.
    fn hazards(&self) -> Vec<Position>;

    fn inventory_count(&self, name: &str) -> u32 {
        self.find_entities(&EntityQuery::inventory(name))
            .iter()
            .map(|item| item.quantity)
            .sum()
    }

    fn inventory_contains(&self, name: &str) -> bool {
        self.inventory_count(name) > 0
    }

    fn inventory_used_slots(&self) -> u32 {
        self.find_entities(&EntityQuery::new(EntityKind::InventoryItem))
            .len() as u32
    }

    fn inventory_free_slots(&self) -> u32 {
        INVENTORY_CAPACITY.saturating_sub(self.inventory_used_slots())
    }

    fn is_inventory_full(&self) -> bool {
        self.inventory_free_slots() == 0
    }
}
