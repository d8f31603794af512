//! Deterministic in-memory environment.
//!
//! [`ScriptedGateway`] implements [`Gateway`] over a hand-built world with a
//! fake millisecond clock. Delays and bounded waits advance the clock instead
//! of sleeping, so a three-minute search finishes instantly. Interactions
//! follow a small set of built-in rules (attacking kills, gathering yields one
//! item, dropping removes it) and every attempt is logged for assertions.

use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::GatewayError;
use crate::gateway::{
    DamageEvent, DelayWindow, Entity, EntityKind, EntityQuery, Gateway, INVENTORY_CAPACITY,
    Posture, Subject, Vital,
};
use crate::geometry::Position;
use crate::status::StatusSink;

/// Default granularity of [`Gateway::wait_until`] polling.
pub const DEFAULT_POLL_MS: u64 = 100;

/// Entities farther than this from the player are not visible.
pub const DEFAULT_VIEW_RADIUS: f64 = 40.0;

/// One attempted interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interaction {
    pub target: String,
    pub action: String,
    pub succeeded: bool,
}

pub struct ScriptedGateway {
    clock_ms: u64,
    poll_ms: u64,
    view_radius: f64,
    rng: StdRng,
    next_id: u64,
    player: Position,
    entities: Vec<Entity>,
    health: u8,
    prayer: u8,
    heal_per_food: u8,
    equipped: Option<String>,
    posture: Option<Posture>,
    damage: HashMap<Subject, Vec<DamageEvent>>,
    markers: HashMap<Position, i32>,
    hazards: Vec<Position>,
    hits_to_kill: HashMap<String, u32>,
    wounds: HashMap<u64, u32>,
    drops: HashMap<String, Vec<(String, u32)>>,
    entry_destination: Option<Position>,
    teleport_destination: Option<Position>,
    defeat_destinations: HashMap<String, Position>,
    failing: HashSet<String>,
    menu_open: bool,
    reachable: bool,
    camera_normalizations: u32,
    log: Vec<Interaction>,
}

impl ScriptedGateway {
    pub fn new(player: Position) -> Self {
        Self::with_seed(player, 0)
    }

    pub fn with_seed(player: Position, seed: u64) -> Self {
        Self {
            clock_ms: 0,
            poll_ms: DEFAULT_POLL_MS,
            view_radius: DEFAULT_VIEW_RADIUS,
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
            player,
            entities: Vec::new(),
            health: 100,
            prayer: 100,
            heal_per_food: 20,
            equipped: None,
            posture: None,
            damage: HashMap::new(),
            markers: HashMap::new(),
            hazards: Vec::new(),
            hits_to_kill: HashMap::new(),
            wounds: HashMap::new(),
            drops: HashMap::new(),
            entry_destination: None,
            teleport_destination: None,
            defeat_destinations: HashMap::new(),
            failing: HashSet::new(),
            menu_open: false,
            reachable: true,
            camera_normalizations: 0,
            log: Vec::new(),
        }
    }

    pub fn with_poll_ms(mut self, poll_ms: u64) -> Self {
        self.poll_ms = poll_ms.max(1);
        self
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn spawn(&mut self, kind: EntityKind, name: &str, position: Position, quantity: u32) -> u64 {
        let id = self.allocate_id();
        self.entities.push(Entity {
            id,
            kind,
            name: name.to_string(),
            position,
            quantity,
        });
        id
    }

    pub fn spawn_npc(&mut self, name: &str, position: Position) -> u64 {
        self.spawn(EntityKind::Npc, name, position, 1)
    }

    pub fn spawn_object(&mut self, name: &str, position: Position) -> u64 {
        self.spawn(EntityKind::Object, name, position, 1)
    }

    pub fn spawn_ground_item(&mut self, name: &str, position: Position, quantity: u32) -> u64 {
        self.spawn(EntityKind::GroundItem, name, position, quantity)
    }

    /// Adds `count` single-slot items to the inventory.
    pub fn give(&mut self, name: &str, count: u32) {
        let position = self.player;
        for _ in 0..count {
            self.spawn(EntityKind::InventoryItem, name, position, 1);
        }
    }

    /// Adds to (or creates) one stacked inventory slot.
    pub fn give_stack(&mut self, name: &str, quantity: u32) {
        let existing = self
            .entities
            .iter_mut()
            .find(|e| e.kind == EntityKind::InventoryItem && e.name == name);
        match existing {
            Some(stack) => stack.quantity += quantity,
            None => {
                let position = self.player;
                self.spawn(EntityKind::InventoryItem, name, position, quantity);
            }
        }
    }

    pub fn despawn(&mut self, id: u64) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    pub fn despawn_named(&mut self, name: &str) {
        self.entities.retain(|e| e.name != name);
    }

    pub fn set_player(&mut self, position: Position) {
        self.player = position;
    }

    pub fn set_vital(&mut self, vital: Vital, value: u8) {
        match vital {
            Vital::Health => self.health = value.min(100),
            Vital::Prayer => self.prayer = value.min(100),
        }
    }

    pub fn set_equipped(&mut self, weapon: Option<&str>) {
        self.equipped = weapon.map(str::to_string);
    }

    /// Attacks needed before an NPC with this name dies. Defaults to one.
    pub fn set_hits_to_kill(&mut self, name: &str, hits: u32) {
        self.hits_to_kill.insert(name.to_string(), hits.max(1));
    }

    /// Ground items left behind when an NPC with this name dies.
    pub fn set_drops(&mut self, name: &str, items: &[(&str, u32)]) {
        self.drops.insert(
            name.to_string(),
            items.iter().map(|(item, qty)| (item.to_string(), *qty)).collect(),
        );
    }

    pub fn set_entry_destination(&mut self, position: Position) {
        self.entry_destination = Some(position);
    }

    pub fn set_teleport_destination(&mut self, position: Position) {
        self.teleport_destination = Some(position);
    }

    /// Moves the player to `position` when the named NPC dies.
    pub fn set_defeat_destination(&mut self, name: &str, position: Position) {
        self.defeat_destinations.insert(name.to_string(), position);
    }

    pub fn push_damage(&mut self, subject: Subject, id: u64, amount: u32) {
        self.damage
            .entry(subject)
            .or_default()
            .push(DamageEvent { id, amount });
    }

    pub fn clear_damage(&mut self, subject: Subject) {
        self.damage.remove(&subject);
    }

    pub fn set_marker(&mut self, tile: Position, value: i32) {
        self.markers.insert(tile, value);
    }

    pub fn add_hazard(&mut self, tile: Position) {
        self.hazards.push(tile);
    }

    pub fn clear_hazards(&mut self) {
        self.hazards.clear();
    }

    /// Makes every interaction whose action label, target name or menu label
    /// equals `label` fail.
    pub fn fail(&mut self, label: &str) {
        self.failing.insert(label.to_string());
    }

    pub fn set_reachable(&mut self, reachable: bool) {
        self.reachable = reachable;
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.log
    }

    /// Successful interactions carrying `action`.
    pub fn count_interactions(&self, action: &str) -> usize {
        self.log
            .iter()
            .filter(|entry| entry.succeeded && entry.action == action)
            .count()
    }

    pub fn position(&self) -> Position {
        self.player
    }

    pub fn camera_normalizations(&self) -> u32 {
        self.camera_normalizations
    }

    pub fn health(&self) -> u8 {
        self.health
    }

    fn visible(&self, entity: &Entity) -> bool {
        entity.kind == EntityKind::InventoryItem
            || entity.position.distance_to(self.player) <= self.view_radius
    }

    fn used_slots(&self) -> u32 {
        self.entities
            .iter()
            .filter(|e| e.kind == EntityKind::InventoryItem)
            .count() as u32
    }

    fn is_stackable(name: &str) -> bool {
        name.ends_with("Shards") || name.ends_with("Dust")
    }

    fn remove_one(&mut self, id: u64) {
        if let Some(item) = self.entities.iter_mut().find(|e| e.id == id) {
            if item.quantity > 1 {
                item.quantity -= 1;
                return;
            }
        }
        self.despawn(id);
    }

    fn apply(&mut self, entity: &Entity, action: &str) -> bool {
        if !self.entities.iter().any(|e| e.id == entity.id) {
            return false;
        }
        match (entity.kind, action) {
            (EntityKind::Npc, "Attack") => {
                let needed = self.hits_to_kill.get(&entity.name).copied().unwrap_or(1);
                let wounds = self.wounds.entry(entity.id).or_insert(0);
                *wounds += 1;
                let dead = *wounds >= needed;
                if entity.name.ends_with("Hunllef") {
                    let id = self.allocate_id();
                    self.push_damage(Subject::Boss, id, 10);
                }
                if dead {
                    self.despawn(entity.id);
                    let loot = self.drops.get(&entity.name).cloned().unwrap_or_default();
                    for (item, quantity) in loot {
                        self.spawn_ground_item(&item, entity.position, quantity);
                    }
                    if let Some(destination) = self.defeat_destinations.get(&entity.name) {
                        self.player = *destination;
                    }
                }
                true
            }
            (EntityKind::GroundItem, "Take") => {
                let stacks = Self::is_stackable(&entity.name)
                    && self
                        .entities
                        .iter()
                        .any(|e| e.kind == EntityKind::InventoryItem && e.name == entity.name);
                if !stacks && self.used_slots() >= INVENTORY_CAPACITY {
                    return false;
                }
                self.despawn(entity.id);
                if Self::is_stackable(&entity.name) {
                    self.give_stack(&entity.name, entity.quantity);
                } else {
                    self.give(&entity.name, entity.quantity.max(1));
                }
                true
            }
            (EntityKind::InventoryItem, "Drop") => {
                self.despawn(entity.id);
                true
            }
            (EntityKind::InventoryItem, "Eat") => {
                self.remove_one(entity.id);
                self.health = self.health.saturating_add(self.heal_per_food).min(100);
                true
            }
            (EntityKind::InventoryItem, "Drink") => {
                self.remove_one(entity.id);
                self.prayer = self.prayer.saturating_add(25).min(100);
                true
            }
            (EntityKind::InventoryItem, "Wield") => {
                self.despawn(entity.id);
                if let Some(previous) = self.equipped.replace(entity.name.clone()) {
                    self.give(&previous, 1);
                }
                true
            }
            (EntityKind::InventoryItem, "Wear") => {
                self.despawn(entity.id);
                true
            }
            (EntityKind::InventoryItem, "Teleport") => match self.teleport_destination {
                Some(destination) => {
                    self.player = destination;
                    true
                }
                None => false,
            },
            (EntityKind::Object, "Gather") => {
                if self.used_slots() >= INVENTORY_CAPACITY {
                    return false;
                }
                self.give(&entity.name, 1);
                true
            }
            (EntityKind::Object, "Sing-crystal") => {
                self.menu_open = true;
                true
            }
            (EntityKind::Object, "Deposit") => {
                self.entities.retain(|e| e.kind != EntityKind::InventoryItem);
                true
            }
            (EntityKind::Object, "Enter") | (EntityKind::Object, "Enter-corrupted") => {
                match self.entry_destination {
                    Some(destination) => {
                        self.player = destination;
                        true
                    }
                    None => false,
                }
            }
            _ => true,
        }
    }
}

impl Gateway for ScriptedGateway {
    fn connection(&self) -> Result<(), GatewayError> {
        if self.reachable {
            Ok(())
        } else {
            Err(GatewayError::Unreachable("scripted world disconnected".to_string()))
        }
    }

    fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    fn player_position(&self) -> Position {
        self.player
    }

    fn find_entities(&self, query: &EntityQuery) -> Vec<Entity> {
        self.entities
            .iter()
            .filter(|entity| self.visible(entity) && query.matches(entity))
            .cloned()
            .collect()
    }

    fn interact(&mut self, entity: &Entity, action: &str) -> bool {
        let succeeded = !self.failing.contains(action)
            && !self.failing.contains(&entity.name)
            && self.apply(entity, action);
        tracing::debug!("scripted {} on {} -> {}", action, entity, succeeded);
        self.log.push(Interaction {
            target: entity.name.clone(),
            action: action.to_string(),
            succeeded,
        });
        succeeded
    }

    fn wait_until(
        &mut self,
        condition: &mut dyn FnMut(&dyn Gateway) -> bool,
        window: DelayWindow,
    ) -> bool {
        let timeout = window.sample(&mut self.rng);
        let started = self.clock_ms;
        loop {
            if condition(&*self) {
                return true;
            }
            if self.clock_ms - started >= timeout {
                return false;
            }
            self.clock_ms += self.poll_ms;
        }
    }

    fn delay(&mut self, window: DelayWindow) {
        self.clock_ms += window.sample(&mut self.rng);
    }

    fn read_vital(&self, vital: Vital) -> u8 {
        match vital {
            Vital::Health => self.health,
            Vital::Prayer => self.prayer,
        }
    }

    fn walk_to(&mut self, destination: Position) -> bool {
        if self.failing.contains("Walk") {
            return false;
        }
        self.player = destination;
        true
    }

    fn choose_menu_option(&mut self, label: &str) -> bool {
        if !self.menu_open || self.failing.contains(label) {
            return false;
        }
        if Self::is_stackable(label) {
            self.give_stack(label, 1);
        } else {
            self.give(label, 1);
        }
        true
    }

    fn normalize_camera(&mut self) -> bool {
        self.camera_normalizations += 1;
        true
    }

    fn equipped_weapon(&self) -> Option<String> {
        self.equipped.clone()
    }

    fn active_posture(&self) -> Option<Posture> {
        self.posture
    }

    fn activate_posture(&mut self, posture: Posture) -> bool {
        self.posture = Some(posture);
        true
    }

    fn damage_events(&self, subject: Subject) -> Vec<DamageEvent> {
        self.damage.get(&subject).cloned().unwrap_or_default()
    }

    fn tile_marker(&self, tile: Position) -> i32 {
        self.markers.get(&tile).copied().unwrap_or(0)
    }

    fn hazards(&self) -> Vec<Position> {
        self.hazards.clone()
    }
}

/// Records every status update and stop request.
#[derive(Clone, Debug, Default)]
pub struct RecordingStatus {
    pub updates: Vec<String>,
    pub stops: Vec<String>,
}

impl RecordingStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_update(&self) -> Option<&str> {
        self.updates.last().map(String::as_str)
    }
}

impl StatusSink for RecordingStatus {
    fn update_status(&mut self, message: &str) {
        self.updates.push(message.to_string());
    }

    fn stop_run(&mut self, reason: &str) {
        self.stops.push(reason.to_string());
    }
}
