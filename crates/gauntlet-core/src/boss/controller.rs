use crate::actions::{ActionContext, LeafAction, Outcome, drink_potion, eat_food};
use crate::error::ActionError;
use crate::gateway::{Entity, EntityQuery, Gateway, Posture, Subject, Vital};
use crate::hostile::Hostile;

use super::cycle::AttackCycle;
use super::events::DamageTracker;
use super::hazards::HazardMap;

/// State of one boss encounter. Created the first time the boss is seen,
/// discarded once it disappears or the encounter is abandoned.
#[derive(Clone, Debug)]
pub struct BossEncounterState {
    pub cycle: AttackCycle,
    pub posture: Option<Posture>,
    player_hits: DamageTracker,
    boss_hits: DamageTracker,
    hazards: HazardMap,
    engaged: bool,
}

impl BossEncounterState {
    fn begin(env: &dyn Gateway, hazards: HazardMap) -> Self {
        Self {
            cycle: AttackCycle::default(),
            posture: env.active_posture(),
            player_hits: DamageTracker::primed(&env.damage_events(Subject::Player)),
            boss_hits: DamageTracker::primed(&env.damage_events(Subject::Boss)),
            hazards,
            engaged: false,
        }
    }

    pub fn hazards(&self) -> &HazardMap {
        &self.hazards
    }
}

/// Real-time boss fight, re-entered every tick while the scheduler keeps
/// selecting it.
#[derive(Debug, Default)]
pub struct BossEncounterAction {
    state: Option<BossEncounterState>,
}

impl BossEncounterAction {
    pub fn state(&self) -> Option<&BossEncounterState> {
        self.state.as_ref()
    }

    /// Drops a running encounter without registering a defeat. Returns
    /// whether there was one.
    pub fn abandon(&mut self) -> bool {
        let abandoned = self.state.take().is_some();
        if abandoned {
            tracing::info!("boss encounter abandoned");
        }
        abandoned
    }

    fn restore_vitals(cx: &mut ActionContext<'_>) {
        let health = cx.env.read_vital(Vital::Health);
        let prayer = cx.env.read_vital(Vital::Prayer);
        let safety = cx.config.safety;
        let food = cx.config.inventory.food.clone();
        let potion = cx.config.inventory.potion.clone();

        if health < safety.boss_eat_below && cx.env.inventory_contains(&food) {
            eat_food(cx);
        } else if health < safety.boss_eat_below {
            tracing::warn!("health at {}% with no {} left", health, food);
        }

        if prayer < safety.boss_drink_below && cx.env.inventory_contains(&potion) {
            drink_potion(cx);
        } else if prayer < safety.boss_drink_below {
            tracing::warn!("prayer at {}% with no {} left", prayer, potion);
        }
    }

    fn approach(cx: &mut ActionContext<'_>) -> Outcome {
        let center = cx.run.variant.boss_room().center();
        if cx.env.player_position() == center {
            tracing::debug!("waiting for the boss to appear");
            let window = cx.config.timings.tick;
            cx.env.delay(window);
            return Outcome::Completed;
        }
        cx.report("Walking to the boss room...");
        if !cx.env.walk_to(center) {
            return cx.soft_failure("Failed to walk to the boss room.");
        }
        let window = cx.config.timings.walk;
        cx.env.delay(window);
        Outcome::Completed
    }

    fn attack(cx: &mut ActionContext<'_>, boss: &Entity) {
        if cx.env.interact(boss, "Attack") {
            tracing::debug!("attacking {}", boss);
        } else {
            tracing::warn!("attack on {} failed", boss.name);
        }
    }
}

impl LeafAction for BossEncounterAction {
    fn execute(&mut self, cx: &mut ActionContext<'_>) -> Result<Outcome, ActionError> {
        let variant = cx.run.variant;
        let query = EntityQuery::npc(Hostile::Hunllef.name(variant));

        let Some(boss) = cx.env.find_entity(&query) else {
            if cx.env.read_vital(Vital::Health) == 0 {
                self.abandon();
                return Ok(cx.soft_failure("Died during the boss encounter."));
            }
            if self.state.take().is_some() {
                cx.ledger.register_boss_defeat();
                cx.report("Boss defeated!");
                return Ok(Outcome::Completed);
            }
            return Ok(Self::approach(cx));
        };

        let state = match self.state.as_mut() {
            Some(state) => state,
            None => {
                cx.report("Engaging the boss...");
                let map = HazardMap::snapshot(&*cx.env, variant.boss_room());
                self.state.insert(BossEncounterState::begin(&*cx.env, map))
            }
        };

        Self::restore_vitals(cx);

        let incoming = state
            .player_hits
            .observe(&cx.env.damage_events(Subject::Player));
        for _ in &incoming {
            if state.cycle.advance() {
                tracing::info!("boss switched to {}", state.cycle.style());
            }
        }

        let wanted = state.cycle.style().protection();
        if cx.env.active_posture() != Some(wanted) {
            if cx.env.activate_posture(wanted) {
                state.posture = Some(wanted);
                cx.report(format!("Switching to {}", wanted));
            } else {
                tracing::warn!("failed to activate {}", wanted);
            }
        }

        let mut moved = false;
        let position = cx.env.player_position();
        match state.hazards.nearest_safe(&*cx.env, position) {
            None => {
                tracing::warn!("no safe tile in the boss room");
                let window = cx.config.timings.boss_cycle;
                cx.env.delay(window);
                return Ok(Outcome::Completed);
            }
            Some(tile) if tile == position => {}
            Some(tile) if tile.distance_to(boss.position) > 1.0 => {
                if cx.env.walk_to(tile) {
                    tracing::debug!("moved to safe tile {}", tile);
                    moved = true;
                } else {
                    tracing::warn!("failed to move to safe tile {}", tile);
                }
            }
            Some(tile) => tracing::debug!("staying put, safe tile {} is next to the boss", tile),
        }

        let landed = state.boss_hits.observe(&cx.env.damage_events(Subject::Boss));
        if !landed.is_empty() || !state.engaged || moved {
            Self::attack(cx, &boss);
            state.engaged = true;
        }

        let window = cx.config.timings.boss_cycle;
        cx.env.delay(window);
        Ok(Outcome::Completed)
    }
}
