//! Fighting hostiles that still drop something the run needs.

use crate::error::ActionError;
use crate::gateway::{Entity, EntityKind, EntityQuery, Gateway, Posture};
use crate::hostile::{Hostile, HostileTier};
use crate::ledger::{CraftKey, ProgressLedger, Tier, WeaponKind};
use crate::variant::Variant;

use super::inventory::{collect_loot, equip};
use super::{ActionContext, LeafAction, Outcome};

/// Weapons in order of preference, best first.
pub fn weapon_preference(variant: Variant) -> Vec<String> {
    let material = variant.armor();
    let mut names = Vec::with_capacity(7);
    for tier in [Tier::Perfected, Tier::Attuned, Tier::Basic] {
        for kind in [WeaponKind::Staff, WeaponKind::Bow] {
            names.push(CraftKey::weapon(kind, tier).item_name(material));
        }
    }
    names.push(format!("{} sceptre", material.material()));
    names
}

/// Nearest visible hostile worth fighting: weak hostiles first, then
/// demi-bosses.
pub fn needed_target(env: &dyn Gateway, ledger: &ProgressLedger) -> Option<(Hostile, Entity)> {
    let variant = ledger.variant();
    let origin = env.player_position();
    [Hostile::WEAK.as_slice(), Hostile::DEMI_BOSSES.as_slice()]
        .into_iter()
        .find_map(|tier| {
            let query = EntityQuery::new(EntityKind::Npc).any_of(Hostile::names(tier, variant));
            env.find_entities(&query)
                .into_iter()
                .filter_map(|entity| {
                    let (hostile, seen_variant) = Hostile::parse(&entity.name)?;
                    (seen_variant == variant && ledger.is_hostile_needed(hostile))
                        .then_some((hostile, entity))
                })
                .min_by(|(_, a), (_, b)| {
                    a.position
                        .distance_to(origin)
                        .total_cmp(&b.position.distance_to(origin))
                })
        })
}

#[derive(Debug, Default)]
pub struct CombatAction;

impl CombatAction {
    fn equip_best_weapon(&self, cx: &mut ActionContext<'_>) {
        let equipped = cx.env.equipped_weapon();
        for weapon in weapon_preference(cx.run.variant) {
            if equipped.as_deref().is_some_and(|held| held.eq_ignore_ascii_case(&weapon)) {
                return;
            }
            if cx.env.inventory_contains(&weapon) {
                if equip(cx, &weapon, "Wield") {
                    cx.report(format!("Equipping {}...", weapon));
                }
                return;
            }
        }
    }

    /// Demi-bosses fight in melee range.
    fn raise_protection(&self, cx: &mut ActionContext<'_>, hostile: Hostile) {
        if hostile.tier() != HostileTier::DemiBoss {
            return;
        }
        let wanted = Posture::ProtectFromMelee;
        if cx.env.active_posture() == Some(wanted) {
            return;
        }
        if cx.env.activate_posture(wanted) {
            cx.report(format!("Switching to {}", wanted));
        } else {
            tracing::warn!("failed to activate {}", wanted);
        }
    }
}

impl LeafAction for CombatAction {
    fn execute(&mut self, cx: &mut ActionContext<'_>) -> Result<Outcome, ActionError> {
        self.equip_best_weapon(cx);
        cx.report("Looking for necessary monsters to kill...");

        let Some((hostile, target)) = needed_target(&*cx.env, cx.ledger) else {
            return Ok(cx.soft_failure("No necessary monsters found."));
        };

        self.raise_protection(cx, hostile);
        if !cx.env.interact(&target, "Attack") {
            return Ok(cx.soft_failure(format!("Failed to attack {}", target.name)));
        }
        cx.report(format!("Attacking {}...", target.name));

        let name = target.name.clone();
        let id = target.id;
        let gone = cx.env.wait_until(
            &mut |env| {
                !env.find_entities(&EntityQuery::npc(name.clone()))
                    .iter()
                    .any(|entity| entity.id == id)
            },
            cx.config.timings.kill,
        );
        if !gone {
            return Ok(cx.soft_failure(format!("{} still alive after the kill window", name)));
        }

        if cx.ledger.record_kill(hostile) {
            tracing::info!("killed {}", name);
        }
        cx.report("Looting items...");
        collect_loot(cx);
        Ok(Outcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_starts_with_perfected_and_ends_with_sceptre() {
        let names = weapon_preference(Variant::Hard);
        assert_eq!(names.first().map(String::as_str), Some("Corrupted staff (perfected)"));
        assert_eq!(names.last().map(String::as_str), Some("Corrupted sceptre"));
        assert_eq!(names.len(), 7);
    }
}
