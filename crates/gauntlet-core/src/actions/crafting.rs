//! The two crafting passes at the singing bowl.

use crate::error::ActionError;
use crate::gateway::EntityQuery;
use crate::ledger::{ArmorSlot, CraftKey, CraftingPhase, Resource, Tier, WeaponKind};
use crate::variant::Variant;

use super::inventory::{equip, teleport_home};
use super::{ActionContext, LeafAction, Outcome};

pub const CRAFTING_STATION: &str = "Singing Bowl";
const POTION: &str = "Egniol potion (4)";

/// One item made at the crafting station. Items with a key are skipped once
/// the ledger has them flagged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub item: String,
    pub key: Option<CraftKey>,
    /// Items that must be held before the craft is attempted. While one is
    /// missing the recipe is skipped rather than failed.
    pub materials: Vec<Resource>,
}

impl Recipe {
    fn flagged(key: CraftKey, variant: Variant) -> Self {
        Self {
            item: key.item_name(variant.armor()),
            key: Some(key),
            materials: Vec::new(),
        }
    }

    fn consumable(item: &str) -> Self {
        Self {
            item: item.to_string(),
            key: None,
            materials: Vec::new(),
        }
    }

    fn requiring(mut self, materials: &[Resource]) -> Self {
        self.materials = materials.to_vec();
        self
    }
}

/// Fixed ordered sequence of one crafting phase: weapons, armor,
/// consumables, then what to equip and what to throw away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CraftingPlan {
    pub crafts: Vec<Recipe>,
    /// Item name and the interaction that equips it.
    pub equip: Vec<(String, &'static str)>,
    pub discard: Vec<String>,
}

pub fn recipes_for(phase: CraftingPhase, variant: Variant) -> CraftingPlan {
    let material = variant.armor();
    let weapon = |kind, tier| CraftKey::weapon(kind, tier).item_name(material);
    let armor = |slot| CraftKey::armor(slot, material);
    let slots = [ArmorSlot::Helm, ArmorSlot::Body, ArmorSlot::Legs];

    match phase {
        CraftingPhase::Phase1 => {
            let armor_materials = [variant.ore(), Resource::PhrenBark, Resource::LinumTirinium];
            let mut crafts = vec![
                Recipe::flagged(CraftKey::weapon(WeaponKind::Staff, Tier::Basic), variant),
                Recipe::flagged(CraftKey::weapon(WeaponKind::Bow, Tier::Basic), variant),
                Recipe::flagged(CraftKey::weapon(WeaponKind::Staff, Tier::Attuned), variant),
                Recipe::flagged(CraftKey::weapon(WeaponKind::Bow, Tier::Attuned), variant),
            ];
            crafts.extend(
                slots
                    .iter()
                    .map(|slot| Recipe::flagged(armor(*slot), variant).requiring(&armor_materials)),
            );
            crafts.push(Recipe::consumable("Vial"));
            crafts.push(Recipe::consumable(POTION));

            let mut equip = vec![(weapon(WeaponKind::Staff, Tier::Attuned), "Wield")];
            equip.extend(slots.iter().map(|slot| (armor(*slot).item_name(material), "Wear")));

            CraftingPlan {
                crafts,
                equip,
                discard: vec![format!("{} sceptre", material.material())],
            }
        }
        CraftingPhase::Phase2 => {
            let mut crafts = vec![
                Recipe::flagged(CraftKey::weapon(WeaponKind::Staff, Tier::Perfected), variant),
                Recipe::flagged(CraftKey::weapon(WeaponKind::Bow, Tier::Perfected), variant),
            ];
            crafts.extend(slots.iter().map(|slot| Recipe::flagged(armor(*slot), variant)));
            crafts.push(Recipe::consumable(POTION));

            let mut equip = vec![(weapon(WeaponKind::Staff, Tier::Perfected), "Wield")];
            equip.extend(slots.iter().map(|slot| (armor(*slot).item_name(material), "Wear")));

            CraftingPlan {
                crafts,
                equip,
                discard: vec![
                    weapon(WeaponKind::Staff, Tier::Attuned),
                    weapon(WeaponKind::Bow, Tier::Attuned),
                    "Vial".to_string(),
                ],
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct CraftingAction {
    phase: CraftingPhase,
}

impl CraftingAction {
    pub fn new(phase: CraftingPhase) -> Self {
        Self { phase }
    }

    pub fn phase(&self) -> CraftingPhase {
        self.phase
    }

    fn open_station(&self, cx: &mut ActionContext<'_>) -> Result<(), String> {
        let query = EntityQuery::object(CRAFTING_STATION);
        let station = match cx.env.find_entity(&query) {
            Some(station) => station,
            None => {
                teleport_home(cx);
                cx.env
                    .find_entity(&query)
                    .ok_or_else(|| "Singing Bowl not found.".to_string())?
            }
        };
        if !cx.env.interact(&station, "Sing-crystal") {
            return Err("Failed to interact with the Singing Bowl.".to_string());
        }
        cx.env.delay(cx.config.timings.interaction);
        Ok(())
    }

    fn craft(&self, cx: &mut ActionContext<'_>, recipe: &Recipe) -> Result<(), String> {
        if recipe.key.is_some_and(|key| cx.ledger.is_crafted(key)) {
            tracing::debug!("{} already crafted", recipe.item);
            return Ok(());
        }
        let missing = recipe
            .materials
            .iter()
            .find(|material| !cx.env.inventory_contains(material.display_name()));
        if let Some(material) = missing {
            tracing::debug!("skipping {}, no {} held", recipe.item, material.display_name());
            return Ok(());
        }
        cx.report(format!("Crafting {}...", recipe.item));
        if !cx.env.choose_menu_option(&recipe.item) {
            return Err(format!("Failed to craft {}", recipe.item));
        }
        let item = recipe.item.as_str();
        let made = cx
            .env
            .wait_until(&mut |env| env.inventory_contains(item), cx.config.timings.craft);
        if !made {
            return Err(format!("{} never appeared", recipe.item));
        }
        if let Some(key) = recipe.key {
            cx.ledger.mark_crafted(key);
        }
        Ok(())
    }
}

impl LeafAction for CraftingAction {
    fn execute(&mut self, cx: &mut ActionContext<'_>) -> Result<Outcome, ActionError> {
        let label = match self.phase {
            CraftingPhase::Phase1 => 1,
            CraftingPhase::Phase2 => 2,
        };
        cx.report(format!("Crafting items - Phase {}...", label));

        if let Err(reason) = self.open_station(cx) {
            return Ok(cx.soft_failure(reason));
        }

        let plan = recipes_for(self.phase, cx.run.variant);
        for recipe in &plan.crafts {
            if let Err(reason) = self.craft(cx, recipe) {
                return Ok(cx.soft_failure(reason));
            }
        }

        for (item, action) in &plan.equip {
            if !equip(cx, item, action) {
                tracing::debug!("{} not in inventory to {}", item, action);
            }
        }

        for item in &plan.discard {
            let Some(held) = cx.env.find_entity(&EntityQuery::inventory(item.as_str())) else {
                continue;
            };
            if !cx.env.interact(&held, "Drop") {
                tracing::warn!("failed to drop {}", item);
            }
        }

        cx.ledger.advance_phase();
        cx.report(format!("Phase {} crafting complete", label));
        Ok(Outcome::Completed)
    }
}
