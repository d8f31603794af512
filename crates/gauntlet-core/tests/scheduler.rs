mod common;

use common::{Harness, START};
use gauntlet_core::actions::ActionKind;
use gauntlet_core::{Observation, Scheduler, Vital};

fn decide(h: &mut Harness) -> ActionKind {
    h.run.refresh_vitals(&h.world);
    let obs = Observation::capture(&h.run, &h.ledger, &h.rooms, &h.world, &h.config.safety);
    Scheduler::new().decide(&obs)
}

#[test]
fn fresh_run_starts_with_the_entry_check() {
    let mut h = Harness::new(START);
    assert_eq!(decide(&mut h), ActionKind::StartingRoomCheck);
}

#[test]
fn needed_hostile_beats_needed_node() {
    let mut h = Harness::inside();
    h.rooms.record(START.room());
    h.world.spawn_object("Crystal Ore", START.offset(2, 2));
    assert_eq!(decide(&mut h), ActionKind::Gathering);

    h.world.spawn_npc("Crystalline Bat", START.offset(-3, 1));
    assert_eq!(decide(&mut h), ActionKind::Combat);
}

#[test]
fn hostiles_of_the_other_variant_are_ignored() {
    let mut h = Harness::inside();
    h.rooms.record(START.room());
    h.world.spawn_npc("Corrupted Bat", START.offset(-3, 1));
    assert_eq!(decide(&mut h), ActionKind::UnexpectedScenario);
}

#[test]
fn unknown_room_is_traversed_once_nothing_else_is_visible() {
    let mut h = Harness::inside();
    assert_eq!(decide(&mut h), ActionKind::Traversal);
    h.rooms.record(START.room());
    assert_eq!(decide(&mut h), ActionKind::UnexpectedScenario);
}

#[test]
fn zero_health_wins_over_ready_phase_two_crafting() {
    let mut h = Harness::inside();
    h.ledger.increment_resource("CombinedShards", 380).unwrap();
    h.ledger.increment_resource("WeaponFrame", 2).unwrap();
    for name in ["CrystallineOrb", "CrystallineBowstring"] {
        h.ledger.increment_resource(name, 1).unwrap();
    }
    for name in ["CrystalOre", "PhrenBark", "LinumTirinium"] {
        h.ledger.increment_resource(name, 3).unwrap();
    }
    h.ledger.advance_phase();
    assert_eq!(decide(&mut h), ActionKind::CraftingPhase2);

    h.world.set_vital(Vital::Health, 0);
    assert_eq!(decide(&mut h), ActionKind::UnexpectedScenario);
}

#[test]
fn boss_follows_phase_two_and_required_kills() {
    use gauntlet_core::{ArmorSlot, CraftKey, Tier, WeaponKind};

    let mut h = Harness::inside();
    h.rooms.record(START.room());
    let armor = h.run.variant.armor();
    for key in [
        CraftKey::weapon(WeaponKind::Staff, Tier::Perfected),
        CraftKey::weapon(WeaponKind::Bow, Tier::Perfected),
        CraftKey::armor(ArmorSlot::Helm, armor),
        CraftKey::armor(ArmorSlot::Body, armor),
    ] {
        h.ledger.mark_crafted(key);
    }
    assert_eq!(decide(&mut h), ActionKind::BossEncounter);

    h.ledger.register_boss_defeat();
    assert_eq!(decide(&mut h), ActionKind::PostEncounter);
}

#[test]
fn identical_snapshots_decide_identically() {
    let mut h = Harness::inside();
    h.world.spawn_object("Phren Bark", START.offset(1, 4));
    let first = decide(&mut h);
    let second = decide(&mut h);
    assert_eq!(first, second);
    assert_eq!(first, ActionKind::Gathering);
}
