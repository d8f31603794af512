mod common;

use common::{Harness, LOBBY, START};
use gauntlet_core::actions::{ActionKind, Outcome, STARTING_ROOM_TIMEOUT_REASON};
use gauntlet_core::{
    ArmorSlot, Cardinal, CraftKey, CraftingPhase, Gateway, Hostile, Observation, Posture,
    ProgressLedger, Resource, RunState, Scheduler, Tier, Variant, Vital, WeaponKind,
};

#[test]
fn starting_room_timeout_stops_the_run_once() {
    let mut h = Harness::new(START);

    let outcome = h.execute(ActionKind::StartingRoomCheck);

    assert_eq!(outcome, Outcome::Stopped(STARTING_ROOM_TIMEOUT_REASON.to_string()));
    assert_eq!(h.status.stops, vec![STARTING_ROOM_TIMEOUT_REASON.to_string()]);
    assert!(!h.run.active);
    assert!(h.world.clock_ms() >= h.config.timings.start_wait_ms);

    // The next tick only idles; nothing calls stop_run again.
    let obs = Observation::capture(&h.run, &h.ledger, &h.rooms, &h.world, &h.config.safety);
    assert_eq!(Scheduler::new().decide(&obs), ActionKind::Idle);
    h.execute(ActionKind::Idle);
    assert_eq!(h.status.stops.len(), 1);
}

#[test]
fn entering_confirms_the_starting_room_and_lights_a_node() {
    let mut h = Harness::new(LOBBY.offset(1, 1));
    h.spawn_lobby();
    h.world.set_entry_destination(START);
    let [north, _] = Cardinal::North.nodes(START.room());
    h.world.spawn_object("Node", north);

    let outcome = h.execute(ActionKind::StartingRoomCheck);

    assert_eq!(outcome, Outcome::Completed);
    assert!(h.run.starting_room_confirmed);
    assert!(h.rooms.contains(START.room()));
    assert_eq!(h.world.count_interactions("Enter"), 1);
    assert_eq!(h.world.count_interactions("Light"), 1);
    assert_eq!(h.world.camera_normalizations(), 1);
    assert!(h.status.stops.is_empty());
}

#[test]
fn failed_entry_is_retried_not_fatal() {
    let mut h = Harness::new(LOBBY.offset(1, 1));
    h.spawn_lobby();
    h.world.fail("Enter");

    let outcome = h.execute(ActionKind::StartingRoomCheck);

    assert!(matches!(outcome, Outcome::SoftFailure(_)));
    assert!(h.run.active);
    assert!(!h.run.starting_room_confirmed);
    assert!(h.status.stops.is_empty());
}

#[test]
fn traversal_opens_a_passage_and_moves_on() {
    let mut h = Harness::inside();
    let [west, _] = Cardinal::West.nodes(START.room());
    h.world.spawn_object("Node", west);

    assert_eq!(h.execute(ActionKind::Traversal), Outcome::Completed);

    let next = START.room().neighbor(Cardinal::West);
    assert!(h.rooms.contains(START.room()));
    assert!(!h.rooms.contains(next));
    assert_eq!(h.world.position().room(), next);

    h.world
        .spawn_object("Illuminated Symbol", next.area().center().offset(1, 0));
    assert_eq!(h.execute(ActionKind::Traversal), Outcome::Completed);
    assert!(h.rooms.contains(next));
    assert_eq!(h.rooms.len(), 2);
}

#[test]
fn traversal_without_nodes_is_a_soft_failure() {
    let mut h = Harness::inside();
    let outcome = h.execute(ActionKind::Traversal);
    assert!(matches!(outcome, Outcome::SoftFailure(_)));
    assert!(h.rooms.is_empty());
}

#[test]
fn combat_kills_and_loots_what_the_run_needs() {
    let mut h = Harness::inside();
    h.world.give("Crystal sceptre", 1);
    h.world.set_drops(
        "Crystalline Rat",
        &[("Crystal Shards", 12), ("Raw Paddlefish", 1)],
    );
    h.world.spawn_npc("Crystalline Rat", START.offset(2, 0));

    assert_eq!(h.execute(ActionKind::Combat), Outcome::Completed);

    assert_eq!(h.world.equipped_weapon().as_deref(), Some("Crystal sceptre"));
    assert_eq!(h.world.active_posture(), None);
    assert_eq!(h.ledger.weak_kills(), 1);
    assert_eq!(h.ledger.count(Resource::CrystallineShards), 12);
    assert_eq!(h.world.inventory_count("Crystal Shards"), 12);
    assert_eq!(h.status.updates.iter().filter(|u| *u == "Looting items...").count(), 1);
}

#[test]
fn a_demi_boss_is_fought_once_per_run() {
    let mut h = Harness::inside();
    h.world.spawn_npc("Crystalline Dragon", START.offset(3, 3));
    assert_eq!(h.execute(ActionKind::Combat), Outcome::Completed);
    assert!(h.ledger.has_killed(Hostile::Dragon));
    assert_eq!(h.world.active_posture(), Some(Posture::ProtectFromMelee));

    h.world.spawn_npc("Crystalline Dragon", START.offset(3, 3));
    let outcome = h.execute(ActionKind::Combat);
    assert_eq!(outcome, Outcome::SoftFailure("No necessary monsters found.".to_string()));
    assert_eq!(h.world.count_interactions("Attack"), 1);
}

#[test]
fn full_inventory_drops_only_the_filler_it_needs() {
    let mut h = Harness::inside();
    h.world.give("Raw Paddlefish", 5);
    h.world.give("Grym Leaf", 23);
    h.ledger.increment(Resource::RawPaddlefish, 5);
    h.world.spawn_ground_item("Weapon Frame", START.offset(1, 0), 1);
    assert!(h.world.is_inventory_full());

    assert_eq!(h.execute(ActionKind::UnexpectedScenario), Outcome::Completed);

    assert!(!h.world.is_inventory_full());
    assert_eq!(h.world.inventory_count("Raw Paddlefish"), 4);
    assert_eq!(h.world.count_interactions("Drop"), 1);
    assert_eq!(h.ledger.count(Resource::RawPaddlefish), 4);
}

#[test]
fn low_health_eats() {
    let mut h = Harness::inside();
    h.world.set_vital(Vital::Health, 25);
    h.world.give("Paddlefish", 2);

    assert_eq!(h.execute(ActionKind::UnexpectedScenario), Outcome::Completed);

    assert_eq!(h.world.health(), 45);
    assert_eq!(h.world.inventory_count("Paddlefish"), 1);
}

#[test]
fn death_hands_off_to_post_encounter() {
    let mut h = Harness::inside();
    h.world.set_vital(Vital::Health, 0);
    assert_eq!(
        h.execute(ActionKind::UnexpectedScenario),
        Outcome::HandOff(ActionKind::PostEncounter)
    );
}

#[test]
fn nothing_unexpected_is_a_no_op() {
    let mut h = Harness::inside();
    assert_eq!(h.execute(ActionKind::UnexpectedScenario), Outcome::Completed);
    assert_eq!(h.status.last_update(), Some("No unexpected scenario detected"));
    assert!(h.world.interactions().is_empty());
}

#[test]
fn phase_one_crafting_advances_the_phase() {
    let mut h = Harness::inside();
    h.world.spawn_object("Singing Bowl", START.offset(1, 1));
    h.world.give("Crystal sceptre", 1);
    h.ledger.increment_resource("CombinedShards", 160).unwrap();
    h.ledger.increment_resource("WeaponFrame", 2).unwrap();

    assert_eq!(h.execute(ActionKind::CraftingPhase1), Outcome::Completed);

    assert_eq!(h.ledger.phase(), CraftingPhase::Phase2);
    assert!(h.ledger.is_phase_complete(CraftingPhase::Phase1));
    assert!(h.ledger.is_crafted(CraftKey::weapon(WeaponKind::Bow, Tier::Attuned)));
    assert_eq!(
        h.world.equipped_weapon().as_deref(),
        Some("Crystal staff (attuned)")
    );
    assert!(!h.world.inventory_contains("Crystal sceptre"));
    assert_eq!(h.status.last_update(), Some("Phase 1 crafting complete"));
}

#[test]
fn phase_one_crafts_armor_when_materials_are_held() {
    let mut h = Harness::inside();
    h.world.spawn_object("Singing Bowl", START.offset(1, 1));
    for material in ["Crystal Ore", "Phren Bark", "Linum Tirinium"] {
        h.world.give(material, 1);
    }
    h.ledger.increment_resource("CombinedShards", 160).unwrap();
    h.ledger.increment_resource("WeaponFrame", 2).unwrap();

    assert_eq!(h.execute(ActionKind::CraftingPhase1), Outcome::Completed);

    let armor = h.run.variant.armor();
    for slot in [ArmorSlot::Helm, ArmorSlot::Body, ArmorSlot::Legs] {
        assert!(h.ledger.is_crafted(CraftKey::armor(slot, armor)));
    }
    assert_eq!(h.world.count_interactions("Wear"), 3);
    assert_eq!(h.ledger.phase(), CraftingPhase::Phase2);
}

#[test]
fn crafting_failure_leaves_the_phase_alone() {
    let mut h = Harness::inside();
    h.world.spawn_object("Singing Bowl", START.offset(1, 1));
    h.world.fail("Crystal bow (basic)");
    h.ledger.increment_resource("CombinedShards", 160).unwrap();
    h.ledger.increment_resource("WeaponFrame", 2).unwrap();

    let outcome = h.execute(ActionKind::CraftingPhase1);

    assert!(matches!(outcome, Outcome::SoftFailure(_)));
    assert_eq!(h.ledger.phase(), CraftingPhase::Phase1);
    assert!(h.ledger.is_crafted(CraftKey::weapon(WeaponKind::Staff, Tier::Basic)));

    // The retry skips what is already flagged.
    h.world = {
        let mut world = gauntlet_core::sim::ScriptedGateway::new(START);
        world.spawn_object("Singing Bowl", START.offset(1, 1));
        world
    };
    assert_eq!(h.execute(ActionKind::CraftingPhase1), Outcome::Completed);
    assert!(!h.world.inventory_contains("Crystal staff (basic)"));
    assert!(h.world.inventory_contains("Crystal bow (basic)"));
}

#[test]
fn post_encounter_resets_the_run_and_deposits() {
    let mut h = Harness::new(LOBBY.offset(1, 1));
    h.spawn_lobby();
    h.world.spawn_object("Bank Deposit Box", LOBBY.offset(-2, 0));
    h.world.give("Grym Leaf", 10);
    h.run.starting_room_confirmed = true;
    h.rooms.record(START.room());
    h.ledger.increment_resource("CombinedShards", 200).unwrap();
    h.ledger.record_kill(Hostile::DarkBeast);
    h.ledger.register_boss_defeat();

    assert_eq!(h.execute(ActionKind::PostEncounter), Outcome::Completed);

    assert_eq!(h.ledger, ProgressLedger::new(Variant::Standard));
    assert!(h.rooms.is_empty());
    assert!(!h.run.starting_room_confirmed);
    assert_eq!(h.world.inventory_used_slots(), 0);
    assert_eq!(h.world.count_interactions("Deposit"), 1);
}

#[test]
fn post_encounter_without_chest_changes_nothing() {
    let mut h = Harness::inside();
    h.ledger.register_boss_defeat();
    h.rooms.record(START.room());
    let before = h.ledger.clone();

    let outcome = h.execute(ActionKind::PostEncounter);

    assert!(matches!(outcome, Outcome::SoftFailure(_)));
    assert_eq!(h.ledger, before);
    assert_eq!(h.rooms.len(), 1);
    assert!(h.run.starting_room_confirmed);
}

#[test]
fn unreachable_environment_is_an_error() {
    let mut h = Harness::inside();
    h.world.set_reachable(false);
    let mut cx = gauntlet_core::ActionContext::new(
        &mut h.ledger,
        &mut h.run,
        &mut h.rooms,
        &mut h.world,
        &mut h.status,
        &h.config,
    );
    assert!(h.actions.execute(ActionKind::Idle, &mut cx).is_err());
}

#[test]
fn hard_run_drops_the_pickaxe_after_corrupted_ore() {
    let mut h = Harness::inside();
    h.run = RunState::new(Variant::Hard);
    h.run.starting_room_confirmed = true;
    h.ledger.increment(Resource::CorruptedOre, 3);
    h.world.give("Pickaxe", 1);
    h.world.give("Hatchet", 1);
    h.world.spawn_object("Phren Bark", START.offset(1, 0));

    assert_eq!(h.execute(ActionKind::Gathering), Outcome::Completed);

    assert_eq!(h.ledger.count(Resource::PhrenBark), 1);
    assert!(!h.world.inventory_contains("Pickaxe"));
    assert!(h.world.inventory_contains("Hatchet"));
}
