//! A small scripted challenge for the demo binary.
//!
//! One lit room holds everything a run needs: hostiles whose drops cover
//! both crafting phases, one node of each gatherable kind, the crafting
//! station, and the boss a room further north.

use gauntlet_core::sim::ScriptedGateway;
use gauntlet_core::{Cardinal, Hostile, Position, Variant};

const LOBBY: Position = Position::new(3030, 6120, 0);

pub fn scripted(variant: Variant) -> ScriptedGateway {
    let start = variant.crafting_area().center();
    let material = variant.armor().material();
    let shards = variant.shards().display_name();
    let prefix = variant.hostile_prefix();

    let mut world = ScriptedGateway::with_seed(LOBBY.offset(1, 1), 7);
    world.spawn_npc("Bryn", LOBBY);
    world.spawn_object("Reward Chest", LOBBY.offset(2, 0));
    world.spawn_object("The Gauntlet", LOBBY.offset(0, 3));
    world.spawn_object("Bank Deposit Box", LOBBY.offset(-2, 0));
    world.set_entry_destination(start);
    world.set_teleport_destination(start);

    let [node, _] = Cardinal::North.nodes(start.room());
    world.spawn_object("Node", node);
    world.spawn_object("Singing Bowl", start.offset(1, 1));

    let rat = Hostile::Rat.name(variant);
    world.set_drops(&rat, &[(shards, 60), ("Weapon Frame", 1)]);
    for dx in 0..7 {
        world.spawn_npc(&rat, start.offset(dx - 3, -3));
    }
    let dragon = Hostile::Dragon.name(variant);
    let orb = format!("{} Orb", prefix);
    world.set_drops(&dragon, &[(orb.as_str(), 1)]);
    world.spawn_npc(&dragon, start.offset(-4, 3));
    let beast = Hostile::DarkBeast.name(variant);
    let bowstring = format!("{} Bowstring", prefix);
    world.set_drops(&beast, &[(bowstring.as_str(), 1)]);
    world.spawn_npc(&beast, start.offset(4, 3));

    world.spawn_object(&format!("{} Ore", material), start.offset(-5, 0));
    world.spawn_object("Phren Bark", start.offset(5, 0));
    world.spawn_object("Linum Tirinium", start.offset(0, 5));

    world.give(&format!("{} sceptre", material), 1);
    world.give("Paddlefish", 4);
    world.give("Teleport crystal", 1);

    let boss = Hostile::Hunllef.name(variant);
    world.spawn_npc(&boss, variant.boss_room().center().offset(1, 1));
    world.set_hits_to_kill(&boss, 6);
    world.set_defeat_destination(&boss, LOBBY.offset(1, 1));

    world
}
