//! Integration tests for predation
//!
//! An attacked prey stays off the hunter's list for 19 turns and becomes a
//! target again on the 20th. Tiny grounded prey is swallowed whole.

use dino_park::actions::{execute, Action};
use dino_park::core::config::SimulationConfig;
use dino_park::core::types::{ActorId, Gender, GrowthStage, LocationId, MapId};
use dino_park::entity::{Dinosaur, Species};
use dino_park::simulation::lifecycle::play_turn;
use dino_park::world::{GroundFactory, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn at(x: u32, y: u32) -> LocationId {
    LocationId::new(MapId(0), x, y)
}

fn pen() -> World {
    let mut world = World::new(SimulationConfig::default());
    let factory = GroundFactory::standard(&world.config);
    world
        .add_layout(&["####", "#__#", "####"], &factory)
        .unwrap();
    world
}

fn spawn(world: &mut World, species: Species, loc: LocationId) -> ActorId {
    let dino = Dinosaur::new(species, GrowthStage::Adult, Gender::Male, &mut world.ids);
    world.add_actor(dino, loc).unwrap()
}

#[test]
fn test_attacked_prey_cools_down_for_nineteen_turns() {
    let mut world = pen();
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let allo = spawn(&mut world, Species::Allosaur, at(1, 1));
    let steg = spawn(&mut world, Species::Stegosaur, at(2, 1));
    world.dinosaur_mut(steg).unwrap().needs.hit_points = 100;

    execute(&mut world, allo, &Action::Attack { target: steg }, &mut rng).unwrap();
    world.dinosaur_mut(allo).unwrap().needs.hit_points = 60;

    let attack = Some(Action::Attack { target: steg });
    for turn in 1..20 {
        let outcome = play_turn(&mut world, allo, &mut rng).unwrap();
        assert_ne!(outcome.action, attack, "prey targeted again on turn {turn}");
    }
    let outcome = play_turn(&mut world, allo, &mut rng).unwrap();
    assert_eq!(outcome.action, attack);
}

#[test]
fn test_tiny_prey_is_devoured() {
    let mut world = pen();
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let allo = spawn(&mut world, Species::Allosaur, at(1, 1));
    let ptero = spawn(&mut world, Species::Pterodactyl, at(2, 1));

    let outcome = play_turn(&mut world, allo, &mut rng).unwrap();
    assert_eq!(outcome.action, Some(Action::Devour { prey: ptero }));
    execute(&mut world, allo, &outcome.action.unwrap(), &mut rng).unwrap();

    assert!(world.actor(ptero).is_none());
    assert!(world.location(at(2, 1)).unwrap().items.is_empty());
    let hunter = world.dinosaur(allo).unwrap();
    assert_eq!(hunter.needs.hit_points, hunter.needs.max_hit_points);
}

#[test]
fn test_knockout_bite_leaves_corpse() {
    let mut world = pen();
    let mut config = SimulationConfig::default();
    config.attack_miss_chance = 0.0;
    world.config = config;
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let allo = spawn(&mut world, Species::Allosaur, at(1, 1));
    let steg = spawn(&mut world, Species::Stegosaur, at(2, 1));
    world.dinosaur_mut(steg).unwrap().needs.hit_points = 15;

    let line = execute(&mut world, allo, &Action::Attack { target: steg }, &mut rng).unwrap();
    assert!(line.contains("is dead."));
    assert!(world.actor(steg).is_none());
    assert_eq!(world.location(at(2, 1)).unwrap().items.len(), 1);
    assert_eq!(world.dinosaur(allo).unwrap().needs.hit_points, 100);
}
