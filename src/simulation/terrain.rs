//! Location tick: plant succession, ground growth, item aging and rain
//!
//! Runs once per location after every actor has had its turn.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::core::error::Result;
use crate::core::types::LocationId;
use crate::entity::actor::Actor;
use crate::entity::capability::{ActorCapability, GroundCapability};
use crate::simulation::weather::Rainfall;
use crate::world::ground::Ground;
use crate::world::item::{Item, ItemFate};
use crate::world::World;

fn count_neighbours(world: &World, at: LocationId, tag: GroundCapability) -> usize {
    world
        .exits(at)
        .iter()
        .filter_map(|exit| world.location(exit.destination))
        .filter(|location| location.ground.has(tag))
        .count()
}

/// Bushes spread onto fertile ground; heavy dinosaurs trample them back to dirt
pub fn apply_succession(world: &mut World, at: LocationId, rng: &mut ChaCha8Rng) {
    let config = &world.config;
    let Some(location) = world.location(at) else {
        return;
    };

    let replacement = if location.ground.has(GroundCapability::Fertile)
        && count_neighbours(world, at, GroundCapability::BlocksShortPlantGrowth) == 0
    {
        let crowded = count_neighbours(world, at, GroundCapability::ShortPlant) >= config.bush_spread_neighbours;
        let sprouts = (crowded && rng.gen_bool(config.bush_spread_chance))
            || rng.gen_bool(config.bush_spontaneous_chance);
        sprouts.then(Ground::bush)
    } else {
        let crushed = location.ground.has(GroundCapability::Crushable)
            && world
                .actor_at(at)
                .is_some_and(|actor| actor.capabilities().has(ActorCapability::CrushGround))
            && rng.gen_bool(config.crush_chance);
        crushed.then(Ground::dirt)
    };

    if let Some(ground) = replacement {
        debug!(at = %at, ground = ground.name(), "ground replaced");
        if let Some(location) = world.location_mut(at) {
            location.ground = ground;
        }
    }
}

/// Run succession over every location once, before the first turn
pub fn seed_initial_growth(world: &mut World, rng: &mut ChaCha8Rng) {
    for at in world.location_ids() {
        apply_succession(world, at, rng);
    }
}

fn tick_ground(world: &mut World, at: LocationId, rng: &mut ChaCha8Rng) {
    let config = world.config.clone();
    let Some(location) = world.location_mut(at) else {
        return;
    };
    let effects = location.ground.tick(rng, &config);
    location.items.extend(effects.dropped);
    world.ledger.add_points(effects.points);
}

/// Age loose items, rotting fruit and corpses and hatching eggs
fn tick_items(world: &mut World, at: LocationId, messages: &mut Vec<String>) -> Result<()> {
    let config = world.config.clone();
    let occupied = world.is_occupied(at);
    let Some(location) = world.location_mut(at) else {
        return Ok(());
    };

    let mut hatchling = None;
    let mut index = 0;
    while index < location.items.len() {
        match location.items[index].tick(&config) {
            ItemFate::Keep => index += 1,
            ItemFate::Remove => {
                location.items.remove(index);
            }
            ItemFate::ReadyToHatch if !occupied && hatchling.is_none() => {
                hatchling = Some(location.items.remove(index));
            }
            ItemFate::ReadyToHatch => index += 1,
        }
    }

    if let Some(Item::Egg(egg)) = hatchling {
        let points = egg.hatch_points();
        let baby = *egg.baby;
        let message = format!("{} hatches at {at}.", baby.name);
        info!(species = %baby.species, at = %at, points, "egg hatched");
        world.add_actor(baby, at)?;
        world.ledger.add_points(points);
        messages.push(message);
    }
    Ok(())
}

fn apply_rain(world: &mut World, at: LocationId, rain: Rainfall) {
    if let Some(location) = world.location_mut(at) {
        location.ground.add_draws(rain.draws);
    }
    let Some(id) = world.location(at).and_then(|location| location.actor) else {
        return;
    };
    if let Some(Actor::Dinosaur(dino)) = world.actor_mut(id) {
        dino.needs.drink(rain.water_bonus);
    }
}

/// Tick one location; returns narration for anything that hatched
pub fn tick_location(
    world: &mut World,
    at: LocationId,
    rain: Option<Rainfall>,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<String>> {
    let mut messages = Vec::new();
    apply_succession(world, at, rng);
    tick_ground(world, at, rng);
    tick_items(world, at, &mut messages)?;
    if let Some(rain) = rain {
        apply_rain(world, at, rain);
    }
    Ok(messages)
}

/// Tick every location of every map in map order
pub fn tick_all_locations(
    world: &mut World,
    rain: Option<Rainfall>,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<String>> {
    let mut messages = Vec::new();
    for at in world.location_ids() {
        messages.extend(tick_location(world, at, rain, rng)?);
    }
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;
    use crate::core::types::{Gender, GrowthStage, MapId};
    use crate::entity::dinosaur::Dinosaur;
    use crate::entity::species::Species;
    use crate::world::item::Egg;
    use crate::world::GroundFactory;
    use rand::SeedableRng;

    fn world_with(config: SimulationConfig, rows: &[&str]) -> World {
        let mut world = World::new(config);
        let factory = GroundFactory::standard(&world.config);
        world.add_layout(rows, &factory).unwrap();
        world
    }

    fn at(x: u32, y: u32) -> LocationId {
        LocationId::new(MapId(0), x, y)
    }

    #[test]
    fn test_bushes_spread_when_crowded() {
        let mut config = SimulationConfig::default();
        config.bush_spread_chance = 1.0;
        config.bush_spontaneous_chance = 0.0;
        let mut world = world_with(config, &["*.*"]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        apply_succession(&mut world, at(1, 0), &mut rng);
        assert_eq!(world.location(at(1, 0)).unwrap().ground.name(), "Bush");
    }

    #[test]
    fn test_trees_block_bushes() {
        let mut config = SimulationConfig::default();
        config.bush_spread_chance = 1.0;
        config.bush_spontaneous_chance = 1.0;
        let mut world = world_with(config, &["*.+", "*.."]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        apply_succession(&mut world, at(1, 0), &mut rng);
        assert_eq!(world.location(at(1, 0)).unwrap().ground.name(), "Dirt");
    }

    #[test]
    fn test_brachiosaur_crushes_bush() {
        let mut config = SimulationConfig::default();
        config.crush_chance = 1.0;
        let mut world = world_with(config, &["*"]);
        let brachio = Dinosaur::new(Species::Brachiosaur, GrowthStage::Adult, Gender::Male, &mut world.ids);
        world.add_actor(brachio, at(0, 0)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        apply_succession(&mut world, at(0, 0), &mut rng);
        assert_eq!(world.location(at(0, 0)).unwrap().ground.name(), "Dirt");
    }

    #[test]
    fn test_egg_hatches_on_time_when_free() {
        let mut config = SimulationConfig::default();
        config.bush_spontaneous_chance = 0.0;
        let mut world = world_with(config, &["_"]);
        let baby = Dinosaur::new(Species::Brachiosaur, GrowthStage::Baby, Gender::Male, &mut world.ids);
        let baby_id = baby.id;
        world.add_item(at(0, 0), Item::Egg(Egg::new(baby))).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        for _ in 0..19 {
            let messages = tick_location(&mut world, at(0, 0), None, &mut rng).unwrap();
            assert!(messages.is_empty());
        }
        let messages = tick_location(&mut world, at(0, 0), None, &mut rng).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(world.location_of(baby_id), Some(at(0, 0)));
        assert_eq!(world.ledger.points(), 1000);
        assert!(world.location(at(0, 0)).unwrap().items.is_empty());
    }

    #[test]
    fn test_egg_waits_while_occupied() {
        let mut world = world_with(SimulationConfig::default(), &["_"]);
        let baby = Dinosaur::new(Species::Brachiosaur, GrowthStage::Baby, Gender::Male, &mut world.ids);
        world.add_item(at(0, 0), Item::Egg(Egg::new(baby))).unwrap();
        let sitter = Dinosaur::new(Species::Stegosaur, GrowthStage::Adult, Gender::Male, &mut world.ids);
        let sitter = world.add_actor(sitter, at(0, 0)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        for _ in 0..25 {
            tick_location(&mut world, at(0, 0), None, &mut rng).unwrap();
        }
        assert_eq!(world.location(at(0, 0)).unwrap().items.len(), 1);

        world.remove_actor(sitter);
        let messages = tick_location(&mut world, at(0, 0), None, &mut rng).unwrap();
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_rain_fills_lakes_and_dinosaurs() {
        let mut world = world_with(SimulationConfig::default(), &["~_"]);
        let steg = Dinosaur::new(Species::Stegosaur, GrowthStage::Adult, Gender::Male, &mut world.ids);
        let steg = world.add_actor(steg, at(1, 0)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let rain = Rainfall {
            draws: 5,
            water_bonus: 10,
        };
        tick_all_locations(&mut world, Some(rain), &mut rng).unwrap();
        assert_eq!(world.location(at(0, 0)).unwrap().ground.draws(), 30);
        assert_eq!(world.dinosaur(steg).unwrap().needs.water_level, 70);
    }
}
