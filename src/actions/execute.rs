//! Carrying out dinosaur actions against the world

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::actions::catalog::Action;
use crate::core::error::{DinoError, Result};
use crate::core::types::{ActorId, LocationId};
use crate::entity::actor::Actor;
use crate::entity::capability::ActorCapability;
use crate::simulation::consumption::{is_food_for, resolve, ResolveMode};
use crate::world::World;

/// Remove an actor from the world, dropping what it carried
///
/// Dinosaurs that die rather than get eaten leave a corpse behind.
pub fn kill(world: &mut World, id: ActorId, leave_corpse: bool) -> Option<String> {
    let (mut actor, at) = world.remove_actor(id)?;
    let message = format!("{actor} is dead.");
    let location = world.location_mut(at)?;
    location.items.extend(actor.drain_inventory());
    if leave_corpse {
        if let Actor::Dinosaur(dino) = &actor {
            location.items.push(dino.corpse());
        }
    }
    debug!(actor = %actor, at = %at, corpse = leave_corpse, "actor removed");
    Some(message)
}

fn missing(what: &str, id: ActorId) -> DinoError {
    DinoError::PreconditionViolation(format!("{what} {id} is not on the map"))
}

/// Execute `action` for dinosaur `id`, returning the narration line(s)
pub fn execute(world: &mut World, id: ActorId, action: &Action, rng: &mut ChaCha8Rng) -> Result<String> {
    match action {
        Action::Move {
            destination,
            direction,
        } => {
            world.move_actor(id, *destination)?;
            let actor = world.actor(id).ok_or(DinoError::ActorNotFound(id))?;
            Ok(format!("{actor} moves {direction}"))
        }
        Action::Mate { partner } => mate(world, id, *partner),
        Action::Drink { source } => drink(world, id, *source),
        Action::Attack { target } => attack(world, id, *target, rng),
        Action::Devour { prey } => devour(world, id, *prey),
        Action::EatItem => eat_item(world, id),
        Action::Forage => forage(world, id, rng),
    }
}

fn mate(world: &mut World, id: ActorId, partner: ActorId) -> Result<String> {
    let here = world.location_of(id).ok_or(DinoError::ActorNotFound(id))?;
    let there = world.location_of(partner).ok_or_else(|| missing("partner", partner))?;
    if !world.is_adjacent(here, there) {
        return Err(DinoError::PreconditionViolation(format!(
            "{id} and {partner} are not adjacent"
        )));
    }

    let self_is_female = world
        .dinosaur(id)
        .ok_or(DinoError::ActorNotFound(id))?
        .is_female();
    let mother = if self_is_female { id } else { partner };
    world
        .dinosaur_mut(mother)
        .ok_or_else(|| missing("partner", mother))?
        .become_pregnant();

    let a = world.actor(id).ok_or(DinoError::ActorNotFound(id))?;
    let b = world.actor(partner).ok_or_else(|| missing("partner", partner))?;
    Ok(format!("### {a} and {b} have mated ###"))
}

fn drink(world: &mut World, id: ActorId, source: LocationId) -> Result<String> {
    let tall_amount = world.config.tall_drink_amount;
    let amount = world.config.drink_amount;

    let took = world
        .location_mut(source)
        .ok_or(DinoError::LocationOutOfBounds(source))?
        .ground
        .take_draw();
    let dino = world.dinosaur_mut(id).ok_or(DinoError::ActorNotFound(id))?;
    if !took {
        return Ok(format!("{dino} finds the water source dry."));
    }
    let gained = if dino.has(ActorCapability::Tall) {
        tall_amount
    } else {
        amount
    };
    dino.needs.drink(gained);
    Ok(format!("{dino} restored {gained} water level by drinking water."))
}

fn attack(world: &mut World, id: ActorId, target: ActorId, rng: &mut ChaCha8Rng) -> Result<String> {
    let miss_chance = world.config.attack_miss_chance;
    let hunter = world.dinosaur_mut(id).ok_or(DinoError::ActorNotFound(id))?;
    let damage = hunter.bite_damage().ok_or_else(|| {
        DinoError::PreconditionViolation(format!("{hunter} has no bite"))
    })?;
    if let Some(blacklist) = hunter.blacklist.as_mut() {
        blacklist.add(target);
    }
    let hunter_label = hunter.to_string();

    let prey = world.actor_mut(target).ok_or_else(|| missing("target", target))?;
    if rng.gen_bool(miss_chance) {
        return Ok(format!("{hunter_label} misses {prey}."));
    }
    prey.hurt(damage);
    let knocked_out = !prey.is_conscious();
    let mut result = format!("{hunter_label} bites {prey} for {damage} damage.");

    if let Some(hunter) = world.dinosaur_mut(id) {
        hunter.needs.heal(damage);
    }
    if knocked_out {
        if let Some(line) = kill(world, target, true) {
            result.push('\n');
            result.push_str(&line);
        }
    }
    Ok(result)
}

fn devour(world: &mut World, id: ActorId, prey: ActorId) -> Result<String> {
    let (mut eaten, _) = world.remove_actor(prey).ok_or_else(|| missing("prey", prey))?;
    let dropped = eaten.drain_inventory();
    if let Some(at) = world.location_of(id) {
        if let Some(location) = world.location_mut(at) {
            location.items.extend(dropped);
        }
    }
    let hunter = world.dinosaur_mut(id).ok_or(DinoError::ActorNotFound(id))?;
    let full = hunter.needs.max_hit_points;
    hunter.needs.heal(full);
    Ok(format!("{hunter} has eaten the {eaten}"))
}

fn eat_item(world: &mut World, id: ActorId) -> Result<String> {
    let config = world.config.clone();
    let at = world.location_of(id).ok_or(DinoError::ActorNotFound(id))?;
    let (dino, location) = world
        .dinosaur_and_location_mut(id, at)
        .ok_or(DinoError::ActorNotFound(id))?;

    let Some(index) = location
        .items
        .iter()
        .position(|item| is_food_for(&*dino, item, &config))
    else {
        return Ok(format!("{dino} finds nothing to eat."));
    };

    if dino.flight.is_some() {
        dino.capabilities.remove(ActorCapability::Fly);
    }
    let name = location.items[index].name();
    let meal = resolve(dino, &mut location.items[index], ResolveMode::Commit, &config).unwrap_or_default();
    dino.needs.heal(meal.food);
    dino.needs.drink(meal.water);
    if !dino.has(ActorCapability::Tiny) {
        location.items.remove(index);
    }
    Ok(format!(
        "{dino} eats {name} and restores {} food and {} water.",
        meal.food, meal.water
    ))
}

fn forage(world: &mut World, id: ActorId, rng: &mut ChaCha8Rng) -> Result<String> {
    let config = world.config.clone();
    let at = world.location_of(id).ok_or(DinoError::ActorNotFound(id))?;
    let (dino, location) = world
        .dinosaur_and_location_mut(id, at)
        .ok_or(DinoError::ActorNotFound(id))?;

    let ground = location.ground.name();
    let Some(meal) = location.ground.forage_commit(dino, rng, &config) else {
        return Ok(format!("{dino} cannot eat from {ground}."));
    };
    dino.needs.heal(meal.food);
    dino.needs.drink(meal.water);
    Ok(match (meal.food > 0, meal.water > 0) {
        (true, true) => format!(
            "{dino} gained {} food points & {} water points by feeding on {ground}.",
            meal.food, meal.water
        ),
        (true, false) => format!("{dino} gained {} food points by feeding on {ground}.", meal.food),
        _ => format!("{dino} gained {} water points by feeding on {ground}.", meal.water),
    })
}
