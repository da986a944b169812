//! Behavior chain - how a conscious dinosaur picks its action
//!
//! Each species lists its behaviors highest priority first. The first
//! behavior that proposes an action wins; if none does, the dinosaur waits.
//! Behaviors only read the world; the random source is used by wandering.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::actions::catalog::Action;
use crate::core::types::{ActorId, LocationId};
use crate::entity::capability::{ActorCapability, GroundCapability};
use crate::entity::dinosaur::Dinosaur;
use crate::simulation::consumption::is_food_for;
use crate::simulation::proximity::{next_step, ProximitySearch};
use crate::world::{Exit, World};

/// One strategy in a species' behavior chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Head for ground that restores a lost skill
    RechargeSkill {
        skill: ActorCapability,
        ground: GroundCapability,
    },
    /// Find a fertile partner of the same species and opposite gender
    Mating,
    /// Find water when below the thirst threshold
    Thirst,
    /// Hunt prey when hungry (hunters only)
    Predation,
    /// Find food on the ground or in plants when hungry
    Hunger,
    /// Step to a random free neighbour
    Wander,
}

impl Behavior {
    pub fn propose(&self, world: &World, id: ActorId, rng: &mut ChaCha8Rng) -> Option<Action> {
        let dino = world.dinosaur(id)?;
        let here = world.location_of(id)?;
        match *self {
            Behavior::RechargeSkill { skill, ground } => recharge_skill(world, dino, here, skill, ground),
            Behavior::Mating => mating(world, dino, here),
            Behavior::Thirst => thirst(world, dino, here),
            Behavior::Predation => predation(world, dino, here),
            Behavior::Hunger => hunger(world, dino, here),
            Behavior::Wander => wander(world, id, here, rng),
        }
    }
}

/// Run the species' chain for `id`; `None` means do nothing this turn
pub fn select_action(world: &World, id: ActorId, rng: &mut ChaCha8Rng) -> Option<Action> {
    let behaviors = world.dinosaur(id)?.profile().behaviors;
    behaviors
        .iter()
        .find_map(|behavior| behavior.propose(world, id, rng))
}

/// Fertile: conscious adult, healthy enough, not pregnant, and on nesting
/// ground if the species needs one
pub fn is_fertile(world: &World, id: ActorId) -> bool {
    let Some(dino) = world.dinosaur(id) else {
        return false;
    };
    if !dino.can_breed() {
        return false;
    }
    match dino.profile().nesting_ground {
        None => true,
        Some(tag) => world
            .location_of(id)
            .and_then(|at| world.location(at))
            .is_some_and(|location| location.ground.has(tag)),
    }
}

/// Wary eaters refuse to eat while anyone else is adjacent
pub fn is_safe_to_eat_at(world: &World, dino: &Dinosaur, at: LocationId) -> bool {
    if !dino.profile().wary_eater {
        return true;
    }
    world.exits(at).iter().all(|exit| {
        world
            .location(exit.destination)
            .and_then(|location| location.actor)
            .map_or(true, |other| other == dino.id)
    })
}

fn step_toward(world: &World, id: ActorId, target: LocationId) -> Option<Action> {
    next_step(world, id, target).map(|exit| Action::Move {
        destination: exit.destination,
        direction: exit.name,
    })
}

fn recharge_skill(
    world: &World,
    dino: &Dinosaur,
    here: LocationId,
    skill: ActorCapability,
    ground: GroundCapability,
) -> Option<Action> {
    if dino.has(skill) {
        return None;
    }
    let target = ProximitySearch::around_actor(world, dino.id)?.find(|at| {
        world
            .location(*at)
            .is_some_and(|location| location.ground.has(ground))
    })?;
    if target == here {
        return None;
    }
    step_toward(world, dino.id, target)
}

fn mating(world: &World, dino: &Dinosaur, here: LocationId) -> Option<Action> {
    if !is_fertile(world, dino.id) {
        return None;
    }
    let (partner, there) = ProximitySearch::around_actor(world, dino.id)?.find_map(|at| {
        let other = world.actor_at(at)?.as_dinosaur()?;
        let compatible = other.id != dino.id
            && other.species == dino.species
            && other.is_female() != dino.is_female()
            && is_fertile(world, other.id);
        compatible.then_some((other.id, at))
    })?;

    if world.is_adjacent(here, there) {
        Some(Action::Mate { partner })
    } else {
        step_toward(world, dino.id, there)
    }
}

fn next_to_water(world: &World, at: LocationId) -> Option<LocationId> {
    world.exits(at).iter().map(|exit| exit.destination).find(|destination| {
        world
            .location(*destination)
            .is_some_and(|location| location.ground.is_water_source() && location.ground.has_draws())
    })
}

fn thirst(world: &World, dino: &Dinosaur, here: LocationId) -> Option<Action> {
    if !dino.is_thirsty(world.config.thirst_threshold) {
        return None;
    }
    let (spot, source) = ProximitySearch::around_actor(world, dino.id)?
        .find_map(|at| next_to_water(world, at).map(|source| (at, source)))?;
    if spot == here {
        Some(Action::Drink { source })
    } else {
        step_toward(world, dino.id, spot)
    }
}

/// Prey this hunter may go after
///
/// Flying prey is out of reach unless the hunter flies too.
pub fn is_huntable(hunter: &Dinosaur, prey: &Dinosaur) -> bool {
    let cooling_down = hunter
        .blacklist
        .as_ref()
        .is_some_and(|blacklist| blacklist.contains(prey.id));
    prey.id != hunter.id
        && prey.has(ActorCapability::Prey)
        && !cooling_down
        && (!prey.has(ActorCapability::Fly) || hunter.has(ActorCapability::Fly))
}

fn predation(world: &World, dino: &Dinosaur, here: LocationId) -> Option<Action> {
    if dino.blacklist.is_none() || !dino.is_hungry() {
        return None;
    }
    let (prey, there) = ProximitySearch::around_actor(world, dino.id)?.find_map(|at| {
        let other = world.actor_at(at)?.as_dinosaur()?;
        is_huntable(dino, other).then_some((other, at))
    })?;

    if !world.is_adjacent(here, there) {
        return step_toward(world, dino.id, there);
    }
    if prey.has(ActorCapability::Tiny) && !prey.has(ActorCapability::Fly) {
        Some(Action::Devour { prey: prey.id })
    } else {
        Some(Action::Attack { target: prey.id })
    }
}

fn hunger(world: &World, dino: &Dinosaur, here: LocationId) -> Option<Action> {
    if !dino.is_hungry() {
        return None;
    }
    let config = &world.config;
    let (spot, action) = ProximitySearch::around_actor(world, dino.id)?.find_map(|at| {
        let location = world.location(at)?;
        let loose_food = is_safe_to_eat_at(world, dino, at)
            && location.items.iter().any(|item| is_food_for(dino, item, config));
        if loose_food {
            return Some((at, Action::EatItem));
        }
        location
            .ground
            .forage_scout(dino)
            .map(|_| (at, Action::Forage))
    })?;

    if spot == here {
        Some(action)
    } else {
        step_toward(world, dino.id, spot)
    }
}

fn wander(world: &World, id: ActorId, here: LocationId, rng: &mut ChaCha8Rng) -> Option<Action> {
    let open: Vec<&Exit> = world
        .exits(here)
        .iter()
        .filter(|exit| world.can_enter(id, exit.destination))
        .collect();
    if open.is_empty() {
        return None;
    }
    let exit = open[rng.gen_range(0..open.len())];
    Some(Action::Move {
        destination: exit.destination,
        direction: exit.name.clone(),
    })
}
