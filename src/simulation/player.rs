//! Player commands and the controllers that issue them
//!
//! Menus and keyboard input live outside the crate; a [`PlayerController`]
//! hands the turn loop one command per player turn.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use tracing::info;

use crate::actions::execute::kill;
use crate::core::error::{DinoError, Result};
use crate::core::types::{ActorId, LocationId};
use crate::entity::actor::Actor;
use crate::simulation::consumption::scout;
use crate::simulation::proximity::ProximitySearch;
use crate::world::item::Item;
use crate::world::World;

/// One player turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    Wait,
    /// Step through the exit leading to `destination`
    Move { destination: LocationId },
    /// Hand inventory item `item` to an adjacent dinosaur
    Feed { target: ActorId, item: usize },
    /// Rummage for entry `item` of the ground store here
    Search { item: usize },
    /// Fire the laser gun at the nearest actor in range
    Shoot,
    Quit,
}

/// Source of player commands
pub trait PlayerController {
    fn next_command(&mut self, world: &World, player: ActorId) -> PlayerCommand;
}

/// Waits every turn, optionally quitting after a number of turns
#[derive(Debug, Clone, Default)]
pub struct IdlePlayer {
    pub quit_after: Option<u64>,
    waited: u64,
}

impl IdlePlayer {
    pub fn new(quit_after: Option<u64>) -> Self {
        Self {
            quit_after,
            waited: 0,
        }
    }
}

impl PlayerController for IdlePlayer {
    fn next_command(&mut self, _world: &World, _player: ActorId) -> PlayerCommand {
        if self.quit_after.is_some_and(|limit| self.waited >= limit) {
            return PlayerCommand::Quit;
        }
        self.waited += 1;
        PlayerCommand::Wait
    }
}

/// Plays back a fixed list of commands, then waits
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    commands: VecDeque<PlayerCommand>,
}

impl ScriptedPlayer {
    pub fn new(commands: impl IntoIterator<Item = PlayerCommand>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }
}

impl PlayerController for ScriptedPlayer {
    fn next_command(&mut self, _world: &World, _player: ActorId) -> PlayerCommand {
        self.commands.pop_front().unwrap_or(PlayerCommand::Wait)
    }
}

fn player_location(world: &World, player: ActorId) -> Result<LocationId> {
    world
        .location_of(player)
        .ok_or(DinoError::ActorNotFound(player))
}

fn player_name(world: &World, player: ActorId) -> Result<String> {
    world
        .actor(player)
        .map(ToString::to_string)
        .ok_or(DinoError::ActorNotFound(player))
}

fn player_inventory(world: &mut World, player: ActorId) -> Result<&mut Vec<Item>> {
    world
        .actor_mut(player)
        .and_then(|actor| actor.as_player_mut())
        .map(|p| &mut p.inventory)
        .ok_or(DinoError::ActorNotFound(player))
}

/// Carry out a player command, returning the narration
pub fn execute_player_command(
    world: &mut World,
    player: ActorId,
    command: &PlayerCommand,
    rng: &mut ChaCha8Rng,
) -> Result<String> {
    match command {
        PlayerCommand::Wait => Ok(String::new()),
        PlayerCommand::Move { destination } => move_player(world, player, *destination),
        PlayerCommand::Feed { target, item } => feed(world, player, *target, *item),
        PlayerCommand::Search { item } => search(world, player, *item, rng),
        PlayerCommand::Shoot => shoot(world, player, rng),
        PlayerCommand::Quit => {
            let name = player_name(world, player)?;
            world.remove_actor(player);
            info!("player quit");
            Ok(format!("{name} has quit the game."))
        }
    }
}

fn move_player(world: &mut World, player: ActorId, destination: LocationId) -> Result<String> {
    let here = player_location(world, player)?;
    let direction = world
        .exits(here)
        .iter()
        .find(|exit| exit.destination == destination)
        .map(|exit| exit.name.clone())
        .ok_or_else(|| {
            DinoError::PreconditionViolation(format!("no exit from {here} to {destination}"))
        })?;
    world.move_actor(player, destination)?;
    Ok(format!("{} moves {direction}", player_name(world, player)?))
}

fn feed(world: &mut World, player: ActorId, target: ActorId, index: usize) -> Result<String> {
    let here = player_location(world, player)?;
    let there = world.location_of(target).ok_or_else(|| {
        DinoError::PreconditionViolation(format!("feed target {target} is not on the map"))
    })?;
    if !world.is_adjacent(here, there) {
        return Err(DinoError::PreconditionViolation(format!(
            "feed target {target} is not adjacent"
        )));
    }
    let config = world.config.clone();
    let meal = {
        let dino = world.dinosaur(target).ok_or_else(|| {
            DinoError::PreconditionViolation(format!("feed target {target} is not a dinosaur"))
        })?;
        let offered = world
            .actor(player)
            .and_then(Actor::as_player)
            .and_then(|p| p.inventory.get(index))
            .ok_or_else(|| DinoError::PreconditionViolation(format!("no inventory item {index} to feed")))?;
        scout(dino, offered, &config).ok_or_else(|| {
            DinoError::PreconditionViolation(format!("{dino} cannot eat {}", offered.name()))
        })?
    };

    let item = player_inventory(world, player)?.remove(index);
    let name = player_name(world, player)?;
    let dino = world
        .dinosaur_mut(target)
        .ok_or(DinoError::ActorNotFound(target))?;
    dino.needs.heal(meal.food);
    dino.needs.drink(meal.water);
    let message = format!(
        "{name} healed {dino}'s food level by {} and water level by {} with {}.",
        meal.food,
        meal.water,
        item.name()
    );
    world.ledger.add_points(config.feed_points);
    Ok(message)
}

fn search(world: &mut World, player: ActorId, index: usize, rng: &mut ChaCha8Rng) -> Result<String> {
    let here = player_location(world, player)?;
    let chance = world.config.search_success_chance;
    let points = world.config.search_points;
    let name = player_name(world, player)?;

    let location = world
        .location_mut(here)
        .ok_or(DinoError::LocationOutOfBounds(here))?;
    if index >= location.ground.store.len() {
        return Err(DinoError::PreconditionViolation(format!(
            "{} has no item {index} to search for",
            location.ground.name()
        )));
    }
    if !rng.gen_bool(chance) {
        return Ok(format!("{name} could not find anything useful."));
    }

    let ground = location.ground.name();
    let found = location.ground.store.remove(index);
    let message = format!("{name} found {} from the {ground}.", found.name());
    player_inventory(world, player)?.push(found);
    world.ledger.add_points(points);
    Ok(message)
}

fn shoot(world: &mut World, player: ActorId, rng: &mut ChaCha8Rng) -> Result<String> {
    let here = player_location(world, player)?;
    let armed = player_inventory(world, player)?
        .iter()
        .any(|item| matches!(item, Item::LaserGun));
    if !armed {
        return Err(DinoError::PreconditionViolation(
            "shooting needs a laser gun".into(),
        ));
    }
    let name = player_name(world, player)?;
    let range = world.config.shoot_range;

    let target = ProximitySearch::new(world, here, None)
        .ranked()
        .take_while(|(_, hops)| *hops < range)
        .find_map(|(at, _)| world.location(at)?.actor.filter(|id| *id != player));
    let Some(target) = target else {
        return Ok(format!("{name} zaps the air."));
    };

    let critical = rng.gen_bool(world.config.shoot_critical_chance);
    let graze = world.config.shoot_graze_fraction;
    let actor = world
        .actor_mut(target)
        .ok_or(DinoError::ActorNotFound(target))?;
    let max = actor.max_hit_points();
    let damage = if critical {
        max
    } else {
        (f64::from(max) * graze) as i32
    };
    actor.hurt(damage);
    let mut message = format!("{name} zaps {actor} for {damage} damage.");
    if !actor.is_conscious() {
        let victim = actor.to_string();
        kill(world, target, true);
        message.push_str(&format!("\n{victim} is killed."));
    }
    Ok(message)
}
