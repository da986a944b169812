//! The park: maps, the actors on them, and the eco-point ledger

pub mod demo;
pub mod ground;
pub mod item;
pub mod ledger;
pub mod map;
pub mod render;

use ahash::AHashMap;

use crate::core::config::SimulationConfig;
use crate::core::error::{DinoError, Result};
use crate::core::types::{ActorId, IdGenerator, LocationId, MapId};
use crate::entity::actor::Actor;
use crate::entity::dinosaur::Dinosaur;
use crate::entity::player::Player;
use crate::entity::species::Species;

pub use ground::Ground;
pub use item::Item;
pub use ledger::EcoLedger;
pub use map::{connect_maps, Axis, Exit, GameMap, GroundFactory, Location};

/// All simulation state except the random source
///
/// Actors are kept in registration order, which is also the order they take
/// their turns in.
pub struct World {
    pub config: SimulationConfig,
    pub ids: IdGenerator,
    pub ledger: EcoLedger,
    maps: Vec<GameMap>,
    actors: AHashMap<ActorId, Actor>,
    order: Vec<ActorId>,
    actor_locations: AHashMap<ActorId, LocationId>,
    player: Option<ActorId>,
}

impl World {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            ids: IdGenerator::new(),
            ledger: EcoLedger::new(),
            maps: Vec::new(),
            actors: AHashMap::new(),
            order: Vec::new(),
            actor_locations: AHashMap::new(),
            player: None,
        }
    }

    // === MAPS ===

    /// Id the next added map must carry
    pub fn next_map_id(&self) -> MapId {
        MapId(self.maps.len() as u16)
    }

    pub fn add_map(&mut self, map: GameMap) -> Result<MapId> {
        let expected = self.next_map_id();
        if map.id != expected {
            return Err(DinoError::Configuration(format!(
                "map {:?} added out of order, expected {:?}",
                map.id, expected
            )));
        }
        self.maps.push(map);
        Ok(expected)
    }

    /// Build a map from text rows and add it
    pub fn add_layout<S: AsRef<str>>(&mut self, rows: &[S], factory: &GroundFactory) -> Result<MapId> {
        let map = GameMap::from_layout(self.next_map_id(), rows, factory)?;
        self.add_map(map)
    }

    pub fn map(&self, id: MapId) -> Option<&GameMap> {
        self.maps.get(id.0 as usize)
    }

    pub fn maps(&self) -> impl Iterator<Item = &GameMap> {
        self.maps.iter()
    }

    /// Join two maps along an edge, see [`map::connect_maps`]
    pub fn connect_maps(&mut self, first: MapId, second: MapId, axis: Axis) -> Result<()> {
        let (a, b) = (first.0 as usize, second.0 as usize);
        if a == b || a >= self.maps.len() || b >= self.maps.len() {
            return Err(DinoError::Configuration(format!(
                "cannot connect maps {first:?} and {second:?}"
            )));
        }
        if a < b {
            let (head, tail) = self.maps.split_at_mut(b);
            connect_maps(&mut head[a], &mut tail[0], axis)
        } else {
            let (head, tail) = self.maps.split_at_mut(a);
            connect_maps(&mut tail[0], &mut head[b], axis)
        }
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.maps.get(id.map.0 as usize)?.get(id)
    }

    pub fn location_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.maps.get_mut(id.map.0 as usize)?.get_mut(id)
    }

    pub fn exits(&self, id: LocationId) -> &[Exit] {
        self.location(id)
            .map(|location| location.exits.as_slice())
            .unwrap_or(&[])
    }

    /// Every location of every map, map by map in row-major order
    pub fn location_ids(&self) -> Vec<LocationId> {
        self.maps.iter().flat_map(|map| map.location_ids()).collect()
    }

    pub fn is_adjacent(&self, from: LocationId, to: LocationId) -> bool {
        self.exits(from).iter().any(|exit| exit.destination == to)
    }

    // === ACTORS ===

    /// Place an actor; fails if the location is missing or occupied
    pub fn add_actor(&mut self, actor: impl Into<Actor>, at: LocationId) -> Result<ActorId> {
        let actor = actor.into();
        let id = actor.id();
        let location = self
            .location_mut(at)
            .ok_or(DinoError::LocationOutOfBounds(at))?;
        if location.is_occupied() {
            return Err(DinoError::PreconditionViolation(format!(
                "location {at} is already occupied"
            )));
        }
        location.actor = Some(id);
        self.actors.insert(id, actor);
        self.order.push(id);
        self.actor_locations.insert(id, at);
        Ok(id)
    }

    pub fn add_player(&mut self, player: Player, at: LocationId) -> Result<ActorId> {
        let id = self.add_actor(player, at)?;
        self.player = Some(id);
        Ok(id)
    }

    /// The player, while still on a map
    pub fn player_id(&self) -> Option<ActorId> {
        self.player.filter(|id| self.actor_locations.contains_key(id))
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    pub fn dinosaur(&self, id: ActorId) -> Option<&Dinosaur> {
        self.actor(id).and_then(Actor::as_dinosaur)
    }

    pub fn dinosaur_mut(&mut self, id: ActorId) -> Option<&mut Dinosaur> {
        self.actor_mut(id).and_then(Actor::as_dinosaur_mut)
    }

    /// A dinosaur together with some location, borrowed at once
    pub fn dinosaur_and_location_mut(
        &mut self,
        id: ActorId,
        at: LocationId,
    ) -> Option<(&mut Dinosaur, &mut Location)> {
        let dino = self.actors.get_mut(&id)?.as_dinosaur_mut()?;
        let location = self.maps.get_mut(at.map.0 as usize)?.get_mut(at)?;
        Some((dino, location))
    }

    /// A dinosaur together with the id generator, for laying eggs
    pub fn dinosaur_and_ids_mut(&mut self, id: ActorId) -> Option<(&mut Dinosaur, &mut IdGenerator)> {
        let dino = self.actors.get_mut(&id)?.as_dinosaur_mut()?;
        Some((dino, &mut self.ids))
    }

    pub fn location_of(&self, id: ActorId) -> Option<LocationId> {
        self.actor_locations.get(&id).copied()
    }

    pub fn actor_at(&self, at: LocationId) -> Option<&Actor> {
        self.location(at)?.actor.and_then(|id| self.actor(id))
    }

    pub fn is_occupied(&self, at: LocationId) -> bool {
        self.location(at).is_some_and(Location::is_occupied)
    }

    /// Snapshot of live actor ids in registration order
    pub fn actor_ids(&self) -> Vec<ActorId> {
        self.order.clone()
    }

    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.order.iter().filter_map(|id| self.actors.get(id))
    }

    pub fn actor_count(&self) -> usize {
        self.order.len()
    }

    /// Take an actor off its map
    pub fn remove_actor(&mut self, id: ActorId) -> Option<(Actor, LocationId)> {
        let at = self.actor_locations.remove(&id)?;
        if let Some(location) = self.location_mut(at) {
            location.actor = None;
        }
        self.order.retain(|other| *other != id);
        let actor = self.actors.remove(&id)?;
        Some((actor, at))
    }

    /// Ground entry rule plus occupancy
    pub fn can_enter(&self, id: ActorId, at: LocationId) -> bool {
        let Some(actor) = self.actor(id) else {
            return false;
        };
        self.location(at).is_some_and(|location| {
            !location.is_occupied() && location.ground.can_actor_enter(actor.capabilities())
        })
    }

    pub fn move_actor(&mut self, id: ActorId, to: LocationId) -> Result<()> {
        let from = self.location_of(id).ok_or(DinoError::ActorNotFound(id))?;
        if !self.can_enter(id, to) {
            return Err(DinoError::PreconditionViolation(format!(
                "actor {id} cannot enter {to}"
            )));
        }
        if let Some(location) = self.location_mut(from) {
            location.actor = None;
        }
        if let Some(location) = self.location_mut(to) {
            location.actor = Some(id);
        }
        self.actor_locations.insert(id, to);
        Ok(())
    }

    // === ITEMS ===

    pub fn add_item(&mut self, at: LocationId, item: Item) -> Result<()> {
        self.location_mut(at)
            .ok_or(DinoError::LocationOutOfBounds(at))?
            .items
            .push(item);
        Ok(())
    }

    pub fn remove_item(&mut self, at: LocationId, index: usize) -> Option<Item> {
        let items = &mut self.location_mut(at)?.items;
        (index < items.len()).then(|| items.remove(index))
    }

    /// Live dinosaurs per species
    pub fn population(&self) -> AHashMap<Species, usize> {
        let mut counts = AHashMap::new();
        for dino in self.actors().filter_map(Actor::as_dinosaur) {
            *counts.entry(dino.species).or_insert(0) += 1;
        }
        counts
    }
}
