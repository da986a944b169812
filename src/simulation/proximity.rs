//! Nearest-first search over the location graph
//!
//! Breadth-first from a starting location. With an observer, only
//! locations whose ground the observer could enter are expanded; occupancy
//! is ignored so occupied targets are still found. Ties follow exit order.

use ahash::AHashSet;
use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::core::types::{ActorId, LocationId};
use crate::entity::capability::ActorCapabilities;
use crate::world::{Exit, World};

/// Lazy nearest-first sequence of locations
#[derive(Clone)]
pub struct ProximitySearch<'w> {
    world: &'w World,
    start: LocationId,
    observer: Option<ActorCapabilities>,
    queue: VecDeque<(LocationId, u32)>,
    visited: AHashSet<LocationId>,
}

impl<'w> ProximitySearch<'w> {
    pub fn new(world: &'w World, start: LocationId, observer: Option<ActorCapabilities>) -> Self {
        let mut search = Self {
            world,
            start,
            observer,
            queue: VecDeque::new(),
            visited: AHashSet::new(),
        };
        search.restart();
        search
    }

    /// Search outward from an actor, filtered by the actor's entry rights
    pub fn around_actor(world: &'w World, actor: ActorId) -> Option<Self> {
        let start = world.location_of(actor)?;
        let observer = world.actor(actor)?.capabilities();
        Some(Self::new(world, start, Some(observer)))
    }

    /// Start over from the original location
    pub fn restart(&mut self) {
        self.queue.clear();
        self.visited.clear();
        self.queue.push_back((self.start, 0));
        self.visited.insert(self.start);
    }

    /// Next location together with its hop count from the start
    pub fn next_ranked(&mut self) -> Option<(LocationId, u32)> {
        let (location, hops) = self.queue.pop_front()?;
        for exit in self.world.exits(location) {
            let destination = exit.destination;
            if self.visited.contains(&destination) || !self.may_expand(destination) {
                continue;
            }
            self.visited.insert(destination);
            self.queue.push_back((destination, hops + 1));
        }
        Some((location, hops))
    }

    fn may_expand(&self, destination: LocationId) -> bool {
        match self.observer {
            None => true,
            Some(observer) => self
                .world
                .location(destination)
                .is_some_and(|location| location.ground.can_actor_enter(observer)),
        }
    }

    /// Iterate locations with hop counts
    pub fn ranked(mut self) -> impl Iterator<Item = (LocationId, u32)> + 'w {
        std::iter::from_fn(move || self.next_ranked())
    }
}

impl Iterator for ProximitySearch<'_> {
    type Item = LocationId;

    fn next(&mut self) -> Option<LocationId> {
        self.next_ranked().map(|(location, _)| location)
    }
}

impl FusedIterator for ProximitySearch<'_> {}

/// Hops from `from` to `to` over ground `observer` may enter
pub fn hop_distance(
    world: &World,
    from: LocationId,
    to: LocationId,
    observer: Option<ActorCapabilities>,
) -> Option<u32> {
    ProximitySearch::new(world, from, observer)
        .ranked()
        .find(|(location, _)| *location == to)
        .map(|(_, hops)| hops)
}

/// First exit, in exit order, that brings `actor` strictly closer to `target`
///
/// Only exits the actor can take right now (ground and occupancy) count.
/// Returns `None` when already there, unreachable, or boxed in.
pub fn next_step(world: &World, actor: ActorId, target: LocationId) -> Option<Exit> {
    let here = world.location_of(actor)?;
    if here == target {
        return None;
    }
    let observer = Some(world.actor(actor)?.capabilities());
    let current = hop_distance(world, here, target, observer)?;
    world
        .exits(here)
        .iter()
        .filter(|exit| world.can_enter(actor, exit.destination))
        .find(|exit| {
            hop_distance(world, exit.destination, target, observer)
                .is_some_and(|remaining| remaining < current)
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;
    use crate::core::types::{Gender, GrowthStage, MapId};
    use crate::entity::capability::ActorCapability;
    use crate::entity::dinosaur::Dinosaur;
    use crate::entity::species::Species;
    use crate::world::GroundFactory;

    fn world_with(rows: &[&str]) -> World {
        let mut world = World::new(SimulationConfig::default());
        let factory = GroundFactory::standard(&world.config);
        world.add_layout(rows, &factory).unwrap();
        world
    }

    fn at(x: u32, y: u32) -> LocationId {
        LocationId::new(MapId(0), x, y)
    }

    #[test]
    fn test_start_comes_first_then_rings() {
        let world = world_with(&[".....", ".....", "....."]);
        let hops: Vec<(LocationId, u32)> =
            ProximitySearch::new(&world, at(0, 1), None).ranked().collect();
        assert_eq!(hops[0], (at(0, 1), 0));
        assert_eq!(hops.len(), 15);
        assert!(hops.windows(2).all(|pair| pair[0].1 <= pair[1].1));
        assert_eq!(hops.last().unwrap().1, 4);
    }

    #[test]
    fn test_neighbours_follow_exit_order() {
        let world = world_with(&["...", "...", "..."]);
        let order: Vec<LocationId> = ProximitySearch::new(&world, at(1, 1), None).take(9).collect();
        assert_eq!(
            order,
            vec![
                at(1, 1),
                at(1, 0),
                at(2, 0),
                at(2, 1),
                at(2, 2),
                at(1, 2),
                at(0, 2),
                at(0, 1),
                at(0, 0),
            ]
        );
    }

    #[test]
    fn test_observer_cannot_see_past_water() {
        let world = world_with(&[".~."]);
        let walker = ActorCapabilities::new();
        let flyer = ActorCapabilities::new().with(ActorCapability::Fly);
        assert_eq!(ProximitySearch::new(&world, at(0, 0), Some(walker)).count(), 1);
        assert_eq!(ProximitySearch::new(&world, at(0, 0), Some(flyer)).count(), 3);
        assert_eq!(ProximitySearch::new(&world, at(0, 0), None).count(), 3);
        assert_eq!(hop_distance(&world, at(0, 0), at(2, 0), Some(walker)), None);
        assert_eq!(hop_distance(&world, at(0, 0), at(2, 0), Some(flyer)), Some(2));
    }

    #[test]
    fn test_restart_replays_sequence() {
        let world = world_with(&["....", "...."]);
        let mut search = ProximitySearch::new(&world, at(3, 1), None);
        let first: Vec<LocationId> = search.by_ref().collect();
        assert_eq!(search.next(), None);
        search.restart();
        let second: Vec<LocationId> = search.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_next_step_goes_around_walls() {
        let mut world = world_with(&[".#.", ".#.", "..."]);
        let dino = Dinosaur::new(Species::Stegosaur, GrowthStage::Adult, Gender::Male, &mut world.ids);
        let id = world.add_actor(dino, at(0, 0)).unwrap();
        let step = next_step(&world, id, at(2, 0)).unwrap();
        assert_eq!(step.destination, at(0, 1));
        assert!(next_step(&world, id, at(0, 0)).is_none());
    }
}
