//! Per-turn dinosaur lifecycle
//!
//! Aging, pregnancy, starvation and consciousness run before the behavior
//! chain gets a say. An unconscious dinosaur does nothing and dies once it
//! has been out for longer than its species survives.

use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::actions::catalog::Action;
use crate::actions::execute::kill;
use crate::core::error::{DinoError, Result};
use crate::core::types::{ActorId, LocationId};
use crate::entity::capability::{ActorCapability, GroundCapability};
use crate::simulation::action_select::{is_fertile, select_action};
use crate::world::World;

/// What happened during one dinosaur's lifecycle step
#[derive(Debug, Default)]
pub struct LifecycleOutcome {
    /// Narration lines, in the order they happened
    pub messages: Vec<String>,
    /// Chosen action; `None` when the dinosaur is unconscious, dead or idle
    pub action: Option<Action>,
    pub died: bool,
}

fn on_ground(world: &World, at: LocationId, tag: GroundCapability) -> bool {
    world
        .location(at)
        .is_some_and(|location| location.ground.has(tag))
}

/// Refresh the optional components before anything else looks at them
fn refresh_components(world: &mut World, id: ActorId, here: LocationId) -> Result<()> {
    let cooldown = world.config.hunting_cooldown_turns;
    let full_flight = world.config.flight_stamina_turns;
    let recharging = on_ground(world, here, GroundCapability::RechargeFlight);
    let dino = world.dinosaur_mut(id).ok_or(DinoError::ActorNotFound(id))?;

    if let Some(blacklist) = dino.blacklist.as_mut() {
        blacklist.advance(cooldown);
    }
    if let Some(flight) = dino.flight.as_mut() {
        let airborne = flight.refresh(recharging, full_flight);
        dino.capabilities.set(ActorCapability::Fly, airborne);
    }
    Ok(())
}

fn advance_pregnancy(
    world: &mut World,
    id: ActorId,
    here: LocationId,
    rng: &mut ChaCha8Rng,
) -> Result<Option<String>> {
    let dino = world.dinosaur(id).ok_or(DinoError::ActorNotFound(id))?;
    if !dino.is_pregnant() {
        return Ok(None);
    }
    let profile = dino.profile();
    let on_nest = profile
        .nesting_ground
        .map_or(true, |tag| on_ground(world, here, tag));

    let (dino, ids) = world
        .dinosaur_and_ids_mut(id)
        .ok_or(DinoError::ActorNotFound(id))?;
    dino.pregnant_turns += 1;
    if dino.pregnant_turns < profile.gestation_turns || !on_nest {
        return Ok(None);
    }

    let egg = dino.lay_egg(ids, rng);
    let message = format!("{dino} lays an egg.");
    info!(mother = %dino, at = %here, "egg laid");
    world.add_item(here, egg)?;
    Ok(Some(message))
}

/// Run one turn of the lifecycle for dinosaur `id`
pub fn play_turn(world: &mut World, id: ActorId, rng: &mut ChaCha8Rng) -> Result<LifecycleOutcome> {
    let here = world.location_of(id).ok_or(DinoError::ActorNotFound(id))?;
    let mut outcome = LifecycleOutcome::default();

    refresh_components(world, id, here)?;

    let dino = world.dinosaur_mut(id).ok_or(DinoError::ActorNotFound(id))?;
    if dino.grow_older() {
        debug!(dinosaur = %dino, "grew up");
    }

    if is_fertile(world, id) {
        if let Some(dino) = world.dinosaur(id) {
            outcome
                .messages
                .push(format!("{dino} at {here} is looking for mating partners."));
        }
    }

    if let Some(message) = advance_pregnancy(world, id, here, rng)? {
        outcome.messages.push(message);
    }

    let thirst_threshold = world.config.thirst_threshold;
    let dino = world.dinosaur_mut(id).ok_or(DinoError::ActorNotFound(id))?;
    dino.needs.decay();

    if !dino.is_conscious() {
        dino.unconscious_turns += 1;
        outcome
            .messages
            .push(format!("{dino} at {here} is unconscious!"));
        if dino.unconscious_turns > dino.profile().unconscious_survival_turns {
            info!(dinosaur = %dino, turns = dino.unconscious_turns, "died while unconscious");
            if let Some(message) = kill(world, id, true) {
                outcome.messages.push(message);
            }
            outcome.died = true;
        }
        return Ok(outcome);
    }
    dino.unconscious_turns = 0;

    if dino.is_hungry() {
        outcome
            .messages
            .push(format!("{dino} at {here} is getting hungry!"));
    }
    if dino.is_thirsty(thirst_threshold) {
        outcome
            .messages
            .push(format!("{dino} at {here} is getting thirsty!"));
    }

    outcome.action = select_action(world, id, rng);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;
    use crate::core::types::{Gender, GrowthStage, MapId};
    use crate::entity::dinosaur::Dinosaur;
    use crate::entity::species::Species;
    use crate::world::{GroundFactory, Item};
    use rand::SeedableRng;

    fn world_with(rows: &[&str]) -> World {
        let mut world = World::new(SimulationConfig::default());
        let factory = GroundFactory::standard(&world.config);
        world.add_layout(rows, &factory).unwrap();
        world
    }

    fn at(x: u32, y: u32) -> LocationId {
        LocationId::new(MapId(0), x, y)
    }

    fn place(world: &mut World, species: Species, stage: GrowthStage, loc: LocationId) -> ActorId {
        let dino = Dinosaur::new(species, stage, Gender::Female, &mut world.ids);
        world.add_actor(dino, loc).unwrap()
    }

    #[test]
    fn test_needs_drop_by_one() {
        let mut world = world_with(&["###", "#.#", "###"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let id = place(&mut world, Species::Stegosaur, GrowthStage::Adult, at(1, 1));
        play_turn(&mut world, id, &mut rng).unwrap();
        let dino = world.dinosaur(id).unwrap();
        assert_eq!(dino.needs.hit_points, 49);
        assert_eq!(dino.needs.water_level, 59);
        assert_eq!(dino.age, 31);
    }

    #[test]
    fn test_baby_grows_up_once() {
        let mut world = world_with(&["###", "#.#", "###"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let id = place(&mut world, Species::Stegosaur, GrowthStage::Baby, at(1, 1));
        world.dinosaur_mut(id).unwrap().needs.hit_points = 100;
        for _ in 0..30 {
            play_turn(&mut world, id, &mut rng).unwrap();
        }
        let dino = world.dinosaur(id).unwrap();
        assert!(dino.is_adult());
        assert_eq!(dino.display_char, 'S');
        assert_eq!(dino.name, "Stegosaur");
    }

    #[test]
    fn test_unconscious_does_nothing_then_dies() {
        let mut world = world_with(&["###", "#.#", "###"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let id = place(&mut world, Species::Allosaur, GrowthStage::Adult, at(1, 1));
        world.dinosaur_mut(id).unwrap().needs.water_level = 0;

        let survival = Species::Allosaur.profile().unconscious_survival_turns;
        for _ in 0..survival {
            let outcome = play_turn(&mut world, id, &mut rng).unwrap();
            assert!(outcome.action.is_none());
            assert!(!outcome.died);
        }
        let outcome = play_turn(&mut world, id, &mut rng).unwrap();
        assert!(outcome.died);
        assert!(world.actor(id).is_none());
        assert!(matches!(
            world.location(at(1, 1)).unwrap().items.as_slice(),
            [Item::Corpse(_)]
        ));
    }

    #[test]
    fn test_egg_laid_after_gestation() {
        let mut world = world_with(&["###", "#.#", "###"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let id = place(&mut world, Species::Stegosaur, GrowthStage::Adult, at(1, 1));
        world.dinosaur_mut(id).unwrap().become_pregnant();
        for _ in 0..9 {
            play_turn(&mut world, id, &mut rng).unwrap();
        }
        assert!(world.location(at(1, 1)).unwrap().items.is_empty());
        let outcome = play_turn(&mut world, id, &mut rng).unwrap();
        assert!(outcome.messages.iter().any(|line| line.ends_with("lays an egg.")));
        assert!(!world.dinosaur(id).unwrap().is_pregnant());
        assert!(matches!(
            world.location(at(1, 1)).unwrap().items.as_slice(),
            [Item::Egg(_)]
        ));
    }

    #[test]
    fn test_pterodactyl_holds_egg_off_the_nest() {
        let mut world = world_with(&["###", "#.#", "###"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let id = place(&mut world, Species::Pterodactyl, GrowthStage::Adult, at(1, 1));
        world.dinosaur_mut(id).unwrap().become_pregnant();
        for _ in 0..15 {
            play_turn(&mut world, id, &mut rng).unwrap();
        }
        assert!(world.dinosaur(id).unwrap().is_pregnant());
        assert!(world.location(at(1, 1)).unwrap().items.is_empty());
    }

    #[test]
    fn test_flight_tracks_stamina() {
        let mut world = world_with(&["+."]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let id = place(&mut world, Species::Pterodactyl, GrowthStage::Adult, at(0, 0));
        assert!(!world.dinosaur(id).unwrap().has(ActorCapability::Fly));
        play_turn(&mut world, id, &mut rng).unwrap();
        let dino = world.dinosaur(id).unwrap();
        assert!(dino.has(ActorCapability::Fly));
        assert_eq!(dino.flight.unwrap().remaining, 30);
    }

    #[test]
    fn test_status_lines() {
        let mut world = world_with(&["###", "#.#", "###"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let id = place(&mut world, Species::Stegosaur, GrowthStage::Adult, at(1, 1));
        world.dinosaur_mut(id).unwrap().needs.water_level = 30;
        let outcome = play_turn(&mut world, id, &mut rng).unwrap();
        assert!(outcome.messages.iter().any(|line| line.contains("is looking for mating partners.")));
        assert!(outcome.messages.iter().any(|line| line.ends_with("is getting hungry!")));
        assert!(outcome.messages.iter().any(|line| line.ends_with("is getting thirsty!")));
    }
}
