//! Property tests for the nearest-first search and the consumption table

use dino_park::core::config::SimulationConfig;
use dino_park::core::types::{Gender, GrowthStage, IdGenerator, LocationId, MapId};
use dino_park::entity::{ActorCapabilities, Dinosaur, Species};
use dino_park::simulation::consumption::{scout, Nourishment};
use dino_park::simulation::proximity::ProximitySearch;
use dino_park::world::item::Corpse;
use dino_park::world::{GroundFactory, Item, World};
use proptest::prelude::*;
use std::collections::HashSet;

fn world_from(rows: &[String]) -> World {
    let mut world = World::new(SimulationConfig::default());
    let factory = GroundFactory::standard(&world.config);
    world.add_layout(rows, &factory).unwrap();
    world
}

fn layout() -> impl Strategy<Value = Vec<String>> {
    (1usize..7, 1usize..7).prop_flat_map(|(width, height)| {
        prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!['.', '#', '~', '_']), width),
            height,
        )
        .prop_map(|rows| rows.into_iter().map(|row| row.into_iter().collect()).collect())
    })
}

#[test]
fn test_line_with_cycles_visits_each_once() {
    let world = world_from(&["....".to_string()]);
    let order: Vec<LocationId> = ProximitySearch::new(&world, LocationId::new(MapId(0), 0, 0), None).collect();
    let expected: Vec<LocationId> = (0..4).map(|x| LocationId::new(MapId(0), x, 0)).collect();
    assert_eq!(order, expected);
}

proptest! {
    #[test]
    fn test_unfiltered_search_covers_grid_once(rows in layout()) {
        let world = world_from(&rows);
        let start = LocationId::new(MapId(0), 0, 0);
        let seen: Vec<LocationId> = ProximitySearch::new(&world, start, None).collect();
        let unique: HashSet<LocationId> = seen.iter().copied().collect();
        prop_assert_eq!(seen.len(), unique.len());
        prop_assert_eq!(seen.len(), rows.len() * rows[0].len());
        prop_assert_eq!(seen[0], start);
    }

    #[test]
    fn test_hops_never_decrease(rows in layout()) {
        let world = world_from(&rows);
        let walker = Some(ActorCapabilities::new());
        let ranked: Vec<(LocationId, u32)> =
            ProximitySearch::new(&world, LocationId::new(MapId(0), 0, 0), walker).ranked().collect();
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].1);
        }
        for (at, hops) in ranked.iter().skip(1) {
            let location = world.location(*at).unwrap();
            prop_assert!(location.ground.can_actor_enter(ActorCapabilities::new()));
            prop_assert!(*hops >= 1);
        }
    }

    #[test]
    fn test_restart_replays_the_same_order(rows in layout()) {
        let world = world_from(&rows);
        let mut search = ProximitySearch::new(&world, LocationId::new(MapId(0), 0, 0), None);
        let first: Vec<LocationId> = search.by_ref().collect();
        search.restart();
        let second: Vec<LocationId> = search.collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_consumption_table_is_total(species_index in 0usize..4, item_index in 0usize..7, portion in -20i32..120) {
        let config = SimulationConfig::default();
        let mut ids = IdGenerator::new();
        let species = Species::ALL[species_index];
        let eater = Dinosaur::new(species, GrowthStage::Adult, Gender::Female, &mut ids);
        let item = match item_index {
            0 => Item::fruit(),
            1 => Item::Fish,
            2 => Item::VegetarianMealKit,
            3 => Item::CarnivoreMealKit,
            4 => Item::WaterBottle,
            5 => Item::Corpse(Corpse::new(Species::Stegosaur, 40, portion)),
            _ => Item::LaserGun,
        };
        let meal = scout(&eater, &item, &config);
        match item {
            Item::WaterBottle => prop_assert_eq!(meal, Some(Nourishment::water(eater.needs.max_water_level))),
            Item::LaserGun => prop_assert_eq!(meal, None),
            Item::Corpse(_) if portion <= 0 => prop_assert_eq!(meal, None),
            _ => {
                if let Some(meal) = meal {
                    prop_assert!(meal.food > 0);
                }
            }
        }
    }
}
