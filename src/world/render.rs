//! Text rendering of a map
//!
//! Each cell shows its actor, else its last item, else its ground.

use crate::core::types::MapId;
use crate::world::World;

/// Render one map as rows of display characters
pub fn render_map(world: &World, map: MapId) -> Vec<String> {
    let Some(game_map) = world.map(map) else {
        return Vec::new();
    };
    game_map
        .y_range()
        .map(|y| {
            game_map
                .x_range()
                .filter_map(|x| game_map.at(x, y))
                .map(|location| {
                    if let Some(actor) = location.actor.and_then(|id| world.actor(id)) {
                        actor.display_char()
                    } else if let Some(item) = location.items.last() {
                        item.display_char()
                    } else {
                        location.ground.display_char
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;
    use crate::core::types::{Gender, GrowthStage, LocationId};
    use crate::entity::dinosaur::Dinosaur;
    use crate::entity::species::Species;
    use crate::world::item::Item;
    use crate::world::map::GroundFactory;

    #[test]
    fn test_actor_over_item_over_ground() {
        let mut world = World::new(SimulationConfig::default());
        let factory = GroundFactory::standard(&world.config);
        let map = world.add_layout(&["..#", "~+*"], &factory).unwrap();
        let dino = Dinosaur::new(Species::Allosaur, GrowthStage::Baby, Gender::Male, &mut world.ids);
        world.add_actor(dino, LocationId::new(map, 0, 0)).unwrap();
        world.add_item(LocationId::new(map, 1, 0), Item::fruit()).unwrap();
        world.add_item(LocationId::new(map, 0, 0), Item::fruit()).unwrap();

        assert_eq!(render_map(&world, map), vec!["af#", "~+*"]);
    }

    #[test]
    fn test_unknown_map_renders_nothing() {
        let world = World::new(SimulationConfig::default());
        assert!(render_map(&world, MapId(3)).is_empty());
    }
}
