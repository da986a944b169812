//! Who can eat what, and how much it is worth
//!
//! One table maps (species, item) to food and water gains. Pairs missing
//! from the table are not edible. Scouting is pure; committing may wear the
//! item down (a nibbled corpse).

use crate::core::config::SimulationConfig;
use crate::entity::dinosaur::Dinosaur;
use crate::entity::species::Species;
use crate::world::item::Item;

/// Food and water restored by one meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nourishment {
    pub food: i32,
    pub water: i32,
}

impl Nourishment {
    pub fn food(food: i32) -> Self {
        Self { food, water: 0 }
    }

    pub fn water(water: i32) -> Self {
        Self { food: 0, water }
    }
}

/// Whether resolution may change the item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    Scout,
    Commit,
}

fn table(eater: &Dinosaur, item: &Item, config: &SimulationConfig) -> Option<Nourishment> {
    use Species::*;

    let max_hp = eater.needs.max_hit_points;
    let max_water = eater.needs.max_water_level;
    match (item, eater.species) {
        (Item::Fruit(_), Stegosaur | Brachiosaur) => Some(Nourishment::food(20)),
        (Item::Fish, Pterodactyl) => Some(Nourishment::food(5)),
        (Item::VegetarianMealKit, Stegosaur | Brachiosaur) => Some(Nourishment::food(max_hp)),
        (Item::CarnivoreMealKit, Allosaur | Pterodactyl) => Some(Nourishment::food(max_hp)),
        (Item::WaterBottle, _) => Some(Nourishment::water(max_water)),
        (Item::Corpse(corpse), Allosaur) if corpse.portion > 0 => Some(Nourishment::food(corpse.portion)),
        (Item::Corpse(corpse), Pterodactyl) if corpse.portion > 0 => {
            Some(Nourishment::food(config.corpse_nibble))
        }
        (Item::Egg(_), Allosaur | Pterodactyl) => Some(Nourishment::food(10)),
        _ => None,
    }
}

/// What `item` would give `eater`, leaving it untouched
pub fn scout(eater: &Dinosaur, item: &Item, config: &SimulationConfig) -> Option<Nourishment> {
    table(eater, item, config)
}

/// Resolve a meal; in commit mode nibbling eaters wear corpses down
pub fn resolve(
    eater: &Dinosaur,
    item: &mut Item,
    mode: ResolveMode,
    config: &SimulationConfig,
) -> Option<Nourishment> {
    let meal = table(eater, item, config)?;
    if mode == ResolveMode::Commit {
        if let (Item::Corpse(corpse), Species::Pterodactyl) = (&mut *item, eater.species) {
            corpse.portion -= config.corpse_nibble;
        }
    }
    Some(meal)
}

/// A loose item worth walking to when hungry
pub fn is_food_for(eater: &Dinosaur, item: &Item, config: &SimulationConfig) -> bool {
    scout(eater, item, config).is_some_and(|meal| meal.food > 0)
}
