//! Items lying on the ground, stored in plants, or carried by actors

use crate::core::config::SimulationConfig;
use crate::entity::dinosaur::Dinosaur;
use crate::entity::species::Species;

#[derive(Debug, Clone)]
pub enum Item {
    Fruit(Fruit),
    Fish,
    VegetarianMealKit,
    CarnivoreMealKit,
    WaterBottle,
    Corpse(Corpse),
    Egg(Egg),
    LaserGun,
}

/// Fruit only ages once it has fallen to the ground
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fruit {
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpse {
    pub species: Species,
    pub age: u32,
    pub lifetime: u32,
    /// Food left; nibbling eaters wear this down
    pub portion: i32,
}

impl Corpse {
    pub fn new(species: Species, lifetime: u32, portion: i32) -> Self {
        Self {
            species,
            age: 0,
            lifetime,
            portion,
        }
    }
}

/// An egg carries the baby that will hatch from it
#[derive(Debug, Clone)]
pub struct Egg {
    pub age: u32,
    pub baby: Box<Dinosaur>,
}

impl Egg {
    pub fn new(baby: Dinosaur) -> Self {
        Self {
            age: 0,
            baby: Box::new(baby),
        }
    }

    pub fn species(&self) -> Species {
        self.baby.species
    }

    pub fn hatch_turns(&self) -> u32 {
        self.baby.profile().egg.hatch_turns
    }

    pub fn hatch_points(&self) -> u64 {
        self.baby.profile().egg.hatch_points
    }
}

/// Outcome of one tick for an item lying at a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFate {
    Keep,
    Remove,
    ReadyToHatch,
}

impl Item {
    pub fn name(&self) -> String {
        match self {
            Item::Fruit(_) => "Fruit".into(),
            Item::Fish => "Fish".into(),
            Item::VegetarianMealKit => "Vegetarian Meal Kit".into(),
            Item::CarnivoreMealKit => "Carnivore Meal Kit".into(),
            Item::WaterBottle => "Water Bottle".into(),
            Item::Corpse(c) => format!("{} Corpse", c.species),
            Item::Egg(e) => format!("{} Egg", e.species()),
            Item::LaserGun => "Laser Gun".into(),
        }
    }

    pub fn display_char(&self) -> char {
        match self {
            Item::Fruit(_) => 'f',
            Item::Fish => '>',
            Item::VegetarianMealKit => 'v',
            Item::CarnivoreMealKit => 'c',
            Item::WaterBottle => 'w',
            Item::Corpse(_) => '%',
            Item::Egg(_) => 'e',
            Item::LaserGun => 'L',
        }
    }

    pub fn is_fruit(&self) -> bool {
        matches!(self, Item::Fruit(_))
    }

    pub fn fruit() -> Self {
        Item::Fruit(Fruit::default())
    }

    /// Age a loose item by one turn
    pub fn tick(&mut self, config: &SimulationConfig) -> ItemFate {
        match self {
            Item::Fruit(fruit) => {
                fruit.age += 1;
                if fruit.age >= config.fruit_lifetime {
                    ItemFate::Remove
                } else {
                    ItemFate::Keep
                }
            }
            Item::Corpse(corpse) => {
                corpse.age += 1;
                if corpse.age >= corpse.lifetime || corpse.portion <= 0 {
                    ItemFate::Remove
                } else {
                    ItemFate::Keep
                }
            }
            Item::Egg(egg) => {
                egg.age += 1;
                if egg.age >= egg.hatch_turns() {
                    ItemFate::ReadyToHatch
                } else {
                    ItemFate::Keep
                }
            }
            _ => ItemFate::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Gender, GrowthStage, IdGenerator};

    #[test]
    fn test_fruit_rots() {
        let config = SimulationConfig::default();
        let mut fruit = Item::fruit();
        for _ in 1..config.fruit_lifetime {
            assert_eq!(fruit.tick(&config), ItemFate::Keep);
        }
        assert_eq!(fruit.tick(&config), ItemFate::Remove);
    }

    #[test]
    fn test_exhausted_corpse_is_removed() {
        let config = SimulationConfig::default();
        let mut corpse = Item::Corpse(Corpse::new(Species::Allosaur, 20, 0));
        assert_eq!(corpse.tick(&config), ItemFate::Remove);
    }

    #[test]
    fn test_egg_ready_exactly_at_hatch_time() {
        let config = SimulationConfig::default();
        let mut ids = IdGenerator::new();
        let baby = Dinosaur::new(Species::Brachiosaur, GrowthStage::Baby, Gender::Male, &mut ids);
        let mut egg = Item::Egg(Egg::new(baby));
        for _ in 1..20 {
            assert_eq!(egg.tick(&config), ItemFate::Keep);
        }
        assert_eq!(egg.tick(&config), ItemFate::ReadyToHatch);
    }

    #[test]
    fn test_names() {
        assert_eq!(Item::VegetarianMealKit.name(), "Vegetarian Meal Kit");
        let corpse = Item::Corpse(Corpse::new(Species::Stegosaur, 40, 50));
        assert_eq!(corpse.name(), "Stegosaur Corpse");
    }
}
