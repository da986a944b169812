//! Terrain kinds and their per-turn behavior

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimulationConfig;
use crate::entity::capability::{ActorCapabilities, ActorCapability, GroundCapabilities, GroundCapability};
use crate::entity::dinosaur::Dinosaur;
use crate::simulation::consumption::Nourishment;
use crate::world::item::Item;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroundKind {
    Dirt,
    Wall,
    Floor,
    Tree { age: u32 },
    Bush,
    Lake { draws: u32 },
    VendingMachine,
}

/// Terrain of one location
///
/// Plants and lakes keep a `store` of fruit or fish that foragers eat
/// straight from the ground.
#[derive(Debug, Clone)]
pub struct Ground {
    pub kind: GroundKind,
    pub capabilities: GroundCapabilities,
    pub display_char: char,
    pub store: Vec<Item>,
}

/// Side effects of a ground tick that reach beyond the ground itself
#[derive(Debug, Default)]
pub struct GroundTick {
    pub points: u64,
    pub dropped: Vec<Item>,
}

impl Ground {
    fn plain(kind: GroundKind, display_char: char, capabilities: GroundCapabilities) -> Self {
        Self {
            kind,
            capabilities,
            display_char,
            store: Vec::new(),
        }
    }

    pub fn dirt() -> Self {
        Self::plain(
            GroundKind::Dirt,
            '.',
            GroundCapabilities::new().with(GroundCapability::Fertile),
        )
    }

    pub fn wall() -> Self {
        Self::plain(GroundKind::Wall, '#', GroundCapabilities::new())
    }

    pub fn floor() -> Self {
        Self::plain(GroundKind::Floor, '_', GroundCapabilities::new())
    }

    pub fn tree() -> Self {
        Self::plain(
            GroundKind::Tree { age: 0 },
            '+',
            GroundCapabilities::new()
                .with(GroundCapability::RechargeFlight)
                .with(GroundCapability::BlocksShortPlantGrowth),
        )
    }

    pub fn bush() -> Self {
        Self::plain(
            GroundKind::Bush,
            '*',
            GroundCapabilities::new()
                .with(GroundCapability::Crushable)
                .with(GroundCapability::ShortPlant),
        )
    }

    pub fn lake(config: &SimulationConfig) -> Self {
        let mut lake = Self::plain(
            GroundKind::Lake {
                draws: config.lake_initial_draws,
            },
            '~',
            GroundCapabilities::new(),
        );
        lake.store = vec![Item::Fish; config.lake_initial_fish];
        lake
    }

    pub fn vending_machine() -> Self {
        Self::plain(GroundKind::VendingMachine, '$', GroundCapabilities::new())
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            GroundKind::Dirt => "Dirt",
            GroundKind::Wall => "Wall",
            GroundKind::Floor => "Floor",
            GroundKind::Tree { .. } => "Tree",
            GroundKind::Bush => "Bush",
            GroundKind::Lake { .. } => "Lake",
            GroundKind::VendingMachine => "Vending Machine",
        }
    }

    pub fn has(&self, tag: GroundCapability) -> bool {
        self.capabilities.has(tag)
    }

    /// Ground-level entry rule; occupancy is checked separately
    pub fn can_actor_enter(&self, actor: ActorCapabilities) -> bool {
        match self.kind {
            GroundKind::Wall | GroundKind::VendingMachine => false,
            GroundKind::Lake { .. } => actor.has(ActorCapability::Fly),
            _ => true,
        }
    }

    pub fn is_water_source(&self) -> bool {
        matches!(self.kind, GroundKind::Lake { .. })
    }

    pub fn has_draws(&self) -> bool {
        matches!(self.kind, GroundKind::Lake { draws } if draws > 0)
    }

    pub fn draws(&self) -> u32 {
        match self.kind {
            GroundKind::Lake { draws } => draws,
            _ => 0,
        }
    }

    pub fn add_draws(&mut self, amount: u32) {
        if let GroundKind::Lake { draws } = &mut self.kind {
            *draws += amount;
        }
    }

    /// Take one draw of water; false when dry or not a water source
    pub fn take_draw(&mut self) -> bool {
        match &mut self.kind {
            GroundKind::Lake { draws } if *draws > 0 => {
                *draws -= 1;
                true
            }
            _ => false,
        }
    }

    fn count_fruit(&self) -> usize {
        self.store.iter().filter(|item| item.is_fruit()).count()
    }

    fn count_fish(&self) -> usize {
        self.store.iter().filter(|item| matches!(item, Item::Fish)).count()
    }

    /// Remove up to `quantity` matching items from the store, returning how many went
    fn remove_stored(&mut self, quantity: usize, matches: impl Fn(&Item) -> bool) -> usize {
        let mut removed = 0;
        let mut index = 0;
        while removed < quantity && index < self.store.len() {
            if matches(&self.store[index]) {
                self.store.remove(index);
                removed += 1;
            } else {
                index += 1;
            }
        }
        removed
    }

    /// Food this ground could offer `eater` right now, without taking any
    pub fn forage_scout(&self, eater: &Dinosaur) -> Option<Nourishment> {
        let food = match self.kind {
            GroundKind::Bush if eater.has(ActorCapability::Short) => self.count_fruit() as i32 * 10,
            GroundKind::Tree { .. } if eater.has(ActorCapability::Tall) => self.count_fruit() as i32 * 5,
            GroundKind::Lake { .. } if eater.has(ActorCapability::Fly) => self.count_fish() as i32 * 5,
            _ => 0,
        };
        (food > 0).then_some(Nourishment { food, water: 0 })
    }

    /// Eat from the store; plants give just enough fruit to fill the eater up
    pub fn forage_commit(
        &mut self,
        eater: &Dinosaur,
        rng: &mut ChaCha8Rng,
        config: &SimulationConfig,
    ) -> Option<Nourishment> {
        let missing = eater.needs.missing_hit_points().max(0) as usize;
        match self.kind {
            GroundKind::Bush if eater.has(ActorCapability::Short) => {
                let eaten = self.remove_stored(missing.div_ceil(10), Item::is_fruit);
                (eaten > 0).then_some(Nourishment {
                    food: eaten as i32 * 10,
                    water: 0,
                })
            }
            GroundKind::Tree { .. } if eater.has(ActorCapability::Tall) => {
                let eaten = self.remove_stored(missing.div_ceil(5), Item::is_fruit);
                (eaten > 0).then_some(Nourishment {
                    food: eaten as i32 * 5,
                    water: 0,
                })
            }
            GroundKind::Lake { .. } if eater.has(ActorCapability::Fly) => {
                let caught = self.remove_stored(rng.gen_range(0..2), |item| matches!(item, Item::Fish));
                let water = if self.take_draw() {
                    config.lake_flyer_water
                } else {
                    0
                };
                let food = caught as i32 * 5;
                (food > 0 || water > 0).then_some(Nourishment { food, water })
            }
            _ => None,
        }
    }

    /// Grow, fruit and spawn for one turn
    pub fn tick(&mut self, rng: &mut ChaCha8Rng, config: &SimulationConfig) -> GroundTick {
        let mut effects = GroundTick::default();
        match &mut self.kind {
            GroundKind::Tree { age } => {
                *age += 1;
                if *age == config.tree_young_age {
                    self.display_char = 't';
                } else if *age == config.tree_mature_age {
                    self.display_char = 'T';
                }

                if rng.gen_bool(config.tree_fruit_chance) {
                    self.store.push(Item::fruit());
                    effects.points += config.tree_fruit_points;
                }

                for _ in 0..self.store.len() {
                    if rng.gen_bool(config.tree_fruit_drop_chance) && !self.store.is_empty() {
                        effects.dropped.push(self.store.remove(0));
                    }
                }
            }
            GroundKind::Bush => {
                if rng.gen_bool(config.bush_fruit_chance) {
                    self.store.push(Item::fruit());
                }
            }
            GroundKind::Lake { .. } => {
                if self.store.len() < config.lake_max_fish && rng.gen_bool(config.lake_fish_chance) {
                    self.store.push(Item::Fish);
                }
            }
            _ => {}
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Gender, GrowthStage, IdGenerator};
    use crate::entity::species::Species;
    use rand::SeedableRng;

    fn dino(species: Species) -> Dinosaur {
        let mut ids = IdGenerator::new();
        Dinosaur::new(species, GrowthStage::Adult, Gender::Male, &mut ids)
    }

    #[test]
    fn test_entry_rules() {
        let walker = ActorCapabilities::new();
        let flyer = ActorCapabilities::new().with(ActorCapability::Fly);
        let config = SimulationConfig::default();
        assert!(Ground::dirt().can_actor_enter(walker));
        assert!(!Ground::wall().can_actor_enter(flyer));
        assert!(!Ground::vending_machine().can_actor_enter(walker));
        assert!(!Ground::lake(&config).can_actor_enter(walker));
        assert!(Ground::lake(&config).can_actor_enter(flyer));
    }

    #[test]
    fn test_bush_feeds_only_short_species() {
        let mut bush = Ground::bush();
        bush.store = vec![Item::fruit(), Item::fruit()];
        assert_eq!(
            bush.forage_scout(&dino(Species::Stegosaur)),
            Some(Nourishment { food: 20, water: 0 })
        );
        assert_eq!(bush.forage_scout(&dino(Species::Brachiosaur)), None);
    }

    #[test]
    fn test_tree_gives_just_enough_fruit() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut tree = Ground::tree();
        tree.store = vec![Item::fruit(); 30];
        let mut brachio = dino(Species::Brachiosaur);
        brachio.needs.hit_points = 149;
        let meal = tree.forage_commit(&brachio, &mut rng, &config);
        assert_eq!(meal, Some(Nourishment { food: 15, water: 0 }));
        assert_eq!(tree.store.len(), 27);
    }

    #[test]
    fn test_lake_draws() {
        let config = SimulationConfig::default();
        let mut lake = Ground::lake(&config);
        assert_eq!(lake.draws(), 25);
        assert!(lake.take_draw());
        lake.add_draws(3);
        assert_eq!(lake.draws(), 27);
        assert!(!Ground::dirt().take_draw());
    }

    #[test]
    fn test_lake_never_exceeds_fish_cap() {
        let mut config = SimulationConfig::default();
        config.lake_fish_chance = 1.0;
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut lake = Ground::lake(&config);
        for _ in 0..100 {
            lake.tick(&mut rng, &config);
        }
        assert_eq!(lake.store.len(), config.lake_max_fish);
    }

    #[test]
    fn test_tree_grows_up() {
        let mut config = SimulationConfig::default();
        config.tree_fruit_chance = 0.0;
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut tree = Ground::tree();
        for _ in 0..config.tree_young_age {
            tree.tick(&mut rng, &config);
        }
        assert_eq!(tree.display_char, 't');
        for _ in config.tree_young_age..config.tree_mature_age {
            tree.tick(&mut rng, &config);
        }
        assert_eq!(tree.display_char, 'T');
    }
}
