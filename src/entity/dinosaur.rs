//! Dinosaur actors and their species factory

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::fmt;

use crate::core::error::Result;
use crate::core::types::{ActorId, Gender, GrowthStage, IdGenerator};
use crate::entity::capability::{ActorCapabilities, ActorCapability};
use crate::entity::components::{FlightStamina, HuntingBlacklist};
use crate::entity::needs::Needs;
use crate::entity::species::{Species, SpeciesProfile};
use crate::world::item::{Corpse, Egg, Item};

/// A dinosaur of any species
///
/// Species differences live in the [`SpeciesProfile`] table and the
/// optional components; everything else is shared.
#[derive(Debug, Clone)]
pub struct Dinosaur {
    pub id: ActorId,
    pub species: Species,
    pub name: String,
    pub display_char: char,
    pub stage: GrowthStage,
    pub needs: Needs,
    pub age: u32,
    pub pregnant_turns: u32,
    pub unconscious_turns: u32,
    pub capabilities: ActorCapabilities,
    pub inventory: Vec<Item>,
    pub blacklist: Option<HuntingBlacklist>,
    pub flight: Option<FlightStamina>,
}

impl Dinosaur {
    /// Create a dinosaur with an explicit gender
    pub fn new(species: Species, stage: GrowthStage, gender: Gender, ids: &mut IdGenerator) -> Self {
        let profile = species.profile();
        let (name, display_char, stats, age) = match stage {
            GrowthStage::Baby => (
                format!("Baby {}", profile.name),
                profile.display_char.to_ascii_lowercase(),
                profile.baby,
                0,
            ),
            GrowthStage::Adult => (
                profile.name.to_string(),
                profile.display_char.to_ascii_uppercase(),
                profile.adult,
                profile.adult_age,
            ),
        };

        let mut capabilities = profile.base_capabilities();
        capabilities.set(ActorCapability::Female, gender == Gender::Female);

        Self {
            id: ids.next_id(),
            species,
            name,
            display_char,
            stage,
            needs: Needs::new(
                stats.hit_points,
                profile.max_hit_points,
                stats.water_level,
                profile.max_water_level,
            ),
            age,
            pregnant_turns: 0,
            unconscious_turns: 0,
            capabilities,
            inventory: Vec::new(),
            blacklist: profile.is_hunter().then(HuntingBlacklist::new),
            flight: profile.flies.then(|| FlightStamina::new(0)),
        }
    }

    /// Create a dinosaur whose gender is drawn from `rng`
    pub fn with_random_gender(
        species: Species,
        stage: GrowthStage,
        ids: &mut IdGenerator,
        rng: &mut ChaCha8Rng,
    ) -> Self {
        let gender = if rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };
        Self::new(species, stage, gender, ids)
    }

    /// Factory taking the textual tokens used by park setup (`"baby"`/`"adult"`, `'M'`/`'F'`)
    pub fn from_tokens(
        species: Species,
        stage: &str,
        gender: Option<char>,
        ids: &mut IdGenerator,
        rng: &mut ChaCha8Rng,
    ) -> Result<Self> {
        let stage = GrowthStage::from_token(stage)?;
        match gender {
            Some(token) => Ok(Self::new(species, stage, Gender::from_token(token)?, ids)),
            None => Ok(Self::with_random_gender(species, stage, ids, rng)),
        }
    }

    pub fn profile(&self) -> &'static SpeciesProfile {
        self.species.profile()
    }

    pub fn has(&self, tag: ActorCapability) -> bool {
        self.capabilities.has(tag)
    }

    pub fn is_adult(&self) -> bool {
        self.stage == GrowthStage::Adult
    }

    pub fn is_female(&self) -> bool {
        self.has(ActorCapability::Female)
    }

    pub fn is_pregnant(&self) -> bool {
        self.has(ActorCapability::Pregnant)
    }

    pub fn is_conscious(&self) -> bool {
        self.needs.is_conscious()
    }

    pub fn is_hungry(&self) -> bool {
        self.needs.hit_points < self.profile().hungry_below
    }

    pub fn is_thirsty(&self, threshold: i32) -> bool {
        self.needs.water_level < threshold
    }

    /// Fertility ignoring the nesting-ground requirement
    pub fn can_breed(&self) -> bool {
        self.is_conscious()
            && self.is_adult()
            && self.needs.hit_points >= self.profile().breed_at
            && !self.is_pregnant()
    }

    /// Age by one turn; returns true on the turn the dinosaur grows up
    pub fn grow_older(&mut self) -> bool {
        self.age += 1;
        if self.stage == GrowthStage::Baby && self.age >= self.profile().adult_age {
            self.stage = GrowthStage::Adult;
            self.name = self.profile().name.to_string();
            self.display_char = self.display_char.to_ascii_uppercase();
            return true;
        }
        false
    }

    pub fn become_pregnant(&mut self) {
        self.capabilities.add(ActorCapability::Pregnant);
        self.pregnant_turns = 0;
    }

    /// Bite damage for hunters, depending on growth stage
    pub fn bite_damage(&self) -> Option<i32> {
        self.profile().bite.map(|bite| {
            if self.is_adult() {
                bite.adult_damage
            } else {
                bite.baby_damage
            }
        })
    }

    /// Lay an egg holding a new baby of the same species
    pub fn lay_egg(&mut self, ids: &mut IdGenerator, rng: &mut ChaCha8Rng) -> Item {
        self.capabilities.remove(ActorCapability::Pregnant);
        self.pregnant_turns = 0;
        let baby = Dinosaur::with_random_gender(self.species, GrowthStage::Baby, ids, rng);
        Item::Egg(Egg::new(baby))
    }

    /// The corpse this dinosaur leaves behind
    pub fn corpse(&self) -> Item {
        let spec = self.profile().corpse;
        Item::Corpse(Corpse::new(self.species, spec.lifetime, spec.portion))
    }
}

impl fmt::Display for Dinosaur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::DinoError;
    use rand::SeedableRng;

    #[test]
    fn test_baby_starts_lowercase_and_young() {
        let mut ids = IdGenerator::new();
        let dino = Dinosaur::new(Species::Stegosaur, GrowthStage::Baby, Gender::Male, &mut ids);
        assert_eq!(dino.name, "Baby Stegosaur");
        assert_eq!(dino.display_char, 's');
        assert_eq!(dino.age, 0);
        assert_eq!(dino.needs.hit_points, 10);
        assert_eq!(dino.needs.water_level, 30);
        assert!(!dino.is_female());
    }

    #[test]
    fn test_adult_starts_at_adult_age() {
        let mut ids = IdGenerator::new();
        let dino = Dinosaur::new(Species::Brachiosaur, GrowthStage::Adult, Gender::Female, &mut ids);
        assert_eq!(dino.to_string(), "Brachiosaur[1]");
        assert_eq!(dino.display_char, 'B');
        assert_eq!(dino.age, 50);
        assert!(dino.is_female());
        assert!(dino.has(ActorCapability::Tall));
        assert!(dino.has(ActorCapability::CrushGround));
    }

    #[test]
    fn test_growing_up_happens_once() {
        let mut ids = IdGenerator::new();
        let mut dino = Dinosaur::new(Species::Pterodactyl, GrowthStage::Baby, Gender::Male, &mut ids);
        let mut transitions = 0;
        for _ in 0..40 {
            if dino.grow_older() {
                transitions += 1;
                assert_eq!(dino.age, 30);
            }
        }
        assert_eq!(transitions, 1);
        assert_eq!(dino.name, "Pterodactyl");
        assert_eq!(dino.display_char, 'P');
    }

    #[test]
    fn test_invalid_tokens_are_rejected() {
        let mut ids = IdGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let bad_stage = Dinosaur::from_tokens(Species::Allosaur, "elder", Some('M'), &mut ids, &mut rng);
        assert!(matches!(bad_stage, Err(DinoError::InvalidArgument(_))));
        let bad_gender = Dinosaur::from_tokens(Species::Allosaur, "adult", Some('X'), &mut ids, &mut rng);
        assert!(matches!(bad_gender, Err(DinoError::InvalidArgument(_))));
    }

    #[test]
    fn test_components_follow_species() {
        let mut ids = IdGenerator::new();
        let allo = Dinosaur::new(Species::Allosaur, GrowthStage::Adult, Gender::Male, &mut ids);
        let ptero = Dinosaur::new(Species::Pterodactyl, GrowthStage::Adult, Gender::Male, &mut ids);
        assert!(allo.blacklist.is_some() && allo.flight.is_none());
        assert!(ptero.flight.is_some() && ptero.blacklist.is_none());
        assert_eq!(allo.bite_damage(), Some(20));
        assert_eq!(ptero.bite_damage(), None);
    }

    #[test]
    fn test_lay_egg_clears_pregnancy() {
        let mut ids = IdGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut mother = Dinosaur::new(Species::Stegosaur, GrowthStage::Adult, Gender::Female, &mut ids);
        mother.become_pregnant();
        assert!(mother.is_pregnant());
        assert!(!mother.can_breed());
        let egg = mother.lay_egg(&mut ids, &mut rng);
        assert!(!mother.is_pregnant());
        match egg {
            Item::Egg(egg) => {
                assert_eq!(egg.baby.species, Species::Stegosaur);
                assert_eq!(egg.baby.id, ActorId(2));
            }
            other => panic!("expected an egg, got {other:?}"),
        }
    }
}
