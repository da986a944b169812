//! Stegosaur: short grazer and the park's staple prey

use super::{CorpseSpec, EggSpec, SpeciesProfile, StartingStats};
use crate::entity::capability::ActorCapability;
use crate::simulation::action_select::Behavior;

pub const PROFILE: SpeciesProfile = SpeciesProfile {
    name: "Stegosaur",
    display_char: 's',
    max_hit_points: 100,
    max_water_level: 100,
    baby: StartingStats {
        hit_points: 10,
        water_level: 30,
    },
    adult: StartingStats {
        hit_points: 50,
        water_level: 60,
    },
    adult_age: 30,
    hungry_below: 90,
    breed_at: 50,
    gestation_turns: 10,
    unconscious_survival_turns: 19,
    corpse: CorpseSpec {
        lifetime: 40,
        portion: 50,
    },
    egg: EggSpec {
        hatch_turns: 40,
        hatch_points: 100,
    },
    tags: &[ActorCapability::Short, ActorCapability::Prey],
    behaviors: &[
        Behavior::Mating,
        Behavior::Thirst,
        Behavior::Hunger,
        Behavior::Wander,
    ],
    nesting_ground: None,
    wary_eater: false,
    bite: None,
    flies: false,
};
