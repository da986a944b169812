//! Allosaur: the park's only hunter

use super::{BiteSpec, CorpseSpec, EggSpec, SpeciesProfile, StartingStats};
use crate::simulation::action_select::Behavior;

pub const PROFILE: SpeciesProfile = SpeciesProfile {
    name: "Allosaur",
    display_char: 'a',
    max_hit_points: 100,
    max_water_level: 100,
    baby: StartingStats {
        hit_points: 20,
        water_level: 30,
    },
    adult: StartingStats {
        hit_points: 80,
        water_level: 60,
    },
    adult_age: 50,
    hungry_below: 90,
    breed_at: 50,
    gestation_turns: 20,
    unconscious_survival_turns: 14,
    corpse: CorpseSpec {
        lifetime: 20,
        portion: 50,
    },
    egg: EggSpec {
        hatch_turns: 50,
        hatch_points: 1000,
    },
    tags: &[],
    behaviors: &[
        Behavior::Mating,
        Behavior::Thirst,
        Behavior::Predation,
        Behavior::Hunger,
        Behavior::Wander,
    ],
    nesting_ground: None,
    wary_eater: false,
    bite: Some(BiteSpec {
        adult_damage: 20,
        baby_damage: 10,
    }),
    flies: false,
};
