//! Brachiosaur: tall browser that tramples bushes

use super::{CorpseSpec, EggSpec, SpeciesProfile, StartingStats};
use crate::entity::capability::ActorCapability;
use crate::simulation::action_select::Behavior;

pub const PROFILE: SpeciesProfile = SpeciesProfile {
    name: "Brachiosaur",
    display_char: 'b',
    max_hit_points: 160,
    max_water_level: 200,
    baby: StartingStats {
        hit_points: 10,
        water_level: 40,
    },
    adult: StartingStats {
        hit_points: 100,
        water_level: 60,
    },
    adult_age: 50,
    hungry_below: 140,
    breed_at: 70,
    gestation_turns: 30,
    unconscious_survival_turns: 14,
    corpse: CorpseSpec {
        lifetime: 40,
        portion: 100,
    },
    egg: EggSpec {
        hatch_turns: 20,
        hatch_points: 1000,
    },
    tags: &[ActorCapability::Tall, ActorCapability::CrushGround],
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
