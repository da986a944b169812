//! Pterodactyl: tiny flyer that nests in trees and fishes in lakes
//!
//! Flight is stamina-limited: resting on a tree refills it, every other turn
//! drains it. The `Fly` tag is only present while stamina remains.

use super::{CorpseSpec, EggSpec, SpeciesProfile, StartingStats};
use crate::entity::capability::{ActorCapability, GroundCapability};
use crate::simulation::action_select::Behavior;

pub const PROFILE: SpeciesProfile = SpeciesProfile {
    name: "Pterodactyl",
    display_char: 'p',
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
        portion: 30,
    },
    egg: EggSpec {
        hatch_turns: 50,
        hatch_points: 1000,
    },
    tags: &[ActorCapability::Tiny, ActorCapability::Prey],
    behaviors: &[
        Behavior::RechargeSkill {
            skill: ActorCapability::Fly,
            ground: GroundCapability::RechargeFlight,
        },
        Behavior::Mating,
        Behavior::Thirst,
        Behavior::Hunger,
        Behavior::Wander,
    ],
    nesting_ground: Some(GroundCapability::RechargeFlight),
    wary_eater: true,
    bite: None,
    flies: true,
};
