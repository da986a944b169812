//! Species descriptors
//!
//! Each species is a static data table; one generic lifecycle and one
//! behavior chain interpret it. Adding a species means adding a file here
//! and a variant to [`Species`].

pub mod allosaur;
pub mod brachiosaur;
pub mod pterodactyl;
pub mod stegosaur;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entity::capability::{ActorCapabilities, ActorCapability, GroundCapability};
use crate::simulation::action_select::Behavior;

/// The four dinosaur species in the park
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    Stegosaur,
    Brachiosaur,
    Allosaur,
    Pterodactyl,
}

impl Species {
    pub const ALL: [Species; 4] = [
        Species::Stegosaur,
        Species::Brachiosaur,
        Species::Allosaur,
        Species::Pterodactyl,
    ];

    pub fn profile(self) -> &'static SpeciesProfile {
        match self {
            Species::Stegosaur => &stegosaur::PROFILE,
            Species::Brachiosaur => &brachiosaur::PROFILE,
            Species::Allosaur => &allosaur::PROFILE,
            Species::Pterodactyl => &pterodactyl::PROFILE,
        }
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Starting hit points and water level for one growth stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartingStats {
    pub hit_points: i32,
    pub water_level: i32,
}

/// What a species leaves behind when it dies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpseSpec {
    /// Turns before the corpse rots away
    pub lifetime: u32,
    /// Food available to a carnivore eating it whole
    pub portion: i32,
}

/// Egg timing and the ledger reward for a hatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EggSpec {
    pub hatch_turns: u32,
    pub hatch_points: u64,
}

/// Bite damage for hunters; the hunter heals by the same amount on a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiteSpec {
    pub adult_damage: i32,
    pub baby_damage: i32,
}

/// Static descriptor for one species
#[derive(Debug)]
pub struct SpeciesProfile {
    pub name: &'static str,
    /// Lowercase while a baby, uppercased as an adult
    pub display_char: char,

    pub max_hit_points: i32,
    pub max_water_level: i32,
    pub baby: StartingStats,
    pub adult: StartingStats,

    /// Age (in turns) at which a baby becomes an adult
    pub adult_age: u32,
    /// Hit points below which the dinosaur is hungry
    pub hungry_below: i32,
    /// Minimum hit points to be fertile
    pub breed_at: i32,
    pub gestation_turns: u32,
    /// Consecutive unconscious turns survived; one more is fatal
    pub unconscious_survival_turns: u32,

    pub corpse: CorpseSpec,
    pub egg: EggSpec,

    /// Tags every member carries from birth
    pub tags: &'static [ActorCapability],
    /// Behavior chain, highest priority first
    pub behaviors: &'static [Behavior],

    /// Ground the species must stand on to breed and lay
    pub nesting_ground: Option<GroundCapability>,
    /// Only eats loose items when no other actor is adjacent
    pub wary_eater: bool,
    /// Present on hunters; also grants the hunting blacklist
    pub bite: Option<BiteSpec>,
    /// Grants the flight stamina component
    pub flies: bool,
}

impl SpeciesProfile {
    pub fn base_capabilities(&self) -> ActorCapabilities {
        self.tags.iter().copied().collect()
    }

    pub fn is_hunter(&self) -> bool {
        self.bite.is_some()
    }
}
