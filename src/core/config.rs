//! Simulation configuration with documented constants
//!
//! Every tunable number the turn loop, terrain and actions use lives here.
//! Species numbers (thresholds, starting stats) are data tables in
//! `entity::species` instead, because they define what a species *is*.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{DinoError, Result};

/// Configuration for the simulation systems
///
/// Loadable from TOML; any key left out keeps its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === NEEDS ===
    /// Water level below which a dinosaur looks for water
    pub thirst_threshold: i32,

    /// Water restored by one drink for `tall` species
    pub tall_drink_amount: i32,

    /// Water restored by one drink for everyone else
    pub drink_amount: i32,

    // === HUNTING ===
    /// Turns a prey stays off the hunter's target list after an attack
    ///
    /// The entry is purged on the turn its counter reaches this value, so the
    /// prey is excluded for `hunting_cooldown_turns - 1` turns.
    pub hunting_cooldown_turns: u32,

    /// Chance that an attack misses outright
    pub attack_miss_chance: f64,

    // === FLIGHT ===
    /// Turns of flight granted by resting on flight-recharging ground
    pub flight_stamina_turns: u32,

    // === WEATHER ===
    /// Rain can only start on turns divisible by this interval
    pub rain_interval: u64,

    /// Chance of rain on an eligible turn
    pub rain_chance: f64,

    /// Lower bound of the rainfall fraction
    pub rainfall_min: f64,

    /// Width of the rainfall fraction range above `rainfall_min`
    pub rainfall_span: f64,

    /// Rainfall fraction is multiplied by this to get draws added per lake
    pub rainfall_draw_scale: f64,

    /// Water level every non-player actor gains during a rainy tick
    pub rain_water_bonus: i32,

    // === TERRAIN ===
    /// Chance a fertile tile sprouts a bush when enough bushes surround it
    pub bush_spread_chance: f64,

    /// Neighbouring short plants needed for `bush_spread_chance` to apply
    pub bush_spread_neighbours: usize,

    /// Chance any fertile tile sprouts a bush on its own
    pub bush_spontaneous_chance: f64,

    /// Chance a ground-crushing actor flattens a crushable plant
    pub crush_chance: f64,

    /// Chance a bush grows one fruit per turn
    pub bush_fruit_chance: f64,

    /// Chance a tree grows one fruit per turn
    pub tree_fruit_chance: f64,

    /// Points awarded whenever a tree fruits
    pub tree_fruit_points: u64,

    /// Chance each stored tree fruit falls to the ground per turn
    pub tree_fruit_drop_chance: f64,

    /// Tree age at which it stops being a sapling
    pub tree_young_age: u32,

    /// Tree age at which it is fully grown
    pub tree_mature_age: u32,

    /// Draws a lake holds when created
    pub lake_initial_draws: u32,

    /// Fish a lake holds when created
    pub lake_initial_fish: usize,

    /// Lakes stop spawning fish at this count
    pub lake_max_fish: usize,

    /// Chance a lake spawns one fish per turn
    pub lake_fish_chance: f64,

    /// Water a flyer gains while feeding at a lake
    pub lake_flyer_water: i32,

    // === ITEMS ===
    /// Turns a loose fruit lasts before rotting away
    pub fruit_lifetime: u32,

    /// Portion a tiny eater nibbles off a corpse per meal
    pub corpse_nibble: i32,

    // === PLAYER ===
    /// Hit points the human player starts with
    pub player_hit_points: i32,

    /// Points for hand-feeding a dinosaur
    pub feed_points: u64,

    /// Chance a search of a ground store finds the item
    pub search_success_chance: f64,

    /// Points for a successful search
    pub search_points: u64,

    /// Laser gun reach in graph hops
    pub shoot_range: u32,

    /// Chance a laser shot deals the target's full max hit points
    pub shoot_critical_chance: f64,

    /// Fraction of max hit points dealt by a non-critical shot
    pub shoot_graze_fraction: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            thirst_threshold: 40,
            tall_drink_amount: 80,
            drink_amount: 30,

            hunting_cooldown_turns: 20,
            attack_miss_chance: 0.5,

            flight_stamina_turns: 30,

            rain_interval: 10,
            rain_chance: 0.2,
            rainfall_min: 0.1,
            rainfall_span: 0.5,
            rainfall_draw_scale: 20.0,
            rain_water_bonus: 10,

            bush_spread_chance: 0.1,
            bush_spread_neighbours: 2,
            bush_spontaneous_chance: 0.01,
            crush_chance: 0.5,
            bush_fruit_chance: 0.1,
            tree_fruit_chance: 0.5,
            tree_fruit_points: 1,
            tree_fruit_drop_chance: 0.05,
            tree_young_age: 10,
            tree_mature_age: 20,
            lake_initial_draws: 25,
            lake_initial_fish: 5,
            lake_max_fish: 25,
            lake_fish_chance: 0.6,
            lake_flyer_water: 30,

            fruit_lifetime: 15,
            corpse_nibble: 10,

            player_hit_points: 100,
            feed_points: 10,
            search_success_chance: 0.4,
            search_points: 10,
            shoot_range: 20,
            shoot_critical_chance: 0.5,
            shoot_graze_fraction: 0.8,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let chances = [
            ("attack_miss_chance", self.attack_miss_chance),
            ("rain_chance", self.rain_chance),
            ("bush_spread_chance", self.bush_spread_chance),
            ("bush_spontaneous_chance", self.bush_spontaneous_chance),
            ("crush_chance", self.crush_chance),
            ("bush_fruit_chance", self.bush_fruit_chance),
            ("tree_fruit_chance", self.tree_fruit_chance),
            ("tree_fruit_drop_chance", self.tree_fruit_drop_chance),
            ("lake_fish_chance", self.lake_fish_chance),
            ("search_success_chance", self.search_success_chance),
            ("shoot_critical_chance", self.shoot_critical_chance),
        ];
        for (name, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(DinoError::Configuration(format!(
                    "{name} ({value}) must be within 0.0..=1.0"
                )));
            }
        }

        if self.rain_interval == 0 {
            return Err(DinoError::Configuration(
                "rain_interval must be at least 1".into(),
            ));
        }

        if self.hunting_cooldown_turns == 0 {
            return Err(DinoError::Configuration(
                "hunting_cooldown_turns must be at least 1".into(),
            ));
        }

        if self.tree_young_age >= self.tree_mature_age {
            return Err(DinoError::Configuration(format!(
                "tree_young_age ({}) should be < tree_mature_age ({})",
                self.tree_young_age, self.tree_mature_age
            )));
        }

        if self.rainfall_min < 0.0 || self.rainfall_span < 0.0 {
            return Err(DinoError::Configuration(
                "rainfall bounds must be non-negative".into(),
            ));
        }

        Ok(())
    }
}
