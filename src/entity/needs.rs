//! Food and water levels that drive dinosaur behavior

use serde::{Deserialize, Serialize};

/// Hit points and water level with their species maxima
///
/// Levels never drop below zero and healing clamps at the maximum. A level
/// of zero is what makes an actor unconscious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Needs {
    pub hit_points: i32,
    pub max_hit_points: i32,
    pub water_level: i32,
    pub max_water_level: i32,
}

impl Needs {
    pub fn new(hit_points: i32, max_hit_points: i32, water_level: i32, max_water_level: i32) -> Self {
        Self {
            hit_points: hit_points.clamp(0, max_hit_points),
            max_hit_points,
            water_level: water_level.clamp(0, max_water_level),
            max_water_level,
        }
    }

    /// Conscious while both food and water remain
    pub fn is_conscious(&self) -> bool {
        self.hit_points > 0 && self.water_level > 0
    }

    pub fn heal(&mut self, points: i32) {
        self.hit_points = (self.hit_points + points).min(self.max_hit_points);
    }

    pub fn hurt(&mut self, points: i32) {
        self.hit_points = (self.hit_points - points).max(0);
    }

    pub fn drink(&mut self, amount: i32) {
        self.water_level = (self.water_level + amount).min(self.max_water_level);
    }

    pub fn dehydrate(&mut self, amount: i32) {
        self.water_level = (self.water_level - amount).max(0);
    }

    /// Per-turn decay: one point of food and one of water
    pub fn decay(&mut self) {
        self.hurt(1);
        self.dehydrate(1);
    }

    /// Food still missing before the actor is full
    pub fn missing_hit_points(&self) -> i32 {
        self.max_hit_points - self.hit_points
    }
}
