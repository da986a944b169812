//! Eco points earned by the park

use serde::{Deserialize, Serialize};

/// Running total of eco points
///
/// The simulation only ever adds points; spending belongs to the vending
/// economy, which lives outside this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcoLedger {
    points: u64,
}

impl EcoLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_points(&mut self, points: u64) {
        self.points = self.points.saturating_add(points);
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn can_afford(&self, price: u64) -> bool {
        self.points >= price
    }
}
