//! Optional per-species components
//!
//! Only hunters carry a [`HuntingBlacklist`] and only flyers carry
//! [`FlightStamina`]; both are `Option` fields on the dinosaur.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::ActorId;

/// Prey recently attacked by a hunter, with turns since the attack
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HuntingBlacklist {
    entries: AHashMap<ActorId, u32>,
}

impl HuntingBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the cooldown for `prey`
    pub fn add(&mut self, prey: ActorId) {
        self.entries.insert(prey, 0);
    }

    pub fn contains(&self, prey: ActorId) -> bool {
        self.entries.contains_key(&prey)
    }

    /// Count one turn for every entry, then drop entries that reached `cooldown`
    pub fn advance(&mut self, cooldown: u32) {
        for turns in self.entries.values_mut() {
            *turns += 1;
        }
        self.entries.retain(|_, turns| *turns < cooldown);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Turns of flight left before the flyer must land on a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightStamina {
    pub remaining: u32,
}

impl FlightStamina {
    pub fn new(remaining: u32) -> Self {
        Self { remaining }
    }

    /// Refill on recharging ground, otherwise burn one turn.
    /// Returns whether the flyer can still fly.
    pub fn refresh(&mut self, on_recharge_ground: bool, full: u32) -> bool {
        if on_recharge_ground {
            self.remaining = full;
        } else {
            self.remaining = self.remaining.saturating_sub(1);
        }
        self.remaining > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blacklist_purges_at_cooldown() {
        let mut list = HuntingBlacklist::new();
        let prey = ActorId(7);
        list.add(prey);
        for _ in 0..19 {
            list.advance(20);
            assert!(list.contains(prey));
        }
        list.advance(20);
        assert!(!list.contains(prey));
        assert!(list.is_empty());
    }

    #[test]
    fn test_blacklist_readd_restarts_cooldown() {
        let mut list = HuntingBlacklist::new();
        list.add(ActorId(1));
        list.advance(3);
        list.advance(3);
        list.add(ActorId(1));
        list.advance(3);
        assert!(list.contains(ActorId(1)));
    }

    #[test]
    fn test_flight_drains_and_refills() {
        let mut flight = FlightStamina::new(2);
        assert!(flight.refresh(false, 30));
        assert!(!flight.refresh(false, 30));
        assert!(!flight.refresh(false, 30));
        assert_eq!(flight.remaining, 0);
        assert!(flight.refresh(true, 30));
        assert_eq!(flight.remaining, 30);
    }
}
