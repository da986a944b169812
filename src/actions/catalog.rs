//! Action definitions

use crate::core::types::{ActorId, LocationId};

/// Something a dinosaur does with its turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Step through an exit
    Move {
        destination: LocationId,
        direction: String,
    },
    /// Mate with an adjacent partner; the female becomes pregnant
    Mate { partner: ActorId },
    /// Drink from an adjacent water source
    Drink { source: LocationId },
    /// Bite a prey, then leave it alone for a while
    Attack { target: ActorId },
    /// Swallow a tiny prey whole
    Devour { prey: ActorId },
    /// Eat the first edible loose item here
    EatItem,
    /// Eat from the ground's store here
    Forage,
}

/// Broad grouping used for logging and summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Movement,
    Survival,
    Social,
    Combat,
}

impl Action {
    pub fn category(&self) -> ActionCategory {
        match self {
            Action::Move { .. } => ActionCategory::Movement,
            Action::Drink { .. } | Action::EatItem | Action::Forage => ActionCategory::Survival,
            Action::Mate { .. } => ActionCategory::Social,
            Action::Attack { .. } | Action::Devour { .. } => ActionCategory::Combat,
        }
    }
}
