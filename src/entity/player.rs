//! The human park keeper

use std::fmt;

use crate::core::types::{ActorId, IdGenerator};
use crate::entity::capability::ActorCapabilities;
use crate::world::item::Item;

#[derive(Debug, Clone)]
pub struct Player {
    pub id: ActorId,
    pub name: String,
    pub display_char: char,
    pub hit_points: i32,
    pub max_hit_points: i32,
    pub inventory: Vec<Item>,
    pub capabilities: ActorCapabilities,
}

impl Player {
    pub fn new(name: impl Into<String>, hit_points: i32, ids: &mut IdGenerator) -> Self {
        Self {
            id: ids.next_id(),
            name: name.into(),
            display_char: '@',
            hit_points,
            max_hit_points: hit_points,
            inventory: Vec::new(),
            capabilities: ActorCapabilities::new(),
        }
    }

    pub fn is_conscious(&self) -> bool {
        self.hit_points > 0
    }

    pub fn has_item(&self, predicate: impl Fn(&Item) -> bool) -> bool {
        self.inventory.iter().any(predicate)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
